use std::{fs, io, process::ExitCode};

use clap::Parser;
use ozl::{get_result, repl::Repl};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// ozl is a small expression-oriented scripting language.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells ozl to read the script from the file named by CONTENTS.
    #[arg(short, long, requires = "contents")]
    file: bool,

    /// Starts an interactive session. This is the default when no CONTENTS
    /// are given.
    #[arg(short, long, conflicts_with = "file")]
    repl: bool,

    contents: Option<String>,
}

/// Installs the stderr log subscriber. The filter comes from `RUST_LOG` and
/// defaults to `warn`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry().with(fmt::layer().with_writer(io::stderr)
                                                    .with_target(true))
                                  .with(filter)
                                  .init();
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let contents = match args.contents {
        Some(contents) if !args.repl => contents,
        _ => {
            let stdin = io::stdin();
            return match Repl::new().run(stdin.lock(), io::stdout()) {
                Ok(()) => ExitCode::SUCCESS,
                Err(e) => {
                    eprintln!("{e}");
                    ExitCode::FAILURE
                },
            };
        },
    };

    let script = if args.file {
        match fs::read_to_string(&contents) {
            Ok(script) => script,
            Err(_) => {
                eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
                return ExitCode::FAILURE;
            },
        }
    } else {
        contents
    };

    match get_result(&script) {
        Ok(value) => {
            println!("{value}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}
