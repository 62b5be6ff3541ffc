use std::io::Cursor;

use ozl::repl::{PROMPT, Repl};
use pretty_assertions::assert_eq;

fn session(input: &str) -> String {
    let mut output = Vec::new();
    Repl::new().run(Cursor::new(input), &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

fn banner() -> String {
    format!("\nozl repl v{}\n", env!("CARGO_PKG_VERSION"))
}

#[test]
fn declarations_persist_across_lines() {
    let output = session("let x = 5;\nx + 1\nexit\nx\n");

    assert_eq!(output, format!("{}{PROMPT}5\n{PROMPT}6\n{PROMPT}", banner()));
}

#[test]
fn errors_do_not_end_the_session() {
    let output = session("y\n1 + 1\n");

    assert_eq!(output,
               format!("{}{PROMPT}Cannot resolve 'y' as it does not exist.\n{PROMPT}2\n{PROMPT}",
                       banner()));
}

#[test]
fn empty_line_ends_the_session() {
    let output = session("1\n\n2\n");

    assert_eq!(output, format!("{}{PROMPT}1\n{PROMPT}", banner()));
}

#[test]
fn eval_line_shares_one_environment() {
    let repl = Repl::new();

    repl.eval_line("const name = 1;").unwrap();

    assert!(repl.environment().is_constant("name"));
    assert!(repl.eval_line("name = 2;").is_err());
}
