use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::{
    error::Error,
    interpreter::{environment::Environment, value::RuntimeValue},
    run,
};

/// The prompt printed before each submission.
pub const PROMPT: &str = "> ";

/// A read-eval-print session over one retained environment.
pub struct Repl {
    env: Environment,
}

impl Default for Repl {
    fn default() -> Self {
        Self::new()
    }
}

impl Repl {
    /// Starts a session with a fresh global scope.
    #[must_use]
    pub fn new() -> Self {
        Self { env: Environment::global() }
    }

    /// The scope shared by every submission of this session.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.env
    }

    /// Evaluates one submission.
    ///
    /// A failed submission leaves the bindings made before the failure in
    /// place and does not end the session.
    ///
    /// # Example
    /// ```
    /// use ozl::{interpreter::value::RuntimeValue, repl::Repl};
    ///
    /// let repl = Repl::new();
    /// repl.eval_line("let a = 2;").unwrap();
    /// assert!(repl.eval_line("b;").is_err());
    ///
    /// assert_eq!(repl.eval_line("a * 10").unwrap(), RuntimeValue::Number(20.0));
    /// ```
    pub fn eval_line(&self, line: &str) -> Result<RuntimeValue, Error> {
        run(line, &self.env)
    }

    /// Runs the session until `input` is exhausted, an empty line is read, or
    /// the user types `exit`.
    ///
    /// Results and errors are both written to `output`.
    ///
    /// # Errors
    /// Returns an error only if reading or writing fails.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, mut output: W) -> io::Result<()> {
        writeln!(output, "\nozl repl v{}", env!("CARGO_PKG_VERSION"))?;

        let mut line = String::new();
        loop {
            write!(output, "{PROMPT}")?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                break;
            }

            let submission = line.trim();
            if submission.is_empty() || submission == "exit" {
                break;
            }

            match self.eval_line(submission) {
                Ok(value) => writeln!(output, "{value}")?,
                Err(e) => {
                    debug!(error = %e, "submission failed");
                    writeln!(output, "{e}")?;
                },
            }
        }

        Ok(())
    }
}
