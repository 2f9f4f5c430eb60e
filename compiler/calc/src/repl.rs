//! Interactive read-eval-print loop.
//!
//! [`ReplSession`] decides what each line means; [`run_repl`] owns the
//! terminal. Lines are evaluated independently, so the session keeps no
//! state between them.

use calc_eval::{calc, ErrorKind};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use thiserror::Error;

/// The line that ends a session
pub const EXIT_COMMAND: &str = "exit";

#[derive(Debug, Error)]
pub enum ReplError {
    #[error("failed to initialize repl: {0}")]
    Init(#[source] ReadlineError),
    #[error("failed to read expression from console: {0}")]
    Read(#[source] ReadlineError),
}

/// What the driver should do after one line
#[derive(Debug, Clone, PartialEq)]
pub enum ReplOutcome {
    /// Blank line, nothing to report
    Skip,
    /// `<input> = <result>`
    Value { input: String, value: f64 },
    /// Evaluation failed
    Failed { input: String, error: ErrorKind },
    /// The user asked to leave
    Exit,
}

impl ReplOutcome {
    /// The line printed to stdout for a successful evaluation
    pub fn render(&self) -> Option<String> {
        match self {
            ReplOutcome::Value { input, value } => Some(format!("{input} = {value}")),
            _ => None,
        }
    }
}

/// State carried between lines of one interactive session
#[derive(Debug, Default)]
pub struct ReplSession {
    evaluated: usize,
}

impl ReplSession {
    /// Start a session with nothing evaluated
    pub fn new() -> Self {
        Self::default()
    }

    /// Prompt shown before each line
    pub fn prompt(&self) -> &'static str {
        "calc> "
    }

    /// Number of lines evaluated so far, successful or not
    pub fn evaluated(&self) -> usize {
        self.evaluated
    }

    /// Trim and evaluate one line of input
    pub fn handle_line(&mut self, line: &str) -> ReplOutcome {
        let input = line.trim();
        if input == EXIT_COMMAND {
            return ReplOutcome::Exit;
        }
        if input.is_empty() {
            return ReplOutcome::Skip;
        }

        self.evaluated += 1;
        match calc(input) {
            Ok(value) => ReplOutcome::Value {
                input: input.to_string(),
                value,
            },
            Err(error) => ReplOutcome::Failed {
                input: input.to_string(),
                error,
            },
        }
    }
}

/// Read and evaluate lines until `exit` or end of input
pub fn run_repl() -> Result<(), ReplError> {
    let mut rl = Editor::<(), DefaultHistory>::new().map_err(ReplError::Init)?;
    let mut session = ReplSession::new();
    log::info!("input expression, or '{EXIT_COMMAND}' to quit");

    loop {
        match rl.readline(session.prompt()) {
            Ok(line) => {
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    let _ = rl.add_history_entry(trimmed);
                }
                let outcome = session.handle_line(&line);
                match &outcome {
                    ReplOutcome::Exit => {
                        log::info!(
                            "application was successfully closed after {} expressions",
                            session.evaluated()
                        );
                        return Ok(());
                    }
                    ReplOutcome::Failed { input, error } => {
                        log::error!("{input} calculation failed with error: {error}");
                    }
                    ReplOutcome::Value { .. } | ReplOutcome::Skip => {}
                }
                if let Some(text) = outcome.render() {
                    println!("{text}");
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => return Ok(()),
            Err(e) => return Err(ReplError::Read(e)),
        }
    }
}
