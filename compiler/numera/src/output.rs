//! Turning evaluation outcomes into printable lines.

use numera_eval::{evaluate, EvalError};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Text,
    Json,
}

/// A line to print, tagged with the stream it belongs on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Stdout(String),
    Stderr(String),
}

impl Reply {
    pub fn emit(&self) {
        match self {
            Reply::Stdout(line) => println!("{line}"),
            Reply::Stderr(line) => eprintln!("{line}"),
        }
    }
}

/// Machine-readable outcome of one evaluation.
#[derive(Debug, Serialize)]
pub struct EvalReport<'a> {
    pub input: &'a str,
    pub result: Option<String>,
    pub error: Option<String>,
    pub kind: Option<&'static str>,
}

impl<'a> EvalReport<'a> {
    pub fn new(input: &'a str, outcome: &Result<String, EvalError>) -> Self {
        match outcome {
            Ok(result) => EvalReport {
                input,
                result: Some(result.clone()),
                error: None,
                kind: None,
            },
            Err(err) => EvalReport {
                input,
                result: None,
                error: Some(err.to_string()),
                kind: Some(err.kind().as_str()),
            },
        }
    }
}

/// Evaluates `line` and describes the outcome.
///
/// Returns the reply and whether evaluation succeeded.
pub fn answer(line: &str, mode: OutputMode) -> (Reply, bool) {
    let outcome = evaluate(line);
    let ok = outcome.is_ok();
    let reply = match mode {
        OutputMode::Text => match outcome {
            Ok(result) => Reply::Stdout(format!("Result: {result}")),
            Err(err) => Reply::Stderr(format!("Error: {err}")),
        },
        OutputMode::Json => match serde_json::to_string(&EvalReport::new(line, &outcome)) {
            Ok(json) => Reply::Stdout(json),
            Err(e) => Reply::Stderr(format!("error: failed to serialize JSON: {e}")),
        },
    };
    (reply, ok)
}
