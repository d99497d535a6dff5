//! Interactive loop: one expression per line.

use std::io::{self, BufRead, Write};

use crate::output::{answer, OutputMode, Reply};

pub const PROMPT: &str = "numera> ";

pub struct ReplSession {
    mode: OutputMode,
    evaluated: usize,
    failed: usize,
}

impl ReplSession {
    pub fn new(mode: OutputMode) -> Self {
        ReplSession {
            mode,
            evaluated: 0,
            failed: 0,
        }
    }

    fn handle_command(&mut self, line: &str) -> (Vec<Reply>, bool) {
        match line {
            ":help" => (
                vec![
                    Reply::Stdout("commands: :help, :quit, :stats".to_string()),
                    Reply::Stdout(
                        "enter an expression like '1 + 2' or 'XIV * II'".to_string(),
                    ),
                ],
                false,
            ),
            ":q" | ":quit" | ":exit" => (Vec::new(), true),
            ":stats" => (
                vec![Reply::Stdout(format!(
                    "evaluated: {}, failed: {}",
                    self.evaluated, self.failed
                ))],
                false,
            ),
            other => (
                vec![Reply::Stderr(format!("error: unknown command '{other}'"))],
                false,
            ),
        }
    }

    /// The prompt to show before reading a line, if any.
    ///
    /// JSON output stays one object per line, so no prompt is shown there.
    pub fn prompt(&self) -> Option<&'static str> {
        match self.mode {
            OutputMode::Text => Some(PROMPT),
            OutputMode::Json => None,
        }
    }

    /// Handles one input line. Returns the replies and whether to exit.
    pub fn handle_line(&mut self, line: &str) -> (Vec<Reply>, bool) {
        let line = line.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() {
            return (Vec::new(), false);
        }
        if line.starts_with(':') {
            return self.handle_command(line.trim());
        }

        let (reply, ok) = answer(line, self.mode);
        self.evaluated += 1;
        if !ok {
            self.failed += 1;
        }
        (vec![reply], false)
    }
}

pub fn run_repl(mode: OutputMode) -> i32 {
    let mut session = ReplSession::new(mode);
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut line = String::new();

    loop {
        if let Some(prompt) = session.prompt() {
            print!("{prompt}");
            if let Err(e) = io::stdout().flush() {
                log::warn!("failed to flush prompt: {e}");
            }
        }

        line.clear();
        match input.read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                eprintln!("error: failed to read input: {e}");
                return 2;
            }
        }

        let (replies, exit) = session.handle_line(&line);
        for reply in &replies {
            reply.emit();
        }
        if exit {
            break;
        }
    }

    log::info!(
        "repl finished after {} evaluations ({} failed)",
        session.evaluated,
        session.failed
    );
    0
}
