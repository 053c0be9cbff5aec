// src/cli/mod.rs

use crate::controller::Controller;
use crate::error::Result;
use colored::Colorize;
use std::io::{BufRead, Write};
use tracing::debug;

pub const BANNER: &str = "🌿 Mental Wellness Support Agent";
pub const FAREWELL: &str = "Sending you a big virtual hug. Take care 💛";
pub const SEPARATOR_WIDTH: usize = 60;

/// Why a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user typed `exit` or `quit`.
    Quit,
    /// Input ran out.
    EndOfInput,
}

pub fn is_exit_command(input: &str) -> bool {
    matches!(input.to_lowercase().as_str(), "exit" | "quit")
}

/// Interactive loop. Controller errors are returned as-is and end the session.
pub fn run_session<R, W>(controller: &mut Controller, input: R, output: &mut W) -> Result<SessionEnd>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", BANNER.green().bold())?;
    writeln!(output, "Type 'exit' to quit.\n")?;

    let mut lines = input.lines();
    loop {
        write!(output, "{} ", "You:".cyan().bold())?;
        output.flush()?;

        let Some(line) = lines.next() else {
            writeln!(output)?;
            debug!("input closed");
            return Ok(SessionEnd::EndOfInput);
        };
        let line = line?;
        let message = line.trim();

        if message.is_empty() {
            continue;
        }

        if is_exit_command(message) {
            writeln!(output, "{} {FAREWELL}", "Agent:".magenta().bold())?;
            return Ok(SessionEnd::Quit);
        }

        let reply = controller.handle(message)?;
        writeln!(
            output,
            "\n{}\n{reply}\n{}\n",
            "Agent:".magenta().bold(),
            "-".repeat(SEPARATOR_WIDTH)
        )?;
    }
}
