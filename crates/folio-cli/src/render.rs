//! Plain-text rendering of transcript lines.

use std::io::{self, Write};

use folio_core::{ExecuteOutcome, TerminalSession, TranscriptLine};

/// ANSI sequence erasing the screen and homing the cursor.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Write one transcript line. Lines without a command (the welcome banner)
/// have no prompt.
pub fn line(out: &mut impl Write, line: &TranscriptLine) -> io::Result<()> {
    if !line.command.is_empty() {
        writeln!(out, "$ {}", line.command)?;
    }
    writeln!(out, "{}", line.output)
}

/// Write whatever an `execute` call changed.
pub fn outcome(
    out: &mut impl Write,
    session: &TerminalSession,
    outcome: ExecuteOutcome,
) -> io::Result<()> {
    match outcome {
        ExecuteOutcome::Ignored => Ok(()),
        ExecuteOutcome::Cleared => write!(out, "{}", CLEAR_SCREEN),
        ExecuteOutcome::Appended(id) => match session.lines().iter().find(|l| l.id == id) {
            Some(l) => line(out, l),
            None => Ok(()),
        },
    }
}
