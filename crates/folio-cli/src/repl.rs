//! Line-oriented prompt loop.

use std::io::{self, BufRead, Write};

use folio_core::config::PROMPT;
use folio_core::{HistoryDirection, TerminalSession};

use crate::render;

/// Line-mode stand-ins for the arrow keys.
const RECALL_OLDER: &str = ":up";
const RECALL_NEWER: &str = ":down";

/// Read lines until EOF or `exit`, executing each one.
///
/// `:up` / `:down` step through history and print the recalled entry;
/// an empty line then submits the recalled command, as pressing enter on a
/// recalled line would in the browser.
pub fn run(
    input: impl BufRead,
    out: &mut impl Write,
    session: &mut TerminalSession,
    echo: bool,
) -> io::Result<()> {
    prompt(out, echo)?;
    for line in input.lines() {
        let line = line?;
        match line.trim() {
            "exit" | "quit" => break,
            RECALL_OLDER | RECALL_NEWER => {
                let direction = if line.trim() == RECALL_OLDER {
                    HistoryDirection::Up
                } else {
                    HistoryDirection::Down
                };
                session.navigate_history(direction);
                if echo {
                    writeln!(out, "{}", session.current_command())?;
                }
            }
            "" => {
                let pending = session.current_command().to_string();
                let outcome = session.execute(&pending);
                if echo {
                    render::outcome(out, session, outcome)?;
                }
            }
            _ => {
                session.set_current_command(line.as_str());
                let outcome = session.execute(&line);
                if echo {
                    render::outcome(out, session, outcome)?;
                }
            }
        }
        prompt(out, echo)?;
    }
    Ok(())
}

fn prompt(out: &mut impl Write, echo: bool) -> io::Result<()> {
    if echo {
        write!(out, "{} ", PROMPT)?;
        out.flush()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_script(script: &str) -> (TerminalSession, String) {
        let mut session = TerminalSession::new();
        let mut out = Vec::new();
        run(script.as_bytes(), &mut out, &mut session, true).unwrap();
        (session, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_executes_lines_until_exit() {
        let (session, out) = run_script("whoami\nexit\nhelp\n");
        assert_eq!(session.lines().len(), 2);
        assert!(out.contains("$ whoami"));
        assert!(!out.contains("AVAILABLE COMMANDS"));
    }

    #[test]
    fn test_recall_then_submit() {
        let (session, out) = run_script("ls projects\n:up\n\n");
        assert_eq!(session.lines().len(), 3);
        assert_eq!(session.lines()[1].command, "ls projects");
        assert_eq!(session.lines()[2].command, "ls projects");
        assert_eq!(session.history().len(), 2);
        assert_eq!(session.current_command(), "");

        let rendered = format!("{} $ ls projects", PROMPT);
        let recalled = format!("{} ls projects", PROMPT);
        assert_eq!(out.lines().filter(|l| *l == rendered).count(), 2);
        assert_eq!(out.lines().filter(|l| *l == recalled).count(), 1);
    }

    #[test]
    fn test_blank_line_without_recall_is_ignored() {
        let (session, _) = run_script("\n\n");
        assert_eq!(session.lines().len(), 1);
        assert!(session.history().is_empty());
    }
}
