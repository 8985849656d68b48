//! Terminal session state.
//!
//! [`TerminalSession`] is the single owner of everything the terminal widget
//! shows: the transcript, the input buffer and the recall history. Every
//! mutation goes through a method (or [`TerminalSession::apply`]) so the
//! clear/recall rules can be tested without a renderer.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::commands::{CommandOutput, run_line};
use crate::config::{MAX_COMMAND_HISTORY, WELCOME_TEXT};

// ============================================================================
// Clock
// ============================================================================

/// Source of timestamps for transcript lines.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

// ============================================================================
// Transcript
// ============================================================================

/// One executed command and its output.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TranscriptLine {
    /// Time-derived id, strictly increasing within a session.
    pub id: u64,
    /// Submitted text (trimmed). Empty for the welcome banner.
    pub command: String,
    pub output: String,
    pub timestamp: DateTime<Utc>,
}

/// Direction of history recall.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistoryDirection {
    /// Towards older entries (arrow up).
    Up,
    /// Towards newer entries (arrow down).
    Down,
}

/// Result of submitting a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExecuteOutcome {
    /// Blank input; nothing changed.
    Ignored,
    /// A transcript line with this id was appended.
    Appended(u64),
    /// The transcript was erased.
    Cleared,
}

/// Input events, for driving the session as a state machine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    /// Submit a raw line (enter key or quick command).
    Submit(String),
    /// Recall an older or newer history entry.
    Recall(HistoryDirection),
    /// Overwrite the input buffer (keystrokes).
    Edit(String),
}

// ============================================================================
// Command History
// ============================================================================

/// Submitted commands, most recent first, with a recall cursor.
#[derive(Clone, Debug)]
pub struct CommandHistory {
    entries: VecDeque<String>,
    /// `None` means "not recalling" (index -1).
    cursor: Option<usize>,
    capacity: usize,
}

impl CommandHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            cursor: None,
            capacity,
        }
    }

    /// Push to the front, evicting the oldest entry on overflow.
    /// Resets the cursor.
    pub fn push(&mut self, command: impl Into<String>) {
        self.entries.push_front(command.into());
        self.entries.truncate(self.capacity);
        self.cursor = None;
    }

    /// Move the cursor and return the new input buffer contents, or `None`
    /// when the cursor is already at the boundary.
    ///
    /// Moving down from the newest entry returns `Some("")` (fresh line).
    pub fn recall(&mut self, direction: HistoryDirection) -> Option<String> {
        match direction {
            HistoryDirection::Up => {
                let next = self.cursor.map_or(0, |i| i + 1);
                let entry = self.entries.get(next)?;
                self.cursor = Some(next);
                Some(entry.clone())
            }
            HistoryDirection::Down => match self.cursor? {
                0 => {
                    self.cursor = None;
                    Some(String::new())
                }
                i => {
                    self.cursor = Some(i - 1);
                    self.entries.get(i - 1).cloned()
                }
            },
        }
    }

    pub fn reset_cursor(&mut self) {
        self.cursor = None;
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries, most recent first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }
}

impl Default for CommandHistory {
    fn default() -> Self {
        Self::new(MAX_COMMAND_HISTORY)
    }
}

// ============================================================================
// TerminalSession
// ============================================================================

/// Terminal session: transcript, input buffer and history.
#[derive(Clone, Debug)]
pub struct TerminalSession<C = SystemClock> {
    lines: Vec<TranscriptLine>,
    current_command: String,
    history: CommandHistory,
    last_id: Option<u64>,
    clock: C,
}

impl TerminalSession<SystemClock> {
    /// Creates a session whose transcript holds the welcome banner.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for TerminalSession<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> TerminalSession<C> {
    pub fn with_clock(clock: C) -> Self {
        let mut session = Self {
            lines: Vec::new(),
            current_command: String::new(),
            history: CommandHistory::default(),
            last_id: None,
            clock,
        };
        session.append("", WELCOME_TEXT);
        session
    }

    /// Submit a raw line.
    ///
    /// Blank input is ignored entirely. Otherwise the trimmed line enters
    /// the history, the registry resolves it, and the transcript either
    /// gains one line or is erased (for `clear`). The input buffer is
    /// emptied in both cases.
    pub fn execute(&mut self, raw: &str) -> ExecuteOutcome {
        let trimmed = raw.trim();
        let Some(output) = run_line(trimmed) else {
            return ExecuteOutcome::Ignored;
        };

        self.history.push(trimmed);
        tracing::debug!(command = trimmed, "executing terminal command");

        match output {
            CommandOutput::Clear => {
                self.lines.clear();
                self.current_command.clear();
                ExecuteOutcome::Cleared
            }
            CommandOutput::Text(text) => {
                let id = self.append(trimmed, text);
                self.current_command.clear();
                ExecuteOutcome::Appended(id)
            }
        }
    }

    /// Step through history. At either boundary the buffer is untouched.
    pub fn navigate_history(&mut self, direction: HistoryDirection) {
        if let Some(recalled) = self.history.recall(direction) {
            tracing::debug!(?direction, cursor = ?self.history.cursor(), "history recall");
            self.current_command = recalled;
        }
    }

    /// Overwrite the input buffer. History and cursor are left alone.
    pub fn set_current_command(&mut self, text: impl Into<String>) {
        self.current_command = text.into();
    }

    /// Activate a quick command: fill the buffer, then submit it.
    pub fn run_quick(&mut self, command: &str) -> ExecuteOutcome {
        self.set_current_command(command);
        self.execute(command)
    }

    /// Apply one input event.
    pub fn apply(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::Submit(raw) => {
                self.execute(&raw);
            }
            SessionEvent::Recall(direction) => self.navigate_history(direction),
            SessionEvent::Edit(text) => self.set_current_command(text),
        }
    }

    pub fn lines(&self) -> &[TranscriptLine] {
        &self.lines
    }

    pub fn current_command(&self) -> &str {
        &self.current_command
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    fn append(&mut self, command: &str, output: impl Into<String>) -> u64 {
        let timestamp = self.clock.now();
        let millis = u64::try_from(timestamp.timestamp_millis()).unwrap_or(0);
        let id = match self.last_id {
            Some(last) if millis <= last => last + 1,
            _ => millis,
        };
        self.last_id = Some(id);
        self.lines.push(TranscriptLine {
            id,
            command: command.to_string(),
            output: output.into(),
            timestamp,
        });
        id
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WHOAMI_TEXT;
    use chrono::TimeZone;

    /// Clock frozen at one instant, so ids must be bumped.
    #[derive(Clone, Copy)]
    struct FixedClock;

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            Utc.timestamp_millis_opt(1_700_000_000_000).unwrap()
        }
    }

    fn session() -> TerminalSession<FixedClock> {
        TerminalSession::with_clock(FixedClock)
    }

    #[test]
    fn test_new_session_has_welcome_line() {
        let s = session();
        assert_eq!(s.lines().len(), 1);
        assert_eq!(s.lines()[0].command, "");
        assert_eq!(s.lines()[0].output, WELCOME_TEXT);
        assert!(s.history().is_empty());
        assert_eq!(s.current_command(), "");
    }

    #[test]
    fn test_execute_appends_line() {
        let mut s = session();
        s.set_current_command("whoami");
        let outcome = s.execute("  whoami ");
        assert!(matches!(outcome, ExecuteOutcome::Appended(_)));
        let last = s.lines().last().unwrap();
        assert_eq!(last.command, "whoami");
        assert_eq!(last.output, WHOAMI_TEXT);
        assert_eq!(s.current_command(), "");
        assert_eq!(s.history().get(0), Some("whoami"));
    }

    #[test]
    fn test_blank_input_is_ignored() {
        let mut s = session();
        s.set_current_command("   ");
        assert_eq!(s.execute("   "), ExecuteOutcome::Ignored);
        assert_eq!(s.execute(""), ExecuteOutcome::Ignored);
        assert_eq!(s.lines().len(), 1);
        assert!(s.history().is_empty());
        // Buffer is not cleared by an ignored submit.
        assert_eq!(s.current_command(), "   ");
    }

    #[test]
    fn test_clear_empties_transcript() {
        let mut s = session();
        s.execute("whoami");
        s.execute("help");
        s.set_current_command("clear");
        assert_eq!(s.execute("clear"), ExecuteOutcome::Cleared);
        assert!(s.lines().is_empty());
        assert_eq!(s.current_command(), "");
        assert_eq!(s.history().get(0), Some("clear"));
    }

    #[test]
    fn test_ids_are_unique_and_increasing() {
        let mut s = session();
        for _ in 0..5 {
            s.execute("ls");
        }
        let ids: Vec<u64> = s.lines().iter().map(|l| l.id).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(ids[0], 1_700_000_000_000);
    }

    #[test]
    fn test_ids_stay_increasing_after_clear() {
        let mut s = session();
        s.execute("ls");
        let before = s.lines().last().unwrap().id;
        s.execute("clear");
        s.execute("ls");
        assert!(s.lines()[0].id > before);
    }

    #[test]
    fn test_history_cap() {
        let mut s = session();
        for i in 0..51 {
            s.execute(&format!("cmd{}", i));
        }
        assert_eq!(s.history().len(), MAX_COMMAND_HISTORY);
        assert_eq!(s.history().get(0), Some("cmd50"));
        assert_eq!(s.history().get(49), Some("cmd1"));
        assert!(s.history().iter().all(|c| c != "cmd0"));
    }

    #[test]
    fn test_navigate_up_to_oldest_then_noop() {
        let mut s = session();
        for cmd in ["whoami", "ls", "help"] {
            s.execute(cmd);
        }
        s.navigate_history(HistoryDirection::Up);
        assert_eq!(s.current_command(), "help");
        s.navigate_history(HistoryDirection::Up);
        assert_eq!(s.current_command(), "ls");
        s.navigate_history(HistoryDirection::Up);
        assert_eq!(s.current_command(), "whoami");
        assert_eq!(s.history().cursor(), Some(2));

        s.set_current_command("whoami edited");
        s.navigate_history(HistoryDirection::Up);
        assert_eq!(s.current_command(), "whoami edited");
        assert_eq!(s.history().cursor(), Some(2));
    }

    #[test]
    fn test_navigate_down_to_fresh_line() {
        let mut s = session();
        s.execute("whoami");
        s.execute("ls");
        s.navigate_history(HistoryDirection::Up);
        s.navigate_history(HistoryDirection::Up);
        s.navigate_history(HistoryDirection::Down);
        assert_eq!(s.current_command(), "ls");
        s.navigate_history(HistoryDirection::Down);
        assert_eq!(s.current_command(), "");
        assert_eq!(s.history().cursor(), None);

        s.set_current_command("typing");
        s.navigate_history(HistoryDirection::Down);
        assert_eq!(s.current_command(), "typing");
    }

    #[test]
    fn test_navigate_empty_history() {
        let mut s = session();
        s.set_current_command("abc");
        s.navigate_history(HistoryDirection::Up);
        s.navigate_history(HistoryDirection::Down);
        assert_eq!(s.current_command(), "abc");
    }

    #[test]
    fn test_recall_does_not_mutate_history() {
        let mut s = session();
        s.execute("whoami");
        s.execute("ls");
        let before: Vec<String> = s.history().iter().map(str::to_string).collect();
        s.navigate_history(HistoryDirection::Up);
        s.navigate_history(HistoryDirection::Up);
        s.navigate_history(HistoryDirection::Down);
        let after: Vec<String> = s.history().iter().map(str::to_string).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_execute_resets_cursor() {
        let mut s = session();
        s.execute("whoami");
        s.execute("ls");
        s.navigate_history(HistoryDirection::Up);
        s.navigate_history(HistoryDirection::Up);
        s.execute("help");
        assert_eq!(s.history().cursor(), None);
        s.navigate_history(HistoryDirection::Up);
        assert_eq!(s.current_command(), "help");
    }

    #[test]
    fn test_set_current_command_keeps_cursor() {
        let mut s = session();
        s.execute("whoami");
        s.navigate_history(HistoryDirection::Up);
        s.set_current_command("x");
        assert_eq!(s.history().cursor(), Some(0));
        assert_eq!(s.history().len(), 1);
    }

    #[test]
    fn test_quick_command_matches_manual_submit() {
        let mut quick = session();
        let mut manual = session();
        quick.run_quick("ls projects");
        manual.set_current_command("ls projects");
        manual.execute("ls projects");

        assert_eq!(quick.lines().len(), manual.lines().len());
        assert_eq!(quick.lines()[1].command, manual.lines()[1].command);
        assert_eq!(quick.lines()[1].output, manual.lines()[1].output);
        assert_eq!(quick.current_command(), manual.current_command());
    }

    #[test]
    fn test_apply_events() {
        let mut s = session();
        s.apply(SessionEvent::Edit("who".into()));
        assert_eq!(s.current_command(), "who");
        s.apply(SessionEvent::Submit("whoami".into()));
        assert_eq!(s.lines().len(), 2);
        s.apply(SessionEvent::Recall(HistoryDirection::Up));
        assert_eq!(s.current_command(), "whoami");
        s.apply(SessionEvent::Recall(HistoryDirection::Down));
        assert_eq!(s.current_command(), "");
    }

    #[test]
    fn test_transcript_line_serializes() {
        let mut s = session();
        s.execute("ping nowhere");
        let json = serde_json::to_value(s.lines().last().unwrap()).unwrap();
        assert_eq!(json["command"], "ping nowhere");
        assert_eq!(json["output"], "ping: nowhere: Host unreachable");
        assert!(json["timestamp"].is_string());
    }
}
