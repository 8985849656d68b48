//! End-to-end terminal scenarios driven through the public API.

use folio_core::config::{LS_PROJECTS_TEXT, MAX_COMMAND_HISTORY, QUICK_COMMANDS, WHOAMI_TEXT};
use folio_core::{
    Command, ExecuteOutcome, HistoryDirection, SessionEvent, TerminalSession, TickOutcome,
    TypingConfig, TypingRevealer,
};

fn last_output(session: &TerminalSession) -> &str {
    &session.lines().last().expect("transcript is empty").output
}

#[test]
fn whoami_appends_identity() {
    let mut session = TerminalSession::new();
    let before = session.lines().len();
    session.execute("whoami");
    assert_eq!(session.lines().len(), before + 1);
    let line = session.lines().last().unwrap();
    assert_eq!(line.command, "whoami");
    assert_eq!(line.output, WHOAMI_TEXT);
}

#[test]
fn cat_missing_file() {
    let mut session = TerminalSession::new();
    session.execute("cat missing.txt");
    assert_eq!(
        last_output(&session),
        "cat: missing.txt: No such file or directory"
    );
}

#[test]
fn ping_social_reports_every_network() {
    let mut session = TerminalSession::new();
    session.execute("ping social");
    let output = last_output(&session);
    for network in ["LinkedIn", "GitHub", "Hashnode", "Email"] {
        assert!(
            output
                .lines()
                .any(|l| l.contains(network) && l.contains("[REACHABLE]")),
            "{} not reachable",
            network
        );
    }
}

#[test]
fn ls_projects_listing() {
    let mut session = TerminalSession::new();
    session.execute("ls projects");
    assert_eq!(last_output(&session), LS_PROJECTS_TEXT);
    assert_eq!(last_output(&session).lines().count(), 4);
}

#[test]
fn whitespace_submissions_change_nothing() {
    let mut session = TerminalSession::new();
    session.execute("help");
    let lines = session.lines().len();
    let history = session.history().len();
    for blank in ["", " ", "\t", "   \n"] {
        assert_eq!(session.execute(blank), ExecuteOutcome::Ignored);
    }
    assert_eq!(session.lines().len(), lines);
    assert_eq!(session.history().len(), history);
}

#[test]
fn history_keeps_newest_fifty() {
    let mut session = TerminalSession::new();
    for i in 0..=MAX_COMMAND_HISTORY {
        session.execute(&format!("echo {}", i));
    }
    let history: Vec<&str> = session.history().iter().collect();
    assert_eq!(history.len(), MAX_COMMAND_HISTORY);
    assert_eq!(history[0], "echo 50");
    assert_eq!(history[MAX_COMMAND_HISTORY - 1], "echo 1");
}

#[test]
fn recall_walks_to_oldest_and_back() {
    let mut session = TerminalSession::new();
    let commands = ["whoami", "ls", "cat about.txt", "help"];
    for cmd in commands {
        session.execute(cmd);
    }

    for _ in 0..commands.len() {
        session.apply(SessionEvent::Recall(HistoryDirection::Up));
    }
    assert_eq!(session.current_command(), "whoami");
    session.apply(SessionEvent::Recall(HistoryDirection::Up));
    assert_eq!(session.current_command(), "whoami");

    for _ in 0..commands.len() - 1 {
        session.apply(SessionEvent::Recall(HistoryDirection::Down));
    }
    assert_eq!(session.current_command(), "help");
    session.apply(SessionEvent::Recall(HistoryDirection::Down));
    assert_eq!(session.current_command(), "");
    session.apply(SessionEvent::Recall(HistoryDirection::Down));
    assert_eq!(session.current_command(), "");
}

#[test]
fn clear_leaves_no_line_for_itself() {
    let mut session = TerminalSession::new();
    session.execute("whoami");
    session.execute("clear");
    assert!(session.lines().is_empty());
    session.execute("help");
    assert_eq!(session.lines().len(), 1);
    assert_eq!(session.lines()[0].command, "help");
}

#[test]
fn quick_commands_are_registered() {
    for quick in QUICK_COMMANDS {
        let name = quick.split(' ').next().unwrap();
        assert!(Command::from_name(name).is_some(), "{}", quick);

        let mut session = TerminalSession::new();
        assert!(matches!(
            session.run_quick(quick),
            ExecuteOutcome::Appended(_)
        ));
        assert!(!last_output(&session).starts_with("Command not found"));
    }
}

#[test]
fn typing_reveals_one_unit_per_tick() {
    let mut revealer = TypingRevealer::new(TypingConfig::new(10, 0, false).unwrap());
    let first = revealer.start("AB").unwrap();

    let after_first = revealer.tick(first.epoch);
    assert_eq!(revealer.displayed(), "A");
    assert!(!revealer.is_complete());

    let second = after_first.next().unwrap();
    assert_eq!(
        revealer.tick(second.epoch),
        TickOutcome::Completed { next: None }
    );
    assert_eq!(revealer.displayed(), "AB");
    assert!(revealer.is_complete());

    assert_eq!(revealer.tick(second.epoch), TickOutcome::Stale);
    assert_eq!(revealer.displayed(), "AB");
}
