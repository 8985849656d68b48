//! Command registry.
//!
//! This module provides:
//! - `Command` enum, one variant per registered command
//! - `Invocation` for a parsed input line (name plus joined argument)
//! - `run_line` for resolving a raw line straight to its output
//!
//! # Architecture
//!
//! Input is trimmed and lower-cased as a whole, then split on single spaces.
//! The first token selects the command; the remaining tokens are re-joined
//! with single spaces into one argument string. Unknown names resolve to a
//! "command not found" message, so resolution never fails.

mod output;

pub use output::CommandOutput;

use std::fmt;

use crate::config::{
    ABOUT_FILE, CAREER_TEXT, CONTACT_FILE, HELP_TEXT, LS_PROJECTS_TEXT, LS_ROOT_TEXT,
    PING_SOCIAL_TEXT, SKILLS_FILE, WHOAMI_TEXT,
};

// =============================================================================
// Command Enum
// =============================================================================

/// A registered terminal command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    Whoami,
    /// List files. `ls projects` lists the project directory.
    Ls,
    /// Print one of the fixed files.
    Cat,
    /// Career timeline. Unrelated to the command recall buffer.
    History,
    /// Reachability report for `social`.
    Ping,
    Help,
    Clear,
}

impl Command {
    /// All registered commands in help order.
    pub const ALL: [Command; 7] = [
        Self::Whoami,
        Self::Ls,
        Self::Cat,
        Self::History,
        Self::Ping,
        Self::Clear,
        Self::Help,
    ];

    /// Look up a command by its (already lower-cased) name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "whoami" => Some(Self::Whoami),
            "ls" => Some(Self::Ls),
            "cat" => Some(Self::Cat),
            "history" => Some(Self::History),
            "ping" => Some(Self::Ping),
            "help" => Some(Self::Help),
            "clear" => Some(Self::Clear),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Whoami => "whoami",
            Self::Ls => "ls",
            Self::Cat => "cat",
            Self::History => "history",
            Self::Ping => "ping",
            Self::Help => "help",
            Self::Clear => "clear",
        }
    }

    /// Run the command with its joined argument string.
    ///
    /// Pure: the same argument always yields the same output.
    pub fn run(self, arg: &str) -> CommandOutput {
        match self {
            Self::Whoami => CommandOutput::text(WHOAMI_TEXT),
            Self::Ls => run_ls(arg),
            Self::Cat => run_cat(arg),
            Self::History => CommandOutput::text(CAREER_TEXT),
            Self::Ping => run_ping(arg),
            Self::Help => CommandOutput::text(HELP_TEXT),
            Self::Clear => CommandOutput::Clear,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn run_ls(arg: &str) -> CommandOutput {
    if arg == "projects" {
        CommandOutput::text(LS_PROJECTS_TEXT)
    } else {
        CommandOutput::text(LS_ROOT_TEXT)
    }
}

fn run_cat(file: &str) -> CommandOutput {
    match file {
        "skills.txt" => CommandOutput::text(SKILLS_FILE),
        "about.txt" => CommandOutput::text(ABOUT_FILE),
        "contact.info" => CommandOutput::text(CONTACT_FILE),
        _ => CommandOutput::Text(format!("cat: {}: No such file or directory", file)),
    }
}

fn run_ping(service: &str) -> CommandOutput {
    if service == "social" {
        CommandOutput::text(PING_SOCIAL_TEXT)
    } else {
        CommandOutput::Text(format!("ping: {}: Host unreachable", service))
    }
}

// =============================================================================
// Parsing
// =============================================================================

/// A parsed input line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    /// Lower-cased first token.
    pub name: String,
    /// Remaining tokens joined with single spaces (empty when absent).
    pub arg: String,
}

impl Invocation {
    /// Parse a raw line. Returns `None` when it is blank.
    ///
    /// Splitting happens on single spaces after lower-casing, so repeated
    /// spaces produce empty tokens that survive into the argument.
    pub fn parse(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }

        let lowered = trimmed.to_lowercase();
        let mut tokens = lowered.split(' ');
        let name = tokens.next().unwrap_or_default().to_string();
        let arg = tokens.collect::<Vec<_>>().join(" ");
        Some(Self { name, arg })
    }

    /// Resolve against the registry.
    pub fn resolve(&self) -> CommandOutput {
        match Command::from_name(&self.name) {
            Some(cmd) => cmd.run(&self.arg),
            None => not_found(&self.name),
        }
    }
}

/// Message for names that are not registered.
pub fn not_found(name: &str) -> CommandOutput {
    CommandOutput::Text(format!(
        "Command not found: {}\nType 'help' for available commands.",
        name
    ))
}

/// Parse and resolve a raw line. Blank lines resolve to `None`.
pub fn run_line(input: &str) -> Option<CommandOutput> {
    Invocation::parse(input).map(|inv| inv.resolve())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn text(input: &str) -> String {
        run_line(input)
            .and_then(|out| out.as_text().map(str::to_string))
            .expect("expected text output")
    }

    #[test]
    fn test_parse_splits_name_and_arg() {
        let inv = Invocation::parse("ls projects").unwrap();
        assert_eq!(inv.name, "ls");
        assert_eq!(inv.arg, "projects");

        let inv = Invocation::parse("  cat   ").unwrap();
        assert_eq!(inv.name, "cat");
        assert_eq!(inv.arg, "");
    }

    #[test]
    fn test_parse_joins_multi_word_arg() {
        let inv = Invocation::parse("ping social network").unwrap();
        assert_eq!(inv.arg, "social network");
    }

    #[test]
    fn test_parse_keeps_empty_tokens() {
        let inv = Invocation::parse("ls  projects").unwrap();
        assert_eq!(inv.arg, " projects");
        assert_eq!(inv.resolve(), CommandOutput::text(LS_ROOT_TEXT));
    }

    #[test]
    fn test_parse_blank() {
        assert!(Invocation::parse("").is_none());
        assert!(Invocation::parse("   \t ").is_none());
        assert!(run_line("  ").is_none());
    }

    #[test]
    fn test_case_insensitive_name() {
        assert_eq!(text("WHOAMI"), WHOAMI_TEXT);
        assert_eq!(text("Ls Projects"), LS_PROJECTS_TEXT);
        // The argument is lower-cased with the rest of the line.
        assert_eq!(text("CAT SKILLS.TXT"), SKILLS_FILE);
    }

    #[test]
    fn test_ls() {
        assert_eq!(text("ls"), LS_ROOT_TEXT);
        assert_eq!(text("ls anything"), LS_ROOT_TEXT);
        assert_eq!(
            text("ls projects"),
            "Cloud-Native-ML-Platform/\nDevOpsified-GoLang-app/\nKubernetes-Monitoring-Stack/\nTerraform-AWS-Infrastructure/"
        );
    }

    #[test]
    fn test_cat_files() {
        assert_eq!(text("cat skills.txt"), SKILLS_FILE);
        assert_eq!(text("cat about.txt"), ABOUT_FILE);
        assert_eq!(text("cat contact.info"), CONTACT_FILE);
    }

    #[test]
    fn test_cat_missing() {
        assert_eq!(
            text("cat missing.txt"),
            "cat: missing.txt: No such file or directory"
        );
        assert_eq!(text("cat"), "cat: : No such file or directory");
    }

    #[test]
    fn test_ping() {
        let out = text("ping social");
        for service in ["LinkedIn", "GitHub", "Hashnode", "Email"] {
            let line = out
                .lines()
                .find(|l| l.contains(service))
                .unwrap_or_else(|| panic!("no line for {}", service));
            assert!(line.ends_with("[REACHABLE]"));
        }
        assert_eq!(text("ping google"), "ping: google: Host unreachable");
    }

    #[test]
    fn test_history_is_career_timeline() {
        assert!(text("history").starts_with("=== CAREER TIMELINE ==="));
        assert_eq!(text("history ignored"), CAREER_TEXT);
    }

    #[test]
    fn test_clear_signal() {
        assert_eq!(run_line("clear"), Some(CommandOutput::Clear));
        assert_eq!(run_line("CLEAR now"), Some(CommandOutput::Clear));
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            text("sudo rm -rf /"),
            "Command not found: sudo\nType 'help' for available commands."
        );
    }

    #[test]
    fn test_commands_are_deterministic() {
        for cmd in Command::ALL {
            for arg in ["", "projects", "skills.txt", "social", "x y"] {
                assert_eq!(cmd.run(arg), cmd.run(arg));
            }
        }
    }

    #[test]
    fn test_names_round_trip() {
        for cmd in Command::ALL {
            assert_eq!(Command::from_name(cmd.name()), Some(cmd));
            assert!(HELP_TEXT.contains(cmd.name()));
        }
        assert_eq!(Command::from_name("exit"), None);
    }
}
