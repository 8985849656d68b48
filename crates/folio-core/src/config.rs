//! Core configuration.
//!
//! Centralizes the constants shared by the web site and the CLI.
//! Canned command output is loaded at compile time using `include_str!`.

// =============================================================================
// Text Assets (loaded at compile time)
// =============================================================================

/// Banner shown as the first transcript line of a new session.
pub const WELCOME_TEXT: &str = include_str!("../assets/text/welcome.txt");

/// Output of `whoami`.
pub const WHOAMI_TEXT: &str = include_str!("../assets/text/whoami.txt");

/// Output of `ls` without the `projects` argument.
pub const LS_ROOT_TEXT: &str = include_str!("../assets/text/ls_root.txt");

/// Output of `ls projects`.
pub const LS_PROJECTS_TEXT: &str = include_str!("../assets/text/ls_projects.txt");

/// Contents of `skills.txt`.
pub const SKILLS_FILE: &str = include_str!("../assets/text/skills.txt");

/// Contents of `about.txt`.
pub const ABOUT_FILE: &str = include_str!("../assets/text/about.txt");

/// Contents of `contact.info`.
pub const CONTACT_FILE: &str = include_str!("../assets/text/contact.info");

/// Career timeline printed by the `history` command.
pub const CAREER_TEXT: &str = include_str!("../assets/text/career.txt");

/// Reachability report printed by `ping social`.
pub const PING_SOCIAL_TEXT: &str = include_str!("../assets/text/ping_social.txt");

/// Command reference printed by `help`.
pub const HELP_TEXT: &str = include_str!("../assets/text/help.txt");

// =============================================================================
// Terminal Configuration
// =============================================================================

/// Prompt shown in the terminal title bar.
pub const PROMPT: &str = "jyothiram@devops-portfolio:~$";

/// Maximum number of submitted commands kept for recall.
pub const MAX_COMMAND_HISTORY: usize = 50;

/// One-click shortcuts offered under the terminal.
pub const QUICK_COMMANDS: &[&str] = &[
    "whoami",
    "ls projects",
    "cat skills.txt",
    "history",
    "ping social",
];

// =============================================================================
// Typing Effect Configuration
// =============================================================================

/// Typing effect timing defaults (milliseconds).
pub mod typing {
    /// Delay between two revealed characters.
    pub const DEFAULT_SPEED_MS: u32 = 50;
    /// Delay before the first character is revealed.
    pub const DEFAULT_DELAY_MS: u32 = 0;
    /// Pause between the end of one cycle and the restart when repeating.
    pub const REPEAT_PAUSE_MS: u32 = 2000;
    /// Pause between two items of a multi-line typing effect.
    pub const MULTI_ITEM_PAUSE_MS: u32 = 500;
}

// =============================================================================
// Scroll Spy Configuration
// =============================================================================

/// Section ids in document order.
pub const SECTIONS: &[&str] = &[
    "hero",
    "about",
    "experience",
    "projects",
    "skills",
    "achievements",
    "contact",
];

/// Default margin (pixels) used for the viewport window and scroll targets.
pub const DEFAULT_SCROLL_OFFSET: f64 = 100.0;

// =============================================================================
// Contact Form
// =============================================================================

/// Simulated submission latency for the contact form (milliseconds).
pub const CONTACT_SUBMIT_DELAY_MS: u32 = 2000;
