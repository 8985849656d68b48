//! Site configuration.
//!
//! Presentation constants for the web front end. Terminal text, section ids
//! and typing defaults live in `folio_core::config` and are shared with the
//! CLI.

use folio_core::content::Link;

// =============================================================================
// Text Assets (loaded at compile time)
// =============================================================================

/// ASCII logo shown above the hero title.
pub const ASCII_LOGO: &str = include_str!("../assets/text/logo.txt");

// =============================================================================
// Branding
// =============================================================================

/// Site name, split for the three-colour wordmark: `jyothi` `ram` `.dev`.
pub const BRAND: [&str; 3] = ["jyothi", "ram", ".dev"];

/// Owner name used in the footer copyright.
pub const OWNER: &str = "Jyothi Ram";

// =============================================================================
// Hero
// =============================================================================

/// Hero typing effects (milliseconds).
pub mod hero {
    pub const TITLE: &str = "Jyothi Ram";
    pub const TITLE_SPEED_MS: u32 = 100;
    pub const TITLE_DELAY_MS: u32 = 500;

    pub const SUBTITLE: &str = "Platform Engineer & DevOps Specialist";
    pub const SUBTITLE_SPEED_MS: u32 = 50;
    pub const SUBTITLE_DELAY_MS: u32 = 2000;

    /// Headline badges under the subtitle: (label, value).
    pub const BADGES: &[(&str, &str)] = &[
        ("Experience:", "2+ Years"),
        ("Projects:", "15+"),
        ("Certifications:", "AWS + KodeKloud"),
    ];
}

/// Falling-digit background.
pub mod matrix {
    /// Number of falling columns.
    pub const COLUMNS: usize = 20;
    /// Fall duration range in seconds: `MIN_DURATION_S..MIN_DURATION_S + DURATION_SPREAD_S`.
    pub const MIN_DURATION_S: f64 = 3.0;
    pub const DURATION_SPREAD_S: f64 = 2.0;
    /// Maximum start delay in seconds.
    pub const MAX_DELAY_S: f64 = 2.0;
}

// =============================================================================
// Navigation
// =============================================================================

/// Header navigation: (section id, label). Ids match `folio_core::config::SECTIONS`.
pub const NAV_ITEMS: &[(&str, &str)] = &[
    ("hero", "Home"),
    ("about", "About"),
    ("experience", "Experience"),
    ("projects", "Projects"),
    ("skills", "Skills"),
    ("achievements", "Achievements"),
    ("contact", "Contact"),
];

/// Footer quick links: (section id, label).
pub const FOOTER_LINKS: &[(&str, &str)] = &[
    ("about", "About"),
    ("experience", "Experience"),
    ("projects", "Projects"),
    ("skills", "Skills"),
    ("contact", "Contact"),
];

/// Profiles linked from the header and footer.
pub const PROFILE_LINKS: &[Link] = &[
    Link {
        label: "GitHub",
        value: "@jyothiram",
        href: "https://github.com/jyothiram",
    },
    Link {
        label: "LinkedIn",
        value: "/in/jyothi-ram",
        href: "https://linkedin.com/in/jyothi-ram",
    },
    Link {
        label: "Email",
        value: "jyothiram261@gmail.com",
        href: "mailto:jyothiram261@gmail.com",
    },
];

/// Fraction of a section that must be visible before it counts as entered.
pub const SECTION_VISIBILITY_THRESHOLD: f64 = 0.1;

// =============================================================================
// Section Display
// =============================================================================

/// Technologies shown on a project card before the "+N more" badge.
pub const TECH_PREVIEW_LEN: usize = 4;

/// Achievement details shown on a card.
pub const ACHIEVEMENT_DETAILS_SHOWN: usize = 3;

/// How long a toast stays on screen (milliseconds).
pub const TOAST_DURATION_MS: u32 = 5000;

/// Footer "Built With" badges.
pub const BUILT_WITH: &[&str] = &["Rust", "Leptos", "WebAssembly", "Stylance"];
