//! Centralized icon definitions.
//!
//! Maps semantic icon names to Lucide icons so components never name an
//! icon set directly.

use icondata::Icon;

pub const TERMINAL: Icon = icondata::LuTerminal;
pub const MENU: Icon = icondata::LuMenu;
pub const CLOSE: Icon = icondata::LuX;
pub const CHEVRON_DOWN: Icon = icondata::LuChevronDown;
pub const EXTERNAL_LINK: Icon = icondata::LuExternalLink;
pub const SEND: Icon = icondata::LuSend;

// Contact
pub const GITHUB: Icon = icondata::LuGithub;
pub const LINKEDIN: Icon = icondata::LuLinkedin;
pub const MAIL: Icon = icondata::LuMail;
pub const PHONE: Icon = icondata::LuPhone;
pub const LOCATION: Icon = icondata::LuMapPin;
pub const GLOBE: Icon = icondata::LuGlobe;
pub const MESSAGE: Icon = icondata::LuMessageSquare;
pub const USER: Icon = icondata::LuUser;
pub const COFFEE: Icon = icondata::LuCoffee;
pub const HEART: Icon = icondata::LuHeart;

// Sections
pub const GRADUATION: Icon = icondata::LuGraduationCap;
pub const CLOUD: Icon = icondata::LuCloud;
pub const CODE: Icon = icondata::LuCode;
pub const TROPHY: Icon = icondata::LuTrophy;
pub const AWARD: Icon = icondata::LuAward;
pub const STAR: Icon = icondata::LuStar;
pub const TARGET: Icon = icondata::LuTarget;
pub const ZAP: Icon = icondata::LuZap;
pub const USERS: Icon = icondata::LuUsers;
pub const BUILDING: Icon = icondata::LuBuilding;
pub const CALENDAR: Icon = icondata::LuCalendar;
pub const GIT_BRANCH: Icon = icondata::LuGitBranch;
pub const DATABASE: Icon = icondata::LuDatabase;
pub const MONITOR: Icon = icondata::LuMonitor;
pub const SHIELD: Icon = icondata::LuShield;

/// Icon for a profile or contact link, keyed by its label.
pub fn for_link(label: &str) -> Icon {
    match label {
        "GitHub" => GITHUB,
        "LinkedIn" => LINKEDIN,
        "Email" => MAIL,
        "Phone" => PHONE,
        "Location" => LOCATION,
        "Hashnode" => MESSAGE,
        _ => GLOBE,
    }
}
