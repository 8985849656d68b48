//! Portfolio content.
//!
//! Static tables behind every page section, plus the small pure helpers the
//! views need (category filters, status labels, file-name labels).

mod data;

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

pub use data::{
    ACHIEVEMENTS, CERTIFICATIONS, CONTACT_INFO, CURRENT_FOCUS, CURRENTLY_LEARNING, EXPERIENCES,
    HIGHLIGHTS, PROJECTS, SKILLS, SOCIAL_LINKS, STATS,
};

// =============================================================================
// Types
// =============================================================================

/// Headline number on the About section.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct Highlight {
    pub title: &'static str,
    pub description: &'static str,
    pub detail: &'static str,
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct ExperienceEntry {
    pub id: &'static str,
    pub company: &'static str,
    pub role: &'static str,
    pub period: &'static str,
    pub location: &'static str,
    pub description: &'static str,
    pub achievements: &'static [&'static str],
    pub technologies: &'static [&'static str],
    pub current: bool,
}

impl ExperienceEntry {
    /// Window title for the entry: `fixplianceai.experience`, `ai_planet.experience`.
    pub fn file_label(&self) -> String {
        static WHITESPACE: LazyLock<Regex> =
            LazyLock::new(|| Regex::new(r"\s+").expect("static regex"));
        format!(
            "{}.experience",
            WHITESPACE.replace_all(&self.company.to_lowercase(), "_")
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    Cloud,
    Devops,
    Monitoring,
    Automation,
}

impl ProjectCategory {
    pub const ALL: [ProjectCategory; 4] =
        [Self::Cloud, Self::Devops, Self::Monitoring, Self::Automation];

    pub fn id(self) -> &'static str {
        match self {
            Self::Cloud => "cloud",
            Self::Devops => "devops",
            Self::Monitoring => "monitoring",
            Self::Automation => "automation",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Cloud => "Cloud",
            Self::Devops => "DevOps",
            Self::Monitoring => "Monitoring",
            Self::Automation => "Automation",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Completed,
    InProgress,
    Planned,
}

impl ProjectStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Completed => "✓ Completed",
            Self::InProgress => "⚡ In Progress",
            Self::Planned => "📋 Planned",
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub long_description: &'static str,
    pub technologies: &'static [&'static str],
    pub features: &'static [&'static str],
    pub github_url: Option<&'static str>,
    pub live_url: Option<&'static str>,
    pub category: ProjectCategory,
    pub status: ProjectStatus,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Languages,
    Cloud,
    Devops,
    Databases,
    Monitoring,
    Security,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 6] = [
        Self::Languages,
        Self::Cloud,
        Self::Devops,
        Self::Databases,
        Self::Monitoring,
        Self::Security,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Languages => "languages",
            Self::Cloud => "cloud",
            Self::Devops => "devops",
            Self::Databases => "databases",
            Self::Monitoring => "monitoring",
            Self::Security => "security",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Languages => "Languages",
            Self::Cloud => "Cloud & AWS",
            Self::Devops => "DevOps Tools",
            Self::Databases => "Databases",
            Self::Monitoring => "Monitoring",
            Self::Security => "Security",
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct Skill {
    pub name: &'static str,
    /// Proficiency in percent, 0..=100.
    pub level: u8,
    pub category: SkillCategory,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct Certification {
    pub name: &'static str,
    pub issuer: &'static str,
    pub year: &'static str,
    pub score: Option<&'static str>,
    pub verified: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AchievementCategory {
    Hackathon,
    Certification,
    Project,
    Recognition,
}

impl AchievementCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hackathon => "hackathon",
            Self::Certification => "certification",
            Self::Project => "project",
            Self::Recognition => "recognition",
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct Achievement {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub category: AchievementCategory,
    pub date: &'static str,
    pub details: &'static [&'static str],
}

/// A contact channel or social profile.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Link {
    pub label: &'static str,
    pub value: &'static str,
    pub href: &'static str,
}

// =============================================================================
// Filtering
// =============================================================================

/// Category filter for the project and skill grids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Filter<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> Filter<T> {
    pub fn matches(&self, category: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == category,
        }
    }
}

impl Filter<ProjectCategory> {
    /// Stable id used in window titles: `all`, `cloud`, ...
    pub fn id(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(category) => category.id(),
        }
    }
}

impl Filter<SkillCategory> {
    pub fn id(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(category) => category.id(),
        }
    }
}

/// Projects in the given category, in declaration order.
pub fn projects_in(filter: Filter<ProjectCategory>) -> impl Iterator<Item = &'static Project> {
    PROJECTS.iter().filter(move |p| filter.matches(&p.category))
}

/// Skills in the given category, in declaration order.
pub fn skills_in(filter: Filter<SkillCategory>) -> impl Iterator<Item = &'static Skill> {
    SKILLS.iter().filter(move |s| filter.matches(&s.category))
}

/// Split a technology list into the shown prefix and the hidden count.
pub fn tech_preview(technologies: &[&'static str], shown: usize) -> (Vec<&'static str>, usize) {
    let visible = technologies.iter().take(shown).copied().collect();
    (visible, technologies.len().saturating_sub(shown))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_label() {
        let labels: Vec<String> = EXPERIENCES.iter().map(|e| e.file_label()).collect();
        assert_eq!(
            labels,
            vec![
                "fixplianceai.experience",
                "upwork.experience",
                "ai_planet.experience"
            ]
        );
    }

    #[test]
    fn test_file_label_collapses_whitespace_runs() {
        let entry = ExperienceEntry {
            company: "Cloud  Native\tLabs",
            ..EXPERIENCES[0]
        };
        assert_eq!(entry.file_label(), "cloud_native_labs.experience");
    }

    #[test]
    fn test_project_filter() {
        assert_eq!(projects_in(Filter::All).count(), PROJECTS.len());
        let cloud: Vec<&str> = projects_in(Filter::Only(ProjectCategory::Cloud))
            .map(|p| p.id)
            .collect();
        assert_eq!(cloud, vec!["ml-platform", "terraform-aws"]);
        assert_eq!(
            projects_in(Filter::Only(ProjectCategory::Monitoring)).count(),
            0
        );
    }

    #[test]
    fn test_skill_filter() {
        let total: usize = SkillCategory::ALL
            .iter()
            .map(|c| skills_in(Filter::Only(*c)).count())
            .sum();
        assert_eq!(total, SKILLS.len());
        assert!(skills_in(Filter::Only(SkillCategory::Databases)).all(|s| s.level <= 100));
    }

    #[test]
    fn test_skill_levels_in_range() {
        assert!(SKILLS.iter().all(|s| s.level <= 100));
    }

    #[test]
    fn test_tech_preview() {
        let (shown, more) = tech_preview(PROJECTS[0].technologies, 4);
        assert_eq!(shown.len(), 4);
        assert_eq!(more, PROJECTS[0].technologies.len() - 4);

        let (shown, more) = tech_preview(&["Rust"], 4);
        assert_eq!(shown, vec!["Rust"]);
        assert_eq!(more, 0);
    }

    #[test]
    fn test_filter_ids() {
        assert_eq!(Filter::<SkillCategory>::All.id(), "all");
        assert_eq!(Filter::Only(SkillCategory::Databases).id(), "databases");
        assert_eq!(Filter::Only(ProjectCategory::Devops).id(), "devops");
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(ProjectStatus::Completed.label(), "✓ Completed");
        assert_eq!(ProjectStatus::InProgress.label(), "⚡ In Progress");
    }

    #[test]
    fn test_only_first_experience_is_current() {
        assert!(EXPERIENCES[0].current);
        assert!(EXPERIENCES[1..].iter().all(|e| !e.current));
    }
}
