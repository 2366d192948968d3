//! Portfolio Content
//!
//! Static page data loaded once at startup and never mutated afterwards.
//! Comes either from a JSON file or from the built-in defaults; both paths
//! run the same validation.
//!
//! Validation enforces what keyed lists need: unique category labels,
//! unique skills per category, unique project titles, unique tags per
//! project. It also checks that links point where they should (projects
//! to the web, hero actions to anchored sections).

mod builtin;
pub mod model;

pub use model::*;

use model::is_web_url;

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{SiteError, SiteResult};
use crate::reveal::SectionId;

impl PortfolioContent {
    /// Load content from a JSON file and validate it.
    pub fn load(path: &Path) -> SiteResult<Self> {
        let contents = fs::read_to_string(path).map_err(|source| SiteError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let content = Self::from_json(&contents)?;
        tracing::info!(
            "Loaded portfolio content from {:?}: {} skill categories, {} projects, {} contact channels",
            path,
            content.skills.len(),
            content.projects.len(),
            content.contact.channels.len()
        );
        Ok(content)
    }

    pub fn from_json(json: &str) -> SiteResult<Self> {
        let content: PortfolioContent = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    /// Check every invariant of the static data.
    pub fn validate(&self) -> SiteResult<()> {
        if self.profile.name.trim().is_empty() {
            return invalid("profile name is empty".to_string());
        }

        for action in &self.profile.actions {
            if action.target.anchor().is_none() {
                return invalid(format!(
                    "hero action '{}' targets section '{}', which has no anchor",
                    action.label, action.target
                ));
            }
        }

        unique(
            self.skills.iter().map(|c| c.label.as_str()),
            "skill category",
        )?;
        for category in &self.skills {
            unique(
                category.skills.iter().map(String::as_str),
                &format!("skill in category '{}'", category.label),
            )?;
        }

        unique(
            self.projects.iter().map(|p| p.title.as_str()),
            "project title",
        )?;
        for project in &self.projects {
            unique(
                project.tech.iter().map(String::as_str),
                &format!("tech tag in project '{}'", project.title),
            )?;
            if !is_web_url(&project.link) {
                return invalid(format!(
                    "project '{}' link must be an http(s) URL, got '{}'",
                    project.title, project.link
                ));
            }
        }

        Ok(())
    }

    /// Page sections in document order with their staggered item counts.
    /// Only project cards are staggered.
    pub fn sections(&self) -> Vec<(SectionId, usize)> {
        SectionId::ALL
            .iter()
            .map(|&id| match id {
                SectionId::Projects => (id, self.projects.len()),
                _ => (id, 0),
            })
            .collect()
    }

    /// Total number of skills across categories.
    pub fn skill_count(&self) -> usize {
        self.skills.iter().map(|c| c.skills.len()).sum()
    }
}

fn invalid<T>(message: String) -> SiteResult<T> {
    Err(SiteError::InvalidContent(message))
}

fn unique<'a>(items: impl Iterator<Item = &'a str>, what: &str) -> SiteResult<()> {
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item) {
            return invalid(format!("duplicate {}: '{}'", what, item));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shipped_content_path() -> std::path::PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("content/portfolio.json")
    }

    #[test]
    fn test_builtin_content_is_valid() {
        let content = PortfolioContent::default();
        assert!(content.validate().is_ok());
        assert_eq!(content.skills.len(), 4);
        assert_eq!(content.skill_count(), 18);
        assert_eq!(content.projects.len(), 3);
    }

    #[test]
    fn test_builtin_preserves_declaration_order() {
        let content = PortfolioContent::default();
        let labels: Vec<&str> = content.skills.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, ["Frontend", "Backend", "Database", "Tools"]);
        assert_eq!(content.projects[2].title, "Social Media Dashboard");
        assert_eq!(
            content.projects[1].tech,
            ["React", "Express.js", "MongoDB", "Socket.io"]
        );
    }

    #[test]
    fn test_shipped_file_matches_builtin() {
        let loaded = PortfolioContent::load(&shipped_content_path()).unwrap();
        assert_eq!(loaded, PortfolioContent::default());
    }

    #[test]
    fn test_phone_kept_verbatim() {
        let content = PortfolioContent::default();
        let phone = content
            .contact
            .channels
            .iter()
            .find(|c| c.kind == ChannelKind::Phone)
            .unwrap();
        assert_eq!(phone.label, "+91 8128406537");
        assert_eq!(phone.href, "tel:+1234567890");
        assert!(!phone.is_external());
    }

    #[test]
    fn test_rejects_duplicate_category() {
        let mut content = PortfolioContent::default();
        content.skills[1].label = "Frontend".to_string();
        let err = content.validate().unwrap_err();
        assert!(err.to_string().contains("duplicate skill category"));
    }

    #[test]
    fn test_rejects_duplicate_skill_in_category() {
        let mut content = PortfolioContent::default();
        content.skills[0].skills.push("TypeScript".to_string());
        assert!(matches!(
            content.validate(),
            Err(SiteError::InvalidContent(_))
        ));
    }

    #[test]
    fn test_same_skill_in_two_categories_allowed() {
        let mut content = PortfolioContent::default();
        content.skills[1].skills.push("TypeScript".to_string());
        assert!(content.validate().is_ok());
    }

    #[test]
    fn test_rejects_duplicate_project_and_tag() {
        let mut content = PortfolioContent::default();
        content.projects[1].title = content.projects[0].title.clone();
        assert!(content.validate().is_err());

        let mut content = PortfolioContent::default();
        content.projects[0].tech.push("Redis".to_string());
        assert!(content.validate().is_err());
    }

    #[test]
    fn test_rejects_non_web_project_link() {
        let mut content = PortfolioContent::default();
        content.projects[0].link = "javascript:alert(1)".to_string();
        assert!(content.validate().is_err());
    }

    #[test]
    fn test_rejects_action_to_hero() {
        let mut content = PortfolioContent::default();
        content.profile.actions[0].target = SectionId::Hero;
        assert!(content.validate().is_err());
    }

    #[test]
    fn test_from_json_parse_error() {
        assert!(matches!(
            PortfolioContent::from_json(r#"{"profile": {}}"#),
            Err(SiteError::Parse(_))
        ));
    }
}
