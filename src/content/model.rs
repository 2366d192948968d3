//! Content data model
//!
//! Immutable page content: profile, skills, projects and contact details.
//! Lists are `Vec`s so declaration order survives loading and rendering.

use serde::{Deserialize, Serialize};

use crate::reveal::SectionId;

/// Hero call-to-action pointing at an in-page section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroAction {
    pub label: String,
    pub target: SectionId,
    #[serde(default)]
    pub primary: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub bio: String,
    pub avatar_url: String,
    #[serde(default)]
    pub avatar_alt: Option<String>,
    #[serde(default)]
    pub actions: Vec<HeroAction>,
}

impl Profile {
    pub fn avatar_alt(&self) -> &str {
        self.avatar_alt.as_deref().unwrap_or(&self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub label: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tech: Vec<String>,
    pub link: String,
}

/// Kind of contact channel, used to pick the icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelKind {
    Email,
    Phone,
    Github,
    Linkedin,
    Other,
}

impl ChannelKind {
    pub fn icon(&self) -> &'static str {
        match self {
            ChannelKind::Email => "mail",
            ChannelKind::Phone => "phone",
            ChannelKind::Github => "github",
            ChannelKind::Linkedin => "linkedin",
            ChannelKind::Other => "link",
        }
    }

    /// Inner SVG shapes of the icon, drawn on a 24x24 stroked canvas.
    pub fn glyph(&self) -> &'static str {
        match self {
            ChannelKind::Email => {
                r#"<rect width="20" height="16" x="2" y="4" rx="2"/><path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"/>"#
            }
            ChannelKind::Phone => {
                r#"<path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z"/>"#
            }
            ChannelKind::Github => {
                r#"<path d="M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.4 5.4 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65-.17.6-.22 1.23-.15 1.85v4"/><path d="M9 18c-4.51 2-5-2-7-2"/>"#
            }
            ChannelKind::Linkedin => {
                r#"<path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"/><rect width="4" height="12" x="2" y="9"/><circle cx="4" cy="4" r="2"/>"#
            }
            ChannelKind::Other => {
                r#"<path d="M10 13a5 5 0 0 0 7.54.54l3-3a5 5 0 0 0-7.07-7.07l-1.72 1.71"/><path d="M14 11a5 5 0 0 0-7.54-.54l-3 3a5 5 0 0 0 7.07 7.07l1.71-1.71"/>"#
            }
        }
    }
}

/// One contact link. `label` and `href` are opaque and rendered as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactChannel {
    pub kind: ChannelKind,
    pub label: String,
    pub href: String,
}

impl ContactChannel {
    /// Web links open in a new tab; `mailto:` and `tel:` do not.
    pub fn is_external(&self) -> bool {
        is_web_url(&self.href)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub heading: String,
    pub channels: Vec<ContactChannel>,
}

/// Input type of a contact form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Email,
    Textarea,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormField {
    pub kind: FieldKind,
    pub placeholder: String,
}

impl FormField {
    pub fn input_type(&self) -> &'static str {
        match self.kind {
            FieldKind::Text | FieldKind::Textarea => "text",
            FieldKind::Email => "email",
        }
    }

    pub fn is_textarea(&self) -> bool {
        self.kind == FieldKind::Textarea
    }
}

/// Presentational contact form. There is no action and no handler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactForm {
    pub fields: Vec<FormField>,
    pub submit_label: String,
}

/// Everything the page shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioContent {
    pub profile: Profile,
    pub skills_heading: String,
    pub skills: Vec<SkillCategory>,
    pub projects_heading: String,
    pub projects: Vec<Project>,
    pub contact: ContactInfo,
    pub form: ContactForm,
}

pub(crate) fn is_web_url(href: &str) -> bool {
    href.starts_with("https://") || href.starts_with("http://")
}
