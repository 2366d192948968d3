//! HTML Rendering
//!
//! Renders the portfolio page with Askama. Reveal timing is not hard-coded
//! in the templates: every `transition` declaration and the hidden/visible
//! stylesheet come from `RevealSchedule`, the same numbers the animator
//! samples.

use askama::Template;

use crate::config::SiteConfig;
use crate::content::{ContactChannel, HeroAction, PortfolioContent, Project};
use crate::error::SiteResult;
use crate::reveal::{AnimationState, RevealSchedule, SectionId, SectionSchedule};

/// Reveal attributes of one section element.
#[derive(Debug, Clone)]
pub struct SectionView {
    /// Anchor id, empty for the hero.
    pub anchor: &'static str,
    pub transition: String,
}

impl SectionView {
    fn from_schedule(schedule: Option<&SectionSchedule>, id: SectionId) -> Self {
        Self {
            anchor: id.anchor().unwrap_or(""),
            transition: schedule
                .map(|s| s.transition.css.clone())
                .unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ActionView<'a> {
    pub label: &'a str,
    pub href: String,
    pub primary: bool,
}

impl<'a> From<&'a HeroAction> for ActionView<'a> {
    fn from(action: &'a HeroAction) -> Self {
        Self {
            label: &action.label,
            href: format!("#{}", action.target.anchor().unwrap_or_default()),
            primary: action.primary,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProjectView<'a> {
    pub project: &'a Project,
    /// Staggered `transition` value for this card.
    pub transition: String,
}

#[derive(Debug, Clone)]
pub struct ChannelView<'a> {
    pub icon: &'static str,
    /// Trusted SVG markup from `ChannelKind::glyph`.
    pub glyph: &'static str,
    pub label: &'a str,
    pub href: &'a str,
    pub external: bool,
}

impl<'a> From<&'a ContactChannel> for ChannelView<'a> {
    fn from(channel: &'a ContactChannel) -> Self {
        Self {
            icon: channel.kind.icon(),
            glyph: channel.kind.glyph(),
            label: &channel.label,
            href: &channel.href,
            external: channel.is_external(),
        }
    }
}

#[derive(Template)]
#[template(path = "pages/home.html")]
pub struct HomeTemplate<'a> {
    pub title: String,
    pub content: &'a PortfolioContent,
    pub actions: Vec<ActionView<'a>>,
    pub hero: SectionView,
    pub skills: SectionView,
    pub projects: SectionView,
    pub contact: SectionView,
    pub project_cards: Vec<ProjectView<'a>>,
    pub channels: Vec<ChannelView<'a>>,
    pub reveal_css: String,
    pub noscript_css: String,
    pub threshold: f64,
    pub root_margin: f64,
}

impl<'a> HomeTemplate<'a> {
    pub fn new(content: &'a PortfolioContent, config: &SiteConfig) -> Self {
        let profile = &content.profile;
        let channels = &content.contact.channels;
        let schedule = RevealSchedule::new(&config.motion, &content.sections());
        let section = |id: SectionId| SectionView::from_schedule(schedule.section(id), id);

        let card_transitions = schedule
            .section(SectionId::Projects)
            .map(|s| s.items.iter().map(|t| t.css.clone()).collect::<Vec<_>>())
            .unwrap_or_default();

        let project_cards = content
            .projects
            .iter()
            .zip(card_transitions)
            .map(|(project, transition)| ProjectView {
                project,
                transition,
            })
            .collect();

        Self {
            title: format!("{} | {}", profile.name, profile.title),
            content,
            actions: profile.actions.iter().map(ActionView::from).collect(),
            hero: section(SectionId::Hero),
            skills: section(SectionId::Skills),
            projects: section(SectionId::Projects),
            contact: section(SectionId::Contact),
            project_cards,
            channels: channels.iter().map(ChannelView::from).collect(),
            reveal_css: reveal_stylesheet(schedule.hidden, schedule.visible),
            noscript_css: reveal_stylesheet(schedule.visible, schedule.visible),
            threshold: config.observer.threshold,
            root_margin: config.observer.root_margin,
        }
    }
}

/// Stylesheet pinning reveal targets to `hidden` until the section is
/// marked revealed, then to `visible`.
///
/// Rendering it with `hidden == visible` yields the fail-open override used
/// when scripting is unavailable.
pub fn reveal_stylesheet(hidden: AnimationState, visible: AnimationState) -> String {
    format!(
        "[data-reveal], [data-reveal] [data-reveal-item] {{ {} }}\n\
         [data-reveal].is-revealed, [data-reveal].is-revealed [data-reveal-item] {{ {} }}\n",
        hidden.css(),
        visible.css()
    )
}

/// Render the complete home page.
pub fn render_home(content: &PortfolioContent, config: &SiteConfig) -> SiteResult<String> {
    let html = HomeTemplate::new(content, config).render()?;
    tracing::debug!(bytes = html.len(), "rendered home page");
    Ok(html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MotionConfig;
    use crate::reveal::Easing;

    fn render_default() -> String {
        render_home(&PortfolioContent::default(), &SiteConfig::default()).unwrap()
    }

    /// Slice of the page from `start` up to the next occurrence of `end`.
    fn between<'a>(html: &'a str, start: &str, end: &str) -> &'a str {
        let from = html.find(start).expect("start marker");
        let rest = &html[from..];
        let to = rest.find(end).unwrap_or(rest.len());
        &rest[..to]
    }

    #[test]
    fn test_format_home() {
        let html = render_default();

        assert!(html.contains("<!DOCTYPE html>"));
        assert!(html.contains("<h1 class=\"hero-name\">Ashish Pandey</h1>"));
        assert!(html.contains("Full Stack Developer"));
        assert!(html.contains("Technical Expertise"));
        assert!(html.contains("Featured Projects"));
        assert!(html.contains("</html>"));
    }

    #[test]
    fn test_section_anchors() {
        let html = render_default();
        assert!(html.contains("id=\"skills\""));
        assert!(html.contains("id=\"projects\""));
        assert!(html.contains("id=\"contact\""));
        assert!(html.contains("href=\"#contact\""));
        assert!(html.contains("href=\"#projects\""));
        assert_eq!(html.matches("data-reveal-section=").count(), 4);
    }

    #[test]
    fn test_skills_rendered_once_in_order() {
        let content = PortfolioContent::default();
        let html = render_default();
        let skills = between(&html, "id=\"skills\"", "id=\"projects\"");

        let mut cursor = 0;
        for category in &content.skills {
            let heading = format!("<h3 class=\"card-title\">{}</h3>", category.label);
            assert_eq!(skills.matches(&heading).count(), 1, "{}", category.label);
            let at = skills[cursor..].find(&heading).expect("category order") + cursor;
            cursor = at;
            for skill in &category.skills {
                let badge = format!("<span class=\"badge badge-secondary\">{}</span>", skill);
                let found = skills[cursor..].find(&badge).expect("skill order") + cursor;
                cursor = found;
            }
        }
        let badges = skills.matches("badge-secondary").count();
        assert_eq!(badges, content.skill_count());
    }

    #[test]
    fn test_projects_rendered_once_in_order() {
        let content = PortfolioContent::default();
        let html = render_default();
        let projects = between(&html, "id=\"projects\"", "id=\"contact\"");

        let mut cursor = 0;
        for project in &content.projects {
            let title = format!("<h3 class=\"card-title\">{}</h3>", project.title);
            assert_eq!(projects.matches(&title).count(), 1);
            cursor = projects[cursor..].find(&title).unwrap() + cursor;
            for tag in &project.tech {
                let badge = format!("<span class=\"badge badge-outline\">{}</span>", tag);
                cursor = projects[cursor..].find(&badge).unwrap() + cursor;
            }
        }
        let tags: usize = content.projects.iter().map(|p| p.tech.len()).sum();
        assert_eq!(projects.matches("badge-outline").count(), tags);
        assert_eq!(projects.matches("data-reveal-item").count(), 3);
    }

    #[test]
    fn test_staggered_card_transitions() {
        let html = render_default();
        let projects = between(&html, "id=\"projects\"", "id=\"contact\"");
        let curve = Easing::EaseInOut.css();
        assert_eq!(curve, "cubic-bezier(0.42, 0, 0.58, 1)");
        for delay in [0, 200, 400] {
            let expected = format!("opacity 600ms {} {}ms", curve, delay);
            assert!(projects.contains(&expected), "missing card delay {}", delay);
        }
    }

    #[test]
    fn test_contact_form_is_inert() {
        let html = render_default();
        let form = between(&html, "<form", "</form>");
        assert!(!form.contains("action="));
        assert!(!form.contains("method="));
        assert!(!form.contains("name="));
        assert!(form.contains("placeholder=\"Your Name\""));
        assert!(form.contains("type=\"email\""));
        assert!(form.contains("<textarea"));
        assert!(form.contains("Send Message"));
    }

    #[test]
    fn test_contact_channels() {
        let html = render_default();
        let contact = between(&html, "id=\"contact\"", "</section>");
        assert!(contact.contains("mailto:krashish2001@gmail.com"));
        assert!(contact.contains("tel:+1234567890"));
        assert!(contact.contains("+91 8128406537"));
        assert!(contact.contains("ashishpandey-1"));
        // GitHub and LinkedIn open in a new tab, mail and phone do not
        assert_eq!(contact.matches("rel=\"noopener noreferrer\"").count(), 2);
    }

    #[test]
    fn test_contact_channels_draw_their_icons() {
        let content = PortfolioContent::default();
        let html = render_default();
        let contact = between(&html, "id=\"contact\"", "<form");

        let icons = contact.matches("<svg").count();
        assert_eq!(icons, content.contact.channels.len());
        for channel in &content.contact.channels {
            let class = format!("icon icon-{}", channel.kind.icon());
            assert!(
                contact.contains(&class),
                "missing icon for {:?}",
                channel.kind
            );
            assert!(
                contact.contains(channel.kind.glyph()),
                "missing glyph for {:?}",
                channel.kind
            );
        }
    }

    #[test]
    fn test_reveal_stylesheet_from_states() {
        let css = reveal_stylesheet(AnimationState::HIDDEN, AnimationState::VISIBLE);
        assert!(css.contains("opacity: 0; transform: translateY(20px);"));
        assert!(css.contains("opacity: 1; transform: translateY(0px);"));

        let html = render_default();
        assert!(html.contains("<noscript>"));
        assert!(html.contains("IntersectionObserver"));
    }

    #[test]
    fn test_script_ignores_edge_touch() {
        let html = render_default();
        let script = between(&html, "<script>", "</script>");
        assert!(script.contains("var threshold = 0;"));
        assert!(script.contains(
            "threshold > 0 ? entry.intersectionRatio >= threshold : entry.intersectionRatio > 0"
        ));
        assert!(script.contains("observer.unobserve(entry.target)"));
    }

    #[test]
    fn test_motion_config_flows_into_page() {
        let config = SiteConfig {
            motion: MotionConfig {
                duration: 1.0,
                stagger_increment: 0.5,
                hidden_offset: 40.0,
                easing: Easing::Linear,
            },
            ..SiteConfig::default()
        };
        let html = render_home(&PortfolioContent::default(), &config).unwrap();
        assert!(html.contains("opacity 1000ms linear 1000ms"));
        assert!(html.contains("translateY(40px)"));
    }
}
