//! Portfolio Site
//!
//! Single-page personal portfolio: hero, skills grid, projects gallery and
//! contact section, with scroll-triggered fade-in reveals.
//!
//! - `reveal/`: trigger-once visibility observer, transition animator,
//!   easing curves and a whole-page timeline
//! - `content/`: immutable page data (built-in or loaded from JSON)
//! - `config`: motion and observer parameters
//! - `render/`: Askama rendering of the page
//! - `site_server`: Axum router serving the page (feature `server`)

pub mod config;
pub mod content;
pub mod error;
pub mod render;
pub mod reveal;
pub mod site_server;

#[cfg(feature = "server")]
pub mod web;

// Re-export commonly used types
pub use config::{MotionConfig, SiteConfig};
pub use content::PortfolioContent;
pub use error::{SiteError, SiteResult};
pub use render::render_home;
pub use reveal::{
    AnimationState, Easing, RevealPage, RevealSchedule, RevealState, SectionId, Transition,
    TransitionAnimator, VisibilityObserver,
};

#[cfg(feature = "server")]
pub use site_server::{create_router, AppState};
