//! Scroll-Triggered Reveal
//!
//! Framework-free model of the page's fade-in behaviour:
//! - `observer`: trigger-once visibility latch per section
//! - `animator`: hidden -> visible interpolation with optional stagger
//! - `easing`: cubic Bézier timing curves shared with the emitted CSS
//! - `page`: whole-page simulation and the static reveal schedule

pub mod animator;
pub mod easing;
pub mod observer;
pub mod page;

pub use animator::{stagger_delay, AnimationState, Transition, TransitionAnimator};
pub use easing::Easing;
pub use observer::{
    intersect, IntersectionEntry, ObserverOptions, Rect, RevealState, Viewport, VisibilityObserver,
};
pub use page::{
    PageFrame, PageLayout, RevealPage, RevealSchedule, SectionFrame, SectionId, SectionLayout,
    SectionSchedule, SectionTrack, TimedTransition,
};
