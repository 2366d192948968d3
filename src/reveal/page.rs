//! Page Timeline
//!
//! Ties one observer and one animator to every page section and drives them
//! from viewport updates, with no rendering environment. Time is always
//! passed in explicitly (seconds since page load).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::{MotionConfig, SiteConfig};
use crate::reveal::animator::{AnimationState, Transition, TransitionAnimator};
use crate::reveal::observer::{Rect, RevealState, Viewport, VisibilityObserver};

/// The page's sections, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    Hero,
    Skills,
    Projects,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 4] = [
        SectionId::Hero,
        SectionId::Skills,
        SectionId::Projects,
        SectionId::Contact,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Hero => "hero",
            SectionId::Skills => "skills",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
        }
    }

    /// In-page anchor id. The hero sits at the top and has none.
    pub fn anchor(&self) -> Option<&'static str> {
        match self {
            SectionId::Hero => None,
            other => Some(other.as_str()),
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionLayout {
    pub id: SectionId,
    pub rect: Rect,
    /// Number of children animated with a stagger.
    pub items: usize,
}

/// Document geometry of all sections.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PageLayout {
    sections: Vec<SectionLayout>,
}

impl PageLayout {
    /// Stack sections top to bottom with the given heights (px).
    pub fn stacked(heights: &[(SectionId, f64)]) -> Self {
        let mut top = 0.0;
        let sections = heights
            .iter()
            .map(|&(id, height)| {
                let rect = Rect::new(top, height);
                top += height;
                SectionLayout { id, rect, items: 0 }
            })
            .collect();
        Self { sections }
    }

    /// Give `id` a staggered child sequence of `count` items.
    pub fn with_items(mut self, id: SectionId, count: usize) -> Self {
        if let Some(section) = self.sections.iter_mut().find(|s| s.id == id) {
            section.items = count;
        }
        self
    }

    pub fn sections(&self) -> &[SectionLayout] {
        &self.sections
    }

    pub fn get(&self, id: SectionId) -> Option<&SectionLayout> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Total document height.
    pub fn height(&self) -> f64 {
        self.sections
            .iter()
            .map(|s| s.rect.bottom())
            .fold(0.0, f64::max)
    }
}

/// Sampled state of one section and its staggered items.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionFrame {
    pub id: SectionId,
    pub state: RevealState,
    pub section: AnimationState,
    pub items: Vec<AnimationState>,
}

/// Sampled state of the whole page at one instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageFrame {
    pub time: f64,
    pub sections: Vec<SectionFrame>,
}

impl PageFrame {
    pub fn section(&self, id: SectionId) -> Option<&SectionFrame> {
        self.sections.iter().find(|s| s.id == id)
    }
}

/// One section's observer and animators.
#[derive(Debug, Clone)]
pub struct SectionTrack {
    layout: SectionLayout,
    observer: VisibilityObserver,
    animator: TransitionAnimator,
    stagger_increment: f64,
}

impl SectionTrack {
    fn new(layout: SectionLayout, observer: VisibilityObserver, motion: &MotionConfig) -> Self {
        Self {
            layout,
            observer,
            animator: motion.animator(),
            stagger_increment: motion.stagger_increment,
        }
    }

    pub fn id(&self) -> SectionId {
        self.layout.id
    }

    pub fn state(&self) -> RevealState {
        self.observer.state()
    }

    /// Animator of child `index`.
    pub fn item_animator(&self, index: usize) -> TransitionAnimator {
        self.animator.staggered(index, self.stagger_increment)
    }

    fn observe(&mut self, viewport: Viewport, now: f64) -> Option<f64> {
        self.observer.observe_geometry(self.layout.rect, viewport, now)
    }

    pub fn sample(&self, now: f64) -> SectionFrame {
        let state = self.state();
        SectionFrame {
            id: self.layout.id,
            state,
            section: self.animator.sample(state, now),
            items: (0..self.layout.items)
                .map(|i| self.item_animator(i).sample(state, now))
                .collect(),
        }
    }

    fn is_settled(&self, now: f64) -> bool {
        let last = self.layout.items.saturating_sub(1);
        self.animator.is_settled(self.state(), now)
            && self.item_animator(last).is_settled(self.state(), now)
    }
}

/// Whole-page reveal simulation.
#[derive(Debug, Clone)]
pub struct RevealPage {
    tracks: Vec<SectionTrack>,
}

impl RevealPage {
    /// Page in an environment with intersection support. All sections pending.
    pub fn new(layout: PageLayout, config: &SiteConfig) -> Self {
        let tracks = layout
            .sections
            .into_iter()
            .map(|section| {
                let observer = VisibilityObserver::new(config.observer);
                SectionTrack::new(section, observer, &config.motion)
            })
            .collect();
        Self { tracks }
    }

    /// Page in an environment without intersection support.
    ///
    /// Every section counts as revealed at `mounted_at`.
    pub fn unsupported(layout: PageLayout, config: &SiteConfig, mounted_at: f64) -> Self {
        tracing::debug!("intersection support missing, revealing all sections at mount");
        let tracks = layout
            .sections
            .into_iter()
            .map(|section| {
                let observer = VisibilityObserver::unsupported(config.observer, mounted_at);
                SectionTrack::new(section, observer, &config.motion)
            })
            .collect();
        Self { tracks }
    }

    /// Initial observation pass when the page mounts.
    ///
    /// Sections already inside `viewport` reveal at `now` and still play
    /// their full transition.
    pub fn mount(&mut self, viewport: Viewport, now: f64) -> Vec<SectionId> {
        self.update_viewport(viewport, now)
    }

    /// Deliver a scroll or resize. Returns the sections revealed by it.
    pub fn update_viewport(&mut self, viewport: Viewport, now: f64) -> Vec<SectionId> {
        let mut revealed = Vec::new();
        for track in &mut self.tracks {
            if let Some(at) = track.observe(viewport, now) {
                tracing::debug!(section = %track.id(), at, "section revealed");
                revealed.push(track.id());
            }
        }
        revealed
    }

    pub fn state(&self, id: SectionId) -> Option<RevealState> {
        self.track(id).map(SectionTrack::state)
    }

    pub fn track(&self, id: SectionId) -> Option<&SectionTrack> {
        self.tracks.iter().find(|t| t.id() == id)
    }

    pub fn frame(&self, now: f64) -> PageFrame {
        PageFrame {
            time: now,
            sections: self.tracks.iter().map(|t| t.sample(now)).collect(),
        }
    }

    /// True when every section is revealed and fully visible.
    pub fn is_settled(&self, now: f64) -> bool {
        self.tracks.iter().all(|t| t.is_settled(now))
    }
}

/// Start and end of one transition relative to its section's reveal, in ms.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimedTransition {
    pub start_ms: i64,
    pub end_ms: i64,
    /// CSS `transition` value.
    pub css: String,
}

impl From<Transition> for TimedTransition {
    fn from(transition: Transition) -> Self {
        Self {
            start_ms: (transition.start() * 1000.0).round() as i64,
            end_ms: (transition.end() * 1000.0).round() as i64,
            css: transition.css(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionSchedule {
    pub section: SectionId,
    pub anchor: Option<&'static str>,
    pub transition: TimedTransition,
    pub items: Vec<TimedTransition>,
}

/// Static timing of every section and staggered item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RevealSchedule {
    pub hidden: AnimationState,
    pub visible: AnimationState,
    pub sections: Vec<SectionSchedule>,
}

impl RevealSchedule {
    /// Build the schedule for `sections`, each with its staggered item count.
    pub fn new(motion: &MotionConfig, sections: &[(SectionId, usize)]) -> Self {
        let base = motion.transition();
        let sections = sections
            .iter()
            .map(|&(section, items)| SectionSchedule {
                section,
                anchor: section.anchor(),
                transition: TimedTransition::from(base),
                items: (0..items)
                    .map(|i| {
                        TimedTransition::from(base.staggered(i, motion.stagger_increment))
                    })
                    .collect(),
            })
            .collect();
        Self {
            hidden: motion.hidden_state(),
            visible: AnimationState::VISIBLE,
            sections,
        }
    }

    pub fn section(&self, id: SectionId) -> Option<&SectionSchedule> {
        self.sections.iter().find(|s| s.section == id)
    }
}
