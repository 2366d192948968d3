//! Visibility Observer
//!
//! Latches a per-section "revealed" flag on the first qualifying viewport
//! intersection. The latch is one-shot: later intersection changes,
//! including scrolling the section back out of view, are ignored.

use serde::{Deserialize, Serialize};

/// Monotonic reveal flag. The only transition is `Pending -> Revealed`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Default)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum RevealState {
    #[default]
    Pending,
    /// `at` is the time of the first qualifying intersection (seconds).
    Revealed { at: f64 },
}

impl RevealState {
    pub fn is_revealed(&self) -> bool {
        matches!(self, RevealState::Revealed { .. })
    }

    /// Time of the reveal, if it happened.
    pub fn revealed_at(&self) -> Option<f64> {
        match *self {
            RevealState::Pending => None,
            RevealState::Revealed { at } => Some(at),
        }
    }
}

/// Observer options. Trigger-once is not an option: it always holds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObserverOptions {
    /// Minimum visible fraction of the target. 0 means "any part".
    pub threshold: f64,
    /// Pixels added to every side of the viewport before testing overlap.
    pub root_margin: f64,
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self {
            threshold: 0.0,
            root_margin: 0.0,
        }
    }
}

impl ObserverOptions {
    /// Whether `entry` is a qualifying intersection.
    ///
    /// With threshold 0 the ratio must still be positive: an entry that
    /// reports intersecting at ratio 0 is an edge touch.
    pub fn qualifies(&self, entry: &IntersectionEntry) -> bool {
        if !entry.is_intersecting {
            return false;
        }
        if self.threshold > 0.0 {
            entry.intersection_ratio >= self.threshold
        } else {
            entry.intersection_ratio > 0.0
        }
    }
}

/// Vertical extent of a target in document coordinates (px).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub top: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// The visible window onto the document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scroll_y: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(scroll_y: f64, height: f64) -> Self {
        Self { scroll_y, height }
    }
}

/// One observation delivered to an observer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    pub time: f64,
    pub is_intersecting: bool,
    /// Visible fraction of the target in [0, 1].
    pub intersection_ratio: f64,
}

/// Compute the intersection of `target` with `viewport` grown by `root_margin`.
///
/// A target that only touches the viewport edge does not intersect.
/// Zero-height targets intersect when they lie strictly inside the viewport.
pub fn intersect(
    target: Rect,
    viewport: Viewport,
    root_margin: f64,
    time: f64,
) -> IntersectionEntry {
    let view_top = viewport.scroll_y - root_margin;
    let view_bottom = viewport.scroll_y + viewport.height + root_margin;

    let overlap = target.bottom().min(view_bottom) - target.top.max(view_top);

    let (is_intersecting, intersection_ratio) = if target.height <= 0.0 {
        let inside = target.top > view_top && target.top < view_bottom;
        (inside, if inside { 1.0 } else { 0.0 })
    } else if overlap > 0.0 {
        (true, (overlap / target.height).clamp(0.0, 1.0))
    } else {
        (false, 0.0)
    };

    IntersectionEntry {
        time,
        is_intersecting,
        intersection_ratio,
    }
}

/// Trigger-once visibility observer for a single target.
#[derive(Debug, Clone)]
pub struct VisibilityObserver {
    options: ObserverOptions,
    state: RevealState,
}

impl VisibilityObserver {
    /// Observer backed by a working intersection mechanism.
    pub fn new(options: ObserverOptions) -> Self {
        Self {
            options,
            state: RevealState::Pending,
        }
    }

    /// Observer for an environment without intersection support.
    ///
    /// Fails open: the target counts as revealed from mount, so content is
    /// never stuck hidden. The transition still plays from `mounted_at`.
    pub fn unsupported(options: ObserverOptions, mounted_at: f64) -> Self {
        Self {
            options,
            state: RevealState::Revealed { at: mounted_at },
        }
    }

    pub fn options(&self) -> &ObserverOptions {
        &self.options
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn is_revealed(&self) -> bool {
        self.state.is_revealed()
    }

    /// Feed one intersection entry.
    ///
    /// Returns `Some(at)` exactly once: on the first entry that
    /// `ObserverOptions::qualifies`. Returns `None` for all other
    /// entries, including every entry after the reveal.
    pub fn observe(&mut self, entry: IntersectionEntry) -> Option<f64> {
        if self.state.is_revealed() {
            return None;
        }
        if self.options.qualifies(&entry) {
            self.state = RevealState::Revealed { at: entry.time };
            return Some(entry.time);
        }
        None
    }

    /// Convenience: compute the entry for `target` and feed it.
    pub fn observe_geometry(
        &mut self,
        target: Rect,
        viewport: Viewport,
        time: f64,
    ) -> Option<f64> {
        let entry = intersect(target, viewport, self.options.root_margin, time);
        self.observe(entry)
    }
}
