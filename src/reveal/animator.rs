//! Transition Animator
//!
//! Interpolates opacity and vertical offset from hidden to visible once a
//! reveal flag flips. Sampling is a pure function of elapsed time since the
//! flip, so the same numbers drive tests, the schedule endpoint and the
//! CSS emitted into the page.

use serde::Serialize;

use crate::reveal::easing::Easing;
use crate::reveal::observer::RevealState;

/// Rendered animation state of a section or item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnimationState {
    /// In [0, 1].
    pub opacity: f64,
    /// Downward displacement in px.
    pub offset_y: f64,
}

impl AnimationState {
    pub const HIDDEN: AnimationState = AnimationState {
        opacity: 0.0,
        offset_y: 20.0,
    };

    pub const VISIBLE: AnimationState = AnimationState {
        opacity: 1.0,
        offset_y: 0.0,
    };

    /// Hidden state with a custom starting offset.
    pub fn hidden(offset_y: f64) -> Self {
        Self {
            opacity: 0.0,
            offset_y,
        }
    }

    /// Linear interpolation; `t` is clamped to [0, 1].
    pub fn lerp(from: AnimationState, to: AnimationState, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        Self {
            opacity: from.opacity + (to.opacity - from.opacity) * t,
            offset_y: from.offset_y + (to.offset_y - from.offset_y) * t,
        }
    }

    /// CSS declarations for this state.
    pub fn css(&self) -> String {
        format!(
            "opacity: {}; transform: translateY({}px);",
            self.opacity, self.offset_y
        )
    }
}

/// Duration, delay and curve of one transition. Times in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Transition {
    pub duration: f64,
    pub delay: f64,
    pub easing: Easing,
}

impl Transition {
    pub fn new(duration: f64, easing: Easing) -> Self {
        Self {
            duration,
            delay: 0.0,
            easing,
        }
    }

    /// Copy of this transition delayed by `index × increment`.
    pub fn staggered(&self, index: usize, increment: f64) -> Self {
        Self {
            delay: self.delay + stagger_delay(index, increment),
            ..*self
        }
    }

    /// Offset from the trigger at which interpolation begins.
    pub fn start(&self) -> f64 {
        self.delay
    }

    /// Offset from the trigger at which the visible state is reached.
    pub fn end(&self) -> f64 {
        self.delay + self.duration
    }

    /// Raw (un-eased) progress in [0, 1] after `elapsed` seconds since the trigger.
    pub fn progress(&self, elapsed: f64) -> f64 {
        let active = elapsed - self.delay;
        if active <= 0.0 {
            return 0.0;
        }
        if self.duration <= 0.0 || active >= self.duration {
            return 1.0;
        }
        active / self.duration
    }

    /// Eased progress after `elapsed` seconds since the trigger.
    pub fn eased_progress(&self, elapsed: f64) -> f64 {
        self.easing.apply(self.progress(elapsed))
    }

    /// CSS `transition` value for opacity and transform.
    pub fn css(&self) -> String {
        let duration = to_millis(self.duration);
        let delay = to_millis(self.delay);
        let curve = self.easing.css();
        format!(
            "opacity {d}ms {c} {w}ms, transform {d}ms {c} {w}ms",
            d = duration,
            c = curve,
            w = delay
        )
    }
}

/// Delay for the item at `index` in a staggered sequence.
pub fn stagger_delay(index: usize, increment: f64) -> f64 {
    index as f64 * increment
}

fn to_millis(seconds: f64) -> i64 {
    (seconds * 1000.0).round() as i64
}

/// Drives one element from hidden to visible based on its reveal flag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionAnimator {
    pub hidden: AnimationState,
    pub visible: AnimationState,
    pub transition: Transition,
}

impl TransitionAnimator {
    pub fn new(transition: Transition) -> Self {
        Self {
            hidden: AnimationState::HIDDEN,
            visible: AnimationState::VISIBLE,
            transition,
        }
    }

    pub fn with_hidden(mut self, hidden: AnimationState) -> Self {
        self.hidden = hidden;
        self
    }

    /// Animator for item `index` of a staggered sequence.
    pub fn staggered(&self, index: usize, increment: f64) -> Self {
        Self {
            transition: self.transition.staggered(index, increment),
            ..*self
        }
    }

    /// State at time `now`.
    ///
    /// Pinned to hidden while pending. After the reveal, interpolates from
    /// hidden regardless of when the flag flipped, so a section already in
    /// view at mount still plays the full transition.
    pub fn sample(&self, state: RevealState, now: f64) -> AnimationState {
        match state {
            RevealState::Pending => self.hidden,
            RevealState::Revealed { at } => {
                let t = self.transition.eased_progress(now - at);
                AnimationState::lerp(self.hidden, self.visible, t)
            }
        }
    }

    /// True once the visible state has been reached and will not change.
    pub fn is_settled(&self, state: RevealState, now: f64) -> bool {
        match state.revealed_at() {
            Some(at) => now - at >= self.transition.end(),
            None => false,
        }
    }

    /// Absolute time the transition starts, if revealed.
    pub fn started_at(&self, state: RevealState) -> Option<f64> {
        state.revealed_at().map(|at| at + self.transition.start())
    }
}
