//! Site Configuration
//!
//! Motion and observer parameters. Loaded from JSON; every field falls back
//! to the page defaults (0.6 s duration, 0.2 s stagger,
//! 20 px offset, ease-in-out, threshold 0).

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{SiteError, SiteResult};
use crate::reveal::{AnimationState, Easing, ObserverOptions, Transition, TransitionAnimator};

/// Transition parameters shared by every section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Transition duration in seconds.
    /// Default: 0.6
    pub duration: f64,

    /// Extra delay per item index in staggered sequences (seconds).
    /// Default: 0.2
    pub stagger_increment: f64,

    /// Starting downward offset of hidden elements (px).
    /// Default: 20
    pub hidden_offset: f64,

    /// Default: ease_in_out
    pub easing: Easing,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            duration: 0.6,
            stagger_increment: 0.2,
            hidden_offset: 20.0,
            easing: Easing::EaseInOut,
        }
    }
}

impl MotionConfig {
    pub fn transition(&self) -> Transition {
        Transition::new(self.duration, self.easing)
    }

    pub fn hidden_state(&self) -> AnimationState {
        AnimationState::hidden(self.hidden_offset)
    }

    /// Section-level animator built from these parameters.
    pub fn animator(&self) -> TransitionAnimator {
        TransitionAnimator::new(self.transition())
            .with_hidden(self.hidden_state())
    }
}

/// Top-level configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SiteConfig {
    pub motion: MotionConfig,
    pub observer: ObserverOptions,
}

impl SiteConfig {
    /// Load configuration from a JSON file and validate it.
    pub fn load(path: &Path) -> SiteResult<Self> {
        let contents = fs::read_to_string(path).map_err(|source| SiteError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&contents)?;
        tracing::info!(
            duration = config.motion.duration,
            stagger = config.motion.stagger_increment,
            "Loaded site config from {:?}",
            path
        );
        Ok(config)
    }

    pub fn from_json(json: &str) -> SiteResult<Self> {
        let config: SiteConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> SiteResult<()> {
        let motion = &self.motion;
        if !motion.duration.is_finite() || motion.duration < 0.0 {
            return Err(SiteError::InvalidConfig(format!(
                "duration must be a non-negative number of seconds, got {}",
                motion.duration
            )));
        }
        // Stagger must strictly increase with the item index
        if !motion.stagger_increment.is_finite() || motion.stagger_increment <= 0.0 {
            return Err(SiteError::InvalidConfig(format!(
                "stagger_increment must be positive, got {}",
                motion.stagger_increment
            )));
        }
        if !motion.hidden_offset.is_finite() {
            return Err(SiteError::InvalidConfig(
                "hidden_offset must be finite".to_string(),
            ));
        }
        if !motion.easing.is_valid() {
            return Err(SiteError::InvalidConfig(format!(
                "easing control points out of range: {:?}",
                motion.easing
            )));
        }

        let observer = &self.observer;
        if !(0.0..=1.0).contains(&observer.threshold) {
            return Err(SiteError::InvalidConfig(format!(
                "threshold must be within [0, 1], got {}",
                observer.threshold
            )));
        }
        if !observer.root_margin.is_finite() {
            return Err(SiteError::InvalidConfig(
                "root_margin must be finite".to_string(),
            ));
        }
        Ok(())
    }
}
