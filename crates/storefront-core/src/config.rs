//! Carousel configuration and its validation.
//!
//! A bad configuration makes the wrap rule degenerate (every scroll event
//! wraps every item), so it is rejected once at construction instead of
//! being tolerated per event.

use crate::constants::{ITEM_MARGIN, MOVEMENT_SPEED, REFERENCE_FPS, SNAP_EPSILON, SPAWN_RANGE};
use thiserror::Error;

/// How the per-tick easing factor is derived.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Easing {
    /// `movement_speed` is applied once per tick regardless of elapsed time.
    #[default]
    PerFrame,
    /// The factor is rescaled so that one tick of `1 / reference_fps`
    /// seconds matches `PerFrame`.
    TimeScaled { reference_fps: f32 },
}

impl Easing {
    /// Time-scaled easing tuned for the default tick rate.
    pub fn time_scaled() -> Self {
        Self::TimeScaled {
            reference_fps: REFERENCE_FPS,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CarouselConfig {
    pub item_margin: f32,
    pub spawn_range: f32,
    pub movement_speed: f32,
    pub snap_epsilon: f32,
    pub easing: Easing,
    /// Move a wrapped item's live position along with its destination.
    pub snap_on_wrap: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            item_margin: ITEM_MARGIN,
            spawn_range: SPAWN_RANGE,
            movement_speed: MOVEMENT_SPEED,
            snap_epsilon: SNAP_EPSILON,
            easing: Easing::PerFrame,
            snap_on_wrap: true,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("carousel needs at least 3 items to wrap, got {0}")]
    TooFewItems(usize),
    #[error("item margin must be positive and finite, got {0}")]
    InvalidMargin(f32),
    #[error("movement speed must be in (0, 1], got {0}")]
    InvalidMovementSpeed(f32),
    #[error("spawn range must be non-negative and finite, got {0}")]
    InvalidSpawnRange(f32),
    #[error("snap epsilon must be non-negative and finite, got {0}")]
    InvalidSnapEpsilon(f32),
    #[error("reference fps must be positive and finite, got {0}")]
    InvalidReferenceFps(f32),
}

impl CarouselConfig {
    /// Half-width of the cyclic window for `item_count` items.
    #[inline]
    pub fn wrap_limit(&self, item_count: usize) -> f32 {
        (item_count as f32 - 2.0) * self.item_margin
    }

    /// Check the configuration against the number of items it will drive.
    pub fn validate(&self, item_count: usize) -> Result<(), ConfigError> {
        if !(self.item_margin > 0.0 && self.item_margin.is_finite()) {
            return Err(ConfigError::InvalidMargin(self.item_margin));
        }
        // limit = (N - 2) * margin must stay positive
        if item_count < 3 {
            return Err(ConfigError::TooFewItems(item_count));
        }
        if !(self.movement_speed > 0.0 && self.movement_speed <= 1.0) {
            return Err(ConfigError::InvalidMovementSpeed(self.movement_speed));
        }
        if !(self.spawn_range >= 0.0 && self.spawn_range.is_finite()) {
            return Err(ConfigError::InvalidSpawnRange(self.spawn_range));
        }
        if !(self.snap_epsilon >= 0.0 && self.snap_epsilon.is_finite()) {
            return Err(ConfigError::InvalidSnapEpsilon(self.snap_epsilon));
        }
        if let Easing::TimeScaled { reference_fps } = self.easing {
            if !(reference_fps > 0.0 && reference_fps.is_finite()) {
                return Err(ConfigError::InvalidReferenceFps(reference_fps));
            }
        }
        if 2.0 * self.item_margin >= self.wrap_limit(item_count) {
            log::warn!(
                "[carousel] wrap slots (±{:.2}) sit on or past the wrap limit {:.2}; items will bounce between edges",
                2.0 * self.item_margin,
                self.wrap_limit(item_count)
            );
        }
        Ok(())
    }
}
