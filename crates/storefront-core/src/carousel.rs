//! Cyclic carousel positioning engine.
//!
//! A fixed number of display items sit on evenly spaced slots along x. A
//! scroll delta shifts every destination; a destination that leaves the
//! cyclic window `(-limit, limit)` is reinserted two slots past the
//! opposite edge, so a handful of live items give the illusion of an
//! endless row. Each tick the live positions ease toward their
//! destinations and items outside the spawn range are detached from the
//! scene.

use crate::config::{CarouselConfig, ConfigError, Easing};
use crate::scene::{SceneMembership, Visual};
use glam::Vec3;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemState {
    AtRest,
    Animating,
}

#[derive(Clone, Debug)]
pub struct DisplayItem<V> {
    visual: V,
    destination: Vec3,
}

impl<V: Visual> DisplayItem<V> {
    pub fn visual(&self) -> &V {
        &self.visual
    }

    pub fn destination(&self) -> Vec3 {
        self.destination
    }

    pub fn state(&self) -> ItemState {
        if self.visual.position().x == self.destination.x {
            ItemState::AtRest
        } else {
            ItemState::Animating
        }
    }
}

pub struct Carousel<V> {
    items: Vec<DisplayItem<V>>,
    config: CarouselConfig,
}

impl<V: Visual> Carousel<V> {
    /// Register `visuals` in order and lay them out on their initial slots.
    pub fn new(visuals: Vec<V>, config: CarouselConfig) -> Result<Self, ConfigError> {
        config.validate(visuals.len())?;
        let items = visuals
            .into_iter()
            .map(|visual| DisplayItem {
                visual,
                destination: Vec3::ZERO,
            })
            .collect();
        let mut carousel = Self { items, config };
        carousel.assign_initial_layout();
        log::debug!(
            "[carousel] {} items, margin={:.2} limit={:.2} spawn_range={:.2}",
            carousel.items.len(),
            carousel.config.item_margin,
            carousel.wrap_limit(),
            carousel.config.spawn_range
        );
        Ok(carousel)
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn items(&self) -> &[DisplayItem<V>] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn destinations(&self) -> Vec<f32> {
        self.items.iter().map(|it| it.destination.x).collect()
    }

    pub fn positions(&self) -> Vec<f32> {
        self.items.iter().map(|it| it.visual.position().x).collect()
    }

    #[inline]
    pub fn wrap_limit(&self) -> f32 {
        self.config.wrap_limit(self.items.len())
    }

    pub fn is_animating(&self) -> bool {
        self.items
            .iter()
            .any(|it| it.state() == ItemState::Animating)
    }

    /// Items `0..N-1` on `i * margin`, the last one on `-margin` so it is
    /// the left-hand neighbour of item 0. Live positions jump to their slot.
    pub fn assign_initial_layout(&mut self) {
        let margin = self.config.item_margin;
        let last = self.items.len().saturating_sub(1);
        for (i, item) in self.items.iter_mut().enumerate() {
            let x = if i == last {
                -margin
            } else {
                i as f32 * margin
            };
            item.destination = Vec3::new(x, 0.0, 0.0);
            item.visual.set_position(item.destination);
        }
    }

    /// Shift every destination by `-delta`, wrapping each item on its own,
    /// then refresh scene membership.
    pub fn apply_scroll<S: SceneMembership>(&mut self, delta: f32, scene: &mut S) {
        if !delta.is_finite() {
            log::warn!("[carousel] ignoring non-finite scroll delta {}", delta);
            return;
        }
        let limit = self.wrap_limit();
        let margin = self.config.item_margin;
        for (i, item) in self.items.iter_mut().enumerate() {
            let proposed = item.destination.x - delta;
            let x = if proposed >= limit {
                -margin * 2.0
            } else if proposed <= -limit {
                margin * 2.0
            } else {
                proposed
            };
            if x != proposed {
                log::debug!("[carousel] item {} wrapped {:.3} -> {:.3}", i, proposed, x);
                if self.config.snap_on_wrap {
                    let mut pos = item.visual.position();
                    pos.x = x;
                    item.visual.set_position(pos);
                }
            }
            item.destination = Vec3::new(x, 0.0, 0.0);
        }
        self.update_visibility(scene);
    }

    /// Ease every live position toward its destination along x.
    pub fn advance(&mut self, dt: Duration) {
        let factor = easing_factor(self.config.easing, self.config.movement_speed, dt);
        if factor <= 0.0 {
            return;
        }
        let epsilon = self.config.snap_epsilon;
        for item in &mut self.items {
            let current = item.visual.position();
            let target = item.destination.x;
            if current.x == target {
                continue;
            }
            match step_toward(current.x, target, factor, epsilon) {
                Step::Arrive => item.visual.set_position(Vec3::new(target, current.y, current.z)),
                Step::Move(dx) => item.visual.translate_x(dx),
            }
        }
    }

    /// Attach items whose live x lies in `[-spawn_range, spawn_range]` and
    /// detach the rest.
    pub fn update_visibility<S: SceneMembership>(&self, scene: &mut S) {
        let range = self.config.spawn_range;
        for item in &self.items {
            let x = item.visual.position().x;
            if (-range..=range).contains(&x) {
                scene.add(item.visual.id());
            } else {
                scene.remove(item.visual.id());
            }
        }
    }

    /// One animation frame: motion followed by visibility.
    pub fn tick<S: SceneMembership>(&mut self, dt: Duration, scene: &mut S) {
        self.advance(dt);
        self.update_visibility(scene);
    }

    pub fn detach_all<S: SceneMembership>(&self, scene: &mut S) {
        for item in &self.items {
            scene.remove(item.visual.id());
        }
    }

    /// Detach every visual and hand ownership back to the caller.
    pub fn destroy<S: SceneMembership>(self, scene: &mut S) -> Vec<V> {
        self.detach_all(scene);
        self.items.into_iter().map(|it| it.visual).collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Step {
    /// Land exactly on the destination.
    Arrive,
    /// Translate by the given amount.
    Move(f32),
}

/// Decide how far an item at `current` moves toward `target` this tick.
pub fn step_toward(current: f32, target: f32, factor: f32, snap_epsilon: f32) -> Step {
    if factor <= 0.0 {
        return Step::Move(0.0);
    }
    let d = target - current;
    if factor * d > d.abs() || d.abs() <= snap_epsilon {
        return Step::Arrive;
    }
    let dx = d * factor;
    // the eased step has fallen below float resolution: advance one ulp
    if current + dx == current {
        let next = next_toward(current, target);
        if next == target {
            return Step::Arrive;
        }
        return Step::Move(next - current);
    }
    Step::Move(dx)
}

/// Adjacent representable float from `x` in the direction of `target`.
fn next_toward(x: f32, target: f32) -> f32 {
    if x == target || x.is_nan() || target.is_nan() {
        return target;
    }
    if x == 0.0 {
        let tiny = f32::from_bits(1);
        return if target > 0.0 { tiny } else { -tiny };
    }
    let bits = x.to_bits();
    let away_from_zero = (target > x) == (x > 0.0);
    f32::from_bits(if away_from_zero { bits + 1 } else { bits - 1 })
}

pub fn easing_factor(easing: Easing, movement_speed: f32, dt: Duration) -> f32 {
    match easing {
        Easing::PerFrame => movement_speed,
        Easing::TimeScaled { reference_fps } => {
            let frames = dt.as_secs_f32() * reference_fps;
            1.0 - (1.0 - movement_speed).powf(frames)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_is_a_fraction_of_the_remaining_distance() {
        assert_eq!(step_toward(0.0, 5.0, 0.5, 1e-4), Step::Move(2.5));
        assert_eq!(step_toward(5.0, 0.0, 0.5, 1e-4), Step::Move(-2.5));
    }

    #[test]
    fn full_speed_arrives_in_one_step() {
        assert_eq!(step_toward(-3.0, 1.0, 1.0, 0.0), Step::Move(4.0));
        assert_eq!(step_toward(1.0 - 1e-5, 1.0, 0.1, 1e-4), Step::Arrive);
    }

    #[test]
    fn stalled_step_snaps_even_without_epsilon() {
        let current = 1.0_f32;
        let target = current + f32::EPSILON;
        assert_eq!(step_toward(current, target, 0.1, 0.0), Step::Arrive);
    }

    #[test]
    fn per_frame_factor_ignores_dt() {
        let f = easing_factor(Easing::PerFrame, 0.1, Duration::from_secs(3));
        assert_eq!(f, 0.1);
    }

    #[test]
    fn time_scaled_factor_matches_per_frame_at_reference_rate() {
        let f = easing_factor(
            Easing::TimeScaled {
                reference_fps: 60.0,
            },
            0.1,
            Duration::from_secs_f64(1.0 / 60.0),
        );
        assert!((f - 0.1).abs() < 1e-5);
    }

    #[test]
    fn time_scaled_factor_is_zero_without_elapsed_time() {
        let f = easing_factor(Easing::time_scaled(), 0.5, Duration::ZERO);
        assert_eq!(f, 0.0);
        assert_eq!(step_toward(0.0, 5.0, f, 1e-4), Step::Move(0.0));
    }

    #[test]
    fn tiny_factor_moves_one_ulp_instead_of_jumping() {
        let current = 1000.0_f32;
        match step_toward(current, 1001.0, 1e-9, 0.0) {
            Step::Move(dx) => {
                assert!(dx > 0.0 && dx < 1e-3, "dx = {dx}");
                assert!(current + dx > current);
            }
            Step::Arrive => panic!("jumped to the destination"),
        }
    }

    #[test]
    fn next_toward_steps_to_adjacent_floats() {
        assert_eq!(next_toward(1.0, 2.0), 1.0 + f32::EPSILON);
        assert_eq!(next_toward(-1.0, 0.0), -1.0 + f32::EPSILON / 2.0);
        assert_eq!(next_toward(0.0, -1.0), -f32::from_bits(1));
        assert_eq!(next_toward(3.0, 3.0), 3.0);
    }
}
