use std::time::{Duration, Instant};

use super::config::Emission;
use super::{Bounds, Vec2};

/// Pointer activity, tracked for the trail variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerState {
    #[default]
    Idle,
    Moving,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerSource {
    Mouse,
    Touch,
}

/// Turns host resize and pointer events into engine state changes.
#[derive(Debug, Clone)]
pub struct InputAdapter {
    emission: Option<Emission>,
    state: PointerState,
    pointer: Option<Vec2>,
    /// Reference sample for pointer speed; cleared when the pointer goes idle.
    anchor: Option<Vec2>,
    last_move: Option<Instant>,
}

impl InputAdapter {
    pub fn new(emission: Option<Emission>) -> Self {
        Self {
            emission,
            state: PointerState::Idle,
            pointer: None,
            anchor: None,
            last_move: None,
        }
    }

    pub fn state(&self) -> PointerState {
        self.state
    }

    /// Last recorded pointer position in viewport space.
    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    /// Validates a viewport resize. Non-finite or negative sizes are dropped.
    pub fn on_resize(&self, width: f32, height: f32) -> Option<Bounds> {
        if width.is_finite() && height.is_finite() && width >= 0.0 && height >= 0.0 {
            Some(Bounds::new(width, height))
        } else {
            None
        }
    }

    /// Records a pointer sample and returns how many trail particles to inject.
    ///
    /// The first sample, and the first one after the pointer went idle, only
    /// re-anchor the speed reference.
    pub fn on_pointer_move(
        &mut self,
        position: Vec2,
        source: PointerSource,
        now: Instant,
    ) -> usize {
        if !position.is_finite() {
            return 0;
        }

        self.pointer = Some(position);
        self.state = PointerState::Moving;
        self.last_move = Some(now);

        let Some(emission) = self.emission else {
            return 0;
        };
        let Some(anchor) = self.anchor.replace(position) else {
            return 0;
        };

        let speed = position.distance(anchor);
        let (step, cap) = match source {
            PointerSource::Mouse => (emission.mouse_step, emission.mouse_cap),
            PointerSource::Touch => (emission.touch_step, emission.touch_cap),
        };
        particles_for_speed(speed, step, cap)
    }

    /// Moves to [`PointerState::Idle`] once the quiet period has passed.
    /// Returns `true` on that transition.
    pub fn poll_idle(&mut self, now: Instant) -> bool {
        if self.state != PointerState::Moving {
            return false;
        }
        let timeout = Duration::from_millis(self.emission.map_or(3_000, |e| e.idle_timeout_ms));
        match self.last_move {
            Some(last) if now.saturating_duration_since(last) >= timeout => {
                self.state = PointerState::Idle;
                self.anchor = None;
                true
            }
            _ => false,
        }
    }
}

/// `min(cap, floor(speed / step))`
pub fn particles_for_speed(speed: f32, step: f32, cap: usize) -> usize {
    if step <= 0.0 || !speed.is_finite() || speed <= 0.0 {
        return 0;
    }
    ((speed / step).floor() as usize).min(cap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particles::config::EngineConfig;

    fn trail_adapter() -> InputAdapter {
        InputAdapter::new(EngineConfig::trail().emission)
    }

    #[test]
    fn test_fifty_pixel_mouse_move_injects_five() {
        let mut input = trail_adapter();
        let t0 = Instant::now();
        assert_eq!(input.on_pointer_move(Vec2::new(100.0, 100.0), PointerSource::Mouse, t0), 0);
        assert_eq!(input.on_pointer_move(Vec2::new(150.0, 100.0), PointerSource::Mouse, t0), 5);
    }

    #[test]
    fn test_emission_is_capped_and_scaled() {
        assert_eq!(particles_for_speed(50.0, 5.0, 5), 5);
        assert_eq!(particles_for_speed(500.0, 5.0, 5), 5);
        assert_eq!(particles_for_speed(14.0, 5.0, 5), 2);
        assert_eq!(particles_for_speed(4.9, 5.0, 5), 0);
        assert_eq!(particles_for_speed(25.0, 10.0, 3), 2);
        assert_eq!(particles_for_speed(f32::INFINITY, 10.0, 3), 0);
    }

    #[test]
    fn test_touch_uses_its_own_rate() {
        let mut input = trail_adapter();
        let t0 = Instant::now();
        input.on_pointer_move(Vec2::new(0.0, 0.0), PointerSource::Touch, t0);
        assert_eq!(input.on_pointer_move(Vec2::new(0.0, 100.0), PointerSource::Touch, t0), 3);
    }

    #[test]
    fn test_malformed_sample_is_ignored() {
        let mut input = trail_adapter();
        let t0 = Instant::now();
        input.on_pointer_move(Vec2::new(10.0, 10.0), PointerSource::Mouse, t0);
        assert_eq!(input.on_pointer_move(Vec2::new(f32::NAN, 10.0), PointerSource::Mouse, t0), 0);
        assert_eq!(input.pointer(), Some(Vec2::new(10.0, 10.0)));
    }

    #[test]
    fn test_idle_after_quiet_period_then_resume() {
        let mut input = trail_adapter();
        let t0 = Instant::now();
        assert_eq!(input.state(), PointerState::Idle);

        input.on_pointer_move(Vec2::new(0.0, 0.0), PointerSource::Mouse, t0);
        assert_eq!(input.state(), PointerState::Moving);

        assert!(!input.poll_idle(t0 + Duration::from_millis(2_999)));
        assert_eq!(input.state(), PointerState::Moving);

        assert!(input.poll_idle(t0 + Duration::from_secs(3)));
        assert_eq!(input.state(), PointerState::Idle);

        // Resuming far away must not produce a burst from the stale anchor.
        let t1 = t0 + Duration::from_secs(4);
        assert_eq!(input.on_pointer_move(Vec2::new(900.0, 900.0), PointerSource::Mouse, t1), 0);
        assert_eq!(input.state(), PointerState::Moving);
        assert_eq!(input.on_pointer_move(Vec2::new(910.0, 900.0), PointerSource::Mouse, t1), 2);
    }

    #[test]
    fn test_ambient_records_pointer_without_emitting() {
        let mut input = InputAdapter::new(EngineConfig::ambient().emission);
        let t0 = Instant::now();
        input.on_pointer_move(Vec2::new(0.0, 0.0), PointerSource::Mouse, t0);
        assert_eq!(input.on_pointer_move(Vec2::new(300.0, 0.0), PointerSource::Mouse, t0), 0);
        assert_eq!(input.pointer(), Some(Vec2::new(300.0, 0.0)));
    }

    #[test]
    fn test_resize_rejects_garbage() {
        let input = trail_adapter();
        assert_eq!(input.on_resize(640.0, 480.0), Some(Bounds::new(640.0, 480.0)));
        assert_eq!(input.on_resize(-1.0, 480.0), None);
        assert_eq!(input.on_resize(f32::INFINITY, 480.0), None);
    }
}
