//! Keyboard zoom for the scene camera

use std::time::Duration;

use se_core::ManipulationConfig;
use se_core::constants::{KEYBOARD_POLL_INTERVAL_MS, ZOOM_IN_FACTOR, ZOOM_OUT_FACTOR};
use se_renderer::Camera2D;

use crate::input::{InputSource, Key};

/// Maps held keys to camera zoom.
///
/// Up shrinks the visible world width, Down grows it. Up wins when both are
/// held. There is no debounce: every poll with a key held zooms again.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraInputAdapter {
    pub zoom_in_factor: f32,
    pub zoom_out_factor: f32,
}

impl Default for CameraInputAdapter {
    fn default() -> Self {
        Self {
            zoom_in_factor: ZOOM_IN_FACTOR,
            zoom_out_factor: ZOOM_OUT_FACTOR,
        }
    }
}

impl From<&ManipulationConfig> for CameraInputAdapter {
    fn from(config: &ManipulationConfig) -> Self {
        Self {
            zoom_in_factor: config.zoom_in_factor,
            zoom_out_factor: config.zoom_out_factor,
        }
    }
}

impl CameraInputAdapter {
    /// Apply one keyboard poll. Returns true if the camera zoomed.
    pub fn poll(&self, camera: &mut Camera2D, input: &dyn InputSource) -> bool {
        let factor = if input.is_key_pressed(Key::Up) {
            self.zoom_in_factor
        } else if input.is_key_pressed(Key::Down) {
            self.zoom_out_factor
        } else {
            return false;
        };

        camera.zoom_by(factor);
        tracing::trace!("Zoomed by {} to width {}", factor, camera.wc_width());
        true
    }
}

/// Turns elapsed time into a count of due fixed-rate ticks
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedRateTimer {
    interval: Duration,
    accumulated: Duration,
}

impl Default for FixedRateTimer {
    fn default() -> Self {
        Self::new(Duration::from_millis(KEYBOARD_POLL_INTERVAL_MS))
    }
}

impl FixedRateTimer {
    /// Create a timer; intervals shorter than 1 ms are raised to 1 ms
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            accumulated: Duration::ZERO,
        }
    }

    /// Timer for the configured keyboard poll rate
    pub fn keyboard(config: &ManipulationConfig) -> Self {
        Self::new(config.keyboard_poll_interval())
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Add `elapsed` and return how many ticks are due. The remainder carries over.
    ///
    /// The count saturates at `u32::MAX` for very large gaps.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        let total = self.accumulated.saturating_add(elapsed).as_nanos();
        let interval = self.interval.as_nanos();

        // remainder < interval, which came from a Duration
        self.accumulated = Duration::from_nanos((total % interval) as u64);
        u32::try_from(total / interval).unwrap_or(u32::MAX)
    }

    pub fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputSnapshot;
    use glam::Vec2;

    fn camera() -> Camera2D {
        Camera2D::new(Vec2::ZERO, 100.0, Vec2::new(800.0, 600.0))
    }

    #[test]
    fn test_up_zooms_in() {
        let mut cam = camera();
        let adapter = CameraInputAdapter::default();
        let input = InputSnapshot::default().with_key(Key::Up, true);
        assert!(adapter.poll(&mut cam, &input));
        assert_eq!(cam.wc_width(), 50.0);
    }

    #[test]
    fn test_down_zooms_out() {
        let mut cam = camera();
        let adapter = CameraInputAdapter::default();
        let input = InputSnapshot::default().with_key(Key::Down, true);
        assert!(adapter.poll(&mut cam, &input));
        assert_eq!(cam.wc_width(), 150.0);
    }

    #[test]
    fn test_up_wins_over_down() {
        let mut cam = camera();
        let input = InputSnapshot::default()
            .with_key(Key::Up, true)
            .with_key(Key::Down, true);
        CameraInputAdapter::default().poll(&mut cam, &input);
        assert_eq!(cam.wc_width(), 50.0);
    }

    #[test]
    fn test_no_key_no_zoom() {
        let mut cam = camera();
        assert!(!CameraInputAdapter::default().poll(&mut cam, &InputSnapshot::default()));
        assert_eq!(cam.wc_width(), 100.0);
    }

    #[test]
    fn test_held_key_repeats() {
        let mut cam = camera();
        let adapter = CameraInputAdapter::default();
        let input = InputSnapshot::default().with_key(Key::Up, true);
        for _ in 0..3 {
            adapter.poll(&mut cam, &input);
        }
        assert_eq!(cam.wc_width(), 12.5);
    }

    #[test]
    fn test_adapter_from_config() {
        let config = ManipulationConfig {
            zoom_in_factor: 0.8,
            ..ManipulationConfig::default()
        };
        let adapter = CameraInputAdapter::from(&config);
        assert_eq!(adapter.zoom_in_factor, 0.8);
        assert_eq!(adapter.zoom_out_factor, ZOOM_OUT_FACTOR);
    }

    #[test]
    fn test_timer_carries_remainder() {
        let mut timer = FixedRateTimer::default();
        assert_eq!(timer.interval(), Duration::from_millis(10));
        assert_eq!(timer.advance(Duration::from_millis(25)), 2);
        assert_eq!(timer.advance(Duration::from_millis(4)), 0);
        assert_eq!(timer.advance(Duration::from_millis(1)), 1);
        assert_eq!(timer.advance(Duration::ZERO), 0);
    }

    #[test]
    fn test_timer_saturates_on_huge_gap() {
        let mut timer = FixedRateTimer::new(Duration::from_millis(1));
        let gap = Duration::from_millis(u32::MAX as u64 + 10);
        assert_eq!(timer.advance(gap), u32::MAX);

        let mut timer = FixedRateTimer::default();
        assert_eq!(timer.advance(Duration::MAX), u32::MAX);
        assert_eq!(timer.advance(Duration::ZERO), 0);
    }

    #[test]
    fn test_timer_minimum_interval() {
        let mut timer = FixedRateTimer::new(Duration::ZERO);
        assert_eq!(timer.interval(), Duration::from_millis(1));
        assert_eq!(timer.advance(Duration::from_millis(3)), 3);
        timer.reset();
        assert_eq!(timer.advance(Duration::from_micros(500)), 0);
    }
}
