//! Frame timing.
//!
//! One [`FrameClock`] drives the render loop: call [`FrameClock::tick`] once
//! per frame and feed the returned `dt` to the animation update.

use std::time::Instant;

/// Timing snapshot for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTime {
    /// Seconds since the previous tick.
    pub dt: f32,
    /// Seconds since the clock was created.
    pub now: f32,
    /// Zero-based frame counter.
    pub frame_index: u64,
}

/// Monotonic clock producing per-frame delta time.
///
/// The previous reading starts at zero, so the first tick reports the time
/// elapsed since the clock was created. With a `max_delta` set, that first
/// value is capped; every later delta is the raw difference of readings.
#[derive(Debug, Clone)]
pub struct FrameClock {
    start: Instant,
    previous: f32,
    frame_index: u64,
    max_delta: Option<f32>,
}

impl FrameClock {
    /// Clock whose first-frame delta is capped at `max_delta` seconds.
    #[must_use]
    pub fn new(max_delta: Option<f32>) -> Self {
        debug_assert!(max_delta.is_none_or(|max| max >= 0.0));
        Self {
            start: Instant::now(),
            previous: 0.0,
            frame_index: 0,
            max_delta,
        }
    }

    /// Clock that reports a raw first-frame delta too.
    #[must_use]
    pub fn unclamped() -> Self {
        Self::new(None)
    }

    /// Read the monotonic clock and advance.
    pub fn tick(&mut self) -> FrameTime {
        let now = self.start.elapsed().as_secs_f32();
        self.advance_to(now)
    }

    /// Advance to an explicit reading, in seconds since the clock's start.
    ///
    /// Readings older than the previous one yield `dt == 0`.
    pub fn advance_to(&mut self, now: f32) -> FrameTime {
        let mut dt = (now - self.previous).max(0.0);
        if self.frame_index == 0 {
            if let Some(max) = self.max_delta {
                dt = dt.min(max);
            }
        }
        self.previous = now;

        let time = FrameTime {
            dt,
            now,
            frame_index: self.frame_index,
        };
        self.frame_index = self.frame_index.wrapping_add(1);
        time
    }

    /// The last reading passed to [`advance_to`](Self::advance_to).
    #[must_use]
    pub fn previous(&self) -> f32 {
        self.previous
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::unclamped()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{AnimationState, Motion, TransformKind};
    use crate::config::DemoConfig;

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "expected {expected}, got {actual}",
        );
    }

    #[test]
    fn first_frame_measures_from_zero() {
        let mut clock = FrameClock::unclamped();
        let t = clock.advance_to(1.5);
        assert_close(t.dt, 1.5);
        assert_eq!(t.frame_index, 0);
    }

    #[test]
    fn delta_is_difference_of_consecutive_readings() {
        let mut clock = FrameClock::unclamped();
        clock.advance_to(1.0);
        let t = clock.advance_to(1.25);
        assert_close(t.dt, 0.25);
        assert_close(clock.previous(), 1.25);
        assert_eq!(t.frame_index, 1);
    }

    #[test]
    fn clamp_caps_spurious_first_frame() {
        let mut clock = FrameClock::new(Some(0.25));
        assert_close(clock.advance_to(3.0).dt, 0.25);
        // The baseline still moves to the real reading.
        assert_close(clock.advance_to(3.1).dt, 0.1);
    }

    #[test]
    fn clamp_does_not_touch_later_frames() {
        let mut clock = FrameClock::new(DemoConfig::default().max_frame_delta);
        clock.advance_to(0.016);
        let slow = clock.advance_to(0.516);
        assert_eq!(slow.frame_index, 1);
        assert_close(slow.dt, 0.5);

        let mut state = AnimationState::default();
        let slide = Motion {
            linear_rate: 1.0,
            angular_rate: 0.0,
            kind: TransformKind::Translate,
        };
        state.advance(&slide, slow.dt);
        assert_close(state.position, 0.5);
    }

    #[test]
    fn backwards_reading_yields_zero() {
        let mut clock = FrameClock::unclamped();
        clock.advance_to(2.0);
        assert_close(clock.advance_to(1.0).dt, 0.0);
    }

    #[test]
    fn tick_is_non_negative_and_counts_frames() {
        let mut clock = FrameClock::new(Some(0.25));
        let a = clock.tick();
        let b = clock.tick();
        assert!(a.dt >= 0.0 && b.dt >= 0.0);
        assert!(b.now >= a.now);
        assert_eq!(b.frame_index, 1);
    }
}
