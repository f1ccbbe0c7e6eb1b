//! Cross-fades sensor-driven motion against gesture-driven motion, and bounds
//! how far the composed orientation may move in a single frame.

use std::time::Duration;

use bevy_math::{prelude::*, DVec2};
use bevy_reflect::prelude::*;

/// Settings for blending sensor and gesture motion.
#[derive(Debug, Clone, Reflect)]
pub struct BlendSettings {
    /// How long the sensor weight takes to fade out when a drag begins.
    pub fade_out: Duration,
    /// How long the sensor weight takes to fade back in after a drag ends.
    pub fade_in: Duration,
    /// The easing curve applied to weight transitions, so a starting or
    /// ending drag never produces a visible pop.
    #[reflect(ignore)]
    pub curve: CubicSegment<Vec2>,
    /// Upper bound on how fast the composed output orientation may rotate,
    /// radians per second. When a single-frame sensor glitch would move the
    /// camera further than `max_angle_per_second * dt`, the output
    /// interpolates partway toward the target instead of snapping.
    pub max_angle_per_second: f64,
}

impl Default for BlendSettings {
    fn default() -> Self {
        Self {
            fade_out: Duration::from_millis(150),
            fade_in: Duration::from_millis(300),
            curve: CubicSegment::new_bezier((0.22, 0.61), (0.36, 1.0)),
            max_angle_per_second: 8.0,
        }
    }
}

/// How much of the sensor-driven motion is applied versus gesture-driven
/// motion, in `[0, 1]`. Eased toward zero while dragging and back toward one
/// after release.
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct BlendWeight {
    from: f64,
    target: f64,
    elapsed: f64,
    duration: f64,
}

impl Default for BlendWeight {
    fn default() -> Self {
        // Sensor fully applied until the first drag.
        Self {
            from: 1.0,
            target: 1.0,
            elapsed: 0.0,
            duration: 0.0,
        }
    }
}

impl BlendWeight {
    /// Begin easing toward `target` over `duration`, starting from the
    /// current eased value so the transition is continuous even when it
    /// interrupts another transition.
    pub fn ease_to(&mut self, target: f64, duration: Duration, curve: &CubicSegment<Vec2>) {
        self.from = self.value(curve);
        self.target = target.clamp(0.0, 1.0);
        self.elapsed = 0.0;
        self.duration = duration.as_secs_f64();
    }

    /// Advance the transition by one frame.
    pub fn advance(&mut self, delta_time: Duration) {
        self.elapsed += delta_time.as_secs_f64();
    }

    /// The current eased weight.
    pub fn value(&self, curve: &CubicSegment<Vec2>) -> f64 {
        if self.duration <= 0.0 {
            return self.target;
        }
        let t = (self.elapsed / self.duration).clamp(0.0, 1.0);
        self.from + (self.target - self.from) * curve.ease(t as f32) as f64
    }
}

/// Bound the angular step from `last` to `target` to `max_step` radians,
/// interpolating partway rather than snapping when the bound is exceeded.
pub fn clamp_angular_step(last: DVec2, target: DVec2, max_step: f64) -> DVec2 {
    let delta = target - last;
    let distance = delta.length();
    if distance <= max_step || distance <= f64::EPSILON {
        target
    } else {
        last + delta * (max_step / distance)
    }
}
