//! Inertial camera motion after a drag ends, simulating friction.

use std::time::Duration;

use bevy_math::DVec2;
use bevy_reflect::prelude::*;

/// Amount of camera momentum after a drag has ended.
#[derive(Debug, Clone, Copy, Reflect)]
pub struct Momentum {
    /// Exponential decay rate of the angular velocity, per second. Velocity
    /// decays as `v * e^(-damping * t)`.
    pub damping: f64,
    /// Angular speed below which inertia stops, radians per second. Applies
    /// per axis; motion ends once both axes are below it.
    pub stop_threshold: f64,
}

impl Default for Momentum {
    fn default() -> Self {
        Self {
            damping: 4.0,
            stop_threshold: 0.005,
        }
    }
}

/// The angular velocity carried over from a released drag. Live only while
/// inertia is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Reflect)]
pub enum Velocity {
    /// No inertial motion.
    #[default]
    None,
    /// Yaw/pitch rates in radians per second.
    Spinning(DVec2),
}

impl Velocity {
    /// Decay the velocity over `delta_time`, stopping once both components
    /// fall below the threshold.
    pub fn decay(&mut self, momentum: Momentum, delta_time: Duration) {
        let Velocity::Spinning(velocity) = self else {
            return;
        };
        *velocity *= (-momentum.damping * delta_time.as_secs_f64()).exp();
        if velocity.x.abs() < momentum.stop_threshold && velocity.y.abs() < momentum.stop_threshold
        {
            *self = Velocity::None;
        }
    }

    /// The yaw/pitch displacement contributed during a frame of `delta_time`,
    /// zero when inertia is inactive.
    pub fn frame_displacement(&self, delta_time: Duration) -> DVec2 {
        match self {
            Velocity::None => DVec2::ZERO,
            Velocity::Spinning(velocity) => *velocity * delta_time.as_secs_f64(),
        }
    }

    /// Whether inertial motion is currently active.
    pub fn is_active(&self) -> bool {
        matches!(self, Velocity::Spinning(_))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn velocity_decays_exponentially() {
        let momentum = Momentum::default();
        let mut velocity = Velocity::Spinning(DVec2::new(1.0, 0.5));
        let dt = Duration::from_secs_f64(1.0 / 60.0);
        for _ in 0..60 {
            velocity.decay(momentum, dt);
        }
        // The rate should be v0 * e^(-damping * t), where t is the exact
        // integrated time (60 frame durations, not a nominal second).
        let expected = (-momentum.damping * 60.0 * dt.as_secs_f64()).exp();
        let Velocity::Spinning(v) = velocity else {
            panic!("inertia stopped early");
        };
        assert!((v.x - expected).abs() < 1e-9);
        assert!((v.y - 0.5 * expected).abs() < 1e-9);
    }

    #[test]
    fn stops_below_threshold() {
        let momentum = Momentum::default();
        let mut velocity = Velocity::Spinning(DVec2::new(1.0, 0.2));
        let dt = Duration::from_secs_f64(1.0 / 60.0);
        for _ in 0..120 {
            velocity.decay(momentum, dt);
        }
        // e^(-8) is far below the stop threshold.
        assert_eq!(velocity, Velocity::None);
        assert_eq!(velocity.frame_displacement(dt), DVec2::ZERO);
    }

    #[test]
    fn displacement_integrates_velocity() {
        let velocity = Velocity::Spinning(DVec2::new(2.0, -1.0));
        let step = velocity.frame_displacement(Duration::from_millis(100));
        assert!((step.x - 0.2).abs() < 1e-12);
        assert!((step.y + 0.1).abs() < 1e-12);
    }
}
