//! Converts pointer drag and pinch events into orientation deltas, an angular
//! velocity for inertia hand-off, and a continuous zoom target.

use bevy_math::DVec2;
use bevy_reflect::prelude::*;

/// The sensitivity of the camera controller to gestures.
#[derive(Debug, Clone, Copy, Reflect)]
pub struct Sensitivity {
    /// Radians of yaw (`x`) and pitch (`y`) covered by a drag across the full
    /// viewport width and height. The conversion divides by the viewport
    /// size, so the feel is independent of the display resolution.
    pub drag: DVec2,
    /// Exponent applied to the pinch scale factor. The zoom target is
    /// `start_fov / scale^pinch`, so values above one make pinching more
    /// aggressive.
    pub pinch: f64,
}

impl Default for Sensitivity {
    fn default() -> Self {
        Self {
            drag: DVec2::splat(std::f64::consts::PI),
            pinch: 1.0,
        }
    }
}

/// Drag and pinch gesture state. Managed by the camera controller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Reflect)]
pub struct GestureTracker {
    dragging: bool,
    pinching: bool,
    /// FOV recorded when the current pinch began, radians.
    pinch_start_fov: f64,
    /// Latest measured pointer velocity converted to radians per second,
    /// handed to the inertia integrator when the drag ends.
    drag_velocity: DVec2,
}

impl GestureTracker {
    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Whether a pinch is in progress.
    pub fn is_pinching(&self) -> bool {
        self.pinching
    }

    pub(crate) fn begin_drag(&mut self) {
        self.dragging = true;
        self.drag_velocity = DVec2::ZERO;
    }

    /// Convert a pointer translation in logical pixels into yaw/pitch deltas,
    /// recording the pointer velocity for inertia.
    ///
    /// The mapping is grab-style: dragging right turns the camera left
    /// (positive yaw), dragging down tilts it up (positive pitch), so the
    /// panorama appears to follow the finger.
    pub(crate) fn drag_angles(
        &mut self,
        delta_px: DVec2,
        velocity_px: DVec2,
        viewport: DVec2,
        sensitivity: Sensitivity,
    ) -> DVec2 {
        let viewport = viewport.max(DVec2::ONE);
        self.drag_velocity = velocity_px / viewport * sensitivity.drag;
        delta_px / viewport * sensitivity.drag
    }

    /// End the drag and hand back the last measured angular velocity.
    pub(crate) fn end_drag(&mut self) -> DVec2 {
        self.dragging = false;
        std::mem::take(&mut self.drag_velocity)
    }

    pub(crate) fn begin_pinch(&mut self, current_fov: f64) {
        self.pinching = true;
        self.pinch_start_fov = current_fov;
    }

    /// The continuous zoom target for a pinch scale factor. Scale factors
    /// above one zoom in (smaller FOV). Degenerate scale input is ignored.
    pub(crate) fn pinch_target(&self, scale: f64, sensitivity: Sensitivity) -> Option<f64> {
        if !self.pinching || !scale.is_finite() || scale <= 0.0 {
            return None;
        }
        Some(self.pinch_start_fov / scale.powf(sensitivity.pinch))
    }

    pub(crate) fn end_pinch(&mut self) {
        self.pinching = false;
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn full_viewport_drag_covers_pi_radians() {
        let mut tracker = GestureTracker::default();
        tracker.begin_drag();
        let viewport = DVec2::new(1080.0, 1920.0);
        let angles = tracker.drag_angles(
            DVec2::new(1080.0, 960.0),
            DVec2::ZERO,
            viewport,
            Sensitivity::default(),
        );
        assert!((angles.x - std::f64::consts::PI).abs() < 1e-12);
        assert!((angles.y - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn drag_velocity_is_handed_off_on_release() {
        let mut tracker = GestureTracker::default();
        tracker.begin_drag();
        let viewport = DVec2::new(1000.0, 1000.0);
        tracker.drag_angles(
            DVec2::ZERO,
            DVec2::new(500.0, -250.0),
            viewport,
            Sensitivity::default(),
        );
        let velocity = tracker.end_drag();
        assert!(!tracker.is_dragging());
        assert!((velocity.x - std::f64::consts::PI * 0.5).abs() < 1e-12);
        assert!((velocity.y + std::f64::consts::PI * 0.25).abs() < 1e-12);
        // A second release reports no residual velocity.
        assert_eq!(tracker.end_drag(), DVec2::ZERO);
    }

    #[test]
    fn pinch_scale_two_halves_the_fov() {
        let mut tracker = GestureTracker::default();
        tracker.begin_pinch(75f64.to_radians());
        let target = tracker.pinch_target(2.0, Sensitivity::default()).unwrap();
        assert!((target - 37.5f64.to_radians()).abs() < 1e-12);
        tracker.end_pinch();
        assert_eq!(tracker.pinch_target(2.0, Sensitivity::default()), None);
    }

    #[test]
    fn degenerate_pinch_scale_is_ignored() {
        let mut tracker = GestureTracker::default();
        tracker.begin_pinch(1.0);
        assert_eq!(tracker.pinch_target(0.0, Sensitivity::default()), None);
        assert_eq!(tracker.pinch_target(f64::NAN, Sensitivity::default()), None);
        assert_eq!(tracker.pinch_target(-1.0, Sensitivity::default()), None);
    }
}
