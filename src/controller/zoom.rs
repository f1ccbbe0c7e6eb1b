//! Stabilizes the zoom level at a small set of orientation-dependent discrete
//! FOV presets while still allowing continuous pinch control.

use bevy_ecs::prelude::*;
use bevy_reflect::prelude::*;

/// Bound the camera's field of view when zooming.
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct ZoomLimits {
    /// The narrowest allowed field of view (fully zoomed in), radians.
    pub min_fov: f64,
    /// The widest allowed field of view (fully zoomed out), radians.
    pub max_fov: f64,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            min_fov: 25f64.to_radians(),
            max_fov: 100f64.to_radians(),
        }
    }
}

/// Which preset list the snap engine uses. Injected by the host via
/// [`PanoCam::notify_orientation_mode_changed`](super::component::PanoCam::notify_orientation_mode_changed)
/// when the viewer's aspect changes, keeping the controller independent of any
/// platform orientation API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
pub enum OrientationMode {
    /// A tall (portrait-like) viewer.
    #[default]
    Narrow,
    /// A wide (landscape-like) viewer.
    Wide,
}

/// The discrete FOV values the zoom engine snaps to, and the hysteresis
/// thresholds governing when it locks on and lets go.
#[derive(Debug, Clone, Reflect)]
pub struct ZoomPresets {
    /// Presets used in [`OrientationMode::Narrow`], radians, sorted ascending.
    pub narrow: Vec<f64>,
    /// Presets used in [`OrientationMode::Wide`], radians, sorted ascending.
    pub wide: Vec<f64>,
    /// A free target within this distance of a preset locks onto it, radians.
    pub snap_window: f64,
    /// A locked target must move further than this from the preset to break
    /// the lock, radians. Kept larger than `snap_window` so the lock cannot
    /// oscillate at the snap boundary.
    pub release_delta: f64,
}

impl Default for ZoomPresets {
    fn default() -> Self {
        Self {
            narrow: vec![
                45f64.to_radians(),
                60f64.to_radians(),
                75f64.to_radians(),
                90f64.to_radians(),
            ],
            wide: vec![
                35f64.to_radians(),
                50f64.to_radians(),
                65f64.to_radians(),
                80f64.to_radians(),
            ],
            snap_window: 2.5f64.to_radians(),
            release_delta: 5f64.to_radians(),
        }
    }
}

impl ZoomPresets {
    /// The preset list for the given mode.
    pub fn for_mode(&self, mode: OrientationMode) -> &[f64] {
        match mode {
            OrientationMode::Narrow => &self.narrow,
            OrientationMode::Wide => &self.wide,
        }
    }
}

/// Fired exactly when the zoom engine locks onto a preset, intended for
/// discrete user feedback such as haptics.
#[derive(Debug, Event)]
pub struct ZoomLocked {
    /// The camera whose zoom locked.
    pub camera: Entity,
    /// The preset FOV that was locked, radians.
    pub fov: f64,
}

/// Current zoom state. Managed by the camera controller.
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct ZoomState {
    current_fov: f64,
    locked_preset: Option<usize>,
    just_locked: bool,
}

impl Default for ZoomState {
    fn default() -> Self {
        Self {
            current_fov: 75f64.to_radians(),
            locked_preset: None,
            just_locked: false,
        }
    }
}

impl ZoomState {
    /// The stabilized field of view, radians.
    pub fn current_fov(&self) -> f64 {
        self.current_fov
    }

    /// The preset index currently locked, if any. At most one preset is
    /// locked at a time.
    pub fn locked_preset(&self) -> Option<usize> {
        self.locked_preset
    }

    /// Route a continuous zoom target through the snap engine.
    ///
    /// While locked, the output stays pinned to the preset until the target
    /// departs by more than `release_delta`. While free, the nearest preset
    /// within `snap_window` captures the target; otherwise the clamped target
    /// passes through unchanged.
    pub fn apply_target(
        &mut self,
        target: f64,
        mode: OrientationMode,
        presets: &ZoomPresets,
        limits: &ZoomLimits,
    ) {
        let target = target.clamp(limits.min_fov, limits.max_fov);
        let list = presets.for_mode(mode);

        if let Some(index) = self.locked_preset {
            match list.get(index) {
                Some(&locked) if (target - locked).abs() < presets.release_delta => {
                    self.current_fov = locked;
                    return;
                }
                _ => self.locked_preset = None,
            }
        }

        let nearest = list
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| (target - *a).abs().total_cmp(&(target - *b).abs()));
        if let Some((index, &preset)) = nearest {
            if (target - preset).abs() <= presets.snap_window {
                self.just_locked = true;
                self.locked_preset = Some(index);
                self.current_fov = preset;
                return;
            }
        }
        self.current_fov = target;
    }

    /// Drop any active lock without moving the zoom. Called when the preset
    /// list changes on an orientation switch.
    pub fn clear_lock(&mut self) {
        self.locked_preset = None;
        self.just_locked = false;
    }

    /// Take the pending unlocked-to-locked transition signal, if one fired
    /// since the last call.
    pub fn take_lock_signal(&mut self) -> bool {
        std::mem::take(&mut self.just_locked)
    }
}
