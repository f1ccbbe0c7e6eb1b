//! A camera controller for panoramic viewers.
//!
//! The controller fuses a continuous device-orientation sensor stream with
//! pointer drag and pinch gestures into a single stabilized camera transform:
//! yaw, pitch, and field of view, produced once per rendered frame. The
//! sensor path is filtered (dead zone, median window, spike clamping,
//! slew-rate limiting, exponential smoothing), drags carry momentum after
//! release, the two sources cross-fade without visible seams, and pinch zoom
//! snaps to discrete FOV presets with hysteresis.
//!
//! # Usage
//!
//! Add [`PanoCamPlugin`], spawn a camera with a
//! [`PanoCam`](controller::component::PanoCam) component, and feed it sensor
//! samples and gestures through its methods. The plugin applies the resulting
//! pose to the camera's `Transform` and perspective projection every frame.

#![warn(missing_docs)]

pub mod controller;

/// Common imports.
pub mod prelude {
    pub use crate::{
        controller::{
            blend::BlendSettings,
            component::{CameraPose, PanoCam, Session},
            filter::FilterSettings,
            gesture::Sensitivity,
            momentum::Momentum,
            zoom::{OrientationMode, ZoomLimits, ZoomLocked, ZoomPresets},
        },
        PanoCamPlugin,
    };
}

use bevy_app::prelude::*;

use crate::controller::{component::PanoCam, zoom::ZoomLocked};

/// Adds the systems and events required to update [`PanoCam`] cameras every
/// frame and to surface zoom lock feedback.
pub struct PanoCamPlugin;

impl Plugin for PanoCamPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<ZoomLocked>()
            .add_systems(PreUpdate, PanoCam::update_camera_positions)
            .register_type::<PanoCam>();
    }
}
