//! The core camera controller: orientation signal filtering, gesture
//! tracking, post-drag inertia, sensor/gesture blending, and zoom snapping,
//! all owned by the [`PanoCam`](component::PanoCam) component.

pub mod blend;
pub mod component;
pub mod filter;
pub mod gesture;
pub mod momentum;
pub mod zoom;
