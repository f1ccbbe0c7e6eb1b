//! The primary [`Component`] of the controller, [`PanoCam`].

use std::time::Duration;

use bevy_ecs::prelude::*;
use bevy_log::prelude::*;
use bevy_math::{DQuat, DVec2, EulerRot};
use bevy_reflect::prelude::*;
use bevy_render::prelude::*;
use bevy_time::prelude::*;
use bevy_transform::prelude::*;
use bevy_window::{PrimaryWindow, RequestRedraw, Window};

use super::{
    blend::{clamp_angular_step, BlendSettings, BlendWeight},
    filter::{FilterSettings, SignalFilter},
    gesture::{GestureTracker, Sensitivity},
    momentum::{Momentum, Velocity},
    zoom::{OrientationMode, ZoomLimits, ZoomLocked, ZoomPresets, ZoomState},
};

/// The stabilized camera output for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct CameraPose {
    /// Rotation around the vertical axis, radians. Unbounded: it accumulates
    /// continuously and never wraps.
    pub yaw: f64,
    /// Rotation around the lateral axis, radians, always within the
    /// controller's pitch clamp.
    pub pitch: f64,
    /// Field of view, radians, always within the zoom limits.
    pub fov: f64,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            fov: 75f64.to_radians(),
        }
    }
}

impl CameraPose {
    /// The pose as a rotation, yaw before pitch, roll always zero.
    pub fn rotation(&self) -> DQuat {
        DQuat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }

    fn angles(&self) -> DVec2 {
        DVec2::new(self.yaw, self.pitch)
    }
}

/// Lifecycle state of the controller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
pub enum Session {
    /// Samples, gestures, and ticks are processed.
    #[default]
    Active,
    /// All inputs are ignored; [`PanoCam::tick`] re-emits the last safe pose.
    Stopped,
}

/// Tracks all state of a panoramic camera's controller, including its inputs,
/// motion, and settings.
///
/// The controller fuses two independent input sources into one camera pose:
/// a continuous device-orientation sample stream (filtered by
/// [`SignalFilter`]) and discrete drag/pinch gestures (tracked by
/// [`GestureTracker`], extended past release by [`Velocity`] inertia). Each
/// frame the two are cross-faded by [`BlendWeight`] and bounded by an angular
/// safety clamp, while the zoom engine maps the pinch target onto stabilized
/// FOV presets.
///
/// # Moving the camera
///
/// [`PanoCamPlugin`](crate::PanoCamPlugin) drives the per-frame update; the
/// host feeds inputs directly:
///
/// 1. Push sensor attitudes with [`PanoCam::submit_orientation_sample`] at
///    whatever cadence the sensor delivers.
/// 2. Forward gestures with [`PanoCam::begin_drag`], [`PanoCam::update_drag`],
///    [`PanoCam::end_drag`], and the pinch equivalents.
/// 3. Use [`PanoCam::recenter`], [`PanoCam::set_rotation_locked`], and
///    [`PanoCam::notify_orientation_mode_changed`] for control signals.
///
/// Every mutation goes through these entry points; the component is the single
/// writer of all camera state, and [`PanoCam::tick`] always returns a
/// renderable pose no matter what was fed in.
#[derive(Debug, Clone, Component, Reflect)]
pub struct PanoCam {
    /// Filtering applied to the orientation sample stream.
    pub filtering: FilterSettings,
    /// Input sensitivity of the camera.
    pub sensitivity: Sensitivity,
    /// Amount of camera momentum after a drag has ended.
    pub momentum: Momentum,
    /// Sensor/gesture cross-fade and the per-frame angular safety clamp.
    pub blending: BlendSettings,
    /// FOV bounds for the zoom engine.
    pub zoom_limits: ZoomLimits,
    /// The discrete FOV presets the zoom engine snaps to.
    pub zoom_presets: ZoomPresets,
    /// Largest pitch magnitude the camera may reach, radians.
    pub max_pitch: f64,
    /// Viewport size in logical pixels, used to make drag gestures
    /// resolution independent. Kept in sync with the primary window by
    /// [`PanoCam::update_camera_positions`]; set it manually when driving the
    /// controller without the plugin.
    pub viewport_size: DVec2,
    session: Session,
    mode: OrientationMode,
    rotation_locked: bool,
    filter: SignalFilter,
    gesture: GestureTracker,
    velocity: Velocity,
    blend: BlendWeight,
    zoom: ZoomState,
    /// Gesture-owned yaw/pitch, accumulated by drags and inertia.
    angles: DVec2,
    /// The pose emitted by the previous tick.
    pose: CameraPose,
}

impl Default for PanoCam {
    fn default() -> Self {
        Self {
            filtering: Default::default(),
            sensitivity: Default::default(),
            momentum: Default::default(),
            blending: Default::default(),
            zoom_limits: Default::default(),
            zoom_presets: Default::default(),
            max_pitch: 88f64.to_radians(),
            viewport_size: DVec2::new(1080.0, 1920.0),
            session: Session::Active,
            mode: OrientationMode::Narrow,
            rotation_locked: false,
            filter: Default::default(),
            gesture: Default::default(),
            velocity: Velocity::None,
            blend: Default::default(),
            zoom: Default::default(),
            angles: DVec2::ZERO,
            pose: Default::default(),
        }
    }
}

impl PanoCam {
    /// The pose emitted by the most recent tick.
    pub fn camera_pose(&self) -> CameraPose {
        self.pose
    }

    /// Whether the controller is processing inputs.
    pub fn session(&self) -> Session {
        self.session
    }

    /// The active preset list selector.
    pub fn orientation_mode(&self) -> OrientationMode {
        self.mode
    }

    /// Whether rotation is currently locked.
    pub fn is_rotation_locked(&self) -> bool {
        self.rotation_locked
    }

    /// Whether post-drag inertia is currently running.
    pub fn is_inertia_active(&self) -> bool {
        self.velocity.is_active()
    }

    /// (Re)start the controller from zero state. A freshly constructed
    /// controller is already started.
    pub fn start(&mut self) {
        self.zoom = ZoomState::default();
        self.reset_motion_state();
        self.session = Session::Active;
    }

    /// Stop processing inputs and return to zero state. Idempotent; `tick`
    /// keeps returning the default pose until [`PanoCam::start`].
    pub fn stop(&mut self) {
        self.zoom = ZoomState::default();
        self.reset_motion_state();
        self.session = Session::Stopped;
    }

    /// Re-anchor the camera: the next orientation sample becomes the new
    /// reference attitude, and yaw, pitch, inertia, blend easing, and all
    /// filter history are zeroed in one atomic replacement. Zoom is
    /// unaffected.
    pub fn recenter(&mut self) {
        self.reset_motion_state();
    }

    /// Toggle rotation lock. While locked, sensor and drag input is ignored
    /// and the camera holds its last orientation; any running inertia stops
    /// immediately. Pinch zoom stays available, as it does not rotate the
    /// camera.
    pub fn set_rotation_locked(&mut self, locked: bool) {
        if locked && !self.rotation_locked {
            self.velocity = Velocity::None;
            if self.gesture.is_dragging() {
                // Force-ending the drag must also ease the sensor weight back
                // in, exactly as a regular drag release would; otherwise the
                // sensor stays muted after unlocking.
                let _ = self.gesture.end_drag();
                self.blend
                    .ease_to(1.0, self.blending.fade_in, &self.blending.curve);
            }
        }
        self.rotation_locked = locked;
    }

    /// Select which FOV preset list is active. Switching modes clears any
    /// active zoom lock.
    pub fn notify_orientation_mode_changed(&mut self, mode: OrientationMode) {
        if mode != self.mode {
            self.mode = mode;
            self.zoom.clear_lock();
        }
    }

    /// Push one absolute device attitude with its sensor timestamp in
    /// seconds. Tolerates irregular, paused, or non-monotonic delivery.
    pub fn submit_orientation_sample(&mut self, attitude: DQuat, timestamp: f64) {
        if self.session == Session::Stopped || self.rotation_locked {
            return;
        }
        self.filter.submit(attitude, timestamp, &self.filtering);
    }

    /// Begin a drag. Stops any running inertia and starts easing the sensor
    /// weight out.
    pub fn begin_drag(&mut self) {
        if self.session == Session::Stopped || self.rotation_locked {
            return;
        }
        self.velocity = Velocity::None;
        self.gesture.begin_drag();
        self.blend
            .ease_to(0.0, self.blending.fade_out, &self.blending.curve);
    }

    /// Feed a drag movement: pointer translation since the last event and the
    /// instantaneous pointer velocity, both in logical pixels.
    pub fn update_drag(&mut self, delta_px: DVec2, velocity_px: DVec2) {
        if self.session == Session::Stopped || self.rotation_locked || !self.gesture.is_dragging()
        {
            return;
        }
        let delta =
            self.gesture
                .drag_angles(delta_px, velocity_px, self.viewport_size, self.sensitivity);
        self.angles.x += delta.x;
        self.angles.y = (self.angles.y + delta.y).clamp(-self.max_pitch, self.max_pitch);
    }

    /// End (or cancel) the drag, easing the sensor weight back in and handing
    /// the last measured angular velocity to the inertia integrator.
    pub fn end_drag(&mut self) {
        if !self.gesture.is_dragging() {
            return;
        }
        let velocity = self.gesture.end_drag();
        self.blend
            .ease_to(1.0, self.blending.fade_in, &self.blending.curve);
        if velocity != DVec2::ZERO && !self.rotation_locked {
            self.velocity = Velocity::Spinning(velocity);
        }
    }

    /// Begin a pinch, recording the current FOV as the gesture baseline.
    pub fn begin_pinch(&mut self) {
        if self.session == Session::Stopped {
            return;
        }
        self.gesture.begin_pinch(self.zoom.current_fov());
    }

    /// Feed a pinch scale factor relative to the start of the gesture. Scale
    /// factors above one zoom in. The target is clamped and routed through
    /// the snap engine before it is applied.
    pub fn update_pinch(&mut self, scale: f64) {
        if self.session == Session::Stopped {
            return;
        }
        if let Some(target) = self.gesture.pinch_target(scale, self.sensitivity) {
            self.zoom
                .apply_target(target, self.mode, &self.zoom_presets, &self.zoom_limits);
        }
    }

    /// End the pinch.
    pub fn end_pinch(&mut self) {
        self.gesture.end_pinch();
    }

    /// Advance the controller by one rendered frame and return the pose to
    /// apply.
    ///
    /// Safe to call at any refresh rate, with or without new inputs since the
    /// previous tick: it continues any running inertia and blend easing and
    /// otherwise re-emits the last stable orientation. Never fails; when
    /// stopped or rotation-locked it returns the last known safe pose.
    pub fn tick(&mut self, delta_time: Duration) -> CameraPose {
        if self.session == Session::Stopped {
            return self.pose;
        }
        self.pose.fov = self.zoom.current_fov();
        if self.rotation_locked {
            return self.pose;
        }

        self.blend.advance(delta_time);
        self.velocity.decay(self.momentum, delta_time);
        let inertia = self.velocity.frame_displacement(delta_time);
        if inertia != DVec2::ZERO {
            self.angles.x += inertia.x;
            self.angles.y = (self.angles.y + inertia.y).clamp(-self.max_pitch, self.max_pitch);
        }

        let sensor = self.filter.output(&self.filtering);
        let weight = self.blend.value(&self.blending.curve);
        let target = DVec2::new(
            self.angles.x + sensor.x * weight,
            (self.angles.y + sensor.y * weight).clamp(-self.max_pitch, self.max_pitch),
        );

        let max_step = self.blending.max_angle_per_second * delta_time.as_secs_f64();
        let next = clamp_angular_step(self.pose.angles(), target, max_step);
        self.pose.yaw = next.x;
        self.pose.pitch = next.y;
        self.pose
    }

    /// Take the pending zoom lock signal, if the engine locked onto a preset
    /// since the last call.
    pub fn take_zoom_lock_signal(&mut self) -> bool {
        self.zoom.take_lock_signal()
    }

    fn reset_motion_state(&mut self) {
        self.filter = SignalFilter::default();
        self.gesture = GestureTracker::default();
        self.velocity = Velocity::None;
        self.blend = BlendWeight::default();
        self.angles = DVec2::ZERO;
        self.pose = CameraPose {
            fov: self.zoom.current_fov(),
            ..Default::default()
        };
    }

    /// Update transforms and projections for all panoramic cameras. Called
    /// once per frame by [`PanoCamPlugin`](crate::PanoCamPlugin).
    pub fn update_camera_positions(
        mut cameras: Query<(Entity, &mut PanoCam, &mut Transform, &mut Projection)>,
        windows: Query<&Window, With<PrimaryWindow>>,
        time: Res<Time>,
        mut zoom_locks: EventWriter<ZoomLocked>,
        mut redraw: EventWriter<RequestRedraw>,
    ) {
        let viewport = windows
            .get_single()
            .ok()
            .map(|window| DVec2::new(window.width() as f64, window.height() as f64));

        for (entity, mut controller, mut transform, mut projection) in &mut cameras {
            if let Some(viewport) = viewport {
                controller.viewport_size = viewport;
            }

            let last = controller.camera_pose();
            let pose = controller.tick(time.delta());
            transform.rotation = pose.rotation().as_quat();
            match &mut *projection {
                Projection::Perspective(perspective) => perspective.fov = pose.fov as f32,
                Projection::Orthographic(_) => warn_once!(
                    "PanoCam drives a perspective projection; an orthographic camera only receives rotation."
                ),
            }

            if controller.take_zoom_lock_signal() {
                zoom_locks.send(ZoomLocked {
                    camera: entity,
                    fov: pose.fov,
                });
            }
            if pose != last {
                redraw.send(RequestRedraw);
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::Rng;

    const FRAME: Duration = Duration::from_nanos(16_666_667);

    fn attitude(yaw: f64, pitch: f64) -> DQuat {
        DQuat::from_euler(EulerRot::YXZ, yaw, pitch, 0.0)
    }

    /// Anchor at identity, sweep the sensor to the given attitude, and spin
    /// the controller until the smoothing pipeline settles.
    fn settle(cam: &mut PanoCam, yaw: f64, pitch: f64, start_time: f64) -> f64 {
        let mut t = start_time;
        cam.submit_orientation_sample(attitude(0.0, 0.0), t);
        for i in 1..=40 {
            let progress = (i as f64 / 10.0).min(1.0);
            t += 0.05;
            cam.submit_orientation_sample(attitude(yaw * progress, pitch * progress), t);
        }
        for _ in 0..120 {
            cam.tick(FRAME);
        }
        t
    }

    #[test]
    fn thirty_degree_turn_converges_without_overshoot() {
        let mut cam = PanoCam::default();
        let total = 30f64.to_radians();

        // Anchor, then ten samples sweeping 30 degrees over half a second.
        cam.submit_orientation_sample(attitude(0.0, 0.0), 0.0);
        for i in 1..=10 {
            let t = i as f64 * 0.05;
            cam.submit_orientation_sample(attitude(total * i as f64 / 10.0, 0.0), t);
        }
        // Sensor holds still afterwards.
        let mut t = 0.5;
        for _ in 0..30 {
            t += 0.05;
            cam.submit_orientation_sample(attitude(total, 0.0), t);
        }

        let mut max_yaw: f64 = 0.0;
        let mut last_yaw = 0.0;
        for _ in 0..240 {
            let pose = cam.tick(FRAME);
            let step = (pose.yaw - last_yaw).abs();
            let bound = cam.blending.max_angle_per_second * FRAME.as_secs_f64();
            assert!(step <= bound + 1e-9, "frame step {step} exceeds clamp");
            last_yaw = pose.yaw;
            max_yaw = max_yaw.max(pose.yaw);
        }
        assert!(max_yaw <= total + 1e-9, "yaw overshot: {max_yaw}");
        assert!(
            (cam.camera_pose().yaw - total).abs() < 1e-3,
            "yaw did not converge: {}",
            cam.camera_pose().yaw
        );
        assert!(cam.camera_pose().pitch.abs() < 1e-9);
    }

    #[test]
    fn pinch_scale_two_from_75_degrees() {
        let mut cam = PanoCam::default();
        cam.begin_pinch();
        cam.update_pinch(2.0);
        cam.end_pinch();
        let pose = cam.tick(FRAME);
        // 75 / 2 = 37.5 degrees: not near any narrow preset, passes through.
        assert!((pose.fov - 37.5f64.to_radians()).abs() < 1e-9);

        // A pinch landing near a preset snaps and raises the lock signal.
        cam.begin_pinch();
        cam.update_pinch(37.5 / 44.0);
        assert!(cam.take_zoom_lock_signal());
        cam.end_pinch();
        assert!((cam.tick(FRAME).fov - 45f64.to_radians()).abs() < 1e-9);
    }

    #[test]
    fn recenter_is_idempotent_and_atomic() {
        let mut cam = PanoCam::default();
        let t = settle(&mut cam, 0.8, 0.2, 0.0);
        cam.begin_drag();
        cam.update_drag(DVec2::new(300.0, 100.0), DVec2::new(900.0, 300.0));
        cam.end_drag();
        cam.tick(FRAME);
        assert!(cam.camera_pose().yaw != 0.0);

        cam.recenter();
        let once = cam.clone();
        cam.recenter();

        assert_eq!(cam.camera_pose(), once.camera_pose());
        assert_eq!(cam.camera_pose().yaw, 0.0);
        assert_eq!(cam.camera_pose().pitch, 0.0);
        assert_eq!(cam.filter, once.filter);
        assert_eq!(cam.velocity, Velocity::None);
        assert!(!cam.filter.is_anchored());

        // The next sample re-anchors instead of producing motion.
        cam.submit_orientation_sample(attitude(2.0, 0.5), t + 1.0);
        assert_eq!(cam.tick(FRAME).yaw, 0.0);
    }

    #[test]
    fn drag_hands_velocity_to_inertia_which_decays() {
        let mut cam = PanoCam::default();
        cam.viewport_size = DVec2::new(1000.0, 1000.0);
        cam.begin_drag();
        cam.update_drag(DVec2::new(50.0, 0.0), DVec2::new(500.0, 0.0));
        cam.end_drag();
        assert!(cam.is_inertia_active());

        let before = cam.tick(FRAME).yaw;
        let mut ticks = 0;
        while cam.is_inertia_active() {
            cam.tick(FRAME);
            ticks += 1;
            assert!(ticks < 10_000, "inertia never stopped");
        }
        // Motion continued past the release, then came to rest.
        assert!(cam.camera_pose().yaw > before);
        let resting = cam.camera_pose().yaw;
        for _ in 0..10 {
            cam.tick(FRAME);
        }
        assert_eq!(cam.camera_pose().yaw, resting);
    }

    #[test]
    fn new_drag_restarts_inertia_cleanly() {
        let mut cam = PanoCam::default();
        cam.begin_drag();
        cam.update_drag(DVec2::new(50.0, 0.0), DVec2::new(800.0, 0.0));
        cam.end_drag();
        assert!(cam.is_inertia_active());
        cam.begin_drag();
        assert!(!cam.is_inertia_active());
        cam.end_drag();
    }

    #[test]
    fn drag_transitions_never_pop() {
        let mut cam = PanoCam::default();
        settle(&mut cam, 0.3, 0.1, 0.0);

        let bound = cam.blending.max_angle_per_second * FRAME.as_secs_f64() + 1e-9;
        let mut last = cam.camera_pose().angles();
        let mut check = |cam: &mut PanoCam| {
            let pose = cam.tick(FRAME);
            let step = (pose.angles() - last).length();
            assert!(step <= bound, "output popped by {step}");
            last = pose.angles();
        };

        cam.begin_drag();
        for _ in 0..30 {
            cam.update_drag(DVec2::new(4.0, 2.0), DVec2::new(240.0, 120.0));
            check(&mut cam);
        }
        cam.end_drag();
        for _ in 0..60 {
            check(&mut cam);
        }
    }

    #[test]
    fn pitch_stays_clamped_under_random_input() {
        let mut cam = PanoCam::default();
        let mut rng = rand::thread_rng();
        cam.submit_orientation_sample(attitude(0.0, 0.0), 0.0);
        let mut t = 0.0;
        for i in 0..2000 {
            t += rng.gen_range(0.001..0.1);
            cam.submit_orientation_sample(
                attitude(rng.gen_range(-3.0..3.0), rng.gen_range(-1.5..1.5)),
                t,
            );
            match i % 40 {
                0 => cam.begin_drag(),
                20 => {
                    cam.update_drag(
                        DVec2::new(rng.gen_range(-500.0..500.0), rng.gen_range(-2000.0..2000.0)),
                        DVec2::new(0.0, rng.gen_range(-3000.0..3000.0)),
                    );
                }
                39 => cam.end_drag(),
                _ => {}
            }
            let pose = cam.tick(FRAME);
            assert!(
                pose.pitch.abs() <= cam.max_pitch + 1e-9,
                "pitch escaped clamp: {}",
                pose.pitch
            );
        }
    }

    #[test]
    fn rotation_lock_holds_the_last_orientation() {
        let mut cam = PanoCam::default();
        let t = settle(&mut cam, 0.5, 0.1, 0.0);
        let held = cam.camera_pose();

        cam.set_rotation_locked(true);
        cam.submit_orientation_sample(attitude(2.0, 0.8), t + 0.05);
        cam.begin_drag();
        cam.update_drag(DVec2::new(500.0, 500.0), DVec2::ZERO);
        cam.end_drag();
        for _ in 0..30 {
            let pose = cam.tick(FRAME);
            assert_eq!(pose.yaw, held.yaw);
            assert_eq!(pose.pitch, held.pitch);
        }

        // Zoom is not rotation: pinching still works while locked.
        cam.begin_pinch();
        cam.update_pinch(2.0);
        cam.end_pinch();
        assert!(cam.tick(FRAME).fov < held.fov);
    }

    #[test]
    fn lock_during_drag_does_not_mute_the_sensor_after_unlock() {
        let mut cam = PanoCam::default();
        let mut t = 0.0;
        cam.submit_orientation_sample(attitude(0.0, 0.0), t);

        // Ease the sensor weight fully out mid-drag, then lock, which
        // force-ends the drag.
        cam.begin_drag();
        for _ in 0..30 {
            cam.tick(FRAME);
        }
        cam.set_rotation_locked(true);
        cam.set_rotation_locked(false);

        // The sensor sweeps half a radian; the camera must follow it.
        for i in 1..=40 {
            let progress = (i as f64 / 10.0).min(1.0);
            t += 0.05;
            cam.submit_orientation_sample(attitude(0.5 * progress, 0.0), t);
        }
        for _ in 0..300 {
            cam.tick(FRAME);
        }
        assert!(
            (cam.camera_pose().yaw - 0.5).abs() < 1e-3,
            "sensor motion ignored after unlock: yaw = {}",
            cam.camera_pose().yaw
        );
    }

    #[test]
    fn mode_switch_drops_an_active_zoom_lock() {
        let mut cam = PanoCam::default();
        cam.begin_pinch();
        // 75 / (75 / 74) = 74 degrees, inside the snap window of the 75
        // degree narrow preset.
        cam.update_pinch(75.0 / 74.0);
        cam.end_pinch();
        assert!(cam.take_zoom_lock_signal());
        assert_eq!(cam.zoom.locked_preset(), Some(2));

        // Re-announcing the current mode leaves the lock alone.
        cam.notify_orientation_mode_changed(OrientationMode::Narrow);
        assert_eq!(cam.zoom.locked_preset(), Some(2));

        cam.notify_orientation_mode_changed(OrientationMode::Wide);
        assert_eq!(cam.orientation_mode(), OrientationMode::Wide);
        assert_eq!(cam.zoom.locked_preset(), None);
        // Dropping the lock does not move the held FOV.
        assert!((cam.tick(FRAME).fov - 75f64.to_radians()).abs() < 1e-9);
    }

    #[test]
    fn tick_is_safe_when_stopped() {
        let mut cam = PanoCam::default();
        settle(&mut cam, 0.7, 0.2, 0.0);
        cam.stop();
        let pose = cam.tick(FRAME);
        assert_eq!(pose, CameraPose::default());
        // Stop is idempotent, and inputs are ignored until restart.
        cam.stop();
        cam.submit_orientation_sample(attitude(1.0, 0.0), 100.0);
        cam.begin_drag();
        cam.update_drag(DVec2::new(100.0, 0.0), DVec2::ZERO);
        assert_eq!(cam.tick(FRAME), CameraPose::default());

        cam.start();
        assert_eq!(cam.session(), Session::Active);
        assert_eq!(cam.tick(FRAME), CameraPose::default());
    }
}
