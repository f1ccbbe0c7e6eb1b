//! Turns the raw device-orientation sample stream into a smooth, low-noise
//! yaw/pitch delta relative to a reference attitude.
//!
//! The pipeline per sample is: extract raw yaw/pitch from the rotation
//! relative to the reference (roll never leaks in, only the forward vector is
//! used), unwrap yaw into a continuous angle, apply a dead zone, a short
//! median window, spike clamping, slew-rate limiting, and a
//! frame-rate-independent exponential smoother. A ramp-up window scales the
//! output in after every (re)anchor so the first samples cannot jump the
//! camera.

use std::{
    f64::consts::{PI, TAU},
    time::Duration,
};

use bevy_math::{DQuat, DVec2, DVec3};
use bevy_reflect::prelude::*;

/// Length of the per-axis median window used for outlier rejection.
const MEDIAN_WINDOW: usize = 5;

/// Tuning for the orientation [`SignalFilter`].
///
/// All angles are radians, all rates are radians per second. Vector-valued
/// fields hold the yaw value in `x` and the pitch value in `y`.
#[derive(Debug, Clone, Reflect)]
pub struct FilterSettings {
    /// Raw deltas with a magnitude below this are treated as exactly zero, to
    /// suppress idle sensor jitter.
    pub dead_zone: f64,
    /// The largest change accepted from a single sample. Steps beyond this
    /// are clamped to it, not discarded, so sustained fast motion still gets
    /// through.
    pub spike_limit: DVec2,
    /// Slew-rate limit. The accepted per-sample change is additionally capped
    /// at `max_rate * dt`.
    pub max_rate: DVec2,
    /// Time constants of the exponential smoother. The smoothing factor is
    /// computed as `1 - e^(-dt/tau)`, which keeps the smoothing strength
    /// independent of the sample rate.
    pub smoothing_tau: DVec2,
    /// After (re)anchoring, the output is scaled by `elapsed / ramp_up`
    /// (capped at one) to fade the sensor in instead of jumping.
    pub ramp_up: Duration,
    /// `dt` assumed when a sample carries an invalid or non-monotonic
    /// timestamp.
    pub fallback_dt: f64,
    /// Smallest believable gap between consecutive sample timestamps.
    pub min_dt: f64,
    /// Largest believable gap between consecutive sample timestamps. Gaps
    /// beyond this (delivery pauses) are clamped down so the filter does not
    /// take one giant step when samples resume.
    pub max_dt: f64,
}

impl Default for FilterSettings {
    fn default() -> Self {
        Self {
            dead_zone: 0.002,
            spike_limit: DVec2::new(0.12, 0.08),
            max_rate: DVec2::new(3.0, 2.0),
            smoothing_tau: DVec2::new(0.05, 0.07),
            ramp_up: Duration::from_millis(180),
            fallback_dt: 1.0 / 60.0,
            min_dt: 1.0 / 240.0,
            max_dt: 0.25,
        }
    }
}

/// Filter state. Managed by the camera controller; replaced wholesale on
/// recenter.
#[derive(Debug, Clone, PartialEq, Reflect)]
pub struct SignalFilter {
    /// The attitude captured by the first sample after a (re)anchor. All
    /// subsequent samples are expressed relative to it.
    reference: Option<DQuat>,
    /// Raw (wrapped) yaw of the previous sample, used for unwrapping.
    last_raw_yaw: f64,
    /// Continuously unwrapped yaw, free of the ±π discontinuity.
    unwrapped_yaw: f64,
    /// Ring buffer backing the median window.
    window: [DVec2; MEDIAN_WINDOW],
    window_len: usize,
    window_head: usize,
    /// Value after spike and slew clamping.
    accepted: DVec2,
    /// Value after exponential smoothing.
    smoothed: DVec2,
    last_timestamp: Option<f64>,
    /// Sample time accumulated since the last (re)anchor, drives the ramp-up.
    elapsed: f64,
}

impl Default for SignalFilter {
    fn default() -> Self {
        Self {
            reference: None,
            last_raw_yaw: 0.0,
            unwrapped_yaw: 0.0,
            window: [DVec2::ZERO; MEDIAN_WINDOW],
            window_len: 0,
            window_head: 0,
            accepted: DVec2::ZERO,
            smoothed: DVec2::ZERO,
            last_timestamp: None,
            elapsed: 0.0,
        }
    }
}

/// Wrap an angle to `(-PI, PI]`, used to take the shortest signed delta
/// between consecutive raw yaw readings.
pub(crate) fn wrap_angle(angle: f64) -> f64 {
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped == -PI {
        PI
    } else {
        wrapped
    }
}

impl SignalFilter {
    /// Whether a reference attitude has been captured since the last reset.
    pub fn is_anchored(&self) -> bool {
        self.reference.is_some()
    }

    /// Feed one absolute orientation sample.
    ///
    /// The first sample after a reset becomes the reference attitude and
    /// contributes zero motion. Invalid input never fails; it degrades to "no
    /// motion" or to the fallback `dt`.
    pub fn submit(&mut self, attitude: DQuat, timestamp: f64, settings: &FilterSettings) {
        let dt = self.sample_dt(timestamp, settings);

        let Some(reference) = self.reference else {
            // Anchor. No motion can be derived from a single sample.
            self.reference = Some(attitude.normalize());
            self.push_window(DVec2::ZERO);
            return;
        };

        let relative = reference.inverse() * attitude.normalize();
        let forward = relative * DVec3::NEG_Z;
        // Horizontal-plane arctangent for yaw, elevation for pitch. Using only
        // the forward vector keeps roll out of both axes.
        let raw_yaw = (-forward.x).atan2(-forward.z);
        let raw_pitch = forward.y.clamp(-1.0, 1.0).asin();

        self.unwrapped_yaw += wrap_angle(raw_yaw - self.last_raw_yaw);
        self.last_raw_yaw = raw_yaw;

        let dead = |v: f64| if v.abs() < settings.dead_zone { 0.0 } else { v };
        self.push_window(DVec2::new(dead(self.unwrapped_yaw), dead(raw_pitch)));
        let median = self.window_median();

        let step = (median - self.accepted)
            .clamp(-settings.spike_limit, settings.spike_limit)
            .clamp(-settings.max_rate * dt, settings.max_rate * dt);
        self.accepted += step;

        let alpha = DVec2::new(
            1.0 - (-dt / settings.smoothing_tau.x).exp(),
            1.0 - (-dt / settings.smoothing_tau.y).exp(),
        );
        self.smoothed += alpha * (self.accepted - self.smoothed);

        self.elapsed += dt;
    }

    /// The smoothed, ramped yaw/pitch delta relative to the reference
    /// attitude, ready for blending.
    pub fn output(&self, settings: &FilterSettings) -> DVec2 {
        let ramp_up = settings.ramp_up.as_secs_f64();
        let ramp = if ramp_up <= 0.0 {
            1.0
        } else {
            (self.elapsed / ramp_up).clamp(0.0, 1.0)
        };
        self.smoothed * ramp
    }

    fn sample_dt(&mut self, timestamp: f64, settings: &FilterSettings) -> f64 {
        let dt = match self.last_timestamp {
            Some(last) if timestamp.is_finite() && timestamp > last => {
                (timestamp - last).clamp(settings.min_dt, settings.max_dt)
            }
            _ => settings.fallback_dt,
        };
        if timestamp.is_finite() {
            self.last_timestamp = Some(timestamp);
        }
        dt
    }

    fn push_window(&mut self, value: DVec2) {
        self.window[self.window_head] = value;
        self.window_head = (self.window_head + 1) % MEDIAN_WINDOW;
        self.window_len = (self.window_len + 1).min(MEDIAN_WINDOW);
    }

    fn window_median(&self) -> DVec2 {
        let mut yaw = [0.0; MEDIAN_WINDOW];
        let mut pitch = [0.0; MEDIAN_WINDOW];
        for i in 0..self.window_len {
            yaw[i] = self.window[i].x;
            pitch[i] = self.window[i].y;
        }
        let yaw = &mut yaw[..self.window_len];
        let pitch = &mut pitch[..self.window_len];
        yaw.sort_unstable_by(|a, b| a.total_cmp(b));
        pitch.sort_unstable_by(|a, b| a.total_cmp(b));
        DVec2::new(yaw[self.window_len / 2], pitch[self.window_len / 2])
    }
}
