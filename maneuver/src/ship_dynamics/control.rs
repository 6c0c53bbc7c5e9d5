use serde::{Deserialize, Serialize};

use crate::math::normalize_angle;

/// PD gains on heading error and yaw rate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControllerGains {
    pub kp: f64,
    pub kd: f64,
}

impl ControllerGains {
    /// Pole placement for a second-order closed loop with relative damping 1:
    /// `kp = w_n²`, `kd = 2·w_n`.
    pub fn from_natural_frequency(w_n: f64) -> Self {
        Self {
            kp: w_n * w_n,
            kd: 2.0 * w_n,
        }
    }
}

/// Stateless heading autopilot. The command is scaled by the current yaw
/// inertia so the gains act directly on the closed-loop yaw dynamics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadingController {
    pub psi_ref: f64,
    pub gains: ControllerGains,
}

impl HeadingController {
    pub fn new(psi_ref: f64, gains: ControllerGains) -> Self {
        Self { psi_ref, gains }
    }

    /// Shortest signed heading error, in (−π, π].
    #[inline]
    pub fn heading_error(&self, psi: f64) -> f64 {
        normalize_angle(self.psi_ref - psi)
    }

    /// Yaw moment command `m33 · (kp·e − kd·r)`.
    pub fn yaw_moment(&self, psi: f64, r: f64, m33: f64) -> f64 {
        let error = self.heading_error(psi);
        debug_assert!(
            !error.is_finite() || error.abs() <= std::f64::consts::PI,
            "heading error not wrapped: {}",
            error
        );
        m33 * (self.gains.kp * error - self.gains.kd * r)
    }
}
