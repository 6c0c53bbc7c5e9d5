use crate::{Mat3, Vec3};

/// Per-step telemetry filled by `step_ship_dbg`.
#[derive(Debug, Clone, Copy)]
pub struct StepDebug {
    pub step: usize,
    pub time: f64,
    /// U = sqrt(u² + v²) used to evaluate the model
    pub speed: f64,
    pub heading_error: f64,
    pub yaw_moment: f64,
    // Generalized force (surge, sway, yaw) and resulting acceleration
    pub tau: Vec3,
    pub nu_dot: Vec3,
    pub mass: Mat3,
    pub damping: Mat3,
}

impl Default for StepDebug {
    fn default() -> Self {
        Self {
            step: 0,
            time: 0.0,
            speed: 0.0,
            heading_error: 0.0,
            yaw_moment: 0.0,
            tau: Vec3::zeros(),
            nu_dot: Vec3::zeros(),
            mass: Mat3::zeros(),
            damping: Mat3::zeros(),
        }
    }
}

/// Pose and velocity of the ship at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShipState {
    /// Inertial pose (x north, y east, ψ heading in radians).
    pub eta: Vec3,
    /// Body-fixed velocity (u surge, v sway, r yaw rate).
    pub nu: Vec3,
}

impl ShipState {
    pub fn new(eta: Vec3, nu: Vec3) -> Self {
        Self { eta, nu }
    }

    pub fn at_rest() -> Self {
        Self::new(Vec3::zeros(), Vec3::zeros())
    }

    pub fn x(&self) -> f64 {
        self.eta.x
    }

    pub fn y(&self) -> f64 {
        self.eta.y
    }

    pub fn psi(&self) -> f64 {
        self.eta.z
    }

    pub fn u(&self) -> f64 {
        self.nu.x
    }

    pub fn v(&self) -> f64 {
        self.nu.y
    }

    pub fn r(&self) -> f64 {
        self.nu.z
    }

    /// Speed through the water, always ≥ 0.
    pub fn speed(&self) -> f64 {
        self.u().hypot(self.v())
    }

    pub fn is_finite(&self) -> bool {
        self.eta.iter().chain(self.nu.iter()).all(|c| c.is_finite())
    }
}

impl Default for ShipState {
    fn default() -> Self {
        Self::at_rest()
    }
}
