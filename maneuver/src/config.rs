use crate::hull::HullParameters;
use crate::ship_dynamics::{ControllerGains, HeadingController, ShipState};
use crate::SimError;

/// Everything a run needs. Angles are in radians.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    /// Sampling time h (s).
    pub h: f64,
    /// Number of steps N; the trajectory holds N + 1 samples.
    pub steps: usize,
    pub psi_ref: f64,
    /// Closed-loop natural frequency w_n (rad/s); sets both PD gains.
    pub natural_frequency: f64,
    /// Constant surge thrust (N).
    pub surge_force: f64,
    pub hull: HullParameters,
    pub initial: ShipState,
}

impl SimulationConfig {
    pub fn gains(&self) -> ControllerGains {
        ControllerGains::from_natural_frequency(self.natural_frequency)
    }

    pub fn controller(&self) -> HeadingController {
        HeadingController::new(self.psi_ref, self.gains())
    }

    /// Duration covered by the recorded samples, N · h.
    pub fn duration(&self) -> f64 {
        self.steps as f64 * self.h
    }

    pub fn validate(&self) -> Result<(), SimError> {
        if !(self.h.is_finite() && self.h > 0.0) {
            return Err(SimError::invalid(format!("step size h must be positive, got {}", self.h)));
        }
        if self.steps < 1 {
            return Err(SimError::invalid("step count N must be at least 1"));
        }
        if !(self.natural_frequency.is_finite() && self.natural_frequency > 0.0) {
            return Err(SimError::invalid(format!(
                "natural frequency must be positive, got {}",
                self.natural_frequency
            )));
        }
        if !self.psi_ref.is_finite() {
            return Err(SimError::invalid(format!("reference heading must be finite, got {}", self.psi_ref)));
        }
        if !self.surge_force.is_finite() {
            return Err(SimError::invalid(format!("surge force must be finite, got {}", self.surge_force)));
        }
        if !self.initial.is_finite() {
            return Err(SimError::invalid("initial state must be finite"));
        }
        self.hull.validate()
    }
}
