use serde::{Deserialize, Serialize};

use crate::SimError;

/// Seawater density (kg/m³).
pub const RHO_SEAWATER: f64 = 1025.0;

/// Principal hull dimensions feeding the hydrodynamic model. Fixed for a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HullParameters {
    /// Length between perpendiculars (m).
    #[serde(rename = "L")]
    pub length: f64,
    /// Beam (m).
    #[serde(rename = "B")]
    pub beam: f64,
    /// Draft (m).
    #[serde(rename = "T")]
    pub draft: f64,
    /// Block coefficient, in (0, 1].
    #[serde(rename = "Cb")]
    pub block_coefficient: f64,
    /// Yaw radius of gyration about the CG (m).
    #[serde(rename = "R66")]
    pub radius_of_gyration: f64,
    /// Longitudinal CG position relative to midships, positive forward (m).
    pub xg: f64,
    /// Surge damping time constant (s). Defaults to `length` seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surge_time_constant: Option<f64>,
}

impl HullParameters {
    pub fn new(length: f64, beam: f64, draft: f64, block_coefficient: f64, radius_of_gyration: f64, xg: f64) -> Self {
        Self {
            length,
            beam,
            draft,
            block_coefficient,
            radius_of_gyration,
            xg,
            surge_time_constant: None,
        }
    }

    pub fn with_surge_time_constant(mut self, seconds: f64) -> Self {
        self.surge_time_constant = Some(seconds);
        self
    }

    /// Displaced volume ∇ = Cb·L·B·T (m³).
    pub fn displacement_volume(&self) -> f64 {
        self.block_coefficient * self.length * self.beam * self.draft
    }

    /// Displaced mass (kg).
    pub fn mass(&self) -> f64 {
        RHO_SEAWATER * self.displacement_volume()
    }

    /// Yaw moment of inertia about the body origin (kg·m²).
    pub fn yaw_inertia(&self) -> f64 {
        self.mass() * (self.radius_of_gyration.powi(2) + self.xg.powi(2))
    }

    pub fn surge_time_constant(&self) -> f64 {
        self.surge_time_constant.unwrap_or(self.length)
    }

    pub fn validate(&self) -> Result<(), SimError> {
        let positive = [
            ("L", self.length),
            ("B", self.beam),
            ("T", self.draft),
            ("R66", self.radius_of_gyration),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(SimError::invalid(format!("hull {name} must be positive, got {value}")));
            }
        }
        let cb = self.block_coefficient;
        if !(cb.is_finite() && cb > 0.0 && cb <= 1.0) {
            return Err(SimError::invalid(format!("hull Cb must lie in (0, 1], got {cb}")));
        }
        if !self.xg.is_finite() {
            return Err(SimError::invalid(format!("hull xg must be finite, got {}", self.xg)));
        }
        if let Some(ts) = self.surge_time_constant {
            if !(ts.is_finite() && ts > 0.0) {
                return Err(SimError::invalid(format!("surge time constant must be positive, got {ts}")));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hulls::reference_ship;

    #[test]
    fn reference_ship_mass_properties() {
        let hull = reference_ship();
        assert!((hull.displacement_volume() - 16_000.0).abs() < 1e-9);
        assert!((hull.mass() - 16_400_000.0).abs() < 1e-6);
        // m * (27² + 3²)
        assert!((hull.yaw_inertia() - 16_400_000.0 * 738.0).abs() < 1e-3);
        assert_eq!(hull.surge_time_constant(), 100.0);
        assert!(hull.validate().is_ok());
    }

    #[test]
    fn rejects_non_physical_hulls() {
        let base = reference_ship();
        let bad = [
            HullParameters { length: 0.0, ..base },
            HullParameters { beam: -1.0, ..base },
            HullParameters { draft: f64::NAN, ..base },
            HullParameters { block_coefficient: 0.0, ..base },
            HullParameters { block_coefficient: 1.01, ..base },
            HullParameters { radius_of_gyration: 0.0, ..base },
            HullParameters { xg: f64::INFINITY, ..base },
            base.with_surge_time_constant(0.0),
        ];
        for hull in bad {
            assert!(
                matches!(hull.validate(), Err(SimError::InvalidConfiguration(_))),
                "expected rejection for {:?}",
                hull
            );
        }
        assert!(HullParameters { block_coefficient: 1.0, ..base }.validate().is_ok());
    }
}
