use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use maneuver::{builtins::course_change, HullParameters, ShipState, SimulationConfig, Vec3};

/// On-disk run configuration. Angles are in degrees here and converted on
/// the way into the simulation. Omitted sections fall back to the builtin
/// course-change scenario; a `[hull]` table must be complete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub simulation: SimulationSection,
    pub controller: ControllerSection,
    pub propulsion: PropulsionSection,
    pub hull: HullParameters,
    pub initial: InitialSection,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationSection {
    /// Sampling time (s)
    pub h: f64,
    pub steps: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ControllerSection {
    pub psi_ref_deg: f64,
    /// rad/s
    pub natural_frequency: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PropulsionSection {
    /// Constant surge thrust (N)
    pub surge_force: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InitialSection {
    pub x: f64,
    pub y: f64,
    pub psi_deg: f64,
    pub u: f64,
    pub v: f64,
    pub r: f64,
}

impl Default for Config {
    fn default() -> Self {
        let base = course_change();
        Self {
            simulation: SimulationSection::default(),
            controller: ControllerSection::default(),
            propulsion: PropulsionSection::default(),
            hull: base.hull,
            initial: InitialSection::default(),
        }
    }
}

impl Default for SimulationSection {
    fn default() -> Self {
        let base = course_change();
        Self { h: base.h, steps: base.steps }
    }
}

impl Default for ControllerSection {
    fn default() -> Self {
        let base = course_change();
        Self {
            psi_ref_deg: base.psi_ref.to_degrees(),
            natural_frequency: base.natural_frequency,
        }
    }
}

impl Default for PropulsionSection {
    fn default() -> Self {
        Self { surge_force: course_change().surge_force }
    }
}

impl InitialSection {
    fn to_state(self) -> ShipState {
        ShipState::new(
            Vec3::new(self.x, self.y, self.psi_deg.to_radians()),
            Vec3::new(self.u, self.v, self.r),
        )
    }
}

impl Config {
    pub fn to_simulation(&self) -> SimulationConfig {
        SimulationConfig {
            h: self.simulation.h,
            steps: self.simulation.steps,
            psi_ref: self.controller.psi_ref_deg.to_radians(),
            natural_frequency: self.controller.natural_frequency,
            surge_force: self.propulsion.surge_force,
            hull: self.hull,
            initial: self.initial.to_state(),
        }
    }
}

pub fn parse_config(text: &str) -> Result<Config> {
    toml::from_str(text).context("parsing run config")
}

pub fn load_config(path: &Path) -> Result<Config> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading run config {}", path.display()))?;
    parse_config(&text).with_context(|| format!("in {}", path.display()))
}
