use crate::hull_specs::hulls;
use crate::ship_dynamics::ShipState;
use crate::SimulationConfig;

// 10° course change from rest under 1 MN surge thrust, 500 s at 20 Hz.
pub fn course_change() -> SimulationConfig {
    SimulationConfig {
        h: 0.05,
        steps: 10_000,
        psi_ref: 10f64.to_radians(),
        natural_frequency: 0.1,
        surge_force: 1.0e6,
        hull: hulls::reference_ship(),
        initial: ShipState::at_rest(),
    }
}
