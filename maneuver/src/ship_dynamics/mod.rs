mod control;
mod dynamics;
mod hydrodynamics;
mod types;

pub use control::{ControllerGains, HeadingController};
pub use dynamics::{solve_acceleration, step_ship, step_ship_dbg, StepClock};
pub use hydrodynamics::{Clarke83, ClarkeDerivatives, HydrodynamicModel, ModelMatrices};
pub use types::{ShipState, StepDebug};
