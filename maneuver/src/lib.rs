//! Three-DOF (surge, sway, yaw) maneuvering simulation of a displacement
//! ship under closed-loop heading control.
//!
//! The crate is pure computation: no I/O, no global state. Hosts build a
//! [`SimulationConfig`], call [`run`] (or iterate a [`Simulation`]) and get
//! back the trajectory table.

mod math;
pub use math::{normalize_angle, rotation_zyx, yaw_rotation, Mat3, Vec3};
mod error;
pub use error::SimError;
mod hull;
pub use hull::{HullParameters, RHO_SEAWATER};
mod config;
pub use config::SimulationConfig;

pub mod builtins;

pub mod ship_dynamics;
pub use ship_dynamics::{
    solve_acceleration, step_ship, step_ship_dbg, Clarke83, ControllerGains, HeadingController,
    HydrodynamicModel, ModelMatrices, ShipState, StepClock, StepDebug,
};

mod hull_specs;
pub use hull_specs::hulls;

mod simulation;
pub use simulation::{run, run_with_model, Simulation, Trajectory, TrajectorySample};
