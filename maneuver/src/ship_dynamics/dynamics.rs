use super::control::HeadingController;
use super::hydrodynamics::{HydrodynamicModel, ModelMatrices};
use super::types::{ShipState, StepDebug};
use crate::hull::HullParameters;
use crate::math::yaw_rotation;
use crate::{Mat3, SimError, Vec3};

/// Position of a step on the fixed time grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepClock {
    pub index: usize,
    pub h: f64,
}

impl StepClock {
    pub fn new(index: usize, h: f64) -> Self {
        Self { index, h }
    }

    /// t = index · h
    #[inline]
    pub fn time(&self) -> f64 {
        self.index as f64 * self.h
    }
}

/// Solve `M · ν̇ = τ − N · ν` with an LU factorisation.
///
/// Returns `None` when `M` is singular.
pub fn solve_acceleration(mass: &Mat3, damping: &Mat3, nu: &Vec3, tau: &Vec3) -> Option<Vec3> {
    let rhs = tau - damping * nu;
    mass.lu().solve(&rhs)
}

/// Advance the ship one step. See `step_ship_dbg`.
pub fn step_ship<H: HydrodynamicModel + ?Sized>(
    model: &H,
    hull: &HullParameters,
    controller: &HeadingController,
    surge_force: f64,
    state: &mut ShipState,
    clock: StepClock,
) -> Result<(), SimError> {
    step_ship_dbg(model, hull, controller, surge_force, state, clock, None)
}

/// One pass of model → controller → solver → integrator.
///
/// Velocity takes a forward Euler step; pose is then advanced with the
/// *updated* velocity rotated by the pre-step heading. `state` is left
/// untouched when the step fails.
pub fn step_ship_dbg<H: HydrodynamicModel + ?Sized>(
    model: &H,
    hull: &HullParameters,
    controller: &HeadingController,
    surge_force: f64,
    state: &mut ShipState,
    clock: StepClock,
    mut dbg: Option<&mut StepDebug>,
) -> Result<(), SimError> {
    let h = clock.h;
    let speed = state.speed();
    let ModelMatrices { mass, damping } = model.matrices(speed, hull);

    let yaw_moment = controller.yaw_moment(state.psi(), state.r(), mass[(2, 2)]);
    let tau = Vec3::new(surge_force, 0.0, yaw_moment);

    let nu_dot = solve_acceleration(&mass, &damping, &state.nu, &tau).ok_or(
        SimError::SingularModel {
            step: clock.index,
            time: clock.time(),
        },
    )?;

    let nu_next = state.nu + h * nu_dot;
    let eta_next = state.eta + h * (yaw_rotation(state.psi()) * nu_next);

    let next = ShipState::new(eta_next, nu_next);
    if !next.is_finite() {
        return Err(SimError::NumericDivergence {
            step: clock.index,
            time: clock.time(),
        });
    }

    if let Some(d) = dbg.as_mut() {
        d.step = clock.index;
        d.time = clock.time();
        d.speed = speed;
        d.heading_error = controller.heading_error(state.psi());
        d.yaw_moment = yaw_moment;
        d.tau = tau;
        d.nu_dot = nu_dot;
        d.mass = mass;
        d.damping = damping;
    }

    *state = next;
    Ok(())
}
