//! Fixed-step simulation loop and the trajectory table it produces.

use std::iter::FusedIterator;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::hull::HullParameters;
use crate::ship_dynamics::{
    step_ship_dbg, Clarke83, HeadingController, HydrodynamicModel, ShipState, StepClock, StepDebug,
};
use crate::{SimError, SimulationConfig};

/// One row of the trajectory table: `(t, x, y, ψ, u, v, r)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrajectorySample {
    pub t: f64,
    pub x: f64,
    pub y: f64,
    pub psi: f64,
    pub u: f64,
    pub v: f64,
    pub r: f64,
}

impl TrajectorySample {
    pub fn from_state(t: f64, state: &ShipState) -> Self {
        Self {
            t,
            x: state.x(),
            y: state.y(),
            psi: state.psi(),
            u: state.u(),
            v: state.v(),
            r: state.r(),
        }
    }

    pub fn to_state(&self) -> ShipState {
        ShipState::new(
            crate::Vec3::new(self.x, self.y, self.psi),
            crate::Vec3::new(self.u, self.v, self.r),
        )
    }

    pub const COLUMNS: [&'static str; 7] = ["t", "x", "y", "psi", "u", "v", "r"];

    pub fn values(&self) -> [f64; 7] {
        [self.t, self.x, self.y, self.psi, self.u, self.v, self.r]
    }
}

/// Time-ordered samples of a completed run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trajectory {
    samples: Vec<TrajectorySample>,
}

impl Trajectory {
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[TrajectorySample] {
        &self.samples
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TrajectorySample> {
        self.samples.iter()
    }

    pub fn first(&self) -> Option<&TrajectorySample> {
        self.samples.first()
    }

    pub fn last(&self) -> Option<&TrajectorySample> {
        self.samples.last()
    }

    /// Extract one column by name (see `TrajectorySample::COLUMNS`).
    pub fn column(&self, name: &str) -> Option<Vec<f64>> {
        let idx = TrajectorySample::COLUMNS.iter().position(|c| *c == name)?;
        Some(self.samples.iter().map(|s| s.values()[idx]).collect())
    }

    pub fn into_inner(self) -> Vec<TrajectorySample> {
        self.samples
    }
}

impl From<Vec<TrajectorySample>> for Trajectory {
    fn from(samples: Vec<TrajectorySample>) -> Self {
        Self { samples }
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a TrajectorySample;
    type IntoIter = std::slice::Iter<'a, TrajectorySample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

/// Lazy run over N + 1 steps.
///
/// Each `next()` records the current (pre-update) state, then runs one
/// model → controller → solver → integrator pass. The last row is therefore
/// the state one step before the final acceleration is applied. The sequence
/// ends after N + 1 samples or at the first error, and cannot be restarted.
#[derive(Debug)]
pub struct Simulation<H = Clarke83> {
    model: H,
    hull: HullParameters,
    controller: HeadingController,
    surge_force: f64,
    h: f64,
    steps: usize,
    state: ShipState,
    index: usize,
    finished: bool,
    telemetry: StepDebug,
}

impl Simulation<Clarke83> {
    pub fn new(config: &SimulationConfig) -> Result<Self, SimError> {
        Self::with_model(config, Clarke83)
    }
}

impl<H: HydrodynamicModel> Simulation<H> {
    pub fn with_model(config: &SimulationConfig, model: H) -> Result<Self, SimError> {
        config.validate()?;
        debug!(
            h = config.h,
            steps = config.steps,
            psi_ref = config.psi_ref,
            w_n = config.natural_frequency,
            surge_force = config.surge_force,
            "Simulation configured"
        );
        Ok(Self {
            model,
            hull: config.hull,
            controller: config.controller(),
            surge_force: config.surge_force,
            h: config.h,
            steps: config.steps,
            state: config.initial,
            index: 0,
            finished: false,
            telemetry: StepDebug::default(),
        })
    }

    /// State the next call to `next()` will record.
    pub fn state(&self) -> &ShipState {
        &self.state
    }

    /// Telemetry of the most recently completed step.
    pub fn last_step(&self) -> &StepDebug {
        &self.telemetry
    }

    pub fn remaining(&self) -> usize {
        if self.finished {
            0
        } else {
            (self.steps - self.index).saturating_add(1)
        }
    }

    /// Drain the remaining samples into a table.
    pub fn into_trajectory(self) -> Result<Trajectory, SimError> {
        let samples = self.collect::<Result<Vec<_>, _>>()?;
        Ok(Trajectory::from(samples))
    }
}

impl<H: HydrodynamicModel> Iterator for Simulation<H> {
    type Item = Result<TrajectorySample, SimError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let clock = StepClock::new(self.index, self.h);
        let sample = TrajectorySample::from_state(clock.time(), &self.state);

        if let Err(err) = step_ship_dbg(
            &self.model,
            &self.hull,
            &self.controller,
            self.surge_force,
            &mut self.state,
            clock,
            Some(&mut self.telemetry),
        ) {
            warn!(%err, "Simulation aborted");
            self.finished = true;
            return Some(Err(err));
        }

        trace!(
            t = sample.t,
            speed = self.telemetry.speed,
            heading_error = self.telemetry.heading_error,
            "step"
        );

        self.index += 1;
        if self.index > self.steps {
            self.finished = true;
            debug!(
                samples = self.index,
                x = sample.x,
                y = sample.y,
                psi = sample.psi,
                "Simulation finished"
            );
        }
        Some(Ok(sample))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining()))
    }
}

impl<H: HydrodynamicModel> FusedIterator for Simulation<H> {}

/// Run the configured scenario with the default hydrodynamic model.
pub fn run(config: &SimulationConfig) -> Result<Trajectory, SimError> {
    Simulation::new(config)?.into_trajectory()
}

pub fn run_with_model<H: HydrodynamicModel>(config: &SimulationConfig, model: H) -> Result<Trajectory, SimError> {
    Simulation::with_model(config, model)?.into_trajectory()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtins::course_change;
    use crate::ship_dynamics::ModelMatrices;
    use crate::Mat3;

    fn short_run(steps: usize) -> SimulationConfig {
        SimulationConfig { steps, ..course_change() }
    }

    #[test]
    fn yields_exactly_n_plus_one_samples() {
        for steps in [1, 2, 17, 200] {
            let traj = run(&short_run(steps)).unwrap();
            assert_eq!(traj.len(), steps + 1);
        }
    }

    #[test]
    fn time_grid_is_exact() {
        let cfg = short_run(400);
        let traj = run(&cfg).unwrap();
        for (i, s) in traj.iter().enumerate() {
            assert_eq!(s.t, i as f64 * cfg.h, "t[{}]", i);
        }
        assert!(traj.samples().windows(2).all(|w| w[1].t > w[0].t));
    }

    #[test]
    fn first_row_is_initial_state() {
        let traj = run(&short_run(5)).unwrap();
        let first = traj.first().unwrap();
        assert_eq!(first.values(), [0.0; 7]);
    }

    #[test]
    fn last_row_lags_final_state_by_one_step() {
        let cfg = short_run(10);
        let mut sim = Simulation::new(&cfg).unwrap();
        let mut last = None;
        for item in sim.by_ref() {
            last = Some(item.unwrap());
        }
        let last = last.unwrap();
        assert_eq!(last.t, 10.0 * cfg.h);
        // The loop has already advanced past the recorded row
        let after = sim.state();
        assert!(after.x() > last.x, "x after={} last={}", after.x(), last.x);
        assert!(sim.next().is_none());
        assert_eq!(sim.remaining(), 0);
    }

    #[test]
    fn lazy_iteration_matches_materialized_run() {
        let cfg = short_run(50);
        let lazy: Vec<_> = Simulation::new(&cfg).unwrap().take(20).map(Result::unwrap).collect();
        let full = run(&cfg).unwrap();
        assert_eq!(&full.samples()[..20], &lazy[..]);
    }

    #[test]
    fn invalid_config_rejected_before_loop() {
        let cfg = SimulationConfig { h: 0.0, ..course_change() };
        assert!(matches!(Simulation::new(&cfg), Err(SimError::InvalidConfiguration(_))));
    }

    #[test]
    fn stops_after_first_error() {
        let cfg = short_run(10);
        let massless = |_speed: f64, _hull: &HullParameters| ModelMatrices {
            mass: Mat3::zeros(),
            damping: Mat3::zeros(),
        };
        let mut sim = Simulation::with_model(&cfg, massless).unwrap();
        assert_eq!(sim.remaining(), 11);
        match sim.next() {
            Some(Err(SimError::SingularModel { step, time })) => {
                assert_eq!(step, 0);
                assert_eq!(time, 0.0);
            }
            other => panic!("expected a singular model error, got {:?}", other),
        }
        assert!(sim.next().is_none());
        assert!(sim.next().is_none());
        assert_eq!(sim.remaining(), 0);
        assert_eq!(sim.state(), &ShipState::at_rest());
    }

    #[test]
    fn run_with_model_surfaces_step_errors() {
        let cfg = short_run(10);
        let massless = |_speed: f64, _hull: &HullParameters| ModelMatrices {
            mass: Mat3::zeros(),
            damping: Mat3::zeros(),
        };
        assert!(matches!(
            run_with_model(&cfg, massless),
            Err(SimError::SingularModel { step: 0, .. })
        ));

        // Negative damping large enough to blow up within a few steps
        let unstable = |_speed: f64, _hull: &HullParameters| ModelMatrices {
            mass: Mat3::identity(),
            damping: Mat3::from_diagonal_element(-1e300),
        };
        let err = run_with_model(&cfg, unstable).unwrap_err();
        match err {
            SimError::NumericDivergence { step, time } => {
                assert!(step < 10, "diverged late at step {}", step);
                assert_eq!(time, step as f64 * cfg.h);
            }
            other => panic!("expected divergence, got {:?}", other),
        }
    }

    #[test]
    fn size_hint_saturates_for_huge_step_counts() {
        let cfg = SimulationConfig { steps: usize::MAX, ..course_change() };
        let mut sim = Simulation::new(&cfg).unwrap();
        assert_eq!(sim.size_hint(), (0, Some(usize::MAX)));
        let head: Vec<_> = sim.by_ref().take(3).map(Result::unwrap).collect();
        assert_eq!(head.len(), 3);
        assert_eq!(sim.remaining(), usize::MAX - 2);
    }

    #[test]
    fn column_extraction() {
        let traj = run(&short_run(3)).unwrap();
        let t = traj.column("t").unwrap();
        assert_eq!(t.len(), 4);
        assert_eq!(t[3], 3.0 * 0.05);
        assert!(traj.column("q").is_none());
    }
}
