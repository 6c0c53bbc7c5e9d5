use thiserror::Error;

/// Failures surfaced by a simulation run. Nothing is retried: a run is
/// deterministic, so the first fault aborts it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// Mass matrix could not be factorised. Valid hulls never hit this.
    #[error("singular mass matrix at step {step} (t = {time} s)")]
    SingularModel { step: usize, time: f64 },
    #[error("non-finite state at step {step} (t = {time} s)")]
    NumericDivergence { step: usize, time: f64 },
}

impl SimError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }
}
