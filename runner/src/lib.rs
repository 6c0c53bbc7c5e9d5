//! Command-line host for the `maneuver` simulation: loads a TOML run file,
//! runs it and writes the trajectory table.

use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::{Context, Result};
use tracing::info;

pub mod args;
pub mod config;
pub mod export;

pub use args::Args;
pub use config::{load_config, parse_config, Config};
pub use export::{write_csv, write_trajectory, OutputFormat, RunSummary};

/// Run `cfg` with any command-line overrides and write the trajectory where
/// `args` points.
pub fn run_config(cfg: &Config, args: &Args) -> Result<RunSummary> {
    let mut sim_cfg = cfg.to_simulation();
    if let Some(steps) = args.steps {
        sim_cfg.steps = steps;
    }

    let traj = maneuver::run(&sim_cfg).context("simulation failed")?;

    match &args.output {
        Some(path) => {
            let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
            let mut out = BufWriter::new(file);
            write_trajectory(&traj, args.format, &mut out)?;
            out.flush()?;
            info!(path = %path.display(), format = ?args.format, "Trajectory written");
        }
        None => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            write_trajectory(&traj, args.format, &mut out)?;
            out.flush()?;
        }
    }

    let summary = RunSummary::new(&sim_cfg, &traj).context("empty trajectory")?;
    info!(
        samples = summary.samples,
        x = summary.final_sample.x,
        y = summary.final_sample.y,
        psi = summary.final_sample.psi,
        heading_error = summary.heading_error,
        "Run complete"
    );
    Ok(summary)
}
