use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use maneuver::{normalize_angle, SimulationConfig, Trajectory, TrajectorySample};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Header `t,x,y,psi,u,v,r` followed by one row per sample
    #[default]
    Csv,
    /// Array of sample objects
    Json,
}

pub fn write_trajectory<W: Write>(traj: &Trajectory, format: OutputFormat, out: &mut W) -> Result<()> {
    match format {
        OutputFormat::Csv => write_csv(traj, out)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, traj)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

pub fn write_csv<W: Write>(traj: &Trajectory, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "{}", TrajectorySample::COLUMNS.join(","))?;
    for sample in traj {
        let row = sample.values().map(|v| v.to_string());
        writeln!(out, "{}", row.join(","))?;
    }
    Ok(())
}

/// Headline numbers of a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RunSummary {
    pub samples: usize,
    pub final_sample: TrajectorySample,
    /// Signed heading error of the last sample, rad
    pub heading_error: f64,
    pub distance: f64,
}

impl RunSummary {
    pub fn new(config: &SimulationConfig, traj: &Trajectory) -> Option<Self> {
        let first = traj.first()?;
        let last = *traj.last()?;
        Some(Self {
            samples: traj.len(),
            final_sample: last,
            heading_error: normalize_angle(config.psi_ref - last.psi),
            distance: (last.x - first.x).hypot(last.y - first.y),
        })
    }
}
