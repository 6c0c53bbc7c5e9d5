use std::path::PathBuf;

use clap::Parser;

use crate::export::OutputFormat;

#[derive(Parser, Debug, Clone)]
#[command(name = "maneuver-runner")]
#[command(about = "Heading-controlled ship maneuvering simulation", long_about = None)]
pub struct Args {
    /// Run configuration (TOML)
    #[arg(long, default_value = "configs/course_change.toml")]
    pub config: PathBuf,
    /// Write the trajectory to this file instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,
    /// Trajectory table format
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    pub format: OutputFormat,
    /// Override the configured step count
    #[arg(long)]
    pub steps: Option<usize>,
}
