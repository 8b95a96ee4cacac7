//! Common command-line arguments shared across simulation binaries.

use clap::Parser;

/// Arguments every frame-driven demo binary accepts
#[derive(Parser, Debug, Clone)]
pub struct SharedSimulationArgs {
    /// Number of frames to simulate
    #[arg(long, default_value_t = 300)]
    pub frames: u32,

    /// Frame timestep in seconds (clamped by the simulation)
    #[arg(long, default_value_t = 1.0 / 60.0)]
    pub dt: f64,

    /// RNG seed for deterministic photon creation
    #[arg(long)]
    pub seed: Option<u64>,

    /// Report the perceived color every N frames
    #[arg(long, default_value_t = 60)]
    pub report_every: u32,
}
