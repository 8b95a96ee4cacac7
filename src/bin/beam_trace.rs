//! Trace the perceived color of either simulation configuration over time.
//!
//! Drives the single-bulb or RGB simulation for a number of frames, logs
//! the perceived color as it evolves, and finally prints a JSON snapshot of
//! the complete observable state.
//!
//! Usage:
//! ```
//! cargo run --bin beam_trace -- --sim single-bulb --view photon --flashlight-on
//! cargo run --bin beam_trace -- --sim rgb --red 1.0 --green 0.4
//! ```

use anyhow::Result;
use clap::{Parser, ValueEnum};
use log::info;

use colorsim::introspect::{RgbSnapshot, SingleBulbSnapshot};
use colorsim::shared_args::SharedSimulationArgs;
use colorsim::{
    Channel, LightType, RgbSimulation, Rgba, SimulationClock, SingleBulbSimulation, ViewMode,
};

/// Which simulation configuration to drive
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum SimKind {
    SingleBulb,
    Rgb,
}

impl std::fmt::Display for SimKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimKind::SingleBulb => write!(f, "single-bulb"),
            SimKind::Rgb => write!(f, "rgb"),
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "beam_trace",
    about = "Traces perceived color for the color vision simulation core",
    long_about = None
)]
struct Args {
    #[command(flatten)]
    shared: SharedSimulationArgs,

    /// Simulation configuration to drive
    #[arg(long, value_enum, default_value_t = SimKind::SingleBulb)]
    sim: SimKind,

    /// Light type for the single bulb ('white' or 'colored')
    #[arg(long, default_value = "colored")]
    light: LightType,

    /// View mode ('beam' or 'photon')
    #[arg(long, default_value = "beam")]
    view: ViewMode,

    /// Flashlight wavelength in nanometers (clamped to the visible range)
    #[arg(long, default_value_t = 570.0)]
    wavelength: f64,

    /// Turn the flashlight on
    #[arg(long, default_value_t = false)]
    flashlight_on: bool,

    /// Filter wavelength in nanometers; the filter stays hidden when unset
    #[arg(long)]
    filter_wavelength: Option<f64>,

    /// Red channel intensity in [0, 1] (RGB configuration)
    #[arg(long, default_value_t = 0.0)]
    red: f64,

    /// Green channel intensity in [0, 1] (RGB configuration)
    #[arg(long, default_value_t = 0.0)]
    green: f64,

    /// Blue channel intensity in [0, 1] (RGB configuration)
    #[arg(long, default_value_t = 0.0)]
    blue: f64,
}

fn format_color(color: Rgba) -> String {
    format!(
        "rgba({:.3}, {:.3}, {:.3}, {:.3})",
        color.r, color.g, color.b, color.a
    )
}

fn run_single_bulb(args: &Args) -> Result<()> {
    let mut sim = match args.shared.seed {
        Some(seed) => SingleBulbSimulation::with_seed(seed),
        None => SingleBulbSimulation::new(),
    };
    sim.set_light_type(args.light);
    sim.set_view_mode(args.view);
    sim.set_flashlight_wavelength(args.wavelength);
    sim.set_flashlight_on(args.flashlight_on);
    if let Some(filter_nm) = args.filter_wavelength {
        sim.set_filter_wavelength(filter_nm);
        sim.set_filter_visible(true);
    }

    let mut clock = SimulationClock::new();
    for frame in 0..args.shared.frames {
        clock.tick(&mut sim, args.shared.dt);
        if frame % args.shared.report_every == 0 {
            info!(
                "frame {:>5}: {} photons, perceived {}",
                frame,
                sim.beam().photons().len(),
                format_color(sim.perceived_color())
            );
        }
    }

    let snapshot = SingleBulbSnapshot::capture(&sim);
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

fn run_rgb(args: &Args) -> Result<()> {
    let mut sim = match args.shared.seed {
        Some(seed) => RgbSimulation::with_seed(seed),
        None => RgbSimulation::new(),
    };
    sim.set_view_mode(args.view);
    sim.set_intensity(Channel::Red, args.red);
    sim.set_intensity(Channel::Green, args.green);
    sim.set_intensity(Channel::Blue, args.blue);

    let mut clock = SimulationClock::new();
    for frame in 0..args.shared.frames {
        clock.tick(&mut sim, args.shared.dt);
        if frame % args.shared.report_every == 0 {
            info!(
                "frame {:>5}: perceived {}",
                frame,
                format_color(sim.perceived_color())
            );
        }
    }

    let snapshot = RgbSnapshot::capture(&sim);
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    match args.sim {
        SimKind::SingleBulb => run_single_bulb(&args),
        SimKind::Rgb => run_rgb(&args),
    }
}
