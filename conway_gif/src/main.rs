// main.rs - Run a Game of Life universe and save the generations as an animated GIF

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use conway::{CycleDetector, RowScheduler, Seed, Universe, UpdateMode};
use log::info;

mod render;

use render::Animation;

// Defaults for a run with no flags
const DEFAULT_SIZE: usize = 64;
const DEFAULT_FRAMES: u32 = 512;
const DEFAULT_DELAY_CS: u16 = 20;
const DEFAULT_SCALE: u32 = 2;
const DEFAULT_DENSITY: f64 = 0.3;
const DEFAULT_RNG_SEED: u64 = 0x5EED_1234_ABCD_EF01;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    /// Every cell sees the previous generation
    Synchronous,
    /// In-place row-major update
    Sequential,
}

impl From<ModeArg> for UpdateMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Synchronous => UpdateMode::Synchronous,
            ModeArg::Sequential  => UpdateMode::Sequential,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "conway_gif")]
#[command(version)]
#[command(about = "Simulate Conway's Game of Life on a bounded grid and render it as an animated GIF")]
struct Cli {
    /// Grid width in cells
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    width: usize,

    /// Grid height in cells
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    height: usize,

    /// Number of generations to render
    #[arg(short, long, default_value_t = DEFAULT_FRAMES)]
    frames: u32,

    /// Delay between frames, in hundredths of a second
    #[arg(short, long, default_value_t = DEFAULT_DELAY_CS)]
    delay: u16,

    /// Pixels per cell side
    #[arg(short, long, default_value_t = DEFAULT_SCALE)]
    scale: u32,

    /// Starting pattern: quadrant, empty, random, or a pattern name (e.g. "glider")
    #[arg(long, default_value = "quadrant")]
    seed: String,

    /// RNG seed for --seed random
    #[arg(long, default_value_t = DEFAULT_RNG_SEED)]
    rng_seed: u64,

    /// Live probability for --seed random
    #[arg(long, default_value_t = DEFAULT_DENSITY)]
    density: f64,

    /// Update ordering within a tick
    #[arg(long, value_enum, default_value_t = ModeArg::Synchronous)]
    mode: ModeArg,

    /// Compute each generation with one async task per row
    #[arg(long, conflicts_with = "mode")]
    rows: bool,

    /// Stop early once a generation repeats
    #[arg(long)]
    stop_on_cycle: bool,

    /// Print every generation to stdout
    #[arg(long)]
    print: bool,

    /// Output GIF path
    #[arg(short, long, default_value = "life.gif")]
    output: PathBuf,

    /// Quiet mode (warnings only)
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.quiet { "warn" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    let seed = Seed::parse(&cli.seed, cli.rng_seed, cli.density)
        .with_context(|| format!("invalid --seed {:?}", cli.seed))?;
    let mut universe = Universe::with_seed(cli.width, cli.height, &seed)
        .context("failed to build universe")?
        .with_mode(cli.mode.into());

    let scheduler = if cli.rows {
        Some(RowScheduler::new().context("failed to start row scheduler")?)
    } else {
        None
    };

    info!(
        "running {} generations of a {}x{} universe ({:?}{})",
        cli.frames,
        cli.width,
        cli.height,
        universe.mode(),
        if scheduler.is_some() { ", row tasks" } else { "" }
    );

    let mut animation = Animation::new(cli.scale, cli.delay);
    animation.check(&universe).context("invalid --scale")?;
    let mut detector = CycleDetector::new();
    detector.observe(&universe);

    for _ in 0..cli.frames {
        match &scheduler {
            Some(scheduler) => {
                scheduler.tick(&mut universe).context("row task failed")?;
            }
            None => {
                universe.tick();
            }
        }
        animation.push(&universe).context("failed to render frame")?;

        if cli.print {
            println!("{universe}-----------------------------------------");
        }

        if cli.stop_on_cycle && detector.observe(&universe) {
            info!("generation {} repeats an earlier one, stopping", universe.generation());
            break;
        }
    }

    animation
        .save(&cli.output)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    info!(
        "wrote {} frames to {} (population {}, {} cell updates)",
        animation.len(),
        cli.output.display(),
        universe.population(),
        universe.total_updates()
    );
    Ok(())
}
