// main.rs - Playback window for a bounded Game of Life universe

use eframe::egui;
use egui::Color32;
use std::time::{Duration, Instant};

use clap::{Parser, ValueEnum};
use conway::patterns::PATTERNS;
use conway::{CycleDetector, RowScheduler, Seed, Universe, UpdateMode};
use log::{info, warn};

mod ui;

const DEFAULT_SIZE: usize = 50;
const RANDOM_DENSITY: f64 = 0.33;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    Synchronous,
    Sequential,
}

#[derive(Parser, Debug)]
#[command(name = "grid_display")]
#[command(about = "Watch a bounded Game of Life universe evolve")]
struct Cli {
    /// Grid width in cells
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    width: usize,

    /// Grid height in cells
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    height: usize,

    /// Update ordering within a tick
    #[arg(long, value_enum, default_value_t = ModeArg::Synchronous)]
    mode: ModeArg,

    /// Seed for the "Random" starting pattern
    #[arg(long, default_value_t = 0)]
    rng_seed: u64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    let mode = match cli.mode {
        ModeArg::Synchronous => UpdateMode::Synchronous,
        ModeArg::Sequential  => UpdateMode::Sequential,
    };
    let app = GameOfLife::new(cli.width, cli.height, mode, cli.rng_seed)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 950.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(|_cc| Box::new(app)),
    )?;
    Ok(())
}

/// Starting patterns offered in the selector: the two generated seeds,
/// then the named catalogue.
pub fn seed_names() -> impl Iterator<Item = &'static str> {
    ["Quadrant", "Random"].into_iter().chain(PATTERNS.iter().map(|p| p.name))
}

fn seed_for(choice: usize, rng_seed: u64) -> Seed {
    match choice {
        0 => Seed::Quadrant,
        1 => Seed::Random { seed: rng_seed, density: RANDOM_DENSITY },
        n => PATTERNS.get(n - 2).map(Seed::Pattern).unwrap_or_default(),
    }
}

pub struct GameOfLife {
    universe: Universe,
    detector: CycleDetector,
    scheduler: Option<RowScheduler>,

    pub use_row_tasks: bool,
    pub is_running: bool,
    pub last_update: Instant,
    pub update_interval: Duration,
    pub live_color: Color32,
    pub dead_color: Color32,
    pub selected_seed: usize,
    pub rng_seed: u64,
    pub status: Option<String>,
}

impl GameOfLife {
    fn new(width: usize, height: usize, mode: UpdateMode, rng_seed: u64) -> conway::Result<Self> {
        let universe = Universe::with_seed(width, height, &Seed::Quadrant)?.with_mode(mode);
        let mut detector = CycleDetector::new();
        detector.observe(&universe);

        Ok(Self {
            universe,
            detector,
            scheduler: None,
            use_row_tasks: false,
            is_running: false,
            last_update: Instant::now(),
            update_interval: Duration::from_millis(200),
            live_color: Color32::from_rgb(0, 200, 0),
            dead_color: Color32::from_rgb(40, 40, 40),
            selected_seed: 0,
            rng_seed,
            status: None,
        })
    }

    pub fn universe(&self) -> &Universe {
        &self.universe
    }

    pub fn update_generation(&mut self) {
        if self.use_row_tasks && self.scheduler.is_none() {
            match RowScheduler::new() {
                Ok(scheduler) => self.scheduler = Some(scheduler),
                Err(e) => {
                    warn!("row scheduler unavailable: {e}");
                    self.use_row_tasks = false;
                }
            }
        }

        match self.scheduler.as_ref().filter(|_| self.use_row_tasks) {
            Some(scheduler) => {
                if let Err(e) = scheduler.tick(&mut self.universe) {
                    self.is_running = false;
                    self.status = Some(format!("row task failed: {e}"));
                    return;
                }
            }
            None => {
                self.universe.tick();
            }
        }

        if self.detector.observe(&self.universe) {
            self.is_running = false;
            self.status = Some(format!("generation {} repeats an earlier one", self.universe.generation()));
            info!("cycle detected at generation {}", self.universe.generation());
        }
    }

    /// Starts running again from the current generation. Earlier history is
    /// forgotten so a detected oscillator can keep playing.
    pub fn resume(&mut self) {
        self.detector.reset();
        self.detector.observe(&self.universe);
        self.status = None;
        self.last_update = Instant::now();
        self.is_running = true;
    }

    /// Rebuilds the universe from the selected seed, keeping size and mode.
    pub fn reset(&mut self) {
        let seed = seed_for(self.selected_seed, self.rng_seed);
        let (width, height, mode) = (self.universe.width(), self.universe.height(), self.universe.mode());

        match Universe::with_seed(width, height, &seed) {
            Ok(universe) => {
                self.universe = universe.with_mode(mode);
                self.detector.reset();
                self.detector.observe(&self.universe);
                self.status = None;
            }
            Err(e) => {
                warn!("cannot apply {}: {e}", seed.name());
                self.status = Some(e.to_string());
            }
        }
    }

    pub fn set_mode(&mut self, mode: UpdateMode) {
        self.universe.set_mode(mode);
    }
}
