//! Text-mode front end for pathviz: replays searches as grid frames and
//! prints colony improvements.

use std::io::{self, Write};
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::thread;
use std::time::Duration;

use log::info;
use pathviz_acs::{AcsConfig, AcsError, AntColony, Improvement};
use pathviz_core::{Connectivity, Grid, GridError};
use pathviz_paths::{Algorithm, CancelFlag, SearchOutcome, Step};
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use thiserror::Error;

pub mod logger;
pub mod presets;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("unknown preset {0:?}")]
    UnknownPreset(String),

    #[error("grid has no {0} cell")]
    MissingEndpoint(&'static str),

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Colony(#[from] AcsError),

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// How a search session is displayed.
#[derive(Clone, Debug, Default)]
pub struct SearchOptions {
    pub connectivity: Connectivity,
    /// Print a frame after every expansion and path step.
    pub animate: bool,
    /// Pause after each printed frame.
    pub delay: Duration,
    /// Raised from outside (Ctrl-C) to stop the search at its next step.
    pub quit: Arc<AtomicBool>,
}

/// Run `algorithm` on `grid` from its start to its end cell and write the
/// frames to `out`.
///
/// Previous search marks are cleared first, so the same grid can be
/// searched repeatedly.
pub fn run_search(
    grid: &mut Grid,
    algorithm: Algorithm,
    options: &SearchOptions,
    out: &mut impl Write,
) -> Result<SearchOutcome, DemoError> {
    let start = grid.start().ok_or(DemoError::MissingEndpoint("start"))?;
    let end = grid.end().ok_or(DemoError::MissingEndpoint("end"))?;
    grid.prepare_search(options.connectivity);

    let mut frames = 0usize;
    let mut failed = None;
    let draw = |g: &Grid, step: Step| {
        if !options.animate {
            return true;
        }
        frames += 1;
        if let Err(e) = writeln!(out, "{algorithm} step {frames}: {step}\n{g}") {
            failed = Some(e);
            return false;
        }
        if !options.delay.is_zero() {
            thread::sleep(options.delay);
        }
        true
    };
    let mut observer = CancelFlag::new(Arc::clone(&options.quit), draw);
    let outcome = algorithm.run(grid, start, end, &mut observer);
    if let Some(e) = failed {
        return Err(e.into());
    }

    writeln!(out, "{grid}")?;
    match &outcome {
        SearchOutcome::Found(path) => writeln!(out, "{algorithm}: path of length {}", path.len())?,
        SearchOutcome::NoPath => writeln!(out, "{algorithm}: no path")?,
        SearchOutcome::Cancelled => writeln!(out, "{algorithm}: cancelled")?,
    }
    info!("{algorithm} finished: {outcome:?}");
    Ok(outcome)
}

/// `n` points with integer coordinates in `[0, 100)`.
pub fn random_points(n: usize, seed: u64) -> Vec<(f64, f64)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            (
                f64::from(rng.random_range(0..100u32)),
                f64::from(rng.random_range(0..100u32)),
            )
        })
        .collect()
}

/// Run a colony over `points`, writing one line per improvement. Returns
/// the best tour found.
pub fn run_colony(
    points: Vec<(f64, f64)>,
    config: AcsConfig,
    out: &mut impl Write,
) -> Result<Option<Improvement>, DemoError> {
    let colony = AntColony::new(points, config)?;
    let mut best = None;
    for imp in colony.improvements() {
        let who = imp.ant.map_or_else(|| "seed".to_string(), |a| format!("ant {a}"));
        writeln!(
            out,
            "iteration {:>3} {who:>7}: {:.4}  {:?}",
            imp.iteration, imp.length, imp.tour
        )?;
        best = Some(imp);
    }
    Ok(best)
}
