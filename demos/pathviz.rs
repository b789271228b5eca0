//! Text-mode pathviz demo.
//!
//! Run: cargo run --bin pathviz -- search --algorithm astar --preset maze --animate
//!      cargo run --bin pathviz -- colony --points 12 --seed 7

use std::io::{self, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use clap::{Parser, Subcommand};
use log::warn;
use pathviz_acs::AcsConfig;
use pathviz_core::Connectivity;
use pathviz_demos::{
    DemoError, SearchOptions, logger, presets, random_points, run_colony, run_search,
};
use pathviz_paths::{Algorithm, SearchOutcome};

#[derive(Parser)]
#[command(name = "pathviz")]
#[command(about = "Replay grid searches and ant colony runs in the terminal")]
#[command(version)]
struct Cli {
    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search a preset grid from S to E
    Search {
        /// astar, dijkstra, bfs or dfs
        #[arg(short, long, default_value = "astar")]
        algorithm: Algorithm,

        /// Run all four searches one after another
        #[arg(long, conflicts_with = "algorithm")]
        all: bool,

        /// Grid preset
        #[arg(short, long, default_value = "wall")]
        preset: String,

        /// Allow diagonal moves
        #[arg(short, long)]
        diagonal: bool,

        /// Print the grid after every step
        #[arg(long)]
        animate: bool,

        /// Milliseconds to pause after each animated frame
        #[arg(long, default_value = "0")]
        delay: u64,
    },

    /// Optimize a closed tour with an ant colony
    Colony {
        /// Number of random points (ignored with --preset)
        #[arg(short = 'n', long, default_value = "12")]
        points: usize,

        /// Use a preset's barrier cells as the points
        #[arg(short, long)]
        preset: Option<String>,

        /// Random seed for reproducibility
        #[arg(long)]
        seed: Option<u64>,

        /// Number of iterations
        #[arg(short, long, default_value = "100")]
        iterations: usize,

        /// Number of ants (default: one per point)
        #[arg(long)]
        ants: Option<usize>,
    },

    /// List the compiled-in presets
    Presets,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = logger::init(cli.verbose) {
        eprintln!("Error: {e}");
    }

    let mut out = io::stdout().lock();
    let result = match cli.command {
        Commands::Search {
            algorithm,
            all,
            preset,
            diagonal,
            animate,
            delay,
        } => cmd_search(&mut out, algorithm, all, &preset, diagonal, animate, delay),
        Commands::Colony {
            points,
            preset,
            seed,
            iterations,
            ants,
        } => cmd_colony(&mut out, points, preset.as_deref(), seed, iterations, ants),
        Commands::Presets => cmd_presets(&mut out),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn cmd_search(
    out: &mut impl Write,
    algorithm: Algorithm,
    all: bool,
    preset: &str,
    diagonal: bool,
    animate: bool,
    delay: u64,
) -> Result<(), DemoError> {
    let mut grid = presets::load(preset)?;
    let quit = Arc::new(AtomicBool::new(false));
    let handler_flag = Arc::clone(&quit);
    if let Err(e) = ctrlc::set_handler(move || handler_flag.store(true, Ordering::Relaxed)) {
        warn!("Ctrl-C will not stop the search: {e}");
    }

    let options = SearchOptions {
        connectivity: if diagonal {
            Connectivity::Eight
        } else {
            Connectivity::Four
        },
        animate,
        delay: Duration::from_millis(delay),
        quit,
    };
    let algorithms = if all {
        Algorithm::ALL.to_vec()
    } else {
        vec![algorithm]
    };
    for a in algorithms {
        if run_search(&mut grid, a, &options, out)? == SearchOutcome::Cancelled {
            break;
        }
    }
    Ok(())
}

fn cmd_colony(
    out: &mut impl Write,
    points: usize,
    preset: Option<&str>,
    seed: Option<u64>,
    iterations: usize,
    ants: Option<usize>,
) -> Result<(), DemoError> {
    let seed = seed.unwrap_or_else(rand::random);
    let locations = match preset {
        Some(name) => presets::load(name)?.barrier_locations(),
        None => random_points(points, seed),
    };
    let config = AcsConfig {
        n_ants: ants,
        ..AcsConfig::default()
            .with_seed(seed)
            .with_max_iterations(iterations)
    };
    writeln!(out, "{} points, seed {seed}", locations.len())?;
    if let Some(best) = run_colony(locations, config, out)? {
        writeln!(out, "best length {:.4}", best.length)?;
    }
    Ok(())
}

fn cmd_presets(out: &mut impl Write) -> Result<(), DemoError> {
    for name in presets::names() {
        writeln!(out, "{name}")?;
    }
    Ok(())
}
