// main.rs - Async Conway's Game of Life driver with row coroutines
//
// Headless caller of the `conway` core: loads text snapshots, keeps the
// current generation in a state file, and animates runs in the terminal.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use conway::{PATTERNS, Snapshot, find_pattern, random_snapshot};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod game;
mod ui;

use config::DriverConfig;
use error::AppError;
use game::{GameOfLife, StateFile};

/// Conway's Game of Life on a finite grid.
#[derive(Parser, Debug)]
#[command(name = "conway_coro", version, long_about = None)]
struct Cli {
    /// State file used by load/next/reset/show (overrides CONWAY_STATE_FILE)
    #[arg(long, global = true)]
    state_file: Option<PathBuf>,

    /// Enable debug logging unless RUST_LOG says otherwise
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a snapshot file and make it the current game
    Load { file: PathBuf },
    /// Advance the current game by one generation
    Next,
    /// Forget the current game
    Reset,
    /// Print the current game
    Show,
    /// Seed a grid and animate it until it repeats or the generation limit is hit
    Run(RunArgs),
    /// List the built-in patterns
    Patterns,
}

#[derive(clap::Args, Debug)]
struct RunArgs {
    /// Snapshot file to start from
    #[arg(conflicts_with_all = ["pattern", "random"])]
    file: Option<PathBuf>,

    /// Built-in pattern to start from, centered on the grid
    #[arg(long, conflicts_with = "random")]
    pattern: Option<String>,

    /// Seed for a random start
    #[arg(long)]
    random: Option<u32>,

    /// Grid height for pattern/random starts (overrides CONWAY_GRID_ROWS)
    #[arg(long)]
    rows: Option<usize>,

    /// Grid width for pattern/random starts (overrides CONWAY_GRID_COLS)
    #[arg(long)]
    cols: Option<usize>,

    /// Maximum generations to advance (overrides CONWAY_MAX_GENERATIONS)
    #[arg(short, long)]
    generations: Option<u64>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries only grids.
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "command failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), AppError> {
    let mut config = DriverConfig::from_env()?;
    if let Some(path) = cli.state_file {
        config.state_file = path;
    }
    let state = StateFile::new(&config.state_file);

    match cli.command {
        Command::Load { file } => {
            let snapshot = read_snapshot(&file)?;
            state.save(&snapshot)?;
            info!(
                file = %file.display(),
                state_file = %state.path().display(),
                generation = snapshot.generation(),
                "game loaded"
            );
            println!("{snapshot}");
        }
        Command::Next => {
            let mut game = GameOfLife::new(state.load()?, config.history_len);
            game.update_generation().await?;
            state.save(game.current())?;
            println!("{}", game.current());
        }
        Command::Reset => state.clear()?,
        Command::Show => println!("{}", state.load()?),
        Command::Run(args) => run_animation(args, &config).await?,
        Command::Patterns => {
            for pattern in PATTERNS {
                let (height, width) = pattern.extent();
                println!("{:<20} {height}x{width}", pattern.name);
            }
        }
    }
    Ok(())
}

fn read_snapshot(path: &Path) -> Result<Snapshot, AppError> {
    let raw = fs::read_to_string(path).map_err(|source| AppError::Io { path: path.to_owned(), source })?;
    conway::parse(&raw).map_err(|source| AppError::Parse { path: path.to_owned(), source })
}

fn seed_snapshot(args: &RunArgs, config: &DriverConfig) -> Result<Snapshot, AppError> {
    let rows = args.rows.unwrap_or(config.grid_rows);
    let cols = args.cols.unwrap_or(config.grid_cols);

    if let Some(file) = &args.file {
        return read_snapshot(file);
    }
    if let Some(seed) = args.random {
        return Ok(random_snapshot(rows, cols, seed)?);
    }
    let name = args.pattern.as_deref().unwrap_or("Glider");
    let pattern = find_pattern(name).ok_or_else(|| AppError::UnknownPattern(name.to_owned()))?;
    Ok(pattern.stamp_centered(rows, cols)?)
}

async fn run_animation(args: RunArgs, config: &DriverConfig) -> Result<(), AppError> {
    let limit = args.generations.unwrap_or(config.max_generations);
    let mut game = GameOfLife::new(seed_snapshot(&args, config)?, config.history_len);

    println!("{}", ui::frame(game.current()));
    for _ in 0..limit {
        tokio::time::sleep(config.tick_interval).await;
        let repeated = game.update_generation().await?;
        println!("{}", ui::frame(game.current()));
        if repeated {
            info!(generation = game.current().generation(), "grid repeats a recent generation, stopping");
            break;
        }
    }

    let last = game.into_snapshot();
    info!(generation = last.generation(), live = last.live_count(), "run finished");
    Ok(())
}
