//! triangle-layout: places a triangle of LED driver footprints on a PCB and
//! routes their chain and supply traces.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info, Level};
use tracing_subscriber::EnvFilter;

use triangle_layout::board::Board;
use triangle_layout::config::{self, Config};
use triangle_layout::error::LayoutResult;
use triangle_layout::layout::{self, maintenance};

/// Lay out and route the triangle board.
///
/// Without a mode flag, places D0..D(3·side−1) along the triangle edges and
/// adds the chain, rail stub, and supply bus traces. The previous board file
/// is kept as `<board>.layoutbak`.
#[derive(Parser, Debug)]
#[allow(clippy::struct_excessive_bools)] // One bool per CLI flag
#[command(name = "triangle-layout")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Board file to edit (overrides the configuration)
    #[arg(long, value_name = "BOARD_FILE")]
    board: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "CONFIG_FILE")]
    config: Option<PathBuf>,

    /// Delete all traces on the board and exit
    #[arg(long, conflicts_with = "delete_short_traces")]
    delete_all_traces: bool,

    /// Delete traces of zero or very small length and exit (currently disabled)
    #[arg(long)]
    delete_short_traces: bool,

    /// Don't save results
    #[arg(long)]
    dry_run: bool,

    /// Increase logging verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Decrease logging verbosity (only show errors)
    #[arg(short, long)]
    quiet: bool,
}

/// Operation selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    DeleteAll,
    DeleteShort,
    Layout,
}

impl Args {
    const fn mode(&self) -> Mode {
        if self.delete_all_traces {
            Mode::DeleteAll
        } else if self.delete_short_traces {
            Mode::DeleteShort
        } else {
            Mode::Layout
        }
    }
}

/// Determines the log level from CLI arguments.
#[allow(clippy::match_same_arms)] // Explicit "warn" arm for clarity
fn get_log_level(verbose: u8, quiet: bool, config_level: &str) -> Level {
    if quiet {
        return Level::ERROR;
    }

    match verbose {
        0 => match config_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::WARN, // Default to warn for unknown levels
        },
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Initialises the tracing subscriber for logging.
fn init_tracing(level: Level) {
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Runs the selected mode against the board and saves it unless this is a dry run.
fn run(mode: Mode, board_path: &Path, dry_run: bool, cfg: &Config) -> LayoutResult<()> {
    if mode == Mode::DeleteShort {
        maintenance::check_short_track_deletion()?;
    }
    let mut board = Board::load(board_path)?;

    match mode {
        Mode::DeleteAll => {
            let removed = maintenance::delete_all_tracks(&mut board);
            info!(removed, "Deleted all tracks");
        }
        Mode::DeleteShort => {
            let removed = maintenance::delete_short_tracks(
                &mut board,
                cfg.maintenance.short_track_threshold,
            )?;
            info!(removed, "Deleted short tracks");
        }
        Mode::Layout => {
            let report = layout::layout_triangle(&mut board, &cfg.layout, &cfg.routing)?;
            info!(tracks = report.total_tracks(), "Added tracks");
        }
    }

    if dry_run {
        info!("Dry run, not saving");
    } else {
        info!(path = %board_path.display(), "Saving board");
        board.save(board_path)?;
    }

    Ok(())
}

/// Entry point for triangle-layout.
fn main() -> ExitCode {
    let args = Args::parse();

    // Load configuration
    let cfg = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Initialise logging
    let log_level = get_log_level(args.verbose, args.quiet, &cfg.logging.level);
    init_tracing(log_level);

    let board_path = args
        .board
        .clone()
        .or_else(|| cfg.board_path.clone())
        .unwrap_or_else(|| PathBuf::from(config::DEFAULT_BOARD_PATH));

    info!(
        version = env!("CARGO_PKG_VERSION"),
        board = %board_path.display(),
        mode = ?args.mode(),
        dry_run = args.dry_run,
        "Starting triangle-layout"
    );

    match run(args.mode(), &board_path, args.dry_run, &cfg) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "triangle-layout failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
