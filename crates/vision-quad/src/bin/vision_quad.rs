use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use log::LevelFilter;
use vision_quad::{load_frame, load_params, process_frame, write_report, FrameIoError, HealParams};

#[derive(Parser)]
#[command(name = "vision-quad")]
#[command(about = "Heal and merge reflective-target quadrilaterals from contour candidates")]
struct Cli {
    /// Log verbosity for the stderr logger.
    #[arg(long, value_enum, default_value_t = LogLevel::Warn, global = true)]
    log_level: LogLevel,

    /// Emit structured JSON logs through `tracing` (filter with RUST_LOG).
    #[cfg(feature = "tracing")]
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Heal every contour of a frame file and print the report
    Heal {
        /// Frame file: {"contours": [[[x, y], ...], ...]}
        input: PathBuf,
        /// JSON file with healing parameters.
        #[arg(long)]
        params: Option<PathBuf>,
        /// Override the horizontal alignment tolerance (pixels).
        #[arg(long)]
        align_tolerance: Option<i32>,
        /// Snap vertices to integer pixels before healing.
        #[arg(long)]
        snap_to_pixel: bool,
        /// Write the report here instead of stdout.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print the default healing parameters as JSON
    DefaultParams,
}

#[derive(Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[cfg(feature = "tracing")]
fn init_logging(cli: &Cli) -> Result<(), log::SetLoggerError> {
    if cli.json_logs {
        vision_quad::core::init_tracing(true);
        Ok(())
    } else {
        vision_quad::core::init_with_level(cli.log_level.into())
    }
}

#[cfg(not(feature = "tracing"))]
fn init_logging(cli: &Cli) -> Result<(), log::SetLoggerError> {
    vision_quad::core::init_with_level(cli.log_level.into())
}

fn heal(
    input: PathBuf,
    params: Option<PathBuf>,
    align_tolerance: Option<i32>,
    snap_to_pixel: bool,
    out: Option<PathBuf>,
) -> Result<(), FrameIoError> {
    let mut params = match params {
        Some(path) => load_params(&path)?,
        None => HealParams::default(),
    };
    if let Some(tol) = align_tolerance {
        params.align_tolerance_px = tol;
    }
    params.snap_to_pixel |= snap_to_pixel;

    let frame = load_frame(&input)?;
    let report = process_frame(&frame, &params);
    if report.usable_target().is_none() {
        log::warn!("no usable target in {}", input.display());
    }

    match out {
        Some(path) => {
            let file = File::create(&path).map_err(|source| FrameIoError::Io {
                path: path.clone(),
                source,
            })?;
            write_report(&report, file)
        }
        None => write_report(&report, std::io::stdout().lock()),
    }
}

fn default_params() -> Result<(), FrameIoError> {
    println!("{}", serde_json::to_string_pretty(&HealParams::default())?);
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(err) = init_logging(&cli) {
        eprintln!("error: cannot install logger: {err}");
        return ExitCode::FAILURE;
    }

    let result = match cli.action {
        Action::Heal {
            input,
            params,
            align_tolerance,
            snap_to_pixel,
            out,
        } => heal(input, params, align_tolerance, snap_to_pixel, out),
        Action::DefaultParams => default_params(),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
