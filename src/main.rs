//! CLI entry point for heatfile

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use heatfile::{OutputConfig, StreamingFormatter, build_tree_with};
use termcolor::ColorChoice;
use tracing::debug;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Verbosity of diagnostics written to stderr
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum LogLevel {
    Debug,
    Info,
    #[default]
    Warn,
    Error,
    Silent,
}

impl LogLevel {
    fn to_tracing_level(self) -> Option<tracing::Level> {
        match self {
            LogLevel::Debug => Some(tracing::Level::DEBUG),
            LogLevel::Info => Some(tracing::Level::INFO),
            LogLevel::Warn => Some(tracing::Level::WARN),
            LogLevel::Error => Some(tracing::Level::ERROR),
            LogLevel::Silent => None,
        }
    }
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // https://no-color.org/
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

/// Resolve the mode to a concrete choice so termcolor never second-guesses it.
fn color_choice(mode: ColorMode) -> ColorChoice {
    if should_use_color(mode) {
        ColorChoice::Always
    } else {
        ColorChoice::Never
    }
}

#[derive(Parser, Debug)]
#[command(name = "heatfile")]
#[command(about = "Display a directory tree, counting where a search string occurs")]
#[command(version)]
struct Args {
    /// Directory or file to display [default: current directory]
    #[arg(short = 'P', long = "path")]
    path: Option<PathBuf>,

    /// Case-insensitive regular expression to look for in file contents.
    /// Only matching files, and the directories leading to them, are shown.
    #[arg(short = 'S', long = "search", value_name = "PATTERN")]
    search: Option<String>,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Diagnostics written to stderr: debug, info, warn, error, silent
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "warn")]
    log_level: LogLevel,
}

fn setup_tracing(level: LogLevel) {
    if let Some(level) = level.to_tracing_level() {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .without_time()
            .compact()
            .init();
    }
}

fn main() {
    let args = Args::parse();
    setup_tracing(args.log_level);
    debug!("Parsed CLI arguments: {args:?}");

    let path = match args.path {
        Some(path) => path,
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    };

    let config = OutputConfig {
        color: color_choice(args.color),
    };
    let mut formatter = StreamingFormatter::stdout(&config);

    if let Err(e) = build_tree_with(&path, args.search.as_deref(), &mut formatter) {
        eprintln!("heatfile: {}", e);
        eprintln!("\nType heatfile --help for help.");
        process::exit(1);
    }
}
