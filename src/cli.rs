//! # Command-Line Shell
//!
//! Everything the binaries share:
//!
//! ```text
//! args → config file → resolve → logger → stdin → parse → render → stdout
//! ```
//!
//! Stdout carries only the diagram. Logs go to stderr (or `--log-file`).

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::ValueEnum;
use log::{debug, error, info};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use crate::Layout;
use crate::core::config::{CliOverrides, ResolvedConfig, TimelineConfig, load_config, resolve};
use crate::core::parse;
use crate::error::TimelineError;
use crate::render::{HorizontalRenderer, Render, VerticalRenderer};

/// Flags accepted by every binary.
#[derive(clap::Args, Clone, Debug, Default)]
pub struct CommonArgs {
    /// TOML settings file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log verbosity: off, error, warn, info, debug or trace
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// What to print
    #[arg(long, default_value_t, value_enum)]
    pub emit: Emit,

    /// Text prepended to every row of the vertical diagram
    #[arg(long, value_name = "TEXT", allow_hyphen_values = true)]
    pub prefix: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Emit {
    /// The rendered diagram
    #[default]
    Diagram,
    /// The parsed timeline as JSON
    Events,
}

/// Run one invocation: stdin in, diagram out.
pub fn run(layout: Layout, args: &CommonArgs) -> Result<(), TimelineError> {
    let file_config = match &args.config {
        Some(path) => load_config(path)?,
        None => TimelineConfig::default(),
    };
    let overrides = CliOverrides {
        log_level: args.log_level.clone(),
        line_prefix: args.prefix.clone(),
    };
    let resolved = resolve(&file_config, layout, &overrides)?;

    init_logging(resolved.log_level, args.log_file.as_deref())?;
    if let Some(path) = &args.config {
        info!("Loaded config from {}", path.display());
    }
    debug!("Resolved config: {:?}", resolved);

    let input = read_input(io::stdin().lock())?;
    debug!("Read {} bytes of input", input.len());

    let output = render_input(&input, &resolved, args.emit)?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{output}").map_err(TimelineError::Output)?;
    stdout.flush().map_err(TimelineError::Output)
}

/// Map a run result to the process exit status, reporting any error.
///
/// The error goes to stderr exactly once. It is also logged when logs go to
/// a file, since the stderr logger would repeat the same line.
pub fn exit_code(result: Result<(), TimelineError>, args: &CommonArgs) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if args.log_file.is_some() {
                error!("{e}");
            }
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Initialize the file or stderr logger.
///
/// A logger that is already installed is left in place.
pub fn init_logging(level: LevelFilter, log_file: Option<&Path>) -> Result<(), TimelineError> {
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();

    let installed = match log_file {
        Some(path) => {
            let file = File::create(path).map_err(|source| TimelineError::LogFile {
                path: path.to_path_buf(),
                source,
            })?;
            WriteLogger::init(level, log_config, file)
        }
        None => WriteLogger::init(level, log_config, io::stderr()),
    };

    if installed.is_err() {
        debug!("Logger already initialized");
    }
    Ok(())
}

/// Read all of `reader`. Invalid UTF-8 is replaced rather than rejected.
pub fn read_input(mut reader: impl Read) -> Result<String, TimelineError> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(TimelineError::Input)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Parse `input` and produce the text to print (without trailing newline).
pub fn render_input(
    input: &str,
    config: &ResolvedConfig,
    emit: Emit,
) -> Result<String, TimelineError> {
    let timeline = parse(input, config.parse);
    match emit {
        Emit::Diagram => {
            debug!("Rendering {:?} layout", config.layout);
            Ok(renderer_for(config).render(&timeline))
        }
        Emit::Events => Ok(serde_json::to_string_pretty(&timeline)?),
    }
}

pub fn renderer_for(config: &ResolvedConfig) -> Box<dyn Render> {
    match config.layout {
        Layout::Horizontal => Box::new(HorizontalRenderer),
        Layout::Vertical => Box::new(VerticalRenderer {
            total_width: config.total_width,
            line_prefix: config.line_prefix.clone(),
        }),
    }
}
