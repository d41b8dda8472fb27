// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, debug, error, info, warn};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};

use subrip::app_config::{Config, LogLevel};
use subrip::file_utils::{FileManager, FileType};
use subrip::subtitle_processor::{SubtitleCollection, TimeSpan};

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => LogLevel::Error,
            CliLogLevel::Warn => LogLevel::Warn,
            CliLogLevel::Info => LogLevel::Info,
            CliLogLevel::Debug => LogLevel::Debug,
            CliLogLevel::Trace => LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate SRT files and report their cue counts
    Check(CheckArgs),

    /// Generate shell completions for subrip
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct CheckArgs {
    /// SRT files or directories to validate
    #[arg(value_name = "PATH", required = true)]
    paths: Vec<PathBuf>,

    /// Print a JSON report on stdout
    #[arg(long)]
    json: bool,

    /// Stop at the first invalid file
    #[arg(long)]
    fail_fast: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "subrip.json", env = "SUBRIP_CONFIG")]
    config_path: PathBuf,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// subrip - SubRip subtitle validator
#[derive(Parser, Debug)]
#[command(name = "subrip")]
#[command(version)]
#[command(about = "Validate SubRip (SRT) subtitle files")]
#[command(long_about = "subrip parses SRT files and reports the first malformed line of each invalid file.

EXAMPLES:
    subrip check movie.srt                 # Validate one file
    subrip check --json subs/              # Validate a directory, JSON report
    subrip check --fail-fast a.srt b.srt   # Stop at the first invalid file
    subrip completions bash > subrip.bash  # Generate bash completions

CONFIGURATION:
    Settings are read from subrip.json when it exists. Use --config to point
    at another file. Command line flags take precedence.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger::new(LevelFilter::Trace)))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let _ = writeln!(
                std::io::stderr(),
                "{}{} {:<5} {}\x1B[0m",
                Self::color_for_level(record.level()),
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Outcome for one checked file
#[derive(Debug, Serialize)]
struct FileReport {
    path: PathBuf,
    valid: bool,
    cues: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    span: Option<TimeSpan>,
    #[serde(skip_serializing_if = "Option::is_none")]
    line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn main() -> Result<()> {
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "subrip", &mut std::io::stdout());
            Ok(())
        }
        Commands::Check(args) => run_check(args),
    }
}

fn run_check(options: CheckArgs) -> Result<()> {
    let mut config = Config::load_or_default(&options.config_path)?;

    if let Some(level) = options.log_level {
        config.log_level = level.into();
    }
    if options.fail_fast {
        config.fail_fast = true;
    }
    log::set_max_level(config.log_level.into());

    config.validate()?;

    let files = collect_files(&options.paths, &config)?;
    if files.is_empty() {
        return Err(anyhow!("No subtitle files found in the given paths"));
    }
    debug!("Checking {} file(s)", files.len());

    let mut reports = Vec::with_capacity(files.len());
    for path in files {
        let report = check_file(&path);
        let failed = !report.valid;
        reports.push(report);
        if failed && config.fail_fast {
            break;
        }
    }

    if options.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    }

    let failures = reports.iter().filter(|r| !r.valid).count();
    if failures > 0 {
        return Err(anyhow!("{} of {} file(s) are not valid SRT", failures, reports.len()));
    }

    info!("All {} file(s) are valid SRT", reports.len());
    Ok(())
}

fn collect_files(paths: &[PathBuf], config: &Config) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        if FileManager::dir_exists(path) {
            files.extend(FileManager::find_files(path, &config.extensions, config.follow_links)?);
        } else if FileManager::file_exists(path) {
            if FileManager::detect_file_type(path)? == FileType::Unknown {
                warn!("{} does not look like an SRT file, checking anyway", path.display());
            }
            files.push(path.clone());
        } else {
            return Err(anyhow!("Path does not exist: {}", path.display()));
        }
    }

    Ok(files)
}

fn check_file(path: &Path) -> FileReport {
    match SubtitleCollection::from_file(path) {
        Ok(collection) => {
            let span = collection.span();
            match &span {
                Some(span) => info!("{}: {} cues ({})", path.display(), collection.len(), span),
                None => info!("{}: no cues", path.display()),
            }
            FileReport {
                path: path.to_path_buf(),
                valid: true,
                cues: collection.len(),
                span,
                line: None,
                error: None,
            }
        }
        Err(e) => {
            error!("{}: {}", path.display(), e);
            FileReport {
                path: path.to_path_buf(),
                valid: false,
                cues: 0,
                span: None,
                line: e.as_parse_error().map(|pe| pe.line),
                error: Some(e.to_string()),
            }
        }
    }
}
