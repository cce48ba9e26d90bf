// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, anyhow, Context};
use log::{info, warn, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;
use clap::{Args, Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use srt2ass::app_config::{Config, LogLevel};
use srt2ass::Controller;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
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
    /// Convert SRT files to ASS (default command)
    Convert(ConvertArgs),

    /// Generate shell completions for srt2ass
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug)]
struct ConvertArgs {
    /// SRT files or directories to convert
    #[arg(value_name = "INPUT_PATH")]
    input_paths: Vec<PathBuf>,

    /// Directory for the generated .ass files (defaults to each source's directory)
    #[arg(short, long, value_name = "DIR")]
    output_dir: Option<PathBuf>,

    /// File containing the ASS style sheet
    #[arg(short, long, value_name = "FILE")]
    styles: Option<PathBuf>,

    /// Split the first two lines of each cue into two language tracks
    #[arg(long, conflicts_with = "mono")]
    bilingual: bool,

    /// Do not split cues into two language tracks
    #[arg(long)]
    mono: bool,

    /// The first line of each cue is Chinese
    #[arg(long, conflicts_with = "en_first")]
    cn_first: bool,

    /// The first line of each cue is English rather than Chinese
    #[arg(long)]
    en_first: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// srt2ass - SubRip to Advanced SubStation Alpha converter
///
/// Converts SRT subtitles into ASS scripts, optionally merging Chinese/English
/// cues into two styled dialogue lines.
#[derive(Parser, Debug)]
#[command(name = "srt2ass")]
#[command(version)]
#[command(about = "Convert SRT subtitles to styled ASS scripts")]
#[command(args_conflicts_with_subcommands = true)]
#[command(long_about = "srt2ass converts SRT subtitles into ASS scripts using a user supplied style sheet.

EXAMPLES:
    srt2ass movie.srt                          # Bilingual conversion, Chinese line first
    srt2ass --en-first movie.srt               # English line first in each cue
    srt2ass --mono movie.srt                   # One dialogue line per cue
    srt2ass -s styles.ass -o out/ subs/        # Convert a whole directory with custom styles
    srt2ass completions bash > srt2ass.bash    # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default one
    will be created automatically.

STYLES:
    The style sheet may be a full pasted ASS header; its [Script Info] section is
    dropped. 'Default' and 'Secondary' styles are preferred, otherwise the first
    two declared styles are used.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    convert: ConvertArgs,
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
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Color and marker for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("\x1B[1;31m", "❌"),
            Level::Warn => ("\x1B[1;33m", "🚧"),
            Level::Info => ("\x1B[1;32m", " "),
            Level::Debug => ("\x1B[1;36m", "🔍"),
            Level::Trace => ("\x1B[1;35m", "📋"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let (color, marker) = Self::style_for_level(record.level());

            let _ = writeln!(
                std::io::stderr(),
                "{}{} {} {}\x1B[0m",
                color, now, marker, record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // The logger accepts everything; the effective level is set through log::set_max_level
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "srt2ass", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Convert(args)) => run_convert(args),
        None => run_convert(cli.convert),
    }
}

fn run_convert(options: ConvertArgs) -> Result<()> {
    if options.input_paths.is_empty() {
        return Err(anyhow!("INPUT_PATH is required when no subcommand is specified"));
    }

    // Apply a command line log level before loading the config so loading is logged at that level
    if let Some(cmd_log_level) = &options.log_level {
        let level: LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level.to_level_filter());
    }

    let mut config = Config::load_or_create(&options.config_path)
        .with_context(|| format!("Failed to load configuration: {}", options.config_path))?;

    apply_overrides(&mut config, &options);
    if options.log_level.is_none() {
        log::set_max_level(config.log_level.to_level_filter());
    }

    let controller = Controller::with_config(config)
        .context("Configuration validation failed")?;

    info!("Starting conversion of {} input path(s)", options.input_paths.len());
    let report = controller.run(&options.input_paths, options.output_dir.as_deref())?;

    if report.has_failures() {
        for (path, message) in &report.failed {
            warn!("{:?}: {}", path, message);
        }
        return Err(anyhow!(
            "{} of {} files failed to convert",
            report.failed.len(),
            report.total
        ));
    }

    Ok(())
}

/// Override config values with the CLI options that were given
fn apply_overrides(config: &mut Config, options: &ConvertArgs) {
    if let Some(styles) = &options.styles {
        config.style_file = Some(styles.clone());
        config.style_sheet = None;
    }
    if options.bilingual {
        config.bilingual = true;
    }
    if options.mono {
        config.bilingual = false;
    }
    if options.cn_first {
        config.cn_first = true;
    }
    if options.en_first {
        config.cn_first = false;
    }
    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }
}
