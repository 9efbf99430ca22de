// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{LevelFilter, Level, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;

use ccremover::app_config::{Config, LogLevel};
use ccremover::app_controller::Controller;

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
    /// Generate shell completions for ccremover
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// ccremover - Closed Captions Remover
///
/// Removes bracketed closed-caption annotations such as "[door creaks]" or
/// "(laughs)" from SRT subtitle files and renumbers what is left.
#[derive(Parser, Debug)]
#[command(name = "ccremover")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
#[command(about = "Remove closed captions from SRT subtitle files")]
#[command(long_about = "ccremover strips closed-caption annotations from SRT subtitle files.

Lines that start with '[' or '(' and end with ']' or ')' are removed, subtitle
blocks left without text are dropped and the remaining blocks are renumbered.
Files without captions are left untouched and nothing is written for them.

EXAMPLES:
    ccremover movie.srt                      # Write output/movie.srt
    ccremover -o cleaned episodes/           # Process every .srt under episodes/
    ccremover -s movie.srt                   # Also print the removed captions
    ccremover completions bash > ccremover.bash

CONFIGURATION:
    Settings are read from conf.json when it exists. Use --config-path to point
    elsewhere. Command line options override the file.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Subtitle files or directories to process
    #[arg(value_name = "INPUT_PATH")]
    input_paths: Vec<PathBuf>,

    /// Directory cleaned files are written to
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: PathBuf,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Print the removed captions of every cleaned file
    #[arg(short, long)]
    show_captions: bool,

    /// Only look at the top level of input directories
    #[arg(long)]
    no_recursive: bool,
}

// @struct: Custom logger implementation
struct CustomLogger;

impl CustomLogger {
    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger))?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Marker and ANSI color for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("❌", "1;31"),
            Level::Warn => ("🚧", "1;33"),
            Level::Info => (" ", "1;32"),
            Level::Debug => ("🔍", "1;36"),
            Level::Trace => ("📋", "1;35"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (marker, color) = Self::style_for_level(record.level());
            let _ = writeln!(
                std::io::stderr(),
                "\x1B[{}m{} {} {}\x1B[0m",
                color, now, marker, record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Info until the config is known
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    if let Some(Commands::Completions { shell }) = &cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(*shell, &mut cmd, "ccremover", &mut std::io::stdout());
        return Ok(());
    }

    if cli.input_paths.is_empty() {
        return Err(anyhow!("INPUT_PATH is required when no subcommand is specified"));
    }

    let config = build_config(&cli)?;
    log::set_max_level(config.log_level.to_level_filter());

    let controller = Controller::with_config(config)?;
    let summary = controller.run(&cli.input_paths)?;

    if controller.config().show_captions {
        let mut stdout = std::io::stdout().lock();
        for report in &summary.reports {
            if report.captions().is_empty() {
                continue;
            }
            writeln!(stdout, "{}:", report.file_name())?;
            for caption in report.captions() {
                writeln!(stdout, "    {}", caption)?;
            }
        }
    }

    let failed = summary.failed_count();
    if failed > 0 {
        return Err(anyhow!("{} file(s) could not be processed", failed));
    }

    Ok(())
}

// Load the config file and apply command line overrides
fn build_config(cli: &CommandLineOptions) -> Result<Config> {
    let mut config = Config::load_or_default(&cli.config_path)?;

    if let Some(output_dir) = &cli.output_dir {
        config.output_dir = output_dir.clone();
    }

    if let Some(log_level) = &cli.log_level {
        config.log_level = log_level.clone().into();
    }

    if cli.show_captions {
        config.show_captions = true;
    }

    if cli.no_recursive {
        config.recursive = false;
    }

    Ok(config)
}
