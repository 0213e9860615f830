// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::PathBuf;

use crate::app_config::Config;
use app_controller::{Controller, RunOptions};

mod app_config;
mod app_controller;
mod catalog;
mod errors;
mod file_utils;
mod matching;
mod user_prompt;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Match video files against the episode catalog and rename them (default command)
    #[command(alias = "match")]
    Rename(RenameArgs),

    /// Generate shell completions for shownamer
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct RenameArgs {
    /// Series name to look up in the episode catalog
    #[arg(value_name = "SERIES")]
    series: String,

    /// Directory containing the video files
    #[arg(value_name = "DIRECTORY", default_value = ".")]
    directory: PathBuf,

    /// Report the planned renames without touching any file
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Explicit catalog series id, bypassing the name search
    #[arg(long)]
    series_id: Option<u64>,

    /// Catalog API key (overrides the config file)
    #[arg(long, env = "SHOWNAMER_API_KEY")]
    api_key: Option<String>,

    /// Preferred metadata language code (e.g. 'en', 'fr')
    #[arg(long)]
    language: Option<String>,

    /// Skip the on-disk catalog response cache
    #[arg(long)]
    no_cache: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// shownamer - episode matching and renaming
///
/// Matches the video files of a directory against the canonical episode list
/// of a series and renames them to "{Series} SxxEyy {Episode Name}".
#[derive(Parser, Debug)]
#[command(name = "shownamer")]
#[command(version = "0.1.0")]
#[command(about = "Match video files to catalog episodes and rename them")]
#[command(long_about = "shownamer fetches the episode list of a series from a \
TVDB-style catalog and matches it against the video files of a directory: exact \
normalized-name matches first, close names (edit distance or substring \
containment) as fallback, with an interactive prompt whenever several files tie.

EXAMPLES:
    shownamer \"Some Show\" ./videos              # Preview and rename
    shownamer -n \"Some Show\" ./videos           # Dry run, plan only
    shownamer --series-id 12345 \"Some Show\" .   # Skip the name search
    shownamer --no-cache \"Some Show\" ./videos   # Force fresh catalog data
    shownamer completions bash > shownamer.bash  # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default
    one will be created automatically. The catalog API key can also be passed
    via the SHOWNAMER_API_KEY environment variable.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Series name to look up in the episode catalog
    #[arg(value_name = "SERIES")]
    series: Option<String>,

    /// Directory containing the video files
    #[arg(value_name = "DIRECTORY", default_value = ".")]
    directory: PathBuf,

    /// Report the planned renames without touching any file
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Explicit catalog series id, bypassing the name search
    #[arg(long)]
    series_id: Option<u64>,

    /// Catalog API key (overrides the config file)
    #[arg(long, env = "SHOWNAMER_API_KEY")]
    api_key: Option<String>,

    /// Preferred metadata language code (e.g. 'en', 'fr')
    #[arg(long)]
    language: Option<String>,

    /// Skip the on-disk catalog response cache
    #[arg(long)]
    no_cache: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
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

    // @returns: ANSI color code for log level
    fn get_color_for_level(level: Level) -> &'static str {
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
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let color = Self::get_color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {:5} {}\x1B[0m",
                color,
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

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "shownamer", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Rename(args)) => run_rename(args).await,
        None => {
            // Default behavior - use top-level args for backwards compatibility
            let series = cli
                .series
                .ok_or_else(|| anyhow!("SERIES is required when no subcommand is specified"))?;

            let rename_args = RenameArgs {
                series,
                directory: cli.directory,
                dry_run: cli.dry_run,
                series_id: cli.series_id,
                api_key: cli.api_key,
                language: cli.language,
                no_cache: cli.no_cache,
                config_path: cli.config_path,
                log_level: cli.log_level,
            };
            run_rename(rename_args).await
        }
    }
}

async fn run_rename(options: RenameArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        log::set_max_level(to_level_filter(&cmd_log_level.clone().into()));
    }

    let config_path = &options.config_path;
    let mut config = if file_utils::FileManager::file_exists(config_path) {
        Config::from_file(config_path)?
    } else {
        // Create default configuration if not exists
        warn!(
            "Config file not found at '{}', creating default config.",
            config_path
        );

        let config = Config::default();
        config.save(config_path)?;
        config
    };

    // Apply command line overrides
    if let Some(api_key) = &options.api_key {
        config.catalog.api_key = api_key.clone();
    }
    if let Some(language) = &options.language {
        config.catalog.language = language.clone();
    }
    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    config.validate()?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        // Just update the max level without reinitializing the logger
        log::set_max_level(to_level_filter(&config.log_level));
    }

    let controller = Controller::with_config(config)?;
    controller
        .run(RunOptions {
            series_query: options.series,
            directory: options.directory,
            dry_run: options.dry_run,
            series_id: options.series_id,
            no_cache: options.no_cache,
        })
        .await
}

fn to_level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}
