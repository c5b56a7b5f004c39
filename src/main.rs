// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use app_controller::Controller;

mod app_config;
mod app_controller;
mod cell_parser;
mod display;
mod errors;
mod html_render;
mod line_tokens;
mod navigation;
mod story_store;
mod text_utils;

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

fn level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render one line's model comparison page as HTML
    View(ViewArgs),

    /// List the indexed stories with titles and line counts
    Stories {
        /// Override the configured story root directory
        #[arg(long)]
        story_dir: Option<PathBuf>,
    },

    /// Generate shell completions for storylens
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug)]
struct ViewArgs {
    /// Story folder name
    story: String,

    /// 1-based line number to display
    #[arg(short = 'n', long, default_value_t = 1)]
    line: usize,

    /// Override the configured story root directory
    #[arg(long)]
    story_dir: Option<PathBuf>,

    /// Show literal-mapping bullets as individual rows
    #[arg(long)]
    literal_bullets: bool,

    /// Show AI-translation bullets as individual rows
    #[arg(long)]
    ai_bullets: bool,

    /// Show the cultural-context row
    #[arg(long)]
    cultural: bool,

    /// Show the clarification row
    #[arg(long)]
    clarification: bool,

    /// Disable part-of-speech coloring
    #[arg(long)]
    no_color_pos: bool,

    /// Font size in pixels for the rendered page
    #[arg(long)]
    font_size: Option<u32>,

    /// Write the HTML to a file instead of stdout
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Render the aligned story table instead of the comparison page
    #[arg(long)]
    navigator: bool,
}

#[derive(Parser, Debug)]
#[command(
    name = "storylens",
    version,
    about = "Browse aligned bilingual stories and compare AI model translations"
)]
struct CommandLineOptions {
    /// Path to the configuration file
    #[arg(short = 'c', long = "config", default_value = "storylens-conf.json")]
    config_path: String,

    /// Log level
    #[arg(short = 'l', long = "log-level", value_enum)]
    log_level: Option<CliLogLevel>,

    #[command(subcommand)]
    command: Commands,
}

/// Stderr logger with timestamp, per-level color and emoji
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(CustomLogger { level }))?;
        log::set_max_level(level);
        Ok(())
    }

    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("\x1B[1;31m", "\u{274C}"),
            Level::Warn => ("\x1B[1;33m", "\u{26A0}\u{FE0F}"),
            Level::Info => ("\x1B[1;32m", "\u{2139}\u{FE0F}"),
            Level::Debug => ("\x1B[1;36m", "\u{1F50D}"),
            Level::Trace => ("\x1B[1;35m", "\u{1F4DD}"),
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
            let (color, emoji) = Self::style_for_level(record.level());
            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {} {}\x1B[0m", color, now, emoji, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    if let Some(cmd_log_level) = &cli.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter(&config_log_level));
    }

    match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "storylens", &mut std::io::stdout());
            Ok(())
        }
        Commands::Stories { story_dir } => {
            let config = load_or_create_config(&cli.config_path, &cli.log_level, story_dir, None)?;
            run_stories(config)
        }
        Commands::View(args) => {
            let config = load_or_create_config(
                &cli.config_path,
                &cli.log_level,
                args.story_dir.clone(),
                args.font_size,
            )?;
            run_view(config, args)
        }
    }
}

/// Load the configuration, creating a default file when absent, then apply
/// CLI overrides.
fn load_or_create_config(
    config_path: &str,
    cli_log_level: &Option<CliLogLevel>,
    story_dir: Option<PathBuf>,
    font_size: Option<u32>,
) -> Result<Config> {
    let mut config = if Path::new(config_path).exists() {
        Config::from_file(config_path)?
    } else {
        warn!("Config file not found at '{}', creating default config.", config_path);
        let config = Config::default();
        config.save(config_path)?;
        config
    };

    if let Some(dir) = story_dir {
        config.story_dir = dir;
    }
    if let Some(size) = font_size {
        config.display.font_size = size;
    }
    if let Some(log_level) = cli_log_level {
        config.log_level = log_level.clone().into();
    }

    config.validate().context("Configuration validation failed")?;
    log::set_max_level(level_filter(&config.log_level));
    Ok(config)
}

fn run_stories(config: Config) -> Result<()> {
    let controller = Controller::with_config(config)?;
    let summaries = controller.list_stories()?;
    if summaries.is_empty() {
        println!("No stories indexed.");
        return Ok(());
    }
    for summary in summaries {
        println!(
            "{}\t{}\t{} lines",
            summary.name, summary.title, summary.line_count
        );
    }
    Ok(())
}

fn run_view(config: Config, args: ViewArgs) -> Result<()> {
    let mut opts = config.display.options();
    // CLI flags only switch sections on; the config holds the defaults
    opts.show_literal_bullets |= args.literal_bullets;
    opts.show_ai_bullets |= args.ai_bullets;
    opts.show_cultural |= args.cultural;
    opts.show_clarification |= args.clarification;
    if args.no_color_pos {
        opts.color_pos = false;
    }

    let controller = Controller::with_config(config)?;
    let html = if args.navigator {
        controller.render_navigator(&args.story, args.line)?
    } else {
        controller.render_line(&args.story, args.line, opts)?
    };

    match &args.output {
        Some(path) => std::fs::write(path, html)
            .context(format!("Failed to write output file: {}", path.display()))?,
        None => println!("{}", html),
    }
    Ok(())
}
