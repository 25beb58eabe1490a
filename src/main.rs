//! tprompt - Entry Point

use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// tprompt - terminal teleprompter that scrolls text to finish in a set time
#[derive(Parser, Debug)]
#[command(name = "tprompt")]
#[command(version)]
#[command(about = "Scroll a text file through the terminal so it ends after DURATION seconds")]
pub struct Args {
    /// Path to the text file, or `-` to read stdin
    pub file: PathBuf,

    /// Total playback time in seconds, sentence pauses included
    #[arg(value_parser = parse_duration)]
    pub duration: f64,

    /// Start in mirror mode
    #[arg(long)]
    pub mirror: bool,

    /// Pause on each sentence-ending line, in seconds
    #[arg(long, value_parser = parse_pause)]
    pub pause: Option<f64>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,
}

fn parse_duration(raw: &str) -> Result<f64, String> {
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Ok(value),
        Ok(value) => Err(format!("duration must be a positive number of seconds, got {value}")),
        Err(e) => Err(e.to_string()),
    }
}

fn parse_pause(raw: &str) -> Result<f64, String> {
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        Ok(value) => Err(format!("pause must be zero or more seconds, got {value}")),
        Err(e) => Err(e.to_string()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = tprompt::config::load_config_with_precedence(args.config.clone())?;
        let merged = tprompt::config::merge_config(config_file)?;
        let with_env = tprompt::config::apply_env_overrides(merged);

        // Only override mirror if the flag was explicitly set
        let mirror_override = if args.mirror { Some(true) } else { None };
        tprompt::config::apply_cli_overrides(with_env, mirror_override, args.pause)
    };
    config.validate()?;

    tprompt::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        duration = args.duration,
        "Configuration loaded and resolved"
    );

    let input_source = tprompt::source::detect_input_source(args.file.clone())?;
    let colors = tprompt::view::ColorConfig::from_env_and_args(args.no_color);

    tprompt::view::run_with_source(input_source, args.duration, config, colors)?;

    Ok(())
}
