pub(crate) mod app;
pub(crate) mod color;
pub(crate) mod config;
pub(crate) mod effects;
pub(crate) mod error;
pub(crate) mod output;
pub(crate) mod pacer;
pub(crate) mod renderer;

use std::io::Write;
use std::path::PathBuf;
use std::process;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use clap::Parser;

use crate::app::Request;
use crate::config::{LightConfig, OutputKind};
use crate::error::LightError;
use crate::pacer::FramePacer;
use crate::renderer::RenderOutcome;

const LOG_TAG: &str = "ledpulse";
const EXIT_INTERRUPTED: i32 = 130;

/// Show a color on a WS2812B strip with a short transition effect.
#[derive(Parser, Debug)]
#[command(version)]
struct Cli {
    /// Hex color code, e.g. '#FF5733'
    #[arg(long, value_name = "HEX")]
    color: String,

    /// Light intensity from 0.0 to 1.0, values outside are clamped
    #[arg(long, value_name = "FLOAT", allow_negative_numbers = true)]
    intensity: f64,

    /// Lighting effect: static, pulse, strobe or fade
    #[arg(long, value_name = "NAME")]
    effect: String,

    /// Strip configuration file (TOML, JSON or YAML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Leave the strip lit after the effect instead of switching it off
    #[arg(long)]
    persist: bool,

    /// Log frames instead of driving the strip
    #[arg(long)]
    dry_run: bool,
}

impl Cli {
    fn light_config(&self) -> Result<LightConfig, LightError> {
        let mut config = match self.config.as_deref() {
            Some(path) => LightConfig::load(path)?,
            None => LightConfig::default(),
        };

        if self.persist {
            config.persist_after_effect = true;
        }
        if self.dry_run {
            config.output = OutputKind::DryRun;
        }

        Ok(config)
    }

    fn request(&self) -> Request {
        Request {
            color: self.color.clone(),
            intensity: self.intensity,
            effect: self.effect.clone(),
        }
    }
}

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stdout)
        .format(|buf, record| match record.level() {
            log::Level::Info => writeln!(buf, "[{}] {}", LOG_TAG, record.args()),
            level => writeln!(buf, "[{} {}] {}", LOG_TAG, level, record.args()),
        })
        .init();
}

fn execute(args: &Cli) -> Result<RenderOutcome, LightError> {
    let config = args.light_config()?;

    let interrupted = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&interrupted);
    if let Err(err) = ctrlc::set_handler(move || flag.store(true, Ordering::SeqCst)) {
        log::warn!("Cannot install interrupt handler: {err}");
    }

    let mut pacer = FramePacer::new();
    let outcome = app::run(
        &args.request(),
        &config,
        output::open_output,
        &mut pacer,
        interrupted,
    );

    if pacer.late_frames() > 0 {
        log::debug!("{} frames were shown late", pacer.late_frames());
    }

    outcome
}

fn exit_code(outcome: &Result<RenderOutcome, LightError>) -> i32 {
    match outcome {
        Ok(RenderOutcome::Completed) => 0,
        Ok(RenderOutcome::Interrupted) => EXIT_INTERRUPTED,
        Err(err) => err.exit_code(),
    }
}

fn main() {
    init_logging();
    let args = Cli::parse();

    let outcome = execute(&args);
    match &outcome {
        Ok(RenderOutcome::Completed) => log::debug!("Effect '{}' done", args.effect),
        Ok(RenderOutcome::Interrupted) => log::info!("Execution interrupted."),
        Err(err) => log::error!("{err}"),
    }

    process::exit(exit_code(&outcome));
}
