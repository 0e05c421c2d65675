/*
 * Snowfall Countdown
 *
 * Opens the countdown window with its animated snowfall overlay. Snow
 * density follows the number of days remaining: the closer the date, the
 * heavier the snow.
 *
 * Settings come from an optional TOML config file, with command line flags
 * taking precedence.
 */

use std::path::PathBuf;

use clap::Parser as _;
use color_eyre::eyre::{Result, WrapErr as _};
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _, Layer as _};

use snowfall::config::{Config, LogLevel};

#[derive(clap::Parser, Debug, Clone)]
#[command(version, about)]
struct CliArgs {
    /// Path to a TOML config file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Days remaining in the countdown. Drives snow density.
    #[arg(short, long)]
    days: Option<i64>,

    /// Start with the snow overlay switched off.
    #[arg(long)]
    no_snow: bool,

    /// Seed the snowfall for a reproducible animation.
    #[arg(long)]
    seed: Option<u64>,

    /// Maximum log level for this app. `RUST_LOG` adds filters for other crates.
    #[arg(long, value_enum)]
    log_level: Option<LogLevel>,
}

impl CliArgs {
    // Command line flags win over the config file
    fn apply(&self, config: &mut Config) {
        if let Some(days) = self.days {
            config.days_remaining = days;
        }
        if self.no_snow {
            config.snow_enabled = false;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(level) = self.log_level {
            config.log_level = level;
        }
    }
}

fn setup_logging(level: LogLevel) -> Result<()> {
    let filters = tracing_subscriber::EnvFilter::builder()
        .with_default_directive("off".parse()?)
        .from_env_lossy()
        .add_directive(format!("snowfall={}", level.as_directive()).parse()?);

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(filters);

    tracing_subscriber::registry().with(stderr_layer).init();
    Ok(())
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = CliArgs::parse();
    // Read before logging is set up, so load failures are reported by color-eyre instead
    let mut config = Config::load(args.config.as_deref())?;
    args.apply(&mut config);

    setup_logging(config.log_level)?;
    tracing::info!("Starting snowfall countdown");

    snowfall::app::run(config).wrap_err("Couldn't start the snow field")
}
