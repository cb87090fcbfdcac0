//! Launch configuration from flags and environment.

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "warn,coulomb_calc=info";

/// Electrostatic Force Calculator.
#[derive(Parser, Debug, Clone)]
#[command(name = "coulomb_calc", version, about)]
pub struct AppConfig {
    /// Initial window width in points.
    #[arg(long, default_value_t = 1280.0, env = "COULOMB_WIDTH")]
    pub width: f32,

    /// Initial window height in points.
    #[arg(long, default_value_t = 800.0, env = "COULOMB_HEIGHT")]
    pub height: f32,

    /// Start with an empty list instead of the example measurements.
    #[arg(long, env = "COULOMB_EMPTY")]
    pub empty: bool,

    /// Log level for this crate (error, warn, info, debug, trace).
    /// Overrides whatever `RUST_LOG` says for this crate.
    #[arg(long, env = "COULOMB_LOG")]
    pub log_level: Option<tracing::Level>,
}

impl AppConfig {
    /// Parse CLI arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Window size, never smaller than the minimum layout.
    pub fn inner_size(&self) -> [f32; 2] {
        [
            self.width.max(MIN_WINDOW_SIZE[0]),
            self.height.max(MIN_WINDOW_SIZE[1]),
        ]
    }

    /// Build the log filter from `rust_log` (the `RUST_LOG` value, if set),
    /// falling back to [`DEFAULT_LOG_FILTER`]. An explicit `--log-level`
    /// is applied last.
    pub fn log_filter(&self, rust_log: Option<&str>) -> anyhow::Result<EnvFilter> {
        let mut filter = match rust_log {
            Some(directives) if !directives.trim().is_empty() => EnvFilter::try_new(directives)?,
            _ => EnvFilter::try_new(DEFAULT_LOG_FILTER)?,
        };
        if let Some(level) = self.log_level {
            let level = level.as_str().to_ascii_lowercase();
            filter = filter.add_directive(format!("coulomb_calc={level}").parse()?);
        }
        Ok(filter)
    }
}

/// Smallest window that still fits the form next to one card column.
pub const MIN_WINDOW_SIZE: [f32; 2] = [800.0, 600.0];
