// crates/cli/src/logging.rs
use std::error::Error;

use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive; overrides `-v`/`-q`.
pub const LOG_ENV: &str = "PANEL_ORDER_LOG";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Debug,
    Trace,
}

impl Verbosity {
    pub fn from_flags(verbose: u8, quiet: bool) -> Self {
        match (quiet, verbose) {
            (true, _) => Self::Quiet,
            (false, 0) => Self::Normal,
            (false, 1) => Self::Debug,
            (false, _) => Self::Trace,
        }
    }

    pub fn directive(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

/// Installs the stderr subscriber and routes `log` records from the library
/// crates into it.
///
/// An unparsable `PANEL_ORDER_LOG` value is reported on stderr and the
/// verbosity flags are used instead.
///
/// # Errors
/// Fails when a global subscriber or `log` logger is already installed.
pub fn init(verbosity: Verbosity) -> Result<(), Box<dyn Error + Send + Sync>> {
    let env_value = std::env::var(LOG_ENV).ok();
    let (filter, warning) = build_filter(env_value.as_deref(), verbosity);
    if let Some(warning) = warning {
        eprintln!("Warning: {warning}");
    }

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    tracing_log::LogTracer::init()?;
    Ok(())
}

/// Picks the filter from the environment value, falling back to the flags.
/// The second element carries a message when the environment value was rejected.
fn build_filter(env_value: Option<&str>, verbosity: Verbosity) -> (EnvFilter, Option<String>) {
    let fallback = || EnvFilter::new(verbosity.directive());
    match env_value.map(str::trim).filter(|v| !v.is_empty()) {
        None => (fallback(), None),
        Some(directive) => match EnvFilter::try_new(directive) {
            Ok(filter) => (filter, None),
            Err(err) => (
                fallback(),
                Some(format!(
                    "ignoring {LOG_ENV}={directive:?} ({err}); using '{}'",
                    verbosity.directive()
                )),
            ),
        },
    }
}
