//! Logging initialisation for the netmodels CLI.
//!
//! Installs a global `tracing` subscriber writing to `stderr`, in human or
//! JSON form, and bridges the `log` facade into it. Without `RUST_LOG` the
//! netmodels crates log at `info` and everything else at `warn`. Periodic
//! progress from generators, metric workers, and the edge-list reader stays
//! quiet unless `NETMODELS_LOG_PROGRESS` is set.

use std::{env, sync::OnceLock};

use netmodels_core::PROGRESS_TARGET;
use thiserror::Error;
use tracing_log::LogTracer;
use tracing_subscriber::{
    EnvFilter, Layer,
    filter::{Directive, ParseError},
    fmt::format::FmtSpan,
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

const LOG_FORMAT_ENV: &str = "NETMODELS_LOG_FORMAT";
const LOG_PROGRESS_ENV: &str = "NETMODELS_LOG_PROGRESS";
const DEFAULT_DIRECTIVES: &str =
    "warn,netmodels_cli=info,netmodels_core=info,netmodels_providers_edgelist=info";

static INITIALISED: OnceLock<()> = OnceLock::new();

/// Output style of the installed subscriber.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum LogFormat {
    Human,
    Json,
}

/// Errors raised while initialising structured logging.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Environment variable contained invalid UTF-8 data.
    #[error("environment variable `{name}` contained invalid UTF-8: {source}")]
    InvalidUnicode {
        /// Name of the offending environment variable.
        name: &'static str,
        /// Underlying parse failure.
        #[source]
        source: env::VarError,
    },
    /// Unsupported log format requested via `NETMODELS_LOG_FORMAT`.
    #[error("unsupported log format `{provided}`; expected `human` or `json`")]
    UnsupportedFormat {
        /// Raw value supplied by the user.
        provided: String,
    },
    /// `NETMODELS_LOG_PROGRESS` was not a recognised switch value.
    #[error("unsupported progress switch `{provided}`; expected `1`, `true`, `0`, or `false`")]
    UnsupportedProgressSwitch {
        /// Raw value supplied by the user.
        provided: String,
    },
    /// The progress directive could not be built.
    #[error("invalid filter directive: {source}")]
    InvalidDirective {
        /// Error raised while parsing the directive.
        #[source]
        source: ParseError,
    },
    /// Failed to install the global tracing subscriber.
    #[error("failed to install tracing subscriber: {source}")]
    InstallFailed {
        /// Error raised by `tracing_subscriber`.
        #[source]
        source: tracing_subscriber::util::TryInitError,
    },
}

/// Install global structured logging if it has not already been configured.
///
/// Output is human-readable unless `NETMODELS_LOG_FORMAT=json` is set.
/// `RUST_LOG` replaces the default directives; `NETMODELS_LOG_PROGRESS=1`
/// adds `debug` progress events on top of either.
///
/// # Errors
/// Returns [`LoggingError`] if an environment variable contains invalid
/// Unicode or an unsupported value.
pub fn init_logging() -> Result<(), LoggingError> {
    if INITIALISED.get().is_some() {
        return Ok(());
    }

    match install_subscriber() {
        Ok(()) => {}
        Err(LoggingError::InstallFailed { source }) => {
            tracing::debug!(%source, "structured logging already configured elsewhere");
        }
        Err(err) => return Err(err),
    }
    let _ = INITIALISED.set(());
    Ok(())
}

fn install_subscriber() -> Result<(), LoggingError> {
    let format = read_env(LOG_FORMAT_ENV)?
        .map_or(Ok(LogFormat::Human), |raw| parse_log_format(&raw))?;
    let show_progress = read_env(LOG_PROGRESS_ENV)?
        .map_or(Ok(false), |raw| parse_progress_switch(&raw))?;
    let rust_log = read_env(EnvFilter::DEFAULT_ENV)?;
    let env_filter = build_filter(rust_log.as_deref(), show_progress)?;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr);

    let fmt_layer = match format {
        LogFormat::Json => fmt_layer
            .json()
            .with_current_span(true)
            .with_span_list(true)
            .boxed(),
        LogFormat::Human => fmt_layer.boxed(),
    };

    // Another logger may already own the global `log` slot.
    let _ = LogTracer::init();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|source| LoggingError::InstallFailed { source })
}

fn read_env(name: &'static str) -> Result<Option<String>, LoggingError> {
    match env::var(name) {
        Ok(raw) => Ok(Some(raw)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(source @ env::VarError::NotUnicode(_)) => {
            Err(LoggingError::InvalidUnicode { name, source })
        }
    }
}

/// Builds the subscriber filter. An unparsable `rust_log` falls back to the
/// default directives.
fn build_filter(rust_log: Option<&str>, show_progress: bool) -> Result<EnvFilter, LoggingError> {
    let filter = rust_log
        .and_then(|raw| EnvFilter::try_new(raw).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVES));
    if !show_progress {
        return Ok(filter);
    }
    let progress: Directive = format!("{PROGRESS_TARGET}=debug")
        .parse()
        .map_err(|source| LoggingError::InvalidDirective { source })?;
    Ok(filter.add_directive(progress))
}

fn parse_log_format(raw: &str) -> Result<LogFormat, LoggingError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "human" => Ok(LogFormat::Human),
        "json" => Ok(LogFormat::Json),
        other => Err(LoggingError::UnsupportedFormat {
            provided: other.to_owned(),
        }),
    }
}

fn parse_progress_switch(raw: &str) -> Result<bool, LoggingError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        other => Err(LoggingError::UnsupportedProgressSwitch {
            provided: other.to_owned(),
        }),
    }
}
