//! Subscriber setup.
//!
//! One global subscriber per process: an `EnvFilter` plus a JSON or pretty
//! `fmt` layer. Events carry a `component` field when logged through
//! `log_event!`.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::{TelemetryConfig, TelemetryError};

/// Build the event filter for `config`.
pub fn env_filter(config: &TelemetryConfig) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(&config.log_level).map_err(|e| TelemetryError::Config(e.to_string()))
}

/// Install the global subscriber.
///
/// Fails instead of panicking when a subscriber is already installed.
pub fn init_logging(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let filter = env_filter(config)?;

    if config.json_logs {
        // JSON output for containers
        let json_layer = config.console_output.then(|| {
            tracing_subscriber::fmt::layer()
                .json()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true)
        });
        tracing_subscriber::registry()
            .with(filter)
            .with(json_layer)
            .try_init()
            .map_err(|e| TelemetryError::Init(e.to_string()))?;
    } else {
        // Pretty output for development
        let fmt_layer = config.console_output.then(|| {
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .with_ansi(true)
        });
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .try_init()
            .map_err(|e| TelemetryError::Init(e.to_string()))?;
    }

    tracing::info!(
        service = %config.service_name,
        level = %config.log_level,
        json = config.json_logs,
        "Logging initialized"
    );
    Ok(())
}

/// Log an event with a `component` field.
///
/// ```rust,ignore
/// log_event!(info, "tn-03", "Wallet login succeeded", wallet = %kind);
/// ```
#[macro_export]
macro_rules! log_event {
    (info, $component:expr, $msg:expr $(, $($field:tt)*)?) => {
        tracing::info!(
            component = $component,
            $($($field)*,)?
            $msg
        )
    };

    (warn, $component:expr, $msg:expr $(, $($field:tt)*)?) => {
        tracing::warn!(
            component = $component,
            $($($field)*,)?
            $msg
        )
    };

    (error, $component:expr, $msg:expr $(, $($field:tt)*)?) => {
        tracing::error!(
            component = $component,
            $($($field)*,)?
            $msg
        )
    };

    (debug, $component:expr, $msg:expr $(, $($field:tt)*)?) => {
        tracing::debug!(
            component = $component,
            $($($field)*,)?
            $msg
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_filter_is_rejected() {
        let config = TelemetryConfig {
            log_level: "tn=verbose".to_string(),
            ..Default::default()
        };
        assert!(matches!(env_filter(&config), Err(TelemetryError::Config(_))));
    }

    // The only test in this crate that installs the global subscriber.
    #[test]
    fn test_second_init_is_an_error() {
        let config = TelemetryConfig {
            console_output: false,
            ..Default::default()
        };
        assert!(init_logging(&config).is_ok());
        assert!(matches!(init_logging(&config), Err(TelemetryError::Init(_))));

        crate::log_event!(info, "tn-telemetry", "after init", attempt = 2);
    }
}
