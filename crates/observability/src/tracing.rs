//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::fmt::time::SystemTime;

/// How the process-wide subscriber should format and filter events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Fallback filter directive when `RUST_LOG` is unset or invalid.
    pub filter: String,
    /// JSON lines instead of human-readable output.
    pub json: bool,
    /// Prefix events with wall-clock time. Must be off on `wasm32`.
    pub timestamps: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            json: true,
            timestamps: true,
        }
    }
}

impl LogConfig {
    /// Plain text without timestamps, for a browser console.
    pub fn browser(filter: impl Into<String>) -> Self {
        Self {
            filter: filter.into(),
            json: false,
            timestamps: false,
        }
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| self.configured_filter())
    }

    /// The configured directive, or `info` if it does not parse.
    fn configured_filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.filter).unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    init_with(&LogConfig::default());
}

/// Initialize with an explicit config, writing to stdout.
pub fn init_with(config: &LogConfig) -> bool {
    init_with_writer(config, std::io::stdout)
}

/// Initialize with an explicit config and output sink.
///
/// Returns `false` when a global subscriber was already installed.
pub fn init_with_writer<W>(config: &LogConfig, writer: W) -> bool
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let builder = tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .with_writer(writer)
        .with_target(false);

    let installed = match (config.json, config.timestamps) {
        (true, true) => builder.json().with_timer(SystemTime).try_init(),
        (true, false) => builder.json().without_time().try_init(),
        (false, true) => builder.with_timer(SystemTime).try_init(),
        (false, false) => builder.without_time().try_init(),
    };

    installed.is_ok()
}

#[cfg(test)]
mod tests {
    use tracing_subscriber::filter::LevelFilter;

    use super::*;

    #[test]
    fn browser_config_disables_time_and_json() {
        let config = LogConfig::browser("debug");
        assert_eq!(config.filter, "debug");
        assert!(!config.json);
        assert!(!config.timestamps);
    }

    #[test]
    fn repeated_init_is_a_no_op() {
        init();
        assert!(!init_with(&LogConfig::browser("trace")));
    }

    #[test]
    fn bad_filter_falls_back_to_info() {
        let config = LogConfig {
            filter: "prodcheck=loudest".to_string(),
            ..LogConfig::default()
        };
        assert_eq!(
            config.configured_filter().max_level_hint(),
            Some(LevelFilter::INFO)
        );
    }

    #[test]
    fn valid_filter_is_used_as_given() {
        let config = LogConfig::browser("debug");
        assert_eq!(
            config.configured_filter().max_level_hint(),
            Some(LevelFilter::DEBUG)
        );
    }
}
