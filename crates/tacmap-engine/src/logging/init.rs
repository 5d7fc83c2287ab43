use std::sync::Once;

/// Logger configuration.
///
/// Filter precedence: `env_filter`, then `RUST_LOG`, then `default_level`.
/// `env_filter` follows the `env_logger` syntax (e.g. "tacmap_view=trace,warn").
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub default_level: log::LevelFilter,
    pub write_style: env_logger::WriteStyle,
    /// Route output through the test harness capture instead of stderr.
    pub capture_for_tests: bool,
}

impl LoggingConfig {
    /// Config for a host binary that wants `level` unless `RUST_LOG` says otherwise.
    pub fn with_level(level: log::LevelFilter) -> Self {
        Self { default_level: level, ..Self::default() }
    }

    /// Quiet config for `#[test]` functions: warnings only, captured per test.
    pub fn for_tests() -> Self {
        Self {
            default_level: log::LevelFilter::Warn,
            capture_for_tests: true,
            ..Self::default()
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            default_level: log::LevelFilter::Info,
            write_style: env_logger::WriteStyle::Auto,
            capture_for_tests: false,
        }
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// Idempotent: later calls are ignored, including calls with a different
/// config. A logger installed by someone else first is left in place.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match config.env_filter.or_else(|| std::env::var("RUST_LOG").ok()) {
            Some(filter) => {
                builder.parse_filters(&filter);
            }
            None => {
                builder.filter_level(config.default_level);
            }
        }

        builder
            .write_style(config.write_style)
            .is_test(config.capture_for_tests);

        if builder.try_init().is_ok() {
            log::debug!("logging initialized");
        }
    });
}
