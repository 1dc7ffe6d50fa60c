pub mod build_info;

use std::{env, sync::Once};

use tracing_subscriber::EnvFilter;

static TRACING_INIT: Once = Once::new();

const DEFAULT_LOG_FILTER: &str = "pantry_core=info";

/// Initializes the global tracing subscriber with sensible defaults.
///
/// Logs go to stderr so report output on stdout stays machine-readable.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let directives = env::var(EnvFilter::DEFAULT_ENV).ok();
        let _ = tracing_subscriber::fmt()
            .with_env_filter(log_filter(directives.as_deref()))
            .with_writer(std::io::stderr)
            .try_init();
    });
}

/// `RUST_LOG`-style directives, or `pantry_core=info` when none (or only
/// invalid ones) are given.
pub(crate) fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .map(str::trim)
        .filter(|raw| !raw.is_empty())
        .and_then(|raw| EnvFilter::try_new(raw).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn rust_log_can_enable_debug_output() {
        let filter = log_filter(Some("pantry_core=debug"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(filter.to_string(), "pantry_core=debug");
    }

    #[test]
    fn missing_or_blank_directives_fall_back_to_info() {
        for directives in [None, Some(""), Some("   ")] {
            let filter = log_filter(directives);
            assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
            assert_eq!(filter.to_string(), DEFAULT_LOG_FILTER);
        }
    }

    #[test]
    fn global_debug_is_not_overridden() {
        let filter = log_filter(Some("debug"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
        assert!(!filter.to_string().contains("pantry_core=info"));
    }
}
