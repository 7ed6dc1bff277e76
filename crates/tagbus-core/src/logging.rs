use crate::config::LoggingConfig;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "info";

/// Installs the global fmt subscriber on stderr. A second call is a no-op.
pub fn init_logging(cfg: &LoggingConfig) {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let _ = fmt()
        .with_env_filter(resolve_filter(cfg, env.as_deref()))
        .with_writer(std::io::stderr)
        .try_init();
}

/// `RUST_LOG` directives first, then `cfg.filter`, then `info`. Directives
/// that fail to parse fall through to the next source.
fn resolve_filter(cfg: &LoggingConfig, env: Option<&str>) -> EnvFilter {
    env.and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| {
            cfg.filter
                .as_deref()
                .and_then(|directives| EnvFilter::try_new(directives).ok())
        })
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directives(cfg: &LoggingConfig, env: Option<&str>) -> String {
        resolve_filter(cfg, env).to_string().to_lowercase()
    }

    fn configured(filter: &str) -> LoggingConfig {
        LoggingConfig {
            filter: Some(filter.to_string()),
        }
    }

    #[test]
    fn env_wins_over_config() {
        assert_eq!(directives(&configured("tagbus=debug"), Some("warn")), "warn");
    }

    #[test]
    fn config_used_without_env() {
        assert_eq!(directives(&configured("tagbus=debug"), None), "tagbus=debug");
    }

    #[test]
    fn unparsable_env_falls_back_to_config() {
        assert_eq!(
            directives(&configured("tagbus=debug"), Some("tagbus=notalevel")),
            "tagbus=debug"
        );
    }

    #[test]
    fn defaults_to_info() {
        assert_eq!(directives(&LoggingConfig::default(), None), "info");
        assert_eq!(directives(&configured("x=notalevel"), None), "info");
    }
}
