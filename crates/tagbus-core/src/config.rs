use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct CoreConfig {
    pub logging: LoggingConfig,
    pub dispatch: DispatchConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directives, e.g. `"info,tagbus_dispatch=trace"`.
    pub filter: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct DispatchConfig {
    /// Emit a debug record for every event no binding matched.
    pub log_unmatched: bool,
}

impl CoreConfig {
    pub fn from_json_str(data: &str) -> CoreResult<Self> {
        let cfg: CoreConfig = serde_json::from_str(data)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: impl AsRef<Path>) -> CoreResult<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)?;
        let cfg = Self::from_json_str(&data)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(cfg)
    }

    pub fn validate(&self) -> CoreResult<()> {
        if let Some(filter) = &self.logging.filter {
            EnvFilter::try_new(filter).map_err(|source| CoreError::InvalidFilter {
                filter: filter.clone(),
                source,
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_default() {
        let cfg = CoreConfig::from_json_str("{}").expect("empty config should parse");
        assert_eq!(cfg, CoreConfig::default());
        assert!(!cfg.dispatch.log_unmatched);
        assert!(cfg.logging.filter.is_none());
    }

    #[test]
    fn partial_sections_fill_defaults() {
        let cfg = CoreConfig::from_json_str(r#"{"dispatch":{"log_unmatched":true}}"#)
            .expect("config should parse");
        assert!(cfg.dispatch.log_unmatched);
        assert!(cfg.logging.filter.is_none());
    }

    #[test]
    fn bad_filter_is_rejected() {
        let err = CoreConfig::from_json_str(r#"{"logging":{"filter":"tagbus=notalevel"}}"#)
            .expect_err("filter should be rejected");
        match err {
            CoreError::InvalidFilter { filter, .. } => assert_eq!(filter, "tagbus=notalevel"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn malformed_json_is_serde_error() {
        let err = CoreConfig::from_json_str("{").expect_err("json should be rejected");
        assert!(matches!(err, CoreError::Serde(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let path = std::env::temp_dir().join("tagbus-core-missing-config.json");
        let _ = fs::remove_file(&path);
        let err = CoreConfig::load(&path).expect_err("missing file");
        assert!(matches!(err, CoreError::Io(_)));
    }

    #[test]
    fn load_reads_file() {
        let path =
            std::env::temp_dir().join(format!("tagbus-core-config-{}.json", std::process::id()));
        fs::write(&path, r#"{"logging":{"filter":"debug"}}"#).expect("write config");
        let cfg = CoreConfig::load(&path).expect("config should load");
        let _ = fs::remove_file(&path);
        assert_eq!(cfg.logging.filter.as_deref(), Some("debug"));
    }
}
