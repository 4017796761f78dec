//! User protocol definitions loaded from TOML.
//!
//! ```toml
//! [[protocol]]
//! pattern = "gemini://"
//! publish = "https://portal.mozz.us/gemini/{rest}"
//!
//! [[protocol]]
//! pattern = "internal:"
//! browse = false
//! ```

use crate::handlers::{Navigate, OpenResolved, OpenUrl, Template, Transform};
use crate::registry::ProtocolRegistry;
use crate::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// A set of protocol definitions, applied in file order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProtocolConfig {
    #[serde(default, rename = "protocol")]
    pub protocols: Vec<ProtocolEntry>,
}

/// One `[[protocol]]` table.
#[derive(Debug, Clone, Deserialize)]
pub struct ProtocolEntry {
    /// Regex fragment matching the scheme prefix.
    pub pattern: String,
    /// Publish-time URL template; links are omitted from output when absent.
    #[serde(default)]
    pub publish: Option<String>,
    /// Whether following the link opens it (the published URL if any).
    #[serde(default = "default_browse")]
    pub browse: bool,
}

fn default_browse() -> bool {
    true
}

impl ProtocolConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::Config(e.to_string()))
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        toml::from_str(&text).map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }

    /// Appends every entry to `registry`, stopping at the first bad pattern.
    pub fn apply(&self, registry: &mut ProtocolRegistry) -> Result<()> {
        for entry in &self.protocols {
            let (browse, resolve) = entry.handlers()?;
            registry.add(entry.pattern.clone(), browse, resolve)?;
            debug!(pattern = %entry.pattern, "added configured protocol");
        }
        Ok(())
    }
}

impl ProtocolEntry {
    fn handlers(&self) -> Result<(Option<Arc<dyn Navigate>>, Option<Arc<dyn Transform>>)> {
        let resolve = match &self.publish {
            Some(template) => Some(Arc::new(Template::new(&self.pattern, template.clone())?)
                as Arc<dyn Transform>),
            None => None,
        };
        let browse: Option<Arc<dyn Navigate>> = match (self.browse, &resolve) {
            (false, _) => None,
            (true, Some(transform)) => {
                Some(Arc::new(OpenResolved::new(transform.clone())) as Arc<dyn Navigate>)
            }
            (true, None) => Some(Arc::new(OpenUrl) as Arc<dyn Navigate>),
        };
        Ok((browse, resolve))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_for_optional_keys() {
        let config = ProtocolConfig::from_toml_str("[[protocol]]\npattern = \"x:\"\n").unwrap();
        assert_eq!(config.protocols.len(), 1);
        assert!(config.protocols[0].browse);
        assert!(config.protocols[0].publish.is_none());
    }

    #[test]
    fn test_empty_file_is_empty_config() {
        let config = ProtocolConfig::from_toml_str("").unwrap();
        assert!(config.protocols.is_empty());
    }

    #[test]
    fn test_missing_pattern_is_config_error() {
        let err = ProtocolConfig::from_toml_str("[[protocol]]\npublish = \"{url}\"\n").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_browse_disabled_has_no_handler() {
        let entry = ProtocolEntry {
            pattern: "x:".to_string(),
            publish: None,
            browse: false,
        };
        let (browse, resolve) = entry.handlers().unwrap();
        assert!(browse.is_none());
        assert!(resolve.is_none());
    }
}
