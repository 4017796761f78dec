//! URL templates for protocols declared in configuration.

use super::{HandlerKey, Transform};
use crate::registry::{compile_prefix, ProtocolRegistry};
use crate::Result;
use regex::Regex;

/// Rewrites a link through a template.
///
/// `{url}` expands to the whole link and `{rest}` to the text following the
/// part matched by the protocol pattern.
#[derive(Debug, Clone)]
pub struct Template {
    prefix: Regex,
    template: String,
}

impl Template {
    pub fn new(pattern: &str, template: impl Into<String>) -> Result<Self> {
        Ok(Self {
            prefix: compile_prefix(pattern)?,
            template: template.into(),
        })
    }

    pub fn expand(&self, url: &str) -> String {
        let rest = self.prefix.find(url).map_or(url, |m| &url[m.end()..]);
        self.template.replace("{rest}", rest).replace("{url}", url)
    }
}

impl Transform for Template {
    fn resolve(&self, url: &str, _registry: &ProtocolRegistry) -> Option<String> {
        Some(self.expand(url))
    }

    fn key(&self) -> Option<HandlerKey> {
        Some(format!("template:{}:{}", self.prefix.as_str(), self.template))
    }
}
