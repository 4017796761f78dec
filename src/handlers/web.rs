//! Handlers for links that end up as ordinary web URLs.

use super::{strip_scheme, trim_slashes, BrowseContext, HandlerKey, Navigate, Transform};
use crate::registry::ProtocolRegistry;
use crate::Result;
use std::sync::Arc;

/// Opens the link unchanged with the host's default URL handler.
#[derive(Debug, Default, Clone, Copy)]
pub struct OpenUrl;

impl Navigate for OpenUrl {
    fn browse(&self, url: &str, cx: &mut BrowseContext<'_>) -> Result<()> {
        cx.navigator.open_url(url, cx.placement)
    }

    fn key(&self) -> Option<HandlerKey> {
        Some("open-url".to_string())
    }
}

/// Publishes the link unchanged.
#[derive(Debug, Default, Clone, Copy)]
pub struct Identity;

impl Transform for Identity {
    fn resolve(&self, url: &str, _registry: &ProtocolRegistry) -> Option<String> {
        Some(url.to_string())
    }

    fn key(&self) -> Option<HandlerKey> {
        Some("identity".to_string())
    }
}

/// Resolves the link first, then opens the resulting URL.
pub struct OpenResolved(Arc<dyn Transform>);

impl OpenResolved {
    pub fn new(transform: Arc<dyn Transform>) -> Self {
        Self(transform)
    }
}

impl Navigate for OpenResolved {
    fn browse(&self, url: &str, cx: &mut BrowseContext<'_>) -> Result<()> {
        match self.0.resolve(url, cx.registry) {
            Some(target) => cx.navigator.open_url(&target, cx.placement),
            None => Ok(()),
        }
    }

    fn key(&self) -> Option<HandlerKey> {
        self.0.key().map(|inner| format!("open-resolved:{}", inner))
    }
}

/// Builds a query URL from `scheme:/?/?TERMS`, e.g. a web search.
#[derive(Debug, Clone)]
pub struct QueryUrl {
    scheme: &'static str,
    base: &'static str,
}

impl QueryUrl {
    pub const fn new(scheme: &'static str, base: &'static str) -> Self {
        Self { scheme, base }
    }

    /// `google://QUERY` -> Google web search.
    pub const fn google() -> Self {
        Self::new("google:", "http://www.google.com/search?q=")
    }

    /// `dict:WORD` -> dictionary lookup.
    pub const fn dictionary() -> Self {
        Self::new("dict:", "http://dictionary.reference.com/search?q=")
    }
}

impl Transform for QueryUrl {
    fn resolve(&self, url: &str, _registry: &ProtocolRegistry) -> Option<String> {
        let terms = trim_slashes(strip_scheme(url, self.scheme)?);
        if terms.is_empty() {
            return None;
        }
        Some(format!("{}{}", self.base, urlencoding::encode(terms)))
    }

    fn key(&self) -> Option<HandlerKey> {
        Some(format!("query:{}:{}", self.scheme, self.base))
    }
}

/// `doi:ID` -> the DOI resolver URL.
#[derive(Debug, Default, Clone, Copy)]
pub struct Doi;

impl Transform for Doi {
    fn resolve(&self, url: &str, _registry: &ProtocolRegistry) -> Option<String> {
        let id = strip_scheme(url, "doi:")?;
        if id.is_empty() {
            return None;
        }
        Some(format!("http://dx.doi.org/{}", id))
    }

    fn key(&self) -> Option<HandlerKey> {
        Some("doi".to_string())
    }
}

/// `URL:<link>` wrapper: strips the marker and dispatches the inner link.
#[derive(Debug, Default, Clone, Copy)]
pub struct UrlPrefix;

impl UrlPrefix {
    /// The wrapped link, with every leading `URL:` marker removed.
    fn inner(url: &str) -> Option<&str> {
        let mut inner = strip_scheme(url, "url:")?.trim_start();
        while let Some(rest) = strip_scheme(inner, "url:") {
            inner = rest.trim_start();
        }
        (!inner.is_empty()).then_some(inner)
    }
}

impl Navigate for UrlPrefix {
    fn browse(&self, url: &str, cx: &mut BrowseContext<'_>) -> Result<()> {
        match Self::inner(url) {
            Some(inner) => cx.registry.browse(inner, cx.placement, &mut *cx.navigator),
            None => Ok(()),
        }
    }

    fn key(&self) -> Option<HandlerKey> {
        Some("url-prefix".to_string())
    }
}

impl Transform for UrlPrefix {
    fn resolve(&self, url: &str, registry: &ProtocolRegistry) -> Option<String> {
        registry.resolve(Self::inner(url)?)
    }

    fn key(&self) -> Option<HandlerKey> {
        Some("url-prefix".to_string())
    }
}
