//! Protocol registry - maps link schemes to browse and resolve handlers.

mod defaults;
mod matcher;

use crate::handlers::{BrowseContext, HandlerKey, Navigate, Transform};
use crate::navigator::{Navigator, Placement};
use crate::{Error, Result};
use regex::Regex;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Compiles `pattern` anchored at the start of the input, ignoring case.
pub(crate) fn compile_prefix(pattern: &str) -> Result<Regex> {
    matcher::compile(pattern, &format!("^(?:{})", pattern))
}

/// One registered protocol: a scheme pattern and its two handlers.
pub struct ProtocolDescriptor {
    pattern: String,
    prefix: Regex,
    browse: Option<Arc<dyn Navigate>>,
    resolve: Option<Arc<dyn Transform>>,
}

impl ProtocolDescriptor {
    /// The regex fragment matching this protocol's scheme prefix.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Handler run when the link is followed, if any.
    pub fn browse_handler(&self) -> Option<&Arc<dyn Navigate>> {
        self.browse.as_ref()
    }

    /// Handler producing the published link; `None` drops the link.
    pub fn resolve_handler(&self) -> Option<&Arc<dyn Transform>> {
        self.resolve.as_ref()
    }

    /// Whether `candidate` starts with this protocol's scheme.
    pub fn matches(&self, candidate: &str) -> bool {
        self.prefix.is_match(candidate)
    }

    fn is_same(
        &self,
        pattern: &str,
        browse: &Option<Arc<dyn Navigate>>,
        resolve: &Option<Arc<dyn Transform>>,
    ) -> bool {
        self.pattern == pattern
            && same_handler(&self.browse, browse)
            && same_handler(&self.resolve, resolve)
    }
}

impl fmt::Debug for ProtocolDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProtocolDescriptor")
            .field("pattern", &self.pattern)
            .field("browse", &self.browse.is_some())
            .field("resolve", &self.resolve.is_some())
            .finish()
    }
}

trait Keyed {
    fn handler_key(&self) -> Option<HandlerKey>;
}

impl Keyed for dyn Navigate {
    fn handler_key(&self) -> Option<HandlerKey> {
        self.key()
    }
}

impl Keyed for dyn Transform {
    fn handler_key(&self) -> Option<HandlerKey> {
        self.key()
    }
}

/// Handlers are the same when they share an allocation or report equal keys.
fn same_handler<T: Keyed + ?Sized>(a: &Option<Arc<T>>, b: &Option<Arc<T>>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => {
            Arc::ptr_eq(a, b)
                || matches!((a.handler_key(), b.handler_key()), (Some(x), Some(y)) if x == y)
        }
        (None, None) => true,
        _ => false,
    }
}

/// Ordered table of protocols plus the matcher derived from it.
///
/// Lookups scan the table in insertion order and the first matching
/// protocol wins, so an earlier registration shadows any later one whose
/// pattern overlaps it.
#[derive(Debug, Default)]
pub struct ProtocolRegistry {
    descriptors: Vec<ProtocolDescriptor>,
    matcher: Option<Regex>,
}

impl ProtocolRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the built-in protocols.
    pub fn with_defaults() -> Result<Self> {
        let mut registry = Self::new();
        defaults::install(&mut registry)?;
        Ok(registry)
    }

    /// Registers a protocol after every existing one.
    ///
    /// Registering a descriptor identical to an existing one (same pattern
    /// text, handlers that are the same instances or report equal keys) is a
    /// no-op. On error the registry is left untouched.
    pub fn add(
        &mut self,
        pattern: impl Into<String>,
        browse: Option<Arc<dyn Navigate>>,
        resolve: Option<Arc<dyn Transform>>,
    ) -> Result<()> {
        let pattern = pattern.into();
        if pattern.is_empty() {
            return Err(Error::EmptyPattern);
        }
        if self
            .descriptors
            .iter()
            .any(|d| d.is_same(&pattern, &browse, &resolve))
        {
            debug!(pattern = %pattern, "protocol already registered");
            return Ok(());
        }

        let prefix = compile_prefix(&pattern)?;
        let matcher = matcher::build(
            self.descriptors
                .iter()
                .map(|d| d.pattern.as_str())
                .chain(std::iter::once(pattern.as_str())),
            &pattern,
        )?;

        debug!(pattern = %pattern, position = self.descriptors.len(), "registered protocol");
        self.descriptors.push(ProtocolDescriptor {
            pattern,
            prefix,
            browse,
            resolve,
        });
        self.matcher = matcher;
        Ok(())
    }

    /// Returns the first protocol whose pattern matches the start of
    /// `candidate`.
    pub fn find_descriptor(&self, candidate: &str) -> Option<&ProtocolDescriptor> {
        self.descriptors.iter().find(|d| d.matches(candidate))
    }

    /// Extracts the scheme part of the first link found in `text`.
    pub fn extract_scheme<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.matcher
            .as_ref()?
            .captures(text)?
            .name(matcher::SCHEME_GROUP)
            .map(|m| m.as_str())
    }

    fn descriptor_for(&self, url: &str) -> Option<&ProtocolDescriptor> {
        let scheme = self.extract_scheme(url)?;
        let descriptor = self.find_descriptor(scheme);
        debug!(url, scheme, found = descriptor.is_some(), "dispatching link");
        descriptor
    }

    /// Follows `url` with its protocol's browse handler.
    ///
    /// Text without a recognised scheme, and protocols without a browse
    /// handler, are ignored. Only navigator failures are reported.
    pub fn browse(
        &self,
        url: &str,
        placement: Placement,
        navigator: &mut dyn Navigator,
    ) -> Result<()> {
        let Some(handler) = self
            .descriptor_for(url)
            .and_then(ProtocolDescriptor::browse_handler)
        else {
            return Ok(());
        };
        let mut cx = BrowseContext {
            registry: self,
            navigator,
            placement,
        };
        handler.browse(url, &mut cx)
    }

    /// Computes the publish-time form of `url`.
    ///
    /// Unknown links pass through unchanged. `None` means the link should not
    /// be published as a link, which is the case for every protocol without
    /// a resolve handler.
    pub fn resolve(&self, url: &str) -> Option<String> {
        match self.descriptor_for(url) {
            Some(descriptor) => descriptor
                .resolve
                .as_ref()
                .and_then(|handler| handler.resolve(url, self)),
            None => Some(url.to_string()),
        }
    }

    /// Registered protocols in match order.
    pub fn descriptors(&self) -> &[ProtocolDescriptor] {
        &self.descriptors
    }

    /// The combined matcher, absent while the registry is empty.
    pub fn matcher(&self) -> Option<&Regex> {
        self.matcher.as_ref()
    }

    /// Number of registered protocols.
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Whether no protocol is registered.
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}
