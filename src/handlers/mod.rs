//! Link handlers - the browse and resolve capabilities attached to protocols.

mod info;
mod man;
mod template;
mod web;

use crate::navigator::{Navigator, Placement};
use crate::registry::ProtocolRegistry;
use crate::Result;

pub use self::info::InfoNode;
pub use self::man::ManPage;
pub use self::template::Template;
pub use self::web::{Doi, Identity, OpenResolved, OpenUrl, QueryUrl, UrlPrefix};

/// State handed to a browse handler while a link is being followed.
pub struct BrowseContext<'a> {
    /// Registry the link was dispatched from, for handlers that re-dispatch.
    pub registry: &'a ProtocolRegistry,
    /// Host strategy performing the actual navigation.
    pub navigator: &'a mut dyn Navigator,
    /// Placement hint given by the caller of `browse`.
    pub placement: Placement,
}

/// Navigation capability: follows a link interactively.
pub trait Navigate: Send + Sync {
    /// Performs the navigation for the full link text `url`.
    fn browse(&self, url: &str, cx: &mut BrowseContext<'_>) -> Result<()>;

    /// Value identity used to recognise a repeated registration.
    ///
    /// Handlers returning `None` are only equal to the same `Arc`.
    fn key(&self) -> Option<HandlerKey> {
        None
    }
}

/// Publish-time capability: rewrites a link, or returns `None` to omit it.
pub trait Transform: Send + Sync {
    /// Returns the published form of `url`, or `None` to drop the link.
    ///
    /// `registry` is the registry the link came from, for handlers that
    /// dispatch an inner link again.
    fn resolve(&self, url: &str, registry: &ProtocolRegistry) -> Option<String>;

    /// Value identity used to recognise a repeated registration.
    fn key(&self) -> Option<HandlerKey> {
        None
    }
}

/// Comparable identity of a handler: its kind plus whatever configures it.
pub type HandlerKey = String;

/// Strips `scheme` from the front of `url`, ignoring ASCII case.
fn strip_scheme<'u>(url: &'u str, scheme: &str) -> Option<&'u str> {
    let head = url.get(..scheme.len())?;
    if head.eq_ignore_ascii_case(scheme) {
        Some(&url[scheme.len()..])
    } else {
        None
    }
}

/// Drops at most two leading slashes, as in `scheme:/?/?`.
fn trim_slashes(rest: &str) -> &str {
    let rest = rest.strip_prefix('/').unwrap_or(rest);
    rest.strip_prefix('/').unwrap_or(rest)
}
