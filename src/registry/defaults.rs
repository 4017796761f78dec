//! Built-in protocol table.

use super::ProtocolRegistry;
use crate::handlers::{
    Doi, Identity, InfoNode, ManPage, Navigate, OpenResolved, OpenUrl, QueryUrl, Transform,
    UrlPrefix,
};
use crate::Result;
use std::sync::Arc;

/// Schemes that are opened and published as they are.
const PLAIN_URL_PATTERNS: &[&str] = &[
    "http:/?/?",
    "https:/?/?",
    "ftp:/?/?",
    "gopher://",
    "telnet://",
    "wais://",
    "file://?",
];

const NEWS_AND_MAIL_PATTERNS: &[&str] = &["news:", "snews:", "mailto:"];

pub(super) fn install(registry: &mut ProtocolRegistry) -> Result<()> {
    let open: Arc<dyn Navigate> = Arc::new(OpenUrl);
    let identity: Arc<dyn Transform> = Arc::new(Identity);

    let url_prefix = Arc::new(UrlPrefix);
    registry.add(
        "[uU][rR][lL]:",
        Some(url_prefix.clone() as Arc<dyn Navigate>),
        Some(url_prefix as Arc<dyn Transform>),
    )?;
    registry.add("info://", Some(Arc::new(InfoNode) as Arc<dyn Navigate>), None)?;
    registry.add("man://", Some(Arc::new(ManPage) as Arc<dyn Navigate>), None)?;
    add_lookup(registry, "google://", Arc::new(QueryUrl::google()))?;

    for pattern in PLAIN_URL_PATTERNS {
        registry.add(*pattern, Some(open.clone()), Some(identity.clone()))?;
    }

    add_lookup(registry, "dict:", Arc::new(QueryUrl::dictionary()))?;
    add_lookup(registry, "doi:", Arc::new(Doi))?;

    for pattern in NEWS_AND_MAIL_PATTERNS {
        registry.add(*pattern, Some(open.clone()), Some(identity.clone()))?;
    }
    Ok(())
}

/// Registers a protocol that is published through `transform` and browsed by
/// opening the published URL.
fn add_lookup(
    registry: &mut ProtocolRegistry,
    pattern: &str,
    transform: Arc<dyn Transform>,
) -> Result<()> {
    let browse: Arc<dyn Navigate> = Arc::new(OpenResolved::new(transform.clone()));
    registry.add(pattern, Some(browse), Some(transform))
}
