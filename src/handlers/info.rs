//! `info://` links - jump to a node of an Info manual.

use super::{strip_scheme, BrowseContext, HandlerKey, Navigate};
use crate::Result;

const ENTRY_NODE: &str = "Top";

/// Browse handler for `info://MANUAL#NODE`, `info://MANUAL` and
/// `info://(MANUAL)NODE`.
#[derive(Debug, Default, Clone, Copy)]
pub struct InfoNode;

impl InfoNode {
    /// Splits an info link into `(manual, node)`.
    pub fn parse(url: &str) -> Option<(&str, &str)> {
        let rest = strip_scheme(url, "info://")?;
        let rest = rest.lines().next().unwrap_or_default();

        if let Some(inner) = rest.strip_prefix('(') {
            let (manual, node) = inner.split_once(')')?;
            if manual.is_empty() {
                return None;
            }
            let node = if node.is_empty() { ENTRY_NODE } else { node };
            return Some((manual, node));
        }

        match rest.split_once('#') {
            Some((manual, node)) if !manual.is_empty() && !node.is_empty() => Some((manual, node)),
            Some((manual, _)) if !manual.is_empty() => Some((manual, ENTRY_NODE)),
            Some(_) => None,
            None if !rest.is_empty() => Some((rest, ENTRY_NODE)),
            None => None,
        }
    }
}

impl Navigate for InfoNode {
    fn browse(&self, url: &str, cx: &mut BrowseContext<'_>) -> Result<()> {
        match Self::parse(url) {
            Some((manual, node)) => cx.navigator.goto_info_node(manual, node, cx.placement),
            None => Ok(()),
        }
    }

    fn key(&self) -> Option<HandlerKey> {
        Some("info-node".to_string())
    }
}
