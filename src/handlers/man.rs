//! `man://` links - system manual pages.

use super::{strip_scheme, BrowseContext, HandlerKey, Navigate};
use crate::Result;

/// Browse handler for `man://NAME:SECTION` and `man://NAME`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ManPage;

impl ManPage {
    /// Splits a man link into the page name and optional section.
    pub fn parse(url: &str) -> Option<(&str, Option<&str>)> {
        let rest = strip_scheme(url, "man://")?;
        let rest = rest.lines().next().unwrap_or_default();
        match rest.split_once(':') {
            Some((name, section)) if !name.is_empty() => {
                Some((name, Some(section).filter(|s| !s.is_empty())))
            }
            Some(_) => None,
            None if !rest.is_empty() => Some((rest, None)),
            None => None,
        }
    }
}

impl Navigate for ManPage {
    fn browse(&self, url: &str, cx: &mut BrowseContext<'_>) -> Result<()> {
        match Self::parse(url) {
            Some((name, section)) => cx.navigator.open_man_page(name, section, cx.placement),
            None => Ok(()),
        }
    }

    fn key(&self) -> Option<HandlerKey> {
        Some("man-page".to_string())
    }
}
