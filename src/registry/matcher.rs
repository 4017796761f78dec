//! Combined matcher - one regex recognising a link of any registered protocol.

use crate::{Error, Result};
use regex::{Regex, RegexBuilder};

/// Characters that can never be part of a link.
const STOP: &str = r#"\]\[\s"'()<>^`{}"#;

/// Additional characters a link may contain but not end with.
const TRAILING: &str = ".,;";

/// Name of the capture group holding the protocol part of a match.
pub(crate) const SCHEME_GROUP: &str = "scheme";

/// Compiles `expr` case-insensitively, blaming `pattern` on failure.
pub(crate) fn compile(pattern: &str, expr: &str) -> Result<Regex> {
    RegexBuilder::new(expr)
        .case_insensitive(true)
        .build()
        .map_err(|source| Error::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })
}

/// Builds the alternation of `patterns` followed by the link body.
///
/// Returns `None` when there are no patterns. Errors are attributed to
/// `newest`, the pattern being added when the rebuild was triggered.
pub(crate) fn build<'a, I>(patterns: I, newest: &str) -> Result<Option<Regex>>
where
    I: IntoIterator<Item = &'a str>,
{
    let alternation = patterns.into_iter().collect::<Vec<_>>().join("|");
    if alternation.is_empty() {
        return Ok(None);
    }
    let expr = format!(
        r"\b(?P<{}>{})[^{}]*[^{}{}]+",
        SCHEME_GROUP, alternation, STOP, STOP, TRAILING
    );
    compile(newest, &expr).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scheme<'u>(matcher: &Regex, text: &'u str) -> Option<&'u str> {
        matcher
            .captures(text)
            .and_then(|c| c.name(SCHEME_GROUP))
            .map(|m| m.as_str())
    }

    #[test]
    fn test_empty_alternation_has_no_matcher() {
        assert!(build(Vec::<&str>::new(), "").unwrap().is_none());
    }

    #[test]
    fn test_link_body_stops_at_delimiters() {
        let matcher = build(["http:/?/?", "mailto:"], "mailto:").unwrap().unwrap();
        let found = matcher.find("see (http://example.com/a.html).").unwrap();
        assert_eq!(found.as_str(), "http://example.com/a.html");
        assert_eq!(scheme(&matcher, "write mailto:me@example.org, ok"), Some("mailto:"));
    }

    #[test]
    fn test_scheme_requires_word_start() {
        let matcher = build(["news:"], "news:").unwrap().unwrap();
        assert_eq!(scheme(&matcher, "snews:x"), None);
        assert_eq!(scheme(&matcher, "NEWS:comp.lang"), Some("NEWS:"));
    }

    #[test]
    fn test_scheme_without_body_does_not_match() {
        let matcher = build(["gemini://"], "gemini://").unwrap().unwrap();
        assert_eq!(scheme(&matcher, "gemini://"), None);
    }

    #[test]
    fn test_invalid_pattern_names_newest() {
        let err = build(["http:", "[oops"], "[oops").unwrap_err();
        assert!(matches!(err, Error::InvalidPattern { ref pattern, .. } if pattern == "[oops"));
    }
}
