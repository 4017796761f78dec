use pretty_assertions::assert_eq;
use protolink::{
    Error, Navigation, Placement, ProtocolConfig, ProtocolRegistry, RecordingNavigator,
};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

const PROTOCOLS: &str = r#"
[[protocol]]
pattern = "gemini://"
publish = "https://portal.mozz.us/gemini/{rest}"

[[protocol]]
pattern = "wiki:"
publish = "https://en.wikipedia.org/wiki/{rest}"
browse = false

[[protocol]]
pattern = "irc://"
"#;

fn temp_toml_path(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time must be after UNIX_EPOCH")
        .as_nanos();
    std::env::temp_dir().join(format!(
        "protolink_{}_{}_{}.toml",
        prefix,
        std::process::id(),
        nanos
    ))
}

fn configured() -> ProtocolRegistry {
    let mut registry = ProtocolRegistry::with_defaults().unwrap();
    ProtocolConfig::from_toml_str(PROTOCOLS)
        .unwrap()
        .apply(&mut registry)
        .unwrap();
    registry
}

#[test]
fn configured_protocols_are_appended_in_file_order() {
    let defaults = ProtocolRegistry::with_defaults().unwrap().len();
    let registry = configured();
    let tail = registry.descriptors()[defaults..]
        .iter()
        .map(|d| d.pattern())
        .collect::<Vec<_>>();
    assert_eq!(tail, vec!["gemini://", "wiki:", "irc://"]);
}

#[test]
fn publish_template_rewrites_links() {
    let registry = configured();
    assert_eq!(
        registry.resolve("wiki:Rust_(programming_language)"),
        Some("https://en.wikipedia.org/wiki/Rust_(programming_language)".to_string())
    );
}

#[test]
fn protocol_without_template_is_omitted() {
    let registry = configured();
    assert_eq!(registry.resolve("irc://irc.libera.chat/rust"), None);
}

#[test]
fn browse_opens_published_url_or_raw_link() {
    let registry = configured();
    let mut nav = RecordingNavigator::new();
    registry
        .browse("gemini://example.org", Placement::SameWindow, &mut nav)
        .unwrap();
    registry
        .browse("irc://irc.libera.chat", Placement::SameWindow, &mut nav)
        .unwrap();
    registry
        .browse("wiki:Regex", Placement::SameWindow, &mut nav)
        .unwrap();
    assert_eq!(
        nav.visits,
        vec![
            Navigation::Url {
                url: "https://portal.mozz.us/gemini/example.org".to_string(),
                placement: Placement::SameWindow,
            },
            Navigation::Url {
                url: "irc://irc.libera.chat".to_string(),
                placement: Placement::SameWindow,
            },
        ]
    );
}

#[test]
fn load_reads_file() {
    let path = temp_toml_path("load");
    std::fs::write(&path, PROTOCOLS).expect("failed to write protocol file");
    let loaded = ProtocolConfig::load(&path);
    let _ = std::fs::remove_file(&path);

    let config = loaded.expect("protocol file should parse");
    assert_eq!(config.protocols.len(), 3);
    assert_eq!(
        config.protocols[0].publish.as_deref(),
        Some("https://portal.mozz.us/gemini/{rest}")
    );
}

#[test]
fn load_missing_file_is_io_error() {
    let path = temp_toml_path("missing");
    assert!(matches!(ProtocolConfig::load(&path), Err(Error::Io(_))));
}

#[test]
fn invalid_pattern_stops_apply() {
    let config = ProtocolConfig::from_toml_str(
        "[[protocol]]\npattern = \"ok:\"\n\n[[protocol]]\npattern = \"bad(\"\n",
    )
    .unwrap();
    let mut registry = ProtocolRegistry::new();
    let err = config.apply(&mut registry).unwrap_err();
    assert!(matches!(err, Error::InvalidPattern { .. }));
    assert_eq!(registry.len(), 1);
}

#[test]
fn applying_same_config_twice_adds_nothing() {
    let mut registry = configured();
    let before = registry.len();
    ProtocolConfig::from_toml_str(PROTOCOLS)
        .unwrap()
        .apply(&mut registry)
        .unwrap();
    assert_eq!(registry.len(), before);
    assert_eq!(
        registry.resolve("gemini://example.org"),
        Some("https://portal.mozz.us/gemini/example.org".to_string())
    );
}
