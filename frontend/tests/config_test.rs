use eventdesk_frontend::config::{AppConfig, DEFAULT_UPCOMING_LIMIT};
use pretty_assertions::assert_eq;
use std::collections::HashMap;
use std::path::PathBuf;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn empty_environment_gives_defaults() {
    let config = AppConfig::from_lookup(lookup(&[]));
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.upcoming_limit, DEFAULT_UPCOMING_LIMIT);
}

#[test]
fn explicit_data_file_and_flags() {
    let config = AppConfig::from_lookup(lookup(&[
        ("EVENTDESK_DATA_FILE", "/tmp/eventdesk/events.json"),
        ("EVENTDESK_PERSIST", "false"),
        ("EVENTDESK_DARK_MODE", "TRUE"),
        ("EVENTDESK_UPCOMING_LIMIT", "5"),
    ]));
    assert_eq!(config.data_file, Some(PathBuf::from("/tmp/eventdesk/events.json")));
    assert!(config.dark_mode);
    assert_eq!(config.upcoming_limit, 5);
}

#[test]
fn bad_limit_falls_back() {
    for raw in ["0", "-2", "many"] {
        let config = AppConfig::from_lookup(lookup(&[("EVENTDESK_UPCOMING_LIMIT", raw)]));
        assert_eq!(config.upcoming_limit, DEFAULT_UPCOMING_LIMIT, "{}", raw);
    }
}

#[test]
fn persist_flag_uses_default_location() {
    let config = AppConfig::from_lookup(lookup(&[("EVENTDESK_PERSIST", "1")]));
    assert_eq!(config.data_file, eventdesk_frontend::config::default_data_file());
}

#[test]
fn dev_server_rustflags_keep_caller_flags() {
    use eventdesk_frontend::config::dev_server_rustflags;

    assert_eq!(dev_server_rustflags(None), "-C target-feature=-reference-types");
    assert_eq!(dev_server_rustflags(Some("  ")), "-C target-feature=-reference-types");
    assert_eq!(
        dev_server_rustflags(Some("-C opt-level=s")),
        "-C opt-level=s -C target-feature=-reference-types"
    );
    let already = "-C target-feature=-reference-types -C debuginfo=0";
    assert_eq!(dev_server_rustflags(Some(already)), already);
}
