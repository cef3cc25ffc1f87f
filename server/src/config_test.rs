use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

fn temp_seed(name: &str, body: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("dragboard-{}-{name}.json", std::process::id()));
    std::fs::write(&path, body).unwrap();
    path
}

#[test]
fn defaults_when_env_empty() {
    let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
    assert!(config.seed_path.is_none());
    assert_eq!(config.listen_addr(), "0.0.0.0:5000");
}

#[test]
fn reads_port_and_bind_addr() {
    let config = ServerConfig::from_lookup(lookup_from(&[("PORT", "8080"), ("BIND_ADDR", "127.0.0.1")])).unwrap();
    assert_eq!(config.listen_addr(), "127.0.0.1:8080");
}

#[test]
fn rejects_invalid_port() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "not-a-port")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort(ref v) if v == "not-a-port"));

    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "70000")])).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidPort(_)));
}

#[test]
fn blank_optional_values_fall_back() {
    let config =
        ServerConfig::from_lookup(lookup_from(&[("BIND_ADDR", "  "), ("POSITIONS_SEED_PATH", "")])).unwrap();
    assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
    assert!(config.seed_path.is_none());
}

#[test]
fn builtin_seed_has_three_unique_widgets() {
    let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
    let seed = config.load_seed().unwrap();
    assert_eq!(seed, default_seed());
    assert_eq!(seed.len(), 3);
}

#[test]
fn loads_seed_file() {
    let path = temp_seed("ok", r#"[{"id":"a","x":1,"y":2},{"id":7,"x":-3,"y":4}]"#);
    let config = ServerConfig { seed_path: Some(path.clone()), ..ServerConfig::from_lookup(lookup_from(&[])).unwrap() };
    let seed = config.load_seed().unwrap();
    assert_eq!(seed, vec![PositionedComponent::new("a", 1, 2), PositionedComponent::new(7, -3, 4)]);
    std::fs::remove_file(path).unwrap();
}

#[test]
fn missing_seed_file_is_read_error() {
    let config = ServerConfig {
        seed_path: Some(PathBuf::from("/nonexistent/dragboard-seed.json")),
        ..ServerConfig::from_lookup(lookup_from(&[])).unwrap()
    };
    assert!(matches!(config.load_seed().unwrap_err(), ConfigError::ReadSeed { .. }));
}

#[test]
fn malformed_seed_file_is_parse_error() {
    let path = temp_seed("bad", r#"{"id":1}"#);
    let config = ServerConfig { seed_path: Some(path.clone()), ..ServerConfig::from_lookup(lookup_from(&[])).unwrap() };
    assert!(matches!(config.load_seed().unwrap_err(), ConfigError::ParseSeed { .. }));
    std::fs::remove_file(path).unwrap();
}

#[test]
fn load_store_builds_from_builtin_seed() {
    let config = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
    let store = config.load_store().unwrap();
    assert_eq!(store.list(), default_seed().as_slice());
}

#[test]
fn load_store_reports_missing_seed_file() {
    let config = ServerConfig::from_lookup(lookup_from(&[("POSITIONS_SEED_PATH", "/nonexistent/dragboard-seed.json")]))
        .unwrap();
    let err = config.load_store().unwrap_err();
    assert!(matches!(err, ConfigError::ReadSeed { .. }));
    assert!(err.to_string().starts_with("failed to read position seed /nonexistent/dragboard-seed.json"));
}

#[test]
fn load_store_rejects_duplicate_seed_ids() {
    let path = temp_seed("dup", r#"[{"id":1,"x":0,"y":0},{"id":1,"x":5,"y":5}]"#);
    let config = ServerConfig { seed_path: Some(path.clone()), ..ServerConfig::from_lookup(lookup_from(&[])).unwrap() };
    let err = config.load_store().unwrap_err();
    assert!(matches!(err, ConfigError::DuplicateId(ComponentId::Number(1))));
    assert_eq!(err.to_string(), "duplicate component id in position seed: 1");
    std::fs::remove_file(path).unwrap();
}
