use super::*;
use std::collections::HashMap;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn from_lookup_applies_defaults() {
    let cfg = HostConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg.host, DEFAULT_HOST);
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.static_dir, PathBuf::from(DEFAULT_STATIC_DIR));
    assert!(cfg.allowed_hosts.is_empty());
    assert_eq!(cfg.bind_addr(), "0.0.0.0:4173");
}

#[test]
fn from_lookup_reads_overrides() {
    let cfg = HostConfig::from_lookup(lookup_from(&[
        ("HOST", "127.0.0.1"),
        ("PORT", "8080"),
        ("STATIC_DIR", "/srv/pointse"),
        ("ALLOWED_HOSTS", "pointse-loginapi.onrender.com, .Example.com ,,"),
    ]))
    .unwrap();
    assert_eq!(cfg.bind_addr(), "127.0.0.1:8080");
    assert_eq!(cfg.static_dir, PathBuf::from("/srv/pointse"));
    assert_eq!(cfg.allowed_hosts, vec!["pointse-loginapi.onrender.com".to_owned(), ".example.com".to_owned()]);
}

#[test]
fn from_lookup_rejects_invalid_port() {
    let err = HostConfig::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
    assert_eq!(err.to_string(), "invalid PORT: eighty");

    assert!(HostConfig::from_lookup(lookup_from(&[("PORT", "70000")])).is_err());
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = HostConfig::from_lookup(lookup_from(&[("HOST", " "), ("STATIC_DIR", "")])).unwrap();
    assert_eq!(cfg.host, DEFAULT_HOST);
    assert_eq!(cfg.static_dir, PathBuf::from(DEFAULT_STATIC_DIR));
}
