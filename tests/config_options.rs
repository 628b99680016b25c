// tests/config_options.rs
//
// AppOptions defaults and environment overrides.
//
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use veranda_vin::config::options::{AppOptions, ConfigError, parse_ttl};
use veranda_vin::source::SheetLocation;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_point_at_sheet_export_with_ten_minute_ttl() {
    let opts = AppOptions::default();
    assert_eq!(opts.source.ttl, Duration::from_secs(600));
    match &opts.source.location {
        SheetLocation::Url(url) => {
            assert!(url.starts_with("https://docs.google.com/spreadsheets/d/"));
            assert!(url.contains("format=csv"));
        }
        other => panic!("expected URL default, got {other:?}"),
    }
}

#[test]
fn env_overrides_ttl_and_url() {
    let opts = AppOptions::from_lookup(lookup(&[
        ("VERANDA_SHEET_URL", "http://localhost/wines.csv"),
        ("VERANDA_CACHE_TTL", " 30 "),
    ]))
    .unwrap();
    assert_eq!(opts.source.location, SheetLocation::Url("http://localhost/wines.csv".into()));
    assert_eq!(opts.source.ttl, Duration::from_secs(30));
}

#[test]
fn file_wins_over_url_and_blank_values_are_ignored() {
    let opts = AppOptions::from_lookup(lookup(&[
        ("VERANDA_SHEET_URL", "http://localhost/wines.csv"),
        ("VERANDA_SHEET_FILE", "data/wines.csv"),
        ("VERANDA_CACHE_TTL", ""),
    ]))
    .unwrap();
    assert_eq!(opts.source.location, SheetLocation::File(PathBuf::from("data/wines.csv")));
    assert_eq!(opts.source.ttl, Duration::from_secs(600));
}

#[test]
fn bad_ttl_is_rejected() {
    let err = AppOptions::from_lookup(lookup(&[("VERANDA_CACHE_TTL", "ten minutes")])).unwrap_err();
    assert_eq!(
        err,
        ConfigError::InvalidTtl { var: "VERANDA_CACHE_TTL", value: "ten minutes".into() }
    );
}

#[test]
fn zero_ttl_is_rejected() {
    let err = AppOptions::from_lookup(lookup(&[("VERANDA_CACHE_TTL", "0")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidTtl { var: "VERANDA_CACHE_TTL", value: "0".into() });
    assert_eq!(parse_ttl(" 1 "), Some(Duration::from_secs(1)));
    assert_eq!(parse_ttl("0"), None);
}
