use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_match_batch_constants() {
    let cfg = PanelConfig::default();
    assert_eq!(cfg.items_per_batch, 17);
    assert_eq!(cfg.cached_items_per_batch, 64);
}

#[test]
fn from_lookup_without_vars_uses_defaults() {
    let cfg = PanelConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg, PanelConfig::default());
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = PanelConfig::from_lookup(lookup_from(&[
        (ITEMS_PER_BATCH_VAR, "9"),
        (CACHED_ITEMS_PER_BATCH_VAR, " 128 "),
    ]))
    .unwrap();
    assert_eq!(cfg, PanelConfig { items_per_batch: 9, cached_items_per_batch: 128 });
}

#[test]
fn from_lookup_rejects_zero() {
    let err = PanelConfig::from_lookup(lookup_from(&[(ITEMS_PER_BATCH_VAR, "0")])).unwrap_err();
    assert!(matches!(err, LibraryError::Config { var: ITEMS_PER_BATCH_VAR, .. }));
}

#[test]
fn from_lookup_rejects_garbage() {
    let err = PanelConfig::from_lookup(lookup_from(&[(CACHED_ITEMS_PER_BATCH_VAR, "lots")])).unwrap_err();
    assert_eq!(err.to_string(), "invalid value for LIBRARY_CACHED_ITEMS_PER_BATCH: lots");
}

#[test]
fn from_lookup_accepts_max_batch_size() {
    let max = usize::MAX.to_string();
    let cfg = PanelConfig::from_lookup(lookup_from(&[(ITEMS_PER_BATCH_VAR, max.as_str())])).unwrap();
    assert_eq!(cfg.items_per_batch, usize::MAX);
}

// =============================================================
// Environment
// =============================================================

#[test]
fn env_value_absent_is_unset() {
    assert_eq!(env_value("SKETCHSHELF_TEST_UNSET_BATCH_VAR").unwrap(), None);
}

#[cfg(unix)]
#[test]
fn env_value_rejects_non_unicode() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    const VAR: &str = "SKETCHSHELF_TEST_NON_UNICODE_BATCH_VAR";
    unsafe { std::env::set_var(VAR, OsStr::from_bytes(b"1\xff7")) };
    let err = env_value(VAR).unwrap_err();
    unsafe { std::env::remove_var(VAR) };
    assert!(matches!(err, LibraryError::Config { var: VAR, .. }));
}
