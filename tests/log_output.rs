//! Log Output Tests
//!
//! `log` used inline, with options loaded from TOML.

use putkonen::{log_to, merge, Container, LogOptions, LogTarget};
use serde_json::{json, Value};

#[test]
fn test_log_inline_in_pipeline() {
    let options = LogOptions::from_toml_str("indent = 1\ntarget = \"stderr\"").unwrap();
    assert_eq!(options.target, LogTarget::Stderr);

    let mut sink = Vec::new();
    let doubled: Vec<i32> = log_to(&mut sink, vec![1, 2], &options)
        .unwrap()
        .into_iter()
        .map(|n| n * 2)
        .collect();

    assert_eq!(doubled, vec![2, 4]);
    assert_eq!(String::from_utf8(sink).unwrap(), "[\n 1,\n 2\n]\n");
}

#[test]
fn test_log_merged_container() {
    let a = json!({"foo": "bar"});
    let b = json!({"bish": {"bosh": "bush"}});
    let merged: Container = merge(&[a.as_object().unwrap(), b.as_object().unwrap()]);

    let mut sink = Vec::new();
    let returned = log_to(&mut sink, merged.clone(), &LogOptions::default()).unwrap();
    assert_eq!(returned, merged);

    let printed: Value = serde_json::from_slice(&sink).unwrap();
    assert_eq!(printed, json!({"foo": "bar", "bish": {"bosh": "bush"}}));
}
