//! Hostname validation and list normalization.

use holdfast::domain::{normalize, normalize_list, validate_hostname};
use holdfast::hosts::expand_domains;

#[test]
fn accepts_ordinary_hostnames() {
    for d in ["example.com", "sub.example.com", "a-b.example", "x1.y2.z3"] {
        validate_hostname(d).unwrap();
    }
}

#[test]
fn rejects_bad_hostnames() {
    for d in [
        "",
        "localhost",
        "a..b",
        ".example",
        "example.",
        "-bad.example",
        "bad-.example",
        "sp ace.example",
        "under_score.example",
    ] {
        assert!(validate_hostname(d).is_err(), "accepted {d:?}");
    }
}

#[test]
fn normalize_trims_and_lowercases() {
    assert_eq!(normalize("  Example.COM  "), "example.com");
}

#[test]
fn normalize_list_dedupes_keeping_first_seen_order() {
    let input = vec![
        "b.example".to_string(),
        " A.example".to_string(),
        "b.example".to_string(),
        "".to_string(),
        "c.example".to_string(),
    ];
    assert_eq!(
        normalize_list(input),
        vec!["b.example", "a.example", "c.example"]
    );
}

#[test]
fn expand_adds_www_twin_sorted_and_deduped() {
    let input = vec![
        "b.example".to_string(),
        "www.a.example".to_string(),
        " b.example ".to_string(),
        "".to_string(),
    ];
    assert_eq!(
        expand_domains(&input),
        vec!["b.example", "www.a.example", "www.b.example"]
    );
}
