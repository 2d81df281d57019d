//! Startup self-heal: reapply the section when it drifted.

mod common;

use holdfast::heal::{self, HealOutcome};
use holdfast::hosts;
use holdfast::platform::FileHostsEditor;
use holdfast::state::State;
use std::fs;

fn active_state(domains: &[&str]) -> State {
    State {
        domains: domains.iter().map(|s| s.to_string()).collect(),
        pending_action: None,
        blocking_active: true,
    }
}

#[test]
fn inactive_state_is_left_alone() {
    common::skip_dns_flush();
    let dir = common::temp_holdfast_home();
    let hosts_path = dir.path().join("hosts");
    fs::write(&hosts_path, "127.0.0.1\tlocalhost\n").unwrap();
    let editor = FileHostsEditor::new(&hosts_path);

    let state = State::default();
    let outcome = heal::ensure_consistency(&state, &editor).unwrap();

    assert_eq!(outcome, HealOutcome::Inactive);
    assert_eq!(
        fs::read_to_string(&hosts_path).unwrap(),
        "127.0.0.1\tlocalhost\n"
    );
}

#[test]
fn intact_section_is_not_rewritten() {
    common::skip_dns_flush();
    let dir = common::temp_holdfast_home();
    let hosts_path = dir.path().join("hosts");
    fs::write(&hosts_path, "127.0.0.1\tlocalhost\n").unwrap();
    let editor = FileHostsEditor::new(&hosts_path);

    let state = active_state(&["x.example"]);
    hosts::apply_block(&editor, &state.domains).unwrap();
    let before = fs::read_to_string(&hosts_path).unwrap();

    let outcome = heal::ensure_consistency(&state, &editor).unwrap();

    assert_eq!(outcome, HealOutcome::Intact);
    assert_eq!(fs::read_to_string(&hosts_path).unwrap(), before);
}

#[test]
fn missing_section_is_reapplied() {
    common::skip_dns_flush();
    let dir = common::temp_holdfast_home();
    let hosts_path = dir.path().join("hosts");
    fs::write(&hosts_path, "127.0.0.1\tlocalhost\n").unwrap();
    let editor = FileHostsEditor::new(&hosts_path);

    let state = active_state(&["x.example"]);
    let outcome = heal::ensure_consistency(&state, &editor).unwrap();

    assert_eq!(outcome, HealOutcome::Reapplied);
    assert!(hosts::block_active(&editor, &state.domains).unwrap());
}

#[test]
fn tampered_section_is_reapplied() {
    common::skip_dns_flush();
    let dir = common::temp_holdfast_home();
    let hosts_path = dir.path().join("hosts");
    fs::write(&hosts_path, "127.0.0.1\tlocalhost\n").unwrap();
    let editor = FileHostsEditor::new(&hosts_path);

    let state = active_state(&["x.example", "y.example"]);
    hosts::apply_block(&editor, &state.domains).unwrap();

    // Someone hand-deleted one of the managed entries.
    let content = fs::read_to_string(&hosts_path).unwrap();
    let tampered: String = content
        .lines()
        .filter(|l| !l.contains("y.example"))
        .map(|l| format!("{l}\n"))
        .collect();
    fs::write(&hosts_path, tampered).unwrap();

    let outcome = heal::ensure_consistency(&state, &editor).unwrap();

    assert_eq!(outcome, HealOutcome::Reapplied);
    assert!(hosts::block_active(&editor, &state.domains).unwrap());
}
