//! Delay gate for actions that weaken blocking.
//!
//! Turning blocking off and editing the domain list are held behind a
//! 15-minute cool-down. At most one pending action exists at a time, and
//! blocking stays on for the whole pending period.

use std::fmt;

use anyhow::Result;

/// Cool-down applied to gated actions, in seconds.
pub const GATE_DELAY_SECS: f64 = 900.0;

/// Which gated action the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ActionKind {
    #[serde(rename = "turn-off")]
    TurnOff,
    #[serde(rename = "edit-list")]
    EditList,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionKind::TurnOff => write!(f, "turn-off"),
            ActionKind::EditList => write!(f, "edit-list"),
        }
    }
}

/// A requested gated action waiting out its cool-down.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PendingAction {
    pub kind: ActionKind,
    #[serde(rename = "requestedAt")]
    pub requested_at: f64,
}

/// Configured gate delay. HOLDFAST_DELAY_SECS overrides (tests only).
pub fn delay_secs() -> f64 {
    if let Ok(v) = std::env::var("HOLDFAST_DELAY_SECS") {
        if let Ok(n) = v.parse::<f64>() {
            return n;
        }
    }
    GATE_DELAY_SECS
}

/// Current time as fractional seconds since the Unix epoch.
pub fn now_epoch() -> f64 {
    chrono::Utc::now().timestamp_millis() as f64 / 1000.0
}

/// Record a pending action if none exists; return remaining seconds.
/// An existing pending action (of either kind) is kept, not replaced.
pub fn request(pending: &mut Option<PendingAction>, kind: ActionKind, now: f64) -> f64 {
    match pending {
        Some(p) => remaining(p, now),
        None => {
            *pending = Some(PendingAction {
                kind,
                requested_at: now,
            });
            delay_secs()
        }
    }
}

/// Seconds left before the pending action becomes ready (0 when ready).
pub fn remaining(pending: &PendingAction, now: f64) -> f64 {
    (pending.requested_at + delay_secs() - now).max(0.0)
}

/// True once the full delay has elapsed since the request.
pub fn is_ready(pending: &PendingAction, now: f64) -> bool {
    now - pending.requested_at >= delay_secs()
}

/// Clear the pending action. Always allowed.
pub fn cancel(pending: &mut Option<PendingAction>) {
    *pending = None;
}

/// Consume a ready pending action of the given kind.
/// Fails (leaving the pending action untouched) when there is no pending
/// action, the kind differs, or the cool-down has not elapsed.
pub fn take_ready(
    pending: &mut Option<PendingAction>,
    kind: ActionKind,
    now: f64,
) -> Result<PendingAction> {
    let p = match pending {
        Some(p) => p,
        None => anyhow::bail!("no pending {kind} request; start one first"),
    };
    if p.kind != kind {
        anyhow::bail!("the pending request is {}, not {kind}; cancel it first", p.kind);
    }
    if !is_ready(p, now) {
        let left = remaining(p, now);
        anyhow::bail!("{kind} not ready yet; {} remaining", format_remaining(left));
    }
    Ok(pending.take().unwrap())
}

/// Render remaining seconds as mm:ss for display.
pub fn format_remaining(secs: f64) -> String {
    let total = secs.ceil().max(0.0) as u64;
    format!("{}:{:02}", total / 60, total % 60)
}
