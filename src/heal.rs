//! Startup self-heal.
//!
//! If blocking is meant to be on but the managed section was removed or
//! edited externally, reapply it. The pending-action timer is left alone.

use crate::hosts::{self, HostsError};
use crate::platform::HostsEditor;
use crate::state::State;

/// What the self-heal pass did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealOutcome {
    /// Blocking is off; nothing to check.
    Inactive,
    /// The managed section already covers the configured list.
    Intact,
    /// The section was missing or stale and has been rewritten.
    Reapplied,
}

/// Reapply the managed section when persisted state says blocking is on but
/// the hosts file disagrees.
pub fn ensure_consistency(
    state: &State,
    editor: &dyn HostsEditor,
) -> Result<HealOutcome, HostsError> {
    if !state.blocking_active {
        return Ok(HealOutcome::Inactive);
    }
    if hosts::block_active(editor, &state.domains)? {
        return Ok(HealOutcome::Intact);
    }
    hosts::apply_block(editor, &state.domains)?;
    Ok(HealOutcome::Reapplied)
}
