use std::fmt;

use cosmwasm_std::Timestamp;
use thiserror::Error;

use crate::types::{DrawSchedule, DrawStatus};

/// A single step a draw may take through its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// queued -> active.
    Activate,
    /// active -> frozen.
    Freeze(FreezeReason),
    /// frozen -> completed. Major draws only.
    Complete,
    /// frozen -> active or queued. Mini draws only: the next cycle opens,
    /// immediately or after a configured delay.
    Reopen { immediate: bool },
    /// queued, active, or frozen -> cancelled.
    Cancel,
}

/// Why an active draw froze.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FreezeReason {
    /// freeze_entries_at has passed.
    DeadlineReached,
    /// A capped draw ran out of remaining entries.
    CapExhausted,
}

impl Transition {
    pub fn label(&self) -> &'static str {
        match self {
            Transition::Activate => "activate",
            Transition::Freeze(FreezeReason::DeadlineReached) => "freeze_deadline",
            Transition::Freeze(FreezeReason::CapExhausted) => "freeze_cap_exhausted",
            Transition::Complete => "complete",
            Transition::Reopen { .. } => "reopen",
            Transition::Cancel => "cancel",
        }
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A transition requested from a status that does not permit it.
#[derive(Error, Debug, PartialEq)]
#[error("transition {requested} not allowed from status {from}")]
pub struct IllegalTransition {
    pub from: DrawStatus,
    pub requested: Transition,
}

/// Evaluate which time- or capacity-triggered transition, if any, is due for
/// a draw at `now`.
///
/// Stateless: callers re-derive this on every sweep, so a missed sweep is
/// recovered by the next one. Every check is "has the threshold passed",
/// never "did we cross it this tick". Winner-driven transitions (`Complete`,
/// `Reopen`) and `Cancel` are explicit actions and are never returned here.
pub fn due_transition(
    status: &DrawStatus,
    schedule: &DrawSchedule,
    is_mini: bool,
    entries_remaining: Option<u64>,
    now: Timestamp,
) -> Option<Transition> {
    match status {
        DrawStatus::Queued if now >= schedule.activation_at => Some(Transition::Activate),
        DrawStatus::Active if now >= schedule.freeze_entries_at => {
            Some(Transition::Freeze(FreezeReason::DeadlineReached))
        }
        // Capacity exhaustion only freezes repeating draws; a sold-out major
        // draw stays active (and simply rejects further entries) until its
        // freeze deadline.
        DrawStatus::Active if is_mini && entries_remaining == Some(0) => {
            Some(Transition::Freeze(FreezeReason::CapExhausted))
        }
        _ => None,
    }
}

/// Apply `transition` to `status`, producing the next status.
///
/// This is the complete legal-transition table; any pair it does not list is
/// rejected. The lock moment embedded in the result is `now` when the lock
/// is first applied and is preserved when the draw merely changes locked
/// states.
pub fn apply_transition(
    status: &DrawStatus,
    transition: Transition,
    now: Timestamp,
) -> Result<DrawStatus, IllegalTransition> {
    match (status, transition) {
        (DrawStatus::Queued, Transition::Activate) => Ok(DrawStatus::Active),
        (DrawStatus::Active, Transition::Freeze(_)) => {
            Ok(DrawStatus::Frozen { locked_at: now })
        }
        (DrawStatus::Frozen { locked_at }, Transition::Complete) => Ok(DrawStatus::Completed {
            locked_at: *locked_at,
        }),
        (DrawStatus::Frozen { .. }, Transition::Reopen { immediate: true }) => {
            Ok(DrawStatus::Active)
        }
        (DrawStatus::Frozen { .. }, Transition::Reopen { immediate: false }) => {
            Ok(DrawStatus::Queued)
        }
        (DrawStatus::Queued | DrawStatus::Active, Transition::Cancel) => {
            Ok(DrawStatus::Cancelled { locked_at: now })
        }
        (DrawStatus::Frozen { locked_at }, Transition::Cancel) => Ok(DrawStatus::Cancelled {
            locked_at: *locked_at,
        }),
        (from, requested) => Err(IllegalTransition {
            from: from.clone(),
            requested,
        }),
    }
}
