use std::fmt;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Timestamp};
use thiserror::Error;

/// The kind of draw: major (single one-shot lifecycle) or mini (repeating cycles).
#[cw_serde]
pub enum DrawKind {
    Major,
    Mini(MiniCycle),
}

impl DrawKind {
    pub fn is_mini(&self) -> bool {
        matches!(self, DrawKind::Mini(_))
    }

    pub fn label(&self) -> &'static str {
        match self {
            DrawKind::Major => "major",
            DrawKind::Mini(_) => "mini",
        }
    }
}

/// Cycle configuration carried only by mini draws.
#[cw_serde]
pub struct MiniCycle {
    /// Length of each cycle's entry window, in seconds.
    pub cycle_interval_seconds: u64,
    /// Delay between a winner being recorded and the next cycle opening.
    /// Zero reopens the draw immediately.
    pub reopen_delay_seconds: u64,
}

/// The lifecycle status of a draw.
///
/// Statuses past the freeze point carry the moment the configuration lock
/// was applied, so "locked while still queued" cannot be represented and the
/// lock needs no separate flag.
#[cw_serde]
pub enum DrawStatus {
    Queued,
    Active,
    Frozen { locked_at: Timestamp },
    Completed { locked_at: Timestamp },
    Cancelled { locked_at: Timestamp },
}

impl DrawStatus {
    /// True once prize, schedule, and capacity edits are refused.
    pub fn configuration_locked(&self) -> bool {
        !matches!(self, DrawStatus::Queued | DrawStatus::Active)
    }

    /// The moment the configuration lock was applied, if any.
    pub fn locked_at(&self) -> Option<Timestamp> {
        match self {
            DrawStatus::Queued | DrawStatus::Active => None,
            DrawStatus::Frozen { locked_at }
            | DrawStatus::Completed { locked_at }
            | DrawStatus::Cancelled { locked_at } => Some(*locked_at),
        }
    }

    /// True for statuses no transition may leave.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            DrawStatus::Completed { .. } | DrawStatus::Cancelled { .. }
        )
    }

    pub fn label(&self) -> &'static str {
        match self {
            DrawStatus::Queued => "queued",
            DrawStatus::Active => "active",
            DrawStatus::Frozen { .. } => "frozen",
            DrawStatus::Completed { .. } => "completed",
            DrawStatus::Cancelled { .. } => "cancelled",
        }
    }
}

impl fmt::Display for DrawStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The three scheduling instants of a draw instance or cycle.
#[cw_serde]
pub struct DrawSchedule {
    /// When a queued draw opens for entries.
    pub activation_at: Timestamp,
    /// When entries stop being accepted and configuration locks.
    pub freeze_entries_at: Timestamp,
    /// Advertised winner-selection time. Informational only: selection is an
    /// explicit authorized action, never automatic.
    pub draw_at: Timestamp,
}

impl DrawSchedule {
    /// Enforce activation_at <= freeze_entries_at <= draw_at.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        if self.freeze_entries_at > self.draw_at {
            return Err(ScheduleError::FreezeAfterDraw {
                freeze_entries_at: self.freeze_entries_at,
                draw_at: self.draw_at,
            });
        }
        if self.activation_at > self.freeze_entries_at {
            return Err(ScheduleError::ActivationAfterFreeze {
                activation_at: self.activation_at,
                freeze_entries_at: self.freeze_entries_at,
            });
        }
        Ok(())
    }
}

/// Validation failure for a draw schedule. Timestamps render as nanoseconds.
#[derive(Error, Debug, PartialEq)]
pub enum ScheduleError {
    #[error("freeze_entries_at {freeze_entries_at} is after draw_at {draw_at}")]
    FreezeAfterDraw {
        freeze_entries_at: Timestamp,
        draw_at: Timestamp,
    },
    #[error("activation_at {activation_at} is after freeze_entries_at {freeze_entries_at}")]
    ActivationAfterFreeze {
        activation_at: Timestamp,
        freeze_entries_at: Timestamp,
    },
}

/// How a winner was chosen. An audited tag only: the engine attaches no
/// behavior to either value.
#[cw_serde]
pub enum SelectionMethod {
    Manual,
    GovernmentApp,
}

impl SelectionMethod {
    pub fn label(&self) -> &'static str {
        match self {
            SelectionMethod::Manual => "manual",
            SelectionMethod::GovernmentApp => "government_app",
        }
    }
}

/// A recorded winning entry for one draw instance or cycle.
#[cw_serde]
pub struct Winner {
    pub user: Addr,
    pub entry_number: u64,
    pub selection_method: SelectionMethod,
    /// The authenticated operator or admin who recorded the selection.
    pub selected_by: Addr,
    pub selected_at: Timestamp,
}
