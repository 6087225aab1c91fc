use cosmwasm_std::{StdError, Timestamp};
use prizedraw_common::lifecycle::IllegalTransition;
use prizedraw_common::types::{DrawStatus, ScheduleError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("unauthorized: {reason}")]
    Unauthorized { reason: String },

    #[error("draw {draw_id} not found")]
    DrawNotFound { draw_id: u64 },

    #[error("{0}")]
    InvalidTransition(#[from] IllegalTransition),

    #[error("{0}")]
    InvalidSchedule(#[from] ScheduleError),

    #[error("invalid draw configuration: {reason}")]
    InvalidDrawConfig { reason: String },

    #[error("draw {draw_id} is not accepting entries (status: {status})")]
    DrawNotAcceptingEntries { draw_id: u64, status: DrawStatus },

    #[error("draw {draw_id} has {remaining} entries remaining, requested {requested}")]
    InsufficientCapacity {
        draw_id: u64,
        remaining: u64,
        requested: u64,
    },

    #[error("entry count must be greater than zero")]
    ZeroEntryCount,

    #[error("draw {draw_id} is not frozen for winner selection (status: {status})")]
    DrawNotFrozen { draw_id: u64, status: DrawStatus },

    #[error("draw {draw_id} already has a winner for cycle {cycle}")]
    WinnerAlreadySelected { draw_id: u64, cycle: u64 },

    #[error("entry number {entry_number} out of range [1, {total_entries}]")]
    EntryNumberOutOfRange {
        entry_number: u64,
        total_entries: u64,
    },

    #[error("entry {entry_number} of draw {draw_id} is not held by {claimed}")]
    EntryOwnerMismatch {
        draw_id: u64,
        entry_number: u64,
        claimed: String,
    },

    #[error("draw {draw_id} has no recorded winner to correct")]
    NoWinnerRecorded { draw_id: u64 },

    #[error("draw {draw_id} configuration has been locked since {locked_at}")]
    ConfigurationLocked { draw_id: u64, locked_at: Timestamp },

    #[error("evaluation interval must be between 10 and 3600 seconds, got {seconds}")]
    InvalidEvaluationInterval { seconds: u64 },
}
