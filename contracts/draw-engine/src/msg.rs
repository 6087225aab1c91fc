use cosmwasm_schema::{cw_serde, QueryResponses};
use prizedraw_common::types::{DrawKind, DrawSchedule, MiniCycle, SelectionMethod, Winner};

use crate::state::{Draw, EngineConfig, EngineStateInfo, Prize, WinnerRecord};

#[cw_serde]
pub struct InstantiateMsg {
    /// Addresses allowed to record winner selections.
    pub operators: Vec<String>,
    /// The purchase subsystem allowed to record sold entries.
    pub entry_minter: String,
    /// Contract answering entry-ownership queries.
    pub entry_ledger: String,
    /// Sweep interval advertised to external schedulers. Defaults to 60.
    pub evaluation_interval_seconds: Option<u64>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Register a new draw in queued status. Admin only.
    CreateDraw {
        kind: DrawKind,
        name: String,
        description: Option<String>,
        prize: Prize,
        schedule: DrawSchedule,
        entry_cap: Option<u64>,
    },
    /// Edit a draw. Name and description stay editable until the draw is
    /// terminal; prize, schedule, capacity and cycle settings only until the
    /// configuration locks. Admin only.
    UpdateDraw {
        draw_id: u64,
        name: Option<String>,
        description: Option<String>,
        prize: Option<Prize>,
        schedule: Option<DrawSchedule>,
        entry_cap: Option<u64>,
        cycle_settings: Option<MiniCycle>,
    },
    /// Apply whatever time- or capacity-triggered transitions are due for a
    /// draw. Anyone can call; a draw with nothing due is a no-op.
    EvaluateTransitions { draw_id: u64 },
    /// Record sold entries against an active draw. Entry minter only.
    RecordEntries { draw_id: u64, count: u64 },
    /// Record the winner for a frozen draw. Operator only.
    SelectWinner {
        draw_id: u64,
        /// Bech32 address of the entry holder being declared the winner.
        winner: String,
        entry_number: u64,
        selection_method: SelectionMethod,
    },
    /// Correct a previously recorded winner. Appends to the audit log,
    /// never rewrites it. Admin only.
    EditWinner {
        draw_id: u64,
        winner: String,
        entry_number: u64,
        selection_method: SelectionMethod,
    },
    /// Cancel a draw that has not completed. Admin only.
    CancelDraw { draw_id: u64 },
    /// Update configuration. Admin only.
    UpdateConfig {
        admin: Option<String>,
        entry_minter: Option<String>,
        entry_ledger: Option<String>,
        evaluation_interval_seconds: Option<u64>,
    },
    /// Manage the operator set. Admin only.
    UpdateOperators { add: Vec<String>, remove: Vec<String> },
}

#[cw_serde]
pub struct CreateDrawParams {
    pub kind: DrawKind,
    pub name: String,
    pub description: Option<String>,
    pub prize: Prize,
    pub schedule: DrawSchedule,
    pub entry_cap: Option<u64>,
}

#[cw_serde]
pub struct UpdateDrawParams {
    pub draw_id: u64,
    pub name: Option<String>,
    pub description: Option<String>,
    pub prize: Option<Prize>,
    pub schedule: Option<DrawSchedule>,
    pub entry_cap: Option<u64>,
    pub cycle_settings: Option<MiniCycle>,
}

/// Shared payload for SelectWinner and EditWinner.
#[cw_serde]
pub struct SelectWinnerParams {
    pub draw_id: u64,
    pub winner: String,
    pub entry_number: u64,
    pub selection_method: SelectionMethod,
}

#[cw_serde]
pub struct UpdateConfigParams {
    pub admin: Option<String>,
    pub entry_minter: Option<String>,
    pub entry_ledger: Option<String>,
    pub evaluation_interval_seconds: Option<u64>,
}

/// Query message for the entry ledger contract.
#[cw_serde]
pub enum LedgerQueryMsg {
    EntryHolder {
        draw_id: u64,
        cycle: u64,
        entry_number: u64,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(EngineConfig)]
    Config {},
    #[returns(EngineStateInfo)]
    EngineState {},
    #[returns(Draw)]
    Draw { draw_id: u64 },
    #[returns(DrawsResponse)]
    Draws {
        start_after: Option<u64>,
        limit: Option<u32>,
    },
    #[returns(EntrySummaryResponse)]
    EntrySummary { draw_id: u64 },
    #[returns(Option<Winner>)]
    Winner { draw_id: u64 },
    #[returns(WinnerHistoryResponse)]
    WinnerHistory {
        draw_id: u64,
        start_after: Option<u64>,
        limit: Option<u32>,
    },
    #[returns(UserWinsResponse)]
    UserWins {
        address: String,
        start_after: Option<(u64, u64)>,
        limit: Option<u32>,
    },
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct DrawsResponse {
    pub draws: Vec<Draw>,
}

#[cw_serde]
pub struct EntrySummaryResponse {
    pub draw_id: u64,
    pub cycle: u64,
    pub status: String,
    pub accepting_entries: bool,
    pub total_entries: u64,
    pub entry_cap: Option<u64>,
    pub entries_remaining: Option<u64>,
}

#[cw_serde]
pub struct WinnerRecordEntry {
    pub seq: u64,
    pub record: WinnerRecord,
}

#[cw_serde]
pub struct WinnerHistoryResponse {
    pub draw_id: u64,
    pub records: Vec<WinnerRecordEntry>,
}

#[cw_serde]
pub struct WinRef {
    pub draw_id: u64,
    pub cycle: u64,
}

#[cw_serde]
pub struct UserWinsResponse {
    pub address: String,
    pub total_wins: u32,
    pub wins: Vec<WinRef>,
}
