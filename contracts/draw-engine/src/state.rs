use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Timestamp, Uint128};
use cw_storage_plus::{Item, Map};
use prizedraw_common::types::{DrawKind, DrawSchedule, DrawStatus, Winner};

pub const CONFIG: Item<EngineConfig> = Item::new("config");
pub const ENGINE_STATE: Item<EngineStateInfo> = Item::new("engine_state");
pub const DRAWS: Map<u64, Draw> = Map::new("draws");

/// Append-only winner audit log, keyed by (draw_id, sequence).
pub const WINNER_LOG: Map<(u64, u64), WinnerRecord> = Map::new("winner_log");
/// Next audit sequence number per draw.
pub const WINNER_LOG_SEQ: Map<u64, u64> = Map::new("winner_log_seq");

/// Per-user win tracking, keyed by (user, draw_id, cycle)
pub const USER_WINS: Map<(&Addr, u64, u64), ()> = Map::new("user_wins");
pub const USER_WIN_COUNT: Map<&Addr, u32> = Map::new("user_win_count");

#[cw_serde]
pub struct EngineConfig {
    pub admin: Addr,
    /// Addresses allowed to record winner selections.
    pub operators: Vec<Addr>,
    /// The purchase subsystem allowed to record sold entries.
    pub entry_minter: Addr,
    /// Contract holding per-entry ownership, queried at selection time.
    pub entry_ledger: Addr,
    /// Recommended polling interval for external transition sweepers (seconds).
    pub evaluation_interval_seconds: u64,
}

#[cw_serde]
pub struct EngineStateInfo {
    pub next_draw_id: u64,
    /// Major completions plus finished mini cycles.
    pub total_cycles_completed: u64,
    pub total_entries_recorded: u64,
}

/// Prize metadata, carried for display and export. The engine never
/// interprets it.
#[cw_serde]
pub struct Prize {
    pub name: String,
    /// Advertised prize value in minor currency units.
    pub value: Option<Uint128>,
    pub image_uri: Option<String>,
    pub category: Option<String>,
}

#[cw_serde]
pub struct Draw {
    pub id: u64,
    pub kind: DrawKind,
    pub name: String,
    pub description: Option<String>,
    pub prize: Prize,
    pub status: DrawStatus,
    pub schedule: DrawSchedule,
    /// Maximum entries per instance (major) or per cycle (mini).
    /// Required for minis.
    pub entry_cap: Option<u64>,
    pub total_entries: u64,
    /// Some for capped draws; counts down as entries are recorded.
    pub entries_remaining: Option<u64>,
    /// Winner of the current instance or cycle. Past mini cycles live in the
    /// winner log only.
    pub winner: Option<Winner>,
    /// Starts at 1; advances only for mini draws.
    pub cycle: u64,
    pub created_at: Timestamp,
}

impl Draw {
    /// True while new entries would currently be accepted.
    pub fn accepting_entries(&self) -> bool {
        self.status == DrawStatus::Active && self.entries_remaining != Some(0)
    }
}

/// One append-only audit entry for a recorded or corrected winner.
#[cw_serde]
pub struct WinnerRecord {
    pub cycle: u64,
    /// Entry pool size the selection was validated against.
    pub total_entries: u64,
    pub winner: Winner,
    pub kind: RecordKind,
}

#[cw_serde]
pub enum RecordKind {
    Selection,
    Correction,
}

impl RecordKind {
    pub fn label(&self) -> &'static str {
        match self {
            RecordKind::Selection => "selection",
            RecordKind::Correction => "correction",
        }
    }
}

/// Response type for querying an entry holder from the entry ledger.
/// Mirrors the entry record stored by the ledger contract.
#[cw_serde]
pub struct EntryHolderResponse {
    pub entry_number: u64,
    pub user: String,
}
