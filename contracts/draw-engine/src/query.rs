use cosmwasm_std::{to_json_binary, Binary, Deps, Order, StdResult};
use cw_storage_plus::Bound;

use crate::msg::{
    DrawsResponse, EntrySummaryResponse, UserWinsResponse, WinRef, WinnerHistoryResponse,
    WinnerRecordEntry,
};
use crate::state::{CONFIG, DRAWS, ENGINE_STATE, USER_WINS, USER_WIN_COUNT, WINNER_LOG};

const DEFAULT_LIMIT: u32 = 20;
const MAX_LIMIT: u32 = 100;

pub fn query_config(deps: Deps) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    to_json_binary(&config)
}

pub fn query_engine_state(deps: Deps) -> StdResult<Binary> {
    let state = ENGINE_STATE.load(deps.storage)?;
    to_json_binary(&state)
}

pub fn query_draw(deps: Deps, draw_id: u64) -> StdResult<Binary> {
    let draw = DRAWS.load(deps.storage, draw_id)?;
    to_json_binary(&draw)
}

pub fn query_draws(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<Binary> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    let draws = DRAWS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(_, draw)| draw))
        .collect::<StdResult<Vec<_>>>()?;

    to_json_binary(&DrawsResponse { draws })
}

/// Compact projection for the purchase subsystem: whether the draw takes
/// entries right now and how much room is left. Mirrors the stored status,
/// which the transition sweep keeps current.
pub fn query_entry_summary(deps: Deps, draw_id: u64) -> StdResult<Binary> {
    let draw = DRAWS.load(deps.storage, draw_id)?;
    to_json_binary(&EntrySummaryResponse {
        draw_id,
        cycle: draw.cycle,
        status: draw.status.label().to_string(),
        accepting_entries: draw.accepting_entries(),
        total_entries: draw.total_entries,
        entry_cap: draw.entry_cap,
        entries_remaining: draw.entries_remaining,
    })
}

pub fn query_winner(deps: Deps, draw_id: u64) -> StdResult<Binary> {
    let draw = DRAWS.load(deps.storage, draw_id)?;
    to_json_binary(&draw.winner)
}

pub fn query_winner_history(
    deps: Deps,
    draw_id: u64,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<Binary> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    let records = WINNER_LOG
        .prefix(draw_id)
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (seq, record) = item?;
            Ok(WinnerRecordEntry { seq, record })
        })
        .collect::<StdResult<Vec<_>>>()?;

    to_json_binary(&WinnerHistoryResponse { draw_id, records })
}

pub fn query_user_wins(
    deps: Deps,
    address: String,
    start_after: Option<(u64, u64)>,
    limit: Option<u32>,
) -> StdResult<Binary> {
    let addr = deps.api.addr_validate(&address)?;
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    let wins = USER_WINS
        .sub_prefix(&addr)
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let ((draw_id, cycle), _) = item?;
            Ok(WinRef { draw_id, cycle })
        })
        .collect::<StdResult<Vec<_>>>()?;

    let total_wins = USER_WIN_COUNT.may_load(deps.storage, &addr)?.unwrap_or(0);

    to_json_binary(&UserWinsResponse {
        address: addr.to_string(),
        total_wins,
        wins,
    })
}
