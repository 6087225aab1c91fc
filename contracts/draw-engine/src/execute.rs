use cosmwasm_std::{
    to_json_binary, Addr, Deps, DepsMut, Env, Event, MessageInfo, QueryRequest, Response, Storage,
    Timestamp, WasmQuery,
};
use prizedraw_common::lifecycle::{apply_transition, due_transition, FreezeReason, Transition};
use prizedraw_common::types::{DrawKind, DrawSchedule, DrawStatus, MiniCycle, Winner};

use crate::error::ContractError;
use crate::msg::{
    CreateDrawParams, LedgerQueryMsg, SelectWinnerParams, UpdateConfigParams, UpdateDrawParams,
};
use crate::state::{
    Draw, EngineConfig, EntryHolderResponse, RecordKind, WinnerRecord, CONFIG, DRAWS, ENGINE_STATE,
    USER_WINS, USER_WIN_COUNT, WINNER_LOG, WINNER_LOG_SEQ,
};

pub const DEFAULT_EVALUATION_INTERVAL_SECONDS: u64 = 60;
const MIN_EVALUATION_INTERVAL_SECONDS: u64 = 10;
const MAX_EVALUATION_INTERVAL_SECONDS: u64 = 3_600;

/// Bounds check for the advertised sweep interval.
pub fn validate_evaluation_interval(seconds: u64) -> Result<(), ContractError> {
    if !(MIN_EVALUATION_INTERVAL_SECONDS..=MAX_EVALUATION_INTERVAL_SECONDS).contains(&seconds) {
        return Err(ContractError::InvalidEvaluationInterval { seconds });
    }
    Ok(())
}

/// A mini draw must carry a per-cycle entry cap and a positive cycle length;
/// caps, where present, must be positive.
pub fn validate_draw_shape(kind: &DrawKind, entry_cap: Option<u64>) -> Result<(), ContractError> {
    if entry_cap == Some(0) {
        return Err(ContractError::InvalidDrawConfig {
            reason: "entry_cap must be greater than zero".to_string(),
        });
    }
    if let DrawKind::Mini(cycle_settings) = kind {
        if entry_cap.is_none() {
            return Err(ContractError::InvalidDrawConfig {
                reason: "mini draws require an entry_cap".to_string(),
            });
        }
        if cycle_settings.cycle_interval_seconds == 0 {
            return Err(ContractError::InvalidDrawConfig {
                reason: "cycle_interval_seconds must be greater than zero".to_string(),
            });
        }
    }
    Ok(())
}

/// Register a new draw in queued status. Admin only.
pub fn create_draw(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    params: CreateDrawParams,
) -> Result<Response, ContractError> {
    let CreateDrawParams {
        kind,
        name,
        description,
        prize,
        schedule,
        entry_cap,
    } = params;

    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized {
            reason: "only admin can create draws".to_string(),
        });
    }

    schedule.validate()?;
    validate_draw_shape(&kind, entry_cap)?;

    let mut state = ENGINE_STATE.load(deps.storage)?;
    let draw_id = state.next_draw_id;
    state.next_draw_id += 1;

    let draw = Draw {
        id: draw_id,
        kind,
        name,
        description,
        prize,
        status: DrawStatus::Queued,
        schedule,
        entry_cap,
        total_entries: 0,
        entries_remaining: entry_cap,
        winner: None,
        cycle: 1,
        created_at: env.block.time,
    };

    DRAWS.save(deps.storage, draw_id, &draw)?;
    ENGINE_STATE.save(deps.storage, &state)?;

    Ok(Response::new()
        .add_attribute("action", "create_draw")
        .add_attribute("draw_id", draw_id.to_string())
        .add_event(
            Event::new("draw_created")
                .add_attribute("draw_id", draw_id.to_string())
                .add_attribute("kind", draw.kind.label())
                .add_attribute("name", draw.name.clone())
                .add_attribute(
                    "activation_at",
                    draw.schedule.activation_at.seconds().to_string(),
                )
                .add_attribute(
                    "freeze_entries_at",
                    draw.schedule.freeze_entries_at.seconds().to_string(),
                )
                .add_attribute("draw_at", draw.schedule.draw_at.seconds().to_string()),
        ))
}

/// Edit a draw. Name and description stay editable until the draw is
/// terminal; everything else is configuration and is refused once the
/// configuration locks. Admin only.
pub fn update_draw(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    params: UpdateDrawParams,
) -> Result<Response, ContractError> {
    let UpdateDrawParams {
        draw_id,
        name,
        description,
        prize,
        schedule,
        entry_cap,
        cycle_settings,
    } = params;

    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized {
            reason: "only admin can update draws".to_string(),
        });
    }

    let mut draw = DRAWS
        .may_load(deps.storage, draw_id)?
        .ok_or(ContractError::DrawNotFound { draw_id })?;

    let wants_config_change = prize.is_some()
        || schedule.is_some()
        || entry_cap.is_some()
        || cycle_settings.is_some();

    if let Some(locked_at) = draw.status.locked_at() {
        if draw.status.is_terminal() || wants_config_change {
            return Err(ContractError::ConfigurationLocked { draw_id, locked_at });
        }
    }

    if let Some(name) = name {
        draw.name = name;
    }
    if let Some(description) = description {
        draw.description = Some(description);
    }
    if let Some(prize) = prize {
        draw.prize = prize;
    }
    if let Some(schedule) = schedule {
        draw.schedule = schedule;
    }
    if let Some(cap) = entry_cap {
        draw.entry_cap = Some(cap);
        draw.entries_remaining = Some(cap.saturating_sub(draw.total_entries));
    }
    if let Some(cycle_settings) = cycle_settings {
        match &mut draw.kind {
            DrawKind::Mini(existing) => *existing = cycle_settings,
            DrawKind::Major => {
                return Err(ContractError::InvalidDrawConfig {
                    reason: "major draws have no cycle settings".to_string(),
                })
            }
        }
    }

    draw.schedule.validate()?;
    validate_draw_shape(&draw.kind, draw.entry_cap)?;

    DRAWS.save(deps.storage, draw_id, &draw)?;

    Ok(Response::new()
        .add_attribute("action", "update_draw")
        .add_attribute("draw_id", draw_id.to_string())
        .add_event(
            Event::new("draw_updated")
                .add_attribute("draw_id", draw_id.to_string())
                .add_attribute("configuration_changed", wants_config_change.to_string()),
        ))
}

/// Apply every due transition for a draw, in order, until none remains.
/// Anyone can call.
pub fn evaluate_transitions(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
    draw_id: u64,
) -> Result<Response, ContractError> {
    let mut draw = DRAWS
        .may_load(deps.storage, draw_id)?
        .ok_or(ContractError::DrawNotFound { draw_id })?;

    let now = env.block.time;
    let mut events: Vec<Event> = Vec::new();

    // A long-missed sweep may owe several steps (queued -> active -> frozen);
    // walk them one at a time so every state change emits its own event.
    while let Some(transition) = due_transition(
        &draw.status,
        &draw.schedule,
        draw.kind.is_mini(),
        draw.entries_remaining,
        now,
    ) {
        draw.status = apply_transition(&draw.status, transition, now)?;
        events.push(transition_event(&draw, transition));
    }

    if events.is_empty() {
        return Ok(Response::new()
            .add_attribute("action", "evaluate_transitions")
            .add_attribute("draw_id", draw_id.to_string())
            .add_attribute("transitions", "none"));
    }

    DRAWS.save(deps.storage, draw_id, &draw)?;

    let mut response = Response::new()
        .add_attribute("action", "evaluate_transitions")
        .add_attribute("draw_id", draw_id.to_string())
        .add_attribute("transitions", events.len().to_string());
    for event in events {
        response = response.add_event(event);
    }
    Ok(response)
}

/// Record sold entries against an active draw. Entry minter only.
///
/// Entry numbers are implicit: a sale of `count` extends the pool from
/// total+1 through total+count. Exhausting a mini draw's capacity does not
/// freeze it here; the next transition sweep does, so sales and lifecycle
/// changes stay separately attributable.
pub fn record_entries(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    draw_id: u64,
    count: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.entry_minter {
        return Err(ContractError::Unauthorized {
            reason: "only the entry minter can record entries".to_string(),
        });
    }

    if count == 0 {
        return Err(ContractError::ZeroEntryCount);
    }

    let mut draw = DRAWS
        .may_load(deps.storage, draw_id)?
        .ok_or(ContractError::DrawNotFound { draw_id })?;

    if draw.status != DrawStatus::Active {
        return Err(ContractError::DrawNotAcceptingEntries {
            draw_id,
            status: draw.status,
        });
    }

    if let Some(remaining) = draw.entries_remaining {
        if remaining < count {
            return Err(ContractError::InsufficientCapacity {
                draw_id,
                remaining,
                requested: count,
            });
        }
        draw.entries_remaining = Some(remaining - count);
    }

    draw.total_entries += count;
    DRAWS.save(deps.storage, draw_id, &draw)?;

    let mut state = ENGINE_STATE.load(deps.storage)?;
    state.total_entries_recorded += count;
    ENGINE_STATE.save(deps.storage, &state)?;

    let remaining_attr = match draw.entries_remaining {
        Some(remaining) => remaining.to_string(),
        None => "unlimited".to_string(),
    };

    Ok(Response::new()
        .add_attribute("action", "record_entries")
        .add_attribute("draw_id", draw_id.to_string())
        .add_attribute("count", count.to_string())
        .add_event(
            Event::new("draw_entries_recorded")
                .add_attribute("draw_id", draw_id.to_string())
                .add_attribute("cycle", draw.cycle.to_string())
                .add_attribute("count", count.to_string())
                .add_attribute("total_entries", draw.total_entries.to_string())
                .add_attribute("entries_remaining", remaining_attr),
        ))
}

/// Record the winner for a frozen draw. Operator only.
///
/// 1. Check the draw is frozen for selection.
/// 2. Reject if this instance or cycle already has a winner.
/// 3. Check the entry number falls inside the recorded pool.
/// 4. Ask the entry ledger who holds that entry and match it against the
///    claimed winner.
/// 5. Append the selection to the audit log, then set the winner.
/// 6. Major draws complete; mini draws roll into their next cycle.
pub fn select_winner(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    params: SelectWinnerParams,
) -> Result<Response, ContractError> {
    let SelectWinnerParams {
        draw_id,
        winner,
        entry_number,
        selection_method,
    } = params;

    let config = CONFIG.load(deps.storage)?;
    if !config.operators.contains(&info.sender) {
        return Err(ContractError::Unauthorized {
            reason: "only operators can select winners".to_string(),
        });
    }

    let mut draw = DRAWS
        .may_load(deps.storage, draw_id)?
        .ok_or(ContractError::DrawNotFound { draw_id })?;

    // 1. Must be frozen. A completed major draw falls through to the
    //    winner-present check so a replayed selection reports the conflict
    //    rather than a status error.
    let selectable = matches!(draw.status, DrawStatus::Frozen { .. })
        || (draw.kind == DrawKind::Major
            && matches!(draw.status, DrawStatus::Completed { .. }));
    if !selectable {
        return Err(ContractError::DrawNotFrozen {
            draw_id,
            status: draw.status,
        });
    }

    // 2. At most one winner per instance or cycle
    if draw.winner.is_some() {
        return Err(ContractError::WinnerAlreadySelected {
            draw_id,
            cycle: draw.cycle,
        });
    }

    // 3. Entry numbers are 1-based
    if entry_number == 0 || entry_number > draw.total_entries {
        return Err(ContractError::EntryNumberOutOfRange {
            entry_number,
            total_entries: draw.total_entries,
        });
    }

    // 4. The claimed winner must hold the entry
    let winner_addr = deps.api.addr_validate(&winner)?;
    verify_entry_holder(
        deps.as_ref(),
        &config,
        draw_id,
        draw.cycle,
        entry_number,
        &winner_addr,
    )?;

    let method_label = selection_method.label();
    let selected = Winner {
        user: winner_addr.clone(),
        entry_number,
        selection_method,
        selected_by: info.sender.clone(),
        selected_at: env.block.time,
    };

    // 5. Audit log first, then the live record
    append_winner_record(
        deps.storage,
        draw_id,
        &WinnerRecord {
            cycle: draw.cycle,
            total_entries: draw.total_entries,
            winner: selected.clone(),
            kind: RecordKind::Selection,
        },
    )?;

    USER_WINS.save(deps.storage, (&winner_addr, draw_id, draw.cycle), &())?;
    let win_count = USER_WIN_COUNT
        .may_load(deps.storage, &winner_addr)?
        .unwrap_or(0);
    USER_WIN_COUNT.save(deps.storage, &winner_addr, &(win_count + 1))?;

    draw.winner = Some(selected);

    let mut state = ENGINE_STATE.load(deps.storage)?;
    state.total_cycles_completed += 1;
    ENGINE_STATE.save(deps.storage, &state)?;

    let completed_cycle = draw.cycle;
    let mut events = vec![Event::new("draw_winner_selected")
        .add_attribute("draw_id", draw_id.to_string())
        .add_attribute("cycle", completed_cycle.to_string())
        .add_attribute("winner", winner_addr.to_string())
        .add_attribute("entry_number", entry_number.to_string())
        .add_attribute("selection_method", method_label)
        .add_attribute("selected_by", info.sender.to_string())];

    // 6. Completion or rollover
    match draw.kind.clone() {
        DrawKind::Major => {
            draw.status = apply_transition(&draw.status, Transition::Complete, env.block.time)?;
            events.push(transition_event(&draw, Transition::Complete));
        }
        DrawKind::Mini(cycle_settings) => {
            events.push(roll_cycle(&mut draw, &cycle_settings, env.block.time)?);
        }
    }

    DRAWS.save(deps.storage, draw_id, &draw)?;

    let mut response = Response::new()
        .add_attribute("action", "select_winner")
        .add_attribute("draw_id", draw_id.to_string())
        .add_attribute("winner", winner_addr.to_string());
    for event in events {
        response = response.add_event(event);
    }
    Ok(response)
}

/// Correct a previously recorded winner. Admin only.
///
/// Validation matches SelectWinner but runs against the instance or cycle
/// being corrected: for a major draw that is its live record, for a mini
/// draw the most recent completed cycle in the audit log. The range bound
/// comes from the entry total captured at selection time, since a rolled
/// mini's live counters have already reset.
pub fn edit_winner(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    params: SelectWinnerParams,
) -> Result<Response, ContractError> {
    let SelectWinnerParams {
        draw_id,
        winner,
        entry_number,
        selection_method,
    } = params;

    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized {
            reason: "only admin can correct winners".to_string(),
        });
    }

    let mut draw = DRAWS
        .may_load(deps.storage, draw_id)?
        .ok_or(ContractError::DrawNotFound { draw_id })?;

    let next_seq = WINNER_LOG_SEQ
        .may_load(deps.storage, draw_id)?
        .unwrap_or(0);
    if next_seq == 0 {
        return Err(ContractError::NoWinnerRecorded { draw_id });
    }
    let last = WINNER_LOG.load(deps.storage, (draw_id, next_seq - 1))?;

    let corrected_cycle = last.cycle;
    let pool_size = last.total_entries;

    if entry_number == 0 || entry_number > pool_size {
        return Err(ContractError::EntryNumberOutOfRange {
            entry_number,
            total_entries: pool_size,
        });
    }

    let winner_addr = deps.api.addr_validate(&winner)?;
    verify_entry_holder(
        deps.as_ref(),
        &config,
        draw_id,
        corrected_cycle,
        entry_number,
        &winner_addr,
    )?;

    let method_label = selection_method.label();
    let corrected = Winner {
        user: winner_addr.clone(),
        entry_number,
        selection_method,
        selected_by: info.sender.clone(),
        selected_at: env.block.time,
    };

    append_winner_record(
        deps.storage,
        draw_id,
        &WinnerRecord {
            cycle: corrected_cycle,
            total_entries: pool_size,
            winner: corrected.clone(),
            kind: RecordKind::Correction,
        },
    )?;

    // Re-point the per-user win index
    let previous = last.winner.user;
    if previous != winner_addr {
        USER_WINS.remove(deps.storage, (&previous, draw_id, corrected_cycle));
        let old_count = USER_WIN_COUNT
            .may_load(deps.storage, &previous)?
            .unwrap_or(0);
        USER_WIN_COUNT.save(deps.storage, &previous, &old_count.saturating_sub(1))?;

        USER_WINS.save(deps.storage, (&winner_addr, draw_id, corrected_cycle), &())?;
        let new_count = USER_WIN_COUNT
            .may_load(deps.storage, &winner_addr)?
            .unwrap_or(0);
        USER_WIN_COUNT.save(deps.storage, &winner_addr, &(new_count + 1))?;
    }

    // A major draw's live record still shows the winner; keep it in step.
    // A rolled mini cycle keeps its truth in the log alone.
    if draw.winner.is_some() && draw.cycle == corrected_cycle {
        draw.winner = Some(corrected);
        DRAWS.save(deps.storage, draw_id, &draw)?;
    }

    Ok(Response::new()
        .add_attribute("action", "edit_winner")
        .add_attribute("draw_id", draw_id.to_string())
        .add_event(
            Event::new("draw_winner_corrected")
                .add_attribute("draw_id", draw_id.to_string())
                .add_attribute("cycle", corrected_cycle.to_string())
                .add_attribute("previous_winner", previous.to_string())
                .add_attribute("winner", winner_addr.to_string())
                .add_attribute("entry_number", entry_number.to_string())
                .add_attribute("selection_method", method_label)
                .add_attribute("corrected_by", info.sender.to_string()),
        ))
}

/// Cancel a draw. Admin only. Legal from queued, active, or frozen; entry
/// totals and any recorded history stay behind for audit.
pub fn cancel_draw(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    draw_id: u64,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized {
            reason: "only admin can cancel draws".to_string(),
        });
    }

    let mut draw = DRAWS
        .may_load(deps.storage, draw_id)?
        .ok_or(ContractError::DrawNotFound { draw_id })?;

    draw.status = apply_transition(&draw.status, Transition::Cancel, env.block.time)?;
    DRAWS.save(deps.storage, draw_id, &draw)?;

    Ok(Response::new()
        .add_attribute("action", "cancel_draw")
        .add_attribute("draw_id", draw_id.to_string())
        .add_event(transition_event(&draw, Transition::Cancel)))
}

/// Update configuration. Admin only.
pub fn update_config(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    params: UpdateConfigParams,
) -> Result<Response, ContractError> {
    let UpdateConfigParams {
        admin,
        entry_minter,
        entry_ledger,
        evaluation_interval_seconds,
    } = params;

    let mut config = CONFIG.load(deps.storage)?;

    if info.sender != config.admin {
        return Err(ContractError::Unauthorized {
            reason: "only admin can update config".to_string(),
        });
    }

    if let Some(admin) = admin {
        config.admin = deps.api.addr_validate(&admin)?;
    }
    if let Some(minter) = entry_minter {
        config.entry_minter = deps.api.addr_validate(&minter)?;
    }
    if let Some(ledger) = entry_ledger {
        config.entry_ledger = deps.api.addr_validate(&ledger)?;
    }
    if let Some(interval) = evaluation_interval_seconds {
        validate_evaluation_interval(interval)?;
        config.evaluation_interval_seconds = interval;
    }

    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new().add_attribute("action", "update_config"))
}

/// Manage the operator set. Admin only.
pub fn update_operators(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    add: Vec<String>,
    remove: Vec<String>,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;

    if info.sender != config.admin {
        return Err(ContractError::Unauthorized {
            reason: "only admin can update operators".to_string(),
        });
    }

    // Remove operators
    for addr_str in &remove {
        let addr = deps.api.addr_validate(addr_str)?;
        config.operators.retain(|a| a != &addr);
    }

    // Add operators
    for addr_str in &add {
        let addr = deps.api.addr_validate(addr_str)?;
        if !config.operators.contains(&addr) {
            config.operators.push(addr);
        }
    }

    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "update_operators")
        .add_attribute("added", add.join(","))
        .add_attribute("removed", remove.join(",")))
}

/// Ask the entry ledger who holds an entry and compare with the claimed
/// winner. A missing entry and a foreign holder are both mismatches.
fn verify_entry_holder(
    deps: Deps,
    config: &EngineConfig,
    draw_id: u64,
    cycle: u64,
    entry_number: u64,
    claimed: &Addr,
) -> Result<(), ContractError> {
    let holder_query = QueryRequest::Wasm(WasmQuery::Smart {
        contract_addr: config.entry_ledger.to_string(),
        msg: to_json_binary(&LedgerQueryMsg::EntryHolder {
            draw_id,
            cycle,
            entry_number,
        })?,
    });

    let holder: Option<EntryHolderResponse> = deps.querier.query(&holder_query)?;
    let held_by_claimed = holder
        .map(|record| record.user == claimed.as_str())
        .unwrap_or(false);
    if !held_by_claimed {
        return Err(ContractError::EntryOwnerMismatch {
            draw_id,
            entry_number,
            claimed: claimed.to_string(),
        });
    }
    Ok(())
}

/// Append a record to a draw's winner audit log. Records are never mutated
/// after this.
fn append_winner_record(
    storage: &mut dyn Storage,
    draw_id: u64,
    record: &WinnerRecord,
) -> Result<u64, ContractError> {
    let seq = WINNER_LOG_SEQ.may_load(storage, draw_id)?.unwrap_or(0);
    WINNER_LOG.save(storage, (draw_id, seq), record)?;
    WINNER_LOG_SEQ.save(storage, draw_id, &(seq + 1))?;
    Ok(seq)
}

/// Open the next cycle of a mini draw after its winner was recorded.
///
/// Totals reset, capacity is restored, and the schedule re-anchors to now:
/// the new cycle activates after the configured reopen delay, then runs one
/// full cycle interval before freezing. The freeze-to-draw gap carries over
/// from the previous schedule.
fn roll_cycle(
    draw: &mut Draw,
    cycle_settings: &MiniCycle,
    now: Timestamp,
) -> Result<Event, ContractError> {
    let immediate = cycle_settings.reopen_delay_seconds == 0;
    draw.status = apply_transition(&draw.status, Transition::Reopen { immediate }, now)?;

    draw.cycle += 1;
    draw.total_entries = 0;
    draw.entries_remaining = draw.entry_cap;
    draw.winner = None;

    let draw_gap = draw.schedule.draw_at.seconds() - draw.schedule.freeze_entries_at.seconds();
    let activation_at = now.plus_seconds(cycle_settings.reopen_delay_seconds);
    let freeze_entries_at = activation_at.plus_seconds(cycle_settings.cycle_interval_seconds);
    draw.schedule = DrawSchedule {
        activation_at,
        freeze_entries_at,
        draw_at: freeze_entries_at.plus_seconds(draw_gap),
    };

    Ok(Event::new("draw_cycle_rolled")
        .add_attribute("draw_id", draw.id.to_string())
        .add_attribute("cycle", draw.cycle.to_string())
        .add_attribute("status", draw.status.label())
        .add_attribute(
            "activation_at",
            draw.schedule.activation_at.seconds().to_string(),
        )
        .add_attribute(
            "freeze_entries_at",
            draw.schedule.freeze_entries_at.seconds().to_string(),
        ))
}

fn transition_event(draw: &Draw, transition: Transition) -> Event {
    let name = match transition {
        Transition::Activate => "draw_activated",
        Transition::Freeze(_) => "draw_frozen",
        Transition::Complete => "draw_completed",
        Transition::Reopen { .. } => "draw_reopened",
        Transition::Cancel => "draw_cancelled",
    };
    let mut event = Event::new(name)
        .add_attribute("draw_id", draw.id.to_string())
        .add_attribute("cycle", draw.cycle.to_string())
        .add_attribute("status", draw.status.label());
    if let Transition::Freeze(reason) = transition {
        let reason_label = match reason {
            FreezeReason::DeadlineReached => "deadline_reached",
            FreezeReason::CapExhausted => "cap_exhausted",
        };
        event = event.add_attribute("reason", reason_label);
    }
    event
}
