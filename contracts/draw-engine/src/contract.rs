use cosmwasm_std::{
    entry_point, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::{get_contract_version, set_contract_version};

use crate::error::ContractError;
use crate::execute::{
    cancel_draw, create_draw, edit_winner, evaluate_transitions, record_entries, select_winner,
    update_config, update_draw, update_operators, validate_evaluation_interval,
    DEFAULT_EVALUATION_INTERVAL_SECONDS,
};
use crate::msg::{
    CreateDrawParams, ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg, SelectWinnerParams,
    UpdateConfigParams, UpdateDrawParams,
};
use crate::query::{
    query_config, query_draw, query_draws, query_engine_state, query_entry_summary,
    query_user_wins, query_winner, query_winner_history,
};
use crate::state::{EngineConfig, EngineStateInfo, CONFIG, ENGINE_STATE};

const CONTRACT_NAME: &str = "crates.io:prizedraw-engine";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let evaluation_interval_seconds = msg
        .evaluation_interval_seconds
        .unwrap_or(DEFAULT_EVALUATION_INTERVAL_SECONDS);
    validate_evaluation_interval(evaluation_interval_seconds)?;

    let mut operators = Vec::with_capacity(msg.operators.len());
    for operator in &msg.operators {
        operators.push(deps.api.addr_validate(operator)?);
    }

    let config = EngineConfig {
        admin: info.sender.clone(),
        operators,
        entry_minter: deps.api.addr_validate(&msg.entry_minter)?,
        entry_ledger: deps.api.addr_validate(&msg.entry_ledger)?,
        evaluation_interval_seconds,
    };
    CONFIG.save(deps.storage, &config)?;

    ENGINE_STATE.save(
        deps.storage,
        &EngineStateInfo {
            next_draw_id: 0,
            total_cycles_completed: 0,
            total_entries_recorded: 0,
        },
    )?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("contract", "draw-engine")
        .add_attribute("admin", info.sender.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::CreateDraw {
            kind,
            name,
            description,
            prize,
            schedule,
            entry_cap,
        } => create_draw(
            deps,
            env,
            info,
            CreateDrawParams {
                kind,
                name,
                description,
                prize,
                schedule,
                entry_cap,
            },
        ),
        ExecuteMsg::UpdateDraw {
            draw_id,
            name,
            description,
            prize,
            schedule,
            entry_cap,
            cycle_settings,
        } => update_draw(
            deps,
            env,
            info,
            UpdateDrawParams {
                draw_id,
                name,
                description,
                prize,
                schedule,
                entry_cap,
                cycle_settings,
            },
        ),
        ExecuteMsg::EvaluateTransitions { draw_id } => {
            evaluate_transitions(deps, env, info, draw_id)
        }
        ExecuteMsg::RecordEntries { draw_id, count } => {
            record_entries(deps, env, info, draw_id, count)
        }
        ExecuteMsg::SelectWinner {
            draw_id,
            winner,
            entry_number,
            selection_method,
        } => select_winner(
            deps,
            env,
            info,
            SelectWinnerParams {
                draw_id,
                winner,
                entry_number,
                selection_method,
            },
        ),
        ExecuteMsg::EditWinner {
            draw_id,
            winner,
            entry_number,
            selection_method,
        } => edit_winner(
            deps,
            env,
            info,
            SelectWinnerParams {
                draw_id,
                winner,
                entry_number,
                selection_method,
            },
        ),
        ExecuteMsg::CancelDraw { draw_id } => cancel_draw(deps, env, info, draw_id),
        ExecuteMsg::UpdateConfig {
            admin,
            entry_minter,
            entry_ledger,
            evaluation_interval_seconds,
        } => update_config(
            deps,
            env,
            info,
            UpdateConfigParams {
                admin,
                entry_minter,
                entry_ledger,
                evaluation_interval_seconds,
            },
        ),
        ExecuteMsg::UpdateOperators { add, remove } => {
            update_operators(deps, env, info, add, remove)
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => query_config(deps),
        QueryMsg::EngineState {} => query_engine_state(deps),
        QueryMsg::Draw { draw_id } => query_draw(deps, draw_id),
        QueryMsg::Draws { start_after, limit } => query_draws(deps, start_after, limit),
        QueryMsg::EntrySummary { draw_id } => query_entry_summary(deps, draw_id),
        QueryMsg::Winner { draw_id } => query_winner(deps, draw_id),
        QueryMsg::WinnerHistory {
            draw_id,
            start_after,
            limit,
        } => query_winner_history(deps, draw_id, start_after, limit),
        QueryMsg::UserWins {
            address,
            start_after,
            limit,
        } => query_user_wins(deps, address, start_after, limit),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let version = get_contract_version(deps.storage)?;
    if version.contract != CONTRACT_NAME {
        return Err(ContractError::Unauthorized {
            reason: "can only upgrade from same contract type".to_string(),
        });
    }
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new().add_attribute("action", "migrate"))
}
