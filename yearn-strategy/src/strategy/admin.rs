use crate::errors::StrategyError;
use crate::events::StrategyEvents;
use crate::storage;
use crate::strategy::require_non_negative;
use soroban_sdk::token::TokenClient;
use soroban_sdk::{panic_with_error, Address, BytesN, Env};

/// Move `amount` of any token held by the strategy to `to`. The sweep lock is
/// held for the duration of the transfer.
pub fn execute_transfer_token(e: &Env, token: &Address, amount: i128, to: &Address) {
    require_non_negative(e, amount);
    if storage::is_sweep_locked(e) {
        panic_with_error!(e, StrategyError::Reentrancy);
    }

    storage::set_sweep_lock(e, true);
    TokenClient::new(e, token).transfer(&e.current_contract_address(), to, &amount);
    storage::set_sweep_lock(e, false);

    StrategyEvents::transfer_token(e, token.clone(), to.clone(), amount);
}

pub fn execute_propose_owner(e: &Env, owner: &Address, new_owner: &Address) {
    storage::set_proposed_owner(e, new_owner);
    StrategyEvents::propose_owner(e, owner.clone(), new_owner.clone());
}

pub fn execute_accept_owner(e: &Env, caller: &Address) {
    caller.require_auth();
    match storage::get_proposed_owner(e) {
        Some(proposed_owner) if proposed_owner == *caller => {}
        _ => panic_with_error!(e, StrategyError::Unauthorized),
    }

    storage::set_owner(e, caller);
    storage::del_proposed_owner(e);
    StrategyEvents::accept_owner(e, caller.clone());
}

pub fn execute_upgrade_wasm(e: &Env, owner: &Address, wasm_hash: &BytesN<32>) {
    e.deployer().update_current_contract_wasm(wasm_hash.clone());
    StrategyEvents::upgrade_wasm(e, owner.clone(), wasm_hash.clone());
}
