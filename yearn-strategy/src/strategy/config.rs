use crate::constants::CONFIG_VERSION;
use crate::dependencies::YearnVaultClient;
use crate::errors::StrategyError;
use crate::events::StrategyEvents;
use crate::storage;
use crate::strategy::require_math;
use crate::types::StrategyConfig;
use soroban_sdk::token::TokenClient;
use soroban_sdk::{panic_with_error, Address, Env};

pub fn execute_initialize(e: &Env, vault: &Address, owner: &Address) {
    if storage::has_config(e) {
        panic_with_error!(e, StrategyError::AlreadyInitialized);
    }

    let token = YearnVaultClient::new(e, vault).token();
    let token_decimals = TokenClient::new(e, &token).decimals();
    let one_token = require_math(e, 10i128.checked_pow(token_decimals));

    let config = StrategyConfig {
        token: token.clone(),
        token_decimals,
        one_token,
        vault: vault.clone(),
        version: CONFIG_VERSION,
    };
    storage::set_config(e, &config);
    storage::set_owner(e, owner);
    approve_vault(e, &config);

    StrategyEvents::initialize(e, vault.clone(), token, owner.clone());
}

/// Fetch the strategy configuration
///
/// ### Panics
/// If the strategy has not been initialized
pub fn load_config(e: &Env) -> StrategyConfig {
    match storage::get_config(e) {
        Some(config) => config,
        None => panic_with_error!(e, StrategyError::NotInitialized),
    }
}

/// Require the strategy to be initialized
///
/// ### Panics
/// If the strategy has not been initialized
pub fn require_initialized(e: &Env) {
    if !storage::has_config(e) {
        panic_with_error!(e, StrategyError::NotInitialized);
    }
}

/// Fetch the owner
///
/// ### Panics
/// If the strategy has not been initialized
pub fn load_owner(e: &Env) -> Address {
    match storage::get_owner(e) {
        Some(owner) => owner,
        None => panic_with_error!(e, StrategyError::NotInitialized),
    }
}

/// Require `caller` to be the owner and to have authorized the invocation
///
/// ### Panics
/// If the strategy has not been initialized or `caller` is not the owner
pub fn require_owner(e: &Env, caller: &Address) {
    caller.require_auth();
    if load_owner(e) != *caller {
        panic_with_error!(e, StrategyError::Unauthorized);
    }
}

pub fn execute_set_whitelisted_cdo(e: &Env, cdo: &Option<Address>) {
    let cdo = match cdo {
        Some(cdo) => cdo,
        None => panic_with_error!(e, StrategyError::InvalidAddress),
    };
    storage::set_whitelisted_cdo(e, cdo);
    StrategyEvents::set_whitelisted_cdo(e, cdo.clone());
}

pub fn execute_refresh_allowance(e: &Env) {
    let config = load_config(e);
    let live_until_ledger = approve_vault(e, &config);
    StrategyEvents::refresh_allowance(e, live_until_ledger);
}

/// Grant the vault the largest allowance over the underlying the ledger accepts.
/// Returns the ledger the allowance lives until.
fn approve_vault(e: &Env, config: &StrategyConfig) -> u32 {
    let live_until_ledger = e.ledger().max_live_until_ledger();
    TokenClient::new(e, &config.token).approve(
        &e.current_contract_address(),
        &config.vault,
        &i128::MAX,
        &live_until_ledger,
    );
    live_until_ledger
}
