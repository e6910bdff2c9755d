mod actions;
mod admin;
mod apr;
mod config;

pub use actions::{execute_deposit, execute_redeem, execute_redeem_underlying, load_price};
pub use admin::{execute_accept_owner, execute_propose_owner, execute_transfer_token, execute_upgrade_wasm};
pub use apr::calc_apr;
pub use config::{
    execute_initialize, execute_refresh_allowance, execute_set_whitelisted_cdo, load_config,
    load_owner, require_initialized, require_owner,
};

use crate::errors::StrategyError;
use soroban_sdk::{panic_with_error, Env};

/// Unwrap a checked math result, failing with `ArithmeticFault` on overflow or division by zero
pub(crate) fn require_math<T>(e: &Env, value: Option<T>) -> T {
    match value {
        Some(value) => value,
        None => panic_with_error!(e, StrategyError::ArithmeticFault),
    }
}

pub(crate) fn require_non_negative(e: &Env, amount: i128) {
    if amount < 0 {
        panic_with_error!(e, StrategyError::InvalidAmount);
    }
}
