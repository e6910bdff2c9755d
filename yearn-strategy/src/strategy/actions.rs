use crate::dependencies::YearnVaultClient;
use crate::events::StrategyEvents;
use crate::errors::StrategyError;
use crate::strategy::{load_config, require_non_negative};
use crate::types::StrategyConfig;
use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::token::TokenClient;
use soroban_sdk::{log, panic_with_error, Address, Env};

/// Forward `amount` underlying from `from` into the vault and hand the minted
/// shares back to `from`. Nothing is left on the strategy.
///
/// ### Returns
/// The number of vault shares minted
pub fn execute_deposit(e: &Env, from: &Address, amount: i128) -> i128 {
    require_non_negative(e, amount);
    let config = load_config(e);
    if amount == 0 {
        log!(e, "deposit of zero skipped");
        return 0;
    }

    let strategy = e.current_contract_address();
    TokenClient::new(e, &config.token).transfer(from, &strategy, &amount);
    let shares = YearnVaultClient::new(e, &config.vault).deposit(&strategy, &amount);
    if shares > 0 {
        TokenClient::new(e, &config.vault).transfer(&strategy, from, &shares);
    }

    StrategyEvents::deposit(e, from.clone(), amount, shares);
    shares
}

/// Price of one vault share in underlying base units. Not cached.
pub fn load_price(e: &Env) -> i128 {
    let config = load_config(e);
    YearnVaultClient::new(e, &config.vault).price_per_share()
}

/// Redeem `shares` held by `from` through the vault and hand the underlying
/// back to `from`
///
/// ### Returns
/// The amount of underlying returned
pub fn execute_redeem(e: &Env, from: &Address, shares: i128) -> i128 {
    require_non_negative(e, shares);
    let config = load_config(e);
    redeem_shares(e, &config, from, shares)
}

/// Redeem the number of shares worth `amount` underlying at the current
/// price. Shares are floored, so `from` may receive slightly less than `amount`.
///
/// ### Panics
/// With `ArithmeticFault` if the vault reports a zero price
pub fn execute_redeem_underlying(e: &Env, from: &Address, amount: i128) -> i128 {
    require_non_negative(e, amount);
    let config = load_config(e);
    let price = YearnVaultClient::new(e, &config.vault).price_per_share();
    if price == 0 {
        panic_with_error!(e, StrategyError::ArithmeticFault);
    }
    // shares = amount * one_token / price
    let shares = amount.fixed_div_floor(e, &price, &config.one_token);
    redeem_shares(e, &config, from, shares)
}

fn redeem_shares(e: &Env, config: &StrategyConfig, from: &Address, shares: i128) -> i128 {
    if shares == 0 {
        log!(e, "redeem of zero shares skipped");
        return 0;
    }

    let strategy = e.current_contract_address();
    TokenClient::new(e, &config.vault).transfer(from, &strategy, &shares);
    let amount = YearnVaultClient::new(e, &config.vault).withdraw(&strategy, &shares);
    if amount > 0 {
        TokenClient::new(e, &config.token).transfer(&strategy, from, &amount);
    }

    StrategyEvents::redeem(e, from.clone(), shares, amount);
    amount
}
