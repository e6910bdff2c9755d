use soroban_sdk::{contract, contractclient, contractimpl, Address, BytesN, Env, Vec};
use crate::{storage, strategy};
use crate::types::StrategyKind;

#[contract]
pub struct YearnStrategyContract;

#[contractclient(name = "YearnStrategyClient")]
pub trait YearnStrategy {
    /// Initializes the strategy over a Yearn vault. Can only be called once.
    ///
    /// Resolves the underlying token and its decimals from the vault and grants
    /// the vault an unlimited allowance over the strategy's underlying.
    ///
    /// ### Arguments
    /// * `vault` - The Yearn vault to wrap
    /// * `owner` - The owner of the strategy
    ///
    /// ### Panics
    /// If the strategy is already initialized
    fn initialize(e: Env, vault: Address, owner: Address);

    /// Deposits underlying into the vault on behalf of `from`
    ///
    /// Pulls `amount` underlying from `from`, deposits it into the vault and
    /// sends every minted share to `from`. A zero amount is a no-op.
    ///
    /// # Arguments
    /// * `from` - The caller supplying the underlying
    /// * `amount` - Amount of underlying to deposit
    ///
    /// # Returns
    /// Amount of vault shares minted to `from`
    fn deposit(e: Env, from: Address, amount: i128) -> i128;

    /// Redeems vault shares for underlying on behalf of `from`
    ///
    /// # Arguments
    /// * `from` - The caller supplying the shares
    /// * `shares` - Amount of vault shares to redeem
    ///
    /// # Returns
    /// Amount of underlying sent to `from`
    fn redeem(e: Env, from: Address, shares: i128) -> i128;

    /// Redeems the shares worth `amount` underlying at the current price
    ///
    /// # Arguments
    /// * `from` - The caller supplying the shares
    /// * `amount` - Amount of underlying wanted
    ///
    /// # Returns
    /// Amount of underlying sent to `from`, at most `amount`
    fn redeem_underlying(e: Env, from: Address, amount: i128) -> i128;

    /// Price of one vault share in underlying base units, read from the vault
    fn price(e: Env) -> i128;

    /// Best-effort APR of the vault, scaled by 1e20
    fn get_apr(e: Env) -> i128;

    /// Capability set of this strategy
    fn kind(e: Env) -> StrategyKind;

    /// No rewards are distributed by this strategy; always empty
    fn redeem_rewards(e: Env, from: Address) -> Vec<i128>;

    /// No rewards are distributed by this strategy; always empty
    fn get_reward_tokens(e: Env) -> Vec<Address>;

    /// No staked AAVE is held by this strategy; always 0
    fn pull_stk_aave(e: Env) -> i128;

    /// The token handed to callers on deposit (the vault share)
    fn strategy_token(e: Env) -> Address;

    /// The underlying token
    fn token(e: Env) -> Address;

    /// 10^token_decimals
    fn one_token(e: Env) -> i128;

    fn token_decimals(e: Env) -> u32;

    /// The underlying token
    fn underlying_token(e: Env) -> Address;

    fn yearn_vault(e: Env) -> Address;

    fn whitelisted_cdo(e: Env) -> Option<Address>;

    fn owner(e: Env) -> Address;

    /// (Owner only) Set the whitelisted CDO
    ///
    /// ### Arguments
    /// * `caller` - The owner
    /// * `cdo` - The new CDO address
    ///
    /// ### Panics
    /// If the caller is not the owner or `cdo` is empty or the strategy itself
    fn set_whitelisted_cdo(e: Env, caller: Address, cdo: Option<Address>);

    /// (Owner only) Emergency transfer of any token held by the strategy
    ///
    /// ### Arguments
    /// * `caller` - The owner
    /// * `token` - The token to move
    /// * `amount` - The amount to move
    /// * `to` - The recipient
    ///
    /// ### Panics
    /// If the caller is not the owner or a sweep is already in progress
    fn transfer_token(e: Env, caller: Address, token: Address, amount: i128, to: Address);

    /// (Owner only) Grant the vault the maximal underlying allowance again.
    /// Ledger allowances expire, this restores the one set on initialization.
    ///
    /// ### Panics
    /// If the caller is not the owner
    fn refresh_allowance(e: Env, caller: Address);

    /// (Owner only) Set a new address to become the owner of the strategy.
    /// This must be accepted by the new owner w/ `accept_owner` to take effect.
    ///
    /// ### Arguments
    /// * `caller` - The owner
    /// * `new_owner` - The new owner address
    ///
    /// ### Panics
    /// If the caller is not the owner
    fn propose_owner(e: Env, caller: Address, new_owner: Address);

    /// (Proposed owner only) Accept the owner role
    ///
    /// ### Panics
    /// If the caller is not the proposed owner
    fn accept_owner(e: Env, caller: Address);

    /// (Owner only) Upgrade the contract to a new WASM binary
    ///
    /// ### Arguments
    /// * `caller` - The owner
    /// * `wasm_hash` - The hash of the new WASM binary
    ///
    /// ### Panics
    /// If the caller is not the owner
    fn upgrade_wasm(e: Env, caller: Address, wasm_hash: BytesN<32>);
}

#[contractimpl]
impl YearnStrategy for YearnStrategyContract {
    fn initialize(e: Env, vault: Address, owner: Address) {
        owner.require_auth();
        strategy::execute_initialize(&e, &vault, &owner);
        storage::extend_instance(&e);
    }

    fn deposit(e: Env, from: Address, amount: i128) -> i128 {
        from.require_auth();
        storage::extend_instance(&e);
        strategy::execute_deposit(&e, &from, amount)
    }

    fn redeem(e: Env, from: Address, shares: i128) -> i128 {
        from.require_auth();
        storage::extend_instance(&e);
        strategy::execute_redeem(&e, &from, shares)
    }

    fn redeem_underlying(e: Env, from: Address, amount: i128) -> i128 {
        from.require_auth();
        storage::extend_instance(&e);
        strategy::execute_redeem_underlying(&e, &from, amount)
    }

    fn price(e: Env) -> i128 {
        strategy::load_price(&e)
    }

    fn get_apr(e: Env) -> i128 {
        strategy::calc_apr(&e)
    }

    fn kind(_e: Env) -> StrategyKind {
        StrategyKind::NoRewards
    }

    fn redeem_rewards(e: Env, _from: Address) -> Vec<i128> {
        Vec::new(&e)
    }

    fn get_reward_tokens(e: Env) -> Vec<Address> {
        Vec::new(&e)
    }

    fn pull_stk_aave(_e: Env) -> i128 {
        0
    }

    fn strategy_token(e: Env) -> Address {
        strategy::load_config(&e).vault
    }

    fn token(e: Env) -> Address {
        strategy::load_config(&e).token
    }

    fn one_token(e: Env) -> i128 {
        strategy::load_config(&e).one_token
    }

    fn token_decimals(e: Env) -> u32 {
        strategy::load_config(&e).token_decimals
    }

    fn underlying_token(e: Env) -> Address {
        strategy::load_config(&e).token
    }

    fn yearn_vault(e: Env) -> Address {
        strategy::load_config(&e).vault
    }

    fn whitelisted_cdo(e: Env) -> Option<Address> {
        strategy::require_initialized(&e);
        storage::get_whitelisted_cdo(&e)
    }

    fn owner(e: Env) -> Address {
        strategy::load_owner(&e)
    }

    fn set_whitelisted_cdo(e: Env, caller: Address, cdo: Option<Address>) {
        storage::extend_instance(&e);
        strategy::require_owner(&e, &caller);
        strategy::execute_set_whitelisted_cdo(&e, &cdo);
    }

    fn transfer_token(e: Env, caller: Address, token: Address, amount: i128, to: Address) {
        storage::extend_instance(&e);
        strategy::require_owner(&e, &caller);
        strategy::execute_transfer_token(&e, &token, amount, &to);
    }

    fn refresh_allowance(e: Env, caller: Address) {
        storage::extend_instance(&e);
        strategy::require_owner(&e, &caller);
        strategy::execute_refresh_allowance(&e);
    }

    fn propose_owner(e: Env, caller: Address, new_owner: Address) {
        storage::extend_instance(&e);
        strategy::require_owner(&e, &caller);
        strategy::execute_propose_owner(&e, &caller, &new_owner);
    }

    fn accept_owner(e: Env, caller: Address) {
        storage::extend_instance(&e);
        strategy::execute_accept_owner(&e, &caller);
    }

    fn upgrade_wasm(e: Env, caller: Address, wasm_hash: BytesN<32>) {
        storage::extend_instance(&e);
        strategy::require_owner(&e, &caller);
        strategy::execute_upgrade_wasm(&e, &caller, &wasm_hash);
    }
}
