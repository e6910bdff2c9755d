use soroban_sdk::{Address, Env, Symbol};
use crate::types::StrategyConfig;

/********** Ledger Thresholds **********/

const ONE_DAY_LEDGERS: u32 = 17280; // assumes 5s a ledger
const LEDGER_THRESHOLD_INSTANCE: u32 = ONE_DAY_LEDGERS * 30; // ~ 30 days
const LEDGER_BUMP_INSTANCE: u32 = LEDGER_THRESHOLD_INSTANCE + ONE_DAY_LEDGERS; // ~ 31 days

/********** Storage Types **********/

const CONFIG_KEY: &str = "Config";
const OWNER_KEY: &str = "Owner";
const PROPOSED_OWNER_KEY: &str = "PropOwner";
const WHITELISTED_CDO_KEY: &str = "WhitelistedCDO";
const SWEEP_LOCK_KEY: &str = "SweepLock";

/********** Storage **********/

/// Bump the instance rent for the contract
pub fn extend_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(LEDGER_THRESHOLD_INSTANCE, LEDGER_BUMP_INSTANCE);
}

/********** Strategy Config **********/

/// Checks if the strategy has been initialized
pub fn has_config(e: &Env) -> bool {
    e.storage().instance().has(&Symbol::new(e, CONFIG_KEY))
}

/// Fetch the strategy configuration, `None` before initialization
pub fn get_config(e: &Env) -> Option<StrategyConfig> {
    e.storage()
        .instance()
        .get::<Symbol, StrategyConfig>(&Symbol::new(e, CONFIG_KEY))
}

/// Set the strategy configuration
///
/// ### Arguments
/// * `config` - The strategy configuration
pub fn set_config(e: &Env, config: &StrategyConfig) {
    e.storage()
        .instance()
        .set::<Symbol, StrategyConfig>(&Symbol::new(e, CONFIG_KEY), config);
}

/********** Owner **********/

/// Fetch the current owner Address, `None` before initialization
pub fn get_owner(e: &Env) -> Option<Address> {
    e.storage()
        .instance()
        .get::<Symbol, Address>(&Symbol::new(e, OWNER_KEY))
}

/// Set a new owner
///
/// ### Arguments
/// * `new_owner` - The Address for the owner
pub fn set_owner(e: &Env, new_owner: &Address) {
    e.storage()
        .instance()
        .set::<Symbol, Address>(&Symbol::new(e, OWNER_KEY), new_owner);
}

/// Fetch the current proposed owner Address
pub fn get_proposed_owner(e: &Env) -> Option<Address> {
    e.storage()
        .temporary()
        .get(&Symbol::new(e, PROPOSED_OWNER_KEY))
}

/// Set a new proposed owner
///
/// ### Arguments
/// * `proposed_owner` - The Address for the proposed owner
pub fn set_proposed_owner(e: &Env, proposed_owner: &Address) {
    e.storage()
        .temporary()
        .set::<Symbol, Address>(&Symbol::new(e, PROPOSED_OWNER_KEY), proposed_owner);
    e.storage().temporary().extend_ttl(
        &Symbol::new(e, PROPOSED_OWNER_KEY),
        10 * ONE_DAY_LEDGERS,
        10 * ONE_DAY_LEDGERS,
    );
}

/// Delete the proposed owner
pub fn del_proposed_owner(e: &Env) {
    e.storage()
        .temporary()
        .remove(&Symbol::new(e, PROPOSED_OWNER_KEY));
}

/********** Whitelisted CDO **********/

/// Fetch the whitelisted CDO, `None` until the owner sets one
pub fn get_whitelisted_cdo(e: &Env) -> Option<Address> {
    e.storage()
        .instance()
        .get::<Symbol, Address>(&Symbol::new(e, WHITELISTED_CDO_KEY))
}

/// Set the whitelisted CDO
///
/// ### Arguments
/// * `cdo` - The coordinator address
pub fn set_whitelisted_cdo(e: &Env, cdo: &Address) {
    e.storage()
        .instance()
        .set::<Symbol, Address>(&Symbol::new(e, WHITELISTED_CDO_KEY), cdo);
}

/********** Sweep Lock **********/

pub fn is_sweep_locked(e: &Env) -> bool {
    e.storage()
        .instance()
        .get::<Symbol, bool>(&Symbol::new(e, SWEEP_LOCK_KEY))
        .unwrap_or(false)
}

pub fn set_sweep_lock(e: &Env, locked: bool) {
    e.storage()
        .instance()
        .set::<Symbol, bool>(&Symbol::new(e, SWEEP_LOCK_KEY), &locked);
}
