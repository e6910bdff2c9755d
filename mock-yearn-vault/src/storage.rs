use soroban_sdk::{contracttype, unwrap::UnwrapOptimized, Address, Env, Symbol, Vec};

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct StrategyParams {
    pub expected_return: i128,  // Return reported by the strategy for the current period
    pub credit_available: i128, // Credit the vault would extend to the strategy
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub enum MockVaultDataKey {
    Strategy(Address), // Stores StrategyParams
}

const ONE_DAY_LEDGERS: u32 = 17280; // assumes 5s a ledger
const LEDGER_THRESHOLD_INSTANCE: u32 = ONE_DAY_LEDGERS * 30; // ~ 30 days
const LEDGER_BUMP_INSTANCE: u32 = LEDGER_THRESHOLD_INSTANCE + ONE_DAY_LEDGERS; // ~ 31 days

const ADMIN: &str = "Admin";
const TOKEN: &str = "Token";
const ONE_TOKEN: &str = "OneToken";
const PRICE: &str = "Price";
const MANAGEMENT_FEE: &str = "MgmtFee";
const PERFORMANCE_FEE: &str = "PerfFee";
const QUEUE: &str = "Queue";

pub fn extend_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(LEDGER_THRESHOLD_INSTANCE, LEDGER_BUMP_INSTANCE);
}

pub fn get_admin(e: &Env) -> Address {
    e.storage().instance().get(&Symbol::new(e, ADMIN)).unwrap_optimized()
}

pub fn set_admin(e: &Env, admin: &Address) {
    e.storage().instance().set(&Symbol::new(e, ADMIN), admin);
}

pub fn get_token(e: &Env) -> Address {
    e.storage().instance().get(&Symbol::new(e, TOKEN)).unwrap_optimized()
}

pub fn set_token(e: &Env, token: &Address) {
    e.storage().instance().set(&Symbol::new(e, TOKEN), token);
}

pub fn get_one_token(e: &Env) -> i128 {
    e.storage().instance().get(&Symbol::new(e, ONE_TOKEN)).unwrap_optimized()
}

pub fn set_one_token(e: &Env, one_token: &i128) {
    e.storage().instance().set(&Symbol::new(e, ONE_TOKEN), one_token);
}

pub fn get_price(e: &Env) -> i128 {
    e.storage().instance().get(&Symbol::new(e, PRICE)).unwrap_optimized()
}

pub fn set_price(e: &Env, price: &i128) {
    e.storage().instance().set(&Symbol::new(e, PRICE), price);
}

pub fn get_management_fee(e: &Env) -> i128 {
    e.storage()
        .instance()
        .get(&Symbol::new(e, MANAGEMENT_FEE))
        .unwrap_or(0)
}

pub fn get_performance_fee(e: &Env) -> i128 {
    e.storage()
        .instance()
        .get(&Symbol::new(e, PERFORMANCE_FEE))
        .unwrap_or(0)
}

pub fn set_fees(e: &Env, management_fee: &i128, performance_fee: &i128) {
    e.storage()
        .instance()
        .set(&Symbol::new(e, MANAGEMENT_FEE), management_fee);
    e.storage()
        .instance()
        .set(&Symbol::new(e, PERFORMANCE_FEE), performance_fee);
}

pub fn get_queue(e: &Env) -> Vec<Address> {
    e.storage()
        .instance()
        .get(&Symbol::new(e, QUEUE))
        .unwrap_or(Vec::new(e))
}

pub fn set_queue(e: &Env, queue: &Vec<Address>) {
    e.storage().instance().set(&Symbol::new(e, QUEUE), queue);
}

pub fn get_strategy(e: &Env, strategy: &Address) -> Option<StrategyParams> {
    e.storage()
        .instance()
        .get(&MockVaultDataKey::Strategy(strategy.clone()))
}

pub fn set_strategy(e: &Env, strategy: &Address, params: &StrategyParams) {
    e.storage()
        .instance()
        .set(&MockVaultDataKey::Strategy(strategy.clone()), params);
}
