use soroban_sdk::{contractclient, Address, Env};

/// Yearn vault client interface. Share token methods (`balance`, `transfer`,
/// ...) are reached through the SEP-41 token client on the vault address.
#[contractclient(name = "Client")]
pub trait YearnVaultInterface {
    /// Returns the address of the underlying token accepted by the vault
    fn token(e: Env) -> Address;

    /// Pulls `amount` underlying from `from` using its allowance and mints shares to `from`
    fn deposit(e: Env, from: Address, amount: i128) -> i128;

    /// Burns `shares` held by `from` and sends the underlying they are worth to `from`
    fn withdraw(e: Env, from: Address, shares: i128) -> i128;

    /// Underlying base units per one full share
    fn price_per_share(e: Env) -> i128;

    /// Management fee in basis points
    fn management_fee(e: Env) -> i128;

    /// Performance fee in basis points
    fn performance_fee(e: Env) -> i128;

    /// Strategy at `index` of the withdrawal queue, `None` once the queue is exhausted
    fn withdrawal_queue(e: Env, index: u32) -> Option<Address>;

    fn expected_return(e: Env, strategy: Address) -> i128;

    fn credit_available(e: Env, strategy: Address) -> i128;
}
