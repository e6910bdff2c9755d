use soroban_sdk::{Address, BytesN, Env, Symbol};

pub struct StrategyEvents {}

impl StrategyEvents {
    /// Emitted when the strategy is initialized
    ///
    /// - topics - `["initialize"]`
    /// - data - `[vault: Address, token: Address, owner: Address]`
    ///
    /// ### Arguments
    /// * vault - The wrapped Yearn vault
    /// * token - The underlying token resolved from the vault
    /// * owner - The initial owner
    pub fn initialize(e: &Env, vault: Address, token: Address, owner: Address) {
        let topics = (Symbol::new(e, "initialize"),);
        e.events().publish(topics, (vault, token, owner));
    }

    /// Emitted when underlying is forwarded into the vault
    ///
    /// - topics - `["deposit", from: Address]`
    /// - data - `[amount: i128, shares: i128]`
    ///
    /// ### Arguments
    /// * from - The caller that supplied the underlying and received the shares
    /// * amount - The underlying amount deposited
    /// * shares - The vault shares minted and forwarded
    pub fn deposit(e: &Env, from: Address, amount: i128, shares: i128) {
        let topics = (Symbol::new(e, "deposit"), from);
        e.events().publish(topics, (amount, shares));
    }

    /// Emitted when shares are redeemed through the vault
    ///
    /// - topics - `["redeem", from: Address]`
    /// - data - `[shares: i128, amount: i128]`
    ///
    /// ### Arguments
    /// * from - The caller that supplied the shares and received the underlying
    /// * shares - The vault shares burned
    /// * amount - The underlying amount returned
    pub fn redeem(e: &Env, from: Address, shares: i128, amount: i128) {
        let topics = (Symbol::new(e, "redeem"), from);
        e.events().publish(topics, (shares, amount));
    }

    /// Emitted when the owner sweeps a token balance out of the strategy
    ///
    /// - topics - `["transfer_token", token: Address]`
    /// - data - `[to: Address, amount: i128]`
    pub fn transfer_token(e: &Env, token: Address, to: Address, amount: i128) {
        let topics = (Symbol::new(e, "transfer_token"), token);
        e.events().publish(topics, (to, amount));
    }

    /// Emitted when the whitelisted CDO is changed
    ///
    /// - topics - `["set_whitelisted_cdo"]`
    /// - data - `cdo: Address`
    pub fn set_whitelisted_cdo(e: &Env, cdo: Address) {
        let topics = (Symbol::new(e, "set_whitelisted_cdo"),);
        e.events().publish(topics, cdo);
    }

    /// Emitted when the vault allowance is granted again
    ///
    /// - topics - `["refresh_allowance"]`
    /// - data - `live_until_ledger: u32`
    pub fn refresh_allowance(e: &Env, live_until_ledger: u32) {
        let topics = (Symbol::new(e, "refresh_allowance"),);
        e.events().publish(topics, live_until_ledger);
    }

    /// Emitted when an ownership transfer is proposed
    ///
    /// - topics - `["propose_owner"]`
    /// - data - `[owner: Address, new_owner: Address]`
    ///
    /// ### Arguments
    /// * owner - The current owner
    /// * new_owner - The proposed owner
    pub fn propose_owner(e: &Env, owner: Address, new_owner: Address) {
        let topics = (Symbol::new(e, "propose_owner"),);
        e.events().publish(topics, (owner, new_owner));
    }

    /// Emitted when the proposed owner accepts ownership
    ///
    /// - topics - `["accept_owner"]`
    /// - data - `new_owner: Address`
    pub fn accept_owner(e: &Env, new_owner: Address) {
        let topics = (Symbol::new(e, "accept_owner"),);
        e.events().publish(topics, new_owner);
    }

    /// Emitted when the contract WASM is upgraded
    ///
    /// - topics - `["upgrade_wasm"]`
    /// - data - `[owner: Address, wasm_hash: BytesN<32>]`
    pub fn upgrade_wasm(e: &Env, owner: Address, wasm_hash: BytesN<32>) {
        let topics = (Symbol::new(e, "upgrade_wasm"),);
        e.events().publish(topics, (owner, wasm_hash));
    }
}
