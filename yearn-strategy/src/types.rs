use soroban_sdk::{contracttype, Address};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StrategyConfig {
    pub token: Address,      // Underlying token deposited into the vault
    pub token_decimals: u32, // Decimals of the underlying token
    pub one_token: i128,     // 10^token_decimals
    pub vault: Address,      // Yearn vault, also the share token handed to callers
    pub version: u32,        // Layout version of this record
}

/// Capability set of the strategy as seen by the coordinator
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StrategyKind {
    NoRewards, // Plain deposit/redeem forwarding, reward hooks are inert
}
