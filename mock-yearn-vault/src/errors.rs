use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum MockVaultError {
    InvalidAmount = 900,
    InvalidPrice = 901,
    StrategyNotFound = 902,
}
