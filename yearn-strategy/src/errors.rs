use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum StrategyError {
    // Lifecycle
    AlreadyInitialized = 500,
    NotInitialized = 501,

    // Access control
    Unauthorized = 502,
    InvalidAddress = 503,

    // Amounts and math
    InvalidAmount = 504,
    ArithmeticFault = 505,

    // Admin sweep
    Reentrancy = 506,
}
