// Fee precision
pub const MAX_BPS: i128 = 10_000; // 100% in basis points
// APR precision
pub const SCALAR_APR: i128 = 100_000_000_000_000_000_000; // 20 decimal places
// Storage layout of StrategyConfig
pub const CONFIG_VERSION: u32 = 1;
