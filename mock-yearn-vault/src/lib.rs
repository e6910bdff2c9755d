#![no_std]

mod contract;
mod errors;
mod storage;
mod token;

pub use contract::{MockYearnVault, MockYearnVaultClient};
pub use errors::MockVaultError;
pub use storage::StrategyParams;
#[cfg(any(test, feature = "testutils"))]
pub use token::{MockToken, MockTokenClient};
