#![no_std]

mod constants;
mod errors;
pub mod storage;
mod contract;
mod strategy;
mod types;
mod dependencies;
pub mod testutils;
mod events;

pub use contract::*;
pub use constants::{MAX_BPS, SCALAR_APR};
pub use dependencies::YearnVaultClient;
pub use errors::StrategyError;
pub use types::*;
