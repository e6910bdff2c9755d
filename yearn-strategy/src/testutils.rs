#![cfg(feature = "testutils")]

use crate::{YearnStrategyClient, YearnStrategyContract};
use soroban_sdk::{Address, Env};

/// Register a strategy that still has to be initialized
pub fn create_strategy<'a>(e: &Env) -> (Address, YearnStrategyClient<'a>) {
    let address = e.register(YearnStrategyContract {}, ());
    let client = YearnStrategyClient::new(e, &address);
    (address, client)
}
