#![cfg(any(test, feature = "testutils"))]

use soroban_sdk::{contract, contractimpl, Address, Env, MuxedAddress, String};
use stellar_tokens::fungible::{Base, FungibleToken};

use crate::storage;

/// Admin-minted SEP-41 token with configurable decimals, for underlyings the
/// Stellar Asset Contract cannot represent (anything but 7 decimals)
#[contract]
pub struct MockToken;

#[contractimpl]
impl MockToken {
    pub fn __constructor(e: Env, admin: Address, decimals: u32) {
        Base::set_metadata(
            &e,
            decimals,
            String::from_str(&e, "Mock Token"),
            String::from_str(&e, "MOCK"),
        );
        storage::set_admin(&e, &admin);
        storage::extend_instance(&e);
    }

    /// (Admin only) Mint `amount` to `to`
    pub fn mint(e: Env, to: Address, amount: i128) {
        storage::get_admin(&e).require_auth();
        Base::mint(&e, &to, amount);
    }
}

#[contractimpl(contracttrait)]
impl FungibleToken for MockToken {
    type ContractType = Base;
}
