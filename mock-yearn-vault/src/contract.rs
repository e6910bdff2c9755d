use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::{contract, contractimpl, panic_with_error, token::TokenClient, Address, Env, MuxedAddress, String};
use stellar_tokens::fungible::{Base, FungibleToken};

use crate::{
    errors::MockVaultError,
    storage::{self, StrategyParams},
};

/// Yearn-style vault double. The vault contract is its own share token and
/// prices shares from an admin-controlled `price_per_share` instead of
/// tracking real strategy debt.
#[contract]
pub struct MockYearnVault;

#[contractimpl]
impl MockYearnVault {
    /// Deploys the vault over `token`, starting at a price of one underlying
    /// unit per share
    ///
    /// ### Arguments
    /// * `admin` - Address allowed to move the price, fees and strategy data
    /// * `token` - The underlying token accepted by the vault
    pub fn __constructor(e: Env, admin: Address, token: Address) {
        let decimals = TokenClient::new(&e, &token).decimals();
        let one_token = 10i128.pow(decimals);

        Base::set_metadata(
            &e,
            decimals,
            String::from_str(&e, "Mock Yearn Vault"),
            String::from_str(&e, "yvMOCK"),
        );

        storage::set_admin(&e, &admin);
        storage::set_token(&e, &token);
        storage::set_one_token(&e, &one_token);
        storage::set_price(&e, &one_token);
        storage::set_fees(&e, &0, &0);
        storage::extend_instance(&e);
    }

    pub fn token(e: Env) -> Address {
        storage::extend_instance(&e);
        storage::get_token(&e)
    }

    pub fn price_per_share(e: Env) -> i128 {
        storage::extend_instance(&e);
        storage::get_price(&e)
    }

    pub fn management_fee(e: Env) -> i128 {
        storage::get_management_fee(&e)
    }

    pub fn performance_fee(e: Env) -> i128 {
        storage::get_performance_fee(&e)
    }

    /// Strategy at `index` of the withdrawal queue, `None` past the end
    pub fn withdrawal_queue(e: Env, index: u32) -> Option<Address> {
        storage::get_queue(&e).get(index)
    }

    pub fn expected_return(e: Env, strategy: Address) -> i128 {
        Self::load_strategy(&e, &strategy).expected_return
    }

    pub fn credit_available(e: Env, strategy: Address) -> i128 {
        Self::load_strategy(&e, &strategy).credit_available
    }

    /// Pulls `amount` underlying from `from` through the allowance `from`
    /// granted the vault and mints shares at the current price
    ///
    /// ### Returns
    /// The number of shares minted to `from`
    pub fn deposit(e: Env, from: Address, amount: i128) -> i128 {
        from.require_auth();
        if amount <= 0 {
            panic_with_error!(e, MockVaultError::InvalidAmount);
        }

        let price = storage::get_price(&e);
        if price == 0 {
            panic_with_error!(e, MockVaultError::InvalidPrice);
        }
        let shares = amount.fixed_div_floor(&e, &price, &storage::get_one_token(&e));

        let vault = e.current_contract_address();
        TokenClient::new(&e, &storage::get_token(&e)).transfer_from(&vault, &from, &vault, &amount);
        Base::mint(&e, &from, shares);

        storage::extend_instance(&e);
        shares
    }

    /// Burns `shares` from `from` and pays out underlying at the current price
    ///
    /// ### Returns
    /// The amount of underlying sent to `from`
    pub fn withdraw(e: Env, from: Address, shares: i128) -> i128 {
        if shares <= 0 {
            panic_with_error!(e, MockVaultError::InvalidAmount);
        }

        let price = storage::get_price(&e);
        let amount = shares.fixed_mul_floor(&e, &price, &storage::get_one_token(&e));

        Base::burn(&e, &from, shares);
        TokenClient::new(&e, &storage::get_token(&e)).transfer(
            &e.current_contract_address(),
            &from,
            &amount,
        );

        storage::extend_instance(&e);
        amount
    }

    /// (Admin only) Set the price of one share in underlying base units.
    /// A zero price is accepted so callers can exercise their own guards.
    pub fn set_price_per_share(e: Env, price: i128) {
        storage::get_admin(&e).require_auth();
        if price < 0 {
            panic_with_error!(e, MockVaultError::InvalidPrice);
        }
        storage::set_price(&e, &price);
    }

    /// (Admin only) Set the management and performance fees, in basis points
    pub fn set_fees(e: Env, management_fee: i128, performance_fee: i128) {
        storage::get_admin(&e).require_auth();
        storage::set_fees(&e, &management_fee, &performance_fee);
    }

    /// (Admin only) Append a strategy to the withdrawal queue, or update the
    /// reported figures of one already queued
    pub fn add_strategy(e: Env, strategy: Address, expected_return: i128, credit_available: i128) {
        storage::get_admin(&e).require_auth();

        if storage::get_strategy(&e, &strategy).is_none() {
            let mut queue = storage::get_queue(&e);
            queue.push_back(strategy.clone());
            storage::set_queue(&e, &queue);
        }
        storage::set_strategy(
            &e,
            &strategy,
            &StrategyParams {
                expected_return,
                credit_available,
            },
        );
    }
}

impl MockYearnVault {
    fn load_strategy(e: &Env, strategy: &Address) -> StrategyParams {
        match storage::get_strategy(e, strategy) {
            Some(params) => params,
            None => panic_with_error!(e, MockVaultError::StrategyNotFound),
        }
    }
}

#[contractimpl(contracttrait)]
impl FungibleToken for MockYearnVault {
    type ContractType = Base;
}
