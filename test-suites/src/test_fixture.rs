use mock_yearn_vault::{MockYearnVault, MockYearnVaultClient};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::token::{StellarAssetClient, TokenClient};
use soroban_sdk::{Address, Env};
use yearn_strategy::testutils::create_strategy;
use yearn_strategy::YearnStrategyClient;

use crate::SCALAR_7;

/// Underlying every generated user starts with
pub const USER_FUNDS: i128 = 100_000 * SCALAR_7;

pub struct TestFixture<'a> {
    pub env: Env,
    pub owner: Address,
    pub users: Vec<Address>,
    pub token: TokenClient<'a>,
    pub token_admin: StellarAssetClient<'a>,
    pub vault: MockYearnVaultClient<'a>,
    pub strategy: YearnStrategyClient<'a>,
}

impl TestFixture<'_> {
    /// Underlying token, mock Yearn vault over it and an initialized strategy
    /// wrapping the vault. The owner administers all three.
    pub fn create<'a>() -> TestFixture<'a> {
        let e = Env::default();
        e.cost_estimate().budget().reset_unlimited();
        e.mock_all_auths();

        let owner = Address::generate(&e);

        let token_id = e.register_stellar_asset_contract_v2(owner.clone()).address();
        let token = TokenClient::new(&e, &token_id);
        let token_admin = StellarAssetClient::new(&e, &token_id);

        let vault_id = e.register(MockYearnVault, (owner.clone(), token_id.clone()));
        let vault = MockYearnVaultClient::new(&e, &vault_id);

        let (_, strategy) = create_strategy(&e);
        strategy.initialize(&vault_id, &owner);

        TestFixture {
            env: e,
            owner,
            users: vec![],
            token,
            token_admin,
            vault,
            strategy,
        }
    }

    /// Generate a user holding `USER_FUNDS` underlying
    pub fn create_user(&mut self) -> Address {
        let user = Address::generate(&self.env);
        self.token_admin.mint(&user, &USER_FUNDS);
        self.users.push(user.clone());
        user
    }

    /// Underlying and vault share balances of `address`
    pub fn balances(&self, address: &Address) -> (i128, i128) {
        (self.token.balance(address), self.vault.balance(address))
    }

    /// Underlying and vault share balances held by the strategy itself
    pub fn strategy_balances(&self) -> (i128, i128) {
        self.balances(&self.strategy.address)
    }

    /// Move the vault price and back the new price with underlying so every
    /// outstanding share stays redeemable
    pub fn set_price(&self, price: i128) {
        let supply = self.vault.total_supply();
        let required = supply * price / SCALAR_7;
        let held = self.token.balance(&self.vault.address);
        if required > held {
            self.token_admin.mint(&self.vault.address, &(required - held));
        }
        self.vault.set_price_per_share(&price);
    }
}
