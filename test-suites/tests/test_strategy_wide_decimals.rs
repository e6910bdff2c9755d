use mock_yearn_vault::{MockToken, MockTokenClient, MockYearnVault, MockYearnVaultClient};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env};
use yearn_strategy::testutils::create_strategy;
use yearn_strategy::YearnStrategyClient;

const SCALAR_18: i128 = 1_000_000_000_000_000_000;

struct WideFixture<'a> {
    user: Address,
    token: MockTokenClient<'a>,
    vault: MockYearnVaultClient<'a>,
    strategy: YearnStrategyClient<'a>,
}

/// Strategy over a vault whose underlying carries 18 decimals, with one user
/// holding 10,000 tokens
fn setup_wide_fixture<'a>(e: &Env) -> WideFixture<'a> {
    e.cost_estimate().budget().reset_unlimited();
    e.mock_all_auths();

    let owner = Address::generate(e);
    let token_id = e.register(MockToken, (owner.clone(), 18u32));
    let token = MockTokenClient::new(e, &token_id);
    let vault_id = e.register(MockYearnVault, (owner.clone(), token_id.clone()));
    let vault = MockYearnVaultClient::new(e, &vault_id);

    let (_, strategy) = create_strategy(e);
    strategy.initialize(&vault_id, &owner);

    let user = Address::generate(e);
    token.mint(&user, &(10_000 * SCALAR_18));

    WideFixture {
        user,
        token,
        vault,
        strategy,
    }
}

#[test]
fn test_initialize_reads_18_decimals() {
    let e = Env::default();
    let fixture = setup_wide_fixture(&e);

    assert_eq!(fixture.strategy.token_decimals(), 18);
    assert_eq!(fixture.strategy.one_token(), SCALAR_18);
    assert_eq!(fixture.strategy.price(), SCALAR_18);
}

#[test]
fn test_large_deposit_and_redeem_underlying() {
    let e = Env::default();
    let fixture = setup_wide_fixture(&e);
    let user = &fixture.user;
    let strategy_address = fixture.strategy.address.clone();

    // amount * one_token exceeds i128 for both calls below
    let shares = fixture.strategy.deposit(user, &(1_000 * SCALAR_18));
    assert_eq!(shares, 1_000 * SCALAR_18);

    // double the price and back every outstanding share
    fixture.token.mint(&fixture.vault.address, &(1_000 * SCALAR_18));
    fixture.vault.set_price_per_share(&(2 * SCALAR_18));

    let returned = fixture.strategy.redeem_underlying(user, &(500 * SCALAR_18));

    assert_eq!(returned, 500 * SCALAR_18);
    assert_eq!(fixture.vault.balance(user), 750 * SCALAR_18);
    assert_eq!(fixture.token.balance(user), 9_500 * SCALAR_18);
    assert_eq!(fixture.token.balance(&strategy_address), 0);
    assert_eq!(fixture.vault.balance(&strategy_address), 0);
}

#[test]
fn test_large_redeem_round_trip() {
    let e = Env::default();
    let fixture = setup_wide_fixture(&e);
    let user = &fixture.user;

    let shares = fixture.strategy.deposit(user, &(10_000 * SCALAR_18));
    let returned = fixture.strategy.redeem(user, &shares);

    assert_eq!(returned, 10_000 * SCALAR_18);
    assert_eq!(fixture.token.balance(user), 10_000 * SCALAR_18);
    assert_eq!(fixture.vault.balance(user), 0);
}
