use soroban_fixed_point_math::FixedPoint;
use test_suites::setup::create_fixture_with_data;
use test_suites::test_fixture::{TestFixture, USER_FUNDS};
use test_suites::SCALAR_7;

fn setup_fixture() -> TestFixture<'static> {
    TestFixture::create()
}

#[test]
fn test_deposit_forwards_shares_to_caller() {
    let mut fixture = setup_fixture();
    let user = fixture.create_user();

    let shares = fixture.strategy.deposit(&user, &(1_000 * SCALAR_7));

    // Price is 1.0, so shares mirror the deposit
    assert_eq!(shares, 1_000 * SCALAR_7);
    assert_eq!(
        fixture.balances(&user),
        (USER_FUNDS - 1_000 * SCALAR_7, 1_000 * SCALAR_7)
    );
    assert_eq!(fixture.token.balance(&fixture.vault.address), 1_000 * SCALAR_7);
    assert_eq!(fixture.strategy_balances(), (0, 0));
}

#[test]
fn test_redeem_returns_underlying_to_caller() {
    let fixture = create_fixture_with_data();
    let user = fixture.users[0].clone();

    let returned = fixture.strategy.redeem(&user, &(400 * SCALAR_7));

    assert_eq!(returned, 400 * SCALAR_7);
    assert_eq!(
        fixture.balances(&user),
        (USER_FUNDS - 600 * SCALAR_7, 600 * SCALAR_7)
    );
    assert_eq!(fixture.strategy_balances(), (0, 0));
}

#[test]
fn test_round_trip_at_constant_price() {
    let mut fixture = setup_fixture();
    let user = fixture.create_user();
    let amount = 2_500 * SCALAR_7 + 3;

    let shares = fixture.strategy.deposit(&user, &amount);
    assert_eq!(shares, amount);

    let returned = fixture.strategy.redeem(&user, &shares);
    assert_eq!(returned, amount);
    assert_eq!(fixture.balances(&user), (USER_FUNDS, 0));
    assert_eq!(fixture.strategy_balances(), (0, 0));
}

#[test]
fn test_zero_amounts_are_noops() {
    let fixture = create_fixture_with_data();
    let user = fixture.users[0].clone();
    let before = fixture.balances(&user);
    let vault_before = fixture.token.balance(&fixture.vault.address);

    assert_eq!(fixture.strategy.deposit(&user, &0), 0);
    assert_eq!(fixture.strategy.redeem(&user, &0), 0);
    assert_eq!(fixture.strategy.redeem_underlying(&user, &0), 0);

    assert_eq!(fixture.balances(&user), before);
    assert_eq!(fixture.token.balance(&fixture.vault.address), vault_before);
    assert_eq!(fixture.strategy_balances(), (0, 0));
}

#[test]
fn test_redeem_underlying_after_price_doubles() {
    let fixture = create_fixture_with_data();
    let user = fixture.users[0].clone();
    let (underlying_before, shares_before) = fixture.balances(&user);

    fixture.set_price(2 * SCALAR_7);
    assert_eq!(fixture.strategy.price(), 2 * SCALAR_7);

    let returned = fixture.strategy.redeem_underlying(&user, &(1_000 * SCALAR_7));

    assert_eq!(returned, 1_000 * SCALAR_7);
    let (underlying_after, shares_after) = fixture.balances(&user);
    assert_eq!(shares_before - shares_after, 500 * SCALAR_7);
    assert_eq!(underlying_after - underlying_before, 1_000 * SCALAR_7);
    assert_eq!(fixture.strategy_balances(), (0, 0));
}

#[test]
fn test_redeem_underlying_consumes_half_the_shares_at_double_price() {
    let mut fixture = setup_fixture();
    let user = fixture.create_user();
    fixture.strategy.deposit(&user, &(10_000 * SCALAR_7));
    let wanted = 777 * SCALAR_7 + 1;

    let shares_at_par = wanted.fixed_div_floor(SCALAR_7, SCALAR_7).unwrap();
    fixture.set_price(2 * SCALAR_7);
    let (_, shares_before) = fixture.balances(&user);
    fixture.strategy.redeem_underlying(&user, &wanted);
    let (_, shares_after) = fixture.balances(&user);

    assert_eq!(shares_before - shares_after, shares_at_par / 2);
}

#[test]
fn test_redeem_underlying_floors_shares() {
    let mut fixture = setup_fixture();
    let user = fixture.create_user();
    fixture.strategy.deposit(&user, &(1_000 * SCALAR_7));

    // 1.5 underlying per share
    fixture.set_price(1_5000000);
    let wanted = 100 * SCALAR_7 + 1;
    let (underlying_before, shares_before) = fixture.balances(&user);

    let returned = fixture.strategy.redeem_underlying(&user, &wanted);

    let expected_shares = wanted.fixed_div_floor(1_5000000, SCALAR_7).unwrap();
    let (underlying_after, shares_after) = fixture.balances(&user);
    assert_eq!(shares_before - shares_after, expected_shares);
    assert_eq!(underlying_after - underlying_before, returned);
    assert!(returned <= wanted);
    assert_eq!(fixture.strategy_balances(), (0, 0));
}

#[test]
fn test_deposit_at_higher_price_mints_fewer_shares() {
    let fixture = create_fixture_with_data();
    let user = fixture.users[1].clone();

    fixture.set_price(1_2500000);
    let shares = fixture.strategy.deposit(&user, &(500 * SCALAR_7));

    assert_eq!(shares, 400 * SCALAR_7);
    assert_eq!(fixture.vault.balance(&user), 400 * SCALAR_7);
    assert_eq!(fixture.strategy_balances(), (0, 0));
}

#[test]
fn test_price_is_read_from_vault_every_call() {
    let fixture = setup_fixture();

    assert_eq!(fixture.strategy.price(), SCALAR_7);
    fixture.vault.set_price_per_share(&1_0500000);
    assert_eq!(fixture.strategy.price(), 1_0500000);
    fixture.vault.set_price_per_share(&0_9900000);
    assert_eq!(fixture.strategy.price(), 0_9900000);
}

#[test]
fn test_balances_stay_zero_across_many_users() {
    let mut fixture = setup_fixture();
    let alice = fixture.create_user();
    let bob = fixture.create_user();

    fixture.strategy.deposit(&alice, &(3_000 * SCALAR_7));
    fixture.strategy.deposit(&bob, &(1_234 * SCALAR_7));
    assert_eq!(fixture.strategy_balances(), (0, 0));

    fixture.set_price(1_1000000);
    fixture.strategy.redeem(&alice, &(1_000 * SCALAR_7));
    fixture.strategy.redeem_underlying(&bob, &(500 * SCALAR_7));
    fixture.strategy.deposit(&alice, &(10 * SCALAR_7));

    assert_eq!(fixture.strategy_balances(), (0, 0));
}

#[test]
#[should_panic(expected = "Error(Contract, #505)")]
fn test_redeem_underlying_with_zero_price_faults() {
    let fixture = create_fixture_with_data();
    let user = fixture.users[0].clone();

    fixture.vault.set_price_per_share(&0);
    fixture.strategy.redeem_underlying(&user, &(100 * SCALAR_7));
}

#[test]
#[should_panic(expected = "Error(Contract, #504)")]
fn test_negative_deposit_rejected() {
    let mut fixture = setup_fixture();
    let user = fixture.create_user();

    fixture.strategy.deposit(&user, &-1);
}

#[test]
#[should_panic(expected = "Error(Contract, #504)")]
fn test_negative_redeem_rejected() {
    let fixture = create_fixture_with_data();
    let user = fixture.users[0].clone();

    fixture.strategy.redeem(&user, &-(SCALAR_7));
}

#[test]
#[should_panic]
fn test_deposit_beyond_balance_propagates_token_failure() {
    let mut fixture = setup_fixture();
    let user = fixture.create_user();

    fixture.strategy.deposit(&user, &(USER_FUNDS + 1));
}

#[test]
#[should_panic]
fn test_redeem_beyond_shares_propagates_vault_failure() {
    let fixture = create_fixture_with_data();
    let user = fixture.users[0].clone();

    fixture.strategy.redeem(&user, &(1_000 * SCALAR_7 + 1));
}
