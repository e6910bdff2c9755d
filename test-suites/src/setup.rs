use crate::test_fixture::TestFixture;
use crate::SCALAR_7;

/// Fixture with two funded users, the first of which already holds 1,000
/// underlying worth of vault shares deposited through the strategy
pub fn create_fixture_with_data<'a>() -> TestFixture<'a> {
    let mut fixture = TestFixture::create();

    let depositor = fixture.create_user();
    fixture.create_user();

    fixture.strategy.deposit(&depositor, &(1_000 * SCALAR_7));

    fixture
}
