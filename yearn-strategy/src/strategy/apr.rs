use crate::constants::{MAX_BPS, SCALAR_APR};
use crate::dependencies::YearnVaultClient;
use crate::errors::StrategyError;
use crate::strategy::{load_config, require_math};
use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::{log, panic_with_error, Env};

/// Best-effort APR of the vault, scaled by `SCALAR_APR`.
///
/// Averages `expected_return / credit_available` over every strategy in the
/// vault's withdrawal queue, unweighted, then removes the performance and
/// management fees from the gross average.
///
/// ### Panics
/// With `ArithmeticFault` if the queue is empty or any strategy reports zero
/// credit available. Intermediate products widen to 256 bits, so large
/// returns and credit lines do not fault.
pub fn calc_apr(e: &Env) -> i128 {
    let config = load_config(e);
    let vault = YearnVaultClient::new(e, &config.vault);

    let mut total: i128 = 0;
    let mut count: i128 = 0;
    let mut index: u32 = 0;
    while let Some(strategy) = vault.withdrawal_queue(&index) {
        let expected_return = vault.expected_return(&strategy);
        let credit_available = vault.credit_available(&strategy);
        if credit_available == 0 {
            panic_with_error!(e, StrategyError::ArithmeticFault);
        }
        let strategy_apr = expected_return.fixed_div_floor(e, &credit_available, &SCALAR_APR);
        total = require_math(e, total.checked_add(strategy_apr));
        count += 1;
        index += 1;
    }

    let gross_apr = require_math(e, total.checked_div(count));
    let performance_cut = gross_apr.fixed_mul_floor(e, &vault.performance_fee(), &MAX_BPS);
    let management_cut = gross_apr.fixed_mul_floor(e, &vault.management_fee(), &MAX_BPS);
    log!(e, "apr over {} strategies, gross {}", count, gross_apr);

    gross_apr - performance_cut - management_cut
}
