use crate::error::PoolError;
use crate::guard::ReentrancyGuard;
use crate::invariants::{assert_swap, swap_output_bounded};
use crate::storage::{get_config, get_state, set_state};
use crate::{events, ledger, reserves};
use soroban_sdk::{log, Address, Env};
use swap_math::{get_amount_in, get_amount_out, swap_fee};
use swap_types::{PoolConfig, PoolState, SwapQuote};

/// Execute an exact-input swap
///
/// Pulls `amount_in` of the input asset from `caller` and pays the output to
/// `recipient`. An output below `min_amount_out` fails before any transfer.
/// The reserves are committed only after both transfers succeed, then the
/// constant product is checked against the pre-swap state.
pub fn execute_swap(
    env: &Env,
    caller: Address,
    amount_in: i128,
    min_amount_out: i128,
    x_to_y: bool,
    recipient: Address,
) -> Result<i128, PoolError> {
    let _guard = ReentrancyGuard::acquire(env)?;

    if amount_in <= 0 {
        return Err(PoolError::InvalidAmount);
    }

    let config = get_config(env)?;
    let state = get_state(env);

    let amount_out = compute_amount_out(env, &config, &state, amount_in, x_to_y)?;
    if amount_out < min_amount_out {
        return Err(PoolError::InsufficientOutputAmount);
    }
    let new_state = reserves::apply_swap_result(&state, x_to_y, amount_in, amount_out)?;

    let (token_in, token_out) = config.tokens_for(x_to_y);
    ledger::check_pull(env, token_in, &caller, amount_in)?;
    ledger::pull(env, token_in, &caller, amount_in)?;
    ledger::pay(env, token_out, &recipient, amount_out)?;

    set_state(env, &new_state);
    assert_swap(env, &state, &new_state);

    log!(env, "swapped", x_to_y, amount_in, amount_out);
    events::swapped(env, &caller, &recipient, x_to_y, amount_in, amount_out);

    Ok(amount_out)
}

/// Price an exact-input swap without executing it
pub fn quote_swap(env: &Env, amount_in: i128, x_to_y: bool) -> Result<SwapQuote, PoolError> {
    if amount_in <= 0 {
        return Err(PoolError::InvalidAmount);
    }

    let config = get_config(env)?;
    let state = get_state(env);

    let amount_out = compute_amount_out(env, &config, &state, amount_in, x_to_y)?;
    let fee = swap_fee(amount_in, config.fee_bps).ok_or(PoolError::ArithmeticOverflow)?;

    Ok(SwapQuote { amount_out, fee })
}

/// Input that buys at least `amount_out` of the output asset
pub fn quote_amount_in(env: &Env, amount_out: i128, x_to_y: bool) -> Result<i128, PoolError> {
    if amount_out <= 0 {
        return Err(PoolError::InvalidAmount);
    }

    let config = get_config(env)?;
    let state = get_state(env);

    let (reserve_in, reserve_out) = state.reserves_for(x_to_y);
    if reserve_in <= 0 || reserve_out <= 0 || amount_out >= reserve_out {
        return Err(PoolError::InsufficientLiquidity);
    }

    let amount_in = get_amount_in(
        env,
        amount_out as u128,
        reserve_in as u128,
        reserve_out as u128,
        config.fee_bps,
    )
    .ok_or(PoolError::ArithmeticOverflow)?;

    i128::try_from(amount_in).map_err(|_| PoolError::ArithmeticOverflow)
}

/// Output for `amount_in` against the current reserves
///
/// Fails with InsufficientLiquidity on an empty pool and when the output
/// would round to zero or drain the output reserve.
fn compute_amount_out(
    env: &Env,
    config: &PoolConfig,
    state: &PoolState,
    amount_in: i128,
    x_to_y: bool,
) -> Result<i128, PoolError> {
    let (reserve_in, reserve_out) = state.reserves_for(x_to_y);
    if reserve_in <= 0 || reserve_out <= 0 {
        return Err(PoolError::InsufficientLiquidity);
    }

    // Strictly below reserve_out, so it fits back into i128
    let amount_out = get_amount_out(
        env,
        amount_in as u128,
        reserve_in as u128,
        reserve_out as u128,
        config.fee_bps,
    ) as i128;

    if !swap_output_bounded(amount_out, reserve_out) {
        return Err(PoolError::InsufficientLiquidity);
    }
    Ok(amount_out)
}
