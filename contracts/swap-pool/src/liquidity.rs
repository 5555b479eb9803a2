use crate::error::PoolError;
use crate::guard::ReentrancyGuard;
use crate::storage::{get_config, get_shares, get_state, set_shares, set_state};
use crate::{events, invariants, ledger, reserves};
use soroban_sdk::{log, Address, Env};
use swap_math::{get_amounts_for_shares, get_initial_shares, get_shares_for_amounts, quote};
use swap_types::{PoolState, PoolStatus, MINIMUM_LIQUIDITY};

/// Deposit both assets and mint shares to `provider`
///
/// Any ratio is accepted; reserves grow by exactly the deposited amounts and
/// the provider is minted the smaller of the two proportional claims. The
/// first deposit into an empty pool locks MINIMUM_LIQUIDITY of its shares.
pub fn add_liquidity(
    env: &Env,
    provider: Address,
    amount_x: i128,
    amount_y: i128,
) -> Result<i128, PoolError> {
    let _guard = ReentrancyGuard::acquire(env)?;

    if amount_x <= 0 || amount_y <= 0 {
        return Err(PoolError::InvalidAmount);
    }

    let config = get_config(env)?;
    let state = get_state(env);

    let (shares, locked) = shares_for_deposit(env, &state, amount_x, amount_y)?;
    if shares == 0 {
        return Err(PoolError::InsufficientSharesMinted);
    }

    let new_state = reserves::apply_deposit(&state, amount_x, amount_y, shares + locked)?;
    let provider_shares = get_shares(env, &provider)
        .checked_add(shares)
        .ok_or(PoolError::ArithmeticOverflow)?;

    // Both legs are checked before either moves
    ledger::check_pull(env, &config.token_x, &provider, amount_x)?;
    ledger::check_pull(env, &config.token_y, &provider, amount_y)?;
    ledger::pull(env, &config.token_x, &provider, amount_x)?;
    ledger::pull(env, &config.token_y, &provider, amount_y)?;

    set_state(env, &new_state);
    set_shares(env, &provider, provider_shares);
    invariants::assert_state(env, &new_state);

    log!(env, "liquidity added", amount_x, amount_y, shares);
    events::liquidity_added(env, &provider, amount_x, amount_y);

    Ok(shares)
}

/// Burn `shares` of `provider` and pay out the pro-rata reserves
pub fn remove_liquidity(
    env: &Env,
    provider: Address,
    shares: i128,
) -> Result<(i128, i128), PoolError> {
    let _guard = ReentrancyGuard::acquire(env)?;

    if shares <= 0 {
        return Err(PoolError::InvalidAmount);
    }

    let config = get_config(env)?;
    let state = get_state(env);

    let balance = get_shares(env, &provider);
    if shares > balance {
        return Err(PoolError::InsufficientShares);
    }

    let (amount_x, amount_y) = get_amounts_for_shares(
        env,
        shares as u128,
        state.reserve_x as u128,
        state.reserve_y as u128,
        state.total_shares as u128,
    );
    // Bounded by the reserves
    let (amount_x, amount_y) = (amount_x as i128, amount_y as i128);
    if amount_x == 0 || amount_y == 0 {
        return Err(PoolError::InsufficientSharesBurned);
    }

    let new_state = reserves::apply_withdrawal(&state, amount_x, amount_y, shares)?;

    ledger::pay(env, &config.token_x, &provider, amount_x)?;
    ledger::pay(env, &config.token_y, &provider, amount_y)?;

    set_state(env, &new_state);
    set_shares(env, &provider, balance - shares);
    invariants::assert_state(env, &new_state);

    log!(env, "liquidity removed", shares, amount_x, amount_y);
    events::liquidity_removed(env, &provider, shares, amount_x, amount_y);

    Ok((amount_x, amount_y))
}

/// Amount of Y that matches `amount_x` at the current reserve ratio
pub fn quote_deposit(env: &Env, amount_x: i128) -> Result<i128, PoolError> {
    if amount_x <= 0 {
        return Err(PoolError::InvalidAmount);
    }

    get_config(env)?;
    let state = get_state(env);
    if state.status() == PoolStatus::Empty {
        return Err(PoolError::InsufficientLiquidity);
    }

    let amount_y = quote(
        env,
        amount_x as u128,
        state.reserve_x as u128,
        state.reserve_y as u128,
    )
    .ok_or(PoolError::ArithmeticOverflow)?;

    i128::try_from(amount_y).map_err(|_| PoolError::ArithmeticOverflow)
}

/// (shares credited to the provider, shares locked in the pool)
fn shares_for_deposit(
    env: &Env,
    state: &PoolState,
    amount_x: i128,
    amount_y: i128,
) -> Result<(i128, i128), PoolError> {
    if state.total_shares == 0 {
        let shares = to_shares(get_initial_shares(env, amount_x as u128, amount_y as u128))?;
        if shares <= MINIMUM_LIQUIDITY {
            return Err(PoolError::InsufficientSharesMinted);
        }
        return Ok((shares - MINIMUM_LIQUIDITY, MINIMUM_LIQUIDITY));
    }

    let shares = get_shares_for_amounts(
        env,
        amount_x as u128,
        amount_y as u128,
        state.reserve_x as u128,
        state.reserve_y as u128,
        state.total_shares as u128,
    )
    .ok_or(PoolError::ArithmeticOverflow)?;

    Ok((to_shares(shares)?, 0))
}

fn to_shares(shares: u128) -> Result<i128, PoolError> {
    i128::try_from(shares).map_err(|_| PoolError::ArithmeticOverflow)
}
