use crate::error::PoolError;
use swap_types::PoolState;

// ============================================================================
// RESERVE STATE MUTATORS
// ============================================================================
// Pure transitions over a PoolState value. The engines validate, move
// tokens, and then commit the returned state with a single set_state.
// Nothing here touches storage.
// ============================================================================

/// Deposit: both reserves and the share supply grow
pub fn apply_deposit(
    state: &PoolState,
    amount_x: i128,
    amount_y: i128,
    shares: i128,
) -> Result<PoolState, PoolError> {
    if amount_x < 0 || amount_y < 0 || shares < 0 {
        return Err(PoolError::InvalidAmount);
    }

    Ok(PoolState {
        reserve_x: checked_add(state.reserve_x, amount_x)?,
        reserve_y: checked_add(state.reserve_y, amount_y)?,
        total_shares: checked_add(state.total_shares, shares)?,
    })
}

/// Swap settlement: the input side grows by `amount_in`, the output side
/// shrinks by `amount_out`
pub fn apply_swap_result(
    state: &PoolState,
    x_to_y: bool,
    amount_in: i128,
    amount_out: i128,
) -> Result<PoolState, PoolError> {
    if amount_in < 0 || amount_out < 0 {
        return Err(PoolError::InvalidAmount);
    }

    let (reserve_in, reserve_out) = state.reserves_for(x_to_y);
    if amount_out >= reserve_out {
        return Err(PoolError::InsufficientLiquidity);
    }

    let reserve_in = checked_add(reserve_in, amount_in)?;
    let reserve_out = reserve_out - amount_out;

    let (reserve_x, reserve_y) = if x_to_y {
        (reserve_in, reserve_out)
    } else {
        (reserve_out, reserve_in)
    };

    Ok(PoolState {
        reserve_x,
        reserve_y,
        total_shares: state.total_shares,
    })
}

/// Withdrawal: both reserves and the share supply shrink
pub fn apply_withdrawal(
    state: &PoolState,
    amount_x: i128,
    amount_y: i128,
    shares: i128,
) -> Result<PoolState, PoolError> {
    if amount_x < 0 || amount_y < 0 || shares < 0 {
        return Err(PoolError::InvalidAmount);
    }
    if amount_x > state.reserve_x || amount_y > state.reserve_y {
        return Err(PoolError::InsufficientLiquidity);
    }
    if shares > state.total_shares {
        return Err(PoolError::InsufficientShares);
    }

    Ok(PoolState {
        reserve_x: state.reserve_x - amount_x,
        reserve_y: state.reserve_y - amount_y,
        total_shares: state.total_shares - shares,
    })
}

fn checked_add(a: i128, b: i128) -> Result<i128, PoolError> {
    a.checked_add(b).ok_or(PoolError::ArithmeticOverflow)
}
