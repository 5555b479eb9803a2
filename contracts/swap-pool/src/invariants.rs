// ============================================================================
// INVARIANTS MODULE
// ============================================================================
//
// Predicates over pool state that must hold after every committed call, and
// the assertions the engines run on them.
//
// INVARIANT CATEGORIES:
//
// 1. RESERVE INVARIANTS
//    - Reserves and share supply are never negative
//    - Reserves are both zero or both positive, and shares exist iff they are
//    - A funded pool keeps at least MINIMUM_LIQUIDITY shares outstanding
//
// 2. PRODUCT INVARIANT
//    - reserve_x * reserve_y never decreases across a swap
//
// 3. SWAP INVARIANTS
//    - Output is positive and strictly below the output reserve
//
// A violated invariant is a logic defect, never a caller error: the
// assertions panic with InvariantViolation and the transaction aborts.
//
// ============================================================================

use crate::error::PoolError;
use soroban_sdk::{panic_with_error, Env};
use swap_math::product;
use swap_types::{PoolState, MINIMUM_LIQUIDITY};

// ============================================================================
// RESERVE INVARIANTS
// ============================================================================

/// Invariant: no quantity is negative
///
/// Property:
///   reserve_x >= 0 && reserve_y >= 0 && total_shares >= 0
pub fn state_non_negative(state: &PoolState) -> bool {
    state.reserve_x >= 0 && state.reserve_y >= 0 && state.total_shares >= 0
}

/// Invariant: the pool never holds one-sided reserves
///
/// Property:
///   (reserve_x == 0) == (reserve_y == 0) == (total_shares == 0)
pub fn reserves_balanced(state: &PoolState) -> bool {
    let empty_x = state.reserve_x == 0;
    let empty_y = state.reserve_y == 0;
    let no_shares = state.total_shares == 0;
    empty_x == empty_y && empty_y == no_shares
}

/// Invariant: the locked first-deposit shares are never burned
///
/// Property:
///   total_shares == 0 || total_shares >= MINIMUM_LIQUIDITY
pub fn locked_shares_retained(state: &PoolState) -> bool {
    state.total_shares == 0 || state.total_shares >= MINIMUM_LIQUIDITY
}

// ============================================================================
// PRODUCT INVARIANT
// ============================================================================

/// Invariant: constant product is non-decreasing
///
/// Property:
///   after.reserve_x * after.reserve_y >= before.reserve_x * before.reserve_y
///
/// Evaluated over 256-bit products; both states must be non-negative.
pub fn product_non_decreasing(env: &Env, before: &PoolState, after: &PoolState) -> bool {
    if !state_non_negative(before) || !state_non_negative(after) {
        return false;
    }
    let k_before = product(env, before.reserve_x as u128, before.reserve_y as u128);
    let k_after = product(env, after.reserve_x as u128, after.reserve_y as u128);
    k_after >= k_before
}

// ============================================================================
// SWAP INVARIANTS
// ============================================================================

/// Invariant: swap output is payable and worth executing
///
/// Property:
///   0 < amount_out < reserve_out
pub fn swap_output_bounded(amount_out: i128, reserve_out: i128) -> bool {
    amount_out > 0 && amount_out < reserve_out
}

/// Invariant: a swap leaves the share supply untouched
pub fn swap_preserves_shares(before: &PoolState, after: &PoolState) -> bool {
    before.total_shares == after.total_shares
}

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Check a committed state; aborts with InvariantViolation
pub fn assert_state(env: &Env, state: &PoolState) {
    if !state_non_negative(state) || !reserves_balanced(state) || !locked_shares_retained(state) {
        panic_with_error!(env, PoolError::InvariantViolation);
    }
}

/// Check a committed swap against its pre-state; aborts with InvariantViolation
pub fn assert_swap(env: &Env, before: &PoolState, after: &PoolState) {
    assert_state(env, after);
    if !swap_preserves_shares(before, after) || !product_non_decreasing(env, before, after) {
        panic_with_error!(env, PoolError::InvariantViolation);
    }
}

// ============================================================================
// TESTS
// ============================================================================
