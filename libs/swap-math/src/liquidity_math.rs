use crate::full_math::{checked_mul_div, mul_div, sqrt_product};
use soroban_sdk::Env;

/// Shares minted for the first deposit into an empty pool
///
/// Geometric mean of the two amounts, so the share count does not depend on
/// the initial price.
pub fn get_initial_shares(env: &Env, amount_x: u128, amount_y: u128) -> u128 {
    sqrt_product(env, amount_x, amount_y)
}

/// Shares minted for a deposit into a funded pool (rounds down)
///
/// Each asset entitles the provider to `amount * total_shares / reserve`;
/// the smaller claim is minted, so an off-ratio deposit can never dilute
/// existing holders.
///
/// Returns None if a claim does not fit in u128.
pub fn get_shares_for_amounts(
    env: &Env,
    amount_x: u128,
    amount_y: u128,
    reserve_x: u128,
    reserve_y: u128,
    total_shares: u128,
) -> Option<u128> {
    if reserve_x == 0 || reserve_y == 0 {
        panic!("Empty reserves");
    }

    let shares_x = checked_mul_div(env, amount_x, total_shares, reserve_x)?;
    let shares_y = checked_mul_div(env, amount_y, total_shares, reserve_y)?;
    Some(shares_x.min(shares_y))
}

/// Reserve amounts owed for burning `shares` (rounds down)
///
/// # Returns
/// (amount_x, amount_y)
pub fn get_amounts_for_shares(
    env: &Env,
    shares: u128,
    reserve_x: u128,
    reserve_y: u128,
    total_shares: u128,
) -> (u128, u128) {
    if shares > total_shares {
        panic!("Shares exceed supply");
    }

    (
        mul_div(env, shares, reserve_x, total_shares),
        mul_div(env, shares, reserve_y, total_shares),
    )
}

/// Amount of the other asset that matches `amount_a` at the current reserve
/// ratio (rounds down)
///
/// Returns None if the result does not fit in u128.
pub fn quote(env: &Env, amount_a: u128, reserve_a: u128, reserve_b: u128) -> Option<u128> {
    if reserve_a == 0 || reserve_b == 0 {
        panic!("Empty reserves");
    }
    checked_mul_div(env, amount_a, reserve_b, reserve_a)
}
