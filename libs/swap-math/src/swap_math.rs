use crate::full_math::{checked_mul_div_rounding_up, mul_div_wide, u128_from_u256};
use soroban_fixed_point_math::FixedPoint;
use soroban_sdk::{Env, U256};
use swap_types::FEE_DENOMINATOR;

/// Output of an exact-input constant-product swap (rounds down)
///
/// `amount_out = amount_in * (D - fee) * reserve_out / (reserve_in * D + amount_in * (D - fee))`
///
/// This is `reserve_out - k / (reserve_in + amount_in_after_fee)` with the
/// quotient rounded in the pool's favor. The result is always strictly below
/// `reserve_out`.
///
/// # Arguments
/// * `amount_in` - Gross input amount, fee included
/// * `reserve_in` - Reserve of the asset being paid in
/// * `reserve_out` - Reserve of the asset being paid out
/// * `fee_bps` - Fee in basis points (e.g., 30 = 0.3%)
pub fn get_amount_out(
    env: &Env,
    amount_in: u128,
    reserve_in: u128,
    reserve_out: u128,
    fee_bps: u32,
) -> u128 {
    if reserve_in == 0 || reserve_out == 0 {
        panic!("Insufficient liquidity");
    }
    if fee_bps >= FEE_DENOMINATOR {
        panic!("Invalid fee");
    }

    // Below 2^142 each; the product with reserve_out can exceed 256 bits
    let amount_in_with_fee = U256::from_u128(env, amount_in)
        .mul(&U256::from_u32(env, FEE_DENOMINATOR - fee_bps));
    let denominator = U256::from_u128(env, reserve_in)
        .mul(&U256::from_u32(env, FEE_DENOMINATOR))
        .add(&amount_in_with_fee);

    u128_from_u256(&mul_div_wide(env, reserve_out, &amount_in_with_fee, &denominator))
}

/// Input needed for an exact-output constant-product swap (rounds up)
///
/// Computed in two ceiling steps: the net input that moves the curve far
/// enough, then the gross input that leaves that much after the fee. Swapping
/// the returned amount yields at least `amount_out`.
///
/// Returns None if the required input does not fit in u128.
pub fn get_amount_in(
    env: &Env,
    amount_out: u128,
    reserve_in: u128,
    reserve_out: u128,
    fee_bps: u32,
) -> Option<u128> {
    if reserve_in == 0 || amount_out >= reserve_out {
        panic!("Insufficient liquidity");
    }
    if fee_bps >= FEE_DENOMINATOR {
        panic!("Invalid fee");
    }

    let net_in = checked_mul_div_rounding_up(env, reserve_in, amount_out, reserve_out - amount_out)?;
    checked_mul_div_rounding_up(
        env,
        net_in,
        FEE_DENOMINATOR as u128,
        (FEE_DENOMINATOR - fee_bps) as u128,
    )
}

/// Fee retained by the pool on a gross input amount (rounds up)
///
/// Split at the denominator so the fixed-point product never sees more than
/// one denominator's worth of input. Returns None for a negative amount or
/// on overflow.
pub fn swap_fee(amount_in: i128, fee_bps: u32) -> Option<i128> {
    if amount_in < 0 {
        return None;
    }
    let denominator = FEE_DENOMINATOR as i128;
    let fee_bps = fee_bps as i128;

    let whole = (amount_in / denominator).checked_mul(fee_bps)?;
    let rest = (amount_in % denominator).fixed_mul_ceil(fee_bps, denominator)?;
    whole.checked_add(rest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::full_math::product;
    use soroban_sdk::Env;

    const FEE_30: u32 = 30;

    #[test]
    fn test_get_amount_out_reference_scenario() {
        let env = Env::default();
        // 10 in against (100, 100) at 0.3%: 997000 / 109970 = 9.06
        let out = get_amount_out(&env, 10, 100, 100, FEE_30);
        assert_eq!(out, 9);

        // Reserves become (110, 91), k grows from 10000 to 10010
        assert!(110 * 91 >= 100 * 100);
    }

    #[test]
    fn test_get_amount_out_no_fee() {
        let env = Env::default();
        // Fee-less: 100 - 10000 / 110 = 9.09 -> 9
        assert_eq!(get_amount_out(&env, 10, 100, 100, 0), 9);
        // Doubling the input reserve halves the output reserve
        assert_eq!(get_amount_out(&env, 1000, 1000, 1000, 0), 500);
    }

    #[test]
    fn test_get_amount_out_fee_reduces_output() {
        let env = Env::default();
        let no_fee = get_amount_out(&env, 1_000_000, 10_000_000, 10_000_000, 0);
        let with_fee = get_amount_out(&env, 1_000_000, 10_000_000, 10_000_000, FEE_30);
        assert!(with_fee < no_fee);
    }

    #[test]
    fn test_get_amount_out_dust() {
        let env = Env::default();
        // A single unit against a deep pool rounds to nothing
        assert_eq!(get_amount_out(&env, 1, 1_000_000, 1_000_000, FEE_30), 0);
    }

    #[test]
    fn test_get_amount_out_never_drains() {
        let env = Env::default();
        // An enormous input still leaves at least one unit behind
        let out = get_amount_out(&env, u128::MAX >> 1, 100, 100, 0);
        assert_eq!(out, 99);
    }

    #[test]
    fn test_get_amount_out_token_scale() {
        let env = Env::default();
        let unit = 10u128.pow(18);
        // 10 tokens against (100, 100) tokens at 18 decimals
        let out = get_amount_out(&env, 10 * unit, 100 * unit, 100 * unit, FEE_30);
        // 9.066108938801491315 tokens
        assert!(out > 9 * unit && out < 10 * unit);

        let k_before = product(&env, 100 * unit, 100 * unit);
        let k_after = product(&env, 110 * unit, 100 * unit - out);
        assert!(k_after >= k_before);
    }

    #[test]
    fn test_get_amount_out_preserves_product() {
        let env = Env::default();
        let cases: [(u128, u128, u128); 4] = [
            (1, 2, 3),
            (37, 1_000, 7),
            (5_000, 12_345, 67_890),
            (999_999, 1_000_000, 1_000_000),
        ];
        for (amount_in, reserve_in, reserve_out) in cases {
            for fee in [0u32, 5, 30, 100] {
                let out = get_amount_out(&env, amount_in, reserve_in, reserve_out, fee);
                assert!(out < reserve_out);
                let k_before = reserve_in * reserve_out;
                let k_after = (reserve_in + amount_in) * (reserve_out - out);
                assert!(k_after >= k_before, "k decreased for {:?}", (amount_in, reserve_in, reserve_out, fee));
            }
        }
    }

    #[test]
    #[should_panic(expected = "Insufficient liquidity")]
    fn test_get_amount_out_empty_reserves() {
        let env = Env::default();
        get_amount_out(&env, 10, 0, 0, FEE_30);
    }

    #[test]
    fn test_get_amount_in_covers_output() {
        let env = Env::default();
        let amount_in = get_amount_in(&env, 9, 100, 100, FEE_30).unwrap();
        // ceil(100 * 9 / 91) = 10 net, ceil(10 * 10000 / 9970) = 11 gross
        assert_eq!(amount_in, 11);
        assert!(get_amount_out(&env, amount_in, 100, 100, FEE_30) >= 9);
    }

    #[test]
    fn test_get_amount_in_round_trip() {
        let env = Env::default();
        let reserve_in = 5_000_000u128;
        let reserve_out = 2_000_000u128;
        for amount_out in [1u128, 17, 1_000, 250_000, 1_999_999] {
            let amount_in = get_amount_in(&env, amount_out, reserve_in, reserve_out, FEE_30).unwrap();
            assert!(get_amount_out(&env, amount_in, reserve_in, reserve_out, FEE_30) >= amount_out);
        }
    }

    #[test]
    #[should_panic(expected = "Insufficient liquidity")]
    fn test_get_amount_in_whole_reserve() {
        let env = Env::default();
        get_amount_in(&env, 100, 100, 100, FEE_30);
    }

    #[test]
    fn test_get_amount_in_overflow() {
        let env = Env::default();
        // Buying all but one unit of a huge reserve against a huge input reserve
        assert_eq!(get_amount_in(&env, u128::MAX - 1, u128::MAX, u128::MAX, FEE_30), None);
    }

    #[test]
    fn test_get_amount_out_product_beyond_256_bits() {
        let env = Env::default();
        // 2^125 * 9970 * 2^120 does not fit in 256 bits
        let reserve = 1u128 << 120;
        let amount_in = 1u128 << 125;
        let out = get_amount_out(&env, amount_in, reserve, reserve, FEE_30);
        assert!(out < reserve);
        // 32 * 0.997 / (1 + 32 * 0.997) of the reserve
        assert!(out > reserve / 100 * 96);

        let k_before = product(&env, reserve, reserve);
        let k_after = product(&env, reserve + amount_in, reserve - out);
        assert!(k_after >= k_before);
    }

    #[test]
    fn test_swap_fee() {
        assert_eq!(swap_fee(10_000, FEE_30), Some(30));
        // 0.03 rounds up to 1
        assert_eq!(swap_fee(10, FEE_30), Some(1));
        assert_eq!(swap_fee(10, 0), Some(0));
        assert_eq!(swap_fee(0, FEE_30), Some(0));
        // 10_001 * 0.003 = 30.003
        assert_eq!(swap_fee(10_001, FEE_30), Some(31));
        assert_eq!(swap_fee(-1, FEE_30), None);
    }

    #[test]
    fn test_swap_fee_wide_input() {
        // amount_in * fee_bps alone would overflow i128
        let amount_in = 1i128 << 125;
        // Remainder 6432 contributes ceil(19.296) = 20
        assert_eq!(
            swap_fee(amount_in, FEE_30),
            Some(127_605_887_595_351_923_798_765_477_786_913_080)
        );
    }
}
