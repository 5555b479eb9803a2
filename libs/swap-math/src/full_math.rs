use soroban_sdk::{Env, U256};

/// Operand width accepted by mul_div_wide
const WIDE_OPERAND_BITS: u32 = 190;

/// Multiply and divide with 256-bit intermediate precision (rounds down)
/// Returns (a * b) / denominator, or None if the quotient does not fit in u128
pub fn checked_mul_div(env: &Env, a: u128, b: u128, denominator: u128) -> Option<u128> {
    if denominator == 0 {
        panic!("Division by zero");
    }

    let product = U256::from_u128(env, a).mul(&U256::from_u128(env, b));
    product.div(&U256::from_u128(env, denominator)).to_u128()
}

/// Multiply and divide with 256-bit intermediate precision (rounds down)
/// Returns (a * b) / denominator
pub fn mul_div(env: &Env, a: u128, b: u128, denominator: u128) -> u128 {
    match checked_mul_div(env, a, b, denominator) {
        Some(result) => result,
        None => panic!("U256 overflow when converting to u128"),
    }
}

/// Multiply and divide with 256-bit intermediate precision (rounds up)
/// Returns ceil((a * b) / denominator), or None if it does not fit in u128
pub fn checked_mul_div_rounding_up(
    env: &Env,
    a: u128,
    b: u128,
    denominator: u128,
) -> Option<u128> {
    let result = checked_mul_div(env, a, b, denominator)?;

    let product = U256::from_u128(env, a).mul(&U256::from_u128(env, b));
    let remainder = product.rem_euclid(&U256::from_u128(env, denominator));

    if remainder > U256::from_u32(env, 0) {
        result.checked_add(1)
    } else {
        Some(result)
    }
}

/// Floor of a * b / denominator where b and the denominator are themselves
/// 256-bit values and the full product may not fit in 256 bits
///
/// `a` is split into 64-bit halves so that every partial product stays below
/// 2^256. Requires `b` and `denominator` below 2^190.
pub fn mul_div_wide(env: &Env, a: u128, b: &U256, denominator: &U256) -> U256 {
    let zero = U256::from_u32(env, 0);
    if *denominator == zero {
        panic!("Division by zero");
    }
    if b.shr(WIDE_OPERAND_BITS) != zero || denominator.shr(WIDE_OPERAND_BITS) != zero {
        panic!("Operand too wide");
    }

    let high = U256::from_u128(env, a >> 64);
    let low = U256::from_u128(env, a & u64::MAX as u128);

    // a * b = high * b * 2^64 + low * b
    let high_product = high.mul(b);
    let high_quotient = high_product.div(denominator);
    let high_remainder = high_product.rem_euclid(denominator);

    let rest = high_remainder.shl(64).add(&low.mul(b));
    high_quotient.shl(64).add(&rest.div(denominator))
}

/// Integer square root of a * b (rounds down), computed over the 256-bit product
///
/// Newton's iteration starting from (a + b) / 2, which is never below the
/// root by the AM-GM inequality, so the sequence decreases monotonically to
/// floor(sqrt(a * b)).
pub fn sqrt_product(env: &Env, a: u128, b: u128) -> u128 {
    if a == 0 || b == 0 {
        return 0;
    }

    let two = U256::from_u32(env, 2);
    let n = U256::from_u128(env, a).mul(&U256::from_u128(env, b));

    let mut x = U256::from_u128(env, a)
        .add(&U256::from_u128(env, b))
        .div(&two);
    let mut y = x.add(&n.div(&x)).div(&two);
    while y < x {
        x = y;
        y = x.add(&n.div(&x)).div(&two);
    }

    u128_from_u256(&x)
}

/// Full 256-bit product of two u128 values
pub fn product(env: &Env, a: u128, b: u128) -> U256 {
    U256::from_u128(env, a).mul(&U256::from_u128(env, b))
}

/// Convert U256 to u128, panics if overflow
pub(crate) fn u128_from_u256(value: &U256) -> u128 {
    match value.to_u128() {
        Some(v) => v,
        None => panic!("U256 overflow when converting to u128"),
    }
}
