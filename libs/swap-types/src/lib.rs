#![no_std]

mod pool;
mod quote;

pub use pool::*;
pub use quote::*;

/// Fee denominator: fees are expressed in basis points of the input amount
pub const FEE_DENOMINATOR: u32 = 10_000;

/// Default trading fee (30 bps = 0.3%)
pub const DEFAULT_FEE_BPS: u32 = 30;

/// Shares locked by the first deposit into an empty pool: added to the
/// supply, credited to no provider
pub const MINIMUM_LIQUIDITY: i128 = 10;

/// Fee in basis points of the input amount
/// 5 = 0.05%, 30 = 0.3%, 100 = 1%
pub type FeeBps = u32;

/// Check that a fee can be configured on a pool.
/// A fee of zero gives a fee-less pool; the full denominator would price every
/// trade at zero output.
pub fn is_valid_fee(fee_bps: FeeBps) -> bool {
    fee_bps < FEE_DENOMINATOR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fee_bounds() {
        assert!(is_valid_fee(0));
        assert!(is_valid_fee(DEFAULT_FEE_BPS));
        assert!(is_valid_fee(FEE_DENOMINATOR - 1));
        assert!(!is_valid_fee(FEE_DENOMINATOR));
        assert!(!is_valid_fee(u32::MAX));
    }
}
