use soroban_sdk::contracttype;

/// Result of pricing a swap without executing it
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapQuote {
    /// Output amount the swap would pay
    pub amount_out: i128,
    /// Part of the input retained by the pool as the trading fee
    pub fee: i128,
}
