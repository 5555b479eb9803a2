use soroban_sdk::{contracttype, Address};

/// Reserve state - stored in Instance storage, written as one entry so both
/// reserves always change together
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PoolState {
    /// Amount of asset X held by the pool
    pub reserve_x: i128,
    /// Amount of asset Y held by the pool
    pub reserve_y: i128,
    /// Liquidity shares outstanding
    pub total_shares: i128,
}

impl PoolState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> PoolStatus {
        if self.reserve_x > 0 && self.reserve_y > 0 {
            PoolStatus::Funded
        } else {
            PoolStatus::Empty
        }
    }

    /// (reserve_in, reserve_out) for a swap direction
    pub fn reserves_for(&self, x_to_y: bool) -> (i128, i128) {
        if x_to_y {
            (self.reserve_x, self.reserve_y)
        } else {
            (self.reserve_y, self.reserve_x)
        }
    }
}

/// Pool configuration - immutable after initialization
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PoolConfig {
    /// Asset X ledger (token contract)
    pub token_x: Address,
    /// Asset Y ledger (token contract)
    pub token_y: Address,
    /// Trading fee in basis points of the input amount
    pub fee_bps: u32,
}

impl PoolConfig {
    /// (token_in, token_out) for a swap direction
    pub fn tokens_for(&self, x_to_y: bool) -> (&Address, &Address) {
        if x_to_y {
            (&self.token_x, &self.token_y)
        } else {
            (&self.token_y, &self.token_x)
        }
    }
}

/// The two steady states of a pool
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PoolStatus {
    /// No reserves; only deposits are accepted
    Empty,
    /// Both reserves positive; deposits, withdrawals and swaps are accepted
    Funded,
}
