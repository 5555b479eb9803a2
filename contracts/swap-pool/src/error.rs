use soroban_sdk::contracterror;

/// Errors returned by the pool contract
///
/// Everything except `InvariantViolation` is a recoverable caller error: the
/// invocation fails, no state change persists, and the call may be retried
/// with corrected inputs. `InvariantViolation` is raised as a panic and aborts
/// the whole transaction.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum PoolError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    /// token_x and token_y are the same ledger
    IdenticalAssets = 3,
    /// fee_bps >= FEE_DENOMINATOR
    InvalidFee = 4,
    /// Zero or negative amount
    InvalidAmount = 5,
    /// The pool cannot safely service the request
    InsufficientLiquidity = 6,
    InsufficientAllowance = 7,
    /// The asset ledger rejected a transfer
    TransferFailed = 8,
    InvariantViolation = 9,
    /// Nested entry while a pool call is in flight
    Reentrant = 10,
    /// Burning more shares than the provider holds
    InsufficientShares = 11,
    /// Deposit too small to mint a share
    InsufficientSharesMinted = 12,
    /// Withdrawal too small to return both assets
    InsufficientSharesBurned = 13,
    ArithmeticOverflow = 14,
    /// Swap output below the caller's minimum
    InsufficientOutputAmount = 15,
}
