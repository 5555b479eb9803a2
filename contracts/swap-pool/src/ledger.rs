use crate::error::PoolError;
use soroban_sdk::{token, Address, Env};

// ============================================================================
// ASSET LEDGER ADAPTER
// ============================================================================
// The two assets are external token contracts. Deposits and swap inputs are
// pulled with transfer_from (the pool is the spender of a prior approve);
// payouts use transfer from the pool's own balance.
//
// check_pull runs for every incoming leg before the first transfer of a call,
// so an allowance or balance shortfall on either asset is reported without
// moving anything. A ledger that still rejects a transfer surfaces as
// TransferFailed and the invocation fails as a whole.
// ============================================================================

/// Verify that `from` has approved and holds at least `amount` of `token`
pub fn check_pull(env: &Env, token: &Address, from: &Address, amount: i128) -> Result<(), PoolError> {
    let client = token::Client::new(env, token);
    let pool = env.current_contract_address();

    if client.allowance(from, &pool) < amount {
        return Err(PoolError::InsufficientAllowance);
    }
    if client.balance(from) < amount {
        return Err(PoolError::TransferFailed);
    }
    Ok(())
}

/// Move `amount` of `token` from `from` into the pool using the pool's allowance
pub fn pull(env: &Env, token: &Address, from: &Address, amount: i128) -> Result<(), PoolError> {
    let client = token::Client::new(env, token);
    let pool = env.current_contract_address();

    match client.try_transfer_from(&pool, from, &pool, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(PoolError::TransferFailed),
    }
}

/// Move `amount` of `token` out of the pool to `to`
pub fn pay(env: &Env, token: &Address, to: &Address, amount: i128) -> Result<(), PoolError> {
    let client = token::Client::new(env, token);
    let pool = env.current_contract_address();

    match client.try_transfer(&pool, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(PoolError::TransferFailed),
    }
}
