#![no_std]

mod error;
mod events;
mod guard;
mod invariants;
mod ledger;
mod liquidity;
mod reserves;
mod storage;
mod swap;
mod testutils;

pub use error::PoolError;

use soroban_sdk::{contract, contractimpl, log, Address, Env};
use storage::{get_config, get_shares, get_state, has_config, set_config, set_state};
use swap_types::{is_valid_fee, PoolConfig, PoolState, PoolStatus, SwapQuote};

#[contract]
pub struct SwapPool;

#[contractimpl]
impl SwapPool {
    /// Initialize the pool over two asset ledgers
    ///
    /// # Arguments
    /// * `token_x` - Ledger of asset X
    /// * `token_y` - Ledger of asset Y
    /// * `fee_bps` - Trading fee in basis points, below 10_000
    pub fn initialize(
        env: Env,
        token_x: Address,
        token_y: Address,
        fee_bps: u32,
    ) -> Result<(), PoolError> {
        if has_config(&env) {
            return Err(PoolError::AlreadyInitialized);
        }
        if token_x == token_y {
            return Err(PoolError::IdenticalAssets);
        }
        if !is_valid_fee(fee_bps) {
            return Err(PoolError::InvalidFee);
        }

        let config = PoolConfig {
            token_x,
            token_y,
            fee_bps,
        };
        set_config(&env, &config);
        set_state(&env, &PoolState::new());

        log!(&env, "pool initialized", fee_bps);
        events::initialized(&env, &config);
        Ok(())
    }

    /// Deposit both assets
    ///
    /// # Returns
    /// Shares minted to `provider`
    pub fn add_liquidity(
        env: Env,
        provider: Address,
        amount_x: i128,
        amount_y: i128,
    ) -> Result<i128, PoolError> {
        provider.require_auth();
        liquidity::add_liquidity(&env, provider, amount_x, amount_y)
    }

    /// Burn shares and withdraw the pro-rata reserves
    ///
    /// # Returns
    /// (amount_x, amount_y) - Amounts paid to `provider`
    pub fn remove_liquidity(
        env: Env,
        provider: Address,
        shares: i128,
    ) -> Result<(i128, i128), PoolError> {
        provider.require_auth();
        liquidity::remove_liquidity(&env, provider, shares)
    }

    /// Execute an exact-input swap
    ///
    /// # Arguments
    /// * `caller` - Pays `amount_in` of the input asset
    /// * `amount_in` - Gross input, fee included
    /// * `x_to_y` - True if paying X to receive Y
    /// * `recipient` - Receives the output asset
    ///
    /// # Returns
    /// Amount of the output asset paid to `recipient`
    pub fn swap(
        env: Env,
        caller: Address,
        amount_in: i128,
        x_to_y: bool,
        recipient: Address,
    ) -> Result<i128, PoolError> {
        caller.require_auth();
        swap::execute_swap(&env, caller, amount_in, 0, x_to_y, recipient)
    }

    /// Exact-input swap that fails with InsufficientOutputAmount when the
    /// output would be below `min_amount_out`
    pub fn swap_exact_in(
        env: Env,
        caller: Address,
        amount_in: i128,
        min_amount_out: i128,
        x_to_y: bool,
        recipient: Address,
    ) -> Result<i128, PoolError> {
        caller.require_auth();
        swap::execute_swap(&env, caller, amount_in, min_amount_out, x_to_y, recipient)
    }

    // === Quotes ===

    pub fn quote_swap(env: Env, amount_in: i128, x_to_y: bool) -> Result<SwapQuote, PoolError> {
        swap::quote_swap(&env, amount_in, x_to_y)
    }

    pub fn get_amount_in(env: Env, amount_out: i128, x_to_y: bool) -> Result<i128, PoolError> {
        swap::quote_amount_in(&env, amount_out, x_to_y)
    }

    /// Amount of Y to pair with `amount_x` at the current price
    pub fn quote_deposit(env: Env, amount_x: i128) -> Result<i128, PoolError> {
        liquidity::quote_deposit(&env, amount_x)
    }

    // === View Functions ===

    pub fn reserve_x(env: Env) -> i128 {
        get_state(&env).reserve_x
    }

    pub fn reserve_y(env: Env) -> i128 {
        get_state(&env).reserve_y
    }

    /// (reserve_x, reserve_y)
    pub fn get_reserves(env: Env) -> (i128, i128) {
        let state = get_state(&env);
        (state.reserve_x, state.reserve_y)
    }

    pub fn total_shares(env: Env) -> i128 {
        get_state(&env).total_shares
    }

    pub fn shares_of(env: Env, owner: Address) -> i128 {
        get_shares(&env, &owner)
    }

    pub fn status(env: Env) -> PoolStatus {
        get_state(&env).status()
    }

    pub fn get_state(env: Env) -> PoolState {
        get_state(&env)
    }

    pub fn get_config(env: Env) -> Result<PoolConfig, PoolError> {
        get_config(&env)
    }

    pub fn token_x(env: Env) -> Result<Address, PoolError> {
        Ok(get_config(&env)?.token_x)
    }

    pub fn token_y(env: Env) -> Result<Address, PoolError> {
        Ok(get_config(&env)?.token_y)
    }

    pub fn fee_bps(env: Env) -> Result<u32, PoolError> {
        Ok(get_config(&env)?.fee_bps)
    }
}
