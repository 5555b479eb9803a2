use soroban_sdk::{Address, Env, Symbol};
use swap_types::PoolConfig;

pub fn initialized(env: &Env, config: &PoolConfig) {
    env.events().publish(
        (Symbol::new(env, "initialized"),),
        (config.token_x.clone(), config.token_y.clone(), config.fee_bps),
    );
}

/// LiquidityAdded(provider, amount_x, amount_y)
pub fn liquidity_added(env: &Env, provider: &Address, amount_x: i128, amount_y: i128) {
    env.events().publish(
        (Symbol::new(env, "liquidity_added"), provider.clone()),
        (amount_x, amount_y),
    );
}

/// LiquidityRemoved(provider, shares, amount_x, amount_y)
pub fn liquidity_removed(env: &Env, provider: &Address, shares: i128, amount_x: i128, amount_y: i128) {
    env.events().publish(
        (Symbol::new(env, "liquidity_removed"), provider.clone()),
        (shares, amount_x, amount_y),
    );
}

/// Swapped(caller, recipient, x_to_y, amount_in, amount_out)
pub fn swapped(
    env: &Env,
    caller: &Address,
    recipient: &Address,
    x_to_y: bool,
    amount_in: i128,
    amount_out: i128,
) {
    env.events().publish(
        (Symbol::new(env, "swapped"), caller.clone(), recipient.clone()),
        (x_to_y, amount_in, amount_out),
    );
}
