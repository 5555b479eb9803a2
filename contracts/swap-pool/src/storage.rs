use crate::error::PoolError;
use soroban_sdk::{contracttype, Address, Env};
use swap_types::{PoolConfig, PoolState};

// ============================================================================
// STORAGE LAYOUT
// ============================================================================
// - Config, State and the reentrancy lock live in Instance storage: they are
//   read on every call and share the contract instance TTL.
// - Share balances live in Persistent storage, one entry per provider, and
//   are removed when they reach zero.
// - State is a single entry holding both reserves and the share supply, so
//   a commit is one write and no reader can observe half an update.
// ============================================================================

/// Storage keys for the pool contract
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Pool configuration (Instance storage)
    Config,
    /// Reserves and share supply (Instance storage)
    State,
    /// Set while a mutating call is in flight (Instance storage)
    Locked,
    /// Share balance: provider -> shares (Persistent storage)
    Shares(Address),
}

// TTL constants
const INSTANCE_TTL_THRESHOLD: u32 = 17280; // ~1 day
const INSTANCE_TTL_EXTEND: u32 = 518400; // ~30 days
const PERSISTENT_TTL_THRESHOLD: u32 = 17280;
const PERSISTENT_TTL_EXTEND: u32 = 518400;

/// Extend instance storage TTL
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

/// Extend persistent storage TTL for a key
pub fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}

// === Config ===

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<PoolConfig, PoolError> {
    let config = env
        .storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(PoolError::NotInitialized)?;
    extend_instance_ttl(env);
    Ok(config)
}

pub fn set_config(env: &Env, config: &PoolConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    extend_instance_ttl(env);
}

// === State ===

/// Current reserves; an uninitialized pool reads as empty
pub fn get_state(env: &Env) -> PoolState {
    env.storage()
        .instance()
        .get(&DataKey::State)
        .unwrap_or_default()
}

pub fn set_state(env: &Env, state: &PoolState) {
    env.storage().instance().set(&DataKey::State, state);
    extend_instance_ttl(env);
}

// === Lock ===

pub fn is_locked(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Locked)
}

pub fn set_locked(env: &Env, locked: bool) {
    if locked {
        env.storage().instance().set(&DataKey::Locked, &true);
    } else {
        env.storage().instance().remove(&DataKey::Locked);
    }
}

// === Shares ===

pub fn get_shares(env: &Env, owner: &Address) -> i128 {
    let key = DataKey::Shares(owner.clone());
    let shares = env.storage().persistent().get(&key);
    if shares.is_some() {
        extend_persistent_ttl(env, &key);
    }
    shares.unwrap_or(0)
}

pub fn set_shares(env: &Env, owner: &Address, shares: i128) {
    let key = DataKey::Shares(owner.clone());
    if shares == 0 {
        // Remove empty balance
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &shares);
        extend_persistent_ttl(env, &key);
    }
}
