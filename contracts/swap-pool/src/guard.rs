use crate::error::PoolError;
use crate::storage::{is_locked, set_locked};
use soroban_sdk::{log, Env};

/// Scoped reentrancy lock
///
/// Acquired at the entry of every mutating pool call and released when the
/// guard is dropped, on success and error paths alike. A panic aborts the
/// invocation and the host discards the lock together with every other write.
pub struct ReentrancyGuard<'a> {
    env: &'a Env,
}

impl<'a> ReentrancyGuard<'a> {
    pub fn acquire(env: &'a Env) -> Result<Self, PoolError> {
        if is_locked(env) {
            log!(env, "reentrant call rejected");
            return Err(PoolError::Reentrant);
        }
        set_locked(env, true);
        Ok(Self { env })
    }
}

impl Drop for ReentrancyGuard<'_> {
    fn drop(&mut self) {
        set_locked(self.env, false);
    }
}
