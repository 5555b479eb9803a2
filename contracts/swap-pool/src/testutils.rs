#![cfg(test)]

use crate::{SwapPool, SwapPoolClient};
use soroban_sdk::testutils::{Address as _, Events};
use soroban_sdk::token::{StellarAssetClient, TokenClient};
use soroban_sdk::{contract, contractimpl, contracttype, Address, Env, Val, Vec};

pub fn create_token<'a>(env: &Env, admin: &Address) -> (TokenClient<'a>, StellarAssetClient<'a>) {
    let sac = env.register_stellar_asset_contract_v2(admin.clone());
    (
        TokenClient::new(env, &sac.address()),
        StellarAssetClient::new(env, &sac.address()),
    )
}

/// (topics, data) of the last event published by `contract`
///
/// The asset contracts publish their own transfer events in the same
/// invocation, so events from other contracts are skipped.
pub fn last_event(env: &Env, contract: &Address) -> Option<(Vec<Val>, Val)> {
    env.events()
        .all()
        .iter()
        .filter(|(emitter, _, _)| emitter == contract)
        .last()
        .map(|(_, topics, data)| (topics, data))
}

/// Initialized pool over two Stellar Asset Contracts, all auths mocked
pub struct PoolFixture<'a> {
    pub env: Env,
    pub pool: SwapPoolClient<'a>,
    pub token_x: TokenClient<'a>,
    pub token_y: TokenClient<'a>,
    asset_x: StellarAssetClient<'a>,
    asset_y: StellarAssetClient<'a>,
}

impl PoolFixture<'_> {
    pub fn new(fee_bps: u32) -> Self {
        let env = Env::default();
        env.mock_all_auths();

        let admin = Address::generate(&env);
        let (token_x, asset_x) = create_token(&env, &admin);
        let (token_y, asset_y) = create_token(&env, &admin);

        let pool_id = env.register(SwapPool, ());
        let pool = SwapPoolClient::new(&env, &pool_id);
        pool.initialize(&token_x.address, &token_y.address, &fee_bps);

        Self {
            env,
            pool,
            token_x,
            token_y,
            asset_x,
            asset_y,
        }
    }

    /// New user holding `balance` of both assets with nothing approved
    pub fn user(&self, balance: i128) -> Address {
        let user = Address::generate(&self.env);
        self.asset_x.mint(&user, &balance);
        self.asset_y.mint(&user, &balance);
        user
    }

    /// New user holding and approving `balance` of both assets to the pool
    pub fn approved_user(&self, balance: i128) -> Address {
        let user = self.user(balance);
        self.approve(&user, balance, balance);
        user
    }

    pub fn approve(&self, user: &Address, amount_x: i128, amount_y: i128) {
        let expiration = self.env.ledger().sequence() + 1_000;
        self.token_x
            .approve(user, &self.pool.address, &amount_x, &expiration);
        self.token_y
            .approve(user, &self.pool.address, &amount_y, &expiration);
    }

    /// (balance_x, balance_y) of `owner`
    pub fn balances(&self, owner: &Address) -> (i128, i128) {
        (self.token_x.balance(owner), self.token_y.balance(owner))
    }

    /// Pool funded with `(reserve_x, reserve_y)` by a dedicated provider
    pub fn funded(fee_bps: u32, reserve_x: i128, reserve_y: i128) -> (Self, Address) {
        let fixture = Self::new(fee_bps);
        let provider = fixture.user(reserve_x.max(reserve_y));
        fixture.approve(&provider, reserve_x, reserve_y);
        fixture.pool.add_liquidity(&provider, &reserve_x, &reserve_y);
        (fixture, provider)
    }
}

// ============================================================================
// SCRIPTED LEDGER
// ============================================================================
// A minimal token contract the tests can make misbehave: reject every
// transfer, or call back into the pool from inside transfer_from. It emits no
// events of its own.
// ============================================================================

#[contracttype]
#[derive(Clone)]
enum LedgerKey {
    Balance(Address),
    Allowance(Address, Address),
    Rejecting,
    CallbackPool,
}

#[contract]
pub struct ScriptedLedger;

#[contractimpl]
impl ScriptedLedger {
    pub fn mint(env: Env, to: Address, amount: i128) {
        let balance = Self::balance(env.clone(), to.clone());
        env.storage()
            .instance()
            .set(&LedgerKey::Balance(to), &(balance + amount));
    }

    pub fn approve(env: Env, from: Address, spender: Address, amount: i128) {
        env.storage()
            .instance()
            .set(&LedgerKey::Allowance(from, spender), &amount);
    }

    pub fn allowance(env: Env, from: Address, spender: Address) -> i128 {
        env.storage()
            .instance()
            .get(&LedgerKey::Allowance(from, spender))
            .unwrap_or(0)
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        env.storage()
            .instance()
            .get(&LedgerKey::Balance(id))
            .unwrap_or(0)
    }

    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) {
        if env.storage().instance().has(&LedgerKey::Rejecting) {
            panic!("transfer rejected");
        }
        Self::move_balance(&env, &from, &to, amount);
    }

    pub fn transfer_from(env: Env, spender: Address, from: Address, to: Address, amount: i128) {
        if let Some(pool) = env
            .storage()
            .instance()
            .get::<_, Address>(&LedgerKey::CallbackPool)
        {
            SwapPoolClient::new(&env, &pool).swap(&from, &1, &true, &from);
        }
        if env.storage().instance().has(&LedgerKey::Rejecting) {
            panic!("transfer rejected");
        }

        let allowance = Self::allowance(env.clone(), from.clone(), spender.clone());
        if allowance < amount {
            panic!("allowance exceeded");
        }
        env.storage()
            .instance()
            .set(&LedgerKey::Allowance(from.clone(), spender), &(allowance - amount));
        Self::move_balance(&env, &from, &to, amount);
    }

    /// Reject every transfer from now on
    pub fn reject_transfers(env: Env) {
        env.storage().instance().set(&LedgerKey::Rejecting, &true);
    }

    /// Call `pool.swap` from inside every transfer_from
    pub fn call_back_into(env: Env, pool: Address) {
        env.storage().instance().set(&LedgerKey::CallbackPool, &pool);
    }
}

impl ScriptedLedger {
    fn move_balance(env: &Env, from: &Address, to: &Address, amount: i128) {
        let from_balance = Self::balance(env.clone(), from.clone());
        if from_balance < amount {
            panic!("balance exceeded");
        }
        env.storage()
            .instance()
            .set(&LedgerKey::Balance(from.clone()), &(from_balance - amount));
        let to_balance = Self::balance(env.clone(), to.clone());
        env.storage()
            .instance()
            .set(&LedgerKey::Balance(to.clone()), &(to_balance + amount));
    }
}

/// Pool whose asset X is a ScriptedLedger and asset Y a Stellar Asset Contract
pub struct ScriptedFixture<'a> {
    pub env: Env,
    pub pool: SwapPoolClient<'a>,
    pub ledger_x: ScriptedLedgerClient<'a>,
    pub token_y: TokenClient<'a>,
    asset_y: StellarAssetClient<'a>,
}

impl ScriptedFixture<'_> {
    pub fn new(fee_bps: u32) -> Self {
        let env = Env::default();
        env.mock_all_auths();

        let admin = Address::generate(&env);
        let ledger_id = env.register(ScriptedLedger, ());
        let ledger_x = ScriptedLedgerClient::new(&env, &ledger_id);
        let (token_y, asset_y) = create_token(&env, &admin);

        let pool_id = env.register(SwapPool, ());
        let pool = SwapPoolClient::new(&env, &pool_id);
        pool.initialize(&ledger_id, &token_y.address, &fee_bps);

        Self {
            env,
            pool,
            ledger_x,
            token_y,
            asset_y,
        }
    }

    /// New user holding and approving `balance` of both assets to the pool
    pub fn approved_user(&self, balance: i128) -> Address {
        let user = Address::generate(&self.env);
        let expiration = self.env.ledger().sequence() + 1_000;
        self.ledger_x.mint(&user, &balance);
        self.ledger_x.approve(&user, &self.pool.address, &balance);
        self.asset_y.mint(&user, &balance);
        self.token_y
            .approve(&user, &self.pool.address, &balance, &expiration);
        user
    }

    /// (balance_x, balance_y) of `owner`
    pub fn balances(&self, owner: &Address) -> (i128, i128) {
        (self.ledger_x.balance(owner), self.token_y.balance(owner))
    }
}
