//! # Registry Storage
//!
//! Configuration lives in instance storage and is read as a single
//! [`RegistryConfig`]. Records, their latest updates, and the hash index are
//! per-key persistent entries whose TTL is bumped on every write.

use soroban_sdk::{contracttype, Address, Env, String};

use crate::types::{LegalRecord, Principal, RecordKey, RecordUpdate};

pub const DEFAULT_MAX_RECORDS: u64 = 10_000;
pub const DEFAULT_REGISTRATION_FEE: i128 = 500;
/// Percentage.
pub const DEFAULT_GOVERNANCE_THRESHOLD: u32 = 51;

/// ~1 day of ledgers at 5s.
pub const RECORD_TTL_THRESHOLD: u32 = 17_280;
/// ~30 days of ledgers at 5s.
pub const RECORD_TTL_EXTEND: u32 = 518_400;

// ════════════════════════════════════════════════════════════════════
//  Storage types
// ════════════════════════════════════════════════════════════════════

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    // ── Instance ────────────────────────────────────────────────
    /// Singleton [`RegistryConfig`].
    Config,
    /// Token contract used to pay registration fees.
    FeeToken,

    // ── Persistent ──────────────────────────────────────────────
    /// [`LegalRecord`] keyed by (property_id, doc_type).
    Record(RecordKey),
    /// Latest [`RecordUpdate`] keyed by (property_id, doc_type).
    Update(RecordKey),
    /// Document hash -> [`RecordKey`].
    Hash(String),
}

/// Registry-wide settings and counters.
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct RegistryConfig {
    /// Number of successful registrations so far.
    pub next_record_id: u64,
    /// Capacity ceiling. Can only be raised.
    pub max_records: u64,
    pub registration_fee: i128,
    /// Write-once.
    pub authority: Principal,
    pub oracle: Principal,
    /// Stored for future governance; not enforced.
    pub governance_threshold: u32,
}

impl RegistryConfig {
    pub fn new() -> Self {
        RegistryConfig {
            next_record_id: 0,
            max_records: DEFAULT_MAX_RECORDS,
            registration_fee: DEFAULT_REGISTRATION_FEE,
            authority: Principal::Unset,
            oracle: Principal::Unset,
            governance_threshold: DEFAULT_GOVERNANCE_THRESHOLD,
        }
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self::new()
    }
}

// ════════════════════════════════════════════════════════════════════
//  Config helpers
// ════════════════════════════════════════════════════════════════════

pub fn get_config(env: &Env) -> RegistryConfig {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .unwrap_or_default()
}

pub fn set_config(env: &Env, config: &RegistryConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_fee_token(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::FeeToken)
}

pub fn set_fee_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::FeeToken, token);
}

// ════════════════════════════════════════════════════════════════════
//  Record helpers
// ════════════════════════════════════════════════════════════════════

pub fn has_record(env: &Env, key: &RecordKey) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Record(key.clone()))
}

pub fn get_record(env: &Env, key: &RecordKey) -> Option<LegalRecord> {
    env.storage()
        .persistent()
        .get(&DataKey::Record(key.clone()))
}

pub fn set_record(env: &Env, key: &RecordKey, record: &LegalRecord) {
    let k = DataKey::Record(key.clone());
    env.storage().persistent().set(&k, record);
    env.storage()
        .persistent()
        .extend_ttl(&k, RECORD_TTL_THRESHOLD, RECORD_TTL_EXTEND);
}

pub fn get_update(env: &Env, key: &RecordKey) -> Option<RecordUpdate> {
    env.storage()
        .persistent()
        .get(&DataKey::Update(key.clone()))
}

pub fn set_update(env: &Env, key: &RecordKey, update: &RecordUpdate) {
    let k = DataKey::Update(key.clone());
    env.storage().persistent().set(&k, update);
    env.storage()
        .persistent()
        .extend_ttl(&k, RECORD_TTL_THRESHOLD, RECORD_TTL_EXTEND);
}

// ════════════════════════════════════════════════════════════════════
//  Hash index
// ════════════════════════════════════════════════════════════════════

pub fn index_hash(env: &Env, hash: &String, key: &RecordKey) {
    let k = DataKey::Hash(hash.clone());
    env.storage().persistent().set(&k, key);
    env.storage()
        .persistent()
        .extend_ttl(&k, RECORD_TTL_THRESHOLD, RECORD_TTL_EXTEND);
}

pub fn has_hash(env: &Env, hash: &String) -> bool {
    env.storage().persistent().has(&DataKey::Hash(hash.clone()))
}

pub fn get_key_by_hash(env: &Env, hash: &String) -> Option<RecordKey> {
    env.storage().persistent().get(&DataKey::Hash(hash.clone()))
}
