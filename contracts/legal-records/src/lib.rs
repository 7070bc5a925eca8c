#![no_std]
//! # Legal Records Registry Contract
//!
//! Permissioned registry of legal-document attestations (deeds, titles,
//! liens, ...) keyed by `(property_id, doc_type)`.
//!
//! ## Trust model
//!
//! 1. Any account binds the **authority** once with `set_authority_contract`.
//! 2. The authority appoints the **oracle** with `set_oracle_principal`,
//!    picks the fee token with `set_fee_token`, and tunes the registration
//!    fee and capacity.
//! 3. Only the oracle registers records and changes their status. Each
//!    registration pays the configured fee to the authority.
//!
//! Records are never deleted. Revocation is a status, and `verify_record`
//! layers the expiry check on top of the stored status.
//!
//! Logical time is the ledger sequence number.

use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env, String, Symbol};

// ─── Feature modules ───
pub mod authority;
pub mod errors;
pub mod events;
pub mod fees;
pub mod storage;
pub mod types;
pub mod validation;
// ─── End feature modules ───

pub use errors::Error;
pub use events::{RecordRegisteredEvent, RecordStatusChangedEvent};
pub use storage::RegistryConfig;
pub use types::{
    Currency, LegalRecord, Principal, RecordKey, RecordStatus, RecordUpdate, VerificationResult,
};

#[cfg(test)]
mod test;
// ─── End test modules ───

#[contract]
pub struct LegalRecordsContract;

#[contractimpl]
#[allow(clippy::too_many_arguments)]
impl LegalRecordsContract {
    // ── Authority bootstrap ─────────────────────────────────────────

    /// Bind the authority. Write-once; `candidate` must differ from `caller`.
    pub fn set_authority_contract(
        env: Env,
        caller: Address,
        candidate: Address,
    ) -> Result<(), Error> {
        caller.require_auth();
        authority::set_authority(&env, &caller, &candidate)?;
        events::emit_authority_set(&env, &candidate, &caller);
        Ok(())
    }

    /// Appoint or replace the oracle. Authority only.
    pub fn set_oracle_principal(env: Env, caller: Address, candidate: Address) -> Result<(), Error> {
        caller.require_auth();
        authority::set_oracle(&env, &caller, &candidate)?;
        events::emit_oracle_set(&env, &candidate, &caller);
        Ok(())
    }

    // ── Authority: configuration ────────────────────────────────────
    // Value checks run before the caller check in the numeric setters.

    /// Set or replace the token contract registration fees are paid in.
    /// Authority only.
    pub fn set_fee_token(env: Env, caller: Address, fee_token: Address) -> Result<(), Error> {
        caller.require_auth();
        let config = storage::get_config(&env);
        authority::require_authority(&config, &caller)?;
        storage::set_fee_token(&env, &fee_token);
        events::emit_fee_token_set(&env, &fee_token, &caller);
        Ok(())
    }

    /// Set the per-registration fee. Must be positive.
    pub fn set_registration_fee(env: Env, caller: Address, new_fee: i128) -> Result<(), Error> {
        caller.require_auth();
        if new_fee <= 0 {
            return Err(Error::InvalidFee);
        }
        let mut config = storage::get_config(&env);
        authority::require_authority(&config, &caller)?;

        let old_fee = config.registration_fee;
        config.registration_fee = new_fee;
        storage::set_config(&env, &config);

        events::emit_config_changed(&env, events::TOPIC_FEE_SET, old_fee, new_fee, &caller);
        Ok(())
    }

    /// Raise the capacity ceiling. Lowering (or keeping) it is rejected.
    pub fn set_max_records(env: Env, caller: Address, new_max: u64) -> Result<(), Error> {
        caller.require_auth();
        let mut config = storage::get_config(&env);
        if new_max <= config.max_records {
            return Err(Error::InvalidParam);
        }
        authority::require_authority(&config, &caller)?;

        let old_max = config.max_records;
        config.max_records = new_max;
        storage::set_config(&env, &config);

        events::emit_config_changed(
            &env,
            events::TOPIC_MAX_RECORDS_SET,
            old_max as i128,
            new_max as i128,
            &caller,
        );
        Ok(())
    }

    /// Store the governance threshold (percent, 0–100). Not enforced.
    pub fn set_governance_threshold(
        env: Env,
        caller: Address,
        threshold: u32,
    ) -> Result<(), Error> {
        caller.require_auth();
        if threshold > 100 {
            return Err(Error::InvalidParam);
        }
        let mut config = storage::get_config(&env);
        authority::require_authority(&config, &caller)?;

        let old = config.governance_threshold;
        config.governance_threshold = threshold;
        storage::set_config(&env, &config);

        events::emit_config_changed(
            &env,
            events::TOPIC_GOVERNANCE_SET,
            old as i128,
            threshold as i128,
            &caller,
        );
        Ok(())
    }

    // ── Oracle: record lifecycle ────────────────────────────────────

    /// Register a new legal record.
    ///
    /// Checks, first failure wins: capacity, field validity (property id,
    /// doc type, hash, jurisdiction, metadata, expiry, currency, location),
    /// oracle, authority bound, key not taken. Then the registration fee is
    /// transferred to the authority before anything is written.
    ///
    /// * `expiry`   – last ledger sequence at which the record verifies.
    /// * `currency` – `USD`, `EUR` or `STX`.
    pub fn register_legal_record(
        env: Env,
        caller: Address,
        property_id: u64,
        doc_type: String,
        doc_hash: String,
        jurisdiction: String,
        metadata: String,
        expiry: Option<u32>,
        currency: Symbol,
        location: String,
    ) -> Result<(), Error> {
        caller.require_auth();
        let mut config = storage::get_config(&env);
        if config.next_record_id >= config.max_records {
            return Err(Error::MaxRecordsExceeded);
        }

        let now = env.ledger().sequence();
        let currency = validation::validate_new_record(
            now,
            property_id,
            &doc_type,
            &doc_hash,
            &jurisdiction,
            &metadata,
            expiry,
            &currency,
            &location,
        )?;

        authority::require_oracle(&config, &caller)?;
        let fee_recipient = authority::authority_address(&config)?;

        let key = RecordKey {
            property_id,
            doc_type: doc_type.clone(),
        };
        if storage::has_record(&env, &key) {
            return Err(Error::RecordAlreadyExists);
        }

        let fee = config.registration_fee;
        fees::collect_fee(&env, &caller, &fee_recipient, fee)?;

        let record = LegalRecord {
            hash: doc_hash.clone(),
            timestamp: now,
            issuer: caller.clone(),
            status: RecordStatus::Valid,
            jurisdiction,
            metadata,
            expiry,
            owner: caller.clone(),
            currency,
            location,
        };
        storage::set_record(&env, &key, &record);
        storage::index_hash(&env, &doc_hash, &key);

        config.next_record_id += 1;
        storage::set_config(&env, &config);

        events::emit_record_registered(
            &env,
            property_id,
            &doc_type,
            &doc_hash,
            &caller,
            expiry,
            fee,
        );
        Ok(())
    }

    /// Change a record's status, optionally replacing its hash.
    ///
    /// `new_status` is one of `valid`, `expired`, `disputed`, `revoked`; any
    /// status may move to any other. The previous status is kept in the
    /// record's `RecordUpdate`, which is overwritten on every call.
    pub fn update_record_status(
        env: Env,
        caller: Address,
        property_id: u64,
        doc_type: String,
        new_status: Symbol,
        new_hash: Option<String>,
    ) -> Result<(), Error> {
        caller.require_auth();
        let key = RecordKey {
            property_id,
            doc_type: doc_type.clone(),
        };
        let mut record = storage::get_record(&env, &key).ok_or(Error::RecordNotFound)?;
        let status = validation::validate_status_update(&new_status, &new_hash)?;
        let config = storage::get_config(&env);
        authority::require_oracle(&config, &caller)?;

        let now = env.ledger().sequence();
        let previous_status = record.status;
        if let Some(hash) = new_hash {
            record.hash = hash;
        }
        record.status = status;
        record.timestamp = now;
        storage::set_record(&env, &key, &record);

        let update = RecordUpdate {
            update_hash: record.hash.clone(),
            update_timestamp: now,
            updater: caller.clone(),
            previous_status,
        };
        storage::set_update(&env, &key, &update);

        events::emit_record_updated(
            &env,
            RecordStatusChangedEvent {
                property_id,
                doc_type,
                previous_status,
                new_status: status,
                hash: record.hash,
                updater: caller,
            },
        );
        Ok(())
    }

    /// Mark a record `revoked`, keeping its hash.
    pub fn revoke_record(
        env: Env,
        caller: Address,
        property_id: u64,
        doc_type: String,
    ) -> Result<(), Error> {
        Self::update_record_status(
            env,
            caller,
            property_id,
            doc_type,
            symbol_short!("revoked"),
            None,
        )
    }

    // ── Verification ────────────────────────────────────────────────

    /// Verify that a record exists, has not expired, and is `Valid`.
    ///
    /// Expiry is checked first: a record past its expiry reports
    /// `RecordExpired` whatever its stored status.
    pub fn verify_record(
        env: Env,
        property_id: u64,
        doc_type: String,
    ) -> Result<VerificationResult, Error> {
        let key = RecordKey {
            property_id,
            doc_type,
        };
        let record = storage::get_record(&env, &key).ok_or(Error::RecordNotFound)?;
        if let Some(expiry) = record.expiry {
            if env.ledger().sequence() > expiry {
                return Err(Error::RecordExpired);
            }
        }
        if record.status != RecordStatus::Valid {
            return Err(Error::InvalidStatus);
        }
        Ok(VerificationResult {
            valid: true,
            details: record,
        })
    }

    // ── Read-only queries ───────────────────────────────────────────

    /// Number of records registered so far.
    pub fn get_record_count(env: Env) -> u64 {
        storage::get_config(&env).next_record_id
    }

    /// Whether `hash` was ever registered.
    pub fn check_record_existence(env: Env, hash: String) -> bool {
        storage::has_hash(&env, &hash)
    }

    /// Stored record, without the expiry or status checks of `verify_record`.
    pub fn get_record(env: Env, property_id: u64, doc_type: String) -> Option<LegalRecord> {
        storage::get_record(
            &env,
            &RecordKey {
                property_id,
                doc_type,
            },
        )
    }

    /// Latest status transition of a record, if it was ever updated.
    pub fn get_record_update(env: Env, property_id: u64, doc_type: String) -> Option<RecordUpdate> {
        storage::get_update(
            &env,
            &RecordKey {
                property_id,
                doc_type,
            },
        )
    }

    /// Key of the record registered with `hash`.
    pub fn get_record_by_hash(env: Env, hash: String) -> Option<RecordKey> {
        storage::get_key_by_hash(&env, &hash)
    }

    /// Current configuration, with defaults if nothing was written yet.
    pub fn get_config(env: Env) -> RegistryConfig {
        storage::get_config(&env)
    }

    /// Bound authority, if any.
    pub fn get_authority(env: Env) -> Option<Address> {
        storage::get_config(&env).authority.address()
    }

    /// Appointed oracle, if any.
    pub fn get_oracle(env: Env) -> Option<Address> {
        storage::get_config(&env).oracle.address()
    }

    /// Token registration fees are paid in, if configured.
    pub fn get_fee_token(env: Env) -> Option<Address> {
        storage::get_fee_token(&env)
    }
}
