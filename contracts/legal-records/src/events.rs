//! # Structured Event Emissions
//!
//! Every state change in the registry publishes one event so off-chain
//! indexers can rebuild the record history.
//!
//! | Topic      | Extra topic         | Payload                    |
//! |------------|---------------------|----------------------------|
//! | `auth_set` | –                   | [`PrincipalChangedEvent`]  |
//! | `orcl_set` | –                   | [`PrincipalChangedEvent`]  |
//! | `tok_set`  | –                   | [`PrincipalChangedEvent`]  |
//! | `fee_set`  | –                   | [`ConfigChangedEvent`]     |
//! | `max_set`  | –                   | [`ConfigChangedEvent`]     |
//! | `gov_set`  | –                   | [`ConfigChangedEvent`]     |
//! | `rec_reg`  | `property_id`       | [`RecordRegisteredEvent`]  |
//! | `rec_upd`  | `property_id`       | [`RecordStatusChangedEvent`] |

use soroban_sdk::{contracttype, symbol_short, Address, Env, String, Symbol};

use crate::types::RecordStatus;

// ════════════════════════════════════════════════════════════════════
//  Event Topics
// ════════════════════════════════════════════════════════════════════

pub const TOPIC_AUTHORITY_SET: Symbol = symbol_short!("auth_set");
pub const TOPIC_ORACLE_SET: Symbol = symbol_short!("orcl_set");
pub const TOPIC_FEE_TOKEN_SET: Symbol = symbol_short!("tok_set");
pub const TOPIC_FEE_SET: Symbol = symbol_short!("fee_set");
pub const TOPIC_MAX_RECORDS_SET: Symbol = symbol_short!("max_set");
pub const TOPIC_GOVERNANCE_SET: Symbol = symbol_short!("gov_set");
pub const TOPIC_RECORD_REGISTERED: Symbol = symbol_short!("rec_reg");
pub const TOPIC_RECORD_UPDATED: Symbol = symbol_short!("rec_upd");

// ════════════════════════════════════════════════════════════════════
//  Event Data Structures
// ════════════════════════════════════════════════════════════════════

/// Authority bound, oracle appointed, or fee token changed.
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct PrincipalChangedEvent {
    pub principal: Address,
    pub changed_by: Address,
}

/// A numeric configuration value changed.
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct ConfigChangedEvent {
    pub old_value: i128,
    pub new_value: i128,
    pub changed_by: Address,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct RecordRegisteredEvent {
    pub property_id: u64,
    pub doc_type: String,
    pub hash: String,
    pub issuer: Address,
    pub expiry: Option<u32>,
    /// Fee transferred to the authority.
    pub fee_paid: i128,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct RecordStatusChangedEvent {
    pub property_id: u64,
    pub doc_type: String,
    pub previous_status: RecordStatus,
    pub new_status: RecordStatus,
    pub hash: String,
    pub updater: Address,
}

// ════════════════════════════════════════════════════════════════════
//  Event Emission Functions
// ════════════════════════════════════════════════════════════════════

pub fn emit_authority_set(env: &Env, authority: &Address, changed_by: &Address) {
    let event = PrincipalChangedEvent {
        principal: authority.clone(),
        changed_by: changed_by.clone(),
    };
    env.events().publish((TOPIC_AUTHORITY_SET,), event);
}

pub fn emit_oracle_set(env: &Env, oracle: &Address, changed_by: &Address) {
    let event = PrincipalChangedEvent {
        principal: oracle.clone(),
        changed_by: changed_by.clone(),
    };
    env.events().publish((TOPIC_ORACLE_SET,), event);
}

pub fn emit_fee_token_set(env: &Env, token: &Address, changed_by: &Address) {
    let event = PrincipalChangedEvent {
        principal: token.clone(),
        changed_by: changed_by.clone(),
    };
    env.events().publish((TOPIC_FEE_TOKEN_SET,), event);
}

/// Emit a configuration change under `topic` (one of the `*_SET` topics).
pub fn emit_config_changed(
    env: &Env,
    topic: Symbol,
    old_value: i128,
    new_value: i128,
    changed_by: &Address,
) {
    let event = ConfigChangedEvent {
        old_value,
        new_value,
        changed_by: changed_by.clone(),
    };
    env.events().publish((topic,), event);
}

/// Emit a record registered event.
///
/// The property id is duplicated into the topics so indexers can follow a
/// single property without decoding payloads.
pub fn emit_record_registered(
    env: &Env,
    property_id: u64,
    doc_type: &String,
    hash: &String,
    issuer: &Address,
    expiry: Option<u32>,
    fee_paid: i128,
) {
    let event = RecordRegisteredEvent {
        property_id,
        doc_type: doc_type.clone(),
        hash: hash.clone(),
        issuer: issuer.clone(),
        expiry,
        fee_paid,
    };
    env.events()
        .publish((TOPIC_RECORD_REGISTERED, property_id), event);
}

pub fn emit_record_updated(env: &Env, event: RecordStatusChangedEvent) {
    env.events()
        .publish((TOPIC_RECORD_UPDATED, event.property_id), event);
}
