//! On-chain record types for the legal records registry.

use soroban_sdk::{contracttype, symbol_short, Address, String, Symbol};

// ════════════════════════════════════════════════════════════════════
//  Principals
// ════════════════════════════════════════════════════════════════════

/// A configurable principal slot (authority or oracle).
///
/// `Unset` is its own variant so an empty slot can never compare equal to
/// any caller.
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub enum Principal {
    Unset,
    Set(Address),
}

impl Principal {
    pub fn is_set(&self) -> bool {
        matches!(self, Principal::Set(_))
    }

    /// True only when the slot holds exactly `who`.
    pub fn is(&self, who: &Address) -> bool {
        match self {
            Principal::Set(addr) => addr == who,
            Principal::Unset => false,
        }
    }

    pub fn address(&self) -> Option<Address> {
        match self {
            Principal::Set(addr) => Some(addr.clone()),
            Principal::Unset => None,
        }
    }
}

// ════════════════════════════════════════════════════════════════════
//  Enumerations
// ════════════════════════════════════════════════════════════════════

/// Lifecycle status of a legal record. Any status may move to any other.
#[contracttype]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordStatus {
    Valid,
    Expired,
    Disputed,
    Revoked,
}

impl RecordStatus {
    /// Parse the wire symbol (`valid`, `expired`, `disputed`, `revoked`).
    pub fn from_symbol(sym: &Symbol) -> Option<Self> {
        if *sym == symbol_short!("valid") {
            Some(RecordStatus::Valid)
        } else if *sym == symbol_short!("expired") {
            Some(RecordStatus::Expired)
        } else if *sym == symbol_short!("disputed") {
            Some(RecordStatus::Disputed)
        } else if *sym == symbol_short!("revoked") {
            Some(RecordStatus::Revoked)
        } else {
            None
        }
    }
}

/// Settlement currency recorded alongside a deed.
#[contracttype]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Currency {
    Usd,
    Eur,
    Stx,
}

impl Currency {
    pub fn from_symbol(sym: &Symbol) -> Option<Self> {
        if *sym == symbol_short!("USD") {
            Some(Currency::Usd)
        } else if *sym == symbol_short!("EUR") {
            Some(Currency::Eur)
        } else if *sym == symbol_short!("STX") {
            Some(Currency::Stx)
        } else {
            None
        }
    }
}

// ════════════════════════════════════════════════════════════════════
//  Records
// ════════════════════════════════════════════════════════════════════

/// Unique key of a record: one document of a given type per property.
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct RecordKey {
    pub property_id: u64,
    pub doc_type: String,
}

/// A registered legal document attestation.
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct LegalRecord {
    /// 64-character document digest, stored as an opaque token.
    pub hash: String,
    /// Ledger sequence of the last write.
    pub timestamp: u32,
    /// Oracle that registered the record.
    pub issuer: Address,
    pub status: RecordStatus,
    /// 3-character jurisdiction code.
    pub jurisdiction: String,
    pub metadata: String,
    /// Last ledger sequence at which the record still verifies.
    pub expiry: Option<u32>,
    pub owner: Address,
    pub currency: Currency,
    pub location: String,
}

/// The most recent status transition of a record.
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct RecordUpdate {
    /// Hash in effect after the update.
    pub update_hash: String,
    pub update_timestamp: u32,
    pub updater: Address,
    /// Status held immediately before the update.
    pub previous_status: RecordStatus,
}

/// Successful outcome of `verify_record`.
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct VerificationResult {
    pub valid: bool,
    pub details: LegalRecord,
}
