//! Field validation for record registration and status updates.
//!
//! Checks run in a fixed order and the first failure is returned, so callers
//! always see the most specific error for their input. Text fields are ASCII
//! only, so their byte length is their character length.

use soroban_sdk::{String, Symbol};

use crate::errors::Error;
use crate::types::{Currency, RecordStatus};

pub const HASH_LEN: u32 = 64;
pub const JURISDICTION_LEN: u32 = 3;
pub const MAX_DOC_TYPE_LEN: u32 = 32;
pub const MAX_METADATA_LEN: u32 = 256;
pub const MAX_LOCATION_LEN: u32 = 100;

/// Character count of `value` if it is ASCII and at most `max` long.
///
/// `String::len` counts bytes, so multi-byte input is rejected here rather
/// than being measured as several characters. `max` must not exceed
/// `MAX_METADATA_LEN`.
fn ascii_len_within(value: &String, max: u32) -> Option<u32> {
    let len = value.len();
    if len > max {
        return None;
    }
    let mut buf = [0u8; MAX_METADATA_LEN as usize];
    let bytes = &mut buf[..len as usize];
    value.copy_into_slice(bytes);
    if bytes.is_ascii() {
        Some(len)
    } else {
        None
    }
}

pub fn validate_hash(hash: &String) -> Result<(), Error> {
    if ascii_len_within(hash, HASH_LEN) != Some(HASH_LEN) {
        return Err(Error::InvalidHash);
    }
    Ok(())
}

/// Validate every caller-supplied field of a new record against the ledger
/// sequence `now`. Returns the parsed currency.
#[allow(clippy::too_many_arguments)]
pub fn validate_new_record(
    now: u32,
    property_id: u64,
    doc_type: &String,
    doc_hash: &String,
    jurisdiction: &String,
    metadata: &String,
    expiry: Option<u32>,
    currency: &Symbol,
    location: &String,
) -> Result<Currency, Error> {
    if property_id == 0 {
        return Err(Error::InvalidPropertyId);
    }
    match ascii_len_within(doc_type, MAX_DOC_TYPE_LEN) {
        Some(len) if len > 0 => {}
        _ => return Err(Error::InvalidDocType),
    }
    validate_hash(doc_hash)?;
    if ascii_len_within(jurisdiction, JURISDICTION_LEN) != Some(JURISDICTION_LEN) {
        return Err(Error::InvalidJurisdiction);
    }
    if ascii_len_within(metadata, MAX_METADATA_LEN).is_none() {
        return Err(Error::InvalidMetadata);
    }
    if let Some(exp) = expiry {
        if exp <= now {
            return Err(Error::InvalidExpiry);
        }
    }
    let currency = Currency::from_symbol(currency).ok_or(Error::InvalidCurrency)?;
    if ascii_len_within(location, MAX_LOCATION_LEN).is_none() {
        return Err(Error::InvalidLocation);
    }
    Ok(currency)
}

/// Validate the arguments of a status update. Returns the parsed status.
pub fn validate_status_update(
    new_status: &Symbol,
    new_hash: &Option<String>,
) -> Result<RecordStatus, Error> {
    let status = RecordStatus::from_symbol(new_status).ok_or(Error::InvalidStatus)?;
    if let Some(hash) = new_hash {
        validate_hash(hash)?;
    }
    Ok(status)
}
