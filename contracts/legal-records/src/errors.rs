//! # Contract Errors
//!
//! Every entry point returns `Result<_, Error>`. Codes are stable and shared
//! with off-chain clients, so existing values must never be renumbered. Gaps in
//! the numbering are reserved.

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Caller is not the authority, or tried to appoint itself.
    NotAuthorized = 100,
    /// Property identifier must be positive.
    InvalidPropertyId = 101,
    /// Document type must be 1–32 characters.
    InvalidDocType = 102,
    /// Document hash must be exactly 64 characters.
    InvalidHash = 103,
    /// Jurisdiction must be exactly 3 characters.
    InvalidJurisdiction = 104,
    /// Unknown status symbol, or record is not in `Valid` status.
    InvalidStatus = 105,
    RecordAlreadyExists = 107,
    RecordNotFound = 108,
    /// Caller is not the registered oracle.
    OracleNotVerified = 109,
    /// Metadata exceeds 256 characters.
    InvalidMetadata = 110,
    /// Expiry must lie after the current ledger sequence.
    InvalidExpiry = 111,
    RecordExpired = 112,
    MaxRecordsExceeded = 114,
    /// Currency must be one of USD, EUR, STX.
    InvalidCurrency = 115,
    /// Location exceeds 100 characters.
    InvalidLocation = 116,
    AuthorityNotSet = 119,
    /// Registration fee must be positive.
    InvalidFee = 120,
    /// Fee transfer to the authority did not complete.
    TransferFailed = 122,
    /// Configuration value out of range.
    InvalidParam = 123,
    AuthorityAlreadySet = 124,
}
