//! # Authority and Oracle
//!
//! Two-tier trust model for the registry.
//!
//! | Principal | Set by              | Can                                          |
//! |-----------|---------------------|----------------------------------------------|
//! | Authority | first caller, once  | appoint the oracle, tune fee / capacity      |
//! | Oracle    | authority, any time | register records, change their status        |
//!
//! The authority slot is write-once. Nobody may appoint themselves to either
//! slot. Both slots start as [`Principal::Unset`], which never matches a
//! caller, so every gated operation fails until bootstrap is complete.

use soroban_sdk::{Address, Env};

use crate::errors::Error;
use crate::storage::{self, RegistryConfig};
use crate::types::Principal;

// ════════════════════════════════════════════════════════════════════
//  Bootstrap
// ════════════════════════════════════════════════════════════════════

/// Bind the authority slot. Fails if `candidate` is the caller or if an
/// authority is already bound.
pub fn set_authority(env: &Env, caller: &Address, candidate: &Address) -> Result<(), Error> {
    if candidate == caller {
        return Err(Error::NotAuthorized);
    }
    let mut config = storage::get_config(env);
    if config.authority.is_set() {
        return Err(Error::AuthorityAlreadySet);
    }
    config.authority = Principal::Set(candidate.clone());
    storage::set_config(env, &config);
    Ok(())
}

/// Appoint (or replace) the oracle. Only the authority may do this, and it
/// may not appoint itself.
pub fn set_oracle(env: &Env, caller: &Address, candidate: &Address) -> Result<(), Error> {
    if candidate == caller {
        return Err(Error::NotAuthorized);
    }
    let mut config = storage::get_config(env);
    require_authority(&config, caller)?;
    config.oracle = Principal::Set(candidate.clone());
    storage::set_config(env, &config);
    Ok(())
}

// ════════════════════════════════════════════════════════════════════
//  Caller checks
// ════════════════════════════════════════════════════════════════════

pub fn require_authority(config: &RegistryConfig, caller: &Address) -> Result<(), Error> {
    if config.authority.is(caller) {
        Ok(())
    } else {
        Err(Error::NotAuthorized)
    }
}

pub fn require_oracle(config: &RegistryConfig, caller: &Address) -> Result<(), Error> {
    if config.oracle.is(caller) {
        Ok(())
    } else {
        Err(Error::OracleNotVerified)
    }
}

/// The bound authority, which also receives registration fees.
pub fn authority_address(config: &RegistryConfig) -> Result<Address, Error> {
    config.authority.address().ok_or(Error::AuthorityNotSet)
}
