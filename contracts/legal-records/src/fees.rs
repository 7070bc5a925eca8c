//! # Registration Fees
//!
//! A flat fee, paid in the token configured with `set_fee_token`, moves from the
//! registering oracle to the authority on every successful registration.
//!
//! The transfer goes through `try_transfer` so a rejected transfer (missing
//! balance, frozen account, bad token) surfaces as [`Error::TransferFailed`]
//! instead of aborting the invocation. Callers must run it before writing any
//! record state.

use soroban_sdk::{token, Address, Env};

use crate::errors::Error;
use crate::storage;

/// Move `amount` of the fee token from `from` to `to`.
pub fn collect_fee(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), Error> {
    let token_addr = storage::get_fee_token(env).ok_or(Error::TransferFailed)?;
    let client = token::Client::new(env, &token_addr);
    match client.try_transfer(from, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(Error::TransferFailed),
    }
}
