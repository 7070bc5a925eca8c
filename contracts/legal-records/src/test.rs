//! Shared test fixtures plus end-to-end lifecycle scenarios.

use super::*;
use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::token::{Client as TokenClient, StellarAssetClient};
use soroban_sdk::{symbol_short, Address, Env, String};

pub(crate) const ORACLE_FUNDS: i128 = 10_000;

pub(crate) struct TestSetup<'a> {
    pub env: Env,
    pub client: LegalRecordsContractClient<'a>,
    pub contract_id: Address,
    pub token_addr: Address,
    /// Account that binds the authority.
    pub deployer: Address,
    pub authority: Address,
    pub oracle: Address,
}

impl TestSetup<'static> {
    /// Contract deployed and a fee token minted to the oracle, but no
    /// authority, oracle or fee token bound yet.
    pub fn bare() -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.ledger().set_sequence_number(100);

        let token_admin = Address::generate(&env);
        let token_contract = env.register_stellar_asset_contract_v2(token_admin);
        let token_addr = token_contract.address().clone();

        let contract_id = env.register(LegalRecordsContract, ());
        let client = LegalRecordsContractClient::new(&env, &contract_id);

        let deployer = Address::generate(&env);
        let authority = Address::generate(&env);
        let oracle = Address::generate(&env);
        mint(&env, &token_addr, &oracle, ORACLE_FUNDS);

        TestSetup {
            env,
            client,
            contract_id,
            token_addr,
            deployer,
            authority,
            oracle,
        }
    }

    /// Fully bootstrapped: authority bound by the deployer, oracle and fee
    /// token set by the authority.
    pub fn new() -> Self {
        let t = Self::bare();
        t.client.set_authority_contract(&t.deployer, &t.authority);
        t.client.set_oracle_principal(&t.authority, &t.oracle);
        t.client.set_fee_token(&t.authority, &t.token_addr);
        t
    }
}

impl TestSetup<'_> {
    pub fn s(&self, v: &str) -> String {
        String::from_str(&self.env, v)
    }

    pub fn doc_hash(&self, byte: u8) -> String {
        fill(&self.env, byte, 64)
    }

    /// Register a deed with valid defaults as the oracle.
    pub fn register_deed(&self, property_id: u64, hash_byte: u8) {
        self.client.register_legal_record(
            &self.oracle,
            &property_id,
            &self.s("deed"),
            &self.doc_hash(hash_byte),
            &self.s("USA"),
            &self.s("Test metadata"),
            &None,
            &symbol_short!("USD"),
            &self.s("New York"),
        );
    }

    pub fn set_sequence(&self, seq: u32) {
        self.env.ledger().set_sequence_number(seq);
    }

    pub fn balance(&self, who: &Address) -> i128 {
        TokenClient::new(&self.env, &self.token_addr).balance(who)
    }
}

pub(crate) fn fill(env: &Env, byte: u8, len: usize) -> String {
    let buf = [byte; 300];
    String::from_bytes(env, &buf[..len])
}

/// A 64-byte string made of 32 two-byte characters.
pub(crate) fn multibyte_hash(env: &Env) -> String {
    let mut buf = [0u8; 64];
    for pair in buf.chunks_mut(2) {
        pair.copy_from_slice("é".as_bytes());
    }
    String::from_bytes(env, &buf)
}

pub(crate) fn mint(env: &Env, token_addr: &Address, to: &Address, amount: i128) {
    StellarAssetClient::new(env, token_addr).mint(to, &amount);
}

// ════════════════════════════════════════════════════════════════════
//  Scenarios
// ════════════════════════════════════════════════════════════════════

#[test]
fn register_count_exists_revoke_verify() {
    let t = TestSetup::new();
    let hash = t.doc_hash(b'a');

    t.register_deed(1, b'a');
    assert_eq!(t.client.get_record_count(), 1);
    assert!(t.client.check_record_existence(&hash));

    let verified = t.client.verify_record(&1, &t.s("deed"));
    assert!(verified.valid);
    assert_eq!(verified.details.hash, hash);

    t.client.revoke_record(&t.oracle, &1, &t.s("deed"));
    assert_eq!(
        t.client.try_verify_record(&1, &t.s("deed")),
        Err(Ok(Error::InvalidStatus))
    );

    // Revocation keeps the record and its hash index entry.
    let record = t.client.get_record(&1, &t.s("deed")).unwrap();
    assert_eq!(record.status, RecordStatus::Revoked);
    assert_eq!(record.hash, hash);
    assert!(t.client.check_record_existence(&hash));
    assert_eq!(t.client.get_record_count(), 1);
}

#[test]
fn jurisdiction_must_be_three_characters() {
    let t = TestSetup::new();

    let res = t.client.try_register_legal_record(
        &t.oracle,
        &1,
        &t.s("deed"),
        &t.doc_hash(b'a'),
        &t.s("US"),
        &t.s("Test metadata"),
        &None,
        &symbol_short!("USD"),
        &t.s("New York"),
    );
    assert_eq!(res, Err(Ok(Error::InvalidJurisdiction)));

    let res = t.client.try_register_legal_record(
        &t.oracle,
        &1,
        &t.s("deed"),
        &t.doc_hash(b'a'),
        &t.s("USA"),
        &t.s("Test metadata"),
        &None,
        &symbol_short!("USD"),
        &t.s("New York"),
    );
    assert_eq!(res, Ok(Ok(())));
}

#[test]
fn hash_lookup_returns_record_key() {
    let t = TestSetup::new();
    t.register_deed(42, b'c');

    let key = t.client.get_record_by_hash(&t.doc_hash(b'c')).unwrap();
    assert_eq!(key.property_id, 42);
    assert_eq!(key.doc_type, t.s("deed"));

    assert!(t.client.get_record_by_hash(&t.doc_hash(b'z')).is_none());
    assert!(!t.client.check_record_existence(&t.doc_hash(b'z')));
}

#[test]
fn defaults_before_bootstrap() {
    let t = TestSetup::bare();

    let config = t.client.get_config();
    assert_eq!(config.next_record_id, 0);
    assert_eq!(config.max_records, storage::DEFAULT_MAX_RECORDS);
    assert_eq!(config.registration_fee, storage::DEFAULT_REGISTRATION_FEE);
    assert_eq!(config.governance_threshold, storage::DEFAULT_GOVERNANCE_THRESHOLD);
    assert_eq!(config.authority, Principal::Unset);
    assert_eq!(config.oracle, Principal::Unset);

    assert_eq!(t.client.get_authority(), None);
    assert_eq!(t.client.get_oracle(), None);
    assert_eq!(t.client.get_fee_token(), None);
    assert_eq!(t.client.get_record_count(), 0);
}

#[test]
fn independent_registries_do_not_share_state() {
    let a = TestSetup::new();
    let b = TestSetup::new();

    a.register_deed(1, b'a');

    assert_eq!(a.client.get_record_count(), 1);
    assert_eq!(b.client.get_record_count(), 0);
    assert!(b.client.get_record(&1, &b.s("deed")).is_none());
}
