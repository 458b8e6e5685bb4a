//! # sigil-ledger — Ownership Ledger Seam
//!
//! The ownership ledger is the generic custody bookkeeping collaborator
//! of the registry: it maps a credential identifier to its current
//! holder and metadata reference, and supports nothing else. The
//! registry consumes this contract through the [`OwnershipLedger`]
//! trait; all authorization and lockout decisions live above it.
//!
//! - **Contract** (`ledger.rs`): the `OwnershipLedger` trait and its
//!   error type.
//! - **Reference backend** (`memory.rs`): `InMemoryLedger`, an ordered
//!   in-memory map, serializable so callers can persist snapshots.
//!
//! ## Crate Policy
//!
//! - The ledger is deliberately ignorant of roles, issuance eligibility,
//!   and transfer rules. It will happily `create` and `destroy` whatever
//!   it is told to; the registry is the only caller allowed to tell it.
//! - No `unsafe` code, no `panic!()` or `.unwrap()` outside tests.

pub mod ledger;
pub mod memory;

pub use ledger::{LedgerError, OwnershipLedger};
pub use memory::{InMemoryLedger, LedgerEntry};
