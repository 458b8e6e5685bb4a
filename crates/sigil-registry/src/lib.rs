//! # sigil-registry — Soulbound Certificate Registry Core
//!
//! Implements the domain core of the Sigil registry:
//!
//! - **Roles** (`roles.rs`): the two authorization sets — administrators
//!   and whitelisted issuers — with administrator-gated, all-or-nothing
//!   batch mutation.
//!
//! - **Custody** (`custody.rs`): the per-credential lifecycle
//!   (`Unissued → Held → Burned`). A held credential can never move to
//!   another holder.
//!
//! - **Registry** (`registry.rs`): the facade. Issuance guard (one
//!   credential per account, ever), transfer lockout enforced in a
//!   single custody primitive that every entry point routes through,
//!   approval lockout, and capability discovery.
//!
//! - **Events** (`events.rs`): append-only, hash-chained audit log of
//!   custody events, including rejected transfer attempts.
//!
//! - **Capability** (`capability.rs`): the closed set of discoverable
//!   capability tags.
//!
//! ## Security Invariant
//!
//! There is exactly one code path to the ownership ledger's `create` and
//! `destroy`: the registry's internal custody primitive. Public
//! transfer-like operations are thin callers, so no entry point can
//! bypass the soulbound guard.
//!
//! ## Crate Policy
//!
//! - Depends on `sigil-core` and `sigil-ledger` internally.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod capability;
pub mod custody;
pub mod error;
pub mod events;
pub mod registry;
pub mod roles;

// Re-export primary types for ergonomic imports.
pub use capability::Capability;
pub use custody::CustodyState;
pub use error::RegistryError;
pub use events::{AuditLog, AuditRecord, CustodyEvent};
pub use registry::CertificateRegistry;
pub use roles::{Role, RoleRegistry};
