//! # sigil-cli — Certificate Registry Command-Line Interface
//!
//! Drives a [`sigil_registry::CertificateRegistry`] persisted as a JSON
//! state file, one operation per invocation, matching the registry's
//! sequential, all-or-nothing execution model.
//!
//! ## Subcommands
//!
//! - `init` — Create the state file with the deployer as administrator
//! - `role` — Grant/revoke whitelist membership, grant administrators
//! - `mint` / `burn` — Issue and destroy credentials
//! - `transfer` — Attempt a transfer (rejected for held credentials;
//!   the attempt is persisted to the audit log)
//! - `inspect` — Holder, metadata, and custody state of a credential
//! - `audit` — List audit records and verify the hash chain
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from the operations themselves.
//! - Handlers call into `sigil-registry`; no custody or authorization
//!   decision lives in this crate.

pub mod audit;
pub mod config;
pub mod credential;
pub mod role;
pub mod store;
pub mod transfer;
