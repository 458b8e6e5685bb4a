//! # sigil-core — Foundational Types for the Sigil Registry
//!
//! This crate is the bedrock of the Sigil certificate registry. It defines
//! the identifier and temporal primitives every other crate in the
//! workspace builds on; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `AccountId` and
//!    `CredentialId` are newtypes with validated constructors. No bare
//!    strings or integers cross a crate boundary as an identifier.
//!
//! 2. **UTC-only timestamps.** The `Timestamp` type enforces UTC with `Z`
//!    suffix and seconds precision. Audit chain digests cover rendered
//!    timestamps, so their textual form must be deterministic.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `sigil-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod error;
pub mod identity;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use error::CoreError;
pub use identity::{AccountId, CredentialId};
pub use temporal::Timestamp;
