//! # Ownership Ledger Contract
//!
//! The consumption contract for custody bookkeeping. Implementations
//! record which account currently holds which credential and the
//! credential's metadata reference, and nothing more.

use thiserror::Error;

use sigil_core::{AccountId, CredentialId};

/// Errors surfaced by an ownership ledger.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// The credential identifier is not present in the ledger.
    #[error("unknown credential {id}")]
    UnknownCredential {
        /// The missing identifier.
        id: CredentialId,
    },

    /// A credential with this identifier already exists.
    #[error("credential {id} already exists")]
    DuplicateCredential {
        /// The conflicting identifier.
        id: CredentialId,
    },
}

/// Generic custody bookkeeping: identifier → current holder + metadata.
///
/// The ledger enforces no policy. Callers are responsible for deciding
/// *whether* a credential may be created or destroyed; the ledger only
/// records the outcome.
pub trait OwnershipLedger {
    /// Record a new credential held by `holder`.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::DuplicateCredential`] if `id` is already
    /// present.
    fn create(&mut self, id: CredentialId, holder: AccountId) -> Result<(), LedgerError>;

    /// Remove a credential from the ledger entirely.
    ///
    /// After destruction the holder and metadata lookups both report
    /// absence.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::UnknownCredential`] if `id` is not present.
    fn destroy(&mut self, id: CredentialId) -> Result<(), LedgerError>;

    /// The current holder of `id`, or `None` if the credential does not
    /// exist (never created, or destroyed).
    fn holder_of(&self, id: CredentialId) -> Option<AccountId>;

    /// Attach an opaque metadata reference to an existing credential.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::UnknownCredential`] if `id` is not present.
    fn set_metadata(&mut self, id: CredentialId, reference: String) -> Result<(), LedgerError>;

    /// The metadata reference of `id`, if present.
    fn metadata_of(&self, id: CredentialId) -> Option<String>;
}
