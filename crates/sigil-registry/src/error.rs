//! # Registry Error Types
//!
//! The failure taxonomy of the certificate registry. Every variant is
//! terminal and synchronous: the triggering operation aborts and leaves
//! registry state unchanged.

use thiserror::Error;

use sigil_core::{AccountId, CredentialId};
use sigil_ledger::LedgerError;

use crate::roles::Role;

/// Errors surfaced by registry operations.
#[derive(Error, Debug)]
pub enum RegistryError {
    /// The caller does not hold the role the operation requires.
    #[error("caller {caller} lacks the {role} role")]
    Unauthorized {
        /// The account that attempted the operation.
        caller: AccountId,
        /// The role that was required.
        role: Role,
    },

    /// The account has already minted a credential at some point.
    ///
    /// Membership in the issuance record is permanent, so this is also
    /// returned when the earlier credential has since been burned.
    #[error("account {account} has already been issued a credential")]
    AlreadyIssued {
        /// The repeat minter.
        account: AccountId,
    },

    /// A holder-to-holder custody change was attempted.
    ///
    /// Credentials are bound to their original holder; the only
    /// permitted custody changes are issuance and burn.
    #[error("credential {id} is soulbound; transfer from {from} to {to} is forbidden")]
    TransferForbidden {
        /// The credential whose custody change was attempted.
        id: CredentialId,
        /// The requested source of the transfer.
        from: AccountId,
        /// The requested destination of the transfer.
        to: AccountId,
    },

    /// A delegated-approval operation was invoked.
    ///
    /// The approval surface is disabled entirely; there is nothing a
    /// delegate could ever be authorized to do.
    #[error("delegated approvals are disabled")]
    ApprovalsDisabled,

    /// The ownership ledger collaborator rejected the operation.
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}
