//! # Certificate Registry
//!
//! The registry facade: issuance guard, transfer lockout, approval
//! lockout, and capability discovery over an [`OwnershipLedger`]
//! collaborator.
//!
//! ## Custody Primitive
//!
//! Every operation that can change a credential's holder — mint, burn,
//! and both transfer entry points — routes through the single internal
//! [`CertificateRegistry::update_holder`] primitive. Public transfer
//! operations are thin callers with no independent guard logic, so no
//! entry point can reach the ledger around the lockout.
//!
//! ## Execution Model
//!
//! Operations take `&mut self` and run to completion one at a time.
//! Each call either commits fully or returns an error having mutated
//! nothing; all checks precede all mutations. The audit log is the one
//! deliberate exception: a rejected transfer is recorded even though
//! the transfer itself commits nothing.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use sigil_core::{AccountId, CredentialId};
use sigil_ledger::{InMemoryLedger, LedgerEntry, LedgerError, OwnershipLedger};

use crate::capability::Capability;
use crate::custody::CustodyState;
use crate::error::RegistryError;
use crate::events::{AuditLog, CustodyEvent};
use crate::roles::{Role, RoleRegistry};

/// A registry of soulbound certificate credentials.
///
/// Issues at most one credential per whitelisted account and permanently
/// blocks any later change of custodian. Generic over the ownership
/// ledger collaborator; [`InMemoryLedger`] is the default backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CertificateRegistry<L = InMemoryLedger> {
    roles: RoleRegistry,
    /// Accounts that have ever minted. Membership is permanent: it
    /// survives the burn of the credential it records.
    issued: BTreeSet<AccountId>,
    /// Next identifier to allocate. Ids start at 1 and never recycle.
    next_id: u64,
    ledger: L,
    audit: AuditLog,
}

impl CertificateRegistry<InMemoryLedger> {
    /// Create a registry with `deployer` as the initial administrator,
    /// backed by an in-memory ledger.
    pub fn new(deployer: AccountId) -> Self {
        Self::with_ledger(deployer, InMemoryLedger::new())
    }

    /// Iterate live credentials in identifier order.
    pub fn credentials(&self) -> impl Iterator<Item = (&CredentialId, &LedgerEntry)> {
        self.ledger.iter()
    }
}

impl<L: OwnershipLedger> CertificateRegistry<L> {
    /// Create a registry with `deployer` as the initial administrator,
    /// backed by the given ledger.
    pub fn with_ledger(deployer: AccountId, ledger: L) -> Self {
        Self {
            roles: RoleRegistry::new(deployer),
            issued: BTreeSet::new(),
            next_id: 1,
            ledger,
            audit: AuditLog::new(),
        }
    }

    // ─── Role management ─────────────────────────────────────────────

    /// Grant the administrator role. Caller must be an administrator.
    pub fn grant_admin(
        &mut self,
        caller: &AccountId,
        account: AccountId,
    ) -> Result<(), RegistryError> {
        self.roles.grant_admin(caller, account.clone())?;
        tracing::info!(account = %account, "administrator granted");
        Ok(())
    }

    /// Add accounts to the whitelist, in order, all-or-nothing.
    /// Caller must be an administrator.
    pub fn grant_whitelist(
        &mut self,
        caller: &AccountId,
        accounts: &[AccountId],
    ) -> Result<(), RegistryError> {
        self.roles.grant_whitelist_batch(caller, accounts)?;
        tracing::info!(count = accounts.len(), "whitelist granted");
        Ok(())
    }

    /// Remove accounts from the whitelist, in order, all-or-nothing.
    /// Caller must be an administrator.
    pub fn revoke_whitelist(
        &mut self,
        caller: &AccountId,
        accounts: &[AccountId],
    ) -> Result<(), RegistryError> {
        self.roles.revoke_whitelist_batch(caller, accounts)?;
        tracing::info!(count = accounts.len(), "whitelist revoked");
        Ok(())
    }

    // ─── Issuance guard ──────────────────────────────────────────────

    /// Issue a new credential to `caller`.
    ///
    /// The caller must be whitelisted and must never have minted
    /// before, not even a credential that has since been burned. This
    /// is the only path by which a credential comes into existence.
    ///
    /// # Errors
    ///
    /// [`RegistryError::Unauthorized`] if the caller is not whitelisted;
    /// [`RegistryError::AlreadyIssued`] if the caller appears in the
    /// issuance record.
    pub fn mint(
        &mut self,
        caller: &AccountId,
        metadata: &str,
    ) -> Result<CredentialId, RegistryError> {
        self.roles.require(caller, Role::Whitelisted)?;
        if self.issued.contains(caller) {
            return Err(RegistryError::AlreadyIssued {
                account: caller.clone(),
            });
        }

        let id = CredentialId::new(self.next_id);
        self.update_holder(id, None, Some(caller.clone()))?;
        self.ledger.set_metadata(id, metadata.to_string())?;
        self.next_id += 1;
        self.issued.insert(caller.clone());
        self.audit.record(CustodyEvent::Issued {
            id,
            to: caller.clone(),
        });
        tracing::info!(credential = %id, holder = %caller, "credential issued");
        Ok(id)
    }

    /// Destroy a credential. Caller must be an administrator.
    ///
    /// The issuance record is not touched: the former holder can never
    /// mint again.
    ///
    /// # Errors
    ///
    /// [`RegistryError::Unauthorized`] if the caller is not an
    /// administrator; [`LedgerError::UnknownCredential`] if `id` does
    /// not exist.
    pub fn burn(&mut self, caller: &AccountId, id: CredentialId) -> Result<(), RegistryError> {
        self.roles.require(caller, Role::Administrator)?;
        let holder = self
            .ledger
            .holder_of(id)
            .ok_or(LedgerError::UnknownCredential { id })?;

        self.update_holder(id, Some(holder.clone()), None)?;
        self.audit.record(CustodyEvent::Burned {
            id,
            from: holder.clone(),
        });
        tracing::info!(credential = %id, holder = %holder, "credential burned");
        Ok(())
    }

    // ─── Transfer lockout ────────────────────────────────────────────

    /// Request a direct transfer. May be invoked by anyone; fails for
    /// every held credential, since a credential is bound to its
    /// original holder.
    pub fn transfer(
        &mut self,
        from: &AccountId,
        to: &AccountId,
        id: CredentialId,
    ) -> Result<(), RegistryError> {
        // Thin entry point: existence check, then the common primitive.
        // The check keeps an unknown id from reaching the issuance arm
        // of `update_holder`.
        if self.ledger.holder_of(id).is_none() {
            return Err(LedgerError::UnknownCredential { id }.into());
        }
        self.update_holder(id, Some(from.clone()), Some(to.clone()))
    }

    /// Request a transfer carrying a receiver payload.
    ///
    /// The payload variant exists for surface compatibility with
    /// generic token registries; the payload is never delivered because
    /// the transfer itself is rejected.
    pub fn safe_transfer(
        &mut self,
        from: &AccountId,
        to: &AccountId,
        id: CredentialId,
        _payload: Option<&[u8]>,
    ) -> Result<(), RegistryError> {
        self.transfer(from, to, id)
    }

    // ─── Approval lockout ────────────────────────────────────────────

    /// Single-credential delegation. Always fails; reads and writes
    /// nothing.
    pub fn approve(
        &self,
        _caller: &AccountId,
        _delegate: &AccountId,
        _id: CredentialId,
    ) -> Result<(), RegistryError> {
        Err(RegistryError::ApprovalsDisabled)
    }

    /// Blanket delegation. Always fails; reads and writes nothing.
    pub fn set_approval_for_all(
        &self,
        _caller: &AccountId,
        _operator: &AccountId,
        _approved: bool,
    ) -> Result<(), RegistryError> {
        Err(RegistryError::ApprovalsDisabled)
    }

    // ─── Capability discovery ────────────────────────────────────────

    /// Whether this registry implements the given capability set.
    pub fn supports(&self, capability: Capability) -> bool {
        match capability {
            Capability::Custody | Capability::Metadata => true,
            Capability::Delegation => false,
        }
    }

    // ─── Queries ─────────────────────────────────────────────────────

    /// Current holder of `id`, if the credential exists.
    pub fn holder_of(&self, id: CredentialId) -> Option<AccountId> {
        self.ledger.holder_of(id)
    }

    /// Metadata reference of `id`, if the credential exists.
    pub fn metadata_of(&self, id: CredentialId) -> Option<String> {
        self.ledger.metadata_of(id)
    }

    /// The custody state of an identifier.
    ///
    /// An identifier below the allocation watermark with no ledger
    /// entry was necessarily issued and later burned.
    pub fn custody_state(&self, id: CredentialId) -> CustodyState {
        if self.ledger.holder_of(id).is_some() {
            CustodyState::Held
        } else if id.value() >= 1 && id.value() < self.next_id {
            CustodyState::Burned
        } else {
            CustodyState::Unissued
        }
    }

    /// Whether `account` has ever minted, including burned credentials.
    pub fn has_issued(&self, account: &AccountId) -> bool {
        self.issued.contains(account)
    }

    /// Total credentials ever minted (burned ones included).
    pub fn total_minted(&self) -> u64 {
        self.next_id - 1
    }

    /// The role sets.
    pub fn roles(&self) -> &RoleRegistry {
        &self.roles
    }

    /// The audit log.
    pub fn audit(&self) -> &AuditLog {
        &self.audit
    }

    // ─── Custody primitive ───────────────────────────────────────────

    /// The single custody-transition primitive.
    ///
    /// Reads the current holder from the ledger and classifies the
    /// requested change:
    ///
    /// - held + non-null target → holder-to-holder move: recorded to the
    ///   audit log and rejected;
    /// - null → holder: issuance (ledger `create`);
    /// - holder → null: burn (ledger `destroy`).
    ///
    /// The guard decision is made against the ledger's current holder;
    /// the audit record carries the caller-requested `(from, to)` pair
    /// verbatim.
    fn update_holder(
        &mut self,
        id: CredentialId,
        requested_from: Option<AccountId>,
        requested_to: Option<AccountId>,
    ) -> Result<(), RegistryError> {
        let current = self.ledger.holder_of(id);

        match (current, requested_to) {
            (Some(held_by), Some(to)) => {
                let from = requested_from.unwrap_or(held_by);
                self.audit.record(CustodyEvent::TransferRejected {
                    id,
                    from: from.clone(),
                    to: to.clone(),
                });
                tracing::warn!(
                    credential = %id,
                    from = %from,
                    to = %to,
                    "holder-to-holder transfer rejected"
                );
                Err(RegistryError::TransferForbidden { id, from, to })
            }
            (None, Some(holder)) => {
                self.ledger.create(id, holder)?;
                Ok(())
            }
            (Some(_), None) => {
                self.ledger.destroy(id)?;
                Ok(())
            }
            (None, None) => Err(LedgerError::UnknownCredential { id }.into()),
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────


// ─── Property Tests ──────────────────────────────────────────────────

#[cfg(test)]
mod proptests {
    use proptest::prelude::*;

    use super::*;

    fn account_strategy() -> impl Strategy<Value = AccountId> {
        "[a-f0-9]{4,12}".prop_map(|s| AccountId::new(format!("0x{s}")).unwrap())
    }

    /// A minted registry plus its holder.
    fn minted() -> (CertificateRegistry, AccountId) {
        let admin = AccountId::new("0xadmin").unwrap();
        let holder = AccountId::new("0xholder").unwrap();
        let mut registry = CertificateRegistry::new(admin.clone());
        registry.grant_whitelist(&admin, &[holder.clone()]).unwrap();
        registry.mint(&holder, "ipfs://cert").unwrap();
        (registry, holder)
    }

    proptest! {
        /// No sequence of transfer calls, over either entry point, ever
        /// changes the holder; every attempt appends one abuse record.
        #[test]
        fn holder_never_changes(
            attempts in prop::collection::vec(
                (account_strategy(), account_strategy(), any::<bool>()),
                1..16,
            )
        ) {
            let (mut registry, holder) = minted();
            let id = CredentialId::new(1);

            for (from, to, safe) in &attempts {
                let result = if *safe {
                    registry.safe_transfer(from, to, id, Some(b"x"))
                } else {
                    registry.transfer(from, to, id)
                };
                let is_forbidden = matches!(
                    result,
                    Err(RegistryError::TransferForbidden { .. })
                );
                prop_assert!(is_forbidden);
            }

            prop_assert_eq!(registry.holder_of(id), Some(holder));
            // One Issued record plus one rejection per attempt.
            prop_assert_eq!(registry.audit().len(), 1 + attempts.len());
            prop_assert!(registry.audit().verify_chain());
        }

        /// Approval calls never mutate observable state, for arbitrary
        /// callers and arguments.
        #[test]
        fn approvals_never_mutate(
            calls in prop::collection::vec(
                (account_strategy(), account_strategy(), any::<bool>()),
                1..16,
            )
        ) {
            let (registry, holder) = minted();
            let id = CredentialId::new(1);
            let audit_len = registry.audit().len();

            for (caller, other, blanket) in &calls {
                let result = if *blanket {
                    registry.set_approval_for_all(caller, other, true)
                } else {
                    registry.approve(caller, other, id)
                };
                prop_assert!(matches!(result, Err(RegistryError::ApprovalsDisabled)));
            }

            prop_assert_eq!(registry.holder_of(id), Some(holder));
            prop_assert_eq!(registry.audit().len(), audit_len);
        }
    }
}
