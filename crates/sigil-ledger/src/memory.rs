//! # In-Memory Ledger Backend
//!
//! Reference implementation of [`OwnershipLedger`] over an ordered map.
//! Serializable, so callers that persist registry snapshots can include
//! the ledger contents verbatim.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use sigil_core::{AccountId, CredentialId};

use crate::ledger::{LedgerError, OwnershipLedger};

/// One ledger entry: the holder and optional metadata reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// The account currently holding the credential.
    pub holder: AccountId,
    /// Opaque metadata reference (e.g. a URI), if one was attached.
    pub metadata: Option<String>,
}

/// An ordered in-memory custody ledger.
///
/// `BTreeMap` keeps iteration and serialized output deterministic.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InMemoryLedger {
    entries: BTreeMap<CredentialId, LedgerEntry>,
}

impl InMemoryLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live credentials.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the ledger holds no live credentials.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over live entries in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (&CredentialId, &LedgerEntry)> {
        self.entries.iter()
    }
}

impl OwnershipLedger for InMemoryLedger {
    fn create(&mut self, id: CredentialId, holder: AccountId) -> Result<(), LedgerError> {
        if self.entries.contains_key(&id) {
            return Err(LedgerError::DuplicateCredential { id });
        }
        self.entries.insert(
            id,
            LedgerEntry {
                holder,
                metadata: None,
            },
        );
        Ok(())
    }

    fn destroy(&mut self, id: CredentialId) -> Result<(), LedgerError> {
        self.entries
            .remove(&id)
            .map(|_| ())
            .ok_or(LedgerError::UnknownCredential { id })
    }

    fn holder_of(&self, id: CredentialId) -> Option<AccountId> {
        self.entries.get(&id).map(|e| e.holder.clone())
    }

    fn set_metadata(&mut self, id: CredentialId, reference: String) -> Result<(), LedgerError> {
        let entry = self
            .entries
            .get_mut(&id)
            .ok_or(LedgerError::UnknownCredential { id })?;
        entry.metadata = Some(reference);
        Ok(())
    }

    fn metadata_of(&self, id: CredentialId) -> Option<String> {
        self.entries.get(&id).and_then(|e| e.metadata.clone())
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
