//! # Capability Discovery
//!
//! A closed set of capability tags external callers can probe with
//! [`crate::CertificateRegistry::supports`] to discover what this
//! registry implements before calling into it.

use serde::{Deserialize, Serialize};

/// Capability sets a token registry may expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Capability {
    /// Core custody surface: issuance, burn, holder lookup.
    Custody,
    /// Metadata references attached to credentials.
    Metadata,
    /// Delegated-transfer approvals. Never supported here: the approval
    /// surface is permanently disabled.
    Delegation,
}

impl Capability {
    /// Every capability tag, for enumeration.
    pub const ALL: [Capability; 3] = [Self::Custody, Self::Metadata, Self::Delegation];

    /// The canonical tag string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Custody => "custody",
            Self::Metadata => "metadata",
            Self::Delegation => "delegation",
        }
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
