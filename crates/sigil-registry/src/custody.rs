//! # Custody State
//!
//! The per-credential custody lifecycle.
//!
//! ## States
//!
//! ```text
//! Unissued ──mint──▶ Held ──burn──▶ Burned (terminal)
//! ```
//!
//! `Held → Held` with a different holder is the forbidden transition.
//! It is rejected by the registry's single custody primitive, which all
//! transfer-like entry points route through; both allowed transitions
//! involve a null endpoint (no holder on one side).

use serde::{Deserialize, Serialize};

/// The custody state of a credential identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CustodyState {
    /// Never issued: the identifier has not been allocated.
    Unissued,
    /// Issued and bound to its original holder.
    Held,
    /// Issued, then destroyed by an administrator (terminal).
    Burned,
}

impl CustodyState {
    /// Whether this state is terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Burned)
    }

    /// Whether the credential currently has a holder.
    pub fn is_held(&self) -> bool {
        matches!(self, Self::Held)
    }
}

impl std::fmt::Display for CustodyState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Unissued => "UNISSUED",
            Self::Held => "HELD",
            Self::Burned => "BURNED",
        };
        f.write_str(s)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
