//! # Domain Identity Newtypes
//!
//! Newtype wrappers for the two identifier namespaces of the registry.
//! Passing a `CredentialId` where an `AccountId` is expected is a type
//! error, not a runtime surprise.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ─── AccountId ───────────────────────────────────────────────────────

/// An opaque, uniquely comparable actor reference.
///
/// Accounts hold roles and credentials. The registry never interprets
/// the inner string beyond equality; any externally-addressable actor
/// reference (an address, a DID, a key fingerprint) is acceptable as
/// long as it is non-empty and printable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    /// Create an account identifier, validating the input.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is empty or contains whitespace
    /// or control characters.
    pub fn new(s: impl Into<String>) -> Result<Self, CoreError> {
        let s = s.into();
        if s.is_empty() {
            return Err(CoreError::InvalidAccountId {
                input: s,
                reason: "must not be empty",
            });
        }
        if s.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(CoreError::InvalidAccountId {
                input: s,
                reason: "must not contain whitespace or control characters",
            });
        }
        Ok(Self(s))
    }

    /// Access the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for AccountId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ─── CredentialId ────────────────────────────────────────────────────

/// Numeric identifier of an issued credential.
///
/// Allocated by the registry starting at 1, strictly increasing, and
/// never reused, not even after the credential is burned.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CredentialId(u64);

impl CredentialId {
    /// Wrap a raw identifier value.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// The raw identifier value.
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl FromStr for CredentialId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>()
            .map(Self)
            .map_err(|_| CoreError::InvalidCredentialId { input: s.to_string() })
    }
}

impl std::fmt::Display for CredentialId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_id_accepts_address_like_strings() {
        for input in ["0xA1B2c3", "did:example:alice", "alice@zone-1", "k-7f9e"] {
            let id = AccountId::new(input).expect("should be accepted");
            assert_eq!(id.as_str(), input);
        }
    }

    #[test]
    fn test_account_id_rejects_empty() {
        assert!(AccountId::new("").is_err());
    }

    #[test]
    fn test_account_id_rejects_whitespace_and_control() {
        assert!(AccountId::new("alice bob").is_err());
        assert!(AccountId::new("alice\n").is_err());
        assert!(AccountId::new("\talice").is_err());
    }

    #[test]
    fn test_account_id_display_round_trip() {
        let id: AccountId = "0xfeed".parse().expect("parses");
        let round: AccountId = id.to_string().parse().expect("round trips");
        assert_eq!(id, round);
    }

    #[test]
    fn test_credential_id_parse_and_display() {
        let id: CredentialId = "42".parse().expect("parses");
        assert_eq!(id.value(), 42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn test_credential_id_rejects_non_numeric() {
        assert!("abc".parse::<CredentialId>().is_err());
        assert!("-1".parse::<CredentialId>().is_err());
        assert!("".parse::<CredentialId>().is_err());
    }

    #[test]
    fn test_serde_transparent_representation() {
        let account = AccountId::new("0xabc").unwrap();
        assert_eq!(serde_json::to_string(&account).unwrap(), "\"0xabc\"");

        let credential = CredentialId::new(7);
        assert_eq!(serde_json::to_string(&credential).unwrap(), "7");
    }
}
