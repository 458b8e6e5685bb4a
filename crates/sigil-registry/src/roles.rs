//! # Role Registry
//!
//! Maintains the two authorization sets of the registry: administrators
//! and whitelisted issuers. The sets are independent; holding one role
//! implies nothing about the other.
//!
//! ## Authorization Model
//!
//! Every mutating operation takes the caller explicitly and checks
//! membership with [`RoleRegistry::require`] before touching any set.
//! The check returns a typed result that callers consume with `?`;
//! there is no ambient "current caller" and no guard injection.
//!
//! The deployer passed to [`RoleRegistry::new`] is an administrator from
//! construction. Administrators may mutate both sets; nobody else may
//! mutate either.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use sigil_core::AccountId;

use crate::error::RegistryError;

// ─── Roles ───────────────────────────────────────────────────────────

/// The two roles an account can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// May manage both role sets and burn credentials.
    Administrator,
    /// May mint exactly one credential.
    Whitelisted,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Administrator => "ADMINISTRATOR",
            Self::Whitelisted => "WHITELISTED",
        };
        f.write_str(s)
    }
}

// ─── Role Registry ───────────────────────────────────────────────────

/// The two authorization sets, with administrator-gated mutation.
///
/// `BTreeSet` keeps iteration and serialized output deterministic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleRegistry {
    administrators: BTreeSet<AccountId>,
    whitelisted: BTreeSet<AccountId>,
}

impl RoleRegistry {
    /// Create a role registry with `deployer` as the initial administrator.
    pub fn new(deployer: AccountId) -> Self {
        let mut administrators = BTreeSet::new();
        administrators.insert(deployer);
        Self {
            administrators,
            whitelisted: BTreeSet::new(),
        }
    }

    /// Check that `caller` holds `role`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Unauthorized`] naming the caller and the
    /// missing role.
    pub fn require(&self, caller: &AccountId, role: Role) -> Result<(), RegistryError> {
        let held = match role {
            Role::Administrator => self.administrators.contains(caller),
            Role::Whitelisted => self.whitelisted.contains(caller),
        };
        if held {
            Ok(())
        } else {
            Err(RegistryError::Unauthorized {
                caller: caller.clone(),
                role,
            })
        }
    }

    /// Grant the administrator role. Idempotent.
    pub fn grant_admin(
        &mut self,
        caller: &AccountId,
        account: AccountId,
    ) -> Result<(), RegistryError> {
        self.require(caller, Role::Administrator)?;
        self.administrators.insert(account);
        Ok(())
    }

    /// Add an account to the whitelist. Idempotent.
    pub fn grant_whitelist(
        &mut self,
        caller: &AccountId,
        account: AccountId,
    ) -> Result<(), RegistryError> {
        self.require(caller, Role::Administrator)?;
        self.whitelisted.insert(account);
        Ok(())
    }

    /// Remove an account from the whitelist. Idempotent if absent.
    pub fn revoke_whitelist(
        &mut self,
        caller: &AccountId,
        account: &AccountId,
    ) -> Result<(), RegistryError> {
        self.require(caller, Role::Administrator)?;
        self.whitelisted.remove(account);
        Ok(())
    }

    /// Add a sequence of accounts to the whitelist, in order.
    ///
    /// All-or-nothing: the only failure mode is an unauthorized caller,
    /// which is checked before any set is touched, so a failing batch
    /// has no partial effect.
    pub fn grant_whitelist_batch(
        &mut self,
        caller: &AccountId,
        accounts: &[AccountId],
    ) -> Result<(), RegistryError> {
        self.require(caller, Role::Administrator)?;
        for account in accounts {
            self.whitelisted.insert(account.clone());
        }
        Ok(())
    }

    /// Remove a sequence of accounts from the whitelist, in order.
    ///
    /// All-or-nothing, same as [`RoleRegistry::grant_whitelist_batch`].
    pub fn revoke_whitelist_batch(
        &mut self,
        caller: &AccountId,
        accounts: &[AccountId],
    ) -> Result<(), RegistryError> {
        self.require(caller, Role::Administrator)?;
        for account in accounts {
            self.whitelisted.remove(account);
        }
        Ok(())
    }

    /// Whether `account` is an administrator.
    pub fn is_admin(&self, account: &AccountId) -> bool {
        self.administrators.contains(account)
    }

    /// Whether `account` is whitelisted.
    pub fn is_whitelisted(&self, account: &AccountId) -> bool {
        self.whitelisted.contains(account)
    }

    /// Iterate administrators in sorted order.
    pub fn administrators(&self) -> impl Iterator<Item = &AccountId> {
        self.administrators.iter()
    }

    /// Iterate whitelisted accounts in sorted order.
    pub fn whitelisted(&self) -> impl Iterator<Item = &AccountId> {
        self.whitelisted.iter()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn account(s: &str) -> AccountId {
        AccountId::new(s).unwrap()
    }

    fn registry() -> (RoleRegistry, AccountId) {
        let deployer = account("0xdeployer");
        (RoleRegistry::new(deployer.clone()), deployer)
    }

    #[test]
    fn test_deployer_is_admin() {
        let (roles, deployer) = registry();
        assert!(roles.is_admin(&deployer));
        assert!(roles.require(&deployer, Role::Administrator).is_ok());
    }

    #[test]
    fn test_deployer_is_not_whitelisted() {
        let (roles, deployer) = registry();
        assert!(!roles.is_whitelisted(&deployer));
        assert!(roles.require(&deployer, Role::Whitelisted).is_err());
    }

    #[test]
    fn test_admin_grants_whitelist() {
        let (mut roles, deployer) = registry();
        roles.grant_whitelist(&deployer, account("0xb")).unwrap();
        assert!(roles.is_whitelisted(&account("0xb")));
    }

    #[test]
    fn test_grant_is_idempotent() {
        let (mut roles, deployer) = registry();
        roles.grant_whitelist(&deployer, account("0xb")).unwrap();
        roles.grant_whitelist(&deployer, account("0xb")).unwrap();
        assert_eq!(roles.whitelisted().count(), 1);
    }

    #[test]
    fn test_revoke_absent_is_idempotent() {
        let (mut roles, deployer) = registry();
        roles.revoke_whitelist(&deployer, &account("0xb")).unwrap();
        assert!(!roles.is_whitelisted(&account("0xb")));
    }

    #[test]
    fn test_non_admin_cannot_grant() {
        let (mut roles, _) = registry();
        let err = roles
            .grant_whitelist(&account("0xmallory"), account("0xb"))
            .unwrap_err();
        assert!(matches!(
            err,
            RegistryError::Unauthorized {
                role: Role::Administrator,
                ..
            }
        ));
        assert!(!roles.is_whitelisted(&account("0xb")));
    }

    #[test]
    fn test_whitelisted_cannot_grant() {
        // The sets are independent: whitelist membership conveys no
        // administrative power.
        let (mut roles, deployer) = registry();
        roles.grant_whitelist(&deployer, account("0xb")).unwrap();
        assert!(roles
            .grant_whitelist(&account("0xb"), account("0xc"))
            .is_err());
    }

    #[test]
    fn test_granted_admin_can_grant() {
        let (mut roles, deployer) = registry();
        roles.grant_admin(&deployer, account("0xa2")).unwrap();
        roles
            .grant_whitelist(&account("0xa2"), account("0xb"))
            .unwrap();
        assert!(roles.is_whitelisted(&account("0xb")));
    }

    #[test]
    fn test_batch_grant_and_revoke() {
        let (mut roles, deployer) = registry();
        let batch = vec![account("0xb"), account("0xc"), account("0xd")];
        roles.grant_whitelist_batch(&deployer, &batch).unwrap();
        assert_eq!(roles.whitelisted().count(), 3);

        roles
            .revoke_whitelist_batch(&deployer, &batch[..2])
            .unwrap();
        assert_eq!(roles.whitelisted().count(), 1);
        assert!(roles.is_whitelisted(&account("0xd")));
    }

    #[test]
    fn test_unauthorized_batch_has_no_effect() {
        let (mut roles, _) = registry();
        let batch = vec![account("0xb"), account("0xc")];
        assert!(roles
            .grant_whitelist_batch(&account("0xmallory"), &batch)
            .is_err());
        assert_eq!(roles.whitelisted().count(), 0);
    }

    #[test]
    fn test_role_display() {
        assert_eq!(Role::Administrator.to_string(), "ADMINISTRATOR");
        assert_eq!(Role::Whitelisted.to_string(), "WHITELISTED");
    }
}
