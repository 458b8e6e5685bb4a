//! End-to-end lifecycle exercised through the public surface only.

use sigil_core::{AccountId, CredentialId};
use sigil_registry::{
    Capability, CertificateRegistry, CustodyEvent, CustodyState, RegistryError,
};

fn account(s: &str) -> AccountId {
    AccountId::new(s).unwrap()
}

/// The canonical issuance-through-revocation scenario:
/// grant, mint, repeat-mint rejection, burn, re-mint rejection.
#[test]
fn issuance_lifecycle() {
    let admin = account("0xalice");
    let holder = account("0xbob");
    let mut registry = CertificateRegistry::new(admin.clone());

    // Administrator whitelists the issuer.
    registry.grant_whitelist(&admin, &[holder.clone()]).unwrap();

    // First mint succeeds with id 1.
    let id = registry.mint(&holder, "ipfs://x").unwrap();
    assert_eq!(id, CredentialId::new(1));
    assert_eq!(registry.holder_of(id), Some(holder.clone()));
    assert_eq!(registry.metadata_of(id), Some("ipfs://x".to_string()));

    // Second mint is rejected.
    assert!(matches!(
        registry.mint(&holder, "ipfs://x").unwrap_err(),
        RegistryError::AlreadyIssued { .. }
    ));

    // Administrator burns the credential.
    registry.burn(&admin, id).unwrap();
    assert_eq!(registry.holder_of(id), None);
    assert_eq!(registry.custody_state(id), CustodyState::Burned);

    // The former holder still cannot mint: issuance is once per
    // account, ever.
    assert!(matches!(
        registry.mint(&holder, "ipfs://x").unwrap_err(),
        RegistryError::AlreadyIssued { .. }
    ));
}

/// A held credential survives every transfer entry point, and the
/// attempt is auditable afterwards.
#[test]
fn soulbound_custody() {
    let admin = account("0xalice");
    let holder = account("0xbob");
    let target = account("0xcarol");
    let mut registry = CertificateRegistry::new(admin.clone());
    registry.grant_whitelist(&admin, &[holder.clone()]).unwrap();
    let id = registry.mint(&holder, "ipfs://x").unwrap();

    let err = registry.transfer(&holder, &target, id).unwrap_err();
    assert!(matches!(err, RegistryError::TransferForbidden { .. }));
    assert_eq!(registry.holder_of(id), Some(holder.clone()));

    let err = registry
        .safe_transfer(&holder, &target, id, Some(b"hello"))
        .unwrap_err();
    assert!(matches!(err, RegistryError::TransferForbidden { .. }));
    assert_eq!(registry.holder_of(id), Some(holder.clone()));

    // Both attempts were recorded with the requested tuple, and the
    // chain is intact.
    let rejected: Vec<_> = registry.audit().rejected_transfers().collect();
    assert_eq!(rejected.len(), 2);
    for record in rejected {
        assert_eq!(
            record.event,
            CustodyEvent::TransferRejected {
                id,
                from: holder.clone(),
                to: target.clone(),
            }
        );
    }
    assert!(registry.audit().verify_chain());
}

/// Delegation is discoverably unsupported, and the approval surface
/// refuses every caller.
#[test]
fn delegation_surface_closed() {
    let admin = account("0xalice");
    let mut registry = CertificateRegistry::new(admin.clone());
    registry.grant_whitelist(&admin, &[admin.clone()]).unwrap();
    let id = registry.mint(&admin, "ipfs://x").unwrap();

    assert!(!registry.supports(Capability::Delegation));
    assert!(registry.supports(Capability::Custody));

    assert!(matches!(
        registry.approve(&admin, &account("0xd"), id).unwrap_err(),
        RegistryError::ApprovalsDisabled
    ));
    assert!(matches!(
        registry
            .set_approval_for_all(&admin, &account("0xd"), false)
            .unwrap_err(),
        RegistryError::ApprovalsDisabled
    ));
}
