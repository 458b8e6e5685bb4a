//! # Credential Subcommands
//!
//! Issuance, burn, and inspection.

use std::path::Path;

use clap::Args;

use sigil_core::{AccountId, CredentialId};
use sigil_registry::Capability;

use crate::store;

/// Arguments for the mint subcommand.
#[derive(Args, Debug)]
pub struct MintArgs {
    /// Acting account; must be whitelisted and not have minted before.
    #[arg(long = "as", value_name = "ACCOUNT")]
    pub caller: AccountId,
    /// Opaque metadata reference attached to the credential.
    pub metadata: String,
}

/// Arguments for the burn subcommand.
#[derive(Args, Debug)]
pub struct BurnArgs {
    /// Acting account; must be an administrator.
    #[arg(long = "as", value_name = "ACCOUNT")]
    pub caller: AccountId,
    /// The credential to destroy.
    pub id: CredentialId,
}

/// Arguments for the inspect subcommand.
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// The credential to inspect.
    pub id: CredentialId,
}

/// Mint a credential for the caller.
pub fn mint(state: &Path, args: MintArgs) -> anyhow::Result<()> {
    let mut registry = store::load(state)?;
    let id = registry.mint(&args.caller, &args.metadata)?;
    store::save(state, &registry)?;
    println!("issued credential {id} to {}", args.caller);
    Ok(())
}

/// Burn a credential.
pub fn burn(state: &Path, args: BurnArgs) -> anyhow::Result<()> {
    let mut registry = store::load(state)?;
    registry.burn(&args.caller, args.id)?;
    store::save(state, &registry)?;
    println!("burned credential {}", args.id);
    Ok(())
}

/// List live credentials in identifier order.
pub fn list(state: &Path) -> anyhow::Result<()> {
    let registry = store::load(state)?;
    for (id, entry) in registry.credentials() {
        let metadata = entry.metadata.as_deref().unwrap_or("none");
        println!("{id} holder={} metadata={metadata}", entry.holder);
    }
    Ok(())
}

/// Report the registry's capability sets.
pub fn capabilities(state: &Path) -> anyhow::Result<()> {
    let registry = store::load(state)?;
    for capability in Capability::ALL {
        let supported = if registry.supports(capability) {
            "supported"
        } else {
            "unsupported"
        };
        println!("{capability}: {supported}");
    }
    Ok(())
}

/// Show holder, metadata, and custody state.
pub fn inspect(state: &Path, args: InspectArgs) -> anyhow::Result<()> {
    let registry = store::load(state)?;
    println!("credential: {}", args.id);
    println!("state: {}", registry.custody_state(args.id));
    match registry.holder_of(args.id) {
        Some(holder) => println!("holder: {holder}"),
        None => println!("holder: none"),
    }
    match registry.metadata_of(args.id) {
        Some(reference) => println!("metadata: {reference}"),
        None => println!("metadata: none"),
    }
    Ok(())
}
