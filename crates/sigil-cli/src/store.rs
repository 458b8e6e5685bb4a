//! # Registry State Store
//!
//! Loads and saves the registry as a JSON state file. Saves go through
//! a temporary file and an atomic rename so an interrupted write never
//! leaves a half-written state behind.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context};
use clap::Args;

use sigil_core::AccountId;
use sigil_registry::CertificateRegistry;

/// Arguments for the init subcommand.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Account that becomes the initial administrator.
    #[arg(long)]
    pub deployer: AccountId,
}

/// Create a fresh state file. Refuses to overwrite an existing one.
pub fn init(state: &Path, args: InitArgs) -> anyhow::Result<()> {
    if state.exists() {
        bail!("state file {} already exists", state.display());
    }
    let registry = CertificateRegistry::new(args.deployer.clone());
    save(state, &registry)?;
    println!(
        "initialized {} with administrator {}",
        state.display(),
        args.deployer
    );
    Ok(())
}

/// Load the registry from the state file.
pub fn load(state: &Path) -> anyhow::Result<CertificateRegistry> {
    let raw = fs::read_to_string(state)
        .with_context(|| format!("reading state file {} (run `sigil init`?)", state.display()))?;
    let registry = serde_json::from_str(&raw)
        .with_context(|| format!("parsing state file {}", state.display()))?;
    tracing::debug!(path = %state.display(), "state loaded");
    Ok(registry)
}

/// Save the registry to the state file.
pub fn save(state: &Path, registry: &CertificateRegistry) -> anyhow::Result<()> {
    let raw = serde_json::to_string_pretty(registry).context("serializing registry state")?;
    let tmp = state.with_extension("tmp");
    fs::write(&tmp, raw).with_context(|| format!("writing {}", tmp.display()))?;
    fs::rename(&tmp, state)
        .with_context(|| format!("replacing state file {}", state.display()))?;
    tracing::debug!(path = %state.display(), "state saved");
    Ok(())
}
