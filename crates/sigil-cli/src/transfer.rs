//! # Transfer Subcommand
//!
//! Attempts a custody transfer. For a held credential this always fails
//! with the soulbound lockout; the rejected attempt is persisted to the
//! audit log before the error is surfaced, so the state file is saved
//! even when the operation itself fails.

use std::path::Path;

use clap::Args;

use sigil_core::{AccountId, CredentialId};

use crate::store;

/// Arguments for the transfer subcommand.
#[derive(Args, Debug)]
pub struct TransferArgs {
    /// Requested source of the transfer.
    pub from: AccountId,
    /// Requested destination of the transfer.
    pub to: AccountId,
    /// The credential to move.
    pub id: CredentialId,
    /// Optional receiver payload (uses the safe-transfer entry point).
    #[arg(long)]
    pub payload: Option<String>,
}

/// Attempt the transfer and persist whatever the registry recorded.
pub fn run(state: &Path, args: TransferArgs) -> anyhow::Result<()> {
    let mut registry = store::load(state)?;
    let result = match &args.payload {
        Some(payload) => {
            registry.safe_transfer(&args.from, &args.to, args.id, Some(payload.as_bytes()))
        }
        None => registry.transfer(&args.from, &args.to, args.id),
    };
    // Save before propagating: a rejected attempt appends an audit
    // record that must survive the failed call.
    store::save(state, &registry)?;
    result?;
    println!("transferred credential {}", args.id);
    Ok(())
}
