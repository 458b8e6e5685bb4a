//! # Audit Subcommand
//!
//! Lists the registry's custody audit records and verifies the hash
//! chain.

use std::path::Path;

use clap::Args;

use sigil_registry::CustodyEvent;

use crate::store;

/// Arguments for the audit subcommand.
#[derive(Args, Debug)]
pub struct AuditArgs {
    /// Show only rejected transfer attempts.
    #[arg(long)]
    pub rejected: bool,
    /// Verify the hash chain and exit non-zero if it is broken.
    #[arg(long)]
    pub verify: bool,
}

/// List audit records, optionally verifying the chain.
pub fn run(state: &Path, args: AuditArgs) -> anyhow::Result<()> {
    let registry = store::load(state)?;
    let audit = registry.audit();

    if args.verify {
        if audit.verify_chain() {
            println!("audit chain ok ({} record(s))", audit.len());
        } else {
            anyhow::bail!("audit chain verification failed");
        }
        return Ok(());
    }

    for record in audit.records() {
        if args.rejected && !matches!(record.event, CustodyEvent::TransferRejected { .. }) {
            continue;
        }
        let line = match &record.event {
            CustodyEvent::Issued { id, to } => {
                format!("issued credential={id} to={to}")
            }
            CustodyEvent::Burned { id, from } => {
                format!("burned credential={id} from={from}")
            }
            CustodyEvent::TransferRejected { id, from, to } => {
                format!("transfer-rejected credential={id} from={from} to={to}")
            }
        };
        println!("{} {} {}", record.at, record.event_id, line);
    }
    Ok(())
}
