//! # Role Subcommand
//!
//! Whitelist and administrator management.

use std::path::Path;

use clap::{Args, Subcommand};

use sigil_core::AccountId;

use crate::store;

/// Arguments for the role subcommand.
#[derive(Args, Debug)]
pub struct RoleArgs {
    #[command(subcommand)]
    pub command: RoleCommand,
}

#[derive(Subcommand, Debug)]
pub enum RoleCommand {
    /// Grant the administrator role to an account.
    GrantAdmin {
        /// Acting account; must be an administrator.
        #[arg(long = "as", value_name = "ACCOUNT")]
        caller: AccountId,
        /// The account to promote.
        account: AccountId,
    },
    /// Add accounts to the whitelist (all-or-nothing).
    Grant {
        /// Acting account; must be an administrator.
        #[arg(long = "as", value_name = "ACCOUNT")]
        caller: AccountId,
        /// Accounts to whitelist, in order.
        #[arg(required = true)]
        accounts: Vec<AccountId>,
    },
    /// Remove accounts from the whitelist (all-or-nothing).
    Revoke {
        /// Acting account; must be an administrator.
        #[arg(long = "as", value_name = "ACCOUNT")]
        caller: AccountId,
        /// Accounts to remove, in order.
        #[arg(required = true)]
        accounts: Vec<AccountId>,
    },
    /// List both role sets.
    List,
}

/// Dispatch a role subcommand against the state file.
pub fn run(state: &Path, args: RoleArgs) -> anyhow::Result<()> {
    match args.command {
        RoleCommand::GrantAdmin { caller, account } => {
            let mut registry = store::load(state)?;
            registry.grant_admin(&caller, account.clone())?;
            store::save(state, &registry)?;
            println!("administrator granted: {account}");
        }
        RoleCommand::Grant { caller, accounts } => {
            let mut registry = store::load(state)?;
            registry.grant_whitelist(&caller, &accounts)?;
            store::save(state, &registry)?;
            println!("whitelisted {} account(s)", accounts.len());
        }
        RoleCommand::Revoke { caller, accounts } => {
            let mut registry = store::load(state)?;
            registry.revoke_whitelist(&caller, &accounts)?;
            store::save(state, &registry)?;
            println!("revoked {} account(s)", accounts.len());
        }
        RoleCommand::List => {
            let registry = store::load(state)?;
            println!("administrators:");
            for account in registry.roles().administrators() {
                println!("  {account}");
            }
            println!("whitelisted:");
            for account in registry.roles().whitelisted() {
                println!("  {account}");
            }
        }
    }
    Ok(())
}
