//! CLI definitions and command routing.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::HoldfastPaths;
use crate::domain;
use crate::gate::{self, ActionKind};
use crate::heal::{self, HealOutcome};
use crate::hosts;
use crate::preset;
use crate::store;

#[derive(Parser)]
#[command(name = "holdfast")]
#[command(about = "Hosts-file domain blocker with a 15-minute cool-down on weakening changes")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show blocking state, domain count, and any pending cool-down
    Status,

    /// Turn blocking on (writes the managed hosts section)
    On,

    /// Turn blocking off, gated behind the cool-down (request, confirm)
    Off {
        #[command(subcommand)]
        cmd: OffCmd,
    },

    /// Cancel the pending cool-down; blocking stays as it is
    Cancel,

    /// Manage the blocked domain list (list, add, edit, remove, import)
    Domains {
        #[command(subcommand)]
        cmd: DomainsCmd,
    },

    /// Print a once-a-second countdown until the pending action is ready
    Watch,

    /// Reapply the managed section if it was removed or edited externally
    Heal,
}

#[derive(Subcommand)]
pub enum OffCmd {
    /// Start the turn-off cool-down; blocking stays on while it runs
    Request,
    /// Remove the managed section once the cool-down has elapsed
    Confirm,
}

#[derive(Subcommand)]
pub enum DomainsCmd {
    /// List blocked domains in stored order
    List,
    /// Add a domain; takes effect immediately when blocking is on
    Add { domain: String },
    /// Start the edit-list cool-down (required before remove)
    Edit,
    /// Remove a domain; needs a completed edit-list cool-down
    Remove { domain: String },
    /// Merge domains from a file (one per line); add-only, not gated
    Import { file: PathBuf },
}

/// Run CLI and dispatch to handlers.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let paths = HoldfastPaths::default_paths();
    store::ensure_dirs(&paths)?;

    match cli.command {
        Commands::Status => cmd_status(&paths),
        Commands::On => cmd_on(&paths),
        Commands::Off { cmd } => cmd_off(&paths, cmd),
        Commands::Cancel => cmd_cancel(&paths),
        Commands::Domains { cmd } => cmd_domains(&paths, cmd),
        Commands::Watch => cmd_watch(&paths),
        Commands::Heal => cmd_heal(&paths),
    }
}

fn cmd_status(paths: &HoldfastPaths) -> Result<()> {
    let state = store::load_state(paths)?;
    let editor = crate::platform::default_hosts_editor();

    if state.blocking_active {
        if hosts::block_active(editor.as_ref(), &state.domains)? {
            println!("Blocking: on");
        } else {
            println!("Blocking: on (hosts section missing; run 'holdfast heal')");
        }
    } else {
        println!("Blocking: off");
    }
    println!("Domains: {}", state.domains.len());

    match &state.pending_action {
        Some(p) => {
            let now = gate::now_epoch();
            if gate::is_ready(p, now) {
                println!("Pending: {} (ready to confirm)", p.kind);
            } else {
                println!(
                    "Pending: {} ({} remaining)",
                    p.kind,
                    gate::format_remaining(gate::remaining(p, now))
                );
            }
        }
        None => println!("Pending: none"),
    }
    Ok(())
}

fn cmd_on(paths: &HoldfastPaths) -> Result<()> {
    let mut state = store::load_state(paths)?;
    let editor = crate::platform::default_hosts_editor();
    hosts::apply_block(editor.as_ref(), &state.domains)?;
    state.blocking_active = true;
    store::save_state(paths, &state)?;
    println!("Blocking on ({} domains).", state.domains.len());
    Ok(())
}

fn cmd_off(paths: &HoldfastPaths, cmd: OffCmd) -> Result<()> {
    match cmd {
        OffCmd::Request => request_gate(paths, ActionKind::TurnOff),
        OffCmd::Confirm => {
            let mut state = store::load_state(paths)?;
            gate::take_ready(&mut state.pending_action, ActionKind::TurnOff, gate::now_epoch())?;
            let editor = crate::platform::default_hosts_editor();
            hosts::remove_block(editor.as_ref())?;
            state.blocking_active = false;
            store::save_state(paths, &state)?;
            println!("Blocking turned off. You can turn it back on anytime.");
            Ok(())
        }
    }
}

fn cmd_cancel(paths: &HoldfastPaths) -> Result<()> {
    let mut state = store::load_state(paths)?;
    match &state.pending_action {
        Some(p) => {
            let kind = p.kind;
            gate::cancel(&mut state.pending_action);
            store::save_state(paths, &state)?;
            println!("Cancelled pending {kind}. Blocking stays as it is.");
        }
        None => println!("Nothing pending."),
    }
    Ok(())
}

fn cmd_domains(paths: &HoldfastPaths, cmd: DomainsCmd) -> Result<()> {
    match cmd {
        DomainsCmd::List => {
            let state = store::load_state(paths)?;
            for d in &state.domains {
                println!("{d}");
            }
            Ok(())
        }
        DomainsCmd::Add { domain } => {
            let d = domain::normalize(&domain);
            domain::validate_hostname(&d)?;
            let mut state = store::load_state(paths)?;
            if state.domains.contains(&d) {
                println!("{d} is already in the list.");
                return Ok(());
            }
            state.domains.push(d.clone());
            if state.blocking_active {
                let editor = crate::platform::default_hosts_editor();
                hosts::apply_block(editor.as_ref(), &state.domains)?;
            }
            store::save_state(paths, &state)?;
            println!("Added {d}.");
            Ok(())
        }
        DomainsCmd::Edit => request_gate(paths, ActionKind::EditList),
        DomainsCmd::Remove { domain } => {
            let d = domain::normalize(&domain);
            let mut state = store::load_state(paths)?;
            if !state.domains.contains(&d) {
                anyhow::bail!("{d} is not in the list");
            }
            gate::take_ready(&mut state.pending_action, ActionKind::EditList, gate::now_epoch())?;
            state.domains.retain(|x| x != &d);
            if state.blocking_active {
                let editor = crate::platform::default_hosts_editor();
                hosts::apply_block(editor.as_ref(), &state.domains)?;
            }
            store::save_state(paths, &state)?;
            println!("Removed {d}.");
            Ok(())
        }
        DomainsCmd::Import { file } => {
            let raw = std::fs::read_to_string(&file)?;
            let mut state = store::load_state(paths)?;
            let mut added = 0usize;
            for d in preset::parse_preset(&raw) {
                if domain::validate_hostname(&d).is_err() {
                    eprintln!("Skipping invalid entry: {d}");
                    continue;
                }
                if !state.domains.contains(&d) {
                    state.domains.push(d);
                    added += 1;
                }
            }
            if added > 0 && state.blocking_active {
                let editor = crate::platform::default_hosts_editor();
                hosts::apply_block(editor.as_ref(), &state.domains)?;
            }
            store::save_state(paths, &state)?;
            println!("Imported {added} new domain(s).");
            Ok(())
        }
    }
}

fn request_gate(paths: &HoldfastPaths, kind: ActionKind) -> Result<()> {
    let mut state = store::load_state(paths)?;
    if let Some(p) = &state.pending_action {
        let left = gate::remaining(p, gate::now_epoch());
        println!(
            "A {} request is already pending ({} remaining).",
            p.kind,
            gate::format_remaining(left)
        );
        return Ok(());
    }
    let left = gate::request(&mut state.pending_action, kind, gate::now_epoch());
    store::save_state(paths, &state)?;
    println!(
        "Requested {kind}. Blocking stays on for another {}.",
        gate::format_remaining(left)
    );
    Ok(())
}

fn cmd_watch(paths: &HoldfastPaths) -> Result<()> {
    use std::io::Write;
    loop {
        let state = store::load_state(paths)?;
        let p = match &state.pending_action {
            Some(p) => p.clone(),
            None => {
                println!("Nothing pending.");
                return Ok(());
            }
        };
        let now = gate::now_epoch();
        if gate::is_ready(&p, now) {
            println!("\r{} ready to confirm.        ", p.kind);
            return Ok(());
        }
        print!(
            "\r{} ready in {}   ",
            p.kind,
            gate::format_remaining(gate::remaining(&p, now))
        );
        std::io::stdout().flush()?;
        std::thread::sleep(std::time::Duration::from_secs(1));
    }
}

fn cmd_heal(paths: &HoldfastPaths) -> Result<()> {
    let state = store::load_state(paths)?;
    let editor = crate::platform::default_hosts_editor();
    match heal::ensure_consistency(&state, editor.as_ref()) {
        Ok(HealOutcome::Inactive) => println!("Blocking is off; nothing to heal."),
        Ok(HealOutcome::Intact) => println!("Hosts section intact."),
        Ok(HealOutcome::Reapplied) => println!("Hosts section reapplied."),
        // Startup heal must not take the app down; report and move on.
        Err(e) => eprintln!("Warning: could not heal hosts file: {e}"),
    }
    Ok(())
}
