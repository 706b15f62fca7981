//! lispconf: LISP mobility client configuration inspector
//!
//! Entry point for the lispconf binary.

use std::path::Path;
use std::process::ExitCode;

use lispconf::addr::is_valid_address;
use lispconf::conf::ConfigSource;
use lispconf::ifaces::InterfaceEnumerator;

mod app;
mod cli;

use app::{exit_code, setup_tracing};
use cli::{Cli, Command};

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    setup_tracing(cli.verbose);

    match &cli.command {
        Command::Eids { config } => run_eids(config, cli.json),
        Command::Dns { config } => run_dns(config, cli.json),
        Command::Ifaces => run_ifaces(cli.json),
        Command::Check { address } => run_check(address, cli.json),
    }
}

/// Opens the configuration source, reporting a missing file on stderr.
fn open_source(path: &Path) -> Option<ConfigSource> {
    match ConfigSource::open(path) {
        Ok(source) => Some(source),
        Err(e) => {
            eprintln!("Configuration error: {e}");
            None
        }
    }
}

/// Prints EID prefixes, one per line (or a JSON array).
fn run_eids(config: &Path, json: bool) -> ExitCode {
    let Some(source) = open_source(config) else {
        return exit_code::CONFIG_ERROR;
    };

    let eids = source.eids();
    if json {
        println!("{}", serde_json::to_string(&eids).expect("serializable"));
    } else {
        for eid in &eids {
            println!("{eid}");
        }
    }
    exit_code::SUCCESS
}

/// Prints the active DNS override or "no override".
fn run_dns(config: &Path, json: bool) -> ExitCode {
    let Some(source) = open_source(config) else {
        return exit_code::CONFIG_ERROR;
    };

    let override_config = source.dns_override();
    if json {
        println!(
            "{}",
            serde_json::to_string(&override_config).expect("serializable")
        );
    } else {
        match override_config {
            Some(dns) => {
                let primary = dns.primary.as_deref().unwrap_or("-");
                let secondary = dns.secondary.as_deref().unwrap_or("-");
                println!("override enabled: primary={primary} secondary={secondary}");
            }
            None => println!("no override"),
        }
    }
    exit_code::SUCCESS
}

/// Prints the merged host interface list.
fn run_ifaces(json: bool) -> ExitCode {
    let names = InterfaceEnumerator::host().list_interfaces();
    if json {
        println!("{}", serde_json::to_string(&names).expect("serializable"));
    } else {
        for name in &names {
            println!("{name}");
        }
    }
    exit_code::SUCCESS
}

/// Checks an address against the IP grammar; exit code 2 on rejection.
fn run_check(address: &str, json: bool) -> ExitCode {
    let valid = is_valid_address(address);
    if json {
        println!(
            "{}",
            serde_json::json!({ "address": address, "valid": valid })
        );
    } else {
        println!("{}", if valid { "valid" } else { "invalid" });
    }

    if valid {
        exit_code::SUCCESS
    } else {
        exit_code::rejected()
    }
}
