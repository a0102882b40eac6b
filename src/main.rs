//! Crelate CLI - contacts, notes and tags from the command line.

use clap::Parser;
use colored::*;
use crelate::{Client, Config, Overrides, TagRemoval};
use eyre::{Context, Result};
use log::info;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

mod cli;

use cli::{Cli, Command};

fn setup_logging() -> Result<()> {
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("crelate")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("crelate.log");

    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn load_config(cli: &Cli) -> Result<Config> {
    let overrides = Overrides {
        api_key: cli.api_key.clone(),
        base_url: cli.base_url.clone(),
        config_path: cli.config.clone(),
    };
    Config::load(&overrides).context("Failed to load configuration")
}

/// Pick a display name out of an opaque contact record.
fn contact_name(contact: &Value) -> String {
    let first = contact.get("FirstName").and_then(Value::as_str).unwrap_or_default();
    let last = contact.get("LastName").and_then(Value::as_str).unwrap_or_default();
    let name = format!("{} {}", first, last).trim().to_string();

    if name.is_empty() {
        contact
            .get("Name")
            .and_then(Value::as_str)
            .unwrap_or("(unnamed)")
            .to_string()
    } else {
        name
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;
    let client = Client::new(config.connection()).with_base_url(&config.base_url);

    match cli.command {
        Command::Status => {
            if client.connection().is_established() {
                println!("{} API key is configured", "✓".green());
            } else {
                println!(
                    "{} No API key set. Use --api-key, $CRELATE_API_KEY or the config file.",
                    "✗".red()
                );
                std::process::exit(1);
            }
        }

        Command::Contacts { tag } => {
            let data = client
                .retrieve_contacts_by_tag(&tag)
                .context("Failed to retrieve contacts")?;

            match data.as_array() {
                Some(contacts) if contacts.is_empty() => {
                    println!("{}", "No contacts found".dimmed());
                }
                Some(contacts) => {
                    println!("{} {} contact(s) tagged {}:", "→".blue(), contacts.len(), tag.cyan());
                    for contact in contacts {
                        let id = contact.get("Id").and_then(Value::as_str).unwrap_or("?");
                        println!("  {} {}", id.cyan(), contact_name(contact));
                    }
                }
                None => println!("{}", serde_json::to_string_pretty(&data)?),
            }
        }

        Command::Get { id } => {
            let contact = client.fetch_contact(&id).context("Failed to fetch contact")?;
            println!("{}", serde_json::to_string_pretty(&contact)?);
        }

        Command::Note { id, body, when } => {
            let response = client
                .create_note_on_contact(&id, &body, when)
                .context("Failed to create note")?;

            println!("{} Created note on {}", "✓".green(), id.cyan());
            info!("Note response: {}", response);
        }

        Command::Untag { id, tag, category } => {
            let outcome = client
                .remove_tag_on_contact(&id, &tag, &category)
                .context("Failed to remove tag")?;

            match outcome {
                TagRemoval::CategoryAbsent => {
                    println!("{} {} has no tags in category {}", "–".dimmed(), id.cyan(), category);
                }
                TagRemoval::Patched { removed, response } if response.is_success() => {
                    println!("{} Removed {} '{}' tag(s) from {}", "✓".green(), removed, tag, id.cyan());
                }
                TagRemoval::Patched { response, .. } => {
                    eprintln!(
                        "{} Update rejected with status {}: {}",
                        "✗".red(),
                        response.status,
                        response.body
                    );
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    setup_logging().context("Failed to setup logging")?;

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
