//! Reference entity CLI commands
//!
//! One set of subcommands serves businesses, ledgers, heads, modes and types.

use clap::Subcommand;

use super::confirm;
use crate::api::ApiClient;
use crate::display::{format_entity_details, format_entity_list};
use crate::error::AccountsResult;
use crate::models::EntityKind;
use crate::services::EntityService;

/// Entity subcommands
#[derive(Subcommand, Debug)]
pub enum EntityCommands {
    /// List all records
    #[command(alias = "ls")]
    List,
    /// Show one record
    Show {
        /// Name, id, or #id
        reference: String,
    },
    /// Create a record
    Add {
        /// Display name
        name: String,
    },
    /// Rename a record
    Edit {
        /// Name, id, or #id
        reference: String,
        /// New name
        #[arg(short, long)]
        name: String,
    },
    /// Delete a record
    #[command(alias = "rm")]
    Delete {
        /// Name, id, or #id
        reference: String,
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

/// Handle an entity command for the given kind
pub async fn handle_entity_command(
    client: &ApiClient,
    kind: EntityKind,
    cmd: EntityCommands,
) -> AccountsResult<()> {
    let service = EntityService::new(client, kind);

    match cmd {
        EntityCommands::List => {
            let entities = service.list().await?;
            print!("{}", format_entity_list(kind, &entities));
        }

        EntityCommands::Show { reference } => {
            let entity = service.resolve(&reference).await?;
            print!("{}", format_entity_details(kind, &entity));
        }

        EntityCommands::Add { name } => {
            let entity = service.create(&name).await?;
            println!("Created {}: {} (#{})", kind.label(), entity.name, entity.id);
        }

        EntityCommands::Edit { reference, name } => {
            let entity = service.rename(&reference, &name).await?;
            println!("Updated {}: {} (#{})", kind.label(), entity.name, entity.id);
        }

        EntityCommands::Delete { reference, yes } => {
            let entity = service.resolve(&reference).await?;

            if !yes {
                let prompt = format!(
                    "Delete {} '{}' (#{})? (yes/no): ",
                    kind.label().to_lowercase(),
                    entity.name,
                    entity.id
                );
                if !confirm(&prompt)? {
                    println!("Aborted.");
                    return Ok(());
                }
            }

            service.delete(&entity).await?;
            println!("Deleted {}: {}", kind.label(), entity.name);
        }
    }

    Ok(())
}
