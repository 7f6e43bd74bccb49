//! Command execution handlers.
//!
//! Non-TUI commands build the in-memory registries, run one operation
//! against them and print the result. Mutations are process-local;
//! there is no persistence layer behind these commands.

use anyhow::Result;
use aura_catalog::{
    ApiKeyRegistry, AssistantRegistry, CategoryRegistry, ConnectorRegistry, ModelCatalog,
    PromptLibrary, SCOPES, scope_sets,
};

use crate::output::{cell, print_header, print_json};

use super::args::{
    AdminCommands, AssistantsCommands, CategoryCommands, ChatArgs, Cli, Commands,
    ConnectorCommands, KeyCommands, ModelsCommands, PromptsCommands,
};

/// Dispatches the parsed command line.
pub async fn dispatch_command(cli: Cli) -> Result<()> {
    match cli.command {
        None => run_chat(cli.chat).await,
        Some(Commands::Chat(args)) => run_chat(args).await,
        Some(Commands::Assistants(cmd)) => handle_assistants(cmd),
        Some(Commands::Models(cmd)) => handle_models(cmd),
        Some(Commands::Prompts(cmd)) => handle_prompts(cmd),
        Some(Commands::Admin(cmd)) => handle_admin(cmd).await,
    }
}

async fn run_chat(args: ChatArgs) -> Result<()> {
    let assistants = AssistantRegistry::new();
    let models = ModelCatalog::new();

    let assistant = assistants.get_or_default(&args.assistant).clone();
    let model = match args.model {
        Some(ref id) => models
            .get(id)
            .ok_or_else(|| anyhow::anyhow!("unknown model: {id}"))?
            .clone(),
        None => models.default_model().clone(),
    };

    aura_tui::run_chat(assistant, model, args.thinking).await
}

fn handle_assistants(cmd: AssistantsCommands) -> Result<()> {
    let registry = AssistantRegistry::new();
    match cmd {
        AssistantsCommands::List {
            category,
            search,
            public,
            json,
        } => {
            let rows: Vec<_> = registry
                .list()
                .iter()
                .filter(|a| {
                    category
                        .as_deref()
                        .is_none_or(|c| a.category.eq_ignore_ascii_case(c))
                })
                .filter(|a| {
                    search
                        .as_deref()
                        .is_none_or(|s| a.name.to_lowercase().contains(&s.to_lowercase()))
                })
                .filter(|a| !public || a.is_public)
                .collect();
            if json {
                return print_json(&rows);
            }
            print_header(&[("ID", 18), ("NAME", 36), ("CATEGORY", 20), ("PUBLIC", 6)]);
            for a in rows {
                println!(
                    "{}  {}  {}  {}",
                    cell(&a.id, 18),
                    cell(&a.name, 36),
                    cell(&a.category, 20),
                    if a.is_public { "yes" } else { "no" },
                );
            }
            Ok(())
        }
    }
}

fn handle_models(cmd: ModelsCommands) -> Result<()> {
    let catalog = ModelCatalog::new();
    match cmd {
        ModelsCommands::List { thinking, json } => {
            let rows: Vec<_> = if thinking {
                catalog.thinking_capable()
            } else {
                catalog.list().iter().collect()
            };
            if json {
                return print_json(&rows);
            }
            print_header(&[
                ("ID", 18),
                ("NAME", 18),
                ("PROVIDER", 12),
                ("CONTEXT", 12),
                ("THINKING", 8),
            ]);
            for m in rows {
                println!(
                    "{}  {}  {}  {}  {}",
                    cell(&m.id, 18),
                    cell(&m.name, 18),
                    cell(&m.provider, 12),
                    cell(&m.context_length, 12),
                    if m.thinking_supported { "yes" } else { "no" },
                );
            }
            Ok(())
        }
    }
}

fn handle_prompts(cmd: PromptsCommands) -> Result<()> {
    let library = PromptLibrary::new();
    match cmd {
        PromptsCommands::List {
            search,
            media,
            json,
        } => {
            let rows = library.filter(&search, &media);
            if json {
                return print_json(&rows);
            }
            print_header(&[("TITLE", 28), ("MEDIA", 8), ("DESCRIPTION", 50)]);
            for p in rows {
                println!(
                    "{}  {}  {}",
                    cell(&p.title, 28),
                    cell(&p.media.to_string(), 8),
                    cell(&p.description, 50),
                );
            }
            Ok(())
        }
    }
}

async fn handle_admin(cmd: AdminCommands) -> Result<()> {
    match cmd {
        AdminCommands::Connectors(cmd) => handle_connectors(cmd).await,
        AdminCommands::Categories(cmd) => handle_categories(cmd),
        AdminCommands::Keys(cmd) => handle_keys(cmd),
    }
}

async fn handle_connectors(cmd: ConnectorCommands) -> Result<()> {
    let mut registry = ConnectorRegistry::new();
    match cmd {
        ConnectorCommands::List { search, json } => {
            let rows: Vec<_> = match search {
                Some(ref q) => registry.search(q),
                None => registry.list().iter().collect(),
            };
            if json {
                return print_json(&rows);
            }
            print_header(&[("NAME", 16), ("ACTIVE", 8), ("DOCS", 10), ("ERRORS", 6)]);
            for c in rows {
                println!(
                    "{}  {}  {}  {}",
                    cell(&c.name, 16),
                    cell(&c.stats.public_label, 8),
                    cell(&c.stats.docs_indexed.to_string(), 10),
                    c.stats.errors,
                );
            }
            Ok(())
        }
        ConnectorCommands::Sync { name } => {
            let report = registry.sync(&name).await?;
            println!(
                "Synced {}: {} new documents, {} indexed",
                report.connector, report.docs_added, report.docs_indexed
            );
            Ok(())
        }
    }
}

fn handle_categories(cmd: CategoryCommands) -> Result<()> {
    let mut registry = CategoryRegistry::new();
    match cmd {
        CategoryCommands::List { json } => {
            if json {
                return print_json(&registry.list());
            }
            print_header(&[("NAME", 24), ("ICON", 16), ("COLOR", 8)]);
            for c in registry.list() {
                println!(
                    "{}  {}  {}",
                    cell(&c.name, 24),
                    cell(&c.icon, 16),
                    c.color
                );
            }
            Ok(())
        }
        CategoryCommands::Add { name, icon, color } => {
            let created = registry.add(name, icon, color)?;
            println!("Added category {} ({})", created.name, created.id);
            Ok(())
        }
        CategoryCommands::Remove { name } => {
            registry.remove(&name)?;
            println!("Removed category {name}");
            Ok(())
        }
    }
}

fn handle_keys(cmd: KeyCommands) -> Result<()> {
    let mut registry = ApiKeyRegistry::new();
    match cmd {
        KeyCommands::List { json } => {
            if json {
                return print_json(&registry.list());
            }
            if registry.list().is_empty() {
                println!("No API keys.");
                return Ok(());
            }
            print_header(&[("ID", 36), ("NAME", 20), ("KEY", 16), ("REVOKED", 7)]);
            for k in registry.list() {
                println!(
                    "{}  {}  {}  {}",
                    cell(&k.id, 36),
                    cell(&k.name, 20),
                    cell(&k.masked(), 16),
                    if k.revoked { "yes" } else { "no" },
                );
            }
            Ok(())
        }
        KeyCommands::Create {
            name,
            scopes,
            scope_set,
        } => {
            let created = match scope_set {
                Some(ref set) => registry.create_from_set(name, set)?,
                None => registry.create(name, scopes)?,
            };
            println!("Created key {} ({})", created.record.name, created.record.id);
            println!("Scopes: {}", created.record.scopes.join(", "));
            println!();
            println!("Secret (shown once, store it now):");
            println!("  {}", created.secret);
            Ok(())
        }
        KeyCommands::Revoke { id } => {
            registry.revoke(&id)?;
            println!("Revoked key {id}");
            Ok(())
        }
        KeyCommands::Scopes { json } => {
            if json {
                return print_json(&serde_json::json!({
                    "scopes": SCOPES,
                    "scope_sets": scope_sets(),
                }));
            }
            print_header(&[("SCOPE", 22), ("CATEGORY", 12), ("DESCRIPTION", 40)]);
            for s in SCOPES {
                let admin = if s.admin_only { " (admin)" } else { "" };
                println!(
                    "{}  {}  {}{admin}",
                    cell(s.name, 22),
                    cell(s.category, 12),
                    s.description,
                );
            }
            println!();
            println!("Predefined scope sets:");
            for set in scope_sets() {
                println!("  {:<20} {}", set.name, set.scopes.join(", "));
            }
            Ok(())
        }
    }
}
