//! CLI argument structures and parsing.

use aura_catalog::MediaType;
use clap::{Args, Parser, Subcommand};

/// Log verbosity level for CLI output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LogLevel {
    /// Only show errors
    Error,
    /// Show warnings and errors
    Warn,
    /// Show informational messages, warnings, and errors (default)
    #[default]
    Info,
    /// Show debug messages and above
    Debug,
    /// Show all messages including trace-level details
    Trace,
}

impl LogLevel {
    /// Convert to tracing filter string.
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Aura - AI assistant platform prototype
///
/// If no subcommand is specified, starts an interactive chat session.
#[derive(Parser)]
#[command(name = "aura")]
#[command(author, version)]
#[command(about = "Aura - AI assistant platform prototype", long_about = None)]
pub struct Cli {
    /// Write trace-level logs to ./debug.txt
    #[arg(long, global = true)]
    pub debug: bool,

    /// Log verbosity for non-interactive commands
    #[arg(long, value_enum, global = true, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    #[clap(flatten)]
    pub chat: ChatArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Options for the interactive chat session.
#[derive(Debug, Clone, Args)]
pub struct ChatArgs {
    /// Assistant to chat with (unknown ids fall back to the default)
    #[arg(long, default_value = "aura-ai")]
    pub assistant: String,

    /// Model id (defaults to the first catalog entry)
    #[arg(long)]
    pub model: Option<String>,

    /// Start with thinking mode enabled (thinking-capable models only)
    #[arg(long)]
    pub thinking: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive chat session (default)
    Chat(ChatArgs),

    /// Browse the assistant gallery
    #[command(subcommand)]
    Assistants(AssistantsCommands),

    /// Browse the model catalog
    #[command(subcommand)]
    Models(ModelsCommands),

    /// Browse the prompt library
    #[command(subcommand)]
    Prompts(PromptsCommands),

    /// Administrative console commands
    #[command(subcommand)]
    Admin(AdminCommands),
}

#[derive(Subcommand)]
pub enum AssistantsCommands {
    /// List assistants
    List {
        /// Filter by category
        #[arg(long)]
        category: Option<String>,
        /// Case-insensitive name search
        #[arg(long)]
        search: Option<String>,
        /// Only published assistants
        #[arg(long)]
        public: bool,
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum ModelsCommands {
    /// List selectable models
    List {
        /// Only thinking-capable models
        #[arg(long)]
        thinking: bool,
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum PromptsCommands {
    /// List prompts
    List {
        /// Free-text search over titles and descriptions
        #[arg(long, default_value = "")]
        search: String,
        /// Restrict to media types (repeatable)
        #[arg(long = "media", value_name = "TYPE")]
        media: Vec<MediaType>,
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
pub enum AdminCommands {
    /// Knowledge-source connectors
    #[command(subcommand)]
    Connectors(ConnectorCommands),

    /// Assistant categories
    #[command(subcommand)]
    Categories(CategoryCommands),

    /// API keys and scopes
    #[command(subcommand)]
    Keys(KeyCommands),
}

#[derive(Subcommand)]
pub enum ConnectorCommands {
    /// List connectors with their stats
    List {
        /// Case-insensitive name search
        #[arg(long)]
        search: Option<String>,
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Run a simulated sync pass against a connector
    Sync {
        /// Connector name
        name: String,
    },
}

#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List categories
    List {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Add a category
    Add {
        /// Category name (unique, case-insensitive)
        name: String,
        /// Icon name from the platform icon set
        #[arg(long, default_value = "Folder")]
        icon: String,
        /// Hex accent color
        #[arg(long, default_value = "#2563eb")]
        color: String,
    },
    /// Remove a category
    Remove {
        /// Category name
        name: String,
    },
}

#[derive(Subcommand)]
pub enum KeyCommands {
    /// List API keys
    List {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Create a key; the secret is printed exactly once
    Create {
        /// Key name
        name: String,
        /// Grant a scope (repeatable)
        #[arg(long = "scope", value_name = "SCOPE")]
        scopes: Vec<String>,
        /// Use a predefined scope set instead of individual scopes
        #[arg(long = "scope-set", conflicts_with = "scopes")]
        scope_set: Option<String>,
    },
    /// Revoke a key by id
    Revoke {
        /// Key id
        id: String,
    },
    /// Show grantable scopes and predefined scope sets
    Scopes {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_is_chat() {
        let cli = Cli::parse_from(["aura"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.chat.assistant, "aura-ai");
        assert!(!cli.chat.thinking);
    }

    #[test]
    fn test_prompts_media_parsing() {
        let cli = Cli::parse_from([
            "aura", "prompts", "list", "--media", "audio", "--media", "video",
        ]);
        match cli.command {
            Some(Commands::Prompts(PromptsCommands::List { media, .. })) => {
                assert_eq!(media, vec![MediaType::Audio, MediaType::Video]);
            }
            _ => panic!("expected prompts list"),
        }
    }

    #[test]
    fn test_key_create_scopes() {
        let cli = Cli::parse_from([
            "aura", "admin", "keys", "create", "ci", "--scope", "chat", "--scope", "query",
        ]);
        match cli.command {
            Some(Commands::Admin(AdminCommands::Keys(KeyCommands::Create {
                name, scopes, ..
            }))) => {
                assert_eq!(name, "ci");
                assert_eq!(scopes, vec!["chat", "query"]);
            }
            _ => panic!("expected keys create"),
        }
    }
}
