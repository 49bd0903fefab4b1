//! CLI parse: clap types for ideaforge. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// ideaforge CLI - AI content generation from typed prompt contracts
#[derive(Parser, Debug)]
#[command(name = "ideaforge")]
#[command(about = "Generate text and startup ideas from a prompt with a generative model")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory (for config/config.toml)
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (replaces global and workspace config files)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Debug-level logging
    #[arg(long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Disable logging
    #[arg(long)]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stderr, stdout, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate free-form text from a prompt
    Text {
        prompt: String,
        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
        /// Save the result to the library
        #[arg(long)]
        save: bool,
    },
    /// Generate a startup idea from a prompt
    Startup {
        prompt: String,
        /// Generator type to present (e.g. names-taglines), or "all"
        #[arg(long, default_value = "all")]
        view: String,
        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
        /// Save the presented views to the library
        #[arg(long)]
        save: bool,
    },
    /// List generator types and the fields each presents
    Views {
        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
    /// Saved content
    Library {
        #[command(subcommand)]
        command: LibraryCommands,
    },
    /// Configured model provider
    Provider {
        #[command(subcommand)]
        command: ProviderCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum LibraryCommands {
    /// List saved records, oldest first
    List {
        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ProviderCommands {
    /// Show the configured provider and API key status
    Show {
        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
    /// List models available from the provider
    Models {
        /// Output format (text or json)
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },
}

impl Commands {
    /// Stable command name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Text { .. } => "text",
            Commands::Startup { .. } => "startup",
            Commands::Views { .. } => "views",
            Commands::Library {
                command: LibraryCommands::List { .. },
            } => "library.list",
            Commands::Provider { command } => match command {
                ProviderCommands::Show { .. } => "provider.show",
                ProviderCommands::Models { .. } => "provider.models",
            },
        }
    }
}
