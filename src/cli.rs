//! CLI domain: parse, route, output, and presentation only.
//! No domain orchestration; single route table dispatches to domain services.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::{map_error, CommandOutput};
pub use parse::{Cli, Commands, LibraryCommands, ProviderCommands};
pub use presentation::{
    format_envelope_json, format_library_json, format_library_text, format_startup_text,
    format_views_json, format_views_text,
};
pub use route::RunContext;
