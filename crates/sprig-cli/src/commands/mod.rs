//! Command implementations and dispatch logic.
//!
//! Each command is implemented as an async function that takes a
//! CommandContext holding the shared registry client.

use sprig_core::error::SprigResult;
use sprig_client::RegistryClient;
use tracing::info;

pub mod fetch;
pub mod search;

#[cfg(test)]
mod tests;

use crate::Commands;

/// Shared context for all commands
pub struct CommandContext {
    pub client: RegistryClient,
}

impl CommandContext {
    /// Create a new command context with a client against the configured
    /// registry endpoint
    pub fn new() -> SprigResult<Self> {
        Ok(Self {
            client: RegistryClient::new()?,
        })
    }
}

/// Dispatch a command to its handler
pub async fn dispatch_command(command: Commands, ctx: &CommandContext) -> SprigResult<()> {
    match command {
        Commands::Fetch(args) => {
            info!("Fetching {:?} record '{}'", args.kind, args.name_or_id);
            fetch::execute(args, ctx).await
        }
        Commands::Search(args) => {
            info!("Searching packages for '{}'", args.query);
            search::execute(args, ctx).await
        }
    }
}

/// Render a resolved value as pretty JSON for the console
pub(crate) fn render_json<T: serde::Serialize>(value: &T) -> SprigResult<String> {
    serde_json::to_string_pretty(value).map_err(|err| {
        sprig_core::error::SprigError::Deserialize {
            message: err.to_string(),
        }
    })
}
