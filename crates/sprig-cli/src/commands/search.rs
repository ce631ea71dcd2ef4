//! `sprig search` command implementation.

use clap::Args;

use sprig_core::error::SprigResult;
use sprig_core::types::SearchOptions;

use super::{render_json, CommandContext};

/// Arguments for `sprig search`
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Free-text search query
    pub query: String,

    /// Cap on the number of results
    #[arg(short = 'q', long)]
    pub quantity: Option<u32>,
}

/// Execute the `sprig search` command
pub async fn execute(args: SearchArgs, ctx: &CommandContext) -> SprigResult<()> {
    let options = SearchOptions {
        quantity: args.quantity,
    };

    let results = ctx.client.search_packages(&args.query, Some(&options)).await?;
    println!("{}", render_json(&results)?);

    Ok(())
}
