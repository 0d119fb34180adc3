//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - `run()` function to execute the command

use crate::app::AppContext;
use crate::cli::Commands;
use crate::cli::formatters::SearchResults;
use crate::cli::output::emit;
use crate::error::Result;

pub mod lang;
pub mod list;
pub mod search;
pub mod strings;

/// Dispatch a command to its handler
pub async fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Search(args) => search::run(ctx, args).await,
        Commands::List(args) => list::run(ctx, args).await,
        Commands::Lang(args) => lang::run(ctx, args).await,
        Commands::Strings(args) => strings::run(ctx, args),
    }
}

/// Load the catalog for the active language and render `query` against it.
///
/// A failed load is not an error here: it renders as the localized
/// "data unavailable" message.
pub(crate) async fn load_and_render(ctx: &AppContext, query: &str) -> Result<()> {
    let results = match ctx.session.load(ctx.lang).await {
        Ok(catalog) => SearchResults::new(
            catalog.search_outcome(query).cloned(),
            catalog.lang(),
            catalog.fallback(),
        ),
        Err(error) => SearchResults::unavailable(error, ctx.lang, ctx.fallback()),
    };

    emit(&results.with_document(ctx.document.clone()), ctx.output_format);
    Ok(())
}
