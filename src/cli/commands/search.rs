//! indemnity search - Search allowances by free text
//!
//! Every word must appear, in any field, ignoring case and accents.

use clap::Args;

use crate::app::AppContext;
use crate::error::Result;

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Search words; an empty query lists everything
    #[arg(num_args = 0..)]
    pub words: Vec<String>,
}

impl SearchArgs {
    /// The words joined back into one query string.
    #[must_use]
    pub fn query(&self) -> String {
        self.words.join(" ")
    }
}

pub async fn run(ctx: &AppContext, args: &SearchArgs) -> Result<()> {
    super::load_and_render(ctx, &args.query()).await
}
