//! indemnity list - List every allowance in the catalog

use clap::Args;

use crate::app::AppContext;
use crate::error::Result;

#[derive(Args, Debug)]
pub struct ListArgs {}

pub async fn run(ctx: &AppContext, _args: &ListArgs) -> Result<()> {
    super::load_and_render(ctx, "").await
}
