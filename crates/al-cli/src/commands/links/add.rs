use al_core::store::{strip_hash, Link, LinkStore};

use crate::app::AppContext;
use crate::cli::LinkAddArgs;
use crate::errors::CliError;
use crate::ui::{format_keywords, receipt, status};

use super::parse_keywords;

pub fn handle_add(ctx: &AppContext, store: &LinkStore, args: &LinkAddArgs) -> anyhow::Result<()> {
    let url = args.url.trim();
    if url.is_empty() {
        return Err(CliError::invalid_input("--url cannot be empty").into());
    }
    let keywords = args
        .keywords
        .as_deref()
        .map(parse_keywords)
        .unwrap_or_default();

    let link = Link::new(strip_hash(&args.name), url, keywords);
    store.insert(&link)?;
    tracing::info!(link = %link.name, "link added");

    let ui_ctx = ctx.ui_context(false);
    let keywords = format_keywords(&link.keywords);
    status(
        &ui_ctx,
        &receipt(
            &ui_ctx,
            "Link added",
            &[
                ("Name", link.name.as_str()),
                ("URL", link.url.as_str()),
                ("Keywords", keywords.as_str()),
            ],
        ),
    );
    Ok(())
}
