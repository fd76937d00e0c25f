use al_core::store::LinkStore;

use crate::app::AppContext;
use crate::cli::LinkEditArgs;
use crate::errors::CliError;
use crate::ui::{format_keywords, receipt, status};

use super::{find_link, parse_keywords};

pub fn handle_edit(ctx: &AppContext, store: &LinkStore, args: &LinkEditArgs) -> anyhow::Result<()> {
    if args.url.is_none() && args.add_keyword.is_none() && args.reset_keyword.is_none() {
        return Err(CliError::invalid_input(
            "Nothing to change; pass --url, --add-keyword or --reset-keyword",
        )
        .into());
    }

    let mut link = find_link(ctx, store, &args.identifier)?;

    if let Some(url) = &args.url {
        let url = url.trim();
        if url.is_empty() {
            return Err(CliError::invalid_input("--url cannot be empty").into());
        }
        link.url = url.to_string();
    }
    if let Some(added) = &args.add_keyword {
        let count = link.add_keywords(&parse_keywords(added));
        tracing::debug!(link = %link.name, count, "keywords added");
    }
    // Reset runs last so `-a x -r y` ends with exactly `y`.
    if let Some(reset) = &args.reset_keyword {
        link.reset_keywords(&parse_keywords(reset));
    }

    store.update(&link)?;
    tracing::info!(link = %link.name, "link updated");

    let ui_ctx = ctx.ui_context(false);
    let keywords = format_keywords(&link.keywords);
    status(
        &ui_ctx,
        &receipt(
            &ui_ctx,
            "Link updated",
            &[
                ("Name", link.name.as_str()),
                ("URL", link.url.as_str()),
                ("Keywords", keywords.as_str()),
            ],
        ),
    );
    Ok(())
}
