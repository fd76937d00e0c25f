use al_core::store::LinkStore;

use crate::app::AppContext;
use crate::cli::LinkGetArgs;
use crate::ui::{badge, format_keywords, status, Badge};

use super::find_link;

pub fn handle_get(ctx: &AppContext, store: &LinkStore, args: &LinkGetArgs) -> anyhow::Result<()> {
    let link = find_link(ctx, store, &args.identifier)?;

    println!("URL: {} | ({})", link.url, format_keywords(&link.keywords));

    if args.copy {
        ctx.clipboard().copy(&link.url)?;
        let ui_ctx = ctx.ui_context(false);
        status(&ui_ctx, &badge(&ui_ctx, Badge::Ok, "Copied URL to clipboard"));
    }
    Ok(())
}
