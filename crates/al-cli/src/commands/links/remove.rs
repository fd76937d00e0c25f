use al_core::store::LinkStore;

use crate::app::AppContext;
use crate::cli::RemoveArgs;
use crate::helpers::confirm;
use crate::ui::{badge, print, receipt, status, Badge, OutputMode};

use super::find_link;

pub fn handle_remove(ctx: &AppContext, store: &LinkStore, args: &RemoveArgs) -> anyhow::Result<()> {
    let link = find_link(ctx, store, &args.name)?;
    let ui_ctx = ctx.ui_context(false);

    if !args.force && !confirm(&format!("Remove link '{}' ({})?", link.name, link.url))? {
        match ui_ctx.mode {
            OutputMode::Pretty => print(&ui_ctx, &badge(&ui_ctx, Badge::Warn, "Cancelled")),
            OutputMode::Plain | OutputMode::Json => println!("status=cancelled"),
        }
        return Ok(());
    }

    store.remove(&link.name)?;
    tracing::info!(link = %link.name, "link removed");

    status(
        &ui_ctx,
        &receipt(&ui_ctx, "Link removed", &[("Name", link.name.as_str())]),
    );
    Ok(())
}
