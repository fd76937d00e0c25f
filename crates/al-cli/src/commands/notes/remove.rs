use al_core::store::NoteStore;

use crate::app::AppContext;
use crate::cli::RemoveArgs;
use crate::helpers::confirm;
use crate::ui::{badge, print, receipt, status, Badge, OutputMode};

use super::find_note;

pub fn handle_remove(ctx: &AppContext, store: &NoteStore, args: &RemoveArgs) -> anyhow::Result<()> {
    let note = find_note(ctx, store, &args.name)?;
    let ui_ctx = ctx.ui_context(false);

    if !args.force && !confirm(&format!("Remove note '{}'?", note.name))? {
        match ui_ctx.mode {
            OutputMode::Pretty => print(&ui_ctx, &badge(&ui_ctx, Badge::Warn, "Cancelled")),
            OutputMode::Plain | OutputMode::Json => println!("status=cancelled"),
        }
        return Ok(());
    }

    store.remove(&note.name)?;
    tracing::info!(note = %note.name, "note removed");

    status(
        &ui_ctx,
        &receipt(&ui_ctx, "Note removed", &[("Name", note.name.as_str())]),
    );
    Ok(())
}
