use al_core::store::NoteStore;

use crate::app::{unlock_note, AppContext};
use crate::cli::NoteGetArgs;
use crate::ui::{badge, status, Badge};

use super::find_note;

pub fn handle_get(ctx: &AppContext, store: &NoteStore, args: &NoteGetArgs) -> anyhow::Result<()> {
    let note = find_note(ctx, store, &args.name)?;
    let unlocked = unlock_note(ctx.passwords(), &note)?;

    if !args.copy {
        println!("{}", unlocked.content.as_str());
        return Ok(());
    }

    ctx.clipboard().copy(&unlocked.content)?;
    let ui_ctx = ctx.ui_context(false);
    status(
        &ui_ctx,
        &badge(
            &ui_ctx,
            Badge::Ok,
            &format!("Copied note '{}' to clipboard", note.name),
        ),
    );
    Ok(())
}
