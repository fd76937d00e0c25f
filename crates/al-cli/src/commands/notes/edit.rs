use al_core::crypto::encrypt;
use al_core::store::NoteStore;

use crate::app::{unlock_note, AppContext};
use crate::cli::NoteEditArgs;
use crate::helpers::read_note_body;
use crate::ui::{receipt, status};

use super::find_note;

pub fn handle_edit(ctx: &AppContext, store: &NoteStore, args: &NoteEditArgs) -> anyhow::Result<()> {
    let mut note = find_note(ctx, store, &args.name)?;
    let unlocked = unlock_note(ctx.passwords(), &note)?;

    let body = read_note_body(
        args.body.clone(),
        &ctx.editor()?,
        Some(unlocked.content.as_str()),
    )?;

    // Re-seal with the password that opened it.
    let content = match &unlocked.password {
        Some(password) => encrypt(&body, password)?,
        None => body.as_str().to_string(),
    };
    note.set_content(content);
    store.update(&note)?;
    tracing::info!(note = %note.name, "note updated");

    let ui_ctx = ctx.ui_context(false);
    status(
        &ui_ctx,
        &receipt(&ui_ctx, "Note updated", &[("Name", note.name.as_str())]),
    );
    Ok(())
}
