use al_core::crypto::encrypt;
use al_core::store::{strip_hash, validate_name, Note, NoteStore};
use al_core::AlError;

use crate::app::AppContext;
use crate::cli::NoteAddArgs;
use crate::helpers::read_note_body;
use crate::ui::{receipt, status};

pub fn handle_add(ctx: &AppContext, store: &NoteStore, args: &NoteAddArgs) -> anyhow::Result<()> {
    let name = strip_hash(&args.name);
    validate_name("Note", name)?;
    // Fail before opening the editor.
    if let Some(existing) = store.get(name)? {
        return Err(AlError::AlreadyExists(format!("Note '{}' already exists", existing.name)).into());
    }

    let body = read_note_body(args.body.clone(), &ctx.editor()?, None)?;
    let note = if args.encrypt {
        let password = ctx.passwords().read_new()?;
        Note::new(name, encrypt(&body, &password)?, true)
    } else {
        Note::new(name, body.as_str(), false)
    };
    store.insert(&note)?;
    tracing::info!(note = %note.name, encrypted = note.encrypted, "note added");

    let ui_ctx = ctx.ui_context(false);
    let encrypted = if note.encrypted { "yes" } else { "no" };
    status(
        &ui_ctx,
        &receipt(
            &ui_ctx,
            "Note added",
            &[("Name", note.name.as_str()), ("Encrypted", encrypted)],
        ),
    );
    Ok(())
}
