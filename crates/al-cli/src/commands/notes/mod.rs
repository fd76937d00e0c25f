//! `al note` handlers.

mod add;
mod edit;
mod get;
mod list;
mod remove;

use al_core::store::{strip_hash, Note, NoteStore};

use crate::app::{not_found_error, resolve_project, AppContext};
use crate::cli::{NoteArgs, NoteSubcommand};

pub fn handle_note(ctx: &AppContext, args: &NoteArgs) -> anyhow::Result<()> {
    let project = resolve_project(ctx, args.target.as_deref())?;
    let store = project.notes();

    match &args.command {
        NoteSubcommand::List(a) => list::handle_list(ctx, &store, a),
        NoteSubcommand::Add(a) => add::handle_add(ctx, &store, a),
        NoteSubcommand::Get(a) => get::handle_get(ctx, &store, a),
        NoteSubcommand::Edit(a) => edit::handle_edit(ctx, &store, a),
        NoteSubcommand::Remove(a) => remove::handle_remove(ctx, &store, a),
    }
}

/// Look up a note, turning a miss into a "did you mean" error.
fn find_note(ctx: &AppContext, store: &NoteStore, name: &str) -> anyhow::Result<Note> {
    let name = strip_hash(name);
    match store.get(name)? {
        Some(note) => Ok(note),
        None => Err(not_found_error(
            ctx,
            "Note",
            name,
            store.names()?,
            "Run `al note list` to see the notes of this project",
        )),
    }
}
