use al_core::store::NoteStore;

use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::ui::{format_date, print, simple_table, status, Column};

pub fn handle_list(ctx: &AppContext, store: &NoteStore, args: &ListArgs) -> anyhow::Result<()> {
    let notes = store.list()?;
    let preview_length = ctx.config()?.preview_length;
    let ui_ctx = ctx.ui_context(args.json);

    if ui_ctx.mode.is_json() {
        let items: Vec<serde_json::Value> = notes
            .iter()
            .map(|note| {
                serde_json::json!({
                    "name": note.name,
                    "encrypted": note.encrypted,
                    "preview": note.preview(preview_length),
                    "created_at": note.created_at.to_rfc3339(),
                    "updated_at": note.updated_at.to_rfc3339(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    if notes.is_empty() {
        status(&ui_ctx, "No notes found.");
        return Ok(());
    }

    let pretty = ui_ctx.mode.is_pretty();
    let rows: Vec<Vec<String>> = notes
        .iter()
        .map(|note| {
            vec![
                note.name.clone(),
                format_date(&note.updated_at, pretty),
                note.preview(preview_length),
            ]
        })
        .collect();

    let columns = [Column::new("Name"), Column::new("Date"), Column::new("Preview")];
    print(&ui_ctx, &simple_table(&ui_ctx, &columns, &rows));
    Ok(())
}
