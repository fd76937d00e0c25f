use al_core::store::LinkStore;

use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::ui::{format_keywords, print, simple_table, status, Column};

pub fn handle_list(ctx: &AppContext, store: &LinkStore, args: &ListArgs) -> anyhow::Result<()> {
    let links = store.list()?;
    let ui_ctx = ctx.ui_context(args.json);

    if ui_ctx.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&links)?);
        return Ok(());
    }

    if links.is_empty() {
        status(&ui_ctx, "No links found.");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = links
        .iter()
        .map(|link| {
            vec![
                link.name.clone(),
                link.url.clone(),
                format_keywords(&link.keywords),
            ]
        })
        .collect();

    let columns = [Column::new("Name"), Column::new("Link"), Column::new("Keywords")];
    print(&ui_ctx, &simple_table(&ui_ctx, &columns, &rows));
    Ok(())
}
