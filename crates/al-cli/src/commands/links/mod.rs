//! `al link` handlers.

mod add;
mod edit;
mod get;
mod list;
mod remove;

use al_core::store::{strip_hash, Link, LinkStore};

use crate::app::{not_found_error, resolve_project, AppContext};
use crate::cli::{LinkArgs, LinkSubcommand};
use crate::helpers::{dedupe, split_pipe_list};

pub fn handle_link(ctx: &AppContext, args: &LinkArgs) -> anyhow::Result<()> {
    let project = resolve_project(ctx, args.target.as_deref())?;
    let store = project.links();

    match &args.command {
        LinkSubcommand::List(a) => list::handle_list(ctx, &store, a),
        LinkSubcommand::Add(a) => add::handle_add(ctx, &store, a),
        LinkSubcommand::Get(a) => get::handle_get(ctx, &store, a),
        LinkSubcommand::Edit(a) => edit::handle_edit(ctx, &store, a),
        LinkSubcommand::Remove(a) => remove::handle_remove(ctx, &store, a),
    }
}

/// Resolve a link by name or keyword, with suggestions on a miss.
fn find_link(ctx: &AppContext, store: &LinkStore, identifier: &str) -> anyhow::Result<Link> {
    let identifier = strip_hash(identifier);
    match store.find(identifier)? {
        Some(link) => Ok(link),
        None => Err(not_found_error(
            ctx,
            "Link",
            identifier,
            store.identifiers()?,
            "Run `al link list` to see the links of this project",
        )),
    }
}

/// Parse a `a|b|#c` keyword argument.
fn parse_keywords(value: &str) -> Vec<String> {
    dedupe(
        split_pipe_list(value)
            .iter()
            .map(|k| strip_hash(k).to_string())
            .filter(|k| !k.is_empty())
            .collect(),
    )
}
