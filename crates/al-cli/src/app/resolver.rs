//! Project resolution and not-found reporting.

use al_core::find_similar;
use al_core::store::ProjectDir;

use crate::errors::CliError;
use crate::helpers::dedupe;
use crate::ui::human_list;

use super::context::AppContext;

/// Resolve the project a `note`/`link` command works on.
///
/// `--target` is looked up as a shortcut; otherwise the current directory
/// must already contain `.al_local`.
pub fn resolve_project(ctx: &AppContext, target: Option<&str>) -> anyhow::Result<ProjectDir> {
    let Some(target) = target else {
        let cwd = std::env::current_dir()
            .map_err(|e| anyhow::anyhow!("Failed to read current directory: {}", e))?;
        let project = ProjectDir::new(cwd);
        if !project.is_initialized() {
            return Err(CliError::not_found(
                format!("No al project in {}", project.root().display()),
                "Run `al init` here, or pass --target <shortcut>",
            )
            .into());
        }
        return Ok(project);
    };

    let global = ctx.global()?;
    let Some((name, registered)) = global.find_by_shortcut(target) else {
        return Err(not_found_error(
            ctx,
            "Project",
            target,
            global.candidates(),
            "Run `al init` inside the project directory to register it",
        ));
    };

    let project = ProjectDir::new(&registered.path);
    if !project.is_initialized() {
        return Err(CliError::not_found(
            format!(
                "Project '{}' has no local folder at {}",
                name,
                project.local_dir().display()
            ),
            "The directory may have moved; run `al init` in its new location",
        )
        .into());
    }
    tracing::debug!(project = name, "resolved target");
    Ok(project)
}

/// Build the error for a failed lookup, with suggestions when any are close.
pub fn not_found_error(
    ctx: &AppContext,
    kind: &str,
    query: &str,
    candidates: Vec<String>,
    fallback_hint: &str,
) -> anyhow::Error {
    let similar = dedupe(find_similar(query, candidates, ctx.suggestion_distance()));
    tracing::debug!(kind, suggestions = similar.len(), "lookup failed");

    let hint = if similar.is_empty() {
        fallback_hint.to_string()
    } else {
        format!("Did you mean {}?", human_list(&similar))
    };
    CliError::not_found(format!("{} '{}' not found", kind, query), hint).into()
}
