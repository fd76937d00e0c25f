use al_core::store::{GlobalStore, Project, ProjectDir};

use crate::app::AppContext;
use crate::cli::InitArgs;
use crate::errors::CliError;
use crate::helpers::init_shortcuts;
use crate::ui::{hint, receipt, status};

pub fn handle_init(ctx: &AppContext, args: &InitArgs) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()
        .map_err(|e| anyhow::anyhow!("Failed to read current directory: {}", e))?;
    let name = cwd
        .file_name()
        .and_then(|n| n.to_str())
        .map(str::to_string)
        .ok_or_else(|| {
            CliError::invalid_input(format!(
                "Cannot use {} as a project: it has no usable directory name",
                cwd.display()
            ))
        })?;

    let shortcuts = init_shortcuts(&name, &args.shortcuts);

    let mut global = GlobalStore::ensure(ctx.global_dir()?)?;
    global.register(&name, Project::new(cwd.clone(), shortcuts))?;

    let project = ProjectDir::new(&cwd);
    project.ensure_layout()?;
    global.save()?;
    tracing::info!(project = %name, "project initialized");

    let registered = global
        .projects()
        .get(&name)
        .map(|p| p.shortcuts.join(", "))
        .unwrap_or_default();
    let path = cwd.display().to_string();

    let ui_ctx = ctx.ui_context(false);
    status(
        &ui_ctx,
        &receipt(
            &ui_ctx,
            &format!("Initialized project '{}'", name),
            &[("Path", path.as_str()), ("Shortcuts", registered.as_str())],
        ),
    );
    if ui_ctx.mode.is_pretty() {
        status(&ui_ctx, &hint(&ui_ctx, &format!("Jump back here with `al go {}`", name)));
    }
    Ok(())
}
