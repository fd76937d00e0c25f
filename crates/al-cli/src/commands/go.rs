use crate::app::{not_found_error, AppContext};
use crate::cli::GoArgs;
use crate::ui::{receipt, status};

pub fn handle_go(ctx: &AppContext, args: &GoArgs) -> anyhow::Result<()> {
    let global = ctx.global()?;
    let Some((name, project)) = global.find_by_shortcut(&args.shortcut) else {
        return Err(not_found_error(
            ctx,
            "Project",
            &args.shortcut,
            global.candidates(),
            "Run `al init` inside the project directory to register it",
        ));
    };

    let path = project.path.display().to_string();
    if args.print {
        println!("{}", path);
        return Ok(());
    }

    ctx.clipboard().copy(&path)?;

    let ui_ctx = ctx.ui_context(false);
    status(
        &ui_ctx,
        &receipt(
            &ui_ctx,
            "Copied path to clipboard",
            &[("Project", name), ("Path", path.as_str())],
        ),
    );
    Ok(())
}
