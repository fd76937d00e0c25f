//! `al install` / `al update`: place the binary and its aliases on the PATH.

use std::io;
use std::path::{Path, PathBuf};

use al_core::fs::{rename_with_fallback, set_mode, temp_path_for};
use al_core::store::GlobalStore;

use crate::app::AppContext;
use crate::cli::InstallArgs;
use crate::constants::{GO_ALIAS_BINARY, INSTALLED_BINARIES};
use crate::errors::CliError;
use crate::ui::{hint, receipt, status, UiContext};

const EXECUTABLE_MODE: u32 = 0o755;

pub fn handle_install(ctx: &AppContext, args: &InstallArgs) -> anyhow::Result<()> {
    let installed = install_binaries(&current_exe()?, &args.bin_dir)?;
    let global = GlobalStore::ensure(ctx.global_dir()?)?;
    tracing::info!(dir = %args.bin_dir.display(), "installed binaries");

    let ui_ctx = ctx.ui_context(false);
    let global_dir = global.dir().display().to_string();
    report(&ui_ctx, "Installed al", &args.bin_dir, &installed, Some(&global_dir));
    if ui_ctx.mode.is_pretty() {
        status(&ui_ctx, &hint(&ui_ctx, "Run `al init` inside a project to register it"));
    }
    Ok(())
}

pub fn handle_update(ctx: &AppContext, args: &InstallArgs) -> anyhow::Result<()> {
    let installed = install_binaries(&current_exe()?, &args.bin_dir)?;
    tracing::info!(dir = %args.bin_dir.display(), "updated binaries");

    report(&ctx.ui_context(false), "Updated al", &args.bin_dir, &installed, None);
    Ok(())
}

fn report(ui_ctx: &UiContext, title: &str, bin_dir: &Path, installed: &[String], global_dir: Option<&str>) {
    let dir = bin_dir.display().to_string();
    let binaries = installed.join(", ");
    let mut items = vec![("Directory", dir.as_str()), ("Binaries", binaries.as_str())];
    if let Some(global_dir) = global_dir {
        items.push(("Data", global_dir));
    }
    status(ui_ctx, &receipt(ui_ctx, title, &items));
}

fn current_exe() -> anyhow::Result<PathBuf> {
    std::env::current_exe().map_err(|e| anyhow::anyhow!("Failed to locate the running binary: {}", e))
}

fn binary_file(name: &str) -> String {
    format!("{}{}", name, std::env::consts::EXE_SUFFIX)
}

/// Copy `source` into `bin_dir` under every installed name, then add the
/// `algo` link. Returns the names written.
fn install_binaries(source: &Path, bin_dir: &Path) -> anyhow::Result<Vec<String>> {
    if !bin_dir.is_dir() {
        return Err(CliError::invalid_input(format!(
            "{} is not a directory",
            bin_dir.display()
        ))
        .into());
    }

    let mut installed = Vec::new();
    for name in INSTALLED_BINARIES {
        let dest = bin_dir.join(binary_file(name));
        copy_executable(source, &dest).map_err(|e| install_error(&dest, e))?;
        tracing::debug!(dest = %dest.display(), "binary written");
        installed.push(name.to_string());
    }

    let alias = bin_dir.join(binary_file(GO_ALIAS_BINARY));
    let target = bin_dir.join(binary_file("al"));
    link_or_copy(&target, &alias).map_err(|e| install_error(&alias, e))?;
    installed.push(GO_ALIAS_BINARY.to_string());

    Ok(installed)
}

/// Write through `<dest>.new` so a running binary is never truncated.
fn copy_executable(source: &Path, dest: &Path) -> io::Result<()> {
    let temp = temp_path_for(dest);
    if let Err(e) = std::fs::copy(source, &temp).and_then(|_| set_mode(&temp, EXECUTABLE_MODE)) {
        let _ = std::fs::remove_file(&temp);
        return Err(e);
    }
    rename_with_fallback(&temp, dest)
}

#[cfg(unix)]
fn link_or_copy(target: &Path, dest: &Path) -> io::Result<()> {
    let temp = temp_path_for(dest);
    let _ = std::fs::remove_file(&temp);
    match std::os::unix::fs::symlink(target, &temp) {
        Ok(()) => rename_with_fallback(&temp, dest),
        Err(e) => {
            tracing::debug!(error = %e, "symlink failed, copying instead");
            copy_executable(target, dest)
        }
    }
}

#[cfg(not(unix))]
fn link_or_copy(target: &Path, dest: &Path) -> io::Result<()> {
    copy_executable(target, dest)
}

fn install_error(dest: &Path, err: io::Error) -> anyhow::Error {
    if err.kind() == io::ErrorKind::PermissionDenied {
        anyhow::anyhow!(
            "Permission denied writing {}. Re-run with sudo or pass --bin-dir.",
            dest.display()
        )
    } else {
        anyhow::anyhow!("Failed to install {}: {}", dest.display(), err)
    }
}
