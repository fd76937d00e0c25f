//! Al CLI - jump between client projects and keep notes and links next to them
//!
//! This is the command-line interface for Al. It provides a user-friendly
//! interface to the core library functionality.

mod app;
mod cli;
mod clipboard;
mod commands;
mod constants;
mod errors;
mod helpers;
mod ui;

use std::ffi::OsString;
use std::path::Path;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use al_core::VERSION;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{go, init, install, links, misc, notes};
use crate::constants::env;
use crate::errors::{exit_code_for, CliError};
use crate::ui::{print_error, Badge};

fn main() {
    init_tracing();

    let cli = Cli::parse_from(expand_alias(std::env::args_os().collect()));
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        let ui_ctx = ctx.ui_context(false);
        match e.downcast_ref::<CliError>() {
            Some(cli_err) => print_error(&ui_ctx, cli_err.message(), cli_err.hint()),
            None => print_error(&ui_ctx, &format!("{:#}", e), None),
        }
        std::process::exit(exit_code_for(&e));
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(env::LOG).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Rewrite `alnote list` into `al note list` when invoked through one of the
/// installed alias binaries.
fn expand_alias(mut args: Vec<OsString>) -> Vec<OsString> {
    let Some(stem) = args
        .first()
        .and_then(|argv0| Path::new(argv0).file_stem())
        .and_then(|s| s.to_str())
        .map(str::to_string)
    else {
        return args;
    };

    let Some(sub) = stem.strip_prefix("al").filter(|s| !s.is_empty()) else {
        return args;
    };
    let known = Cli::command()
        .get_subcommands()
        .any(|c| c.get_name() == sub);
    if known {
        tracing::debug!(alias = %stem, "expanding alias binary");
        args.insert(1, OsString::from(sub));
    }
    args
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Init(args)) => init::handle_init(ctx, args),
        Some(Commands::Go(args)) => go::handle_go(ctx, args),
        Some(Commands::Note(args)) => notes::handle_note(ctx, args),
        Some(Commands::Link(args)) => links::handle_link(ctx, args),
        Some(Commands::Install(args)) => install::handle_install(ctx, args),
        Some(Commands::Update(args)) => install::handle_update(ctx, args),
        Some(Commands::Completions(args)) => misc::handle_completions(args),
        None => {
            print_quickstart(ctx);
            Ok(())
        }
    }
}

fn print_quickstart(ctx: &AppContext) {
    let ui_ctx = ctx.ui_context(false);
    if ui_ctx.quiet {
        println!("al {}", VERSION);
        return;
    }
    println!(
        "{}",
        ui::badge(&ui_ctx, Badge::Info, &format!("al {}", VERSION))
    );
    println!();
    println!("  al init \"api|backend\"      register this directory");
    println!("  al go <shortcut>           copy a project path");
    println!("  al note add #todo          write a note here");
    println!("  al link add #ci -u <url>   keep a link here");
    println!();
    println!("{}", ui::hint(&ui_ctx, "Run `al --help` for every command"));
}
