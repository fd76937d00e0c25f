use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use al_core::VERSION;

use crate::constants::DEFAULT_BIN_DIR;

/// Al - jump between projects and keep notes and links next to them
#[derive(Parser)]
#[command(name = "al")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols instead of unicode
    #[arg(long, global = true)]
    pub ascii: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Register the current directory as a project
    Init(InitArgs),

    /// Copy a project's path to the clipboard
    Go(GoArgs),

    /// Manage notes of a project
    Note(NoteArgs),

    /// Manage links of a project
    Link(LinkArgs),

    /// Install the al binaries
    Install(InstallArgs),

    /// Replace installed al binaries with this build
    Update(InstallArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Extra shortcuts separated by `|` (e.g. "api|backend")
    #[arg(value_name = "SHORTCUTS")]
    pub shortcuts: Vec<String>,
}

/// Arguments for the `go` command
#[derive(Args)]
pub struct GoArgs {
    /// Project name or shortcut
    #[arg(value_name = "SHORTCUT")]
    pub shortcut: String,

    /// Print the path instead of copying it
    #[arg(long)]
    pub print: bool,
}

/// Arguments for the `note` command
#[derive(Args)]
pub struct NoteArgs {
    /// Project shortcut (defaults to the current directory)
    #[arg(short, long, global = true, value_name = "SHORTCUT")]
    pub target: Option<String>,

    #[command(subcommand)]
    pub command: NoteSubcommand,
}

#[derive(Subcommand)]
pub enum NoteSubcommand {
    /// List notes
    List(ListArgs),

    /// Add a note
    Add(NoteAddArgs),

    /// Print a note
    Get(NoteGetArgs),

    /// Edit a note
    Edit(NoteEditArgs),

    /// Remove a note
    Remove(RemoveArgs),
}

/// Arguments shared by `note list` and `link list`
#[derive(Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `note add`
#[derive(Args)]
pub struct NoteAddArgs {
    /// Note name (a leading `#` is ignored)
    #[arg(value_name = "#NAME")]
    pub name: String,

    /// Encrypt the note with a password
    #[arg(short = 'c', long, visible_alias = "chiffre")]
    pub encrypt: bool,

    /// Note body (overrides stdin/editor)
    #[arg(short, long)]
    pub body: Option<String>,
}

/// Arguments for `note get`
#[derive(Args)]
pub struct NoteGetArgs {
    /// Note name (a leading `#` is ignored)
    #[arg(value_name = "#NAME")]
    pub name: String,

    /// Copy the content to the clipboard instead of printing it
    #[arg(long = "cp")]
    pub copy: bool,
}

/// Arguments for `note edit`
#[derive(Args)]
pub struct NoteEditArgs {
    /// Note name (a leading `#` is ignored)
    #[arg(value_name = "#NAME")]
    pub name: String,

    /// New body (overrides stdin/editor)
    #[arg(short, long)]
    pub body: Option<String>,
}

/// Arguments shared by `note remove` and `link remove`
#[derive(Args)]
pub struct RemoveArgs {
    /// Name (links also accept a keyword)
    #[arg(value_name = "#NAME")]
    pub name: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub force: bool,
}

/// Arguments for the `link` command
#[derive(Args)]
pub struct LinkArgs {
    /// Project shortcut (defaults to the current directory)
    #[arg(short, long, global = true, value_name = "SHORTCUT")]
    pub target: Option<String>,

    #[command(subcommand)]
    pub command: LinkSubcommand,
}

#[derive(Subcommand)]
pub enum LinkSubcommand {
    /// List links
    List(ListArgs),

    /// Add a link
    Add(LinkAddArgs),

    /// Show a link by name or keyword
    Get(LinkGetArgs),

    /// Edit a link
    Edit(LinkEditArgs),

    /// Remove a link
    Remove(RemoveArgs),
}

/// Arguments for `link add`
#[derive(Args)]
pub struct LinkAddArgs {
    /// Link name (a leading `#` is ignored)
    #[arg(value_name = "#NAME")]
    pub name: String,

    /// Link URL
    #[arg(short, long)]
    pub url: String,

    /// Keywords separated by `|`
    #[arg(short, long)]
    pub keywords: Option<String>,
}

/// Arguments for `link get`
#[derive(Args)]
pub struct LinkGetArgs {
    /// Link name or keyword
    #[arg(value_name = "#NAME|#KEYWORD")]
    pub identifier: String,

    /// Copy the URL to the clipboard
    #[arg(short, long)]
    pub copy: bool,
}

/// Arguments for `link edit`
#[derive(Args)]
pub struct LinkEditArgs {
    /// Link name or keyword
    #[arg(value_name = "#NAME|#KEYWORD")]
    pub identifier: String,

    /// New URL
    #[arg(short, long)]
    pub url: Option<String>,

    /// Keywords to add, separated by `|`
    #[arg(short = 'a', long, visible_alias = "add_keyword")]
    pub add_keyword: Option<String>,

    /// Replace all keywords (no value clears them)
    #[arg(
        short = 'r',
        long,
        visible_alias = "reset_keyword",
        num_args = 0..=1,
        default_missing_value = ""
    )]
    pub reset_keyword: Option<String>,
}

/// Arguments for `install` and `update`
#[derive(Args)]
pub struct InstallArgs {
    /// Destination directory
    #[arg(long, value_name = "DIR", default_value = DEFAULT_BIN_DIR)]
    pub bin_dir: PathBuf,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}
