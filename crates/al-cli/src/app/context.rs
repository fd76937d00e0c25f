//! Application context for the Al CLI.
//!
//! Bundles the parsed arguments with the lazily loaded global store and the
//! password and clipboard capabilities handlers need.

use std::path::PathBuf;

use once_cell::unsync::OnceCell;

use al_core::store::{Config, GlobalStore};
use al_core::DEFAULT_MAX_DISTANCE;

use crate::cli::Cli;
use crate::clipboard::{Clipboard, SystemClipboard};
use crate::helpers::{resolve_editor, PasswordSource, TerminalPasswords};
use crate::ui::{UiContext, UiFlags};

/// Application context shared by every command handler.
pub struct AppContext<'a> {
    cli: &'a Cli,
    global: OnceCell<GlobalStore>,
    passwords: Box<dyn PasswordSource>,
    clipboard: Box<dyn Clipboard>,
}

impl<'a> AppContext<'a> {
    /// Create a context backed by the terminal and the system clipboard.
    pub fn new(cli: &'a Cli) -> Self {
        Self::with_capabilities(
            cli,
            Box::new(TerminalPasswords::from_env()),
            Box::new(SystemClipboard::from_env()),
        )
    }

    pub fn with_capabilities(
        cli: &'a Cli,
        passwords: Box<dyn PasswordSource>,
        clipboard: Box<dyn Clipboard>,
    ) -> Self {
        Self {
            cli,
            global: OnceCell::new(),
            passwords,
            clipboard,
        }
    }

    /// UI context for this invocation, `--quiet` included.
    pub fn ui_context(&self, json: bool) -> UiContext {
        UiContext::from_env(UiFlags {
            json,
            no_color: self.cli.no_color,
            ascii: self.cli.ascii,
            quiet: self.cli.quiet,
        })
    }

    pub fn global_dir(&self) -> anyhow::Result<PathBuf> {
        Ok(GlobalStore::default_dir()?)
    }

    /// The global store, loaded on first use.
    ///
    /// Read-only; commands that change the registry open their own copy.
    pub fn global(&self) -> anyhow::Result<&GlobalStore> {
        self.global.get_or_try_init(|| -> anyhow::Result<GlobalStore> {
            Ok(GlobalStore::open(self.global_dir()?)?)
        })
    }

    pub fn config(&self) -> anyhow::Result<&Config> {
        Ok(self.global()?.config())
    }

    /// Edit distance used for "did you mean" suggestions.
    pub fn suggestion_distance(&self) -> usize {
        self.config()
            .map(|c| c.suggestion_distance)
            .unwrap_or(DEFAULT_MAX_DISTANCE)
    }

    /// Editor command for note bodies.
    pub fn editor(&self) -> anyhow::Result<String> {
        Ok(resolve_editor(self.config()?.editor.as_deref()))
    }

    pub fn passwords(&self) -> &dyn PasswordSource {
        self.passwords.as_ref()
    }

    pub fn clipboard(&self) -> &dyn Clipboard {
        self.clipboard.as_ref()
    }
}
