//! Input and parsing helper functions for the CLI.
//!
//! This module provides utilities for:
//! - Password prompting, note body reading and confirmations (`input`)
//! - `|`-separated list parsing (`parsing`)

mod input;
mod parsing;

pub use input::{confirm, read_note_body, resolve_editor, PasswordSource, TerminalPasswords};
pub use parsing::{dedupe, init_shortcuts, split_pipe_list};
