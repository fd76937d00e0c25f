//! Application-level utilities for the Al CLI.
//!
//! This module provides:
//! - The shared handler context (global store, passwords, clipboard)
//! - Project resolution and "did you mean" errors
//! - Note decryption with retry logic

mod context;
mod password;
mod resolver;

pub use context::AppContext;
pub use password::unlock_note;
pub use resolver::{not_found_error, resolve_project};
