//! UI primitives for the Al CLI.
//!
//! This module provides:
//! - **Context**: Output mode, color, symbols, width and quiet, from flags and the terminal
//! - **Theme**: Badge tokens and the owo-colors palette
//! - **Render**: Tables, receipts, hints, errors
//! - **Format**: Dates and lists

mod context;
pub mod format;
pub mod render;
pub mod theme;

pub use context::{OutputMode, UiContext, UiFlags};
pub use theme::Badge;

pub use render::{badge, hint, print, print_error, receipt, simple_table, status, Column};

pub use format::{format_date, format_keywords, human_list};
