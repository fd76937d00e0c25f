//! # Al Core
//!
//! Core library for Al - a CLI for jumping between client projects and keeping
//! notes and links next to them.
//!
//! This crate provides the domain logic and storage independent of the CLI
//! interface.
//!
//! ## Architecture
//!
//! - **similarity**: Edit-distance matching for "did you mean" suggestions
//! - **crypto**: Password-based authenticated encryption of notes
//! - **store**: Global project registry and per-project note/link files
//! - **fs**: Atomic file writes

pub mod crypto;
pub mod error;
pub mod fs;
pub mod similarity;
pub mod store;

pub use error::{AlError, Result};
pub use similarity::{edit_distance, find_similar, DEFAULT_MAX_DISTANCE};
pub use store::{GlobalStore, LinkStore, NoteStore, ProjectDir};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
