//! Global user configuration (`~/.al_global/config`).

use serde::{Deserialize, Serialize};

use crate::similarity::DEFAULT_MAX_DISTANCE;

/// Default number of characters shown in note list previews.
pub const DEFAULT_PREVIEW_LENGTH: usize = 60;

/// User configuration. Missing fields fall back to their defaults so files
/// written by older releases (which only had `preview_length`) still load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Characters of note content shown by `note list`
    pub preview_length: usize,

    /// Editor command used for note bodies (falls back to `$EDITOR`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editor: Option<String>,

    /// Maximum edit distance for "did you mean" suggestions
    pub suggestion_distance: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            preview_length: DEFAULT_PREVIEW_LENGTH,
            editor: None,
            suggestion_distance: DEFAULT_MAX_DISTANCE,
        }
    }
}
