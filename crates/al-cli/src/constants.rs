//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (anything not listed below)
/// - 2: Misuse of shell command (reserved by shells, also used by clap)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// General failure.
    pub const GENERAL: i32 = 1;

    /// Resource not found (project, note, link).
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;

    /// Authentication failed (wrong password, too many attempts).
    pub const AUTH_FAILED: i32 = 5;
}

/// Environment variables read by the CLI.
pub mod env {
    /// Password used for encrypted notes instead of prompting.
    pub const PASSWORD: &str = "AL_PASSWORD";

    /// Clipboard command override (text is piped to its stdin).
    pub const CLIPBOARD_CMD: &str = "AL_CLIPBOARD_CMD";

    /// Log filter in `EnvFilter` syntax.
    pub const LOG: &str = "AL_LOG";
}

/// Password attempts allowed when decrypting interactively.
pub const MAX_PASSWORD_ATTEMPTS: u32 = 3;

/// Default install location for `al install` / `al update`.
pub const DEFAULT_BIN_DIR: &str = "/usr/local/bin";

/// Binary names installed as full copies. `algo` is linked separately.
pub const INSTALLED_BINARIES: &[&str] = &["al", "alinit", "alnote", "allink"];

/// Name of the symlinked shortcut binary.
pub const GO_ALIAS_BINARY: &str = "algo";

/// Editor used when neither the config nor `$EDITOR` name one.
pub const FALLBACK_EDITOR: &str = "vim";
