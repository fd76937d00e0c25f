//! Output settings for one invocation.

use std::io::IsTerminal;

const DEFAULT_WIDTH: usize = 80;

/// How results are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// `--json` listings; status lines are dropped
    Json,
    /// `key=value` receipts and tab-separated rows, for pipes and scripts
    #[default]
    Plain,
    /// Badges, hints and padded tables on a terminal
    Pretty,
}

impl OutputMode {
    pub fn is_json(self) -> bool {
        matches!(self, Self::Json)
    }

    pub fn is_pretty(self) -> bool {
        matches!(self, Self::Pretty)
    }
}

/// Global flags that shape output.
#[derive(Debug, Clone, Copy, Default)]
pub struct UiFlags {
    pub json: bool,
    pub no_color: bool,
    pub ascii: bool,
    pub quiet: bool,
}

/// What the environment says about stdout.
#[derive(Debug, Clone, Copy)]
pub struct Terminal {
    pub is_tty: bool,
    /// `TERM=dumb`
    pub dumb: bool,
    /// `NO_COLOR` is set
    pub no_color: bool,
    pub width: Option<usize>,
}

impl Terminal {
    pub fn detect() -> Self {
        Self {
            is_tty: std::io::stdout().is_terminal(),
            dumb: std::env::var("TERM").map(|v| v == "dumb").unwrap_or(false),
            no_color: std::env::var_os("NO_COLOR").is_some(),
            width: terminal_width(),
        }
    }
}

/// Resolved output settings handed to every render helper.
#[derive(Debug, Clone)]
pub struct UiContext {
    pub color: bool,
    pub unicode: bool,
    pub width: usize,
    pub mode: OutputMode,
    /// `--quiet`: receipts, badges and hints are dropped, results are not
    pub quiet: bool,
}

impl UiContext {
    pub fn from_env(flags: UiFlags) -> Self {
        Self::resolve(flags, Terminal::detect())
    }

    /// `--json` wins; otherwise pretty output needs a terminal that is not
    /// `TERM=dumb`. Color follows pretty mode unless disabled.
    pub fn resolve(flags: UiFlags, term: Terminal) -> Self {
        let mode = if flags.json {
            OutputMode::Json
        } else if term.is_tty && !term.dumb {
            OutputMode::Pretty
        } else {
            OutputMode::Plain
        };

        Self {
            color: mode.is_pretty() && !flags.no_color && !term.no_color,
            unicode: !flags.ascii,
            width: term.width.unwrap_or(DEFAULT_WIDTH),
            mode,
            quiet: flags.quiet,
        }
    }

    /// Whether receipts, badges and hints should be printed.
    pub fn shows_status(&self) -> bool {
        !self.quiet && !self.mode.is_json()
    }
}

/// `$COLUMNS`, then the stdout window size.
fn terminal_width() -> Option<usize> {
    if let Some(width) = std::env::var("COLUMNS")
        .ok()
        .and_then(|cols| cols.parse::<usize>().ok())
        .filter(|w| *w > 0)
    {
        return Some(width);
    }

    #[cfg(unix)]
    {
        use std::mem::MaybeUninit;

        let mut winsize = MaybeUninit::<libc::winsize>::uninit();
        // SAFETY: TIOCGWINSZ only writes into the provided winsize
        let result =
            unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, winsize.as_mut_ptr()) };
        if result == 0 {
            let ws = unsafe { winsize.assume_init() };
            if ws.ws_col > 0 {
                return Some(ws.ws_col as usize);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tty() -> Terminal {
        Terminal {
            is_tty: true,
            dumb: false,
            no_color: false,
            width: Some(120),
        }
    }

    fn pipe() -> Terminal {
        Terminal {
            is_tty: false,
            dumb: false,
            no_color: false,
            width: None,
        }
    }

    #[test]
    fn test_terminal_gets_pretty_and_color() {
        let ctx = UiContext::resolve(UiFlags::default(), tty());
        assert_eq!(ctx.mode, OutputMode::Pretty);
        assert!(ctx.color);
        assert_eq!(ctx.width, 120);
    }

    #[test]
    fn test_pipe_gets_plain_without_color() {
        let ctx = UiContext::resolve(UiFlags::default(), pipe());
        assert_eq!(ctx.mode, OutputMode::Plain);
        assert!(!ctx.color);
        assert_eq!(ctx.width, DEFAULT_WIDTH);
    }

    #[test]
    fn test_json_flag_wins_on_terminal() {
        let flags = UiFlags {
            json: true,
            ..UiFlags::default()
        };
        let ctx = UiContext::resolve(flags, tty());
        assert_eq!(ctx.mode, OutputMode::Json);
        assert!(!ctx.shows_status());
    }

    #[test]
    fn test_dumb_terminal_is_plain() {
        let term = Terminal { dumb: true, ..tty() };
        assert_eq!(UiContext::resolve(UiFlags::default(), term).mode, OutputMode::Plain);
    }

    #[test]
    fn test_no_color_from_flag_or_env() {
        let flags = UiFlags {
            no_color: true,
            ..UiFlags::default()
        };
        assert!(!UiContext::resolve(flags, tty()).color);
        let term = Terminal { no_color: true, ..tty() };
        assert!(!UiContext::resolve(UiFlags::default(), term).color);
    }

    #[test]
    fn test_ascii_disables_unicode() {
        let flags = UiFlags {
            ascii: true,
            ..UiFlags::default()
        };
        assert!(!UiContext::resolve(flags, tty()).unicode);
    }

    #[test]
    fn test_quiet_hides_status_only() {
        let flags = UiFlags {
            quiet: true,
            ..UiFlags::default()
        };
        let ctx = UiContext::resolve(flags, tty());
        assert!(!ctx.shows_status());
        assert_eq!(ctx.mode, OutputMode::Pretty);
        assert!(UiContext::resolve(UiFlags::default(), pipe()).shows_status());
    }
}
