//! Clipboard access through the platform's copy tools.

use std::io::{self, Write};
use std::process::{Command, Stdio};

use crate::constants::env;

/// Something that can take text for the user to paste elsewhere.
pub trait Clipboard {
    fn copy(&self, text: &str) -> anyhow::Result<()>;
}

/// Pipes text into `$AL_CLIPBOARD_CMD` or the first available system tool.
pub struct SystemClipboard {
    override_cmd: Option<String>,
}

impl SystemClipboard {
    pub fn from_env() -> Self {
        Self {
            override_cmd: std::env::var(env::CLIPBOARD_CMD)
                .ok()
                .filter(|v| !v.trim().is_empty()),
        }
    }

    fn candidates(&self) -> Vec<Vec<String>> {
        if let Some(cmd) = &self.override_cmd {
            return vec![cmd.split_whitespace().map(str::to_string).collect()];
        }
        platform_tools()
            .iter()
            .map(|argv| argv.iter().map(|s| s.to_string()).collect())
            .collect()
    }
}

impl Clipboard for SystemClipboard {
    fn copy(&self, text: &str) -> anyhow::Result<()> {
        for argv in self.candidates() {
            let Some((program, args)) = argv.split_first() else {
                continue;
            };
            match pipe_into(program, args, text) {
                Ok(()) => {
                    tracing::debug!(tool = %program, "copied to clipboard");
                    return Ok(());
                }
                Err(e) if e.kind() == io::ErrorKind::NotFound => {
                    tracing::debug!(tool = %program, "clipboard tool not installed");
                    continue;
                }
                Err(e) => {
                    return Err(anyhow::anyhow!("Clipboard command '{}' failed: {}", program, e))
                }
            }
        }
        Err(anyhow::anyhow!(
            "No clipboard tool found. Install one (pbcopy, wl-copy, xclip, xsel) or set {}.",
            env::CLIPBOARD_CMD
        ))
    }
}

fn pipe_into(program: &str, args: &[String], text: &str) -> io::Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .spawn()?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes())?;
    }

    let status = child.wait()?;
    if status.success() {
        Ok(())
    } else {
        Err(io::Error::new(
            io::ErrorKind::Other,
            format!("exited with {}", status),
        ))
    }
}

#[cfg(target_os = "macos")]
fn platform_tools() -> &'static [&'static [&'static str]] {
    &[&["pbcopy"]]
}

#[cfg(windows)]
fn platform_tools() -> &'static [&'static [&'static str]] {
    &[&["clip"]]
}

#[cfg(not(any(target_os = "macos", windows)))]
fn platform_tools() -> &'static [&'static [&'static str]] {
    &[
        &["wl-copy"],
        &["xclip", "-selection", "clipboard"],
        &["xsel", "--clipboard", "--input"],
    ]
}
