//! Input handling: passwords, note bodies and confirmations.

use std::fs::OpenOptions;
use std::io::{self, IsTerminal, Read, Write};
use std::path::Path;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

use dialoguer::{Confirm, Password};
use zeroize::Zeroizing;

use crate::constants::{env, FALLBACK_EDITOR};
use crate::errors::CliError;

/// Where note passwords come from.
pub trait PasswordSource {
    /// Ask for the password of an existing note.
    fn read(&self, prompt: &str) -> anyhow::Result<Zeroizing<String>>;

    /// Ask for a new password, with confirmation when prompting.
    fn read_new(&self) -> anyhow::Result<Zeroizing<String>>;

    /// Whether asking again after a wrong password can give a different answer.
    fn allows_retry(&self) -> bool;
}

/// `$AL_PASSWORD` when set, otherwise a masked terminal prompt.
pub struct TerminalPasswords {
    env_value: Option<Zeroizing<String>>,
    interactive: bool,
}

impl TerminalPasswords {
    pub fn from_env() -> Self {
        let env_value = std::env::var(env::PASSWORD)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(Zeroizing::new);
        Self {
            env_value,
            interactive: io::stdin().is_terminal(),
        }
    }

    fn require_tty(&self) -> anyhow::Result<()> {
        if !self.interactive {
            return Err(CliError::invalid_input(format!(
                "No password provided and no TTY available. Set {}.",
                env::PASSWORD
            ))
            .into());
        }
        Ok(())
    }
}

impl PasswordSource for TerminalPasswords {
    fn read(&self, prompt: &str) -> anyhow::Result<Zeroizing<String>> {
        if let Some(value) = &self.env_value {
            return Ok(value.clone());
        }
        self.require_tty()?;
        Password::new()
            .with_prompt(prompt)
            .allow_empty_password(true)
            .interact()
            .map(Zeroizing::new)
            .map_err(|e| anyhow::anyhow!("Failed to read password: {}", e))
    }

    fn read_new(&self) -> anyhow::Result<Zeroizing<String>> {
        if let Some(value) = &self.env_value {
            return Ok(value.clone());
        }
        self.require_tty()?;
        Password::new()
            .with_prompt("Enter password")
            .with_confirmation("Confirm password", "Passwords do not match")
            .interact()
            .map(Zeroizing::new)
            .map_err(|e| anyhow::anyhow!("Failed to read password: {}", e))
    }

    fn allows_retry(&self) -> bool {
        self.env_value.is_none() && self.interactive
    }
}

/// Pick the editor command: config value, then `$EDITOR`, then `vim`.
pub fn resolve_editor(configured: Option<&str>) -> String {
    configured
        .map(str::to_string)
        .filter(|v| !v.trim().is_empty())
        .or_else(|| std::env::var("EDITOR").ok().filter(|v| !v.trim().is_empty()))
        .unwrap_or_else(|| FALLBACK_EDITOR.to_string())
}

/// Read a note body from `--body`, piped stdin, or the editor.
///
/// The body is kept exactly as given, trailing newlines and empty bodies
/// included. `initial` pre-fills the editor when editing an existing note.
pub fn read_note_body(
    body: Option<String>,
    editor: &str,
    initial: Option<&str>,
) -> anyhow::Result<Zeroizing<String>> {
    if let Some(value) = body {
        return Ok(Zeroizing::new(value));
    }

    if !io::stdin().is_terminal() {
        return read_body(io::stdin().lock())
            .map_err(|e| anyhow::anyhow!("Failed to read stdin: {}", e));
    }

    read_body_from_editor(editor, initial)
}

fn read_body(mut reader: impl Read) -> io::Result<Zeroizing<String>> {
    let mut buffer = Zeroizing::new(String::new());
    reader.read_to_string(&mut buffer)?;
    Ok(buffer)
}

/// Open the editor on a private temp file and return what was saved.
fn read_body_from_editor(editor: &str, initial: Option<&str>) -> anyhow::Result<Zeroizing<String>> {
    let mut parts = editor.split_whitespace();
    let program = parts
        .next()
        .ok_or_else(|| anyhow::anyhow!("Editor command is empty"))?;

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|e| anyhow::anyhow!("System time error: {}", e))?
        .as_nanos();
    let filename = format!("al_note_{}_{}.md", std::process::id(), nanos);
    let path = std::env::temp_dir().join(filename);

    write_private(&path, initial.unwrap_or(""))
        .map_err(|e| anyhow::anyhow!("Failed to create temp file: {}", e))?;
    tracing::debug!(editor = program, "launching editor");

    let status = Command::new(program).args(parts).arg(&path).status();
    let status = match status {
        Ok(status) => status,
        Err(e) => {
            let _ = std::fs::remove_file(&path);
            return Err(anyhow::anyhow!("Failed to launch editor '{}': {}", program, e));
        }
    };
    if !status.success() {
        let _ = std::fs::remove_file(&path);
        return Err(anyhow::anyhow!("Editor exited with failure"));
    }

    let contents = std::fs::File::open(&path).and_then(read_body);
    let _ = std::fs::remove_file(&path);
    contents.map_err(|e| anyhow::anyhow!("Failed to read temp file: {}", e))
}

fn write_private(path: &Path, contents: &str) -> io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    let mut file = options.open(path)?;
    file.write_all(contents.as_bytes())
}

/// Ask a yes/no question. Without a terminal the caller must pass `--force`.
pub fn confirm(prompt: &str) -> anyhow::Result<bool> {
    if !io::stdin().is_terminal() {
        return Err(CliError::invalid_input(
            "Confirmation required but no TTY available; pass --force",
        )
        .into());
    }
    Ok(Confirm::new().with_prompt(prompt).default(false).interact()?)
}
