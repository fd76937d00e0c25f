//! Filesystem utilities for atomic operations.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Atomically rename a file, with fallback for platforms where rename fails if target exists.
///
/// On some platforms (notably Windows), `fs::rename` fails if the destination already exists.
/// This function handles that case by removing the destination first and retrying.
///
/// If the rename ultimately fails, the temp file is cleaned up.
///
/// # Errors
///
/// Returns an error if the rename fails even after the fallback attempt.
pub fn rename_with_fallback(temp_path: &Path, destination: &Path) -> io::Result<()> {
    if let Err(initial_err) = fs::rename(temp_path, destination) {
        let _ = fs::remove_file(destination);
        fs::rename(temp_path, destination).map_err(|retry_err| {
            let _ = fs::remove_file(temp_path);
            io::Error::new(
                retry_err.kind(),
                format!(
                    "Atomic rename failed (initial: {}, retry: {})",
                    initial_err, retry_err
                ),
            )
        })?;
    }
    Ok(())
}

/// Sibling path used while writing `destination` (`<name>.new` in the same directory).
pub fn temp_path_for(destination: &Path) -> PathBuf {
    let mut name = destination
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".new");
    destination.with_file_name(name)
}

/// Write `contents` to `destination` through a temp file in the same directory.
///
/// Readers never observe a half-written file. When `mode` is given the temp
/// file is created with those Unix permissions, so its contents are never
/// exposed more widely than the final file.
pub fn write_atomic(destination: &Path, contents: &[u8], mode: Option<u32>) -> io::Result<()> {
    let temp = temp_path_for(destination);
    let written = create_temp(&temp, mode).and_then(|mut file| {
        file.write_all(contents)?;
        file.sync_all()
    });
    if let Err(err) = written {
        let _ = fs::remove_file(&temp);
        return Err(err);
    }
    // The umask may have narrowed the creation mode; shared files need it exact.
    if let Some(mode) = mode {
        if let Err(err) = set_mode(&temp, mode) {
            let _ = fs::remove_file(&temp);
            return Err(err);
        }
    }
    rename_with_fallback(&temp, destination)
}

/// Create a fresh temp file, replacing a stale one left by an interrupted write.
fn create_temp(path: &Path, mode: Option<u32>) -> io::Result<File> {
    match fs::remove_file(path) {
        Ok(()) => {}
        Err(e) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(e),
    }

    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        if let Some(mode) = mode {
            options.mode(mode);
        }
    }
    #[cfg(not(unix))]
    let _ = mode;
    options.open(path)
}

/// Set Unix permission bits; a no-op elsewhere.
pub fn set_mode(path: &Path, mode: u32) -> io::Result<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(mode))?;
    }
    #[cfg(not(unix))]
    {
        let _ = (path, mode);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_rename_new_file() {
        let dir = tempdir().unwrap();
        let temp = dir.path().join("temp.txt");
        let dest = dir.path().join("dest.txt");

        File::create(&temp).unwrap().write_all(b"test").unwrap();

        rename_with_fallback(&temp, &dest).unwrap();

        assert!(!temp.exists());
        assert_eq!(fs::read_to_string(&dest).unwrap(), "test");
    }

    #[test]
    fn test_rename_overwrites_existing() {
        let dir = tempdir().unwrap();
        let temp = dir.path().join("temp.txt");
        let dest = dir.path().join("dest.txt");

        File::create(&dest).unwrap().write_all(b"old").unwrap();
        File::create(&temp).unwrap().write_all(b"new").unwrap();

        rename_with_fallback(&temp, &dest).unwrap();

        assert!(!temp.exists());
        assert_eq!(fs::read_to_string(&dest).unwrap(), "new");
    }

    #[test]
    fn test_temp_path_is_sibling() {
        let temp = temp_path_for(Path::new("/usr/local/bin/al"));
        assert_eq!(temp, PathBuf::from("/usr/local/bin/al.new"));
    }

    #[test]
    fn test_write_atomic_replaces_and_cleans_up() {
        let dir = tempdir().unwrap();
        let dest = dir.path().join("projects");

        write_atomic(&dest, b"{}", None).unwrap();
        write_atomic(&dest, b"{\"a\":1}", None).unwrap();

        assert_eq!(fs::read_to_string(&dest).unwrap(), "{\"a\":1}");
        assert!(!temp_path_for(&dest).exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_write_atomic_applies_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let dest = dir.path().join("secret.json");
        write_atomic(&dest, b"{}", Some(0o600)).unwrap();

        let mode = fs::metadata(&dest).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[cfg(unix)]
    #[test]
    fn test_private_temp_file_is_never_wider_than_requested() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let temp = dir.path().join("note.json.new");
        // A stale world-readable temp from an earlier crash must not be reused.
        fs::write(&temp, b"stale").unwrap();
        fs::set_permissions(&temp, fs::Permissions::from_mode(0o644)).unwrap();

        let file = create_temp(&temp, Some(0o600)).unwrap();
        let mode = file.metadata().unwrap().permissions().mode();
        assert_eq!(mode & 0o077, 0, "temp file created with mode {:o}", mode & 0o777);
        assert_eq!(fs::read(&temp).unwrap(), b"");
    }

    #[cfg(unix)]
    #[test]
    fn test_write_atomic_keeps_shared_mode() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempdir().unwrap();
        let dest = dir.path().join("projects");
        write_atomic(&dest, b"{}", Some(0o644)).unwrap();

        let mode = fs::metadata(&dest).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }
}
