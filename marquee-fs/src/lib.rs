//! Shared filesystem helpers built on `cap-std` and `camino`.
//!
//! The CLI reads event payloads and writes ranked reports through these
//! helpers so every file touch goes through capability-based UTF-8 handles.

#![forbid(unsafe_code)]

use std::io::{self, Read};

use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};

/// Open a UTF-8 file path using ambient authority.
///
/// # Errors
/// Propagates the underlying I/O error when the file cannot be opened.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Read an entire UTF-8 file into a string.
///
/// # Errors
/// Propagates open and read failures, including non-UTF-8 contents.
pub fn read_utf8_file(path: &Utf8Path) -> io::Result<String> {
    let mut file = open_utf8_file(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Resolve an ambient directory handle for `path`'s parent plus the file
/// name within it.
///
/// # Errors
/// Fails when `path` lacks a file name or the parent cannot be opened.
pub fn open_dir_and_file(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, String)> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::other("target should include a file name"))?
        .to_owned();
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, name))
}

/// Return whether a path exists and is a regular file.
///
/// # Errors
/// Propagates metadata failures, including `NotFound` for missing paths.
pub fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let (dir, name) = open_dir_and_file(path)?;
    Ok(dir.metadata(name.as_str())?.is_file())
}

/// Write a string to a UTF-8 file path, creating parent directories as
/// needed.
///
/// # Errors
/// Propagates directory creation and write failures.
pub fn write_utf8_file(path: &Utf8Path, contents: &str) -> io::Result<()> {
    ensure_parent_dir(path)?;
    let (dir, name) = open_dir_and_file(path)?;
    dir.write(name.as_str(), contents.as_bytes())
}

/// Ensure the parent directory for `path` exists.
///
/// Absolute paths are split into an ambient base (the root, or a drive
/// prefix on Windows) and a relative remainder so `cap-std` can create the
/// missing directories.
///
/// # Errors
/// Propagates failures opening the base directory or creating the chain.
pub fn ensure_parent_dir(path: &Utf8Path) -> io::Result<()> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    if parent.as_str().is_empty() || parent == Utf8Path::new("/") {
        return Ok(());
    }

    let (base, relative) = split_ambient(parent);
    if relative.as_str().is_empty() {
        return Ok(());
    }
    let dir = fs_utf8::Dir::open_ambient_dir(&base, ambient_authority())?;
    dir.create_dir_all(&relative)
}

/// Split a parent path into an ambient base directory and a relative
/// remainder.
fn split_ambient(parent: &Utf8Path) -> (Utf8PathBuf, Utf8PathBuf) {
    let mut components = parent.components();
    match components.next() {
        // Windows drive or UNC prefix; the root separator follows it.
        Some(Utf8Component::Prefix(prefix)) => {
            let base = Utf8PathBuf::from(format!(
                "{}{}",
                prefix.as_str(),
                std::path::MAIN_SEPARATOR
            ));
            let relative = components
                .filter(|component| !matches!(component, Utf8Component::RootDir))
                .collect();
            (base, relative)
        }
        Some(Utf8Component::RootDir) => (Utf8PathBuf::from("/"), components.collect()),
        _ => (Utf8PathBuf::from("."), parent.to_path_buf()),
    }
}

#[cfg(test)]
mod tests {
    #![expect(
        clippy::expect_used,
        reason = "tests should fail fast when setup breaks"
    )]

    use super::*;
    use rstest::rstest;
    use tempfile::TempDir;

    fn utf8_path(dir: &TempDir, name: &str) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(dir.path().join(name)).expect("utf8 temp path")
    }

    #[rstest]
    fn round_trips_file_contents() {
        let temp = TempDir::new().expect("tempdir");
        let path = utf8_path(&temp, "events.json");
        write_utf8_file(&path, "[]").expect("write file");
        assert_eq!(read_utf8_file(&path).expect("read file"), "[]");
    }

    #[rstest]
    fn write_creates_missing_parents() {
        let temp = TempDir::new().expect("tempdir");
        let path = utf8_path(&temp, "reports/nested/out.json");
        write_utf8_file(&path, "{}").expect("write nested file");
        assert!(file_is_file(&path).expect("inspect file"));
    }

    #[rstest]
    fn file_is_file_distinguishes_directories() {
        let temp = TempDir::new().expect("tempdir");
        let dir_path =
            Utf8PathBuf::from_path_buf(temp.path().to_path_buf()).expect("utf8 temp path");
        assert!(!file_is_file(&dir_path).expect("inspect directory"));
    }

    #[rstest]
    fn missing_files_report_not_found() {
        let temp = TempDir::new().expect("tempdir");
        let path = utf8_path(&temp, "absent.json");
        let err = file_is_file(&path).expect_err("missing file should error");
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
