//! Text files offered by the input panel.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{UiError, UiResult};

const TEXT_EXTENSION: &str = "txt";

/// Directory of selectable `.txt` input files.
#[derive(Debug, Clone)]
pub struct InputFiles {
    dir: PathBuf,
}

impl InputFiles {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Create the directory if it does not exist yet.
    pub fn ensure_dir(&self) -> UiResult<()> {
        std::fs::create_dir_all(&self.dir)?;
        Ok(())
    }

    /// Names of the `.txt` files in the directory, sorted.
    ///
    /// Only names that [`read_file_content`](Self::read_file_content)
    /// accepts are listed. A missing directory yields an empty list.
    pub fn list_input_files(&self) -> UiResult<Vec<String>> {
        let entries = match std::fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry?;
            if !entry.file_type()?.is_file() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                if validate_name(name).is_ok() && is_text_file(name) {
                    names.push(name.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }

    /// Full text of an input file, unmodified.
    pub fn read_file_content(&self, name: &str) -> UiResult<String> {
        let path = self.resolve(name)?;
        let bytes = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(UiError::NotFound(name.to_string()))
            }
            Err(e) => return Err(e.into()),
        };
        debug!(file = name, bytes = bytes.len(), "Read input file");
        String::from_utf8(bytes).map_err(|_| UiError::InvalidText(name.to_string()))
    }

    /// Store an uploaded file and return its stored name and text.
    ///
    /// Existing files are never overwritten; a numeric suffix is appended
    /// instead (`notes.txt` → `notes_1.txt`), keeping the extension's case.
    pub fn save_uploaded_file(&self, name: &str, bytes: &[u8]) -> UiResult<(String, String)> {
        self.resolve(name)?;
        let content = std::str::from_utf8(bytes)
            .map_err(|_| UiError::InvalidText(name.to_string()))?
            .to_string();

        self.ensure_dir()?;
        let stored = self.unused_name(name);
        std::fs::write(self.dir.join(&stored), bytes)?;

        info!(file = %stored, bytes = bytes.len(), "Saved uploaded input file");
        Ok((stored, content))
    }

    fn resolve(&self, name: &str) -> UiResult<PathBuf> {
        validate_name(name)?;
        if !is_text_file(name) {
            return Err(UiError::UnsupportedFileType(name.to_string()));
        }
        Ok(self.dir.join(name))
    }

    fn unused_name(&self, name: &str) -> String {
        if !self.dir.join(name).exists() {
            return name.to_string();
        }
        let (stem, ext) = name.rsplit_once('.').unwrap_or((name, TEXT_EXTENSION));
        (1..)
            .map(|n| format!("{stem}_{n}.{ext}"))
            .find(|candidate| !self.dir.join(candidate).exists())
            .unwrap_or_else(|| name.to_string())
    }
}

fn is_text_file(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(TEXT_EXTENSION))
}

/// A bare file name: no path separators, no NUL, not `.` or `..`.
fn validate_name(name: &str) -> UiResult<()> {
    let bad = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains(['/', '\\', '\0']);
    if bad {
        return Err(UiError::InvalidFileName(name.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_lists_only_txt_sorted() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.txt", "a.TXT", "c.md", "d"] {
            fs::write(dir.path().join(name), "x").unwrap();
        }
        fs::create_dir(dir.path().join("sub.txt")).unwrap();

        let files = InputFiles::new(dir.path());
        assert_eq!(files.list_input_files().unwrap(), vec!["a.TXT", "b.txt"]);
    }

    #[test]
    fn test_dotted_names_are_listed_and_readable() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(".notes.txt"), "hidden").unwrap();
        fs::write(dir.path().join("wait..what.txt"), "dots").unwrap();

        let files = InputFiles::new(dir.path());
        let names = files.list_input_files().unwrap();
        assert_eq!(names, vec![".notes.txt", "wait..what.txt"]);
        for name in &names {
            assert!(files.read_file_content(name).is_ok(), "{name} not readable");
        }
    }

    #[test]
    fn test_path_like_names_rejected() {
        let files = InputFiles::new("/inputs");
        for name in ["", ".", "..", "a/b.txt", "a\\b.txt", "../up.txt"] {
            assert!(
                matches!(files.read_file_content(name), Err(UiError::InvalidFileName(_))),
                "{name:?} accepted"
            );
        }
    }

    #[test]
    fn test_missing_dir_lists_nothing() {
        let files = InputFiles::new("/no/such/inputs");
        assert!(files.list_input_files().unwrap().is_empty());
    }

    #[test]
    fn test_read_content_unmodified() {
        let dir = tempfile::tempdir().unwrap();
        let text = "Line one\r\n  indented\tline two\n\nПривет!\n";
        fs::write(dir.path().join("story.txt"), text).unwrap();

        let files = InputFiles::new(dir.path());
        assert_eq!(files.read_file_content("story.txt").unwrap(), text);
    }

    #[test]
    fn test_read_errors() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("binary.txt"), [0xff, 0xfe, 0x00]).unwrap();
        let files = InputFiles::new(dir.path());

        assert!(matches!(
            files.read_file_content("missing.txt"),
            Err(UiError::NotFound(_))
        ));
        assert!(matches!(
            files.read_file_content("binary.txt"),
            Err(UiError::InvalidText(_))
        ));
        assert!(matches!(
            files.read_file_content("../secret.txt"),
            Err(UiError::InvalidFileName(_))
        ));
        assert!(matches!(
            files.read_file_content("image.png"),
            Err(UiError::UnsupportedFileType(_))
        ));
    }

    #[test]
    fn test_save_upload_never_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let files = InputFiles::new(dir.path().join("inputs"));

        let (first, _) = files.save_uploaded_file("notes.txt", b"one").unwrap();
        let (second, content) = files.save_uploaded_file("notes.txt", b"two").unwrap();

        assert_eq!(first, "notes.txt");
        assert_eq!(second, "notes_1.txt");
        assert_eq!(content, "two");
        assert_eq!(files.read_file_content("notes.txt").unwrap(), "one");
        assert_eq!(
            files.list_input_files().unwrap(),
            vec!["notes.txt", "notes_1.txt"]
        );
    }

    #[test]
    fn test_collision_keeps_extension_case() {
        let dir = tempfile::tempdir().unwrap();
        let files = InputFiles::new(dir.path());

        files.save_uploaded_file("Notes.Txt", b"one").unwrap();
        let (second, _) = files.save_uploaded_file("Notes.Txt", b"two").unwrap();
        assert_eq!(second, "Notes_1.Txt");
    }

    #[test]
    fn test_save_rejects_non_txt() {
        let dir = tempfile::tempdir().unwrap();
        let files = InputFiles::new(dir.path());
        assert!(matches!(
            files.save_uploaded_file("notes.pdf", b"%PDF"),
            Err(UiError::UnsupportedFileType(_))
        ));
        assert!(files.list_input_files().unwrap().is_empty());
    }
}
