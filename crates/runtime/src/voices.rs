//! Voice pack discovery.

use std::path::{Path, PathBuf};

use tracing::debug;

use tts_core::{TtsError, TtsResult};

/// List voice pack files in `dir`, sorted by file name.
///
/// A voice pack is a regular file whose extension equals `extension`
/// (case-insensitive, without the leading dot). Subdirectories are skipped.
pub fn list_voice_packs(dir: &Path, extension: &str) -> TtsResult<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|source| TtsError::ModelLoad {
        path: dir.to_path_buf(),
        source,
    })?;

    let wanted = extension.trim_start_matches('.');
    let mut packs = Vec::new();
    for entry in entries {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let path = entry.path();
        let matches = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(wanted));
        if matches {
            packs.push(path);
        }
    }
    packs.sort();

    debug!(dir = %dir.display(), count = packs.len(), "Scanned voice packs");
    Ok(packs)
}

/// Count voice pack files in `dir`.
pub fn count_voice_packs(dir: &Path, extension: &str) -> TtsResult<usize> {
    list_voice_packs(dir, extension).map(|packs| packs.len())
}

/// Voice name of a pack file (its file stem).
pub fn voice_name(path: &Path) -> Option<&str> {
    path.file_stem().and_then(|s| s.to_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"pack").unwrap();
    }

    #[test]
    fn test_counts_matching_files() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["af.pt", "am_adam.pt", "bf_emma.PT", "notes.txt"] {
            touch(dir.path(), name);
        }
        fs::create_dir(dir.path().join("nested.pt")).unwrap();

        assert_eq!(count_voice_packs(dir.path(), "pt").unwrap(), 3);
        assert_eq!(count_voice_packs(dir.path(), ".pt").unwrap(), 3);
    }

    #[test]
    fn test_list_sorted_with_names() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "b.pt");
        touch(dir.path(), "a.pt");

        let packs = list_voice_packs(dir.path(), "pt").unwrap();
        let names: Vec<_> = packs.iter().filter_map(|p| voice_name(p)).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(count_voice_packs(dir.path(), "pt").unwrap(), 0);
    }

    #[test]
    fn test_missing_dir_is_model_load_error() {
        let err = count_voice_packs(Path::new("/no/such/voices"), "pt").unwrap_err();
        assert!(matches!(err, TtsError::ModelLoad { .. }));
    }
}
