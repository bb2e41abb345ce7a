use crate::error::{AcquireError, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the whole-corpus plain-text download.
pub const CORPUS_FILE: &str = "kjv_bible_gutenberg.txt";

/// File name of the fixed sample dataset.
pub const SAMPLE_FILE: &str = "bible_sample.json";

/// File name of a per-book API download, e.g. `bible_kjv_api.json`.
pub fn api_file_name(translation: &str) -> String {
    format!("bible_{}_api.json", translation.to_lowercase())
}

/// Create `dir` and any missing parents.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|source| AcquireError::Io {
        path: dir.to_path_buf(),
        source,
    })
}

/// Write `text` verbatim to `{dir}/{filename}`, overwriting any existing file.
pub fn write_text(dir: &Path, filename: &str, text: &str) -> Result<PathBuf> {
    ensure_dir(dir)?;
    let path = dir.join(filename);
    fs::write(&path, text).map_err(|source| AcquireError::Io {
        path: path.clone(),
        source,
    })?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "Wrote text file");
    Ok(path)
}

/// Write `value` as pretty-printed JSON (2-space indent, UTF-8 preserved).
pub fn write_json<T: Serialize + ?Sized>(dir: &Path, filename: &str, value: &T) -> Result<PathBuf> {
    let json = serde_json::to_string_pretty(value)?;
    write_text(dir, filename, &json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use scripture_model::VerseRecord;

    #[test]
    fn test_api_file_name_lowercases_translation() {
        assert_eq!(api_file_name("KJV"), "bible_kjv_api.json");
        assert_eq!(api_file_name("web"), "bible_web_api.json");
        assert_eq!(api_file_name("ClementineVulgate"), "bible_clementinevulgate_api.json");
    }

    #[test]
    fn test_write_json_creates_nested_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("a").join("b");
        let path = write_json(&dir, "v.json", &[VerseRecord::new("Job", 1, 1, "x")]).unwrap();
        assert_eq!(path, dir.join("v.json"));
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("[\n  {\n    \"book\": \"Job\""));
    }

    #[test]
    fn test_write_json_preserves_non_ascii() {
        let tmp = tempfile::tempdir().unwrap();
        let value = serde_json::json!({ "text": "Ἐν ἀρχῇ ἦν ὁ λόγος" });
        let path = write_json(tmp.path(), "greek.json", &value).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("Ἐν ἀρχῇ ἦν ὁ λόγος"));
        assert!(!written.contains("\\u"));
    }

    #[test]
    fn test_write_text_overwrites() {
        let tmp = tempfile::tempdir().unwrap();
        write_text(tmp.path(), "t.txt", "first version").unwrap();
        let path = write_text(tmp.path(), "t.txt", "second").unwrap();
        assert_eq!(fs::read_to_string(path).unwrap(), "second");
    }
}
