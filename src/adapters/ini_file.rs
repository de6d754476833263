// SPDX-License-Identifier: MIT OR Apache-2.0

//! INI file store adapter.
//!
//! This module provides `IniFileStore`, the production implementation of the
//! `IniStore` port backed by the `configparser` crate. The adapter keeps no
//! state of its own: every call re-reads the backing file, and every mutation
//! rewrites it synchronously.

use crate::domain::{ConfigError, Result};
use crate::ports::store::{clamp_text, IniStore};
use configparser::ini::Ini;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Stateless INI store over `configparser`.
///
/// A missing file reads as entirely empty. Section and key lookup is
/// case-insensitive, following the backing parser's convention. Booleans are
/// serialized as `true`/`false` and parsed from the parser's coerced
/// truthy/falsy forms (`true`/`false`, `yes`/`no`, `1`/`0`, ...). A value
/// that is present but does not parse as the requested kind reads as absent.
///
/// # Examples
///
/// ```no_run
/// use inicfg::adapters::IniFileStore;
/// use inicfg::ports::IniStore;
/// use std::path::Path;
///
/// let store = IniFileStore::new();
/// let path = Path::new("settings.ini");
/// store.put_integer(path, "net", "port", 8080)?;
/// assert_eq!(store.get_integer(path, "net", "port")?, Some(8080));
/// # Ok::<(), inicfg::domain::ConfigError>(())
/// ```
#[derive(Debug, Clone)]
pub struct IniFileStore;

impl IniFileStore {
    /// Creates a new INI file store.
    pub fn new() -> Self {
        IniFileStore
    }

    /// Parses the file at `path`, treating a missing file as empty.
    fn load(&self, path: &Path) -> Result<Ini> {
        let mut ini = Ini::new();
        match fs::read_to_string(path) {
            Ok(content) => {
                ini.read(content).map_err(|message| ConfigError::Parse {
                    path: path.to_path_buf(),
                    message,
                })?;
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(ConfigError::Io(e)),
        }
        Ok(ini)
    }

    /// Reads, mutates, and rewrites the file in one synchronous step.
    fn store(&self, path: &Path, section: &str, key: &str, value: String) -> Result<()> {
        let mut ini = self.load(path)?;
        ini.set(section, key, Some(value));
        ini.write(path)?;
        Ok(())
    }
}

impl Default for IniFileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl IniStore for IniFileStore {
    fn name(&self) -> &str {
        "ini-file"
    }

    fn get_integer(&self, path: &Path, section: &str, key: &str) -> Result<Option<i64>> {
        // Value-level parse failures collapse to absence.
        Ok(self.load(path)?.getint(section, key).ok().flatten())
    }

    fn get_float(&self, path: &Path, section: &str, key: &str) -> Result<Option<f64>> {
        Ok(self.load(path)?.getfloat(section, key).ok().flatten())
    }

    fn get_bool(&self, path: &Path, section: &str, key: &str) -> Result<Option<bool>> {
        Ok(self.load(path)?.getboolcoerce(section, key).ok().flatten())
    }

    fn get_text(
        &self,
        path: &Path,
        section: &str,
        key: &str,
        max_len: usize,
    ) -> Result<Option<String>> {
        Ok(self
            .load(path)?
            .get(section, key)
            .map(|v| clamp_text(v, max_len)))
    }

    fn has_key(&self, path: &Path, section: &str, key: &str) -> Result<bool> {
        Ok(self.load(path)?.get(section, key).is_some())
    }

    fn put_integer(&self, path: &Path, section: &str, key: &str, value: i64) -> Result<()> {
        self.store(path, section, key, value.to_string())
    }

    fn put_float(&self, path: &Path, section: &str, key: &str, value: f64) -> Result<()> {
        self.store(path, section, key, value.to_string())
    }

    fn put_bool(&self, path: &Path, section: &str, key: &str, value: bool) -> Result<()> {
        self.store(path, section, key, value.to_string())
    }

    fn put_text(&self, path: &Path, section: &str, key: &str, value: &str) -> Result<()> {
        self.store(path, section, key, value.to_string())
    }

    fn append_line(&self, path: &Path, text: &str) -> Result<()> {
        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;
        writeln!(file, "{}", text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::store::MAX_TEXT_LEN;
    use tempfile::NamedTempFile;

    fn temp_ini() -> NamedTempFile {
        NamedTempFile::new().unwrap()
    }

    #[test]
    fn test_missing_file_reads_as_empty() {
        let store = IniFileStore::new();
        let path = Path::new("/nonexistent/dir/does-not-exist.ini");

        assert_eq!(store.get_integer(path, "s", "k").unwrap(), None);
        assert_eq!(store.get_float(path, "s", "k").unwrap(), None);
        assert_eq!(store.get_bool(path, "s", "k").unwrap(), None);
        assert_eq!(store.get_text(path, "s", "k", MAX_TEXT_LEN).unwrap(), None);
        assert!(!store.has_key(path, "s", "k").unwrap());
    }

    #[test]
    fn test_integer_round_trip() {
        let file = temp_ini();
        let store = IniFileStore::new();

        store.put_integer(file.path(), "net", "port", 8080).unwrap();
        assert_eq!(
            store.get_integer(file.path(), "net", "port").unwrap(),
            Some(8080)
        );
    }

    #[test]
    fn test_float_round_trip() {
        let file = temp_ini();
        let store = IniFileStore::new();

        store.put_float(file.path(), "app", "scale", 2.5).unwrap();
        assert_eq!(
            store.get_float(file.path(), "app", "scale").unwrap(),
            Some(2.5)
        );
    }

    #[test]
    fn test_bool_round_trip() {
        let file = temp_ini();
        let store = IniFileStore::new();

        store.put_bool(file.path(), "flags", "enabled", true).unwrap();
        assert_eq!(
            store.get_bool(file.path(), "flags", "enabled").unwrap(),
            Some(true)
        );

        store.put_bool(file.path(), "flags", "enabled", false).unwrap();
        assert_eq!(
            store.get_bool(file.path(), "flags", "enabled").unwrap(),
            Some(false)
        );
    }

    #[test]
    fn test_text_round_trip() {
        let file = temp_ini();
        let store = IniFileStore::new();

        store
            .put_text(file.path(), "app", "name", "example")
            .unwrap();
        assert_eq!(
            store
                .get_text(file.path(), "app", "name", MAX_TEXT_LEN)
                .unwrap()
                .as_deref(),
            Some("example")
        );
    }

    #[test]
    fn test_text_read_truncated_to_bound() {
        let file = temp_ini();
        let store = IniFileStore::new();
        let long = "v".repeat(MAX_TEXT_LEN + 200);

        store.put_text(file.path(), "app", "blob", &long).unwrap();
        let read = store
            .get_text(file.path(), "app", "blob", MAX_TEXT_LEN)
            .unwrap()
            .unwrap();

        assert_eq!(read.len(), MAX_TEXT_LEN);
        assert_eq!(read, long[..MAX_TEXT_LEN]);
    }

    #[test]
    fn test_unparseable_value_reads_as_absent() {
        let file = temp_ini();
        let store = IniFileStore::new();

        store
            .put_text(file.path(), "app", "word", "not_a_number")
            .unwrap();

        assert_eq!(store.get_integer(file.path(), "app", "word").unwrap(), None);
        assert_eq!(store.get_float(file.path(), "app", "word").unwrap(), None);
        assert_eq!(store.get_bool(file.path(), "app", "word").unwrap(), None);
        // The key is still present, just not readable as those kinds.
        assert!(store.has_key(file.path(), "app", "word").unwrap());
    }

    #[test]
    fn test_keys_matched_case_insensitively() {
        let file = temp_ini();
        let store = IniFileStore::new();

        store.put_integer(file.path(), "Net", "Port", 9000).unwrap();
        assert_eq!(
            store.get_integer(file.path(), "net", "port").unwrap(),
            Some(9000)
        );
    }

    #[test]
    fn test_writes_preserve_other_keys() {
        let file = temp_ini();
        let store = IniFileStore::new();

        store.put_integer(file.path(), "net", "port", 8080).unwrap();
        store.put_text(file.path(), "net", "host", "localhost").unwrap();
        store.put_bool(file.path(), "flags", "debug", true).unwrap();

        assert_eq!(
            store.get_integer(file.path(), "net", "port").unwrap(),
            Some(8080)
        );
        assert_eq!(
            store
                .get_text(file.path(), "net", "host", MAX_TEXT_LEN)
                .unwrap()
                .as_deref(),
            Some("localhost")
        );
        assert_eq!(
            store.get_bool(file.path(), "flags", "debug").unwrap(),
            Some(true)
        );
    }

    #[test]
    fn test_append_line_creates_and_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.ini");
        let store = IniFileStore::new();

        store.append_line(&path, "; first line").unwrap();
        store.append_line(&path, "; second line").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "; first line\n; second line\n");
    }

    #[test]
    fn test_malformed_file_is_a_parse_error() {
        let file = temp_ini();
        fs::write(file.path(), "[unclosed section\nkey = value\n").unwrap();
        let store = IniFileStore::new();

        let result = store.get_integer(file.path(), "s", "k");
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }
}
