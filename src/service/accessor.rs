// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed INI configuration accessor.
//!
//! This module provides `IniConfig`, the caller-facing handle over a backing
//! INI file. It exposes typed read/write operations per value kind, generic
//! operations dispatching on the value's Rust type, an existence check, and
//! a free-text append.

use crate::adapters::IniFileStore;
use crate::domain::{ConfigError, FromIni, Result, ToIni};
use crate::ports::IniStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// A typed configuration accessor over a single INI file.
///
/// `IniConfig` holds a file path and nothing else: the file is not opened or
/// parsed eagerly, no contents are cached, and every operation re-resolves
/// the file through the store. The store is the source of truth on every
/// call, so external changes to the file are visible immediately.
///
/// Reads take a caller-supplied default and return it when the key is absent
/// or its value cannot be interpreted as the requested kind — the two cases
/// are indistinguishable through reads; use [`exists`](IniConfig::exists) to
/// tell a present key from a substituted default. Writes mutate the file
/// immediately and report success as a `bool`; failures are logged at debug
/// level and carry no further detail to the caller.
///
/// # Concurrency
///
/// No locking is performed and no file handle is held between calls. If
/// several threads or processes operate on the same path concurrently,
/// ordering and atomicity are entirely those of the underlying store and
/// filesystem; this type neither serializes access nor detects interleaving.
///
/// # Examples
///
/// ```no_run
/// use inicfg::prelude::*;
///
/// let cfg = IniConfig::new("settings.ini");
///
/// if cfg.write("net", "port", 8080) {
///     assert_eq!(cfg.read("net", "port", 0), 8080);
/// }
/// assert_eq!(cfg.read("net", "enabled", true), true);
/// ```
pub struct IniConfig {
    /// Path of the backing INI file.
    path: PathBuf,
    /// Store the accessor delegates every operation to.
    store: Box<dyn IniStore>,
}

impl IniConfig {
    /// Creates an accessor over the file at `path`, using the production
    /// INI file store.
    ///
    /// The file does not need to exist: a missing file reads as empty, and
    /// the first successful write creates it.
    ///
    /// # Examples
    ///
    /// ```
    /// use inicfg::service::IniConfig;
    ///
    /// let cfg = IniConfig::new("settings.ini");
    /// assert_eq!(cfg.file_path().to_str(), Some("settings.ini"));
    /// ```
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self::with_store(path, Box::new(IniFileStore::new()))
    }

    /// Creates an accessor over `path` with an injected store.
    ///
    /// This is the seam for substituting the backing store, for example with
    /// an in-memory double in tests.
    pub fn with_store<P: Into<PathBuf>>(path: P, store: Box<dyn IniStore>) -> Self {
        Self {
            path: path.into(),
            store,
        }
    }

    /// Creates an accessor over `config.ini` in the OS-appropriate
    /// configuration directory for the application.
    ///
    /// Uses the `directories` crate to resolve the per-user configuration
    /// directory. The file itself is not required to exist.
    ///
    /// # Arguments
    ///
    /// * `app_name` - The application name (e.g., "myapp")
    /// * `qualifier` - The organization/qualifier (e.g., "com.example")
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use inicfg::service::IniConfig;
    ///
    /// let cfg = IniConfig::from_default_location("myapp", "com.example").unwrap();
    /// ```
    pub fn from_default_location(app_name: &str, qualifier: &str) -> Result<Self> {
        let proj_dirs =
            ProjectDirs::from(qualifier, "", app_name).ok_or_else(|| ConfigError::NoConfigDir {
                message: "failed to determine project directories".to_string(),
            })?;

        Ok(Self::new(proj_dirs.config_dir().join("config.ini")))
    }

    /// Reassigns the backing file path.
    ///
    /// Takes effect on the next operation; nothing is flushed or closed
    /// because nothing is held open.
    pub fn set_file<P: Into<PathBuf>>(&mut self, path: P) {
        self.path = path.into();
    }

    /// Returns the path of the backing file.
    pub fn file_path(&self) -> &Path {
        &self.path
    }

    /// Reads the value at `(section, key)` as `T`, returning `default` when
    /// the key is absent or its value cannot be interpreted as `T`'s kind.
    ///
    /// Dispatch is resolved at compile time: `bool` routes to the boolean
    /// kind, integral types to the integer kind, `f32`/`f64` to the float
    /// kind, and `String` to the text kind (where the result and the default
    /// are both bounded by [`MAX_TEXT_LEN`](crate::ports::store::MAX_TEXT_LEN)).
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use inicfg::prelude::*;
    ///
    /// let cfg = IniConfig::new("settings.ini");
    /// let retries: u32 = cfg.read("net", "retries", 3);
    /// let host: String = cfg.read("net", "host", "localhost".to_string());
    /// ```
    pub fn read<T: FromIni>(&self, section: &str, key: &str, default: T) -> T {
        match T::read_from(self.store.as_ref(), &self.path, section, key) {
            Ok(Some(value)) => value,
            Ok(None) => T::clamp_default(default),
            Err(e) => {
                tracing::debug!(
                    "store '{}' failed reading {} at [{}] {}: {}",
                    self.store.name(),
                    T::KIND,
                    section,
                    key,
                    e
                );
                T::clamp_default(default)
            }
        }
    }

    /// Writes `value` at `(section, key)`, returning whether the store
    /// reported success.
    ///
    /// The mutation is immediate and synchronous; there is no batching. On
    /// failure the underlying error is logged at debug level and collapsed
    /// to `false`.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use inicfg::prelude::*;
    ///
    /// let cfg = IniConfig::new("settings.ini");
    /// assert!(cfg.write("net", "host", "example.com"));
    /// assert!(cfg.write("net", "port", 8080));
    /// ```
    pub fn write<T: ToIni>(&self, section: &str, key: &str, value: T) -> bool {
        match value.write_to(self.store.as_ref(), &self.path, section, key) {
            Ok(()) => true,
            Err(e) => {
                tracing::debug!(
                    "store '{}' failed writing {} at [{}] {}: {}",
                    self.store.name(),
                    T::KIND,
                    section,
                    key,
                    e
                );
                false
            }
        }
    }

    /// Writes `value` at `(section, key)`, discarding the success flag.
    ///
    /// Equivalent to [`write`](IniConfig::write); provided purely for
    /// call-site ergonomy when the flag is not of interest.
    pub fn put<T: ToIni>(&self, section: &str, key: &str, value: T) {
        self.write(section, key, value);
    }

    /// Reads the integer at `(section, key)`, or `default` if absent.
    pub fn read_integer(&self, section: &str, key: &str, default: i64) -> i64 {
        self.read(section, key, default)
    }

    /// Reads the float at `(section, key)`, or `default` if absent.
    pub fn read_float(&self, section: &str, key: &str, default: f64) -> f64 {
        self.read(section, key, default)
    }

    /// Reads the boolean at `(section, key)`, or `default` if absent.
    pub fn read_boolean(&self, section: &str, key: &str, default: bool) -> bool {
        self.read(section, key, default)
    }

    /// Reads the text at `(section, key)`, or `default` if absent.
    ///
    /// Both the stored value and the default are bounded by
    /// [`MAX_TEXT_LEN`](crate::ports::store::MAX_TEXT_LEN).
    pub fn read_text(&self, section: &str, key: &str, default: &str) -> String {
        self.read(section, key, default.to_string())
    }

    /// Stores an integer at `(section, key)`; returns the success flag.
    pub fn write_integer(&self, section: &str, key: &str, value: i64) -> bool {
        self.write(section, key, value)
    }

    /// Stores a float at `(section, key)`; returns the success flag.
    pub fn write_float(&self, section: &str, key: &str, value: f64) -> bool {
        self.write(section, key, value)
    }

    /// Stores a boolean at `(section, key)`; returns the success flag.
    pub fn write_boolean(&self, section: &str, key: &str, value: bool) -> bool {
        self.write(section, key, value)
    }

    /// Stores text at `(section, key)` verbatim; returns the success flag.
    pub fn write_text(&self, section: &str, key: &str, value: &str) -> bool {
        self.write(section, key, value)
    }

    /// Reports whether `(section, key)` is present in the backing file,
    /// independent of value content.
    ///
    /// This is the only operation that can distinguish an absent key from a
    /// present key whose value equals the default a read would substitute.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use inicfg::prelude::*;
    ///
    /// let cfg = IniConfig::new("settings.ini");
    /// cfg.put("net", "port", 8080);
    /// assert!(cfg.exists("net", "port"));
    /// assert!(!cfg.exists("net", "missing"));
    /// ```
    pub fn exists(&self, section: &str, key: &str) -> bool {
        match self.store.has_key(&self.path, section, key) {
            Ok(present) => present,
            Err(e) => {
                tracing::debug!(
                    "store '{}' failed checking [{}] {}: {}",
                    self.store.name(),
                    section,
                    key,
                    e
                );
                false
            }
        }
    }

    /// Appends `text` plus a line terminator to the end of the backing
    /// file, creating the file if absent; returns the success flag.
    ///
    /// The append is independent of section/key structure. Appending
    /// anything other than comment lines or valid `key=value` lines may
    /// render the file unparseable for subsequent keyed operations.
    pub fn append_text(&self, text: &str) -> bool {
        match self.store.append_line(&self.path, text) {
            Ok(()) => true,
            Err(e) => {
                tracing::debug!(
                    "store '{}' failed appending to '{}': {}",
                    self.store.name(),
                    self.path.display(),
                    e
                );
                false
            }
        }
    }
}
