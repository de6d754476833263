// SPDX-License-Identifier: MIT OR Apache-2.0

//! Store trait definition.
//!
//! This module defines the `IniStore` trait, the port through which the rest
//! of the crate talks to INI key/value storage. The store is stateless: every
//! method takes the file path, resolves the file on that call, and holds
//! nothing open between calls.

use crate::domain::Result;
use std::path::Path;

/// Maximum number of bytes returned by a bounded text read.
///
/// Text values longer than this are truncated to the bound (clamped to a
/// UTF-8 character boundary). The bound is a store-level constant, not
/// configurable per call, and applies equally to caller-supplied defaults
/// substituted on a miss. Writes are not bounded.
pub const MAX_TEXT_LEN: usize = 512;

/// Truncates `text` to at most `max_len` bytes on a UTF-8 character boundary.
///
/// Returns the input unchanged when it already fits the bound.
///
/// # Examples
///
/// ```
/// use inicfg::ports::store::clamp_text;
///
/// assert_eq!(clamp_text("hello".to_string(), 3), "hel");
/// assert_eq!(clamp_text("hello".to_string(), 10), "hello");
/// ```
pub fn clamp_text(mut text: String, max_len: usize) -> String {
    if text.len() > max_len {
        let mut end = max_len;
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        text.truncate(end);
    }
    text
}

/// A stateless INI key/value store.
///
/// This trait is the sole seam to the underlying INI machinery: file
/// parsing, on-disk format, comment and quoting syntax, and value
/// serialization are all behind it and are not re-specified here.
///
/// # Contract
///
/// * Every method takes the file path; the store keeps no per-file state.
/// * A missing file reads as empty: every `get_*` returns `Ok(None)` and
///   `has_key` returns `Ok(false)`.
/// * `Ok(None)` from a `get_*` covers both "key absent" and "value present
///   but not interpretable as the requested kind" — callers cannot tell the
///   two apart through reads; only `has_key` distinguishes presence.
/// * `Err` is reserved for I/O failures and whole-file parse failures.
/// * Mutations are immediate and synchronous; there is no batching and no
///   write-back cache.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`. No serialization of concurrent
/// calls is implied; simultaneous access to one path has only the guarantees
/// of the underlying storage.
pub trait IniStore: Send + Sync {
    /// Returns a short identifier for this store, used in log events.
    fn name(&self) -> &str;

    /// Reads the integer stored at `(section, key)`.
    fn get_integer(&self, path: &Path, section: &str, key: &str) -> Result<Option<i64>>;

    /// Reads the float stored at `(section, key)`.
    fn get_float(&self, path: &Path, section: &str, key: &str) -> Result<Option<f64>>;

    /// Reads the boolean stored at `(section, key)`.
    fn get_bool(&self, path: &Path, section: &str, key: &str) -> Result<Option<bool>>;

    /// Reads the text stored at `(section, key)`, truncated to `max_len`
    /// bytes on a character boundary.
    fn get_text(
        &self,
        path: &Path,
        section: &str,
        key: &str,
        max_len: usize,
    ) -> Result<Option<String>>;

    /// Reports whether `(section, key)` is present, independent of whether
    /// its value parses as any particular kind.
    fn has_key(&self, path: &Path, section: &str, key: &str) -> Result<bool>;

    /// Stores an integer at `(section, key)`.
    fn put_integer(&self, path: &Path, section: &str, key: &str, value: i64) -> Result<()>;

    /// Stores a float at `(section, key)`.
    fn put_float(&self, path: &Path, section: &str, key: &str, value: f64) -> Result<()>;

    /// Stores a boolean at `(section, key)`.
    fn put_bool(&self, path: &Path, section: &str, key: &str, value: bool) -> Result<()>;

    /// Stores text at `(section, key)`, verbatim and unbounded.
    fn put_text(&self, path: &Path, section: &str, key: &str, value: &str) -> Result<()>;

    /// Appends `text` plus a line terminator to the end of the file,
    /// creating the file if absent. Independent of section/key structure.
    fn append_line(&self, path: &Path, text: &str) -> Result<()>;
}
