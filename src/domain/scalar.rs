// SPDX-License-Identifier: MIT OR Apache-2.0

//! Generic type dispatch for INI values.
//!
//! This module provides the `FromIni` and `ToIni` traits, which map a Rust
//! type to one of the four value kinds and delegate to the matching store
//! primitive. They are what makes the accessor's generic `read`/`write`
//! operations possible: the implementation on a concrete type *is* the
//! dispatch decision, resolved entirely at compile time.
//!
//! Dispatch follows a fixed priority: `bool` routes to the boolean kind,
//! the integral numeric types to the integer kind, `f32`/`f64` to the float
//! kind, and string-like types to the text kind. Both traits are sealed, so
//! a type outside the four kinds is rejected by the compiler rather than at
//! run time.

use crate::domain::errors::{ConfigError, Result};
use crate::domain::kind::Kind;
use crate::ports::store::{clamp_text, IniStore, MAX_TEXT_LEN};
use std::borrow::Cow;
use std::path::Path;

mod sealed {
    pub trait Sealed {}
}

/// A type that can be read from the store as one of the four value kinds.
///
/// Implementations fetch the raw value through the matching store primitive
/// and narrow it to `Self`. A value that is absent, or that cannot be
/// interpreted as this kind, surfaces as `Ok(None)`; the accessor substitutes
/// the caller-supplied default in both cases.
///
/// This trait is sealed and cannot be implemented outside the crate.
///
/// # Examples
///
/// ```no_run
/// use inicfg::prelude::*;
///
/// let cfg = IniConfig::new("settings.ini");
/// let port: u16 = cfg.read("net", "port", 8080);
/// ```
pub trait FromIni: Sized + sealed::Sealed {
    /// The value kind this type dispatches to.
    const KIND: Kind;

    /// Fetches the value stored at `(section, key)` and narrows it to `Self`.
    ///
    /// Returns `Ok(None)` when the key is absent or the stored value cannot
    /// be interpreted as this kind; the two cases are not distinguished.
    fn read_from(
        store: &dyn IniStore,
        path: &Path,
        section: &str,
        key: &str,
    ) -> Result<Option<Self>>;

    /// Adjusts a caller-supplied default before it is substituted.
    ///
    /// The identity for every kind except text, which clamps the default to
    /// the store's read bound so that a substituted default is never longer
    /// than a stored value could have been.
    fn clamp_default(default: Self) -> Self {
        default
    }
}

/// A type that can be written to the store as one of the four value kinds.
///
/// Implementations widen `self` to the kind's storage width and delegate to
/// the matching store primitive. String-like types (`String`, `&str`,
/// `Cow<str>`) all route to the text kind.
///
/// This trait is sealed and cannot be implemented outside the crate.
///
/// # Examples
///
/// ```no_run
/// use inicfg::prelude::*;
///
/// let cfg = IniConfig::new("settings.ini");
/// assert!(cfg.write("net", "host", "example.com"));
/// ```
pub trait ToIni: sealed::Sealed {
    /// The value kind this type dispatches to.
    const KIND: Kind;

    /// Writes `self` to the store at `(section, key)`.
    fn write_to(
        &self,
        store: &dyn IniStore,
        path: &Path,
        section: &str,
        key: &str,
    ) -> Result<()>;
}

impl sealed::Sealed for bool {}

impl FromIni for bool {
    const KIND: Kind = Kind::Boolean;

    fn read_from(
        store: &dyn IniStore,
        path: &Path,
        section: &str,
        key: &str,
    ) -> Result<Option<Self>> {
        store.get_bool(path, section, key)
    }
}

impl ToIni for bool {
    const KIND: Kind = Kind::Boolean;

    fn write_to(
        &self,
        store: &dyn IniStore,
        path: &Path,
        section: &str,
        key: &str,
    ) -> Result<()> {
        store.put_bool(path, section, key, *self)
    }
}

macro_rules! impl_integer_scalar {
    ($($t:ty)*) => {$(
        impl sealed::Sealed for $t {}

        impl FromIni for $t {
            const KIND: Kind = Kind::Integer;

            fn read_from(
                store: &dyn IniStore,
                path: &Path,
                section: &str,
                key: &str,
            ) -> Result<Option<Self>> {
                // Out-of-range for the requested width reads as unparseable.
                Ok(store
                    .get_integer(path, section, key)?
                    .and_then(|v| match <$t>::try_from(v) {
                        Ok(narrowed) => Some(narrowed),
                        Err(_) => {
                            tracing::debug!(
                                "integer value at [{}] {} does not fit {}",
                                section,
                                key,
                                stringify!($t)
                            );
                            None
                        }
                    }))
            }
        }

        impl ToIni for $t {
            const KIND: Kind = Kind::Integer;

            fn write_to(
                &self,
                store: &dyn IniStore,
                path: &Path,
                section: &str,
                key: &str,
            ) -> Result<()> {
                match i64::try_from(*self) {
                    Ok(wide) => store.put_integer(path, section, key, wide),
                    Err(_) => Err(ConfigError::Unrepresentable {
                        value: self.to_string(),
                        kind: Kind::Integer,
                    }),
                }
            }
        }
    )*};
}

impl_integer_scalar!(i8 i16 i32 i64 u8 u16 u32 u64 isize usize);

macro_rules! impl_float_scalar {
    ($($t:ty)*) => {$(
        impl sealed::Sealed for $t {}

        impl FromIni for $t {
            const KIND: Kind = Kind::Float;

            fn read_from(
                store: &dyn IniStore,
                path: &Path,
                section: &str,
                key: &str,
            ) -> Result<Option<Self>> {
                Ok(store.get_float(path, section, key)?.map(|v| v as $t))
            }
        }

        impl ToIni for $t {
            const KIND: Kind = Kind::Float;

            fn write_to(
                &self,
                store: &dyn IniStore,
                path: &Path,
                section: &str,
                key: &str,
            ) -> Result<()> {
                store.put_float(path, section, key, f64::from(*self))
            }
        }
    )*};
}

impl_float_scalar!(f32 f64);

impl sealed::Sealed for String {}

impl FromIni for String {
    const KIND: Kind = Kind::Text;

    fn read_from(
        store: &dyn IniStore,
        path: &Path,
        section: &str,
        key: &str,
    ) -> Result<Option<Self>> {
        store.get_text(path, section, key, MAX_TEXT_LEN)
    }

    fn clamp_default(default: Self) -> Self {
        clamp_text(default, MAX_TEXT_LEN)
    }
}

impl ToIni for String {
    const KIND: Kind = Kind::Text;

    fn write_to(
        &self,
        store: &dyn IniStore,
        path: &Path,
        section: &str,
        key: &str,
    ) -> Result<()> {
        store.put_text(path, section, key, self)
    }
}

impl<'a> sealed::Sealed for &'a str {}

impl<'a> ToIni for &'a str {
    const KIND: Kind = Kind::Text;

    fn write_to(
        &self,
        store: &dyn IniStore,
        path: &Path,
        section: &str,
        key: &str,
    ) -> Result<()> {
        store.put_text(path, section, key, self)
    }
}

impl<'a> sealed::Sealed for Cow<'a, str> {}

impl<'a> ToIni for Cow<'a, str> {
    const KIND: Kind = Kind::Text;

    fn write_to(
        &self,
        store: &dyn IniStore,
        path: &Path,
        section: &str,
        key: &str,
    ) -> Result<()> {
        store.put_text(path, section, key, self.as_ref())
    }
}
