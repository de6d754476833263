// SPDX-License-Identifier: MIT OR Apache-2.0

//! Value kind enumeration.
//!
//! This module provides the `Kind` type, which names the four value
//! categories the accessor recognizes. It appears in error messages and
//! log events to say which typed operation was being performed.

use std::fmt;

/// The four value categories recognized by the typed accessor.
///
/// Every generic read or write resolves to exactly one of these kinds;
/// the kind decides which store primitive the operation delegates to.
///
/// # Examples
///
/// ```
/// use inicfg::domain::kind::Kind;
///
/// assert_eq!(Kind::Integer.to_string(), "integer");
/// assert_eq!(Kind::Text.to_string(), "text");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Signed integer values, stored at `i64` width.
    Integer,
    /// Floating-point values, stored at `f64` width.
    Float,
    /// Boolean values.
    Boolean,
    /// Text values, bounded on read by the store's buffer limit.
    Text,
}

impl Kind {
    /// Returns the kind's lowercase name.
    ///
    /// # Examples
    ///
    /// ```
    /// use inicfg::domain::kind::Kind;
    ///
    /// assert_eq!(Kind::Boolean.as_str(), "boolean");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Integer => "integer",
            Kind::Float => "float",
            Kind::Boolean => "boolean",
            Kind::Text => "text",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
