// SPDX-License-Identifier: MIT OR Apache-2.0

//! A typed configuration accessor over INI key/value files.
//!
//! This crate provides a small, type-safe façade over INI-file storage:
//! read/write accessors for integers, floats, booleans, and text against a
//! named INI file, plus generic operations that dispatch to the correct
//! typed primitive based on the value's Rust type. Parsing, on-disk format,
//! and value serialization are delegated to the backing store.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types and dispatch logic (`Kind`, errors, the
//!   `FromIni`/`ToIni` traits)
//! - **Ports**: The `IniStore` trait defining the store primitive interface
//! - **Adapters**: The `configparser`-backed `IniFileStore`
//! - **Service**: `IniConfig`, the caller-facing typed accessor
//!
//! # Semantics
//!
//! - **Stateless**: nothing is cached and no handle is held open; every
//!   operation re-resolves the backing file, which may not exist (a missing
//!   or malformed file reads as entirely empty).
//! - **Defaulting**: reads take a caller-supplied default and return it when
//!   a key is absent or its value cannot be interpreted as the requested
//!   kind; the two cases are indistinguishable through reads. `exists` is
//!   the one operation that can tell presence apart from a default-equal
//!   value.
//! - **Write flag**: writes mutate the file immediately and report success
//!   as a `bool`; no other error channel reaches the caller.
//! - **Bounded text reads**: text values (and substituted text defaults) are
//!   truncated to [`MAX_TEXT_LEN`](ports::store::MAX_TEXT_LEN) bytes.
//!
//! # Concurrency
//!
//! This crate performs no locking. Concurrent reads and writes against the
//! same path have only the ordering and atomicity guarantees of the
//! underlying store and filesystem — an explicit non-guarantee, not an
//! oversight.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use inicfg::prelude::*;
//!
//! let cfg = IniConfig::new("settings.ini");
//!
//! cfg.write("net", "port", 8080);
//! let port: i64 = cfg.read("net", "port", 0);
//! assert_eq!(port, 8080);
//!
//! // A key never written reads as the supplied default.
//! assert_eq!(cfg.read("net", "enabled", true), true);
//! assert!(cfg.exists("net", "port"));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for
/// convenient access.
pub mod prelude {
    pub use crate::adapters::IniFileStore;
    pub use crate::domain::{ConfigError, FromIni, Kind, Result, ToIni};
    pub use crate::ports::{IniStore, MAX_TEXT_LEN};
    pub use crate::service::IniConfig;
}
