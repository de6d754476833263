// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer containing the configuration accessor.
//!
//! This module contains `IniConfig`, the caller-facing handle that applies
//! the default-value policy and dispatches typed operations to the store.

pub mod accessor;

// Re-export commonly used types
pub use accessor::IniConfig;
