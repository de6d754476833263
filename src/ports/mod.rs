// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! This module contains the trait definitions (ports) that decouple the
//! accessor from the underlying INI machinery. The single port, `IniStore`,
//! is implemented by adapters in the adapters layer.

pub mod store;

// Re-export commonly used types
pub use store::{clamp_text, IniStore, MAX_TEXT_LEN};
