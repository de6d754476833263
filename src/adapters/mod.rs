// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing store implementations.
//!
//! This module contains concrete implementations of the `IniStore` port
//! defined in the ports layer.

pub mod ini_file;

// Re-export adapters
pub use ini_file::IniFileStore;
