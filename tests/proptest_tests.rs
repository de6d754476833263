// SPDX-License-Identifier: MIT OR Apache-2.0

//! Property-based tests using proptest.
//!
//! These tests verify the accessor's round-trip and defaulting behavior over
//! arbitrary values, each case against a fresh temporary file.

use inicfg::prelude::*;
use proptest::prelude::*;
use tempfile::NamedTempFile;

fn fresh_cfg() -> (NamedTempFile, IniConfig) {
    let file = NamedTempFile::new().unwrap();
    let cfg = IniConfig::new(file.path());
    (file, cfg)
}

// Integers round-trip across the full i64 range.
proptest! {
    #[test]
    fn test_integer_round_trip(value in prop::num::i64::ANY) {
        let (_file, cfg) = fresh_cfg();
        prop_assert!(cfg.write("section", "key", value));
        prop_assert_eq!(cfg.read("section", "key", 0i64), value);
    }
}

// Floats round-trip exactly: serialization uses the shortest
// representation that parses back to the same value.
proptest! {
    #[test]
    fn test_float_round_trip(value in prop::num::f64::NORMAL) {
        let (_file, cfg) = fresh_cfg();
        prop_assert!(cfg.write("section", "key", value));
        prop_assert_eq!(cfg.read("section", "key", 0.0f64), value);
    }
}

proptest! {
    #[test]
    fn test_bool_round_trip(value in prop::bool::ANY) {
        let (_file, cfg) = fresh_cfg();
        prop_assert!(cfg.write("section", "key", value));
        prop_assert_eq!(cfg.read("section", "key", !value), value);
    }
}

// Text restricted to characters the INI line format stores verbatim.
proptest! {
    #[test]
    fn test_text_round_trip(value in "[A-Za-z0-9_.:/-]{1,64}") {
        let (_file, cfg) = fresh_cfg();
        prop_assert!(cfg.write("section", "key", value.as_str()));
        prop_assert_eq!(cfg.read_text("section", "key", ""), value);
    }
}

// A key that was never written reads as exactly the supplied default.
proptest! {
    #[test]
    fn test_unwritten_key_reads_default(
        key in "[a-z][a-z0-9_]{0,15}",
        default in prop::num::i64::ANY,
    ) {
        let (_file, cfg) = fresh_cfg();
        prop_assert_eq!(cfg.read("section", key.as_str(), default), default);
        prop_assert!(!cfg.exists("section", key.as_str()));
    }
}

proptest! {
    #[test]
    fn test_exists_after_write(value in prop::num::i64::ANY) {
        let (_file, cfg) = fresh_cfg();
        prop_assert!(!cfg.exists("section", "key"));
        prop_assert!(cfg.write("section", "key", value));
        prop_assert!(cfg.exists("section", "key"));
    }
}

// Long text never escapes the read bound.
proptest! {
    #[test]
    fn test_text_reads_never_exceed_bound(len in 0usize..2048) {
        let (_file, cfg) = fresh_cfg();
        let value = "a".repeat(len);
        prop_assert!(cfg.write("section", "key", value.as_str()));
        let read = cfg.read_text("section", "key", "");
        prop_assert!(read.len() <= MAX_TEXT_LEN);
        prop_assert_eq!(read.len(), len.min(MAX_TEXT_LEN));
    }
}

// Narrow integer reads treat out-of-range values as absent.
proptest! {
    #[test]
    fn test_narrowing_out_of_range_defaults(value in 256i64..i64::MAX) {
        let (_file, cfg) = fresh_cfg();
        prop_assert!(cfg.write("section", "key", value));
        let narrowed: u8 = cfg.read("section", "key", 7);
        prop_assert_eq!(narrowed, 7);
    }
}
