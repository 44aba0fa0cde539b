//! Embedded dataset
//!
//! Entries compiled into the binary at build time.

// Include generated dataset from build script
include!(concat!(env!("OUT_DIR"), "/entries.rs"));
