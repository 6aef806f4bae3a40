//! Turns a [`rijn_tables::TableSet`] into the two output artifacts: the
//! importable Rust module and the human-readable text log.

#![no_std]
#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

pub mod render;

#[cfg(feature = "std")]
pub mod fs;
