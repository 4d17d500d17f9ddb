//! Code generation utilities shared by the `labelize` macros.
//!
//! This crate parses label declarations, normalizes their label names, and
//! resolves association names to target types. It does not generate any
//! tokens itself; see `labelize_macros` for that.

pub mod inflect;
pub mod label;
