//! `auditdiff-core`: value primitives shared by every change record.
//!
//! This crate has no knowledge of object graphs or storage; it only defines how
//! arbitrary keys and values are wrapped so the diff layer can compare and hash
//! them consistently.

pub mod atomic;
pub mod diff_value;
pub mod error;

pub use atomic::Atomic;
pub use diff_value::DiffValue;
pub use error::{DiffError, DiffResult};
