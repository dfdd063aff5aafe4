//! Service layer for the grade lookup portal.
//! - Separates lookup/admin/status logic from the HTTP surface.
//! - Reuses validation and data definitions from the `models` crate.
//! - Talks to persistence only through the store traits in `file`,
//!   so a synchronized backend can replace the JSON documents later.

pub mod admin;
pub mod errors;
pub mod expiry;
pub mod file;
pub mod lookup;
pub mod runtime;
pub mod status;

#[cfg(test)]
pub mod test_support;
