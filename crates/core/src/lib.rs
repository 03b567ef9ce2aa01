//! Domain primitives shared across the reelhub workspace.
//!
//! Contains no I/O: the error taxonomy, role constants, id/timestamp
//! aliases, playback math, and the sitemap builder all live here so the
//! db, cdn, and api crates can agree on them without depending on each
//! other.

pub mod error;
pub mod playback;
pub mod roles;
pub mod sitemap;
pub mod types;
