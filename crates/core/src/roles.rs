//! Well-known role name constants.
//!
//! These must match the seed data in `20260301000001_create_roles_table.sql`.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_PRODUCER: &str = "producer";
pub const ROLE_VIEWER: &str = "viewer";
