//! Authentication and authorization middleware extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated user from a JWT Bearer token.
//! - [`auth::OptionalAuthUser`] -- Like `AuthUser` but tolerates anonymous requests.
//! - [`rbac::RequireAdmin`] -- Requires the `admin` role.
//! - [`rbac::RequireProducer`] -- Requires `producer` or `admin` role.
//! - [`rbac::RequireAuth`] -- Requires any authenticated user.

pub mod auth;
pub mod rbac;
