//! Row structs and DTOs, one module per table.

pub mod comment;
pub mod movie;
pub mod payment;
pub mod role;
pub mod session;
pub mod user;
pub mod view;
pub mod watchlist;
