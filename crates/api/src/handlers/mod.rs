//! Request handlers, one module per resource.

pub mod admin;
pub mod auth;
pub mod checkout;
pub mod comments;
pub mod engagement;
pub mod likes;
pub mod movies;
pub mod sitemap;
pub mod uploads;
pub mod watchlist;
