//! Client for the external video CDN (create-video, video status,
//! direct-upload credentials, byte upload).
//!
//! The CDN hosts and transcodes all video content; this crate is the only
//! place that talks to it. Handlers treat an unconfigured CDN
//! ([`config::CdnConfig::from_env`] returning `None`) as 503.

pub mod api;
pub mod config;
pub mod signature;

pub use api::{CdnError, CdnVideo, UploadCredential, VideoCdn};
pub use config::CdnConfig;
