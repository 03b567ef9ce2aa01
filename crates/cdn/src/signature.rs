//! Scoped upload-credential signature.
//!
//! The CDN's direct-upload (TUS) endpoint authenticates the browser with a
//! presigned SHA-256 digest over `library_id + api_key + expire + video_id`.
//! The signature is only valid for that one video id until `expire`
//! (unix milliseconds), which is what makes the credential scoped and
//! time-limited.

use sha2::{Digest, Sha256};

/// Compute the hex-encoded upload signature for one video id.
pub fn upload_signature(library_id: &str, api_key: &str, expire_ms: i64, video_id: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(library_id.as_bytes());
    hasher.update(api_key.as_bytes());
    hasher.update(expire_ms.to_string().as_bytes());
    hasher.update(video_id.as_bytes());
    format!("{:x}", hasher.finalize())
}
