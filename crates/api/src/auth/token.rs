//! Opaque session-token helpers.
//!
//! Session tokens are random strings; only their SHA-256 hash is stored
//! server-side so a database leak does not compromise active sessions. The
//! token is carried by the session cookie or an `Authorization: Bearer`
//! header.

use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Name of the session cookie set on login/register.
pub const SESSION_COOKIE: &str = "guestline_session";

/// Generate a cryptographically random session token.
///
/// Returns a tuple of `(plaintext_token, sha256_hex_hash)`. The plaintext is
/// sent to the client; only the hash is persisted server-side.
pub fn generate_session_token() -> (String, String) {
    let plaintext = Uuid::new_v4().to_string();
    let hash = hash_session_token(&plaintext);
    (plaintext, hash)
}

/// Compute the SHA-256 hex digest of a session token.
///
/// Use this to compare an incoming token against the stored hash.
pub fn hash_session_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}
