//! Keyed secret hash for signed pool requests.

use aws_lc_rs::hmac;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Computes the signing hash attached to secret-bearing requests.
///
/// The hash is HMAC-SHA256 over `username ‖ client_id`, keyed with the
/// client secret, encoded as standard base64. The same derivation is
/// applied identically by every signed operation; callers treat the
/// result as opaque.
#[must_use]
pub fn secret_hash(username: &str, client_id: &str, client_secret: &str) -> String {
    let key = hmac::Key::new(hmac::HMAC_SHA256, client_secret.as_bytes());

    let mut message = Vec::with_capacity(username.len() + client_id.len());
    message.extend_from_slice(username.as_bytes());
    message.extend_from_slice(client_id.as_bytes());

    let tag = hmac::sign(&key, &message);
    STANDARD.encode(tag.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_rfc_4231_case_2() {
        // Key "Jefe", message "what do ya want for nothing?".
        let hash = secret_hash("what do ya want ", "for nothing?", "Jefe");
        assert_eq!(hash, "W9zBRr9gdU5qBCQmCJV1x1oAPwidJzmDnexYuWTsOEM=");
    }

    #[test]
    fn is_deterministic() {
        let a = secret_hash("bob", "client1", "topsecret");
        let b = secret_hash("bob", "client1", "topsecret");
        assert_eq!(a, b);
    }

    #[test]
    fn differs_per_input() {
        let base = secret_hash("bob", "client1", "topsecret");
        assert_ne!(base, secret_hash("alice", "client1", "topsecret"));
        assert_ne!(base, secret_hash("bob", "client2", "topsecret"));
        assert_ne!(base, secret_hash("bob", "client1", "othersecret"));
    }

    #[test]
    fn output_is_base64_of_a_256_bit_tag() {
        let hash = secret_hash("bob", "client1", "topsecret");
        // 32 tag bytes encode to 44 base64 characters.
        assert_eq!(hash.len(), 44);
        assert!(hash.ends_with('='));
    }
}
