//! HMAC request signatures for device-facing endpoints
//!
//! Printing devices authenticate their requests by signing the raw body
//! with their per-device secret: `hex(HMAC-SHA256(secret, body))`, sent in
//! the `x-device-signature` header. The service recomputes the digest over
//! the exact transmitted bytes and compares.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Sign a raw body with a device secret, returning the lowercase hex digest.
pub fn sign(secret: &str, body: &[u8]) -> String {
    // HMAC accepts keys of any length, so this cannot fail in practice
    let Ok(mut mac) = HmacSha256::new_from_slice(secret.as_bytes()) else {
        return String::new();
    };
    mac.update(body);
    hex::encode(mac.finalize().into_bytes())
}

/// Verify a caller-supplied hex signature over the raw body.
///
/// The hex comparison is case-insensitive: the signature is decoded before
/// the constant-time check via [`Mac::verify_slice`]. Any computation fault
/// (malformed secret, non-hex signature) counts as verification failure
/// rather than an error.
pub fn verify(secret: &str, body: &[u8], signature_hex: &str) -> bool {
    let Ok(mut mac) = HmacSha256::new_from_slice(secret.as_bytes()) else {
        return false;
    };
    mac.update(body);
    let Ok(sig) = hex::decode(signature_hex.trim()) else {
        return false;
    };
    mac.verify_slice(&sig).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    // RFC 4231 test case 2: key "Jefe", data "what do ya want for nothing?"
    const RFC4231_DIGEST: &str =
        "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843";

    #[test]
    fn test_sign_known_vector() {
        let sig = sign("Jefe", b"what do ya want for nothing?");
        assert_eq!(sig, RFC4231_DIGEST);
    }

    #[test]
    fn test_verify_valid_signature() {
        let body = b"{\"device_id\":\"printer-01\",\"is_online\":true}";
        let sig = sign("device-secret", body);
        assert!(verify("device-secret", body, &sig));
    }

    #[test]
    fn test_verify_is_case_insensitive() {
        let body = b"what do ya want for nothing?";
        assert!(verify("Jefe", body, RFC4231_DIGEST));
        assert!(verify("Jefe", body, &RFC4231_DIGEST.to_uppercase()));
    }

    #[test]
    fn test_verify_rejects_mutated_body() {
        let body = b"what do ya want for nothing?";
        // Flip a single bit in the body
        let mut mutated = body.to_vec();
        mutated[0] ^= 0x01;
        assert!(!verify("Jefe", &mutated, RFC4231_DIGEST));
    }

    #[test]
    fn test_verify_rejects_mutated_signature() {
        let body = b"what do ya want for nothing?";
        let mut sig = RFC4231_DIGEST.to_string();
        // Flip a single hex digit
        sig.replace_range(0..1, "6");
        assert!(!verify("Jefe", body, &sig));
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let body = b"payload";
        let sig = sign("secret-a", body);
        assert!(!verify("secret-b", body, &sig));
    }

    #[test]
    fn test_verify_rejects_garbage_signature() {
        assert!(!verify("Jefe", b"payload", "not-hex-at-all"));
        assert!(!verify("Jefe", b"payload", ""));
        // Truncated digest
        assert!(!verify("Jefe", b"payload", "5bdcc146"));
    }
}
