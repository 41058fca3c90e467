use crate::core::kernel::{signature_base, Signer};
use crate::core::types::ParameterSet;
use md5::{Digest, Md5};

/// MD5 request signer required by the Last.fm 2.0 API
#[derive(Debug, Clone, Copy, Default)]
pub struct Md5Signer;

impl Md5Signer {
    pub fn new() -> Self {
        Self
    }
}

impl Signer for Md5Signer {
    fn sign(&self, params: &ParameterSet, shared_secret: &str) -> String {
        sign(params, shared_secret)
    }
}

/// Lowercase hex MD5 of the canonical signature string
pub fn sign(params: &ParameterSet, shared_secret: &str) -> String {
    let base = signature_base(params, shared_secret);
    hex::encode(Md5::digest(base.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(entries: &[(&str, &str)]) -> ParameterSet {
        entries.iter().copied().collect()
    }

    #[test]
    fn test_known_digest() {
        // md5("api_keykfoobarmethodms")
        let expected = hex::encode(Md5::digest(b"api_keykfoobarmethodms"));
        let signature = sign(&params(&[("api_key", "k"), ("method", "m"), ("foo", "bar")]), "s");
        assert_eq!(signature, expected);
        assert_eq!(signature.len(), 32);
        assert!(signature.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_md5_of_empty_base() {
        // Well-known MD5 of the empty string.
        assert_eq!(sign(&ParameterSet::new(), ""), "d41d8cd98f00b204e9800998ecf8427e");
    }

    #[test]
    fn test_sign_is_deterministic_and_order_independent() {
        let a = params(&[("method", "auth.getSession"), ("api_key", "abc"), ("token", "t0")]);
        let b = params(&[("token", "t0"), ("api_key", "abc"), ("method", "auth.getSession")]);
        let signer = Md5Signer::new();
        assert_eq!(signer.sign(&a, "secret"), signer.sign(&a, "secret"));
        assert_eq!(signer.sign(&a, "secret"), signer.sign(&b, "secret"));
        assert_ne!(signer.sign(&a, "secret"), signer.sign(&a, "other"));
    }
}
