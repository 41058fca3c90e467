use crate::core::types::ParameterSet;

/// Signer trait for request authentication
///
/// Implementations turn an unsigned parameter set and the shared secret into
/// the `api_sig` value. The set passed in must not already carry `api_sig`.
pub trait Signer: Send + Sync {
    /// Compute the signature for `params`
    ///
    /// # Arguments
    /// * `params` - Parameters to sign, in any order
    /// * `shared_secret` - Secret issued with the API key
    ///
    /// # Returns
    /// The signature as a lowercase hex string
    fn sign(&self, params: &ParameterSet, shared_secret: &str) -> String;
}

/// Canonical string a signature is computed over
///
/// Entries sorted by key, each key immediately followed by its value, no
/// separators, then the shared secret.
pub fn signature_base(params: &ParameterSet, shared_secret: &str) -> String {
    let sorted = params.sorted();
    let mut base = String::with_capacity(
        sorted.iter().map(|(k, v)| k.len() + v.len()).sum::<usize>() + shared_secret.len(),
    );
    for (key, value) in sorted.iter() {
        base.push_str(key);
        base.push_str(value);
    }
    base.push_str(shared_secret);
    base
}
