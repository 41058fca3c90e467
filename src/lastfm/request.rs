use crate::core::config::Credentials;
use crate::core::errors::LastfmError;
use crate::core::kernel::Signer;
use crate::core::types::{MethodDescriptor, ParameterSet};

/// Builds the parameter set for one call of a method
///
/// Reads credentials at build time; holds no state of its own.
pub struct RequestBuilder<'a> {
    descriptor: &'a MethodDescriptor,
    signer: &'a dyn Signer,
}

impl<'a> RequestBuilder<'a> {
    pub fn new(descriptor: &'a MethodDescriptor, signer: &'a dyn Signer) -> Self {
        Self { descriptor, signer }
    }

    /// Bind arguments to the descriptor and produce the wire parameters
    ///
    /// `positional` fills the required parameters in declared order, `keyword`
    /// overrides optional defaults. Absent values are left out. Signed methods
    /// come back sorted by key with `api_sig` appended last.
    pub fn build(
        &self,
        positional: &[&str],
        keyword: &[(&str, &str)],
        credentials: &Credentials,
    ) -> Result<ParameterSet, LastfmError> {
        let descriptor = self.descriptor;
        self.check_arguments(positional, keyword)?;

        let mut params = ParameterSet::new();
        params.push("api_key", credentials.api_key()?);
        params.push("method", descriptor.id());

        let values = positional
            .iter()
            .map(|value| Some((*value).to_string()))
            .chain(descriptor.optional.iter().map(|(name, default)| {
                keyword
                    .iter()
                    .rev()
                    .find(|(key, _)| key == name)
                    .map(|(_, value)| (*value).to_string())
                    .or_else(|| default.resolve(&credentials.username))
            }));

        let names = descriptor
            .required
            .iter()
            .copied()
            .chain(descriptor.optional_names());

        for (name, value) in names.zip(values) {
            if let Some(value) = value {
                params.push(name, value);
            }
        }

        if descriptor.auth.needs_session() {
            params.push("sk", credentials.session_key()?);
        }

        if descriptor.auth.is_signed() {
            let secret = credentials.shared_secret()?;
            params.sort_by_key();
            let signature = self.signer.sign(&params, secret);
            params.push("api_sig", signature);
        }

        Ok(params)
    }

    fn check_arguments(
        &self,
        positional: &[&str],
        keyword: &[(&str, &str)],
    ) -> Result<(), LastfmError> {
        let descriptor = self.descriptor;

        if positional.len() != descriptor.required.len() {
            return Err(LastfmError::ArityError {
                method: descriptor.id(),
                expected: descriptor.required.len(),
                got: positional.len(),
            });
        }

        for (key, _) in keyword {
            if descriptor.required.contains(key) {
                return Err(LastfmError::InvalidParameters(format!(
                    "{} got '{}' both positionally and by keyword",
                    descriptor, key
                )));
            }
            if !descriptor.accepts_keyword(key) {
                return Err(LastfmError::InvalidParameters(format!(
                    "{} has no parameter named '{}'",
                    descriptor, key
                )));
            }
        }

        Ok(())
    }
}
