use crate::core::errors::LastfmError;
use crate::core::kernel::Transport;
use crate::core::types::{MethodDescriptor, Record};
use crate::lastfm::client::LastfmClient;

/// A registry entry bound to a client
pub struct Binding<'c, T: Transport> {
    client: &'c LastfmClient<T>,
    descriptor: &'static MethodDescriptor,
}

impl<'c, T: Transport> Binding<'c, T> {
    pub(crate) fn new(client: &'c LastfmClient<T>, descriptor: &'static MethodDescriptor) -> Self {
        Self { client, descriptor }
    }

    pub fn descriptor(&self) -> &'static MethodDescriptor {
        self.descriptor
    }

    /// Wire identifier, e.g. `track.love`
    pub fn id(&self) -> String {
        self.descriptor.id()
    }

    /// Call with the required values in order plus keyword overrides
    pub async fn invoke(
        &self,
        positional: &[&str],
        keyword: &[(&str, &str)],
    ) -> Result<Vec<Record>, LastfmError> {
        self.client.call(self.descriptor, positional, keyword).await
    }
}

impl<T: Transport> Clone for Binding<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Transport> Copy for Binding<'_, T> {}

impl<T: Transport> std::fmt::Debug for Binding<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Binding")
            .field("method", &self.descriptor.id())
            .field("auth", &self.descriptor.auth)
            .finish_non_exhaustive()
    }
}
