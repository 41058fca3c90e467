pub mod binding;
pub mod builder;
pub mod client;
pub mod codec;
pub mod methods;
pub mod registry;
pub mod request;
pub mod signer;

/// Service endpoint every call is posted to
pub const DEFAULT_BASE_URL: &str = "http://ws.audioscrobbler.com/2.0/";

/// Page where a user approves a request token
pub const AUTH_URL: &str = "http://www.last.fm/api/auth/";

pub use binding::Binding;
pub use builder::{create_lastfm_client, LastfmBuilder};
pub use client::LastfmClient;
pub use codec::XmlCodec;
pub use registry::{all_methods, lookup, lookup_method, methods_in_group, METHODS};
pub use request::RequestBuilder;
pub use signer::{sign, Md5Signer};
