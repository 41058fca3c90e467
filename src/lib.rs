pub mod core;
pub mod lastfm;

pub use crate::core::{
    config::{LastfmConfig, SharedCredentials},
    errors::LastfmError,
    types::*,
};
pub use lastfm::{create_lastfm_client, LastfmBuilder, LastfmClient};
