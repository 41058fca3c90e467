//! Service-agnostic plumbing shared by every binding
//!
//! - `Transport`: one POST in, raw body text out (`ReqwestTransport`)
//! - `Signer`: pluggable request signature (`signature_base` is the canonical input)
//! - `Selector`: tag-path queries over a parsed XML tree
//!
//! Nothing in here knows which methods exist or how their results look.
pub mod rest;
pub mod select;
pub mod signer;

pub use rest::{ReqwestTransport, Transport, TransportBuilder, TransportConfig};
pub use select::{text_content, Selector};
pub use signer::{signature_base, Signer};
