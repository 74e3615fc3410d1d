//! Client for the metal-cloud JSON-RPC API.
//!
//! Every outbound request is authenticated with a `verify` query parameter
//! carrying the hex HMAC-MD5 of the request body, keyed with the API key.

pub mod client;
pub mod credential;
pub mod error;
pub mod transport;

pub use client::{Client, default_endpoint};
pub use credential::Credential;
pub use error::ClientError;
pub use transport::{HttpSend, ReqwestHttpSend, SigningTransport, TransportOptions};
