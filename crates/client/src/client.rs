use std::sync::Arc;

use bytes::Bytes;
use url::Url;

use crate::credential::Credential;
use crate::error::ClientError;
use crate::transport::{ReqwestHttpSend, SigningTransport, TransportOptions};

/// Default production endpoint for the metal-cloud API.
pub fn default_endpoint() -> &'static str {
    "https://api.bigstep.com/metal-cloud"
}

/// Handle to an RPC endpoint. Configuration is validated up front, so a
/// constructed client is always usable; per-request failures surface from
/// [`Client::call_raw`].
pub struct Client {
    user: String,
    endpoint: Url,
    transport: SigningTransport,
}

impl Client {
    /// Build a client with default transport options.
    pub fn new(user: &str, api_key: &str, endpoint: &str) -> Result<Self, ClientError> {
        Self::with_options(user, api_key, endpoint, TransportOptions::default())
    }

    pub fn with_options(
        user: &str,
        api_key: &str,
        endpoint: &str,
        options: TransportOptions,
    ) -> Result<Self, ClientError> {
        if user.is_empty() {
            return Err(ClientError::InvalidConfiguration(
                "user cannot be empty; it is typically the account email address".into(),
            ));
        }
        if api_key.is_empty() {
            return Err(ClientError::InvalidConfiguration(
                "API key cannot be empty".into(),
            ));
        }
        if endpoint.is_empty() {
            return Err(ClientError::InvalidConfiguration(
                "endpoint cannot be empty".into(),
            ));
        }
        let endpoint: Url = endpoint.parse().map_err(|e| {
            ClientError::InvalidConfiguration(format!("endpoint is not a valid URL: {e}"))
        })?;

        let credential = Credential::parse(api_key)?;
        let transport =
            SigningTransport::new(credential, options, Arc::new(ReqwestHttpSend::default()));

        Ok(Self {
            user: user.to_string(),
            endpoint,
            transport,
        })
    }

    /// The user configured for this connection. Metadata only; it plays no
    /// part in signing.
    pub fn user_email(&self) -> &str {
        &self.user
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Account identifier extracted from the API key, if the key carried one.
    pub fn account_id(&self) -> Option<u64> {
        self.transport.credential().account_id()
    }

    pub fn transport(&self) -> &SigningTransport {
        &self.transport
    }

    /// POST an opaque RPC payload to the endpoint through the signing
    /// transport. Payload schema and response decoding are the caller's
    /// business; returns `Ok(None)` when the transport is in dry-run mode.
    pub async fn call_raw(
        &self,
        body: impl Into<Bytes>,
    ) -> Result<Option<http::Response<Bytes>>, ClientError> {
        let request = http::Request::builder()
            .method(http::Method::POST)
            .uri(self.endpoint.as_str())
            .header(http::header::CONTENT_TYPE, "application/json")
            .body(body.into())
            .map_err(|e| ClientError::MalformedRequest(e.to_string()))?;
        self.transport.round_trip(request).await
    }
}
