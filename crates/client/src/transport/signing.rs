use std::sync::Arc;

use bytes::Bytes;
use hmac::{Hmac, Mac};
use md5::Md5;
use tracing::debug;
use url::Url;

use super::send::HttpSend;
use crate::credential::Credential;
use crate::error::ClientError;

type HmacMd5 = Hmac<Md5>;

/// Knobs for the signing transport.
#[derive(Debug, Clone)]
pub struct TransportOptions {
    /// Emit request and response bodies as debug events.
    pub logging_enabled: bool,
    /// Sign the request but skip transmission entirely.
    pub dry_run: bool,
    /// Send `Connection: close` on every request. On by default: the API
    /// gateway historically misbehaved on reused connections.
    pub disable_keep_alive: bool,
}

impl Default for TransportOptions {
    fn default() -> Self {
        Self {
            logging_enabled: false,
            dry_run: false,
            disable_keep_alive: true,
        }
    }
}

/// Drop-in front for an [`HttpSend`] that authenticates every request by
/// appending a `verify` query parameter.
///
/// Each call is independent and the carried state is immutable, so a single
/// instance may serve any number of concurrent calls.
pub struct SigningTransport {
    credential: Credential,
    options: TransportOptions,
    sender: Arc<dyn HttpSend>,
}

impl SigningTransport {
    pub fn new(
        credential: Credential,
        options: TransportOptions,
        sender: Arc<dyn HttpSend>,
    ) -> Self {
        Self {
            credential,
            options,
            sender,
        }
    }

    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    /// Signature over `body`: lowercase hex HMAC-MD5 keyed with the full API
    /// key, prefixed with `"<account-id>:"` when the key carries one.
    pub fn signature(&self, body: &[u8]) -> String {
        let mut mac = HmacMd5::new_from_slice(self.credential.secret().as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(body);
        let digest = hex::encode(mac.finalize().into_bytes());

        match self.credential.account_id() {
            Some(id) => format!("{id}:{digest}"),
            None => digest,
        }
    }

    /// Authenticate `request` without sending it: log it if configured,
    /// suppress keep-alive, and append the `verify` query parameter.
    ///
    /// An empty body signs as a zero-length message.
    pub fn sign(
        &self,
        mut request: http::Request<Bytes>,
    ) -> Result<http::Request<Bytes>, ClientError> {
        if self.options.logging_enabled {
            debug!(
                method = %request.method(),
                url = %request.uri(),
                body = %String::from_utf8_lossy(request.body()),
                "outbound call"
            );
        }

        if self.options.disable_keep_alive {
            request.headers_mut().insert(
                http::header::CONNECTION,
                http::HeaderValue::from_static("close"),
            );
        }

        let signature = self.signature(request.body());

        let mut url = Url::parse(&request.uri().to_string()).map_err(|e| {
            ClientError::MalformedRequest(format!("unparseable request URL: {e}"))
        })?;

        // Re-encode the query with `verify` appended. Existing parameters
        // survive; a stale `verify` is replaced rather than duplicated.
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .filter(|(name, _)| name != "verify")
            .map(|(name, value)| (name.into_owned(), value.into_owned()))
            .collect();
        {
            let mut query = url.query_pairs_mut();
            query.clear();
            query.extend_pairs(&pairs);
            query.append_pair("verify", &signature);
        }

        let uri = http::Uri::try_from(url.as_str()).map_err(|e| {
            ClientError::MalformedRequest(format!("re-encoded URL is not a valid URI: {e}"))
        })?;
        *request.uri_mut() = uri;

        Ok(request)
    }

    /// Sign `request` and hand it to the underlying transport.
    ///
    /// Returns `Ok(None)` in dry-run mode: no network call happens, so there
    /// is no response to log or return. Transport errors are passed through
    /// unchanged; nothing is retried at this layer.
    pub async fn round_trip(
        &self,
        request: http::Request<Bytes>,
    ) -> Result<Option<http::Response<Bytes>>, ClientError> {
        let request = self.sign(request)?;

        if self.options.dry_run {
            return Ok(None);
        }

        let response = self.sender.send(request).await?;

        if self.options.logging_enabled {
            debug!(
                status = %response.status(),
                body = %String::from_utf8_lossy(response.body()),
                "reply"
            );
        }

        Ok(Some(response))
    }
}
