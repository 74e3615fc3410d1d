use async_trait::async_trait;
use bytes::Bytes;

/// Trait for the transport that actually puts bytes on the wire.
///
/// Requests and responses are fully buffered `Bytes` values, so the signing
/// layer can read a body without consuming it. Substituting this seam gives
/// tests a network-free path.
#[async_trait]
pub trait HttpSend: Send + Sync {
    /// Transmit a buffered request and return the buffered response.
    async fn send(&self, request: http::Request<Bytes>) -> anyhow::Result<http::Response<Bytes>>;
}

/// [`HttpSend`] backed by a shared `reqwest::Client`.
#[derive(Clone, Default)]
pub struct ReqwestHttpSend {
    client: reqwest::Client,
}

impl ReqwestHttpSend {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpSend for ReqwestHttpSend {
    async fn send(&self, request: http::Request<Bytes>) -> anyhow::Result<http::Response<Bytes>> {
        let request = reqwest::Request::try_from(request)?;
        let reply = self.client.execute(request).await?;

        let status = reply.status();
        let headers = reply.headers().clone();
        let body = reply.bytes().await?;

        let mut response = http::Response::new(body);
        *response.status_mut() = status;
        *response.headers_mut() = headers;
        Ok(response)
    }
}
