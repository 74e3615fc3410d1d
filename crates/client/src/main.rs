use std::sync::Arc;

use anyhow::Result;
use bytes::Bytes;
use clap::Parser;

use metalcloud_client::{
    Credential, ReqwestHttpSend, SigningTransport, TransportOptions, default_endpoint,
};

/// Sign a request without sending it and print the resulting URL. Useful for
/// checking signature generation against a server's verification logs.
#[derive(Parser)]
struct Args {
    /// API key, either "<account-id>:<secret>" or a bare secret
    #[clap(long, env = "METALCLOUD_API_KEY")]
    api_key: String,
    #[clap(long, env = "METALCLOUD_ENDPOINT", default_value_t = default_endpoint().to_string())]
    endpoint: String,
    /// Request body to sign
    #[clap(long, default_value = "")]
    body: String,
}

/// Same up-front key validation the library applies at client construction.
fn parse_api_key(api_key: &str) -> Result<Credential> {
    if api_key.is_empty() {
        anyhow::bail!("API key cannot be empty");
    }
    Ok(Credential::parse(api_key)?)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let credential = parse_api_key(&args.api_key)?;
    let transport = SigningTransport::new(
        credential,
        TransportOptions {
            dry_run: true,
            ..Default::default()
        },
        Arc::new(ReqwestHttpSend::default()),
    );

    let request = http::Request::builder()
        .method(http::Method::POST)
        .uri(args.endpoint.as_str())
        .body(Bytes::from(args.body))?;

    let signed = transport.sign(request)?;
    println!("{}", signed.uri());
    Ok(())
}
