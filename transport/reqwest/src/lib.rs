//! reqwest-backed transport for simple-hmac-auth.
//!
//! Wraps a [`reqwest::Client`] behind the [`HttpSend`] collaborator trait.
//! Connection timeouts, proxies and TLS settings belong to the injected
//! client; every failure it reports is surfaced as a transport error.

#![warn(missing_docs)]

use async_trait::async_trait;
use bytes::Bytes;
use http_body_util::BodyExt;
use reqwest::{Client, Request};
use simple_hmac_auth::{Error, HttpSend, Result};

/// HttpSend implementation backed by reqwest.
#[derive(Debug, Default)]
pub struct ReqwestHttpSend {
    client: Client,
}

impl ReqwestHttpSend {
    /// Create a new ReqwestHttpSend with a reqwest::Client.
    ///
    /// Configure the connection timeout on the client; the signing core
    /// enforces none of its own.
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpSend for ReqwestHttpSend {
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        let req = Request::try_from(req).map_err(|e| {
            Error::transport_failed(format!("could not convert request: {e}")).with_source(e)
        })?;

        let resp: http::Response<_> = self
            .client
            .execute(req)
            .await
            .map_err(|e| {
                Error::transport_failed(format!("error while communicating with server: {e}"))
                    .with_source(e)
            })?
            .into();

        let (parts, body) = resp.into_parts();
        let bs = BodyExt::collect(body)
            .await
            .map(|buf| buf.to_bytes())
            .map_err(|e| {
                Error::transport_failed(format!("error while reading response body: {e}"))
                    .with_source(e)
            })?;
        Ok(http::Response::from_parts(parts, bs))
    }
}
