use crate::Result;
use bytes::Bytes;
use std::fmt::Debug;

/// HttpSend is the transport collaborator used to perform the HTTP exchange.
///
/// The core hands over a fully assembled and signed request and expects the
/// raw status and body back. Connection handling, timeouts, redirects and TLS
/// verification all live behind this trait; any failure it reports is
/// surfaced as a transport error and never retried.
#[async_trait::async_trait]
pub trait HttpSend: Debug + Send + Sync + 'static {
    /// Send http request and return the response.
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>>;
}
