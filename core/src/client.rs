use std::sync::Arc;

use bytes::Bytes;
use http::{Method, StatusCode};
use log::debug;
use serde_json::Value;

use crate::canonical::string_to_sign;
use crate::config::Config;
use crate::credential::Credential;
use crate::request::{base_headers, build_url, canonical_query_string, serialize_body, SIGNATURE};
use crate::sign::sign;
use crate::time::{now, DateTime};
use crate::{Error, ErrorCode, HttpSend, Result};

/// Client is the main struct used to issue signed API calls.
///
/// Each call builds its request from scratch and discards everything on
/// completion; the only shared state is the immutable credential and config,
/// so concurrent calls on one client are safe as long as the transport is.
#[derive(Clone, Debug)]
pub struct Client {
    config: Config,
    credential: Credential,
    transport: Arc<dyn HttpSend>,

    time: Option<DateTime>,
}

impl Client {
    /// Create a new client.
    ///
    /// Fails when the credential carries no API key. A credential without a
    /// secret is accepted; requests are then sent unsigned.
    pub fn new(
        config: Config,
        credential: Credential,
        transport: impl HttpSend,
    ) -> Result<Self> {
        if !credential.is_valid() {
            return Err(Error::credential_invalid("missing 'api_key'"));
        }

        Ok(Self {
            config,
            credential,
            transport: Arc::new(transport),
            time: None,
        })
    }

    /// Specify the request time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    #[cfg(test)]
    pub(crate) fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Issue a call against the service.
    ///
    /// Builds and signs the request, dispatches it through the transport, and
    /// interprets the response. Returns the parsed response body on a 200
    /// status; any failure along the way aborts the call with a classified
    /// error and is never retried.
    pub async fn call(
        &self,
        method: Method,
        path: &str,
        query: Option<&[(&str, Value)]>,
        body: Option<&Value>,
    ) -> Result<Value> {
        let payload = body.map(serialize_body).transpose()?;
        let query_string = match query {
            Some(pairs) => canonical_query_string(pairs)?,
            None => String::new(),
        };

        let now = self.time.unwrap_or_else(now);
        let mut headers = base_headers(
            &self.credential.api_key,
            now,
            payload.as_ref().map(Vec::len),
        )?;

        if let Some(secret) = &self.credential.secret {
            let string_to_sign = string_to_sign(
                &method,
                path,
                &query_string,
                &headers,
                payload.as_deref(),
            )?;
            let signature = sign(secret.as_bytes(), self.config.algorithm, &string_to_sign);

            headers.insert(SIGNATURE, {
                let mut value: http::HeaderValue = format!(
                    "simple-hmac-auth {} {}",
                    self.config.algorithm, signature
                )
                .parse()?;
                value.set_sensitive(true);

                value
            });
        }

        let url = build_url(&self.config, path, &query_string);
        debug!("sending request: {method} {url}");

        let mut req = http::Request::builder()
            .method(method)
            .uri(&url)
            .body(Bytes::from(payload.unwrap_or_default()))?;
        *req.headers_mut() = headers;

        let resp = self.transport.http_send(req).await?;
        self.interpret_response(resp)
    }

    /// Classify a transport response into a parsed value or a terminal error.
    fn interpret_response(&self, resp: http::Response<Bytes>) -> Result<Value> {
        let (parts, body) = resp.into_parts();

        let object: Value = serde_json::from_slice(&body).map_err(|e| {
            Error::response_invalid(format!(
                "error interpreting server response: {e}: \"{}\"",
                String::from_utf8_lossy(&body)
            ))
        })?;

        // The error envelope, when present:
        // {"error": {"message": "...", "code": ...}}
        let mut message = None;
        let mut code: Option<ErrorCode> = None;
        if let Some(error) = object.get("error") {
            message = error
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string);
            code = error
                .get("code")
                .and_then(|v| serde_json::from_value(v.clone()).ok());
        }

        if parts.status != StatusCode::OK {
            // The envelope code is only honored alongside an envelope
            // message; a bare code still falls back to the HTTP status.
            return Err(match (message, code) {
                (Some(message), Some(code)) => Error::server_error(message).with_code(code),
                (Some(message), None) => Error::server_error(message),
                (None, _) => Error::server_error("An error has occurred")
                    .with_code(parts.status.as_u16()),
            });
        }

        Ok(object)
    }
}
