//! Request assembly: body and query serialization, header set, final URL.

use http::header::{AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE, DATE};
use http::{HeaderMap, HeaderName, HeaderValue};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde_json::Value;

use crate::config::Config;
use crate::time::{format_http_date, DateTime};
use crate::{Error, Result};

/// Header carrying the request signature.
pub const SIGNATURE: HeaderName = HeaderName::from_static("signature");

/// AsciiSet encoding every byte except the RFC 3986 unreserved characters:
/// 'A'-'Z', 'a'-'z', '0'-'9', '-', '.', '_', and '~'.
pub static QUERY_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Serialize a request body to its JSON transport payload.
pub fn serialize_body(body: &Value) -> Result<Vec<u8>> {
    serde_json::to_vec(body)
        .map_err(|e| Error::serialization_failed(format!("could not serialize input data: {e}")))
}

/// Serialize ordered query parameters into the canonical query string.
///
/// Caller order is preserved, never re-sorted. Each value is JSON-serialized
/// first and then percent-encoded along with its key, so a string value `"1"`
/// becomes `%221%22`. The verifier performs the same double step, which is
/// why a plainer encoding cannot be substituted here.
pub fn canonical_query_string(query: &[(&str, Value)]) -> Result<String> {
    let mut s = String::new();

    for (idx, (key, value)) in query.iter().enumerate() {
        if idx != 0 {
            s.push('&');
        }

        let serialized = serde_json::to_string(value).map_err(|e| {
            Error::serialization_failed(format!("could not serialize parameter {key}: {e}"))
        })?;

        s.push_str(&utf8_percent_encode(key, &QUERY_ENCODE_SET).to_string());
        s.push('=');
        s.push_str(&utf8_percent_encode(&serialized, &QUERY_ENCODE_SET).to_string());
    }

    Ok(s)
}

/// Build the header set every request carries before signing.
///
/// `date` and `authorization` are always present; `content-type` and
/// `content-length` only when there is a body.
pub(crate) fn base_headers(
    api_key: &str,
    now: DateTime,
    content_length: Option<usize>,
) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();

    headers.insert(DATE, format_http_date(now).parse()?);
    headers.insert(AUTHORIZATION, {
        let mut value: HeaderValue = format!("api-key {api_key}").parse()?;
        value.set_sensitive(true);

        value
    });

    if let Some(len) = content_length {
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_LENGTH, len.to_string().parse()?);
    }

    Ok(headers)
}

/// Compose the final URL from the connection config, path and query string.
pub(crate) fn build_url(config: &Config, path: &str, query_string: &str) -> String {
    let mut url = format!(
        "{}://{}:{}{}",
        config.scheme(),
        config.host,
        config.port,
        path
    );

    if !query_string.is_empty() {
        url.push('?');
        url.push_str(query_string);
    }

    url
}
