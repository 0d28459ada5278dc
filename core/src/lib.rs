//! Client-side HMAC request signing for HTTP APIs.
//!
//! This crate implements the client half of the simple-hmac-auth scheme: it
//! builds a canonical representation of every outgoing request, derives a
//! keyed-hash signature from it, and attaches the signature so a server
//! holding the same secret can independently recompute and verify it. No
//! session or token exchange takes place.
//!
//! ## Overview
//!
//! A call flows through three stages:
//!
//! - **Canonicalization**: method, path, query string, a whitelisted header
//!   subset and a content digest become one deterministic string-to-sign
//! - **Signing**: an HMAC over that string, keyed with the shared secret
//! - **Dispatch**: the assembled request goes out through a pluggable
//!   [`HttpSend`] transport and the response is classified into a parsed
//!   value or a terminal [`Error`]
//!
//! The canonical form is wire format: a verifier reproduces it byte for
//! byte, so any deviation in ordering, casing or escaping fails
//! authentication silently.
//!
//! ## Example
//!
//! ```no_run
//! use simple_hmac_auth::{Client, Config, Credential, HttpSend, Result};
//! use bytes::Bytes;
//! use http::Method;
//! use serde_json::json;
//!
//! # #[derive(Debug)]
//! # struct MyTransport;
//! # #[async_trait::async_trait]
//! # impl HttpSend for MyTransport {
//! #     async fn http_send(&self, _: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
//! #         todo!()
//! #     }
//! # }
//! # async fn example() -> Result<()> {
//! let config = Config::new().with_host("localhost").with_port(8000).with_tls(false);
//! let credential = Credential::new("API_KEY").with_secret("SECRET");
//!
//! // Any HttpSend implementation works; see simple-hmac-auth-reqwest.
//! let client = Client::new(config, credential, MyTransport)?;
//!
//! let items = client
//!     .call(Method::GET, "/items/", Some(&[("debug", json!(true))]), None)
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Unsigned mode
//!
//! A [`Credential`] without a secret sends every request unsigned: the
//! signing stage is skipped entirely and no `signature` header is emitted.

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod canonical;
pub mod hash;
pub mod time;

mod error;
pub use error::{Error, ErrorCode, ErrorKind, Result};
mod sign;
pub use sign::{sign, Algorithm};
mod credential;
pub use credential::Credential;
mod config;
pub use config::Config;
mod http;
pub use crate::http::HttpSend;
mod request;
pub use request::{canonical_query_string, serialize_body};
mod client;
pub use client::Client;
