use std::fmt::{Debug, Formatter};

/// Credential for a simple-hmac-auth service.
///
/// The API key identifies the caller in the `authorization` header. The
/// secret, when present, keys the request signature; without it every request
/// is sent unsigned and the signing step is skipped entirely.
#[derive(Clone)]
pub struct Credential {
    /// API key sent as `authorization: api-key <apiKeyId>`.
    pub api_key: String,
    /// Shared secret used to key the signature. `None` means unsigned mode.
    pub secret: Option<String>,
}

impl Credential {
    /// Create a new credential for unsigned requests.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            secret: None,
        }
    }

    /// Set the shared secret, enabling request signing.
    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = Some(secret.into());
        self
    }

    /// Check if the credential can identify a caller.
    pub fn is_valid(&self) -> bool {
        !self.api_key.is_empty()
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("api_key", &redact(&self.api_key))
            .field("secret", &self.secret.as_deref().map(redact))
            .finish()
    }
}

// Keep enough of the key visible to tell credentials apart in logs without
// leaking them. Short values are hidden entirely.
fn redact(value: &str) -> String {
    if value.len() < 8 {
        "***".to_string()
    } else {
        format!("{}***", &value[..3])
    }
}
