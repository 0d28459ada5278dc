use crate::sign::Algorithm;

/// Config carries all the connection settings for a simple-hmac-auth service.
///
/// The config is fixed once the client is constructed; there is no in-place
/// mutation afterwards, which keeps the signing pipeline free of hidden
/// state.
#[derive(Debug, Clone)]
pub struct Config {
    /// Target host, without scheme or port.
    pub host: String,
    /// Target port.
    pub port: u16,
    /// Use `https` when true, `http` otherwise.
    pub tls: bool,
    /// Keyed-hash algorithm for the `signature` header.
    pub algorithm: Algorithm,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 443,
            tls: true,
            algorithm: Algorithm::default(),
        }
    }
}

impl Config {
    /// Create a new Config with the default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target host.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the target port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Toggle TLS.
    pub fn with_tls(mut self, tls: bool) -> Self {
        self.tls = tls;
        self
    }

    /// Set the signing algorithm.
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// The URL scheme implied by the TLS setting.
    pub fn scheme(&self) -> &'static str {
        if self.tls {
            "https"
        } else {
            "http"
        }
    }
}
