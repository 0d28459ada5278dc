use crate::hash::{hex_hmac_sha1, hex_hmac_sha256, hex_hmac_sha512};
use crate::Error;
use std::fmt;
use std::str::FromStr;

/// Keyed-hash algorithm used to sign the string-to-sign.
///
/// The algorithm name travels on the wire inside the `signature` header, so a
/// verifier can recompute the signature with the same primitive. The content
/// digest embedded in the string-to-sign is always SHA-256 and is not
/// affected by this choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// HMAC-SHA1.
    Sha1,
    /// HMAC-SHA256, the default.
    #[default]
    Sha256,
    /// HMAC-SHA512.
    Sha512,
}

impl Algorithm {
    /// The wire name of this algorithm, e.g. `sha256`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Sha1 => "sha1",
            Algorithm::Sha256 => "sha256",
            Algorithm::Sha512 => "sha512",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sha1" => Ok(Algorithm::Sha1),
            "sha256" => Ok(Algorithm::Sha256),
            "sha512" => Ok(Algorithm::Sha512),
            v => Err(Error::credential_invalid(format!(
                "unsupported signing algorithm: {v}"
            ))),
        }
    }
}

/// Compute the hex encoded keyed hash of `string_to_sign` under `secret`.
///
/// Pure function: same inputs always produce the same output, which is what
/// lets an independent verifier recompute the signature.
pub fn sign(secret: &[u8], algorithm: Algorithm, string_to_sign: &str) -> String {
    match algorithm {
        Algorithm::Sha1 => hex_hmac_sha1(secret, string_to_sign.as_bytes()),
        Algorithm::Sha256 => hex_hmac_sha256(secret, string_to_sign.as_bytes()),
        Algorithm::Sha512 => hex_hmac_sha512(secret, string_to_sign.as_bytes()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_round_trip() {
        for name in ["sha1", "sha256", "sha512"] {
            let algorithm: Algorithm = name.parse().unwrap();
            assert_eq!(algorithm.as_str(), name);
        }

        assert!("md5".parse::<Algorithm>().is_err());
        assert_eq!(Algorithm::default(), Algorithm::Sha256);
    }

    #[test]
    fn test_sign_is_deterministic() {
        let a = sign(b"SECRET", Algorithm::Sha256, "GET\n/\n\n\nabc");
        let b = sign(b"SECRET", Algorithm::Sha256, "GET\n/\n\n\nabc");
        assert_eq!(a, b);
    }

    #[test]
    fn test_sign_known_vector() {
        assert_eq!(
            sign(b"Jefe", Algorithm::Sha256, "what do ya want for nothing?"),
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
        );
    }
}
