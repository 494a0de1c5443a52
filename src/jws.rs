//! Algorithm dispatch and the crypto adapter boundary (§4.2).
//!
//! `Algorithm` is the closed JWS `alg` enumeration this crate supports.
//! `sign`/`verify` are the only two crypto entry points the rest of the
//! crate calls into; each family's adapter lives in its own submodule.

pub mod ecdsa;
pub mod hmac;
pub mod rsa;

use std::fmt;

use crate::error::JwtError;

/// The JWS `alg` header value, as a closed enumeration.
///
/// Names are matched case-insensitively on input (`from_name`); canonical
/// serialization (`name`) always uses the casing shown here, including
/// lowercase `"none"`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Algorithm {
    None,
    Hs256,
    Hs384,
    Hs512,
    Rs256,
    Rs384,
    Rs512,
    Es256,
    Es384,
    Es512,
    /// Sentinel for "not one of the above" — returned by `from_name` for
    /// unknown or missing algorithm identifiers, never produced by
    /// `encode`.
    Invalid,
}

impl Default for Algorithm {
    fn default() -> Self {
        Algorithm::None
    }
}

impl Algorithm {
    /// Canonical `alg` header string for this algorithm.
    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Hs256 => "HS256",
            Self::Hs384 => "HS384",
            Self::Hs512 => "HS512",
            Self::Rs256 => "RS256",
            Self::Rs384 => "RS384",
            Self::Rs512 => "RS512",
            Self::Es256 => "ES256",
            Self::Es384 => "ES384",
            Self::Es512 => "ES512",
            Self::Invalid => "INVALID",
        }
    }

    /// Parse an `alg` header string case-insensitively. Unknown or empty
    /// input maps to `Algorithm::Invalid`, never an error — callers that
    /// need to reject it do so by checking for `Invalid` explicitly (as
    /// `Token::decode` does).
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_uppercase().as_str() {
            "NONE" => Self::None,
            "HS256" => Self::Hs256,
            "HS384" => Self::Hs384,
            "HS512" => Self::Hs512,
            "RS256" => Self::Rs256,
            "RS384" => Self::Rs384,
            "RS512" => Self::Rs512,
            "ES256" => Self::Es256,
            "ES384" => Self::Es384,
            "ES512" => Self::Es512,
            _ => Self::Invalid,
        }
    }

    /// Whether this algorithm requires a non-empty key (every algorithm
    /// except `NONE` and the `INVALID` sentinel).
    pub fn requires_key(&self) -> bool {
        !matches!(self, Self::None | Self::Invalid)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Sign `message` under `alg` with `key`, returning the raw signature
/// bytes in the wire form §4.2 specifies for that algorithm's family (raw
/// MAC for HMAC, raw PKCS#1 signature for RSA, raw fixed-width `r‖s` for
/// ECDSA, empty for `NONE`).
pub fn sign(alg: Algorithm, key: &[u8], message: &[u8]) -> Result<Vec<u8>, JwtError> {
    match alg {
        Algorithm::None => Ok(Vec::new()),
        Algorithm::Hs256 | Algorithm::Hs384 | Algorithm::Hs512 => hmac::sign(alg, key, message),
        Algorithm::Rs256 | Algorithm::Rs384 | Algorithm::Rs512 => rsa::sign(alg, key, message),
        Algorithm::Es256 | Algorithm::Es384 | Algorithm::Es512 => ecdsa::sign(alg, key, message),
        Algorithm::Invalid => Err(JwtError::Invalid(anyhow::anyhow!(
            "cannot sign with an unknown algorithm"
        ))),
    }
}

/// Verify `signature` over `message` under `alg` with `key`. Any
/// operational failure (malformed signature, backend error, key/algorithm
/// shape mismatch) is reported as a verification failure, never a
/// separate retryable condition.
pub fn verify(alg: Algorithm, key: &[u8], message: &[u8], signature: &[u8]) -> Result<(), JwtError> {
    match alg {
        Algorithm::None => Ok(()),
        Algorithm::Hs256 | Algorithm::Hs384 | Algorithm::Hs512 => {
            hmac::verify(alg, key, message, signature)
        }
        Algorithm::Rs256 | Algorithm::Rs384 | Algorithm::Rs512 => {
            rsa::verify(alg, key, message, signature)
        }
        Algorithm::Es256 | Algorithm::Es384 | Algorithm::Es512 => {
            ecdsa::verify(alg, key, message, signature)
        }
        Algorithm::Invalid => Err(JwtError::Invalid(anyhow::anyhow!(
            "cannot verify with an unknown algorithm"
        ))),
    }
}
