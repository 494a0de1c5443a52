use thiserror::Error;

/// Error surface for the whole crate.
///
/// Each variant corresponds to one of the language-neutral error kinds: a
/// caller precondition violation, an allocation failure, a collision on an
/// `add_*` operation, a miss on a `get_*` operation, a base64url/JSON parse
/// failure, a structural or header-coherence failure at decode time, or a
/// cryptographic verification failure.
#[derive(Error, Debug)]
pub enum JwtError {
    /// Caller violated a precondition: null/empty name, wrong algorithm
    /// family for the supplied key, duplicate claim in a JSON blob, etc.
    #[error("Invalid argument: {0}")]
    Invalid(#[source] anyhow::Error),

    /// Allocation failure. Rust aborts on real OOM rather than returning
    /// here; this variant exists for parity with the source error surface
    /// and is reachable only via `Token::try_with_capacity`-style helpers
    /// that never actually run out of memory for the claim sizes this
    /// crate handles.
    #[error("Allocation failed")]
    NoMem,

    /// An `add_*` operation collided with a member that is already present.
    #[error("Claim or header already exists: {0}")]
    Exists(String),

    /// A `get_*` operation targeted a member that is not present.
    #[error("Claim or header not found: {0}")]
    NotFound(String),

    /// Base64url or JSON parse failure.
    #[error("Invalid encoding: {0}")]
    BadEncoding(#[source] anyhow::Error),

    /// Structural or header-coherence failure while decoding a compact
    /// token: wrong number of `.` separators, unknown `alg`, `typ` present
    /// but not `"JWT"`, or algorithm/key presence mismatch (including the
    /// `alg=none` downgrade case).
    #[error("Invalid JWT: {0}")]
    BadToken(#[source] anyhow::Error),

    /// Cryptographic signature verification failed.
    #[error("Signature verification failed")]
    BadSignature,

    /// The crypto backend signaled an operational failure unrelated to the
    /// correctness of the signature itself (unparseable key material,
    /// unsupported key shape, RNG failure).
    #[error("Cryptographic operation failed: {0}")]
    Crypto(#[source] anyhow::Error),
}

impl From<base64::DecodeError> for JwtError {
    fn from(err: base64::DecodeError) -> Self {
        JwtError::BadEncoding(err.into())
    }
}

impl From<serde_json::Error> for JwtError {
    fn from(err: serde_json::Error) -> Self {
        JwtError::BadEncoding(err.into())
    }
}
