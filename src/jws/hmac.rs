//! HMAC-SHA2 adapter (HS256/HS384/HS512), backed by `ring::hmac`.

use ring::hmac;

use crate::error::JwtError;
use crate::jws::Algorithm;

fn hmac_algorithm(alg: Algorithm) -> &'static hmac::Algorithm {
    match alg {
        Algorithm::Hs256 => &hmac::HMAC_SHA256,
        Algorithm::Hs384 => &hmac::HMAC_SHA384,
        Algorithm::Hs512 => &hmac::HMAC_SHA512,
        _ => unreachable!("hmac adapter called with a non-HMAC algorithm"),
    }
}

pub(crate) fn sign(alg: Algorithm, key: &[u8], message: &[u8]) -> Result<Vec<u8>, JwtError> {
    if key.is_empty() {
        return Err(JwtError::Invalid(anyhow::anyhow!(
            "HMAC signing requires a non-empty key"
        )));
    }
    let key = hmac::Key::new(*hmac_algorithm(alg), key);
    Ok(hmac::sign(&key, message).as_ref().to_vec())
}

pub(crate) fn verify(
    alg: Algorithm,
    key: &[u8],
    message: &[u8],
    signature: &[u8],
) -> Result<(), JwtError> {
    if key.is_empty() {
        return Err(JwtError::Invalid(anyhow::anyhow!(
            "HMAC verification requires a non-empty key"
        )));
    }
    let key = hmac::Key::new(*hmac_algorithm(alg), key);
    hmac::verify(&key, message, signature).map_err(|_| JwtError::BadSignature)
}
