//! RSASSA-PKCS1-v1_5 adapter (RS256/RS384/RS512), backed by `ring::signature`.
//!
//! Signing keys are PKCS#8 DER; public keys are PKCS#1 DER (`RSAPublicKey`),
//! matching what `ring::signature::RsaKeyPair`/`UnparsedPublicKey` expect —
//! see SPEC_FULL.md §3 for why the `Token.key` buffer carries these bytes
//! unparsed rather than a richer key type.

use ring::rand::SystemRandom;
use ring::signature::{self, RsaKeyPair};

use crate::error::JwtError;
use crate::jws::Algorithm;

/// RSA keys shorter than this are rejected at sign/verify time, matching
/// common JWS deployment guidance for RSASSA-PKCS1-v1_5.
const MIN_MODULUS_BITS: usize = 2048;

fn signing_encoding(alg: Algorithm) -> &'static dyn signature::RsaEncoding {
    match alg {
        Algorithm::Rs256 => &signature::RSA_PKCS1_SHA256,
        Algorithm::Rs384 => &signature::RSA_PKCS1_SHA384,
        Algorithm::Rs512 => &signature::RSA_PKCS1_SHA512,
        _ => unreachable!("rsa adapter called with a non-RSA algorithm"),
    }
}

fn verification_algorithm(alg: Algorithm) -> &'static dyn signature::VerificationAlgorithm {
    match alg {
        Algorithm::Rs256 => &signature::RSA_PKCS1_2048_8192_SHA256,
        Algorithm::Rs384 => &signature::RSA_PKCS1_2048_8192_SHA384,
        Algorithm::Rs512 => &signature::RSA_PKCS1_2048_8192_SHA512,
        _ => unreachable!("rsa adapter called with a non-RSA algorithm"),
    }
}

pub(crate) fn sign(alg: Algorithm, key: &[u8], message: &[u8]) -> Result<Vec<u8>, JwtError> {
    let keypair = RsaKeyPair::from_pkcs8(key)
        .map_err(|err| JwtError::Crypto(anyhow::anyhow!("invalid RSA private key: {}", err)))?;

    if keypair.public_modulus_len() * 8 < MIN_MODULUS_BITS {
        return Err(JwtError::Invalid(anyhow::anyhow!(
            "RSA key length must be {} bits or more",
            MIN_MODULUS_BITS
        )));
    }

    let mut signature = vec![0u8; keypair.public_modulus_len()];
    keypair
        .sign(signing_encoding(alg), &SystemRandom::new(), message, &mut signature)
        .map_err(|err| JwtError::Crypto(anyhow::anyhow!("RSA signing failed: {}", err)))?;
    Ok(signature)
}

pub(crate) fn verify(
    alg: Algorithm,
    key: &[u8],
    message: &[u8],
    signature: &[u8],
) -> Result<(), JwtError> {
    let public_key = signature::UnparsedPublicKey::new(verification_algorithm(alg), key);
    public_key
        .verify(message, signature)
        .map_err(|_| JwtError::BadSignature)
}
