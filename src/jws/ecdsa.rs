//! ECDSA adapter (ES256/ES384/ES512), backed by the RustCrypto `p256`,
//! `p384` and `p521` crates via the shared `ecdsa`/`signature` traits.
//!
//! Unlike the RSA and HMAC adapters, signing/verification keys here are
//! PKCS#8 DER (private) and SEC1/SPKI DER (public) — these crates parse and
//! emit *raw fixed-width* `r‖s` signatures directly, so there is no DER
//! signature conversion step the way an `openssl`-backed adapter would
//! need; see SPEC_FULL.md §4.2 for why this backend was chosen over one
//! that speaks DER signatures natively.

use ecdsa::elliptic_curve::pkcs8::{DecodePrivateKey, DecodePublicKey};
use ecdsa::signature::{Signer, Verifier};

use crate::error::JwtError;
use crate::jws::Algorithm;

macro_rules! curve_impl {
    ($mod_name:ident, $curve:ty, $sig_len:expr) => {
        mod $mod_name {
            use super::*;
            use $curve as Curve;

            pub fn sign(key: &[u8], message: &[u8]) -> Result<Vec<u8>, JwtError> {
                let signing_key = ecdsa::SigningKey::<Curve>::from_pkcs8_der(key)
                    .map_err(|err| JwtError::Crypto(anyhow::anyhow!("invalid EC private key: {}", err)))?;
                let signature: ecdsa::Signature<Curve> = signing_key.try_sign(message).map_err(|err| {
                    JwtError::Crypto(anyhow::anyhow!("ECDSA signing failed: {}", err))
                })?;
                let bytes = signature.to_bytes().to_vec();
                debug_assert_eq!(bytes.len(), $sig_len);
                Ok(bytes)
            }

            pub fn verify(key: &[u8], message: &[u8], signature: &[u8]) -> Result<(), JwtError> {
                if signature.len() != $sig_len {
                    return Err(JwtError::BadSignature);
                }
                let verifying_key = ecdsa::VerifyingKey::<Curve>::from_public_key_der(key)
                    .map_err(|err| JwtError::Crypto(anyhow::anyhow!("invalid EC public key: {}", err)))?;
                let signature = <ecdsa::Signature<Curve> as std::convert::TryFrom<&[u8]>>::try_from(signature)
                    .map_err(|_| JwtError::BadSignature)?;
                verifying_key
                    .verify(message, &signature)
                    .map_err(|_| JwtError::BadSignature)
            }
        }
    };
}

curve_impl!(es256, p256::NistP256, 64);
curve_impl!(es384, p384::NistP384, 96);

mod es512 {
    use ecdsa::elliptic_curve::pkcs8::{DecodePrivateKey, DecodePublicKey};
    use ecdsa::signature::{Signer, Verifier};

    use crate::error::JwtError;

    const SIG_LEN: usize = 132;

    pub fn sign(key: &[u8], message: &[u8]) -> Result<Vec<u8>, JwtError> {
        let generic_key = ecdsa::SigningKey::<p521::NistP521>::from_pkcs8_der(key)
            .map_err(|err| JwtError::Crypto(anyhow::anyhow!("invalid EC private key: {}", err)))?;
        let signing_key: p521::ecdsa::SigningKey = generic_key.into();
        let signature: p521::ecdsa::Signature = signing_key.try_sign(message).map_err(|err| {
            JwtError::Crypto(anyhow::anyhow!("ECDSA signing failed: {}", err))
        })?;
        let bytes = signature.to_bytes().to_vec();
        debug_assert_eq!(bytes.len(), SIG_LEN);
        Ok(bytes)
    }

    pub fn verify(key: &[u8], message: &[u8], signature: &[u8]) -> Result<(), JwtError> {
        if signature.len() != SIG_LEN {
            return Err(JwtError::BadSignature);
        }
        let generic_key = ecdsa::VerifyingKey::<p521::NistP521>::from_public_key_der(key)
            .map_err(|err| JwtError::Crypto(anyhow::anyhow!("invalid EC public key: {}", err)))?;
        let verifying_key: p521::ecdsa::VerifyingKey = generic_key.into();
        let signature = <p521::ecdsa::Signature as std::convert::TryFrom<&[u8]>>::try_from(signature)
            .map_err(|_| JwtError::BadSignature)?;
        verifying_key
            .verify(message, &signature)
            .map_err(|_| JwtError::BadSignature)
    }
}

pub(crate) fn sign(alg: Algorithm, key: &[u8], message: &[u8]) -> Result<Vec<u8>, JwtError> {
    match alg {
        Algorithm::Es256 => es256::sign(key, message),
        Algorithm::Es384 => es384::sign(key, message),
        Algorithm::Es512 => es512::sign(key, message),
        _ => unreachable!("ecdsa adapter called with a non-ECDSA algorithm"),
    }
}

pub(crate) fn verify(
    alg: Algorithm,
    key: &[u8],
    message: &[u8],
    signature: &[u8],
) -> Result<(), JwtError> {
    match alg {
        Algorithm::Es256 => es256::verify(key, message, signature),
        Algorithm::Es384 => es384::verify(key, message, signature),
        Algorithm::Es512 => es512::verify(key, message, signature),
        _ => unreachable!("ecdsa adapter called with a non-ECDSA algorithm"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod keys {
        include!("../../tests/fixtures/keys.rs");
    }

    #[test]
    fn es256_round_trip() {
        let private = keys::decode_std_b64(keys::EC256_PRIV_PKCS8_DER_B64);
        let public = keys::decode_std_b64(keys::EC256_PUB_SPKI_DER_B64);
        let message = b"abcde12345";
        let sig = sign(Algorithm::Es256, &private, message).unwrap();
        assert_eq!(sig.len(), 64);
        verify(Algorithm::Es256, &public, message, &sig).unwrap();
    }

    #[test]
    fn es384_round_trip() {
        let private = keys::decode_std_b64(keys::EC384_PRIV_PKCS8_DER_B64);
        let public = keys::decode_std_b64(keys::EC384_PUB_SPKI_DER_B64);
        let message = b"abcde12345";
        let sig = sign(Algorithm::Es384, &private, message).unwrap();
        assert_eq!(sig.len(), 96);
        verify(Algorithm::Es384, &public, message, &sig).unwrap();
    }

    #[test]
    fn es512_round_trip() {
        let private = keys::decode_std_b64(keys::EC521_PRIV_PKCS8_DER_B64);
        let public = keys::decode_std_b64(keys::EC521_PUB_SPKI_DER_B64);
        let message = b"abcde12345";
        let sig = sign(Algorithm::Es512, &private, message).unwrap();
        assert_eq!(sig.len(), 132);
        verify(Algorithm::Es512, &public, message, &sig).unwrap();
    }

    #[test]
    fn tampered_signature_fails() {
        let private = keys::decode_std_b64(keys::EC256_PRIV_PKCS8_DER_B64);
        let public = keys::decode_std_b64(keys::EC256_PUB_SPKI_DER_B64);
        let mut sig = sign(Algorithm::Es256, &private, b"abcde12345").unwrap();
        sig[0] ^= 0xff;
        assert!(verify(Algorithm::Es256, &public, b"abcde12345", &sig).is_err());
    }

    #[test]
    fn wrong_signature_length_is_rejected() {
        let public = keys::decode_std_b64(keys::EC256_PUB_SPKI_DER_B64);
        let short = vec![0u8; 10];
        assert!(verify(Algorithm::Es256, &public, b"abcde12345", &short).is_err());
    }
}
