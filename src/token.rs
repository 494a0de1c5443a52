//! The working document: header, claims, algorithm and key, plus the
//! compact-serialization codec (§4.3).

use std::fmt;

use serde_json::Value;
use zeroize::Zeroize;

use crate::claims::ClaimSet;
use crate::error::JwtError;
use crate::jws::{self, Algorithm};
use crate::util;

/// Header + claims + algorithm + key. Mutable in both lifecycle phases
/// (building and post-decode); `encode` after `decode` is allowed and may
/// produce different bytes than the original input.
#[derive(Clone, Default, PartialEq)]
pub struct Token {
    alg: Algorithm,
    key: Option<Vec<u8>>,
    headers: ClaimSet,
    claims: ClaimSet,
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Token")
            .field("alg", &self.alg)
            .field("key", &self.key.as_ref().map(|_| "<redacted>"))
            .field("headers", &self.headers)
            .field("claims", &self.claims)
            .finish()
    }
}

impl Drop for Token {
    fn drop(&mut self) {
        self.scrub_key();
    }
}

impl Token {
    pub fn new() -> Self {
        Self {
            alg: Algorithm::None,
            key: None,
            headers: ClaimSet::new(),
            claims: ClaimSet::new(),
        }
    }

    fn scrub_key(&mut self) {
        if let Some(key) = self.key.as_mut() {
            key.zeroize();
        }
        self.key = None;
    }

    pub fn alg(&self) -> Algorithm {
        self.alg
    }

    pub fn key(&self) -> Option<&[u8]> {
        self.key.as_deref()
    }

    pub fn headers(&self) -> &ClaimSet {
        &self.headers
    }

    pub fn headers_mut(&mut self) -> &mut ClaimSet {
        &mut self.headers
    }

    pub fn claims(&self) -> &ClaimSet {
        &self.claims
    }

    pub fn claims_mut(&mut self) -> &mut ClaimSet {
        &mut self.claims
    }

    /// Scrub any prior key, then adopt `alg` and `key` together.
    /// `alg == NONE` requires an absent/empty key; any other algorithm
    /// requires a non-empty key.
    pub fn set_alg(&mut self, alg: Algorithm, key: Option<&[u8]>) -> Result<(), JwtError> {
        if alg == Algorithm::Invalid {
            return Err(JwtError::Invalid(anyhow::anyhow!("unknown algorithm")));
        }

        let key_is_empty = key.map_or(true, |k| k.is_empty());
        if alg.requires_key() == key_is_empty {
            return Err(JwtError::Invalid(anyhow::anyhow!(
                "key presence must match whether {} requires a key",
                alg
            )));
        }

        self.scrub_key();
        self.alg = alg;
        self.key = key.filter(|k| !k.is_empty()).map(|k| k.to_vec());
        Ok(())
    }

    /// Synthesize the header, serialize header/claims with sorted keys, sign
    /// (if `alg != NONE`) and join into the compact form.
    pub fn encode(&self) -> Result<String, JwtError> {
        let mut header = self.headers.clone();
        header.set("alg", Value::String(self.alg.name().to_string()));
        if self.alg != Algorithm::None {
            header.set("typ", Value::String("JWT".to_string()));
        }

        let header_b64 = util::b64_encode(header.dump_all());
        let claims_b64 = util::b64_encode(self.claims.dump_all());
        let signing_input = format!("{}.{}", header_b64, claims_b64);

        if self.alg == Algorithm::None {
            return Ok(format!("{}.", signing_input));
        }

        let key = self
            .key
            .as_deref()
            .ok_or_else(|| JwtError::Invalid(anyhow::anyhow!("signing requires a key")))?;
        let signature = jws::sign(self.alg, key, signing_input.as_bytes())?;
        Ok(format!("{}.{}", signing_input, util::b64_encode(signature)))
    }

    /// Parse and verify a compact token. `key` and `expected_alg` bind the
    /// caller's expectations to what the token actually declares:
    /// `expected_alg`, if given, must match the declared `alg` exactly;
    /// `key` presence must match whether the declared `alg` requires one
    /// (this is what blocks the `alg=none` downgrade in both directions).
    pub fn decode(
        token: &str,
        key: Option<&[u8]>,
        expected_alg: Option<Algorithm>,
    ) -> Result<Token, JwtError> {
        let mut parts = token.split('.');
        let header_b64 = parts.next().ok_or_else(missing_part)?;
        let claims_b64 = parts.next().ok_or_else(missing_part)?;
        let sig_b64 = parts.next().ok_or_else(missing_part)?;
        if parts.next().is_some() {
            return Err(JwtError::BadToken(anyhow::anyhow!(
                "token must have exactly two '.' separators"
            )));
        }

        let header_bytes = util::b64_decode(header_b64).map_err(to_bad_token)?;
        let header = util::parse_object(&header_bytes)?;

        let alg_name = header
            .get("alg")
            .and_then(Value::as_str)
            .ok_or_else(|| JwtError::BadToken(anyhow::anyhow!("header is missing \"alg\"")))?;
        let alg = Algorithm::from_name(alg_name);
        if alg == Algorithm::Invalid {
            return Err(JwtError::BadToken(anyhow::anyhow!(
                "unknown algorithm: {}",
                alg_name
            )));
        }

        if let Some(expected) = expected_alg {
            if expected != alg {
                return Err(JwtError::BadToken(anyhow::anyhow!(
                    "declared algorithm {} does not match expected {}",
                    alg,
                    expected
                )));
            }
        }

        if alg != Algorithm::None {
            if let Some(typ) = header.get("typ").and_then(Value::as_str) {
                if !typ.eq_ignore_ascii_case("JWT") {
                    return Err(JwtError::BadToken(anyhow::anyhow!(
                        "header \"typ\" must be \"JWT\", got {:?}",
                        typ
                    )));
                }
            }
        }

        let key_is_empty = key.map_or(true, |k| k.is_empty());
        if alg.requires_key() == key_is_empty {
            return Err(JwtError::BadToken(anyhow::anyhow!(
                "key presence does not match algorithm {}",
                alg
            )));
        }

        let claims_bytes = util::b64_decode(claims_b64).map_err(to_bad_token)?;
        let claims = util::parse_object(&claims_bytes)?;

        if alg != Algorithm::None {
            let signing_input = format!("{}.{}", header_b64, claims_b64);
            let signature = util::b64_decode(sig_b64).map_err(to_bad_token)?;
            let key = key.expect("checked non-empty above");
            jws::verify(alg, key, signing_input.as_bytes(), &signature)?;
        }

        Ok(Token {
            alg,
            key: key.filter(|k| !k.is_empty()).map(|k| k.to_vec()),
            headers: ClaimSet::from_map(header),
            claims: ClaimSet::from_map(claims),
        })
    }
}

fn missing_part() -> JwtError {
    JwtError::BadToken(anyhow::anyhow!(
        "token must have exactly two '.' separators"
    ))
}

fn to_bad_token(err: JwtError) -> JwtError {
    match err {
        JwtError::BadEncoding(source) => JwtError::BadToken(source),
        other => other,
    }
}
