//! Post-verification semantic policy (§4.4): expected algorithm, temporal
//! claims, header/claim replication coherence, and required grants.

use serde_json::Value;

use crate::error::JwtError;
use crate::jws::Algorithm;
use crate::token::Token;

/// Claims replicated between header and body that must agree when both are
/// present. `aud` may be a string or an array, so it is compared by full
/// JSON equality rather than string equality.
const REPLICATED_CLAIMS: &[&str] = &["iss", "sub", "aud"];

#[derive(Debug, Clone, Default)]
pub struct Validator {
    expected_alg: Algorithm,
    /// `0` means "do not check temporal claims."
    now: i64,
    required_grants: serde_json::Map<String, Value>,
    status: String,
}

impl Validator {
    pub fn new(expected_alg: Algorithm) -> Self {
        Self {
            expected_alg,
            now: 0,
            required_grants: serde_json::Map::new(),
            status: String::new(),
        }
    }

    pub fn set_now(&mut self, now: i64) {
        self.now = now;
    }

    /// Set `now` to the current wall-clock time as a Unix timestamp, for
    /// callers that don't need to inject a fixed clock for testing.
    pub fn set_now_from_system_time(&mut self) {
        self.now = chrono::Utc::now().timestamp();
    }

    pub fn require_grant(&mut self, name: &str, value: impl Into<Value>) {
        self.required_grants.insert(name.to_string(), value.into());
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Run the checks in order, short-circuiting on the first failure and
    /// recording a human-readable reason in `status`. Returns `true` only
    /// when every check passes, at which point `status() == "Valid JWT"`.
    pub fn validate(&mut self, token: Option<&Token>) -> bool {
        let token = match token {
            Some(token) => token,
            None => {
                self.status = "Invalid JWT".to_string();
                return false;
            }
        };

        if token.alg() != self.expected_alg {
            self.status = "Algorithm does not match".to_string();
            return false;
        }

        if self.now != 0 {
            if let Some(exp) = token.claims().get_int("exp") {
                if self.now >= exp {
                    self.status = "JWT has expired".to_string();
                    return false;
                }
            }
            if let Some(nbf) = token.claims().get_int("nbf") {
                if self.now < nbf {
                    self.status = "JWT has not matured".to_string();
                    return false;
                }
            }
        }

        for name in REPLICATED_CLAIMS {
            if let (Some(header_value), Some(claim_value)) =
                (token.headers().get_raw(name), token.claims().get_raw(name))
            {
                if header_value != claim_value {
                    self.status = format!("JWT \"{}\" header does not match", name);
                    return false;
                }
            }
        }

        for (name, expected) in &self.required_grants {
            match token.claims().get_raw(name) {
                None => {
                    self.status = format!("JWT \"{}\" grant is not present", name);
                    return false;
                }
                Some(actual) if actual != expected => {
                    self.status = format!("JWT \"{}\" grant does not match", name);
                    return false;
                }
                Some(_) => {}
            }
        }

        self.status = "Valid JWT".to_string();
        true
    }
}

/// Mirrors the source library's own `INVALID` error for a malformed call
/// site (a null validator), kept as a narrow helper rather than a method on
/// `Validator` since a real `&mut Validator` can never itself be null.
pub fn validate_or_invalid(validator: Option<&mut Validator>, token: Option<&Token>) -> Result<bool, JwtError> {
    match validator {
        Some(validator) => Ok(validator.validate(token)),
        None => Err(JwtError::Invalid(anyhow::anyhow!("validator is required"))),
    }
}
