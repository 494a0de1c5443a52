//! Shared header/claim document.
//!
//! Both the JWS header and the JWT claim set are JSON objects with
//! identical add/get/delete/dump semantics, so `ClaimSet` backs both
//! `Token::headers()` and `Token::claims()` as a thin typed wrapper over a
//! `Map<String, Value>`.

use serde_json::{Map, Number, Value};

use crate::error::JwtError;
use crate::util;

/// A claim or header value, tagged by JSON shape.
///
/// Distinguishes "present but a different type than requested" from
/// "absent" — the distinction the typed convenience accessors
/// (`get_str`, `get_int`, `get_bool`) deliberately collapse, matching the
/// historical C accessor behavior this crate's surface mirrors.
#[derive(Debug, Clone, PartialEq)]
pub enum ClaimValue {
    String(String),
    Integer(i64),
    Bool(bool),
    Array(Vec<Value>),
    Object(Map<String, Value>),
    /// A JSON value that doesn't fit the above (floats, `null`, or an
    /// integer too wide for `i64`).
    Json(Value),
}

impl From<Value> for ClaimValue {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => ClaimValue::String(s),
            Value::Number(n) if n.is_i64() => ClaimValue::Integer(n.as_i64().unwrap()),
            Value::Bool(b) => ClaimValue::Bool(b),
            Value::Array(a) => ClaimValue::Array(a),
            Value::Object(o) => ClaimValue::Object(o),
            other => ClaimValue::Json(other),
        }
    }
}

impl From<ClaimValue> for Value {
    fn from(value: ClaimValue) -> Self {
        match value {
            ClaimValue::String(s) => Value::String(s),
            ClaimValue::Integer(i) => Value::Number(Number::from(i)),
            ClaimValue::Bool(b) => Value::Bool(b),
            ClaimValue::Array(a) => Value::Array(a),
            ClaimValue::Object(o) => Value::Object(o),
            ClaimValue::Json(v) => v,
        }
    }
}

/// A JSON object of named claims/headers, always well-formed (never an
/// array or scalar at the top level). Insertion order is not observable;
/// `dump_all`/`dump_one` and the token codec always serialize with
/// lexicographically sorted keys.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct ClaimSet {
    members: Map<String, Value>,
}

impl ClaimSet {
    pub fn new() -> Self {
        Self { members: Map::new() }
    }

    pub fn from_map(members: Map<String, Value>) -> Self {
        Self { members }
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, JwtError> {
        Ok(Self::from_map(util::parse_object(bytes)?))
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.members
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    fn check_name(name: &str) -> Result<(), JwtError> {
        if name.is_empty() {
            return Err(JwtError::Invalid(anyhow::anyhow!(
                "a claim/header name must be non-empty"
            )));
        }
        Ok(())
    }

    /// Insert `name` unless it is already present.
    pub fn add(&mut self, name: &str, value: impl Into<Value>) -> Result<(), JwtError> {
        Self::check_name(name)?;
        if self.members.contains_key(name) {
            return Err(JwtError::Exists(name.to_string()));
        }
        self.members.insert(name.to_string(), value.into());
        Ok(())
    }

    pub fn add_str(&mut self, name: &str, value: impl Into<String>) -> Result<(), JwtError> {
        self.add(name, Value::String(value.into()))
    }

    pub fn add_int(&mut self, name: &str, value: i64) -> Result<(), JwtError> {
        self.add(name, Value::Number(Number::from(value)))
    }

    pub fn add_bool(&mut self, name: &str, value: bool) -> Result<(), JwtError> {
        self.add(name, Value::Bool(value))
    }

    /// Parse `json` as a JSON object (rejecting duplicate keys) and merge
    /// its top-level members in, overwriting any existing member of the
    /// same name.
    pub fn add_json(&mut self, json: &str) -> Result<(), JwtError> {
        let parsed = util::parse_object_reject_duplicates(json)?;
        for (key, value) in parsed {
            self.members.insert(key, value);
        }
        Ok(())
    }

    /// Force `name` to `value`, overwriting any prior value. Used
    /// internally by the token codec to synthesize `alg`/`typ`.
    pub(crate) fn set(&mut self, name: &str, value: Value) {
        self.members.insert(name.to_string(), value);
    }

    pub fn get(&self, name: &str) -> Option<ClaimValue> {
        self.members.get(name).cloned().map(ClaimValue::from)
    }

    pub fn get_raw(&self, name: &str) -> Option<&Value> {
        self.members.get(name)
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        match self.members.get(name) {
            Some(Value::String(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    /// An `i64` claim. A JSON number present but out of `i64` range (or
    /// non-integral) is treated the same as absent, per the numeric-range
    /// open question: the caller reads "not an integer claim" rather than
    /// a silently truncated value.
    pub fn get_int(&self, name: &str) -> Option<i64> {
        match self.members.get(name) {
            Some(Value::Number(n)) => n.as_i64(),
            _ => None,
        }
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        match self.members.get(name) {
            Some(Value::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    /// Remove `name` if present. If `name` is `None`, clear every member.
    /// Removing an absent member is not an error.
    pub fn del(&mut self, name: Option<&str>) {
        match name {
            Some(name) if !name.is_empty() => {
                self.members.remove(name);
            }
            _ => self.members.clear(),
        }
    }

    /// Sorted, compact JSON dump of the whole object.
    pub fn dump_all(&self) -> String {
        util::to_canonical_json(&self.members)
    }

    /// Sorted, compact JSON dump of a single member, or `None` if absent.
    /// Sorting applies recursively, so an object or array-of-objects member
    /// comes out with every nested level key-sorted too.
    pub fn dump_one(&self, name: &str) -> Option<String> {
        self.members.get(name).map(util::to_canonical_json_value)
    }
}
