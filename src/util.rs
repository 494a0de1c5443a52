//! Base64url (RFC 4648 §5, no padding) codec and small JSON helpers shared
//! by the header/claim DOM, the token codec, and the validator.

use std::fmt;

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde_json::{Map, Value};

use crate::error::JwtError;

/// Encode `data` as base64url without padding.
pub fn b64_encode(data: impl AsRef<[u8]>) -> String {
    base64::encode_config(data, base64::URL_SAFE_NO_PAD)
}

/// Decode a base64url (no padding) string.
///
/// Rejects any character outside `A-Za-z0-9-_` and any input whose length
/// is impossible to pad to a multiple of four (`len % 4 == 1`).
pub fn b64_decode(input: impl AsRef<str>) -> Result<Vec<u8>, JwtError> {
    let input = input.as_ref();

    if input.len() % 4 == 1 {
        return Err(JwtError::BadEncoding(anyhow::anyhow!(
            "base64url input has an impossible length: {}",
            input.len()
        )));
    }

    for c in input.chars() {
        if !(c.is_ascii_alphanumeric() || c == '-' || c == '_') {
            return Err(JwtError::BadEncoding(anyhow::anyhow!(
                "base64url input contains an invalid character: {:?}",
                c
            )));
        }
    }

    let bytes = base64::decode_config(input, base64::URL_SAFE_NO_PAD)?;
    Ok(bytes)
}

/// Recursively sort the keys of every nested object in `value` (objects
/// inside arrays included), leaving scalars and array element order
/// untouched. Mirrors jansson's `JSON_SORT_KEYS`, which sorts at every
/// nesting level, not just the top one.
fn sort_value(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut sorted = Map::new();
            let ordered: std::collections::BTreeMap<&String, &Value> = map.iter().collect();
            for (key, nested) in ordered {
                sorted.insert(key.clone(), sort_value(nested));
            }
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.iter().map(sort_value).collect()),
        other => other.clone(),
    }
}

/// Serialize a JSON object with lexicographically sorted keys at every
/// nesting level and no extra whitespace, matching the deterministic
/// compact form required by signing/verification and by the `*_json` dump
/// accessors.
pub fn to_canonical_json(object: &Map<String, Value>) -> String {
    let sorted = sort_value(&Value::Object(object.clone()));
    serde_json::to_string(&sorted).expect("a recursively-sorted Value always serializes")
}

/// Same as `to_canonical_json` but for a single value rather than a whole
/// object, for dump accessors that return one member at a time.
pub fn to_canonical_json_value(value: &Value) -> String {
    serde_json::to_string(&sort_value(value)).expect("a recursively-sorted Value always serializes")
}

/// Parse `input` as a JSON object, rejecting duplicate top-level keys.
///
/// `serde_json::Map` silently keeps the last value on a duplicate key
/// during ordinary deserialization, so this walks the object with a custom
/// `Visitor` that errors out as soon as a repeated key is seen.
pub fn parse_object_reject_duplicates(input: &str) -> Result<Map<String, Value>, JwtError> {
    struct NoDupObject;

    impl<'de> Visitor<'de> for NoDupObject {
        type Value = Map<String, Value>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a JSON object with no duplicate keys")
        }

        fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut map = Map::new();
            while let Some((key, value)) = access.next_entry::<String, Value>()? {
                if map.insert(key.clone(), value).is_some() {
                    return Err(de::Error::custom(format!("duplicate key: {}", key)));
                }
            }
            Ok(map)
        }
    }

    let mut de = serde_json::Deserializer::from_str(input);
    let map = de.deserialize_map(NoDupObject).map_err(|err| {
        JwtError::Invalid(anyhow::anyhow!("not a well-formed JSON object: {}", err))
    })?;
    de.end()
        .map_err(|err| JwtError::Invalid(anyhow::anyhow!("trailing JSON content: {}", err)))?;
    Ok(map)
}

/// Parse `input` as an arbitrary JSON object (duplicates allowed, last
/// value wins) — used for header/claim bytes that already went through
/// base64url decoding at a token boundary the caller doesn't construct by
/// hand.
pub fn parse_object(input: &[u8]) -> Result<Map<String, Value>, JwtError> {
    match serde_json::from_slice::<Value>(input) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(JwtError::BadToken(anyhow::anyhow!(
            "JSON value is not an object"
        ))),
        Err(err) => Err(JwtError::BadToken(err.into())),
    }
}
