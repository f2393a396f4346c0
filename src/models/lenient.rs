//! Tolerant field deserializers for upstream and client supplied JSON.
//!
//! The PSA API is not strict about scalar types (`"Year": 1999` and
//! `"Year": "1999"` both occur) and the front-end posts whatever it got back
//! from a lookup. Each helper accepts any JSON scalar and falls back to the
//! type's default for `null` or values it cannot interpret.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub fn string<'de, D: Deserializer<'de>>(de: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(de)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

pub fn integer<'de, D: Deserializer<'de>>(de: D) -> Result<i64, D::Error> {
    Ok(match Value::deserialize(de)? {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f as i64))
            .unwrap_or(0),
        Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    })
}

pub fn boolean<'de, D: Deserializer<'de>>(de: D) -> Result<bool, D::Error> {
    Ok(match Value::deserialize(de)? {
        Value::Bool(b) => b,
        Value::String(s) => s.trim().eq_ignore_ascii_case("true"),
        _ => false,
    })
}

/// Only a real JSON boolean counts; anything else is "unset".
///
/// `1` and `0` are deliberately not read as `true`/`false`: the image flag
/// is a boolean and numeric values are treated like any other stray type.
pub fn flag<'de, D: Deserializer<'de>>(de: D) -> Result<Option<bool>, D::Error> {
    Ok(match Value::deserialize(de)? {
        Value::Bool(b) => Some(b),
        _ => None,
    })
}

/// Numeric coercion for money fields: numbers and numeric strings pass,
/// everything else (including NaN/inf) becomes `0.0`.
pub fn number<'de, D: Deserializer<'de>>(de: D) -> Result<f64, D::Error> {
    let parsed = match Value::deserialize(de)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    Ok(parsed.filter(|f| f.is_finite()).unwrap_or(0.0))
}

/// A JSON array whose elements are decoded one by one. Elements that do not
/// decode as `T` (`null`, bare strings, numbers) are skipped; a non-array
/// value is still an error.
pub fn elements<'de, D, T>(de: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(Vec::<Value>::deserialize(de)?
        .into_iter()
        .filter_map(|v| T::deserialize(v).ok())
        .collect())
}
