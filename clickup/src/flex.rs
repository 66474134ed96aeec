//! Valores que a API devolve ora como número, ora como string
//!
//! Ex.: `{"id": 123}` e `{"id": "123"}` em comentários e time entries.
//! O modelo guarda sempre a forma textual canônica.

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Identificador que aceita número ou string JSON
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct FlexId(String);

impl FlexId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for FlexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FlexId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for FlexId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<u64> for FlexId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl AsRef<str> for FlexId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<&str> for FlexId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl Serialize for FlexId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// Floats integrais (`123.0`) viram `"123"`; os demais mantêm a forma natural
fn float_to_string(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 9_007_199_254_740_992.0 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

struct FlexIdVisitor;

impl<'de> Visitor<'de> for FlexIdVisitor {
    type Value = FlexId;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a string or a number")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<FlexId, E> {
        Ok(FlexId(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<FlexId, E> {
        Ok(FlexId(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<FlexId, E> {
        Ok(FlexId(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<FlexId, E> {
        Ok(FlexId(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<FlexId, E> {
        Ok(FlexId(float_to_string(v)))
    }
}

impl<'de> Deserialize<'de> for FlexId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(FlexIdVisitor)
    }
}

/// Deserializer para inteiros que chegam como número, string numérica ou null
///
/// Uso: `#[serde(default, deserialize_with = "flex::opt_i64")]`
pub fn opt_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    struct OptI64Visitor;

    impl<'de> Visitor<'de> for OptI64Visitor {
        type Value = Option<i64>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("an integer, a numeric string or null")
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<Self::Value, D::Error> {
            d.deserialize_any(self)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            Ok(Some(v))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            i64::try_from(v).map(Some).map_err(E::custom)
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
            Ok(Some(v as i64))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            let trimmed = v.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .parse::<i64>()
                .map(Some)
                .map_err(|_| E::invalid_value(de::Unexpected::Str(v), &self))
        }
    }

    deserializer.deserialize_option(OptI64Visitor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Comment {
        id: FlexId,
    }

    #[derive(Debug, Deserialize)]
    struct Entry {
        #[serde(default, deserialize_with = "opt_i64")]
        duration: Option<i64>,
    }

    #[test]
    fn test_number_and_string_ids_are_equal() {
        let from_number: Comment = serde_json::from_str(r#"{"id": 123}"#).unwrap();
        let from_string: Comment = serde_json::from_str(r#"{"id": "123"}"#).unwrap();

        assert_eq!(from_number.id, from_string.id);
        assert_eq!(from_number.id.to_string(), "123");
    }

    #[test]
    fn test_negative_and_float_ids() {
        let negative: Comment = serde_json::from_str(r#"{"id": -42}"#).unwrap();
        assert_eq!(negative.id.as_str(), "-42");

        let integral: Comment = serde_json::from_str(r#"{"id": 90.0}"#).unwrap();
        assert_eq!(integral.id.as_str(), "90");
    }

    #[test]
    fn test_id_serializes_as_string() {
        let id = FlexId::from(77u64);
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""77""#);
    }

    #[test]
    fn test_rejects_objects() {
        let result: Result<Comment, _> = serde_json::from_str(r#"{"id": {"x": 1}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_opt_i64_accepts_all_forms() {
        let e: Entry = serde_json::from_str(r#"{"duration": "-1700000000000"}"#).unwrap();
        assert_eq!(e.duration, Some(-1_700_000_000_000));

        let e: Entry = serde_json::from_str(r#"{"duration": 3600000}"#).unwrap();
        assert_eq!(e.duration, Some(3_600_000));

        let e: Entry = serde_json::from_str(r#"{"duration": null}"#).unwrap();
        assert_eq!(e.duration, None);

        let e: Entry = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(e.duration, None);
    }

    #[test]
    fn test_opt_i64_rejects_garbage() {
        let result: Result<Entry, _> = serde_json::from_str(r#"{"duration": "soon"}"#);
        assert!(result.is_err());
    }
}
