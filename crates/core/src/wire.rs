//! Serde helpers for loosely-typed backend fields.
//!
//! Several endpoints return booleans as `"true"`/`"false"` and numbers as
//! decimal strings. These helpers accept either representation.

use serde::de::{self, Deserializer};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum BoolLike {
    Bool(bool),
    Str(String),
    Num(i64),
}

/// Deserialize a bool that may arrive as a JSON bool, string or 0/1.
pub fn bool_or_string<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<BoolLike>::deserialize(deserializer)? {
        None => Ok(false),
        Some(BoolLike::Bool(b)) => Ok(b),
        Some(BoolLike::Num(n)) => Ok(n != 0),
        Some(BoolLike::Str(s)) => match s.trim() {
            "true" | "1" => Ok(true),
            "false" | "0" | "" => Ok(false),
            other => Err(de::Error::custom(format!("expected boolean, got {other:?}"))),
        },
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberLike {
    Num(f64),
    Str(String),
}

/// Deserialize a number that may arrive as a JSON number or decimal string.
/// Null and empty strings become `0.0`.
pub fn number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberLike>::deserialize(deserializer)? {
        None => Ok(0.0),
        Some(NumberLike::Num(n)) => Ok(n),
        Some(NumberLike::Str(s)) if s.trim().is_empty() => Ok(0.0),
        Some(NumberLike::Str(s)) => s
            .trim()
            .parse::<f64>()
            .map_err(|e| de::Error::custom(format!("invalid number {s:?}: {e}"))),
    }
}

/// Parse a loose numeric string (usage values are free text on the wire).
pub fn parse_number(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "bool_or_string")]
        flag: bool,
        #[serde(default, deserialize_with = "number_or_string")]
        cost: f64,
    }

    #[test]
    fn accepts_both_representations() {
        let a: Probe = serde_json::from_str(r#"{"flag":"true","cost":"12.5"}"#).unwrap();
        assert!(a.flag);
        assert_eq!(a.cost, 12.5);

        let b: Probe = serde_json::from_str(r#"{"flag":false,"cost":3}"#).unwrap();
        assert!(!b.flag);
        assert_eq!(b.cost, 3.0);

        let c: Probe = serde_json::from_str(r#"{"flag":null,"cost":null}"#).unwrap();
        assert!(!c.flag);
        assert_eq!(c.cost, 0.0);
    }

    #[test]
    fn rejects_garbage_booleans() {
        assert!(serde_json::from_str::<Probe>(r#"{"flag":"maybe"}"#).is_err());
    }

    #[test]
    fn parse_number_ignores_text() {
        assert_eq!(parse_number(" 4.5 "), Some(4.5));
        assert_eq!(parse_number("n/a"), None);
    }
}
