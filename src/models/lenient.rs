//! Lenient field deserializers for attendance and rate rows.
//!
//! Rows arrive from a loosely typed store: ids may be numbers or strings,
//! deductions and rates may be numeric strings, null, or garbage. Numeric
//! fields degrade to zero instead of rejecting the whole batch.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::de::{Error, IgnoredAny};
use serde::{Deserialize, Deserializer};

use super::rate::clamp_rate;

/// Any scalar the store might hand us.
#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Int(i64),
    Float(f64),
    Text(String),
    Other(IgnoredAny),
}

/// An identifier given as a string or an integer.
pub(crate) fn opaque_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Loose::deserialize(deserializer)? {
        Loose::Int(n) => Ok(n.to_string()),
        Loose::Text(s) => Ok(s),
        Loose::Float(_) | Loose::Other(_) => {
            Err(D::Error::custom("identifier must be a string or an integer"))
        }
    }
}

/// An optional identifier; null and unusable values become `None`.
pub(crate) fn optional_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Loose>::deserialize(deserializer)? {
        Some(Loose::Int(n)) => Some(n.to_string()),
        Some(Loose::Text(s)) if !s.trim().is_empty() => Some(s),
        _ => None,
    })
}

/// A time-of-day kept as raw text so the engine can diagnose it.
///
/// Numbers are kept (stringified) and later fail parsing with a warning.
pub(crate) fn time_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Loose>::deserialize(deserializer)? {
        Some(Loose::Text(s)) => Some(s),
        Some(Loose::Int(n)) => Some(n.to_string()),
        Some(Loose::Float(f)) => Some(f.to_string()),
        Some(Loose::Other(_)) | None => None,
    })
}

/// Whole minutes; negative, null and non-numeric values become 0.
pub(crate) fn minutes<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Loose>::deserialize(deserializer)? {
        Some(Loose::Int(n)) => clamp_minutes(n),
        Some(Loose::Float(f)) => float_minutes(f),
        Some(Loose::Text(s)) => parse_minutes(&s),
        Some(Loose::Other(_)) | None => 0,
    })
}

/// A non-negative decimal; negative, null and non-numeric values become 0.
pub(crate) fn non_negative_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match Option::<Loose>::deserialize(deserializer)? {
        Some(Loose::Int(n)) => Decimal::from(n),
        Some(Loose::Float(f)) => Decimal::from_f64(f).unwrap_or(Decimal::ZERO),
        Some(Loose::Text(s)) => parse_decimal(&s),
        Some(Loose::Other(_)) | None => Decimal::ZERO,
    };
    Ok(value.max(Decimal::ZERO))
}

/// An hourly rate: a non-negative decimal capped at
/// [`MAX_HOURLY_RATE`](super::rate::MAX_HOURLY_RATE).
pub(crate) fn hourly_rate<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    non_negative_decimal(deserializer).map(clamp_rate)
}

fn clamp_minutes(n: i64) -> u32 {
    u32::try_from(n.max(0)).unwrap_or(u32::MAX)
}

fn float_minutes(f: f64) -> u32 {
    if f.is_finite() && f > 0.0 {
        // `as` saturates at u32::MAX.
        f.trunc() as u32
    } else {
        0
    }
}

fn parse_minutes(s: &str) -> u32 {
    let s = s.trim();
    if let Ok(n) = s.parse::<i64>() {
        clamp_minutes(n)
    } else if let Ok(f) = s.parse::<f64>() {
        float_minutes(f)
    } else {
        0
    }
}

fn parse_decimal(s: &str) -> Decimal {
    let s = s.trim();
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Row {
        #[serde(deserialize_with = "opaque_id")]
        id: String,
        #[serde(default, deserialize_with = "optional_id")]
        site: Option<String>,
        #[serde(default, deserialize_with = "time_text")]
        start: Option<String>,
        #[serde(default, deserialize_with = "minutes")]
        deduction: u32,
        #[serde(default, deserialize_with = "non_negative_decimal")]
        rate: Decimal,
    }

    fn row(json: &str) -> Row {
        serde_json::from_str(json).unwrap()
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_numeric_id_is_stringified() {
        assert_eq!(row(r#"{"id": 42}"#).id, "42");
        assert_eq!(row(r#"{"id": "emp_7"}"#).id, "emp_7");
    }

    #[test]
    fn test_missing_id_is_an_error() {
        assert!(serde_json::from_str::<Row>(r#"{"deduction": 30}"#).is_err());
    }

    #[test]
    fn test_object_id_is_an_error() {
        assert!(serde_json::from_str::<Row>(r#"{"id": {"x": 1}}"#).is_err());
    }

    #[test]
    fn test_blank_site_is_none() {
        assert_eq!(row(r#"{"id": "a", "site": "  "}"#).site, None);
        assert_eq!(row(r#"{"id": "a", "site": null}"#).site, None);
        assert_eq!(row(r#"{"id": "a", "site": 9}"#).site, Some("9".to_string()));
    }

    #[test]
    fn test_time_text_keeps_raw_values() {
        assert_eq!(
            row(r#"{"id": "a", "start": "08:00"}"#).start,
            Some("08:00".to_string())
        );
        assert_eq!(row(r#"{"id": "a", "start": 800}"#).start, Some("800".to_string()));
        assert_eq!(row(r#"{"id": "a", "start": null}"#).start, None);
        assert_eq!(row(r#"{"id": "a"}"#).start, None);
    }

    #[test]
    fn test_deduction_defaults_to_zero() {
        assert_eq!(row(r#"{"id": "a"}"#).deduction, 0);
        assert_eq!(row(r#"{"id": "a", "deduction": null}"#).deduction, 0);
        assert_eq!(row(r#"{"id": "a", "deduction": "abc"}"#).deduction, 0);
        assert_eq!(row(r#"{"id": "a", "deduction": -15}"#).deduction, 0);
        assert_eq!(row(r#"{"id": "a", "deduction": [1, 2]}"#).deduction, 0);
    }

    #[test]
    fn test_deduction_accepts_numeric_strings_and_floats() {
        assert_eq!(row(r#"{"id": "a", "deduction": "30"}"#).deduction, 30);
        assert_eq!(row(r#"{"id": "a", "deduction": " 45 "}"#).deduction, 45);
        assert_eq!(row(r#"{"id": "a", "deduction": 30.0}"#).deduction, 30);
        assert_eq!(row(r#"{"id": "a", "deduction": "15.9"}"#).deduction, 15);
    }

    #[test]
    fn test_rate_parsing() {
        assert_eq!(row(r#"{"id": "a", "rate": 20}"#).rate, dec("20"));
        assert_eq!(row(r#"{"id": "a", "rate": 27.5}"#).rate, dec("27.5"));
        assert_eq!(row(r#"{"id": "a", "rate": "31.25"}"#).rate, dec("31.25"));
        assert_eq!(row(r#"{"id": "a", "rate": "n/a"}"#).rate, Decimal::ZERO);
        assert_eq!(row(r#"{"id": "a", "rate": -5}"#).rate, Decimal::ZERO);
        assert_eq!(row(r#"{"id": "a"}"#).rate, Decimal::ZERO);
    }
}
