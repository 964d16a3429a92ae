use serde::de::{self, Visitor};
use serde::Deserializer;
use serde_derive::*;
use std::convert::TryFrom;
use std::fmt;

/// Trade payload as submitted by the caller, without id.
///
/// Numeric fields accept any numeric-like input: JSON numbers and
/// plain numeric strings for the OHLC prices, and additionally strings
/// with thousands separators for the volume ("1,234" coerces to 1234).
/// A field that cannot be coerced fails payload deserialization, so
/// the request is rejected before any store call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeIn {
    pub trade_code: String,
    pub date: String,
    #[serde(deserialize_with = "de_f64")]
    pub open: f64,
    #[serde(deserialize_with = "de_f64")]
    pub high: f64,
    #[serde(deserialize_with = "de_f64")]
    pub low: f64,
    #[serde(deserialize_with = "de_f64")]
    pub close: f64,
    #[serde(deserialize_with = "de_volume")]
    pub volume: i64,
}

impl TradeIn {
    /// normalize before write: trade codes are stored upper-cased
    pub fn clean(mut self) -> TradeIn {
        self.trade_code = self.trade_code.to_uppercase();
        self
    }
}

/// stored trade record, id assigned by the external store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeOut {
    pub id: i64,
    #[serde(flatten)]
    pub trade: TradeIn,
}

struct F64Visitor;

impl<'de> Visitor<'de> for F64Visitor {
    type Value = f64;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a number or a string holding a number")
    }

    fn visit_i64<E>(self, v: i64) -> Result<f64, E> {
        Ok(v as f64)
    }

    fn visit_u64<E>(self, v: u64) -> Result<f64, E> {
        Ok(v as f64)
    }

    fn visit_f64<E>(self, v: f64) -> Result<f64, E> {
        Ok(v)
    }

    fn visit_str<E>(self, s: &str) -> Result<f64, E>
    where
        E: de::Error,
    {
        s.trim()
            .parse::<f64>()
            .map_err(|_| E::custom(format!("invalid number: {}", s)))
    }
}

fn de_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(F64Visitor)
}

struct VolumeVisitor;

impl<'de> Visitor<'de> for VolumeVisitor {
    type Value = i64;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an integer or a string holding an integer, thousands separators allowed")
    }

    fn visit_i64<E>(self, v: i64) -> Result<i64, E> {
        Ok(v)
    }

    fn visit_u64<E>(self, v: u64) -> Result<i64, E>
    where
        E: de::Error,
    {
        i64::try_from(v).map_err(|_| E::custom(format!("volume out of range: {}", v)))
    }

    // floats are truncated
    fn visit_f64<E>(self, v: f64) -> Result<i64, E> {
        Ok(v as i64)
    }

    fn visit_str<E>(self, s: &str) -> Result<i64, E>
    where
        E: de::Error,
    {
        s.trim()
            .replace(',', "")
            .parse::<i64>()
            .map_err(|_| E::custom(format!("invalid volume: {}", s)))
    }
}

fn de_volume<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(VolumeVisitor)
}
