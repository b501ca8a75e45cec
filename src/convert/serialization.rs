// ============================================================================
// Serde Support
// ============================================================================
//
// Human-readable formats carry the plain text form and accept strings,
// integers and floats on the way in. Binary formats carry the raw word,
// which must be canonical to deserialize.

use crate::numeric::Decimal64;
use bigdecimal::BigDecimal;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

impl Serialize for Decimal64 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if serializer.is_human_readable() {
            serializer.collect_str(self)
        } else {
            serializer.serialize_i64(self.raw_value())
        }
    }
}

impl<'de> Deserialize<'de> for Decimal64 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        if deserializer.is_human_readable() {
            deserializer.deserialize_any(Decimal64Visitor)
        } else {
            let value = Decimal64::from_raw(i64::deserialize(deserializer)?);
            value.validate().map_err(de::Error::custom)?;
            Ok(value)
        }
    }
}

struct Decimal64Visitor;

impl<'de> Visitor<'de> for Decimal64Visitor {
    type Value = Decimal64;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a decimal number as a string, integer or float")
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Decimal64::from_i64(value))
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        match i64::try_from(value) {
            Ok(value) => Ok(Decimal64::from_i64(value)),
            Err(_) => Ok(Decimal64::from_big_decimal(&BigDecimal::from(value))),
        }
    }

    fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Decimal64::from_f64(value))
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        value.parse().map_err(E::custom)
    }
}
