pub mod converter;
pub mod rate_table;
pub mod token_registry;

use serde::{Deserialize, Deserializer};
use std::num::{ParseFloatError, ParseIntError};

pub fn parse_f64(input: &str) -> Result<f64, ParseFloatError> {
    input.trim().parse::<f64>()
}

pub fn parse_id(input: &str) -> Result<u32, ParseIntError> {
    input.trim().parse::<u32>()
}

pub fn normalize_currency_code(code: &str) -> String {
    code.trim().to_uppercase()
}

/// Treats absent and whitespace-only query values the same way.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Lets an `Option<Option<T>>` field tell "absent" (`None`) apart from an
/// explicit JSON `null` (`Some(None)`). Pair with `#[serde(default)]`.
pub fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}
