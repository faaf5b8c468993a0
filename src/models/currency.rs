use serde::{Deserialize, Serialize};

use crate::{
    error::ConversionError,
    utils::{non_blank, normalize_currency_code, parse_f64},
};

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TokenMetadata {
    pub address: &'static str,
    pub decimals: u8,
    pub symbol: &'static str,
    pub name: &'static str,
}

/// Raw `/currency/convert` query string, before any validation.
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ConversionQuery {
    pub from: Option<String>,
    pub to: Option<String>,
    pub amount: Option<String>,
    pub network_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub from: String,
    pub to: String,
    pub amount: f64,
    pub network_id: Option<String>,
}

impl ConversionQuery {
    pub fn validate(self) -> Result<ConversionRequest, ConversionError> {
        let (from, to, amount) = match (
            non_blank(self.from),
            non_blank(self.to),
            non_blank(self.amount),
        ) {
            (Some(from), Some(to), Some(amount)) => (from, to, amount),
            _ => return Err(ConversionError::MissingParameter),
        };

        let amount = parse_f64(&amount).map_err(|_| ConversionError::InvalidAmount)?;
        if !amount.is_finite() || amount <= 0.0 {
            return Err(ConversionError::InvalidAmount);
        }

        Ok(ConversionRequest {
            from: normalize_currency_code(&from),
            to: normalize_currency_code(&to),
            amount,
            network_id: non_blank(self.network_id).map(|id| id.trim().to_string()),
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult {
    pub from: String,
    pub to: String,
    pub amount: f64,
    pub result: f64,
    pub rate: f64,
    pub network_id: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub from_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub to_address: Option<String>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct NetworkCurrency {
    pub currency: &'static str,
    pub rate: Option<f64>,
    pub token: Option<&'static TokenMetadata>,
}
