use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::normalize_currency_code;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Send,
    Receive,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    #[default]
    Pending,
    Completed,
    Failed,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: f64,
    pub recipient: String,
    pub note: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub status: TransactionStatus,
    pub currency: String,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: f64,
    pub recipient: String,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub status: Option<TransactionStatus>,
    #[serde(default)]
    pub currency: Option<String>,
}

impl NewTransaction {
    /// Checks the fields serde cannot and normalizes the currency code.
    pub fn validate(mut self) -> Result<Self, String> {
        if !self.amount.is_finite() || self.amount <= 0.0 {
            return Err("amount must be a positive number".to_string());
        }
        if self.recipient.trim().is_empty() {
            return Err("recipient is required".to_string());
        }
        self.recipient = self.recipient.trim().to_string();
        self.currency = match self.currency.take() {
            Some(code) if code.trim().is_empty() => {
                return Err("currency must not be empty".to_string())
            }
            Some(code) => Some(normalize_currency_code(&code)),
            None => None,
        };
        Ok(self)
    }
}

#[derive(Deserialize, Debug, Clone, Copy)]
pub struct StatusUpdate {
    pub status: TransactionStatus,
}
