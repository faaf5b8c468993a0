use serde::{Deserialize, Serialize};

use crate::utils::{deserialize_some, normalize_currency_code};

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: u32,
    pub username: String,
    pub email: String,
    pub full_name: Option<String>,
    pub balance: f64,
    pub send_currency: String,
    pub receive_currency: String,
    pub two_factor_enabled: bool,
    pub stripe_account_id: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub full_name: Option<String>,
    pub send_currency: Option<String>,
    pub receive_currency: Option<String>,
}

/// What the settings page reads and writes.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    pub send_currency: String,
    pub receive_currency: String,
    pub two_factor_enabled: bool,
    pub stripe_account_id: Option<String>,
}

impl From<&User> for UserPreferences {
    fn from(user: &User) -> Self {
        Self {
            send_currency: user.send_currency.clone(),
            receive_currency: user.receive_currency.clone(),
            two_factor_enabled: user.two_factor_enabled,
            stripe_account_id: user.stripe_account_id.clone(),
        }
    }
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesUpdate {
    #[serde(default)]
    pub send_currency: Option<String>,
    #[serde(default)]
    pub receive_currency: Option<String>,
    #[serde(default)]
    pub two_factor_enabled: Option<bool>,
    /// `null` disconnects Stripe.
    #[serde(default, deserialize_with = "deserialize_some")]
    pub stripe_account_id: Option<Option<String>>,
}

impl PreferencesUpdate {
    pub fn validate(self) -> Result<Self, String> {
        let currency = |field: &str, code: Option<String>| match code {
            Some(code) if code.trim().is_empty() => Err(format!("{} must not be empty", field)),
            Some(code) => Ok(Some(normalize_currency_code(&code))),
            None => Ok(None),
        };
        Ok(Self {
            send_currency: currency("sendCurrency", self.send_currency)?,
            receive_currency: currency("receiveCurrency", self.receive_currency)?,
            ..self
        })
    }

    pub fn apply(self, user: &mut User) {
        if let Some(code) = self.send_currency {
            user.send_currency = code;
        }
        if let Some(code) = self.receive_currency {
            user.receive_currency = code;
        }
        if let Some(enabled) = self.two_factor_enabled {
            user.two_factor_enabled = enabled;
        }
        if let Some(account) = self.stripe_account_id {
            user.stripe_account_id = account;
        }
    }
}
