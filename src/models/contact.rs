use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::deserialize_some;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: u32,
    pub user_id: u32,
    pub name: String,
    pub email: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub notes: Option<String>,
    pub favorite: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewContact {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub favorite: Option<bool>,
}

impl NewContact {
    pub fn validate(mut self) -> Result<Self, String> {
        if self.name.trim().is_empty() {
            return Err("name is required".to_string());
        }
        self.name = self.name.trim().to_string();
        Ok(self)
    }
}

/// Partial update. Nullable fields distinguish "leave as is" from an explicit `null`.
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ContactUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub email: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub address: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub phone: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub notes: Option<Option<String>>,
    #[serde(default)]
    pub favorite: Option<bool>,
}

impl ContactUpdate {
    pub fn validate(mut self) -> Result<Self, String> {
        if let Some(name) = self.name.take() {
            if name.trim().is_empty() {
                return Err("name must not be empty".to_string());
            }
            self.name = Some(name.trim().to_string());
        }
        Ok(self)
    }

    pub fn apply(self, contact: &mut Contact) {
        if let Some(name) = self.name {
            contact.name = name;
        }
        if let Some(email) = self.email {
            contact.email = email;
        }
        if let Some(address) = self.address {
            contact.address = address;
        }
        if let Some(phone) = self.phone {
            contact.phone = phone;
        }
        if let Some(notes) = self.notes {
            contact.notes = notes;
        }
        if let Some(favorite) = self.favorite {
            contact.favorite = favorite;
        }
    }
}
