//! Rust structs that represent the account entity and its wire payloads.
//!
//! `Account` is the persisted record as it is stored in and retrieved from
//! the backing table. `AccountData` is the API-facing payload shape, kept
//! separate so that requests can never smuggle in an `id` and so that the
//! schema check can report every missing or invalid field at once.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A stored account record.
///
/// `id` is `None` only for values that have not been persisted yet; every
/// record returned by a store carries its assigned id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Account {
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    pub address: String,
    pub phone_number: String,
    pub date_joined: NaiveDate,
}

/// Incoming payload for create and update requests.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AccountData {
    #[validate(
        required(message = "Name is required"),
        length(min = 1, message = "Name must not be empty")
    )]
    pub name: Option<String>,

    #[validate(required(message = "Email is required"))]
    pub email: Option<String>,

    #[serde(default)]
    pub address: String,

    #[serde(default)]
    pub phone_number: String,

    pub date_joined: Option<NaiveDate>,
}

impl AccountData {
    /// Builds the account value this payload describes.
    ///
    /// The caller decides the identity: `None` for a record that is about to
    /// be created, `Some(id)` for a replacement of an existing record. An
    /// absent `date_joined` falls back to the current date.
    pub fn into_account(self, id: Option<i64>) -> Account {
        Account {
            id,
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            address: self.address,
            phone_number: self.phone_number,
            date_joined: self.date_joined.unwrap_or_else(|| Utc::now().date_naive()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_serializes_with_iso_date() {
        let account = Account {
            id: Some(7),
            name: "John Doe".to_string(),
            email: "john@doe.com".to_string(),
            address: "123 Main Street".to_string(),
            phone_number: "555-1212".to_string(),
            date_joined: NaiveDate::from_ymd_opt(2020, 1, 15).unwrap(),
        };

        let value = serde_json::to_value(&account).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["name"], "John Doe");
        assert_eq!(value["date_joined"], "2020-01-15");
    }

    #[test]
    fn payload_fills_defaults() {
        let payload: AccountData =
            serde_json::from_value(serde_json::json!({"name": "Jo", "email": "jo@x.com"})).unwrap();

        let account = payload.into_account(None);
        assert_eq!(account.id, None);
        assert_eq!(account.address, "");
        assert_eq!(account.phone_number, "");
        assert_eq!(account.date_joined, Utc::now().date_naive());
    }

    #[test]
    fn payload_keeps_identity_it_is_given() {
        let payload: AccountData = serde_json::from_value(serde_json::json!({
            "name": "Jo",
            "email": "jo@x.com",
            "date_joined": "2019-06-01"
        }))
        .unwrap();

        let account = payload.into_account(Some(42));
        assert_eq!(account.id, Some(42));
        assert_eq!(
            account.date_joined,
            NaiveDate::from_ymd_opt(2019, 6, 1).unwrap()
        );
    }

    #[test]
    fn missing_fields_are_each_reported() {
        let payload: AccountData = serde_json::from_value(serde_json::json!({})).unwrap();

        let errors = payload.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("email"));
    }

    #[test]
    fn empty_name_is_invalid() {
        let payload: AccountData =
            serde_json::from_value(serde_json::json!({"name": "", "email": "jo@x.com"})).unwrap();

        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn non_object_json_is_not_a_payload() {
        let result: Result<AccountData, _> =
            serde_json::from_value(serde_json::json!("just a string"));
        assert!(result.is_err());

        let result: Result<AccountData, _> = serde_json::from_value(serde_json::json!([1, 2, 3]));
        assert!(result.is_err());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let payload: AccountData = serde_json::from_value(serde_json::json!({
            "name": "Jo",
            "email": "jo@x.com",
            "id": 99,
            "favorite_color": "green"
        }))
        .unwrap();

        // A payload can never smuggle in an identity of its own
        let account = payload.into_account(None);
        assert_eq!(account.id, None);
        assert_eq!(account.name, "Jo");
    }
}
