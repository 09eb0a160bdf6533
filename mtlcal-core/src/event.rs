//! Event records as stored in the remote collection.
//!
//! The backing table predates this client and keeps the French column names
//! (`categorie`, `lien`); serde renames bridge them to the field names used
//! everywhere else in the codebase.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An event record returned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Store-assigned identifier. Immutable after creation and the sole
    /// key used for deletion.
    pub id: i64,
    pub name: String,
    /// Calendar date of the event. No time component.
    pub date: NaiveDate,
    #[serde(default)]
    pub description: String,
    /// Discount percentage shown on the event detail, when any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promo: Option<f64>,
    #[serde(rename = "categorie", default)]
    pub category: String,
    #[serde(rename = "lien", default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// A draft event submitted for creation. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewEvent {
    pub name: String,
    pub date: NaiveDate,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promo: Option<f64>,
    #[serde(rename = "categorie")]
    pub category: String,
    #[serde(rename = "lien", skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_store_row_with_french_columns() {
        let row = r#"{
            "id": 7,
            "name": "Soirée jazz",
            "date": "2025-03-05",
            "description": "Quartet au parc",
            "promo": 15,
            "categorie": "musique",
            "lien": "https://example.com/jazz"
        }"#;

        let event: Event = serde_json::from_str(row).unwrap();
        assert_eq!(event.id, 7);
        assert_eq!(event.date, NaiveDate::from_ymd_opt(2025, 3, 5).unwrap());
        assert_eq!(event.category, "musique");
        assert_eq!(event.link.as_deref(), Some("https://example.com/jazz"));
        assert_eq!(event.promo, Some(15.0));
    }

    #[test]
    fn optional_columns_may_be_absent() {
        let row = r#"{"id": 1, "name": "Expo", "date": "2025-06-21"}"#;

        let event: Event = serde_json::from_str(row).unwrap();
        assert_eq!(event.description, "");
        assert_eq!(event.promo, None);
        assert_eq!(event.link, None);
    }

    #[test]
    fn draft_serializes_without_id() {
        let draft = NewEvent {
            name: "Marché de nuit".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 7, 12).unwrap(),
            description: String::new(),
            promo: None,
            category: "marché".to_string(),
            link: None,
        };

        let json = serde_json::to_value(&draft).unwrap();
        assert!(json.get("id").is_none());
        assert!(json.get("categorie").is_some());
        assert!(json.get("category").is_none());
        // Absent optionals are omitted entirely, not sent as null
        assert!(json.get("promo").is_none());
        assert!(json.get("lien").is_none());
    }
}
