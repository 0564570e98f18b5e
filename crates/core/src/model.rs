//! Domain models for the VietCal backend
//!
//! Field names follow the stored document shape in the `foods` collection,
//! so the serde renames here are the wire contract shared with the mobile
//! client.

use crate::validation::{ValidationResult, Validator};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A food nutrition record, keyed by `id` in the `foods` collection.
///
/// Macros are per 100g. `created_at` is server-assigned on first write and
/// never overwritten by later upserts, so it is not part of the input shape
/// a caller constructs; it appears only when reading documents back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionRecord {
    /// Stable document key. Must be non-empty.
    pub id: String,
    /// Display name, e.g. "Phở bò".
    pub name: String,
    /// Kilocalories per 100g.
    pub kcal_per_100g: f64,
    /// Protein grams per 100g.
    pub protein_g: f64,
    /// Carbohydrate grams per 100g.
    pub carb_g: f64,
    /// Fat grams per 100g.
    pub fat_g: f64,
    /// Free-form labels; order is irrelevant.
    #[serde(default)]
    pub tags: BTreeSet<String>,
    /// Image URL. Absent when unset; an empty string is normalized away
    /// before writes so a re-seed never clobbers an image set elsewhere.
    #[serde(rename = "imageUrl", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Server-assigned first-write timestamp. Stable across re-seeds.
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl NutritionRecord {
    /// Create a record with the given key, name, and macros.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        kcal_per_100g: f64,
        protein_g: f64,
        carb_g: f64,
        fat_g: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kcal_per_100g,
            protein_g,
            carb_g,
            fat_g,
            tags: BTreeSet::new(),
            image_url: None,
            created_at: None,
        }
    }

    /// Add tags to the record.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Set the image URL.
    #[must_use]
    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    /// Map an empty image URL to absent. Merge writes only touch supplied
    /// fields, so an absent URL leaves any stored value untouched.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        if self.image_url.as_deref() == Some("") {
            self.image_url = None;
        }
        self
    }

    /// Validate the record's fields.
    ///
    /// An empty `id` and negative or non-finite macros are errors. Violations
    /// are reported as values; nothing here aborts a batch.
    pub fn validate(&self) -> ValidationResult {
        Validator::new()
            .required("id", &self.id)
            .non_negative("kcal_per_100g", self.kcal_per_100g)
            .non_negative("protein_g", self.protein_g)
            .non_negative("carb_g", self.carb_g)
            .non_negative("fat_g", self.fat_g)
            .finish()
    }
}

/// A push notification addressed to a topic.
///
/// Ephemeral: exists only for the duration of one dispatch call and is never
/// persisted. An empty topic falls back to the dispatcher's configured
/// default before sending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationMessage {
    /// Broadcast channel name. Empty means "use the configured default".
    #[serde(default)]
    pub topic: String,
    /// Notification title shown to subscribers.
    pub title: String,
    /// Notification body shown to subscribers.
    pub body: String,
}

impl NotificationMessage {
    /// Create a message for the given topic.
    pub fn new(
        topic: impl Into<String>,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            topic: topic.into(),
            title: title.into(),
            body: body.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serializes_wire_names() {
        let record = NutritionRecord::new("pho", "Phở bò", 120.0, 7.0, 10.0, 4.0)
            .with_tags(["soup", "beef"])
            .with_image_url("https://cdn.vietcal.app/pho.jpg");

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["id"], "pho");
        assert_eq!(json["kcal_per_100g"], 120.0);
        assert_eq!(json["imageUrl"], "https://cdn.vietcal.app/pho.jpg");
        assert!(json.get("createdAt").is_none());
    }

    #[test]
    fn test_normalized_drops_empty_image_url() {
        let record = NutritionRecord::new("ga", "Gà luộc", 165.0, 31.0, 0.0, 4.0)
            .with_image_url("")
            .normalized();
        assert_eq!(record.image_url, None);

        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("imageUrl").is_none());
    }

    #[test]
    fn test_validate_rejects_empty_id() {
        let record = NutritionRecord::new("", "Mystery", 100.0, 1.0, 1.0, 1.0);
        let result = record.validate();
        assert!(!result.is_valid());
        assert_eq!(result.errors()[0].field, "id");
    }

    #[test]
    fn test_validate_rejects_negative_macros() {
        let record = NutritionRecord::new("bad", "Bad", -1.0, 1.0, 1.0, 1.0);
        assert!(!record.validate().is_valid());
    }

    #[test]
    fn test_tags_deduplicate() {
        let record =
            NutritionRecord::new("xoi", "Xôi", 200.0, 5.0, 45.0, 2.0).with_tags(["rice", "rice"]);
        assert_eq!(record.tags.len(), 1);
    }

    #[test]
    fn test_message_roundtrip() {
        let msg = NotificationMessage::new("general", "T", "B");
        let json = serde_json::to_string(&msg).unwrap();
        let back: NotificationMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(msg, back);
    }
}
