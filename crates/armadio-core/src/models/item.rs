use crate::models::image_resource::ImageResource;
use crate::models::item_status::ItemStatus;
use crate::models::season::Season;

use std::collections::HashMap;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// A single garment in a user's collection.
///
/// The wire shape (camelCase) is shared by the local cache files and the
/// remote wardrobe documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub season: Season,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub status: ItemStatus,
    #[serde(default)]
    pub note: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub updated_at: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageResource>,
}

impl Item {
    pub fn new(
        category: impl Into<String>,
        color: impl Into<String>,
        season: Season,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: None,
            category: category.into(),
            color: color.into(),
            season,
            tags: Vec::new(),
            status: ItemStatus::Ready,
            note: String::new(),
            location: None,
            updated_at: Utc::now().date_naive(),
            image: None,
        }
    }

    /// Decodes a remote wardrobe document. The document id is authoritative;
    /// missing or malformed fields fall back to defaults instead of failing.
    pub fn from_document(id: &str, data: &Map<String, Value>) -> Self {
        let mut item = Self::from_fields(data);
        item.id = id.to_string();
        item
    }

    /// Decodes one record from the on-device item cache.
    ///
    /// Returns `None` for records that are not objects or carry no id.
    /// Upgrades the pre-upload data shape: a bare `imageUrl` string becomes a
    /// legacy [`ImageResource`], a `description` string becomes the note.
    pub fn from_local_value(value: &Value) -> Option<Self> {
        let data = value.as_object()?;
        let id = data.get("id").and_then(Value::as_str)?.trim();
        if id.is_empty() {
            return None;
        }

        let mut item = Self::from_fields(data);
        item.id = id.to_string();

        if item.image.is_none()
            && let Some(url) = data.get("imageUrl").and_then(Value::as_str)
        {
            item.image = Some(ImageResource::legacy(url));
        }
        if item.note.is_empty()
            && data.get("note").and_then(Value::as_str).is_none()
            && let Some(description) = data.get("description").and_then(Value::as_str)
        {
            item.note = description.to_string();
        }

        Some(item)
    }

    fn from_fields(data: &Map<String, Value>) -> Self {
        let string_field = |key: &str| {
            data.get(key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };
        let optional_field = |key: &str| {
            data.get(key)
                .and_then(Value::as_str)
                .map(str::to_string)
        };

        let season = data
            .get("season")
            .and_then(Value::as_str)
            .and_then(|s| Season::from_str(s).ok())
            .unwrap_or_default();
        let status = data
            .get("status")
            .and_then(Value::as_str)
            .and_then(|s| ItemStatus::from_str(s).ok())
            .unwrap_or_default();
        let tags = data
            .get("tags")
            .and_then(Value::as_array)
            .map(|values| {
                values
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();
        let updated_at = data
            .get("updatedAt")
            .and_then(Value::as_str)
            .and_then(parse_date)
            .unwrap_or_else(|| Utc::now().date_naive());
        let image = data
            .get("image")
            .filter(|value| value.is_object())
            .and_then(|value| serde_json::from_value(value.clone()).ok());

        Self {
            id: string_field("id"),
            name: optional_field("name"),
            category: string_field("category"),
            color: string_field("color"),
            season,
            tags,
            status,
            note: string_field("note"),
            location: optional_field("location"),
            updated_at,
            image,
        }
    }

    /// De-duplicates by trimmed id: blank ids are dropped and the last
    /// occurrence of a repeated id wins, keeping first-occurrence order.
    pub fn dedupe_by_id(items: &[Item]) -> Vec<Item> {
        let mut out: Vec<Item> = Vec::with_capacity(items.len());
        let mut index_by_id: HashMap<String, usize> = HashMap::new();

        for item in items {
            let id = item.id.trim();
            if id.is_empty() {
                continue;
            }
            match index_by_id.get(id) {
                Some(&index) => out[index] = item.clone(),
                None => {
                    index_by_id.insert(id.to_string(), out.len());
                    out.push(item.clone());
                }
            }
        }

        out
    }
}

/// Accepts a plain ISO date or a full timestamp; anything else is discarded.
fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(date) = raw.parse::<NaiveDate>() {
        return Some(date);
    }
    raw.parse::<DateTime<Utc>>().ok().map(|dt| dt.date_naive())
}
