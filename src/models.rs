//! Frontend Models
//!
//! Data structures matching the marketplace API.

use serde::{Deserialize, Deserializer, Serialize};

/// Sentinel category that matches every item
pub const ALL_CATEGORY: &str = "All";

/// Item data structure (matches `GET /items`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub category: String,
    /// Stored image filename, empty when the item has no image
    #[serde(default)]
    pub image_name: String,
}

/// Category data structure (matches `GET /categories`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    pub name: String,
}

/// Required list field; an explicit `null` (empty table server-side) reads as empty
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// `GET /items` envelope
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemsResponse {
    #[serde(deserialize_with = "null_as_empty")]
    pub items: Vec<Item>,
}

/// `GET /categories` envelope
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CategoriesResponse {
    #[serde(deserialize_with = "null_as_empty")]
    pub categories: Vec<Category>,
}
