use serde::{Deserialize, Serialize};

use crate::media_type::MediaType;

/// A generic media item as returned inside a listing's `Metadata` array.
///
/// Covers the common fields shared by every item kind; requests that need
/// richer or slimmer items substitute their own decode target for the
/// container's type parameter. Timestamps (`addedAt`, `updatedAt`) are raw
/// Unix epoch seconds, matching the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    pub rating_key: String,
    pub key: Option<String>,
    pub guid: Option<String>,
    #[serde(rename = "type")]
    pub media_type: Option<MediaType>,
    pub title: Option<String>,
    pub summary: Option<String>,
    pub thumb: Option<String>,
    pub art: Option<String>,
    pub year: Option<i32>,
    pub duration: Option<i64>,
    pub view_count: Option<i64>,
    pub added_at: Option<i64>,
    pub updated_at: Option<i64>,
}
