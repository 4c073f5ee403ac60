use serde::{Deserialize, Serialize};

use crate::media_type::MediaType;

/// The body of the `MediaContainer` envelope wrapping a library listing.
///
/// Only `size` is required on the wire. Every other scalar is optional and
/// stays `None` when the server omits it; absence is never papered over
/// with a zero or `false`. The item list uses the `Metadata` wire key and
/// is stored privately so callers can only ever observe a (possibly empty)
/// slice, see [`MediaContainer::metadata`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(deserialize = "T: serde::Deserialize<'de>"))]
pub struct MediaContainer<T> {
    pub size: i64,
    pub total_size: Option<i64>,
    pub allow_sync: Option<bool>,
    pub art: Option<String>,
    pub identifier: Option<String>,
    #[serde(rename = "librarySectionID")]
    pub library_section_id: Option<i64>,
    pub library_section_title: Option<String>,
    #[serde(rename = "librarySectionUUID")]
    pub library_section_uuid: Option<String>,
    pub media_tag_prefix: Option<String>,
    pub media_tag_version: Option<i64>,
    pub nocache: Option<bool>,
    pub offset: Option<i64>,
    pub thumb: Option<String>,
    pub title1: Option<String>,
    pub title2: Option<String>,
    pub view_group: Option<MediaType>,
    pub view_mode: Option<i64>,

    #[serde(rename = "Metadata", default)]
    metadata: Option<Vec<T>>,
}

impl<T> MediaContainer<T> {
    /// The listed items. An absent or null `Metadata` field decodes to an
    /// empty slice here, never to an observable "missing" state.
    pub fn metadata(&self) -> &[T] {
        self.metadata.as_deref().unwrap_or_default()
    }

    /// Consume the container, returning the owned item list (empty when
    /// the wire field was absent).
    pub fn into_metadata(self) -> Vec<T> {
        self.metadata.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_metadata_reads_as_empty() {
        let container: MediaContainer<serde_json::Value> =
            serde_json::from_str(r#"{"size":0}"#).unwrap();
        assert_eq!(container.size, 0);
        assert!(container.metadata().is_empty());
        assert_eq!(container.total_size, None);
        assert_eq!(container.allow_sync, None);
    }

    #[test]
    fn null_metadata_reads_as_empty() {
        let container: MediaContainer<serde_json::Value> =
            serde_json::from_str(r#"{"size":3,"Metadata":null}"#).unwrap();
        assert!(container.metadata().is_empty());
    }

    #[test]
    fn missing_size_is_an_error() {
        let result: Result<MediaContainer<serde_json::Value>, _> =
            serde_json::from_str(r#"{"totalSize":10}"#);
        assert!(result.is_err());
    }

    #[test]
    fn scalar_fields_use_wire_spellings() {
        let container: MediaContainer<serde_json::Value> = serde_json::from_str(
            r#"{
                "size": 2,
                "librarySectionID": 7,
                "librarySectionUUID": "abc-123",
                "viewGroup": "movie",
                "title1": "Movies"
            }"#,
        )
        .unwrap();
        assert_eq!(container.library_section_id, Some(7));
        assert_eq!(container.library_section_uuid.as_deref(), Some("abc-123"));
        assert_eq!(container.view_group, Some(MediaType::Movie));
        assert_eq!(container.title1.as_deref(), Some("Movies"));
    }
}
