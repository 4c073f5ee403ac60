//! The `library/sections/{key}/all` listing request and its filter model.

use std::collections::BTreeSet;
use std::marker::PhantomData;
use std::ops::RangeInclusive;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use plexa_model::{MediaContainer, MediaItem, MediaType};

use crate::paging::page_query_items;
use crate::query::{QueryItem, ResourceRequest};

/// Fetches a library section's contents.
///
/// The type parameter is the item type decoded from the container's
/// `Metadata` array; it defaults to the general-purpose
/// [`MediaItem`] and can be swapped for any `Deserialize`-able type.
#[derive(Debug, Clone)]
pub struct LibraryItems<T = MediaItem> {
    key: String,
    media_type: MediaType,
    range: Option<RangeInclusive<usize>>,
    exclude_fields: Vec<String>,
    filters: Vec<Filter>,
    _item: PhantomData<fn() -> T>,
}

impl<T> LibraryItems<T> {
    pub fn new(key: impl Into<String>, media_type: MediaType) -> Self {
        Self {
            key: key.into(),
            media_type,
            range: None,
            exclude_fields: Vec::new(),
            filters: Vec::new(),
            _item: PhantomData,
        }
    }

    /// Request only the items at the given inclusive offsets.
    pub fn with_range(mut self, range: RangeInclusive<usize>) -> Self {
        self.range = Some(range);
        self
    }

    /// Fields the server should omit from the response, in addition to the
    /// ones this request always excludes.
    pub fn with_exclude_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Narrow the listing with filter predicates, applied in order.
    pub fn with_filters(mut self, filters: impl IntoIterator<Item = Filter>) -> Self {
        self.filters = filters.into_iter().collect();
        self
    }
}

impl<T: DeserializeOwned> ResourceRequest for LibraryItems<T> {
    type Response = LibraryItemsResponse<T>;

    fn path(&self) -> String {
        format!("library/sections/{}/all", self.key)
    }

    fn query_items(&self) -> Vec<QueryItem> {
        let mut items = vec![
            QueryItem::new("type", self.media_type.wire_key()),
            QueryItem::new("includeFields", "thumbBlurHash"),
        ];

        if let Some(range) = &self.range {
            items.extend(page_query_items(range));
        }

        for filter in &self.filters {
            if let Some(item) = filter.query_item() {
                items.push(item);
            }
        }

        let exclude_fields: Vec<&str> = [
            // This field can contain invalid unicode characters, causing
            // JSON decode errors. We don't use the field currently, so it
            // can be explicitly excluded here.
            "file",
        ]
        .into_iter()
        .chain(self.exclude_fields.iter().map(String::as_str))
        .collect();

        items.push(QueryItem::new("excludeFields", exclude_fields.join(",")));

        tracing::trace!(
            section = %self.key,
            count = items.len(),
            "compiled library listing query"
        );
        items
    }
}

/// Response envelope for [`LibraryItems`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LibraryItemsResponse<T> {
    #[serde(rename = "MediaContainer")]
    pub media_container: MediaContainer<T>,
}

/// Filters the results of a [`LibraryItems`] request.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// Requests items in a specific set.
    Keys(BTreeSet<String>),

    /// Filters by a field in the result type.
    Property {
        name: String,
        comparison: Comparison,
        value: String,
    },

    /// Filters by a date field in the result type.
    DateProperty {
        name: String,
        comparison: Comparison,
        value: DateTime<Utc>,
    },

    /// Filters by items in a given collection.
    Collection { id: String },
}

impl Filter {
    pub fn keys<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Filter::Keys(keys.into_iter().map(Into::into).collect())
    }

    pub fn property(
        name: impl Into<String>,
        comparison: Comparison,
        value: impl Into<String>,
    ) -> Self {
        Filter::Property {
            name: name.into(),
            comparison,
            value: value.into(),
        }
    }

    pub fn date_property(
        name: impl Into<String>,
        comparison: Comparison,
        value: DateTime<Utc>,
    ) -> Self {
        Filter::DateProperty {
            name: name.into(),
            comparison,
            value,
        }
    }

    pub fn collection(id: impl Into<String>) -> Self {
        Filter::Collection { id: id.into() }
    }

    /// Render as a query parameter. An empty key set renders nothing and
    /// is silently dropped by the compiler. Blank names or values are not
    /// validated here; they pass through verbatim.
    fn query_item(&self) -> Option<QueryItem> {
        match self {
            Filter::Keys(keys) => {
                if keys.is_empty() {
                    return None;
                }
                let joined: Vec<&str> = keys.iter().map(String::as_str).collect();
                Some(QueryItem::new("id", joined.join(",")))
            }
            Filter::Property {
                name,
                comparison,
                value,
            } => Some(QueryItem::new(
                format!("{name}{}", comparison.suffix()),
                value,
            )),
            Filter::DateProperty {
                name,
                comparison,
                value,
            } => Some(QueryItem::new(
                format!("{name}{}", comparison.suffix()),
                // Whole seconds only; the wire has no sub-second precision.
                value.timestamp().to_string(),
            )),
            Filter::Collection { id } => Some(QueryItem::new("collection", id)),
        }
    }
}

/// The operator applied by a property filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    GreaterThan,
    LessThan,
    Equal,
}

impl Comparison {
    /// Wire suffix appended directly to the filtered field name.
    pub fn suffix(&self) -> &'static str {
        match self {
            Comparison::GreaterThan => ">",
            Comparison::LessThan => "<",
            Comparison::Equal => "",
        }
    }
}
