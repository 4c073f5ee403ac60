use std::ops::RangeInclusive;

use crate::query::QueryItem;

/// Translate an inclusive item range into container-paging parameters.
///
/// The server pages with a start offset plus a page size, so `0..=49`
/// becomes `X-Plex-Container-Start=0`, `X-Plex-Container-Size=50`.
pub fn page_query_items(range: &RangeInclusive<usize>) -> Vec<QueryItem> {
    let start = *range.start();
    let size = range.end().saturating_sub(start) + 1;
    vec![
        QueryItem::new("X-Plex-Container-Start", start.to_string()),
        QueryItem::new("X-Plex-Container-Size", size.to_string()),
    ]
}
