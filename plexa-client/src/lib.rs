//! Typed library-listing requests for Plex-compatible media servers.
//!
//! This crate compiles declarative listing requests into paths and ordered
//! query parameters, and decodes the JSON envelopes that come back. It
//! performs no I/O: an HTTP transport resolves
//! [`ResourceRequest::request_url`] against a server base URL, issues the
//! GET, and feeds the body to [`ResourceRequest::decode_response`].

pub mod error;
pub mod library_items;
pub mod paging;
pub mod query;

pub use error::{Error, Result};
pub use library_items::{Comparison, Filter, LibraryItems, LibraryItemsResponse};
pub use query::{QueryItem, ResourceRequest};

// Model types callers need to name when working with responses.
pub use plexa_model::{MediaContainer, MediaItem, MediaType};
