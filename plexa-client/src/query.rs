use serde::de::DeserializeOwned;
use url::Url;

use crate::error::Result;

/// A single name/value query parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryItem {
    pub name: String,
    pub value: String,
}

impl QueryItem {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A server resource addressable by path plus query parameters.
///
/// This is the seam the HTTP transport consumes: it asks for
/// [`request_url`](ResourceRequest::request_url), performs the GET itself
/// (attaching auth tokens and whatever else it owns), and hands the raw
/// body back to [`decode_response`](ResourceRequest::decode_response).
/// Nothing here performs I/O.
pub trait ResourceRequest {
    /// The decoded response payload.
    type Response: DeserializeOwned;

    /// Path relative to the server base URL, without a leading slash.
    fn path(&self) -> String;

    /// The full ordered query parameter list for this request.
    fn query_items(&self) -> Vec<QueryItem>;

    /// Resolve the request against a server base URL, appending the query
    /// items in order.
    fn request_url(&self, base: &Url) -> Result<Url> {
        // Url::join drops the last path segment of a base without a
        // trailing slash, which would silently eat e.g. a `/web` prefix.
        let mut url = if base.path().ends_with('/') {
            base.join(&self.path())?
        } else {
            base.join(&format!("{}/{}", base.path(), self.path()))?
        };
        {
            let mut pairs = url.query_pairs_mut();
            for item in self.query_items() {
                pairs.append_pair(&item.name, &item.value);
            }
        }
        Ok(url)
    }

    /// Decode a raw response body into the typed payload.
    fn decode_response(&self, body: &[u8]) -> Result<Self::Response> {
        tracing::trace!(path = %self.path(), bytes = body.len(), "decoding response body");
        Ok(serde_json::from_slice(body)?)
    }
}
