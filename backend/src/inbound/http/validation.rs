//! Shared validation helpers for inbound HTTP adapters.

use std::str::FromStr;

use serde_json::json;

use crate::domain::{Error, Medium};

/// Error for a required request parameter that was not supplied.
pub(crate) fn missing_field_error(field: &'static str) -> Error {
    Error::invalid_request(format!("missing required parameter: {field}")).with_details(json!({
        "field": field,
        "code": "missing_field",
    }))
}

/// Parse an identifier taken from the URL.
///
/// A malformed id cannot name a stored resource, so it reads as `NotFound`.
pub(crate) fn parse_path_id<T: FromStr>(raw: &str, resource: &'static str) -> Result<T, Error> {
    raw.trim()
        .parse()
        .map_err(|_| Error::not_found(format!("{resource} not found")))
}

/// Every value of `key` in a raw query string.
///
/// Repeated keys and comma-separated lists are both accepted; blank items
/// are skipped.
pub(crate) fn query_values(query: &str, key: &str) -> Vec<String> {
    url::form_urlencoded::parse(query.as_bytes())
        .filter(|(name, _)| name == key)
        .flat_map(|(_, value)| {
            value
                .split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(str::to_owned)
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Medium filter from the `mediums` query parameter. Unknown labels are dropped.
pub(crate) fn medium_filter(query: &str) -> Vec<Medium> {
    Medium::normalize_all(query_values(query, "mediums"))
}
