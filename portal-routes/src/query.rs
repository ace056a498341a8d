// SPDX-License-Identifier: MIT OR Apache-2.0

//! Query-string parsing for resolved locations.

use std::collections::BTreeMap;

use url::form_urlencoded;

/// Query params in arrival order per key. `?a=1&a=2` yields `a => ["1", "2"]`.
pub type Query = BTreeMap<String, Vec<String>>;

/// Parses `a=1&b=two+words&flag` (no leading `?`).
///
/// `+` is read as a space, keys without `=` get an empty value, and pairs
/// with an empty key are skipped.
pub fn parse_query(raw: &str) -> Query {
    let mut query = Query::new();
    for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
        if key.is_empty() {
            continue;
        }
        query
            .entry(key.into_owned())
            .or_default()
            .push(value.into_owned());
    }
    query
}
