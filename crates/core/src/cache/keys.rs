use uuid::Uuid;

use crate::league::FixtureStatus;

/// Returns the cache key for a single team or fixture.
///
/// Single-item entries are keyed by the bare public id so that
/// invalidation after a write needs nothing but the id itself.
pub fn resource_key(public_id: Uuid) -> String {
    public_id.to_string()
}

/// Returns the cache key for the full team listing.
pub fn teams_key() -> String {
    "teams".to_string()
}

/// Returns the cache key for a fixture listing filtered by status.
///
/// `None` covers the unfiltered listing: `fixtures:all`.
pub fn fixtures_key(status: Option<FixtureStatus>) -> String {
    match status {
        Some(status) => format!("fixtures:{status}"),
        None => "fixtures:all".to_string(),
    }
}

/// Returns the cache key for a search, which is the raw term.
pub fn search_key(term: &str) -> String {
    term.to_string()
}
