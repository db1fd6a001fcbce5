//! Free-text search across teams and fixtures, with cached results.

use std::sync::Arc;
use std::time::Duration;

use matchday_core::cache::{deserialize_hits, search_key, serialize_hits, Cache};
use matchday_core::league::{paginate, Error, Listing, Result, SearchHit, SearchResults};
use matchday_core::storage::{FixtureRepository, TeamRepository};

/// Substring search over both record kinds, merged teams-first.
///
/// Results are cached under the normalized term; a cached hit replays
/// the stored combined listing unpaginated.
pub struct SearchService {
    teams: Arc<dyn TeamRepository>,
    fixtures: Arc<dyn FixtureRepository>,
    cache: Arc<dyn Cache>,
    ttl: Duration,
}

impl SearchService {
    pub fn new(
        teams: Arc<dyn TeamRepository>,
        fixtures: Arc<dyn FixtureRepository>,
        cache: Arc<dyn Cache>,
        ttl: Duration,
    ) -> Self {
        Self {
            teams,
            fixtures,
            cache,
            ttl,
        }
    }

    /// Runs a search; the term is trimmed and lowercased to match the
    /// lowercase stored fields.
    pub async fn search(
        &self,
        term: &str,
        page: Option<usize>,
        limit: Option<usize>,
    ) -> Result<Listing<SearchHit>> {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return Err(Error::Validation("Please pass a search value".to_string()));
        }

        let cache_key = search_key(&term);
        if let Ok(Some(bytes)) = self.cache.get(&cache_key).await {
            if let Ok(hits) = deserialize_hits(&bytes) {
                tracing::trace!(%term, "Cache hit for search");
                return Ok(Listing::Cached(hits));
            }
            tracing::warn!(%term, "Cached search deserialization failed");
        }

        let results = SearchResults {
            teams: self.teams.search_teams(&term).await?,
            fixtures: self.fixtures.search_fixtures(&term).await?,
        };
        if results.is_empty() {
            return Err(Error::NotFound("no results found".to_string()));
        }

        let hits = results.into_hits();
        if let Ok(bytes) = serialize_hits(&hits) {
            if let Err(err) = self.cache.set(&cache_key, &bytes, Some(self.ttl)).await {
                tracing::warn!(%term, error = %err, "Failed to cache search results");
            }
        }

        Ok(Listing::Fresh(paginate(hits, page, limit)))
    }
}
