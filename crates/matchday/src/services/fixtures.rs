//! Fixture scheduling, cached fixture reads, and cache invalidation.

use std::sync::Arc;
use std::time::Duration;

use uuid::Uuid;

use matchday_core::cache::{
    deserialize_fixture, deserialize_fixtures, fixtures_key, resource_key, serialize_fixture,
    serialize_fixtures, teams_key, Cache,
};
use matchday_core::league::{
    fixture_link, paginate, Error, Fixture, FixtureStatus, Listing, Result, ScoreReport,
};
use matchday_core::storage::{DateRange, FixtureRepository, TeamRepository};

use crate::models::{CreateFixture, UpdateFixture};
use crate::services::AvailabilityChecker;

/// Orchestrates fixture creation, updates and deletion.
///
/// Creation runs the full sequence: distinct-sides check, team
/// resolution, availability checks (home first), link generation,
/// persistence, team fixture-list updates, and cache invalidation.
/// The multi-step sequence is not transactional; a failure after the
/// fixture insert leaves the fixture persisted without compensation.
pub struct FixtureScheduler {
    teams: Arc<dyn TeamRepository>,
    fixtures: Arc<dyn FixtureRepository>,
    availability: AvailabilityChecker,
    cache: Arc<dyn Cache>,
    ttl: Duration,
    base_url: String,
}

impl FixtureScheduler {
    pub fn new(
        teams: Arc<dyn TeamRepository>,
        fixtures: Arc<dyn FixtureRepository>,
        availability: AvailabilityChecker,
        cache: Arc<dyn Cache>,
        ttl: Duration,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            teams,
            fixtures,
            availability,
            cache,
            ttl,
            base_url: base_url.into(),
        }
    }

    /// Schedules a new fixture between two teams.
    pub async fn create(&self, request: CreateFixture) -> Result<Fixture> {
        if request.home == request.away {
            return Err(Error::Conflict(
                "home and away must be different teams".to_string(),
            ));
        }

        let home = self
            .teams
            .get_team(request.home)
            .await?
            .ok_or_else(|| Error::NotFound("home does not exist".to_string()))?;
        let away = self
            .teams
            .get_team(request.away)
            .await?
            .ok_or_else(|| Error::NotFound("away does not exist".to_string()))?;

        // Home is checked first, so a double conflict reports the home side.
        if !self.availability.is_available(home.id, request.kick_off).await? {
            return Err(Error::Conflict(format!(
                "{} has a fixture on {}",
                home.name,
                request.kick_off.to_rfc3339()
            )));
        }
        if !self.availability.is_available(away.id, request.kick_off).await? {
            return Err(Error::Conflict(format!(
                "{} has a fixture on {}",
                away.name,
                request.kick_off.to_rfc3339()
            )));
        }

        let fixture_id = Uuid::new_v4();
        let link = fixture_link(&self.base_url, fixture_id);
        let fixture = Fixture::scheduled(
            fixture_id,
            home.id,
            away.id,
            request.kick_off,
            &home.stadium,
            link,
        );

        self.fixtures.create_fixture(&fixture).await?;

        // Ordered append, no deduplication.
        let mut home_fixtures = home.fixtures.clone();
        home_fixtures.push(fixture.id);
        self.teams.set_team_fixtures(home.team_id, home_fixtures).await?;

        let mut away_fixtures = away.fixtures.clone();
        away_fixtures.push(fixture.id);
        self.teams.set_team_fixtures(away.team_id, away_fixtures).await?;

        for key in [
            fixtures_key(None),
            fixtures_key(Some(FixtureStatus::Pending)),
            teams_key(),
            resource_key(home.team_id),
            resource_key(away.team_id),
        ] {
            self.invalidate(&key).await;
        }

        tracing::debug!(
            fixture_id = %fixture.fixture_id,
            home = %home.name,
            away = %away.name,
            "Fixture scheduled"
        );
        Ok(fixture)
    }

    /// Gets a fixture by public id, cache first.
    pub async fn get(&self, fixture_id: Uuid) -> Result<Fixture> {
        let cache_key = resource_key(fixture_id);

        if let Ok(Some(bytes)) = self.cache.get(&cache_key).await {
            if let Ok(fixture) = deserialize_fixture(&bytes) {
                tracing::trace!(%fixture_id, "Cache hit for fixture");
                return Ok(fixture);
            }
            // Deserialization failed - treat as cache miss
            tracing::warn!(%fixture_id, "Cached fixture deserialization failed");
        }

        tracing::trace!(%fixture_id, "Cache miss for fixture");
        let fixture = self
            .fixtures
            .get_fixture(fixture_id)
            .await?
            .ok_or_else(|| Error::NotFound("no fixture found".to_string()))?;

        if let Ok(bytes) = serialize_fixture(&fixture) {
            self.populate(&cache_key, &bytes).await;
        }

        Ok(fixture)
    }

    /// Lists fixtures by status filter and kickoff range.
    ///
    /// The cache key covers only the status dimension
    /// (`fixtures:<status-or-"all">`); a cached hit replays the stored
    /// listing unpaginated, a fresh read paginates the repository result.
    pub async fn list(
        &self,
        status: Option<FixtureStatus>,
        range: DateRange,
        page: Option<usize>,
        limit: Option<usize>,
    ) -> Result<Listing<Fixture>> {
        let cache_key = fixtures_key(status);

        if let Ok(Some(bytes)) = self.cache.get(&cache_key).await {
            if let Ok(fixtures) = deserialize_fixtures(&bytes) {
                tracing::trace!(key = %cache_key, "Cache hit for fixture listing");
                return Ok(Listing::Cached(fixtures));
            }
            tracing::warn!(key = %cache_key, "Cached fixture listing deserialization failed");
        }

        let statuses = match status {
            Some(status) => vec![status],
            None => FixtureStatus::all().to_vec(),
        };
        let fixtures = self.fixtures.list_fixtures(&statuses, range).await?;
        if fixtures.is_empty() {
            return Err(Error::NotFound("no fixtures found".to_string()));
        }

        if let Ok(bytes) = serialize_fixtures(&fixtures) {
            self.populate(&cache_key, &bytes).await;
        }

        Ok(Listing::Fresh(paginate(fixtures, page, limit)))
    }

    /// Applies a partial update to a fixture.
    pub async fn update(&self, fixture_id: Uuid, update: UpdateFixture) -> Result<Fixture> {
        let mut fixture = self
            .fixtures
            .get_fixture(fixture_id)
            .await?
            .ok_or_else(|| Error::NotFound("fixture not found".to_string()))?;

        // Only a supplied kickoff re-triggers the availability checks.
        if let Some(kick_off) = update.kick_off {
            if !self.availability.is_available(fixture.home, kick_off).await? {
                return Err(Error::Conflict(format!(
                    "home has a fixture on {}",
                    kick_off.to_rfc3339()
                )));
            }
            if !self.availability.is_available(fixture.away, kick_off).await? {
                return Err(Error::Conflict(format!(
                    "away has a fixture on {}",
                    kick_off.to_rfc3339()
                )));
            }
            fixture.kick_off = kick_off;
        }

        // Any status value may overwrite any other.
        if let Some(status) = update.status {
            fixture.status = status;
        }

        if update.score_home.is_some() || update.score_away.is_some() {
            // The unset side falls back to the loaded fixture's score.
            fixture.report = ScoreReport {
                home: update.score_home.unwrap_or(fixture.report.home),
                away: update.score_away.unwrap_or(fixture.report.away),
            };
        }

        self.fixtures.update_fixture(&fixture).await?;
        self.invalidate(&resource_key(fixture_id)).await;

        tracing::debug!(%fixture_id, "Fixture updated");
        Ok(fixture)
    }

    /// Removes a fixture, allowed only while it is still pending.
    pub async fn delete(&self, fixture_id: Uuid) -> Result<()> {
        let fixture = self
            .fixtures
            .get_fixture(fixture_id)
            .await?
            .ok_or_else(|| Error::NotFound("no fixture found".to_string()))?;

        if fixture.status != FixtureStatus::Pending {
            return Err(Error::DeleteNotAllowed(
                "fixture cannot be deleted".to_string(),
            ));
        }

        self.fixtures.delete_fixture(fixture_id).await?;
        self.invalidate(&resource_key(fixture_id)).await;

        tracing::debug!(%fixture_id, "Fixture deleted");
        Ok(())
    }

    async fn populate(&self, key: &str, bytes: &[u8]) {
        if let Err(err) = self.cache.set(key, bytes, Some(self.ttl)).await {
            tracing::warn!(key, error = %err, "Failed to cache fixture payload");
        }
    }

    async fn invalidate(&self, key: &str) {
        if let Err(err) = self.cache.delete(key).await {
            tracing::warn!(key, error = %err, "Failed to invalidate cache entry");
        }
    }
}
