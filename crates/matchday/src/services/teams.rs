//! Team registration and cached team reads.

use std::sync::Arc;
use std::time::Duration;

use uuid::Uuid;

use matchday_core::cache::{
    deserialize_team, deserialize_teams, resource_key, serialize_team, serialize_teams, teams_key,
    Cache,
};
use matchday_core::league::{paginate, Error, Listing, Result, Team};
use matchday_core::storage::TeamRepository;

use crate::models::UpdateTeam;

/// Team CRUD with read-through caching.
///
/// Reads check the cache first and fall back to the repository on a
/// miss or a cache error; writes persist first, then invalidate. Cache
/// failures never fail the request.
pub struct TeamDirectory {
    teams: Arc<dyn TeamRepository>,
    cache: Arc<dyn Cache>,
    ttl: Duration,
}

impl TeamDirectory {
    pub fn new(teams: Arc<dyn TeamRepository>, cache: Arc<dyn Cache>, ttl: Duration) -> Self {
        Self { teams, cache, ttl }
    }

    /// Registers a new team, rejecting duplicate names.
    ///
    /// Name uniqueness is case-insensitive: every name is stored
    /// lowercase and the duplicate check runs on the lowercased value.
    pub async fn create(&self, team: Team) -> Result<Team> {
        if self.teams.get_team_by_name(&team.name).await?.is_some() {
            return Err(Error::Conflict("team already exists".to_string()));
        }

        self.teams.create_team(&team).await?;
        self.invalidate(&teams_key()).await;

        tracing::debug!(team_id = %team.team_id, name = %team.name, "Team created");
        Ok(team)
    }

    /// Gets a team by public id, cache first.
    pub async fn get(&self, team_id: Uuid) -> Result<Team> {
        let cache_key = resource_key(team_id);

        if let Ok(Some(bytes)) = self.cache.get(&cache_key).await {
            if let Ok(team) = deserialize_team(&bytes) {
                tracing::trace!(%team_id, "Cache hit for team");
                return Ok(team);
            }
            // Deserialization failed - treat as cache miss
            tracing::warn!(%team_id, "Cached team deserialization failed");
        }

        tracing::trace!(%team_id, "Cache miss for team");
        let team = self
            .teams
            .get_team(team_id)
            .await?
            .ok_or_else(|| Error::NotFound("team not found".to_string()))?;

        if let Ok(bytes) = serialize_team(&team) {
            self.populate(&cache_key, &bytes).await;
        }

        Ok(team)
    }

    /// Lists teams: the cached unpaginated listing when present,
    /// otherwise a paginated page of the repository result.
    pub async fn list(&self, page: Option<usize>, limit: Option<usize>) -> Result<Listing<Team>> {
        let cache_key = teams_key();

        if let Ok(Some(bytes)) = self.cache.get(&cache_key).await {
            if let Ok(teams) = deserialize_teams(&bytes) {
                tracing::trace!("Cache hit for team listing");
                return Ok(Listing::Cached(teams));
            }
            tracing::warn!("Cached team listing deserialization failed");
        }

        let teams = self.teams.list_teams().await?;
        if teams.is_empty() {
            return Err(Error::NotFound("no teams found".to_string()));
        }

        if let Ok(bytes) = serialize_teams(&teams) {
            self.populate(&cache_key, &bytes).await;
        }

        Ok(Listing::Fresh(paginate(teams, page, limit)))
    }

    /// Updates a team in place; unset fields keep the stored values.
    pub async fn update(&self, team_id: Uuid, update: UpdateTeam) -> Result<Team> {
        let mut team = self
            .teams
            .get_team(team_id)
            .await?
            .ok_or_else(|| Error::NotFound("team does not exist".to_string()))?;

        // A renamed team must not collide with another team's name.
        if let Some(name) = &update.name {
            let name = name.to_lowercase();
            if name != team.name && self.teams.get_team_by_name(&name).await?.is_some() {
                return Err(Error::Conflict("team already exists".to_string()));
            }
        }

        update.apply_to(&mut team);
        self.teams.update_team(&team).await?;
        self.invalidate(&resource_key(team_id)).await;

        tracing::debug!(%team_id, "Team updated");
        Ok(team)
    }

    /// Removes a team and drops its cache entry.
    pub async fn delete(&self, team_id: Uuid) -> Result<()> {
        if self.teams.get_team(team_id).await?.is_none() {
            return Err(Error::NotFound("team not found".to_string()));
        }

        self.teams.delete_team(team_id).await?;
        self.invalidate(&resource_key(team_id)).await;

        tracing::debug!(%team_id, "Team deleted");
        Ok(())
    }

    async fn populate(&self, key: &str, bytes: &[u8]) {
        if let Err(err) = self.cache.set(key, bytes, Some(self.ttl)).await {
            tracing::warn!(key, error = %err, "Failed to cache team payload");
        }
    }

    async fn invalidate(&self, key: &str) {
        if let Err(err) = self.cache.delete(key).await {
            tracing::warn!(key, error = %err, "Failed to invalidate cache entry");
        }
    }
}
