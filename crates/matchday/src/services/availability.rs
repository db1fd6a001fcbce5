//! Team availability checks for fixture scheduling.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use matchday_core::league::Result;
use matchday_core::storage::FixtureRepository;

/// Answers whether a team is free at a proposed kickoff instant.
///
/// A team is unavailable when any fixture, home or away, already kicks
/// off at exactly that instant. Exact-match only; this is not a time
/// window. Read-only, no side effects.
#[derive(Clone)]
pub struct AvailabilityChecker {
    fixtures: Arc<dyn FixtureRepository>,
}

impl AvailabilityChecker {
    pub fn new(fixtures: Arc<dyn FixtureRepository>) -> Self {
        Self { fixtures }
    }

    /// Returns true when the team (by internal id) has no fixture at
    /// the given instant.
    pub async fn is_available(&self, team: Uuid, kick_off: DateTime<Utc>) -> Result<bool> {
        let clashes = self.fixtures.find_by_team_and_kickoff(team, kick_off).await?;
        Ok(clashes.is_empty())
    }
}
