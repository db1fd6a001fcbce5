use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use matchday_core::league::{Error, FixtureStatus};

/// Request payload for scheduling a fixture.
///
/// `home` and `away` are public team ids; `kick_off` is a UTC instant.
#[derive(Debug, Deserialize)]
pub struct CreateFixture {
    pub home: Uuid,
    pub away: Uuid,
    pub kick_off: DateTime<Utc>,
}

/// Request payload for updating a fixture. All fields optional.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateFixture {
    #[serde(default)]
    pub kick_off: Option<DateTime<Utc>>,
    #[serde(default)]
    pub status: Option<FixtureStatus>,
    #[serde(default)]
    pub score_home: Option<u32>,
    #[serde(default)]
    pub score_away: Option<u32>,
}

/// Fixture listing query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct FixtureListQuery {
    /// Status wire name; absent means every status.
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub page: Option<usize>,
    #[serde(default)]
    pub limit: Option<usize>,
}

impl FixtureListQuery {
    /// Parses the status filter, rejecting unknown wire names.
    pub fn status_filter(&self) -> Result<Option<FixtureStatus>, Error> {
        match &self.status {
            None => Ok(None),
            Some(raw) => raw
                .parse::<FixtureStatus>()
                .map(Some)
                .map_err(Error::Validation),
        }
    }
}
