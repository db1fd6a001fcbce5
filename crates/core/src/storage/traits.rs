use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::league::{Admin, Fixture, FixtureStatus, Team, User};

use super::{DateRange, Result};

/// Repository for team records.
///
/// Teams are addressed by their public `team_id` at this seam; only
/// fixture references use the internal id.
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Gets a team by its public id.
    async fn get_team(&self, team_id: Uuid) -> Result<Option<Team>>;

    /// Gets a team by its lowercased unique name.
    async fn get_team_by_name(&self, name: &str) -> Result<Option<Team>>;

    /// Lists every team.
    async fn list_teams(&self) -> Result<Vec<Team>>;

    /// Creates a new team.
    async fn create_team(&self, team: &Team) -> Result<()>;

    /// Updates an existing team.
    async fn update_team(&self, team: &Team) -> Result<()>;

    /// Replaces a team's owned fixture-id list.
    async fn set_team_fixtures(&self, team_id: Uuid, fixtures: Vec<Uuid>) -> Result<()>;

    /// Deletes a team by its public id.
    async fn delete_team(&self, team_id: Uuid) -> Result<()>;

    /// Substring search over name, manager, stadium and nickname.
    async fn search_teams(&self, term: &str) -> Result<Vec<Team>>;
}

/// Repository for fixture records.
#[async_trait]
pub trait FixtureRepository: Send + Sync {
    /// Gets a fixture by its public id.
    async fn get_fixture(&self, fixture_id: Uuid) -> Result<Option<Fixture>>;

    /// Fixtures where the team (by internal id, home or away) kicks off
    /// at exactly the given instant.
    async fn find_by_team_and_kickoff(
        &self,
        team: Uuid,
        kick_off: DateTime<Utc>,
    ) -> Result<Vec<Fixture>>;

    /// Creates a new fixture.
    async fn create_fixture(&self, fixture: &Fixture) -> Result<()>;

    /// Updates an existing fixture.
    async fn update_fixture(&self, fixture: &Fixture) -> Result<()>;

    /// Deletes a fixture by its public id.
    async fn delete_fixture(&self, fixture_id: Uuid) -> Result<()>;

    /// Fixtures whose status is in `statuses` and whose kickoff falls
    /// inside `range`.
    async fn list_fixtures(
        &self,
        statuses: &[FixtureStatus],
        range: DateRange,
    ) -> Result<Vec<Fixture>>;

    /// Substring search over venue and status wire name.
    async fn search_fixtures(&self, term: &str) -> Result<Vec<Fixture>>;
}

/// Repository for user accounts.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Gets a user by their lowercased email address.
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Creates a new user.
    async fn create_user(&self, user: &User) -> Result<()>;
}

/// Repository for admin accounts.
#[async_trait]
pub trait AdminRepository: Send + Sync {
    /// Gets an admin by their lowercased email address.
    async fn get_admin_by_email(&self, email: &str) -> Result<Option<Admin>>;

    /// Creates a new admin.
    async fn create_admin(&self, admin: &Admin) -> Result<()>;
}
