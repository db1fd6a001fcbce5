//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use matchday_core::league::{Admin, Fixture, FixtureStatus, Team, User};
use matchday_core::storage::{
    AdminRepository, DateRange, FixtureRepository, RepositoryError, Result, TeamRepository,
    UserRepository,
};

/// In-memory storage backend for tests and local runs.
///
/// Uses HashMaps wrapped in `Arc<RwLock<_>>` for thread-safe access.
/// Teams and fixtures are keyed by their public ids; accounts by email.
/// Data is not persisted and will be lost when the repository is dropped.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    teams: Arc<RwLock<HashMap<Uuid, Team>>>,
    fixtures: Arc<RwLock<HashMap<Uuid, Fixture>>>,
    users: Arc<RwLock<HashMap<String, User>>>,
    admins: Arc<RwLock<HashMap<String, Admin>>>,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            teams: Arc::new(RwLock::new(HashMap::new())),
            fixtures: Arc::new(RwLock::new(HashMap::new())),
            users: Arc::new(RwLock::new(HashMap::new())),
            admins: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

fn team_matches(team: &Team, term: &str) -> bool {
    team.name.contains(term)
        || team.manager.contains(term)
        || team.stadium.contains(term)
        || team
            .nickname
            .as_deref()
            .is_some_and(|nickname| nickname.contains(term))
}

fn fixture_matches(fixture: &Fixture, term: &str) -> bool {
    fixture.venue.contains(term) || fixture.status.as_str().contains(term)
}

#[async_trait]
impl TeamRepository for InMemoryRepository {
    async fn get_team(&self, team_id: Uuid) -> Result<Option<Team>> {
        let teams = self.teams.read().await;
        Ok(teams.get(&team_id).cloned())
    }

    async fn get_team_by_name(&self, name: &str) -> Result<Option<Team>> {
        let teams = self.teams.read().await;
        Ok(teams.values().find(|team| team.name == name).cloned())
    }

    async fn list_teams(&self) -> Result<Vec<Team>> {
        let teams = self.teams.read().await;
        let mut listing: Vec<Team> = teams.values().cloned().collect();
        listing.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(listing)
    }

    async fn create_team(&self, team: &Team) -> Result<()> {
        let mut teams = self.teams.write().await;
        if teams.contains_key(&team.team_id) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "Team",
                id: team.team_id.to_string(),
            });
        }
        teams.insert(team.team_id, team.clone());
        Ok(())
    }

    async fn update_team(&self, team: &Team) -> Result<()> {
        let mut teams = self.teams.write().await;
        if !teams.contains_key(&team.team_id) {
            return Err(RepositoryError::NotFound {
                entity_type: "Team",
                id: team.team_id.to_string(),
            });
        }
        teams.insert(team.team_id, team.clone());
        Ok(())
    }

    async fn set_team_fixtures(&self, team_id: Uuid, fixtures: Vec<Uuid>) -> Result<()> {
        let mut teams = self.teams.write().await;
        match teams.get_mut(&team_id) {
            Some(team) => {
                team.fixtures = fixtures;
                Ok(())
            }
            None => Err(RepositoryError::NotFound {
                entity_type: "Team",
                id: team_id.to_string(),
            }),
        }
    }

    async fn delete_team(&self, team_id: Uuid) -> Result<()> {
        let mut teams = self.teams.write().await;
        if teams.remove(&team_id).is_none() {
            return Err(RepositoryError::NotFound {
                entity_type: "Team",
                id: team_id.to_string(),
            });
        }
        Ok(())
    }

    async fn search_teams(&self, term: &str) -> Result<Vec<Team>> {
        let teams = self.teams.read().await;
        let mut matches: Vec<Team> = teams
            .values()
            .filter(|team| team_matches(team, term))
            .cloned()
            .collect();
        matches.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(matches)
    }
}

#[async_trait]
impl FixtureRepository for InMemoryRepository {
    async fn get_fixture(&self, fixture_id: Uuid) -> Result<Option<Fixture>> {
        let fixtures = self.fixtures.read().await;
        Ok(fixtures.get(&fixture_id).cloned())
    }

    async fn find_by_team_and_kickoff(
        &self,
        team: Uuid,
        kick_off: DateTime<Utc>,
    ) -> Result<Vec<Fixture>> {
        let fixtures = self.fixtures.read().await;
        Ok(fixtures
            .values()
            .filter(|f| f.home == team || f.away == team)
            .filter(|f| f.kick_off == kick_off)
            .cloned()
            .collect())
    }

    async fn create_fixture(&self, fixture: &Fixture) -> Result<()> {
        let mut fixtures = self.fixtures.write().await;
        if fixtures.contains_key(&fixture.fixture_id) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "Fixture",
                id: fixture.fixture_id.to_string(),
            });
        }
        fixtures.insert(fixture.fixture_id, fixture.clone());
        Ok(())
    }

    async fn update_fixture(&self, fixture: &Fixture) -> Result<()> {
        let mut fixtures = self.fixtures.write().await;
        if !fixtures.contains_key(&fixture.fixture_id) {
            return Err(RepositoryError::NotFound {
                entity_type: "Fixture",
                id: fixture.fixture_id.to_string(),
            });
        }
        fixtures.insert(fixture.fixture_id, fixture.clone());
        Ok(())
    }

    async fn delete_fixture(&self, fixture_id: Uuid) -> Result<()> {
        let mut fixtures = self.fixtures.write().await;
        if fixtures.remove(&fixture_id).is_none() {
            return Err(RepositoryError::NotFound {
                entity_type: "Fixture",
                id: fixture_id.to_string(),
            });
        }
        Ok(())
    }

    async fn list_fixtures(
        &self,
        statuses: &[FixtureStatus],
        range: DateRange,
    ) -> Result<Vec<Fixture>> {
        let fixtures = self.fixtures.read().await;
        let mut listing: Vec<Fixture> = fixtures
            .values()
            .filter(|f| statuses.contains(&f.status))
            .filter(|f| range.contains(f.kick_off))
            .cloned()
            .collect();
        listing.sort_by_key(|f| f.kick_off);
        Ok(listing)
    }

    async fn search_fixtures(&self, term: &str) -> Result<Vec<Fixture>> {
        let fixtures = self.fixtures.read().await;
        let mut matches: Vec<Fixture> = fixtures
            .values()
            .filter(|fixture| fixture_matches(fixture, term))
            .cloned()
            .collect();
        matches.sort_by_key(|f| f.kick_off);
        Ok(matches)
    }
}

#[async_trait]
impl UserRepository for InMemoryRepository {
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(email).cloned())
    }

    async fn create_user(&self, user: &User) -> Result<()> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.email) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "User",
                id: user.email.clone(),
            });
        }
        users.insert(user.email.clone(), user.clone());
        Ok(())
    }
}

#[async_trait]
impl AdminRepository for InMemoryRepository {
    async fn get_admin_by_email(&self, email: &str) -> Result<Option<Admin>> {
        let admins = self.admins.read().await;
        Ok(admins.get(email).cloned())
    }

    async fn create_admin(&self, admin: &Admin) -> Result<()> {
        let mut admins = self.admins.write().await;
        if admins.contains_key(&admin.email) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "Admin",
                id: admin.email.clone(),
            });
        }
        admins.insert(admin.email.clone(), admin.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn kick_off(hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2020, 9, 24, hour, 0, 0).unwrap()
    }

    fn fixture(home: Uuid, away: Uuid, hour: u32) -> Fixture {
        Fixture::scheduled(Uuid::new_v4(), home, away, kick_off(hour), "aba", "link")
    }

    // ==================== Team CRUD ====================

    #[tokio::test]
    async fn test_team_create_and_get() {
        let repo = InMemoryRepository::new();
        let team = Team::new("enyimba", "finidi", "aba", "blue");

        repo.create_team(&team).await.unwrap();

        let retrieved = repo.get_team(team.team_id).await.unwrap();
        assert_eq!(retrieved, Some(team));
    }

    #[tokio::test]
    async fn test_team_get_nonexistent() {
        let repo = InMemoryRepository::new();
        assert!(repo.get_team(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_team_get_by_name() {
        let repo = InMemoryRepository::new();
        let team = Team::new("enyimba", "finidi", "aba", "blue");
        repo.create_team(&team).await.unwrap();

        let retrieved = repo.get_team_by_name("enyimba").await.unwrap();
        assert_eq!(retrieved, Some(team));
        assert!(repo.get_team_by_name("juventus").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_team_create_duplicate_id() {
        let repo = InMemoryRepository::new();
        let team = Team::new("enyimba", "finidi", "aba", "blue");

        repo.create_team(&team).await.unwrap();
        let result = repo.create_team(&team).await;

        assert!(matches!(result, Err(RepositoryError::AlreadyExists { .. })));
    }

    #[tokio::test]
    async fn test_team_update_nonexistent() {
        let repo = InMemoryRepository::new();
        let team = Team::new("enyimba", "finidi", "aba", "blue");

        let result = repo.update_team(&team).await;
        assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_set_team_fixtures_replaces_list() {
        let repo = InMemoryRepository::new();
        let team = Team::new("enyimba", "finidi", "aba", "blue");
        repo.create_team(&team).await.unwrap();

        let fixture_ids = vec![Uuid::new_v4(), Uuid::new_v4()];
        repo.set_team_fixtures(team.team_id, fixture_ids.clone())
            .await
            .unwrap();

        let retrieved = repo.get_team(team.team_id).await.unwrap().unwrap();
        assert_eq!(retrieved.fixtures, fixture_ids);
    }

    #[tokio::test]
    async fn test_list_teams_sorted_by_name() {
        let repo = InMemoryRepository::new();
        repo.create_team(&Team::new("juventus", "m", "turin", "black"))
            .await
            .unwrap();
        repo.create_team(&Team::new("enyimba", "m", "aba", "blue"))
            .await
            .unwrap();

        let names: Vec<String> = repo
            .list_teams()
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(names, vec!["enyimba", "juventus"]);
    }

    #[tokio::test]
    async fn test_team_delete() {
        let repo = InMemoryRepository::new();
        let team = Team::new("enyimba", "finidi", "aba", "blue");
        repo.create_team(&team).await.unwrap();

        repo.delete_team(team.team_id).await.unwrap();
        assert!(repo.get_team(team.team_id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_team_search_covers_nickname() {
        let repo = InMemoryRepository::new();
        let team = Team::new("enyimba", "finidi", "aba", "blue").with_nickname("the elephants");
        repo.create_team(&team).await.unwrap();

        assert_eq!(repo.search_teams("elephant").await.unwrap().len(), 1);
        assert_eq!(repo.search_teams("finidi").await.unwrap().len(), 1);
        assert!(repo.search_teams("arsenal").await.unwrap().is_empty());
    }

    // ==================== Fixture CRUD ====================

    #[tokio::test]
    async fn test_fixture_create_and_get() {
        let repo = InMemoryRepository::new();
        let fixture = fixture(Uuid::new_v4(), Uuid::new_v4(), 0);

        repo.create_fixture(&fixture).await.unwrap();

        let retrieved = repo.get_fixture(fixture.fixture_id).await.unwrap();
        assert_eq!(retrieved, Some(fixture));
    }

    #[tokio::test]
    async fn test_find_by_team_and_kickoff_exact_match_only() {
        let repo = InMemoryRepository::new();
        let team = Uuid::new_v4();
        let fixture = fixture(team, Uuid::new_v4(), 12);
        repo.create_fixture(&fixture).await.unwrap();

        assert_eq!(
            repo.find_by_team_and_kickoff(team, kick_off(12))
                .await
                .unwrap()
                .len(),
            1
        );
        assert!(repo
            .find_by_team_and_kickoff(team, kick_off(13))
            .await
            .unwrap()
            .is_empty());
        assert!(repo
            .find_by_team_and_kickoff(Uuid::new_v4(), kick_off(12))
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_find_by_team_and_kickoff_matches_away_side() {
        let repo = InMemoryRepository::new();
        let away = Uuid::new_v4();
        let fixture = fixture(Uuid::new_v4(), away, 12);
        repo.create_fixture(&fixture).await.unwrap();

        assert_eq!(
            repo.find_by_team_and_kickoff(away, kick_off(12))
                .await
                .unwrap()
                .len(),
            1
        );
    }

    #[tokio::test]
    async fn test_fixture_delete_nonexistent() {
        let repo = InMemoryRepository::new();
        let result = repo.delete_fixture(Uuid::new_v4()).await;
        assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_list_fixtures_filters_status_and_range() {
        let repo = InMemoryRepository::new();
        let pending = fixture(Uuid::new_v4(), Uuid::new_v4(), 10);
        let completed =
            fixture(Uuid::new_v4(), Uuid::new_v4(), 11).with_status(FixtureStatus::Completed);
        repo.create_fixture(&pending).await.unwrap();
        repo.create_fixture(&completed).await.unwrap();

        let range = DateRange::new(kick_off(0), kick_off(23)).unwrap();

        let only_pending = repo
            .list_fixtures(&[FixtureStatus::Pending], range)
            .await
            .unwrap();
        assert_eq!(only_pending.len(), 1);
        assert_eq!(only_pending[0].fixture_id, pending.fixture_id);

        let narrow = DateRange::new(kick_off(11), kick_off(11)).unwrap();
        let all_in_narrow = repo
            .list_fixtures(&FixtureStatus::all(), narrow)
            .await
            .unwrap();
        assert_eq!(all_in_narrow.len(), 1);
        assert_eq!(all_in_narrow[0].fixture_id, completed.fixture_id);
    }

    #[tokio::test]
    async fn test_list_fixtures_sorted_by_kickoff() {
        let repo = InMemoryRepository::new();
        let later = fixture(Uuid::new_v4(), Uuid::new_v4(), 15);
        let earlier = fixture(Uuid::new_v4(), Uuid::new_v4(), 9);
        repo.create_fixture(&later).await.unwrap();
        repo.create_fixture(&earlier).await.unwrap();

        let listing = repo
            .list_fixtures(&FixtureStatus::all(), DateRange::through(Utc::now()))
            .await
            .unwrap();
        assert_eq!(listing[0].fixture_id, earlier.fixture_id);
        assert_eq!(listing[1].fixture_id, later.fixture_id);
    }

    #[tokio::test]
    async fn test_fixture_search_matches_venue_and_status() {
        let repo = InMemoryRepository::new();
        let fixture = fixture(Uuid::new_v4(), Uuid::new_v4(), 12);
        repo.create_fixture(&fixture).await.unwrap();

        assert_eq!(repo.search_fixtures("aba").await.unwrap().len(), 1);
        assert_eq!(repo.search_fixtures("pending").await.unwrap().len(), 1);
        assert!(repo.search_fixtures("completed").await.unwrap().is_empty());
    }

    // ==================== Account CRUD ====================

    #[tokio::test]
    async fn test_user_create_and_get_by_email() {
        let repo = InMemoryRepository::new();
        let user = User::new("ada", "ada@example.com", "salt$digest");

        repo.create_user(&user).await.unwrap();

        let retrieved = repo.get_user_by_email("ada@example.com").await.unwrap();
        assert_eq!(retrieved, Some(user));
        assert!(repo
            .get_user_by_email("nobody@example.com")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_duplicate_user_email() {
        let repo = InMemoryRepository::new();
        let user = User::new("ada", "ada@example.com", "salt$digest");

        repo.create_user(&user).await.unwrap();
        let result = repo.create_user(&user).await;

        assert!(matches!(result, Err(RepositoryError::AlreadyExists { .. })));
    }

    #[tokio::test]
    async fn test_admin_create_and_get_by_email() {
        let repo = InMemoryRepository::new();
        let admin = Admin::new(
            "root",
            "root@example.com",
            matchday_core::league::AdminRole::Root,
            "salt$digest",
        );

        repo.create_admin(&admin).await.unwrap();

        let retrieved = repo.get_admin_by_email("root@example.com").await.unwrap();
        assert_eq!(retrieved, Some(admin));
    }
}
