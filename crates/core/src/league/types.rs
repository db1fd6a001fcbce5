use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A football team registered in the league.
///
/// Carries both the internal storage id and the externally exposed
/// `team_id`. Textual fields are stored lowercase; `name` is unique
/// across all teams.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: Uuid,
    /// Externally exposed identifier, distinct from the storage id.
    pub team_id: Uuid,
    pub name: String,
    pub manager: String,
    pub stadium: String,
    /// Display color (CSS color value or plain color name).
    pub color: String,
    pub nickname: Option<String>,
    /// Internal ids of fixtures this team participates in, in scheduling order.
    pub fixtures: Vec<Uuid>,
    /// Admin that registered the team.
    pub created_by: Option<Uuid>,
}

impl Team {
    /// Creates a new team, lowercasing every textual field.
    pub fn new(
        name: impl Into<String>,
        manager: impl Into<String>,
        stadium: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            team_id: Uuid::new_v4(),
            name: name.into().to_lowercase(),
            manager: manager.into().to_lowercase(),
            stadium: stadium.into().to_lowercase(),
            color: color.into().to_lowercase(),
            nickname: None,
            fixtures: Vec::new(),
            created_by: None,
        }
    }

    /// Sets the nickname, lowercased.
    pub fn with_nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = Some(nickname.into().to_lowercase());
        self
    }

    /// Sets the registering admin.
    pub fn with_created_by(mut self, admin_id: Uuid) -> Self {
        self.created_by = Some(admin_id);
        self
    }

    /// Sets a specific public id (useful for testing).
    pub fn with_team_id(mut self, team_id: Uuid) -> Self {
        self.team_id = team_id;
        self
    }
}

/// Lifecycle status of a fixture.
///
/// Wire names match the stored strings: `pending`, `on-going`,
/// `completed`, `abandoned`. Transitions are unrestricted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FixtureStatus {
    Pending,
    OnGoing,
    Completed,
    Abandoned,
}

impl FixtureStatus {
    /// Every status, in listing order.
    pub fn all() -> [FixtureStatus; 4] {
        [
            FixtureStatus::Pending,
            FixtureStatus::OnGoing,
            FixtureStatus::Completed,
            FixtureStatus::Abandoned,
        ]
    }

    /// The wire name for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            FixtureStatus::Pending => "pending",
            FixtureStatus::OnGoing => "on-going",
            FixtureStatus::Completed => "completed",
            FixtureStatus::Abandoned => "abandoned",
        }
    }
}

impl std::fmt::Display for FixtureStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FixtureStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(FixtureStatus::Pending),
            "on-going" => Ok(FixtureStatus::OnGoing),
            "completed" => Ok(FixtureStatus::Completed),
            "abandoned" => Ok(FixtureStatus::Abandoned),
            other => Err(format!("unknown fixture status: {other}")),
        }
    }
}

/// Final or running score of a fixture, zeroed until reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub home: u32,
    pub away: u32,
}

/// A scheduled match between two teams at a specific kickoff instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    pub id: Uuid,
    /// Externally exposed identifier, distinct from the storage id.
    pub fixture_id: Uuid,
    /// Internal id of the home team.
    pub home: Uuid,
    /// Internal id of the away team.
    pub away: Uuid,
    pub kick_off: DateTime<Utc>,
    pub status: FixtureStatus,
    /// Copied from the home team's stadium at creation.
    pub venue: String,
    /// Shareable link derived from the public id.
    pub link: String,
    pub report: ScoreReport,
}

impl Fixture {
    /// Creates a newly scheduled fixture: status `pending`, 0-0 report.
    pub fn scheduled(
        fixture_id: Uuid,
        home: Uuid,
        away: Uuid,
        kick_off: DateTime<Utc>,
        venue: impl Into<String>,
        link: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            fixture_id,
            home,
            away,
            kick_off,
            status: FixtureStatus::Pending,
            venue: venue.into(),
            link: link.into(),
            report: ScoreReport::default(),
        }
    }

    /// Sets a specific status (useful for testing).
    pub fn with_status(mut self, status: FixtureStatus) -> Self {
        self.status = status;
        self
    }
}

/// Derives the shareable link for a fixture from its public id.
///
/// Deterministic: the same base URL and id always produce the same link.
pub fn fixture_link(base_url: &str, fixture_id: Uuid) -> String {
    format!("{}/api/v1/fixtures/{fixture_id}", base_url.trim_end_matches('/'))
}

/// A registered API user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    /// Salted digest, never exposed in responses.
    #[serde(skip_serializing)]
    pub password_hash: String,
}

impl User {
    /// Creates a new user with lowercased name and email.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into().to_lowercase(),
            email: email.into().to_lowercase(),
            password_hash: password_hash.into(),
        }
    }
}

/// Administrative role levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdminRole {
    Root,
    Super,
}

impl std::str::FromStr for AdminRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "root" => Ok(AdminRole::Root),
            "super" => Ok(AdminRole::Super),
            other => Err(format!("unknown admin role: {other}")),
        }
    }
}

/// A registered administrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Admin {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: AdminRole,
    /// Salted digest, never exposed in responses.
    #[serde(skip_serializing)]
    pub password_hash: String,
}

impl Admin {
    /// Creates a new admin with lowercased name and email.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        role: AdminRole,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into().to_lowercase(),
            email: email.into().to_lowercase(),
            role,
            password_hash: password_hash.into(),
        }
    }
}

/// A single search match, either a team or a fixture.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SearchHit {
    Team(Team),
    Fixture(Fixture),
}

/// Combined result of a free-text search across teams and fixtures.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResults {
    pub teams: Vec<Team>,
    pub fixtures: Vec<Fixture>,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.teams.is_empty() && self.fixtures.is_empty()
    }

    /// Flattens into a single hit list, teams first.
    pub fn into_hits(self) -> Vec<SearchHit> {
        let mut hits: Vec<SearchHit> = self.teams.into_iter().map(SearchHit::Team).collect();
        hits.extend(self.fixtures.into_iter().map(SearchHit::Fixture));
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_team_new_lowercases_fields() {
        let team = Team::new("Enyimba", "Finidi George", "Aba", "Blue").with_nickname("The Elephants");

        assert_eq!(team.name, "enyimba");
        assert_eq!(team.manager, "finidi george");
        assert_eq!(team.stadium, "aba");
        assert_eq!(team.color, "blue");
        assert_eq!(team.nickname.as_deref(), Some("the elephants"));
        assert!(team.fixtures.is_empty());
    }

    #[test]
    fn test_team_public_id_differs_from_internal() {
        let team = Team::new("juventus", "allegri", "turin", "black");
        assert_ne!(team.id, team.team_id);
    }

    #[test]
    fn test_fixture_status_wire_names() {
        let json = serde_json::to_string(&FixtureStatus::OnGoing).unwrap();
        assert_eq!(json, "\"on-going\"");

        let parsed: FixtureStatus = serde_json::from_str("\"abandoned\"").unwrap();
        assert_eq!(parsed, FixtureStatus::Abandoned);
    }

    #[test]
    fn test_fixture_status_from_str() {
        assert_eq!("pending".parse::<FixtureStatus>(), Ok(FixtureStatus::Pending));
        assert_eq!("on-going".parse::<FixtureStatus>(), Ok(FixtureStatus::OnGoing));
        assert!("ongoing".parse::<FixtureStatus>().is_err());
    }

    #[test]
    fn test_scheduled_fixture_defaults() {
        let kick_off = Utc.with_ymd_and_hms(2020, 9, 24, 0, 0, 0).unwrap();
        let fixture_id = Uuid::new_v4();
        let fixture = Fixture::scheduled(
            fixture_id,
            Uuid::new_v4(),
            Uuid::new_v4(),
            kick_off,
            "aba",
            "http://localhost/api/v1/fixtures/x",
        );

        assert_eq!(fixture.fixture_id, fixture_id);
        assert_eq!(fixture.status, FixtureStatus::Pending);
        assert_eq!(fixture.report, ScoreReport { home: 0, away: 0 });
        assert_eq!(fixture.venue, "aba");
    }

    #[test]
    fn test_fixture_link_is_deterministic() {
        let id = Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap();
        let link = fixture_link("http://localhost:3000/", id);
        assert_eq!(
            link,
            "http://localhost:3000/api/v1/fixtures/550e8400-e29b-41d4-a716-446655440000"
        );
        assert_eq!(link, fixture_link("http://localhost:3000", id));
    }

    #[test]
    fn test_user_serialization_skips_password_hash() {
        let user = User::new("Ada", "Ada@Example.com", "salt$digest");
        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(json["email"], "ada@example.com");
        assert!(json.get("password_hash").is_none());
    }

    #[test]
    fn test_search_hits_order_teams_first() {
        let team = Team::new("enyimba", "finidi", "aba", "blue");
        let kick_off = Utc.with_ymd_and_hms(2020, 9, 24, 0, 0, 0).unwrap();
        let fixture = Fixture::scheduled(
            Uuid::new_v4(),
            team.id,
            Uuid::new_v4(),
            kick_off,
            "aba",
            "link",
        );

        let results = SearchResults {
            teams: vec![team],
            fixtures: vec![fixture],
        };
        let hits = results.into_hits();

        assert_eq!(hits.len(), 2);
        assert!(matches!(hits[0], SearchHit::Team(_)));
        assert!(matches!(hits[1], SearchHit::Fixture(_)));
    }
}
