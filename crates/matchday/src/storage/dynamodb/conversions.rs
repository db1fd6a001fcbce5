//! DynamoDB attribute conversion functions.
//!
//! Pure functions for converting between DynamoDB AttributeValue maps
//! and domain types. Testable in isolation without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use matchday_core::league::{Admin, AdminRole, Fixture, FixtureStatus, ScoreReport, Team, User};
use matchday_core::storage::RepositoryError;

use super::keys;

// ============================================================================
// Entity type constants
// ============================================================================

pub const ENTITY_TYPE_TEAM: &str = "TEAM";
pub const ENTITY_TYPE_FIXTURE: &str = "FIXTURE";
pub const ENTITY_TYPE_USER: &str = "USER";
pub const ENTITY_TYPE_ADMIN: &str = "ADMIN";

// ============================================================================
// Team conversions
// ============================================================================

/// Convert a Team to a DynamoDB item.
pub fn team_to_item(team: &Team) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    // Keys
    item.insert(
        "PK".to_string(),
        AttributeValue::S(keys::team_pk(team.team_id)),
    );
    item.insert(
        "SK".to_string(),
        AttributeValue::S(keys::team_pk(team.team_id)),
    );
    item.insert(
        "GSI1PK".to_string(),
        AttributeValue::S(keys::TEAM_PARTITION.to_string()),
    );
    item.insert(
        "GSI1SK".to_string(),
        AttributeValue::S(keys::team_gsi1_sk(&team.name)),
    );

    // Entity type
    item.insert(
        "entityType".to_string(),
        AttributeValue::S(ENTITY_TYPE_TEAM.to_string()),
    );

    // Data
    item.insert("id".to_string(), AttributeValue::S(team.id.to_string()));
    item.insert(
        "teamId".to_string(),
        AttributeValue::S(team.team_id.to_string()),
    );
    item.insert("name".to_string(), AttributeValue::S(team.name.clone()));
    item.insert(
        "manager".to_string(),
        AttributeValue::S(team.manager.clone()),
    );
    item.insert(
        "stadium".to_string(),
        AttributeValue::S(team.stadium.clone()),
    );
    item.insert("color".to_string(), AttributeValue::S(team.color.clone()));
    if let Some(nickname) = &team.nickname {
        item.insert("nickname".to_string(), AttributeValue::S(nickname.clone()));
    }
    item.insert(
        "fixtures".to_string(),
        AttributeValue::L(
            team.fixtures
                .iter()
                .map(|id| AttributeValue::S(id.to_string()))
                .collect(),
        ),
    );
    if let Some(created_by) = team.created_by {
        item.insert(
            "createdBy".to_string(),
            AttributeValue::S(created_by.to_string()),
        );
    }

    item
}

/// Convert a DynamoDB item to a Team.
pub fn item_to_team(item: &HashMap<String, AttributeValue>) -> Result<Team, RepositoryError> {
    Ok(Team {
        id: get_uuid(item, "id")?,
        team_id: get_uuid(item, "teamId")?,
        name: get_string(item, "name")?,
        manager: get_string(item, "manager")?,
        stadium: get_string(item, "stadium")?,
        color: get_string(item, "color")?,
        nickname: get_optional_string(item, "nickname"),
        fixtures: get_uuid_list(item, "fixtures")?,
        created_by: get_optional_uuid(item, "createdBy")?,
    })
}

// ============================================================================
// Fixture conversions
// ============================================================================

/// Convert a Fixture to a DynamoDB item.
pub fn fixture_to_item(fixture: &Fixture) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    // Keys
    item.insert(
        "PK".to_string(),
        AttributeValue::S(keys::fixture_pk(fixture.fixture_id)),
    );
    item.insert(
        "SK".to_string(),
        AttributeValue::S(keys::fixture_pk(fixture.fixture_id)),
    );
    item.insert(
        "GSI1PK".to_string(),
        AttributeValue::S(keys::FIXTURE_PARTITION.to_string()),
    );
    item.insert(
        "GSI1SK".to_string(),
        AttributeValue::S(keys::fixture_gsi1_sk(fixture.kick_off, fixture.fixture_id)),
    );

    // Entity type
    item.insert(
        "entityType".to_string(),
        AttributeValue::S(ENTITY_TYPE_FIXTURE.to_string()),
    );

    // Data
    item.insert("id".to_string(), AttributeValue::S(fixture.id.to_string()));
    item.insert(
        "fixtureId".to_string(),
        AttributeValue::S(fixture.fixture_id.to_string()),
    );
    item.insert(
        "home".to_string(),
        AttributeValue::S(fixture.home.to_string()),
    );
    item.insert(
        "away".to_string(),
        AttributeValue::S(fixture.away.to_string()),
    );
    item.insert(
        "kickOff".to_string(),
        AttributeValue::S(fixture.kick_off.to_rfc3339()),
    );
    item.insert(
        "status".to_string(),
        AttributeValue::S(fixture.status.as_str().to_string()),
    );
    item.insert("venue".to_string(), AttributeValue::S(fixture.venue.clone()));
    item.insert("link".to_string(), AttributeValue::S(fixture.link.clone()));
    item.insert(
        "scoreHome".to_string(),
        AttributeValue::N(fixture.report.home.to_string()),
    );
    item.insert(
        "scoreAway".to_string(),
        AttributeValue::N(fixture.report.away.to_string()),
    );

    item
}

/// Convert a DynamoDB item to a Fixture.
pub fn item_to_fixture(item: &HashMap<String, AttributeValue>) -> Result<Fixture, RepositoryError> {
    Ok(Fixture {
        id: get_uuid(item, "id")?,
        fixture_id: get_uuid(item, "fixtureId")?,
        home: get_uuid(item, "home")?,
        away: get_uuid(item, "away")?,
        kick_off: get_datetime(item, "kickOff")?,
        status: get_status(item, "status")?,
        venue: get_string(item, "venue")?,
        link: get_string(item, "link")?,
        report: ScoreReport {
            home: get_number(item, "scoreHome")?,
            away: get_number(item, "scoreAway")?,
        },
    })
}

// ============================================================================
// Account conversions
// ============================================================================

/// Convert a User to a DynamoDB item.
pub fn user_to_item(user: &User) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    item.insert(
        "PK".to_string(),
        AttributeValue::S(keys::user_pk(&user.email)),
    );
    item.insert(
        "SK".to_string(),
        AttributeValue::S(keys::user_pk(&user.email)),
    );
    item.insert(
        "entityType".to_string(),
        AttributeValue::S(ENTITY_TYPE_USER.to_string()),
    );

    item.insert("id".to_string(), AttributeValue::S(user.id.to_string()));
    item.insert("name".to_string(), AttributeValue::S(user.name.clone()));
    item.insert("email".to_string(), AttributeValue::S(user.email.clone()));
    item.insert(
        "passwordHash".to_string(),
        AttributeValue::S(user.password_hash.clone()),
    );

    item
}

/// Convert a DynamoDB item to a User.
pub fn item_to_user(item: &HashMap<String, AttributeValue>) -> Result<User, RepositoryError> {
    Ok(User {
        id: get_uuid(item, "id")?,
        name: get_string(item, "name")?,
        email: get_string(item, "email")?,
        password_hash: get_string(item, "passwordHash")?,
    })
}

/// Convert an Admin to a DynamoDB item.
pub fn admin_to_item(admin: &Admin) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();

    item.insert(
        "PK".to_string(),
        AttributeValue::S(keys::admin_pk(&admin.email)),
    );
    item.insert(
        "SK".to_string(),
        AttributeValue::S(keys::admin_pk(&admin.email)),
    );
    item.insert(
        "entityType".to_string(),
        AttributeValue::S(ENTITY_TYPE_ADMIN.to_string()),
    );

    item.insert("id".to_string(), AttributeValue::S(admin.id.to_string()));
    item.insert("name".to_string(), AttributeValue::S(admin.name.clone()));
    item.insert("email".to_string(), AttributeValue::S(admin.email.clone()));
    item.insert(
        "role".to_string(),
        AttributeValue::S(match admin.role {
            AdminRole::Root => "root".to_string(),
            AdminRole::Super => "super".to_string(),
        }),
    );
    item.insert(
        "passwordHash".to_string(),
        AttributeValue::S(admin.password_hash.clone()),
    );

    item
}

/// Convert a DynamoDB item to an Admin.
pub fn item_to_admin(item: &HashMap<String, AttributeValue>) -> Result<Admin, RepositoryError> {
    let role = match get_string(item, "role")?.as_str() {
        "root" => AdminRole::Root,
        "super" => AdminRole::Super,
        other => {
            return Err(RepositoryError::InvalidData(format!(
                "unknown admin role: {other}"
            )))
        }
    };

    Ok(Admin {
        id: get_uuid(item, "id")?,
        name: get_string(item, "name")?,
        email: get_string(item, "email")?,
        role,
        password_hash: get_string(item, "passwordHash")?,
    })
}

// ============================================================================
// Attribute getters
// ============================================================================

fn get_string(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<String, RepositoryError> {
    item.get(key)
        .and_then(|v| v.as_s().ok())
        .cloned()
        .ok_or_else(|| RepositoryError::InvalidData(format!("missing string attribute: {key}")))
}

fn get_optional_string(item: &HashMap<String, AttributeValue>, key: &str) -> Option<String> {
    item.get(key).and_then(|v| v.as_s().ok()).cloned()
}

fn get_uuid(item: &HashMap<String, AttributeValue>, key: &str) -> Result<Uuid, RepositoryError> {
    let raw = get_string(item, key)?;
    Uuid::parse_str(&raw)
        .map_err(|_| RepositoryError::InvalidData(format!("invalid uuid in {key}: {raw}")))
}

fn get_optional_uuid(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<Option<Uuid>, RepositoryError> {
    match get_optional_string(item, key) {
        None => Ok(None),
        Some(raw) => Uuid::parse_str(&raw)
            .map(Some)
            .map_err(|_| RepositoryError::InvalidData(format!("invalid uuid in {key}: {raw}"))),
    }
}

fn get_uuid_list(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<Vec<Uuid>, RepositoryError> {
    let list = item
        .get(key)
        .and_then(|v| v.as_l().ok())
        .ok_or_else(|| RepositoryError::InvalidData(format!("missing list attribute: {key}")))?;

    list.iter()
        .map(|value| {
            let raw = value.as_s().map_err(|_| {
                RepositoryError::InvalidData(format!("non-string element in {key}"))
            })?;
            Uuid::parse_str(raw)
                .map_err(|_| RepositoryError::InvalidData(format!("invalid uuid in {key}: {raw}")))
        })
        .collect()
}

fn get_datetime(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<DateTime<Utc>, RepositoryError> {
    let raw = get_string(item, key)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| RepositoryError::InvalidData(format!("invalid datetime in {key}: {raw}")))
}

fn get_status(
    item: &HashMap<String, AttributeValue>,
    key: &str,
) -> Result<FixtureStatus, RepositoryError> {
    let raw = get_string(item, key)?;
    raw.parse::<FixtureStatus>()
        .map_err(RepositoryError::InvalidData)
}

fn get_number(item: &HashMap<String, AttributeValue>, key: &str) -> Result<u32, RepositoryError> {
    let raw = item
        .get(key)
        .and_then(|v| v.as_n().ok())
        .ok_or_else(|| RepositoryError::InvalidData(format!("missing number attribute: {key}")))?;
    raw.parse::<u32>()
        .map_err(|_| RepositoryError::InvalidData(format!("invalid number in {key}: {raw}")))
}
