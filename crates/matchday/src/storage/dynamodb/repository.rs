//! DynamoDB repository implementation.
//!
//! Implements the repository traits from `matchday_core::storage` on a
//! single-table design. Teams and fixtures share GSI1: teams under a
//! constant partition sorted by name, fixtures under a constant
//! partition sorted by kickoff instant.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use matchday_core::league::{Admin, Fixture, FixtureStatus, Team, User};
use matchday_core::storage::{
    AdminRepository, DateRange, FixtureRepository, Result, TeamRepository, UserRepository,
};

use super::conversions::{
    admin_to_item, fixture_to_item, item_to_admin, item_to_fixture, item_to_team, item_to_user,
    team_to_item, user_to_item,
};
use super::error::{
    map_delete_item_error, map_get_item_error, map_put_item_error, map_query_error,
};
use super::keys;

/// DynamoDB-based repository implementation.
///
/// Provides async access to DynamoDB storage for all entity types.
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client and table name.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Get the table name.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Queries every item in a GSI1 partition, in sort-key order.
    async fn query_partition(
        &self,
        partition: &str,
    ) -> Result<Vec<std::collections::HashMap<String, AttributeValue>>> {
        let result = self
            .client
            .query()
            .table_name(&self.table_name)
            .index_name("GSI1")
            .key_condition_expression("GSI1PK = :pk")
            .expression_attribute_values(":pk", AttributeValue::S(partition.to_string()))
            .send()
            .await
            .map_err(map_query_error)?;

        Ok(result.items.unwrap_or_default())
    }
}

// ============================================================================
// TeamRepository implementation
// ============================================================================

#[async_trait]
impl TeamRepository for DynamoDbRepository {
    async fn get_team(&self, team_id: Uuid) -> Result<Option<Team>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key("PK", AttributeValue::S(keys::team_pk(team_id)))
            .key("SK", AttributeValue::S(keys::team_pk(team_id)))
            .send()
            .await
            .map_err(|e| map_get_item_error(e, "Team", team_id.to_string()))?;

        match result.item {
            Some(item) => Ok(Some(item_to_team(&item)?)),
            None => Ok(None),
        }
    }

    async fn get_team_by_name(&self, name: &str) -> Result<Option<Team>> {
        let result = self
            .client
            .query()
            .table_name(&self.table_name)
            .index_name("GSI1")
            .key_condition_expression("GSI1PK = :pk AND GSI1SK = :sk")
            .expression_attribute_values(
                ":pk",
                AttributeValue::S(keys::TEAM_PARTITION.to_string()),
            )
            .expression_attribute_values(":sk", AttributeValue::S(keys::team_gsi1_sk(name)))
            .send()
            .await
            .map_err(map_query_error)?;

        let items = result.items.unwrap_or_default();
        match items.first() {
            Some(item) => Ok(Some(item_to_team(item)?)),
            None => Ok(None),
        }
    }

    async fn list_teams(&self) -> Result<Vec<Team>> {
        let items = self.query_partition(keys::TEAM_PARTITION).await?;
        items.iter().map(item_to_team).collect()
    }

    async fn create_team(&self, team: &Team) -> Result<()> {
        let item = team_to_item(team);

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .condition_expression("attribute_not_exists(PK)")
            .send()
            .await
            .map_err(|e| map_put_item_error(e, "Team", team.team_id.to_string()))?;

        Ok(())
    }

    async fn update_team(&self, team: &Team) -> Result<()> {
        let item = team_to_item(team);

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .condition_expression("attribute_exists(PK)")
            .send()
            .await
            .map_err(|e| map_put_item_error(e, "Team", team.team_id.to_string()))?;

        Ok(())
    }

    async fn set_team_fixtures(&self, team_id: Uuid, fixtures: Vec<Uuid>) -> Result<()> {
        self.client
            .update_item()
            .table_name(&self.table_name)
            .key("PK", AttributeValue::S(keys::team_pk(team_id)))
            .key("SK", AttributeValue::S(keys::team_pk(team_id)))
            .update_expression("SET fixtures = :fixtures")
            .condition_expression("attribute_exists(PK)")
            .expression_attribute_values(
                ":fixtures",
                AttributeValue::L(
                    fixtures
                        .iter()
                        .map(|id| AttributeValue::S(id.to_string()))
                        .collect(),
                ),
            )
            .send()
            .await
            .map_err(|e| {
                matchday_core::storage::RepositoryError::QueryFailed(format!(
                    "UpdateItem failed for Team {team_id}: {e}"
                ))
            })?;

        Ok(())
    }

    async fn delete_team(&self, team_id: Uuid) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key("PK", AttributeValue::S(keys::team_pk(team_id)))
            .key("SK", AttributeValue::S(keys::team_pk(team_id)))
            .condition_expression("attribute_exists(PK)")
            .send()
            .await
            .map_err(|e| map_delete_item_error(e, "Team", team_id.to_string()))?;

        Ok(())
    }

    async fn search_teams(&self, term: &str) -> Result<Vec<Team>> {
        // Substring matching is not expressible as a key condition, so
        // the team partition is scanned through GSI1 and filtered here.
        let items = self.query_partition(keys::TEAM_PARTITION).await?;
        let teams: Result<Vec<Team>> = items.iter().map(item_to_team).collect();

        Ok(teams?
            .into_iter()
            .filter(|team| {
                team.name.contains(term)
                    || team.manager.contains(term)
                    || team.stadium.contains(term)
                    || team
                        .nickname
                        .as_deref()
                        .is_some_and(|nickname| nickname.contains(term))
            })
            .collect())
    }
}

// ============================================================================
// FixtureRepository implementation
// ============================================================================

#[async_trait]
impl FixtureRepository for DynamoDbRepository {
    async fn get_fixture(&self, fixture_id: Uuid) -> Result<Option<Fixture>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key("PK", AttributeValue::S(keys::fixture_pk(fixture_id)))
            .key("SK", AttributeValue::S(keys::fixture_pk(fixture_id)))
            .send()
            .await
            .map_err(|e| map_get_item_error(e, "Fixture", fixture_id.to_string()))?;

        match result.item {
            Some(item) => Ok(Some(item_to_fixture(&item)?)),
            None => Ok(None),
        }
    }

    async fn find_by_team_and_kickoff(
        &self,
        team: Uuid,
        kick_off: DateTime<Utc>,
    ) -> Result<Vec<Fixture>> {
        let result = self
            .client
            .query()
            .table_name(&self.table_name)
            .index_name("GSI1")
            .key_condition_expression("GSI1PK = :pk AND begins_with(GSI1SK, :instant)")
            .filter_expression("home = :team OR away = :team")
            .expression_attribute_values(
                ":pk",
                AttributeValue::S(keys::FIXTURE_PARTITION.to_string()),
            )
            .expression_attribute_values(
                ":instant",
                AttributeValue::S(keys::fixture_gsi1_sk_instant(kick_off)),
            )
            .expression_attribute_values(":team", AttributeValue::S(team.to_string()))
            .send()
            .await
            .map_err(map_query_error)?;

        let items = result.items.unwrap_or_default();
        items.iter().map(item_to_fixture).collect()
    }

    async fn create_fixture(&self, fixture: &Fixture) -> Result<()> {
        let item = fixture_to_item(fixture);

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .condition_expression("attribute_not_exists(PK)")
            .send()
            .await
            .map_err(|e| map_put_item_error(e, "Fixture", fixture.fixture_id.to_string()))?;

        Ok(())
    }

    async fn update_fixture(&self, fixture: &Fixture) -> Result<()> {
        let item = fixture_to_item(fixture);

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .condition_expression("attribute_exists(PK)")
            .send()
            .await
            .map_err(|e| map_put_item_error(e, "Fixture", fixture.fixture_id.to_string()))?;

        Ok(())
    }

    async fn delete_fixture(&self, fixture_id: Uuid) -> Result<()> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key("PK", AttributeValue::S(keys::fixture_pk(fixture_id)))
            .key("SK", AttributeValue::S(keys::fixture_pk(fixture_id)))
            .condition_expression("attribute_exists(PK)")
            .send()
            .await
            .map_err(|e| map_delete_item_error(e, "Fixture", fixture_id.to_string()))?;

        Ok(())
    }

    async fn list_fixtures(
        &self,
        statuses: &[FixtureStatus],
        range: DateRange,
    ) -> Result<Vec<Fixture>> {
        let result = self
            .client
            .query()
            .table_name(&self.table_name)
            .index_name("GSI1")
            .key_condition_expression("GSI1PK = :pk AND GSI1SK BETWEEN :start AND :end")
            .expression_attribute_values(
                ":pk",
                AttributeValue::S(keys::FIXTURE_PARTITION.to_string()),
            )
            .expression_attribute_values(
                ":start",
                AttributeValue::S(keys::fixture_gsi1_sk_start(range.start)),
            )
            .expression_attribute_values(
                ":end",
                AttributeValue::S(keys::fixture_gsi1_sk_end(range.end)),
            )
            .send()
            .await
            .map_err(map_query_error)?;

        let items = result.items.unwrap_or_default();
        let fixtures: Result<Vec<Fixture>> = items.iter().map(item_to_fixture).collect();

        // Status filtering happens here; the key condition covers only
        // the kickoff range.
        Ok(fixtures?
            .into_iter()
            .filter(|fixture| statuses.contains(&fixture.status))
            .collect())
    }

    async fn search_fixtures(&self, term: &str) -> Result<Vec<Fixture>> {
        let items = self.query_partition(keys::FIXTURE_PARTITION).await?;
        let fixtures: Result<Vec<Fixture>> = items.iter().map(item_to_fixture).collect();

        Ok(fixtures?
            .into_iter()
            .filter(|fixture| {
                fixture.venue.contains(term) || fixture.status.as_str().contains(term)
            })
            .collect())
    }
}

// ============================================================================
// Account repository implementations
// ============================================================================

#[async_trait]
impl UserRepository for DynamoDbRepository {
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key("PK", AttributeValue::S(keys::user_pk(email)))
            .key("SK", AttributeValue::S(keys::user_pk(email)))
            .send()
            .await
            .map_err(|e| map_get_item_error(e, "User", email))?;

        match result.item {
            Some(item) => Ok(Some(item_to_user(&item)?)),
            None => Ok(None),
        }
    }

    async fn create_user(&self, user: &User) -> Result<()> {
        let item = user_to_item(user);

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .condition_expression("attribute_not_exists(PK)")
            .send()
            .await
            .map_err(|e| map_put_item_error(e, "User", user.email.clone()))?;

        Ok(())
    }
}

#[async_trait]
impl AdminRepository for DynamoDbRepository {
    async fn get_admin_by_email(&self, email: &str) -> Result<Option<Admin>> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key("PK", AttributeValue::S(keys::admin_pk(email)))
            .key("SK", AttributeValue::S(keys::admin_pk(email)))
            .send()
            .await
            .map_err(|e| map_get_item_error(e, "Admin", email))?;

        match result.item {
            Some(item) => Ok(Some(item_to_admin(&item)?)),
            None => Ok(None),
        }
    }

    async fn create_admin(&self, admin: &Admin) -> Result<()> {
        let item = admin_to_item(admin);

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .condition_expression("attribute_not_exists(PK)")
            .send()
            .await
            .map_err(|e| map_put_item_error(e, "Admin", admin.email.clone()))?;

        Ok(())
    }
}
