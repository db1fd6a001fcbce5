//! DynamoDB key generation functions.
//!
//! Pure functions for generating partition and sort keys following the
//! single-table design. All functions are sync and have no side effects.

use chrono::{DateTime, SecondsFormat, Utc};
use uuid::Uuid;

// ============================================================================
// Key prefixes
// ============================================================================

pub const TEAM_PREFIX: &str = "TEAM#";
pub const FIXTURE_PREFIX: &str = "FIX#";
pub const USER_PREFIX: &str = "USER#";
pub const ADMIN_PREFIX: &str = "ADMIN#";
pub const NAME_PREFIX: &str = "NAME#";
pub const KICKOFF_PREFIX: &str = "KICK#";

/// GSI1 partition for all team items.
pub const TEAM_PARTITION: &str = "TEAM";
/// GSI1 partition for all fixture items.
pub const FIXTURE_PARTITION: &str = "FIXTURE";

// ============================================================================
// Team keys
// ============================================================================

/// Generate primary key for a Team.
///
/// Pattern: `TEAM#<team_id>`
pub fn team_pk(team_id: Uuid) -> String {
    format!("{TEAM_PREFIX}{team_id}")
}

/// Generate GSI1 sort key for Team name lookup.
///
/// Pattern: `NAME#<name>`
pub fn team_gsi1_sk(name: &str) -> String {
    format!("{NAME_PREFIX}{name}")
}

// ============================================================================
// Fixture keys
// ============================================================================

/// Generate primary key for a Fixture.
///
/// Pattern: `FIX#<fixture_id>`
pub fn fixture_pk(fixture_id: Uuid) -> String {
    format!("{FIXTURE_PREFIX}{fixture_id}")
}

/// Fixed-width kickoff rendering so sort keys order chronologically.
pub fn kickoff_stamp(kick_off: DateTime<Utc>) -> String {
    kick_off.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Generate GSI1 sort key for Fixture (kickoff-sorted lookup).
///
/// Pattern: `KICK#<kickoff>#<fixture_id>`
pub fn fixture_gsi1_sk(kick_off: DateTime<Utc>, fixture_id: Uuid) -> String {
    format!("{KICKOFF_PREFIX}{}#{fixture_id}", kickoff_stamp(kick_off))
}

/// Generate the start bound for a kickoff range query on GSI1SK.
pub fn fixture_gsi1_sk_start(kick_off: DateTime<Utc>) -> String {
    format!("{KICKOFF_PREFIX}{}#", kickoff_stamp(kick_off))
}

/// Generate the end bound for a kickoff range query on GSI1SK.
///
/// The `~` character (ASCII 126) is higher than any UUID character,
/// ensuring all fixtures at the end instant are included.
pub fn fixture_gsi1_sk_end(kick_off: DateTime<Utc>) -> String {
    format!("{KICKOFF_PREFIX}{}#~", kickoff_stamp(kick_off))
}

/// Generate the exact-instant prefix for availability queries.
pub fn fixture_gsi1_sk_instant(kick_off: DateTime<Utc>) -> String {
    format!("{KICKOFF_PREFIX}{}#", kickoff_stamp(kick_off))
}

// ============================================================================
// Account keys
// ============================================================================

/// Generate primary key for a User.
///
/// Pattern: `USER#<email>`
pub fn user_pk(email: &str) -> String {
    format!("{USER_PREFIX}{email}")
}

/// Generate primary key for an Admin.
///
/// Pattern: `ADMIN#<email>`
pub fn admin_pk(email: &str) -> String {
    format!("{ADMIN_PREFIX}{email}")
}
