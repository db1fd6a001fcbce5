//! Pure functions for serializing/deserializing cached payloads.
//!
//! Cache values are JSON so they stay readable when inspected through
//! the cache backend directly.

use thiserror::Error;

use crate::league::{Fixture, SearchHit, Team};

/// Errors that can occur during cache serialization/deserialization.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SerializationError {
    /// Failed to serialize a value to bytes.
    #[error("Failed to serialize: {0}")]
    SerializeFailed(String),
    /// Failed to deserialize bytes to a value.
    #[error("Failed to deserialize: {0}")]
    DeserializeFailed(String),
}

/// Result type for serialization operations.
pub type Result<T> = std::result::Result<T, SerializationError>;

/// Serializes a team to JSON bytes.
pub fn serialize_team(team: &Team) -> Result<Vec<u8>> {
    serde_json::to_vec(team).map_err(|e| SerializationError::SerializeFailed(e.to_string()))
}

/// Deserializes JSON bytes to a team.
pub fn deserialize_team(bytes: &[u8]) -> Result<Team> {
    serde_json::from_slice(bytes).map_err(|e| SerializationError::DeserializeFailed(e.to_string()))
}

/// Serializes a team listing to JSON bytes.
pub fn serialize_teams(teams: &[Team]) -> Result<Vec<u8>> {
    serde_json::to_vec(teams).map_err(|e| SerializationError::SerializeFailed(e.to_string()))
}

/// Deserializes JSON bytes to a team listing.
pub fn deserialize_teams(bytes: &[u8]) -> Result<Vec<Team>> {
    serde_json::from_slice(bytes).map_err(|e| SerializationError::DeserializeFailed(e.to_string()))
}

/// Serializes a fixture to JSON bytes.
pub fn serialize_fixture(fixture: &Fixture) -> Result<Vec<u8>> {
    serde_json::to_vec(fixture).map_err(|e| SerializationError::SerializeFailed(e.to_string()))
}

/// Deserializes JSON bytes to a fixture.
pub fn deserialize_fixture(bytes: &[u8]) -> Result<Fixture> {
    serde_json::from_slice(bytes).map_err(|e| SerializationError::DeserializeFailed(e.to_string()))
}

/// Serializes a fixture listing to JSON bytes.
pub fn serialize_fixtures(fixtures: &[Fixture]) -> Result<Vec<u8>> {
    serde_json::to_vec(fixtures).map_err(|e| SerializationError::SerializeFailed(e.to_string()))
}

/// Deserializes JSON bytes to a fixture listing.
pub fn deserialize_fixtures(bytes: &[u8]) -> Result<Vec<Fixture>> {
    serde_json::from_slice(bytes).map_err(|e| SerializationError::DeserializeFailed(e.to_string()))
}

/// Serializes combined search hits to JSON bytes.
pub fn serialize_hits(hits: &[SearchHit]) -> Result<Vec<u8>> {
    serde_json::to_vec(hits).map_err(|e| SerializationError::SerializeFailed(e.to_string()))
}

/// Deserializes JSON bytes to combined search hits.
pub fn deserialize_hits(bytes: &[u8]) -> Result<Vec<SearchHit>> {
    serde_json::from_slice(bytes).map_err(|e| SerializationError::DeserializeFailed(e.to_string()))
}
