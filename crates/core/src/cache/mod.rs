mod error;
mod keys;
mod serialization;
mod traits;

pub use error::{CacheError, Result};
pub use keys::{fixtures_key, resource_key, search_key, teams_key};
pub use serialization::{
    deserialize_fixture, deserialize_fixtures, deserialize_hits, deserialize_team,
    deserialize_teams, serialize_fixture, serialize_fixtures, serialize_hits, serialize_team,
    serialize_teams, SerializationError,
};
pub use traits::Cache;
