mod auth;
mod fixture;
mod team;

pub use auth::{Credentials, RegisterAdmin, RegisterUser};
pub use fixture::{CreateFixture, FixtureListQuery, UpdateFixture};
pub use team::{CreateTeam, PageQuery, SearchQuery, UpdateTeam};
