mod error;
mod pagination;
mod types;

pub use error::{Error, Result};
pub use pagination::{paginate, Listing, Page, DEFAULT_PAGE_LIMIT};
pub use types::{
    fixture_link, Admin, AdminRole, Fixture, FixtureStatus, ScoreReport, SearchHit, SearchResults,
    Team, User,
};
