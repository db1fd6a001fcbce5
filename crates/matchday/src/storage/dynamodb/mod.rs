mod conversions;
mod error;
mod keys;
mod repository;

pub use repository::DynamoDbRepository;
