//! Persistence of fetched repositories

mod sqlite;

pub use sqlite::SqliteRepositoryStore;
