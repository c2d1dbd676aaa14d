//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`:
//! in-memory and PostgreSQL repositories, plus configuration and
//! telemetry setup shared by the binaries.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `postgres` - PostgreSQL database support via SeaORM

pub mod database;
pub mod memory;
pub mod store;
pub mod telemetry;

// Re-exports - In-Memory
pub use memory::{InMemoryAuthorRepository, InMemoryPostRepository};

pub use database::{DatabaseConfig, DatabaseConnections};
pub use store::Repositories;
pub use telemetry::{TelemetryConfig, init_telemetry};

#[cfg(feature = "postgres")]
pub use database::{PostgresAuthorRepository, PostgresPostRepository};
