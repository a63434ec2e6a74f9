//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the repository ports backed by PostgreSQL via
//! `diesel-async` and `bb8` connection pooling.
//!
//! - **Thin adapters**: repositories only translate between Diesel rows and
//!   domain types.
//! - **Internal models**: row structs (`models.rs`) and table definitions
//!   (`schema.rs`) never leak into the domain.
//! - **Strongly typed errors**: database failures map onto the port error
//!   enums.
//!
//! # Example
//!
//! ```ignore
//! use artfolio::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/artfolio")).await?;
//! let repo = DieselUserRepository::new(pool);
//! ```

mod diesel_error_mapping;
mod diesel_user_repository;
mod diesel_work_of_art_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_user_repository::DieselUserRepository;
pub use diesel_work_of_art_repository::DieselWorkOfArtRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
