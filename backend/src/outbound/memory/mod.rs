//! In-memory repository adapters.
//!
//! Used when no database URL is configured and by integration tests. State
//! lives for the lifetime of the process.

mod user_repository;
mod work_of_art_repository;

pub use user_repository::InMemoryUserRepository;
pub use work_of_art_repository::InMemoryWorkOfArtRepository;
