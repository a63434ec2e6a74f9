//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL repositories using Diesel
//! - **memory**: process-local repositories for development and tests
//! - **github**: OAuth identity provider over reqwest
//! - **cloudinary**: upload signer for the image host
//!
//! Adapters translate between domain types and infrastructure
//! representations. They hold no business rules.

pub mod cloudinary;
pub mod github;
pub mod memory;
pub mod persistence;
