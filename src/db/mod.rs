//! Database module for SQLite operations.
//!
//! This module provides:
//! - Database initialization and schema setup
//! - The SQLite-backed `Repository` record store
//! - The starter catalogue loaded into an empty database

pub mod migrations;
pub mod repo;
pub mod seed;

pub use migrations::init_db;
pub use repo::Repository;
pub use seed::{seed_if_empty, SeedReport};
