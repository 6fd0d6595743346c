//! todocat - data-access layer for a to-do list with categories
//!
//! This library stores todos and the categories they are filed under in a
//! local SQLite database, and keeps the two collections consistent: a category
//! is created the first time a todo uses its label and removed when the last
//! such todo goes away.
//!
//! # Modules
//!
//! * [`model`] - The [`model::TodoModel`] facade and category reconciliation
//! * [`repositories`] - Per-collection database operations
//! * [`storage`] - Database connection and schema
//! * [`config`] - Application configuration management
//! * [`logger`] - Logging setup

/// Configuration module for managing application settings
pub mod config;

/// Constants and default values
pub mod constants;

/// SeaORM entity models for database tables
pub mod entities;

/// Error types for model operations
pub mod error;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Todo facade and category reconciliation
pub mod model;

/// Repository layer for database operations
pub mod repositories;

/// Local storage layer
pub mod storage;

// Re-export entity models for convenient access
pub use entities::{category, todo};
pub use error::{ModelError, Result};
pub use model::{TodoCounts, TodoModel, TodoPatch, TodoQuery};
