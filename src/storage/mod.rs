//! Local storage module for todo persistence
//!
//! This module owns the SQLite database backing the two collections:
//! - Todos
//! - Categories

pub mod db;

pub use db::LocalStorage;
