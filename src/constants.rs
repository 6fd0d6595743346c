//! Constants used throughout the crate
//!
//! File names, defaults and log prefixes live here so the storage, config and
//! logger modules agree on them.

/// Directory name used under the platform config and data directories
pub const APP_DIR_NAME: &str = "todocat";

/// Config file looked up in the current directory
pub const LOCAL_CONFIG_FILE: &str = "todocat.toml";
/// Config file name inside the platform config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";
/// Default database file name inside the platform data directory
pub const DATABASE_FILE_NAME: &str = "todos.sqlite";
/// Log file name inside the platform data directory
pub const LOG_FILE_NAME: &str = "todocat.log";

/// In-memory SQLite connection string
pub const IN_MEMORY_DATABASE_URL: &str = "sqlite::memory:";

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Number of log lines kept in memory for a debug view
pub const LOG_BUFFER_CAPACITY: usize = 500;
/// Timestamp format for log lines
pub const LOG_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

// Log Messages
pub const LOG_CATEGORY_CREATED: &str = "Category: created";
pub const LOG_CATEGORY_PRUNED: &str = "Category: pruned";
pub const LOG_TODO_CREATED: &str = "Todo: created";
pub const LOG_TODO_UPDATED: &str = "Todo: updated";
pub const LOG_TODO_REMOVED: &str = "Todo: removed";
