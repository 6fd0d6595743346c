//! Todo model: the data-access facade the application talks to.
//!
//! This module provides the [`TodoModel`] struct, which exposes CRUD operations
//! over todos while keeping the category collection consistent with them. A
//! category record exists exactly as long as some todo carries its label; see
//! [`CategoryReconciler`].
//!
//! Every operation holds the storage lock for its whole duration, and every
//! mutation runs inside one database transaction, so dependent steps (resolve a
//! category, then save the todo; delete a todo, then check whether its category
//! is orphaned) can never interleave with another caller.
//!
//! # Example
//! ```rust,no_run
//! use todocat::config::TodoConfig;
//! use todocat::model::{TodoModel, TodoQuery};
//! use todocat::storage::LocalStorage;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let storage = LocalStorage::in_memory().await?;
//! let model = TodoModel::new(storage, &TodoConfig::default());
//!
//! let todo = model.create(Some("  Buy milk "), Some("errands")).await?;
//! assert_eq!(todo.title, "Buy milk");
//!
//! let todos = model.read(TodoQuery::All).await?;
//! assert_eq!(todos.len(), 1);
//! model.remove(todo.id, todo.category.as_deref()).await?;
//! # Ok(())
//! # }
//! ```

pub mod categories;
pub mod query;
pub mod reconcile;
pub mod todos;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::config::{Config, TodoConfig};
use crate::storage::LocalStorage;

pub use query::TodoQuery;
pub use reconcile::CategoryReconciler;

/// Data-access facade over the todo and category collections.
#[derive(Clone)]
pub struct TodoModel {
    storage: Arc<Mutex<LocalStorage>>,
    allow_empty_title: bool,
}

/// Partial update for a todo. Unset fields keep their stored value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TodoPatch {
    pub title: Option<String>,
    /// New category label; an empty string moves the todo out of any category.
    pub category: Option<String>,
    pub completed: Option<bool>,
}

impl TodoPatch {
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    pub fn category(label: impl Into<String>) -> Self {
        Self {
            category: Some(label.into()),
            ..Self::default()
        }
    }

    pub fn completed(completed: bool) -> Self {
        Self {
            completed: Some(completed),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.category.is_none() && self.completed.is_none()
    }
}

/// Aggregate todo counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoCounts {
    pub active: u64,
    pub completed: u64,
    pub total: u64,
}

impl TodoModel {
    /// Creates a model over already opened storage.
    pub fn new(storage: LocalStorage, config: &TodoConfig) -> Self {
        Self::with_shared_storage(Arc::new(Mutex::new(storage)), config)
    }

    /// Creates a model over storage shared with other components.
    pub fn with_shared_storage(storage: Arc<Mutex<LocalStorage>>, config: &TodoConfig) -> Self {
        Self {
            storage,
            allow_empty_title: config.allow_empty_title,
        }
    }

    /// Opens the storage described by the config and builds a model on it.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or its schema created
    pub async fn open(config: &Config) -> Result<Self> {
        let storage = LocalStorage::open(&config.storage).await?;
        Ok(Self::new(storage, &config.todos))
    }

    /// Shared handle to the underlying storage.
    pub fn storage(&self) -> Arc<Mutex<LocalStorage>> {
        Arc::clone(&self.storage)
    }
}
