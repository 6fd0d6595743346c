use log::{debug, info, warn};
use sea_orm::{ActiveModelTrait, ActiveValue, TransactionTrait};
use std::collections::BTreeSet;

use super::{CategoryReconciler, TodoCounts, TodoModel, TodoPatch, TodoQuery};
use crate::constants::{LOG_TODO_CREATED, LOG_TODO_REMOVED, LOG_TODO_UPDATED};
use crate::entities::todo;
use crate::error::{ModelError, Result};
use crate::repositories::{CategoryRepository, TodoFilter, TodoRepository};

impl TodoModel {
    /// Creates a new todo, creating its category first if the label is new.
    ///
    /// The title is trimmed; a missing title or category defaults to empty,
    /// and an empty category leaves the todo uncategorized.
    ///
    /// # Returns
    /// The stored todo, including its assigned id
    ///
    /// # Errors
    /// Returns `ModelError::Validation` if the trimmed title is empty and empty
    /// titles are not allowed, or `ModelError::StorageUnavailable` if a storage
    /// call fails (nothing is written in that case)
    pub async fn create(&self, title: Option<&str>, category: Option<&str>) -> Result<todo::Model> {
        let title = self.clean_title(title.unwrap_or_default())?;

        let storage = self.storage.lock().await;
        let txn = storage.conn.begin().await?;

        let category = CategoryReconciler::ensure_label(&txn, category).await?;
        let todo = TodoRepository::insert(&txn, title, category).await?;

        txn.commit().await?;
        info!("{} id {} in {:?}", LOG_TODO_CREATED, todo.id, todo.category);
        Ok(todo)
    }

    /// Finds todos: all of them, one by id, or those matching a field filter.
    ///
    /// Reading by id yields an empty list when the id does not exist.
    pub async fn read(&self, query: impl Into<TodoQuery>) -> Result<Vec<todo::Model>> {
        let query = query.into();
        debug!("Todo: reading {}", query);

        let storage = self.storage.lock().await;
        match query.into_filter() {
            None => TodoRepository::get_all(&storage.conn).await,
            Some(filter) => TodoRepository::find(&storage.conn, &filter).await,
        }
    }

    /// Applies a partial update to a todo.
    ///
    /// Moving a todo to another category creates that category if needed and
    /// prunes the one it left when no other todo uses it.
    ///
    /// # Errors
    /// Returns `ModelError::RecordNotFound` if no todo has this id
    pub async fn update(&self, id: i32, patch: TodoPatch) -> Result<todo::Model> {
        let title = patch.title.as_deref().map(|title| self.clean_title(title)).transpose()?;

        let storage = self.storage.lock().await;
        let txn = storage.conn.begin().await?;

        let existing = TodoRepository::get_by_id(&txn, id)
            .await?
            .ok_or(ModelError::RecordNotFound { id })?;
        let previous_category = existing.category.clone();

        let mut active_model: todo::ActiveModel = existing.clone().into();
        if let Some(title) = title {
            active_model.title = ActiveValue::Set(title);
        }
        if let Some(completed) = patch.completed {
            active_model.completed = ActiveValue::Set(completed);
        }

        let mut left_category = None;
        if let Some(label) = patch.category.as_deref() {
            let resolved = CategoryReconciler::ensure_label(&txn, Some(label)).await?;
            if resolved != previous_category {
                left_category = previous_category;
                active_model.category = ActiveValue::Set(resolved);
            }
        }

        let updated = if active_model.is_changed() {
            TodoRepository::update(&txn, active_model).await?
        } else {
            existing
        };

        if left_category.is_some() {
            CategoryReconciler::release_if_orphaned(&txn, left_category.as_deref()).await?;
        }

        txn.commit().await?;
        info!("{} id {}", LOG_TODO_UPDATED, id);
        Ok(updated)
    }

    /// Removes a todo, pruning its category if it was the last todo in it.
    ///
    /// `category` is the label the caller believes the todo belongs to. The
    /// stored record is authoritative; when the two disagree both labels are
    /// checked for orphaning.
    ///
    /// # Returns
    /// The removed todo
    ///
    /// # Errors
    /// Returns `ModelError::RecordNotFound` if no todo has this id
    pub async fn remove(&self, id: i32, category: Option<&str>) -> Result<todo::Model> {
        let storage = self.storage.lock().await;
        let txn = storage.conn.begin().await?;

        let existing = TodoRepository::get_by_id(&txn, id)
            .await?
            .ok_or(ModelError::RecordNotFound { id })?;

        let claimed = CategoryReconciler::normalize(category);
        let stored = existing.category.as_deref();
        if claimed != stored {
            warn!(
                "Todo: remove of id {} claimed category {:?} but it is stored under {:?}",
                id, claimed, stored
            );
        }

        TodoRepository::delete(&txn, id).await?;

        CategoryReconciler::release_if_orphaned(&txn, stored).await?;
        if claimed != stored {
            CategoryReconciler::release_if_orphaned(&txn, claimed).await?;
        }

        txn.commit().await?;
        info!("{} id {}", LOG_TODO_REMOVED, id);
        Ok(existing)
    }

    /// Removes every todo and every category.
    pub async fn remove_all(&self) -> Result<()> {
        let storage = self.storage.lock().await;
        let txn = storage.conn.begin().await?;

        let todos = TodoRepository::delete_all(&txn).await?;
        let categories = CategoryRepository::delete_all(&txn).await?;

        txn.commit().await?;
        info!("Storage: wiped {} todos and {} categories", todos, categories);
        Ok(())
    }

    /// Counts active, completed and total todos.
    pub async fn get_count(&self) -> Result<TodoCounts> {
        let storage = self.storage.lock().await;
        let todos = TodoRepository::get_all(&storage.conn).await?;

        Ok(todos.iter().fold(TodoCounts::default(), |mut counts, todo| {
            if todo.completed {
                counts.completed += 1;
            } else {
                counts.active += 1;
            }
            counts.total += 1;
            counts
        }))
    }

    /// Marks every todo completed (or active).
    ///
    /// # Returns
    /// The number of todos whose flag changed
    pub async fn toggle_all(&self, completed: bool) -> Result<u64> {
        let storage = self.storage.lock().await;
        let changed = TodoRepository::set_all_completed(&storage.conn, completed).await?;
        info!("Todo: marked {} todos completed={}", changed, completed);
        Ok(changed)
    }

    /// Removes every completed todo and the categories this leaves empty.
    ///
    /// # Returns
    /// The number of todos removed
    pub async fn remove_completed(&self) -> Result<u64> {
        let storage = self.storage.lock().await;
        let txn = storage.conn.begin().await?;

        let filter = TodoFilter::completed(true);
        let labels: BTreeSet<String> = TodoRepository::find(&txn, &filter)
            .await?
            .into_iter()
            .filter_map(|todo| todo.category)
            .collect();

        let removed = TodoRepository::delete_matching(&txn, &filter).await?;
        for label in &labels {
            CategoryReconciler::release_if_orphaned(&txn, Some(label)).await?;
        }

        txn.commit().await?;
        info!("{} {} completed todos", LOG_TODO_REMOVED, removed);
        Ok(removed)
    }

    fn clean_title(&self, title: &str) -> Result<String> {
        let title = title.trim();
        if title.is_empty() && !self.allow_empty_title {
            return Err(ModelError::validation("Todo title cannot be empty"));
        }
        Ok(title.to_string())
    }
}
