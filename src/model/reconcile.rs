//! Category reconciliation.
//!
//! Categories have no lifecycle of their own: a category record exists exactly
//! as long as at least one todo carries its label. Nothing in the schema
//! enforces that, so every todo mutation that can change the set of live labels
//! goes through [`CategoryReconciler`]. Callers run these inside the same
//! transaction as the todo write they accompany.

use log::info;
use sea_orm::ConnectionTrait;

use crate::constants::{LOG_CATEGORY_CREATED, LOG_CATEGORY_PRUNED};
use crate::error::Result;
use crate::repositories::{CategoryRepository, TodoRepository};

/// Keeps category records in step with the labels todos reference.
pub struct CategoryReconciler;

impl CategoryReconciler {
    /// Normalize a user-supplied label. Blank labels mean "uncategorized".
    pub fn normalize(label: Option<&str>) -> Option<&str> {
        label.map(str::trim).filter(|label| !label.is_empty())
    }

    /// Resolve a label to its stored category, creating the category first if
    /// no record has it yet.
    ///
    /// # Returns
    /// The canonical label to store on the todo, or `None` for a blank label.
    pub async fn ensure_label<C>(conn: &C, label: Option<&str>) -> Result<Option<String>>
    where
        C: ConnectionTrait,
    {
        let Some(label) = Self::normalize(label) else {
            return Ok(None);
        };

        if let Some(existing) = CategoryRepository::get_by_label(conn, label).await? {
            return Ok(Some(existing.label));
        }

        let created = CategoryRepository::insert(conn, label).await?;
        info!("{} '{}' (id {})", LOG_CATEGORY_CREATED, created.label, created.id);
        Ok(Some(created.label))
    }

    /// Remove the category records for `label` when no todo references it any
    /// more.
    ///
    /// Must run after the todo write that may have orphaned the label, on the
    /// same transaction, so the count reflects that write.
    ///
    /// # Returns
    /// The number of category records removed.
    pub async fn release_if_orphaned<C>(conn: &C, label: Option<&str>) -> Result<u64>
    where
        C: ConnectionTrait,
    {
        let Some(label) = Self::normalize(label) else {
            return Ok(0);
        };

        if TodoRepository::count_with_category(conn, label).await? > 0 {
            return Ok(0);
        }

        let mut removed = 0;
        for category in CategoryRepository::find_by_label(conn, label).await? {
            removed += CategoryRepository::delete(conn, category.id).await?;
            info!("{} '{}' (id {})", LOG_CATEGORY_PRUNED, category.label, category.id);
        }
        Ok(removed)
    }

    /// Remove every category no todo references.
    pub async fn prune_orphans<C>(conn: &C) -> Result<u64>
    where
        C: ConnectionTrait,
    {
        let mut removed = 0;
        for category in CategoryRepository::get_orphaned(conn).await? {
            removed += CategoryRepository::delete(conn, category.id).await?;
            info!("{} '{}' (id {})", LOG_CATEGORY_PRUNED, category.label, category.id);
        }
        Ok(removed)
    }
}
