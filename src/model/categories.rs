use log::info;
use sea_orm::TransactionTrait;

use super::{CategoryReconciler, TodoModel};
use crate::entities::category;
use crate::error::Result;
use crate::repositories::CategoryRepository;

impl TodoModel {
    /// Get all categories ordered by label (for display)
    pub async fn categories(&self) -> Result<Vec<category::Model>> {
        let storage = self.storage.lock().await;
        CategoryRepository::get_all(&storage.conn).await
    }

    /// Removes every category no todo references.
    ///
    /// Normal operation never leaves such categories behind; this repairs
    /// databases written without reconciliation.
    ///
    /// # Returns
    /// The number of categories removed
    pub async fn prune_orphaned_categories(&self) -> Result<u64> {
        let storage = self.storage.lock().await;
        let txn = storage.conn.begin().await?;

        let removed = CategoryReconciler::prune_orphans(&txn).await?;

        txn.commit().await?;
        if removed > 0 {
            info!("Category: pruned {} orphaned categories", removed);
        }
        Ok(removed)
    }
}
