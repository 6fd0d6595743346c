//! Category repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    QueryTrait,
};

use crate::entities::{category, todo};
use crate::error::Result;

/// Repository for category-related database operations.
pub struct CategoryRepository;

impl CategoryRepository {
    /// Get all categories ordered by label.
    pub async fn get_all<C>(conn: &C) -> Result<Vec<category::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(category::Entity::find().order_by_asc(category::Column::Label).all(conn).await?)
    }

    /// Get the first category with the given label.
    pub async fn get_by_label<C>(conn: &C, label: &str) -> Result<Option<category::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(category::Entity::find()
            .filter(category::Column::Label.eq(label))
            .order_by_asc(category::Column::Id)
            .one(conn)
            .await?)
    }

    /// Get every category with the given label.
    pub async fn find_by_label<C>(conn: &C, label: &str) -> Result<Vec<category::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(category::Entity::find()
            .filter(category::Column::Label.eq(label))
            .order_by_asc(category::Column::Id)
            .all(conn)
            .await?)
    }

    /// Get categories whose label no todo references.
    pub async fn get_orphaned<C>(conn: &C) -> Result<Vec<category::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(category::Entity::find()
            .filter(
                category::Column::Label.not_in_subquery(
                    todo::Entity::find()
                        .filter(todo::Column::Category.is_not_null())
                        .select_only()
                        .column(todo::Column::Category)
                        .distinct()
                        .into_query(),
                ),
            )
            .order_by_asc(category::Column::Label)
            .all(conn)
            .await?)
    }

    /// Insert a new category.
    pub async fn insert<C>(conn: &C, label: &str) -> Result<category::Model>
    where
        C: ConnectionTrait,
    {
        let model = category::ActiveModel {
            id: ActiveValue::NotSet,
            label: ActiveValue::Set(label.to_string()),
        };
        Ok(model.insert(conn).await?)
    }

    /// Delete a category by id, returning the number of rows removed.
    pub async fn delete<C>(conn: &C, id: i32) -> Result<u64>
    where
        C: ConnectionTrait,
    {
        let result = category::Entity::delete_by_id(id).exec(conn).await?;
        Ok(result.rows_affected)
    }

    /// Delete every category.
    pub async fn delete_all<C>(conn: &C) -> Result<u64>
    where
        C: ConnectionTrait,
    {
        let result = category::Entity::delete_many().exec(conn).await?;
        Ok(result.rows_affected)
    }
}
