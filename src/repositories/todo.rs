//! Todo repository for database operations.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder,
};
use serde::{Deserialize, Serialize};

use crate::entities::todo;
use crate::error::Result;

/// Field-match filter for todos. Every field that is set must match.
///
/// An empty `category` matches uncategorized todos.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TodoFilter {
    pub id: Option<i32>,
    pub title: Option<String>,
    pub category: Option<String>,
    pub completed: Option<bool>,
}

impl TodoFilter {
    pub fn id(id: i32) -> Self {
        Self {
            id: Some(id),
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

    fn condition(&self) -> Condition {
        let mut condition = Condition::all();
        if let Some(id) = self.id {
            condition = condition.add(todo::Column::Id.eq(id));
        }
        if let Some(title) = &self.title {
            condition = condition.add(todo::Column::Title.eq(title.as_str()));
        }
        if let Some(label) = &self.category {
            condition = condition.add(category_condition(label));
        }
        if let Some(completed) = self.completed {
            condition = condition.add(todo::Column::Completed.eq(completed));
        }
        condition
    }
}

fn category_condition(label: &str) -> Condition {
    let label = label.trim();
    if label.is_empty() {
        Condition::all().add(todo::Column::Category.is_null())
    } else {
        Condition::all().add(todo::Column::Category.eq(label))
    }
}

/// Repository for todo-related database operations.
pub struct TodoRepository;

impl TodoRepository {
    /// Get all todos ordered by id.
    pub async fn get_all<C>(conn: &C) -> Result<Vec<todo::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(todo::Entity::find().order_by_asc(todo::Column::Id).all(conn).await?)
    }

    /// Get a single todo by id.
    pub async fn get_by_id<C>(conn: &C, id: i32) -> Result<Option<todo::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(todo::Entity::find_by_id(id).one(conn).await?)
    }

    /// Get todos matching a field filter.
    pub async fn find<C>(conn: &C, filter: &TodoFilter) -> Result<Vec<todo::Model>>
    where
        C: ConnectionTrait,
    {
        Ok(todo::Entity::find()
            .filter(filter.condition())
            .order_by_asc(todo::Column::Id)
            .all(conn)
            .await?)
    }

    /// Count todos filed under a category label.
    pub async fn count_with_category<C>(conn: &C, label: &str) -> Result<u64>
    where
        C: ConnectionTrait,
    {
        Ok(todo::Entity::find()
            .filter(category_condition(label))
            .count(conn)
            .await?)
    }

    /// Insert a new, not yet completed todo.
    pub async fn insert<C>(conn: &C, title: String, category: Option<String>) -> Result<todo::Model>
    where
        C: ConnectionTrait,
    {
        let model = todo::ActiveModel {
            id: ActiveValue::NotSet,
            title: ActiveValue::Set(title),
            category: ActiveValue::Set(category),
            completed: ActiveValue::Set(false),
        };
        Ok(model.insert(conn).await?)
    }

    /// Update a todo in the database.
    pub async fn update<C>(conn: &C, todo: todo::ActiveModel) -> Result<todo::Model>
    where
        C: ConnectionTrait,
    {
        Ok(todo.update(conn).await?)
    }

    /// Set the completed flag on every todo.
    pub async fn set_all_completed<C>(conn: &C, completed: bool) -> Result<u64>
    where
        C: ConnectionTrait,
    {
        let result = todo::Entity::update_many()
            .col_expr(todo::Column::Completed, Expr::value(completed))
            .filter(todo::Column::Completed.ne(completed))
            .exec(conn)
            .await?;
        Ok(result.rows_affected)
    }

    /// Delete a todo by id, returning the number of rows removed.
    pub async fn delete<C>(conn: &C, id: i32) -> Result<u64>
    where
        C: ConnectionTrait,
    {
        let result = todo::Entity::delete_by_id(id).exec(conn).await?;
        Ok(result.rows_affected)
    }

    /// Delete every todo matching a filter.
    pub async fn delete_matching<C>(conn: &C, filter: &TodoFilter) -> Result<u64>
    where
        C: ConnectionTrait,
    {
        let result = todo::Entity::delete_many().filter(filter.condition()).exec(conn).await?;
        Ok(result.rows_affected)
    }

    /// Delete every todo.
    pub async fn delete_all<C>(conn: &C) -> Result<u64>
    where
        C: ConnectionTrait,
    {
        let result = todo::Entity::delete_many().exec(conn).await?;
        Ok(result.rows_affected)
    }
}
