//! Repository layer for database operations.
//!
//! Each repository covers one collection and exposes the find / find-all /
//! save / remove / drop operations the model layer builds on. Methods are
//! generic over [`sea_orm::ConnectionTrait`] so they run equally against the
//! plain connection or inside a transaction.

pub mod category;
pub mod todo;

pub use category::CategoryRepository;
pub use todo::{TodoFilter, TodoRepository};
