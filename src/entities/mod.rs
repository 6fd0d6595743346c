pub mod category;
pub mod todo;

pub use category::Entity as Category;
pub use todo::Entity as Todo;
