pub mod filter;
pub mod locate;
pub mod store;
pub mod todo_ops;
