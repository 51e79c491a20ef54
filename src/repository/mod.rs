//! Database repository layer

pub mod book_repo;
pub mod order_repo;
pub mod user_repo;

pub use book_repo::*;
pub use order_repo::*;
pub use user_repo::*;
