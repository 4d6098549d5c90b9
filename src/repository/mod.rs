mod account_repository;
mod ticket_repository;

pub use account_repository::*;
pub use ticket_repository::*;
