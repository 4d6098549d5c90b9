mod access_guard;
mod ticket_service;

pub use access_guard::*;
pub use ticket_service::*;
