mod account;
mod common;
mod ticket;

pub use account::*;
pub use common::*;
pub use ticket::*;
