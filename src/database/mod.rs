mod migrations;
mod postgres;

pub use migrations::*;
pub use postgres::*;
