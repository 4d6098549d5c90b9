mod jwt;
pub mod response;

pub use jwt::*;
pub use response::*;
