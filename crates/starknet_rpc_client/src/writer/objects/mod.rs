pub mod response;
pub mod transaction;
