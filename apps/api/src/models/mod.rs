pub mod field;
pub mod resume;
pub mod user;
