pub mod handlers;
pub mod images;
pub mod resumes;
pub mod users;
