pub mod resume;
pub mod user;
