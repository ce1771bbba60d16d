pub mod like;
pub mod models;
pub mod project;
pub mod user;
