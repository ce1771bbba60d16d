pub mod like;
pub mod project;
pub mod user;

pub use like::RecordStoreLikeRepository;
pub use project::RecordStoreProjectRepository;
pub use user::RecordStoreUserRepository;
