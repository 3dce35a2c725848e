mod mock_user_repository;
mod mongo_user_repository;

pub use mock_user_repository::MockUserRepository;
pub use mongo_user_repository::MongoUserRepository;
