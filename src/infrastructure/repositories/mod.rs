pub mod credential_store;
pub mod user_repository;

pub use credential_store::CredentialStore;
pub use user_repository::InMemoryUserRepository;
