pub mod model;

pub use model::UserCredentials;
