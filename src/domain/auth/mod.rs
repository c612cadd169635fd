pub mod dto;
pub mod error;
pub mod jwt;
pub mod service;
pub mod token_service;

pub use dto::{AuthResponse, LoginRequest, RefreshRequest};
pub use error::AuthServiceError;
pub use jwt::{Claims, TokenCodec, TokenError, TokenType};
pub use service::AuthService;
pub use token_service::{TokenPair, TokenPolicy, TokenService};
