mod auth;
pub mod record;

pub use auth::AuthorizationPrompt;
pub use auth::ConsolePrompt;
pub use auth::TokenManager;
