mod password;
mod service;
mod sign_in;
mod sign_out;
mod sign_up;

pub use password::MIN_PASSWORD_LENGTH;
pub use service::AuthCommandService;
pub use sign_in::SignInCommand;
pub use sign_up::SignUpCommand;
