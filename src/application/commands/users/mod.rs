mod login;
mod password;
mod password_reset;
mod register;
mod service;
mod update;

pub use login::{LoginResult, LoginUserCommand};
pub use password::MIN_PASSWORD_LENGTH;
pub use password_reset::{RequestPasswordResetCommand, ResetPasswordCommand};
pub use register::RegisterUserCommand;
pub use service::UserCommandService;
pub use update::UpdateProfileCommand;
