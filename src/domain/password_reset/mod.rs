// src/domain/password_reset/mod.rs
pub mod entity;
pub mod repository;

pub use entity::{NewPasswordResetToken, PasswordResetToken, ResetTokenValue, TOKEN_LIFETIME_HOURS};
pub use repository::PasswordResetTokenRepository;
