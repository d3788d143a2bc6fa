pub mod article;
pub mod category;
pub mod content;
pub mod errors;
pub mod newsletter;
pub mod password_reset;
pub mod publisher;
pub mod subscription;
pub mod user;
