pub mod articles;
pub mod auth;
pub mod catalog;
pub mod forms;
pub mod journalists;
pub mod newsletters;
pub mod subscriptions;
