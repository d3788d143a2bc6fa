pub mod articles;
pub mod catalog;
mod capability;
pub mod newsletters;
pub mod subscriptions;
pub mod users;

pub(crate) use capability::ensure_capability;
