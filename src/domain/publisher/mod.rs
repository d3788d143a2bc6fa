// src/domain/publisher/mod.rs
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{MembershipKind, NewPublisher, Publisher};
pub use repository::PublisherRepository;
pub use value_objects::{PublisherId, PublisherName, Website};
