// src/domain/subscription/mod.rs
pub mod entity;
pub mod repository;

pub use entity::{NewSubscription, Subscription, SubscriptionId, SubscriptionTarget};
pub use repository::SubscriptionRepository;
