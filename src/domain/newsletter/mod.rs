// src/domain/newsletter/mod.rs
pub mod entity;
pub mod repository;

pub use entity::{NewNewsletter, Newsletter, NewsletterId, NewsletterUpdate};
pub use repository::{NewsletterFilter, NewsletterRepository};
