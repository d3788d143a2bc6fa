// tests/support/mocks/mod.rs
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod notification;
pub mod repos;
pub mod security;
pub mod time;

pub use notification::{RecordingNotifier, SequentialResetTokens};
pub use repos::{
    InMemoryArticleRepo, InMemoryCategoryRepo, InMemoryNewsletterRepo, InMemoryPublisherRepo,
    InMemoryResetTokenRepo, InMemorySubscriptionRepo, InMemoryUserRepo,
};
pub use security::{
    DummyTokenManager, EDITOR_ID, EDITOR_TOKEN, JOURNALIST_ID, JOURNALIST_TOKEN,
    PlainPasswordHasher, READER_ID, READER_TOKEN, plain_hash,
};
pub use time::{TestClock, fixed_now};
