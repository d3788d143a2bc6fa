pub mod articles;
pub mod auth;
pub mod catalog;
pub mod newsletters;
pub mod pagination;
pub mod serde_time;
pub mod subscriptions;
pub mod users;

pub use articles::{ArticleDto, ArticleListItemDto};
pub use auth::{AuthTokenDto, AuthenticatedUser, TokenSubject};
pub use catalog::{CategoryDto, PublisherDetailDto, PublisherDto};
pub use newsletters::NewsletterDto;
pub use pagination::CursorPage;
pub use subscriptions::SubscriptionDto;
pub use users::{CapabilityView, UserDto, UserProfileDto};
