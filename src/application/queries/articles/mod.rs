mod feed;
mod get_by_id;
mod independent;
mod list;
mod service;

pub use feed::SubscriberFeedQuery;
pub use get_by_id::GetArticleByIdQuery;
pub use independent::IndependentArticlesQuery;
pub use list::ListArticlesQuery;
pub use service::ArticleQueryService;
