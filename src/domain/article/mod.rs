pub mod entity;
pub mod repository;
pub mod specifications;
pub mod value_objects;

pub use entity::{Article, ArticleUpdate, NewArticle, WorkflowState};
pub use repository::{
    ArticleFilter, ArticleReadRepository, ArticleWriteRepository, FeedScope, Visibility,
};
pub use value_objects::{ArticleId, ArticleListCursor, ArticleStatus, ArticleSummary};
