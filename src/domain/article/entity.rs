// src/domain/article/entity.rs
use crate::domain::article::value_objects::{ArticleId, ArticleStatus, ArticleSummary};
use crate::domain::category::CategoryId;
use crate::domain::content::{Body, Title};
use crate::domain::publisher::PublisherId;
use crate::domain::user::UserId;
use chrono::{DateTime, Utc};
use std::fmt;

/// A news article.
///
/// `status` and `is_approved` are stored side by side and are only kept in
/// step by [`Article::approve`]. Every other write path may leave them
/// disagreeing.
#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: Title,
    pub content: Body,
    pub summary: ArticleSummary,
    pub author_id: UserId,
    pub publisher_id: Option<PublisherId>,
    pub category_id: Option<CategoryId>,
    pub status: ArticleStatus,
    pub is_approved: bool,
    pub approved_by: Option<UserId>,
    pub approved_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub published_at: Option<DateTime<Utc>>,
}

impl Article {
    /// Record an editor's approval. The editor's role is not checked.
    pub fn approve(&mut self, editor: UserId, now: DateTime<Utc>) {
        self.is_approved = true;
        self.status = ArticleStatus::Approved;
        self.approved_by = Some(editor);
        self.approved_at = Some(now);
        self.updated_at = now;
    }

    /// Write the review form's fields verbatim.
    pub fn review(&mut self, status: ArticleStatus, is_approved: bool, now: DateTime<Utc>) {
        self.status = status;
        self.is_approved = is_approved;
        if status == ArticleStatus::Published && self.published_at.is_none() {
            self.published_at = Some(now);
        }
        self.updated_at = now;
    }

    /// No publisher attached.
    pub fn is_independent(&self) -> bool {
        self.publisher_id.is_none()
    }

    pub fn is_authored_by(&self, user_id: UserId) -> bool {
        self.author_id == user_id
    }
}

impl fmt::Display for Article {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: Title,
    pub content: Body,
    pub summary: ArticleSummary,
    pub author_id: UserId,
    pub publisher_id: Option<PublisherId>,
    pub category_id: Option<CategoryId>,
    pub status: ArticleStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Approval and publication fields, written together.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowState {
    pub status: ArticleStatus,
    pub is_approved: bool,
    pub approved_by: Option<UserId>,
    pub approved_at: Option<DateTime<Utc>>,
    pub published_at: Option<DateTime<Utc>>,
}

impl From<&Article> for WorkflowState {
    fn from(article: &Article) -> Self {
        Self {
            status: article.status,
            is_approved: article.is_approved,
            approved_by: article.approved_by,
            approved_at: article.approved_at,
            published_at: article.published_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: Option<Title>,
    pub content: Option<Body>,
    pub summary: Option<ArticleSummary>,
    pub publisher_id: Option<PublisherId>,
    pub category_id: Option<CategoryId>,
    pub status: Option<ArticleStatus>,
    pub workflow: Option<WorkflowState>,
    pub original_updated_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ArticleUpdate {
    pub fn new(id: ArticleId, original_updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            content: None,
            summary: None,
            publisher_id: None,
            category_id: None,
            status: None,
            workflow: None,
            original_updated_at,
            updated_at: original_updated_at,
        }
    }

    pub fn with_title(mut self, title: Title) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_content(mut self, content: Body) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_summary(mut self, summary: ArticleSummary) -> Self {
        self.summary = Some(summary);
        self
    }

    pub fn with_publisher(mut self, publisher_id: PublisherId) -> Self {
        self.publisher_id = Some(publisher_id);
        self
    }

    pub fn with_category(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn with_status(mut self, status: ArticleStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_workflow(mut self, workflow: WorkflowState) -> Self {
        self.workflow = Some(workflow);
        self
    }

    pub fn set_updated_at(&mut self, updated_at: DateTime<Utc>) {
        self.updated_at = updated_at;
    }

    /// Apply the update to an in-memory copy. Repositories without SQL use
    /// this to mirror the column-wise update.
    pub fn apply_to(self, article: &mut Article) {
        if let Some(title) = self.title {
            article.title = title;
        }
        if let Some(content) = self.content {
            article.content = content;
        }
        if let Some(summary) = self.summary {
            article.summary = summary;
        }
        if let Some(publisher_id) = self.publisher_id {
            article.publisher_id = Some(publisher_id);
        }
        if let Some(category_id) = self.category_id {
            article.category_id = Some(category_id);
        }
        if let Some(status) = self.status {
            article.status = status;
        }
        if let Some(workflow) = self.workflow {
            article.status = workflow.status;
            article.is_approved = workflow.is_approved;
            article.approved_by = workflow.approved_by;
            article.approved_at = workflow.approved_at;
            article.published_at = workflow.published_at;
        }
        article.updated_at = self.updated_at;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn sample_article() -> Article {
        let now = Utc::now();
        Article {
            id: ArticleId::new(1).unwrap(),
            title: Title::new("title").unwrap(),
            content: Body::new("body").unwrap(),
            summary: ArticleSummary::default(),
            author_id: UserId::new(2).unwrap(),
            publisher_id: None,
            category_id: None,
            status: ArticleStatus::Draft,
            is_approved: false,
            approved_by: None,
            approved_at: None,
            created_at: now,
            updated_at: now,
            published_at: None,
        }
    }

    #[test]
    fn approve_sets_all_approval_fields() {
        let mut article = sample_article();
        let editor = UserId::new(9).unwrap();
        let now = Utc::now();
        article.approve(editor, now);
        assert!(article.is_approved);
        assert_eq!(article.status, ArticleStatus::Approved);
        assert_eq!(article.approved_by, Some(editor));
        assert_eq!(article.approved_at, Some(now));
        assert_eq!(article.updated_at, now);
    }

    #[test]
    fn approving_twice_only_moves_the_timestamp() {
        let mut article = sample_article();
        let editor = UserId::new(9).unwrap();
        let first = Utc::now();
        article.approve(editor, first);
        let once = WorkflowState::from(&article);

        let second = first + Duration::seconds(5);
        article.approve(editor, second);
        let twice = WorkflowState::from(&article);

        assert_eq!(once.status, twice.status);
        assert_eq!(once.is_approved, twice.is_approved);
        assert_eq!(once.approved_by, twice.approved_by);
        assert_eq!(twice.approved_at, Some(second));
    }

    #[test]
    fn review_keeps_fields_independent() {
        let mut article = sample_article();
        let now = Utc::now();
        article.review(ArticleStatus::Rejected, true, now);
        assert_eq!(article.status, ArticleStatus::Rejected);
        assert!(article.is_approved);
        assert!(article.approved_by.is_none());
    }

    #[test]
    fn review_to_published_stamps_once() {
        let mut article = sample_article();
        let first = Utc::now();
        article.review(ArticleStatus::Published, false, first);
        assert_eq!(article.published_at, Some(first));
        article.review(ArticleStatus::Published, false, first + Duration::hours(1));
        assert_eq!(article.published_at, Some(first));
    }

    #[test]
    fn update_sets_foreign_keys_but_never_clears_them() {
        let mut article = sample_article();
        let publisher = PublisherId::new(4).unwrap();
        let later = article.updated_at + Duration::seconds(1);
        let mut update = ArticleUpdate::new(article.id, article.updated_at).with_publisher(publisher);
        update.set_updated_at(later);
        update.apply_to(&mut article);
        assert_eq!(article.publisher_id, Some(publisher));
        assert!(!article.is_independent());
        assert_eq!(article.updated_at, later);
    }
}
