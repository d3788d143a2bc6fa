// tests/support/builders.rs
use chrono::Duration;

use newsdesk::domain::{
    article::{Article, ArticleId, ArticleStatus, ArticleSummary},
    category::{Category, CategoryId, CategoryName},
    content::{Body, Title},
    publisher::{Publisher, PublisherId, PublisherName},
    user::{Email, PasswordHash, Role, User, UserId, Username},
};

use super::mocks::{fixed_now, plain_hash};

/// Password every fixture user logs in with.
pub const FIXTURE_PASSWORD: &str = "password123";

pub fn user(id: i64, username: &str, role: Role) -> User {
    User {
        id: UserId::new(id).unwrap(),
        username: Username::new(username).unwrap(),
        email: Email::new(format!("{username}@example.com")).unwrap(),
        first_name: String::new(),
        last_name: String::new(),
        password_hash: PasswordHash::new(plain_hash(FIXTURE_PASSWORD)).unwrap(),
        role,
        is_active: true,
        date_joined: fixed_now(),
    }
}

pub fn publisher(id: i64, name: &str, editors: &[i64], journalists: &[i64]) -> Publisher {
    Publisher {
        id: PublisherId::new(id).unwrap(),
        name: PublisherName::new(name).unwrap(),
        description: String::new(),
        website: None,
        created_at: fixed_now(),
        editors: editors.iter().map(|id| UserId::new(*id).unwrap()).collect(),
        journalists: journalists.iter().map(|id| UserId::new(*id).unwrap()).collect(),
    }
}

pub fn category(id: i64, name: &str) -> Category {
    Category {
        id: CategoryId::new(id).unwrap(),
        name: CategoryName::new(name).unwrap(),
        description: String::new(),
    }
}

pub struct ArticleBuilder {
    id: i64,
    title: String,
    content: String,
    author_id: i64,
    publisher_id: Option<i64>,
    category_id: Option<i64>,
    status: ArticleStatus,
    is_approved: bool,
    minutes_after_epoch: i64,
}

impl ArticleBuilder {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            title: format!("Article {id}"),
            content: "Body text".into(),
            author_id: 2,
            publisher_id: None,
            category_id: None,
            status: ArticleStatus::Draft,
            is_approved: false,
            minutes_after_epoch: id,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn author(mut self, author_id: i64) -> Self {
        self.author_id = author_id;
        self
    }

    pub fn publisher(mut self, publisher_id: i64) -> Self {
        self.publisher_id = Some(publisher_id);
        self
    }

    pub fn category(mut self, category_id: i64) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn status(mut self, status: ArticleStatus) -> Self {
        self.status = status;
        self
    }

    pub fn approved(mut self) -> Self {
        self.status = ArticleStatus::Approved;
        self.is_approved = true;
        self
    }

    pub fn build(self) -> Article {
        let created_at = fixed_now() + Duration::minutes(self.minutes_after_epoch);
        Article {
            id: ArticleId::new(self.id).unwrap(),
            title: Title::new(self.title).unwrap(),
            content: Body::new(self.content).unwrap(),
            summary: ArticleSummary::default(),
            author_id: UserId::new(self.author_id).unwrap(),
            publisher_id: self.publisher_id.map(|id| PublisherId::new(id).unwrap()),
            category_id: self.category_id.map(|id| CategoryId::new(id).unwrap()),
            status: self.status,
            is_approved: self.is_approved,
            approved_by: None,
            approved_at: None,
            created_at,
            updated_at: created_at,
            published_at: None,
        }
    }
}
