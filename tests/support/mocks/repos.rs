// tests/support/mocks/repos.rs
//! In-memory repositories backed by `Mutex<Vec<_>>`.
use async_trait::async_trait;
use newsdesk::domain::{
    article::{
        Article, ArticleFilter, ArticleId, ArticleListCursor, ArticleReadRepository,
        ArticleStatus, ArticleUpdate, ArticleWriteRepository, NewArticle,
    },
    category::{Category, CategoryId, CategoryRepository, NewCategory},
    errors::{DomainError, DomainResult},
    newsletter::{NewNewsletter, Newsletter, NewsletterFilter, NewsletterId, NewsletterRepository, NewsletterUpdate},
    password_reset::{
        NewPasswordResetToken, PasswordResetToken, PasswordResetTokenRepository, ResetTokenValue,
    },
    publisher::{MembershipKind, NewPublisher, Publisher, PublisherId, PublisherRepository},
    subscription::{NewSubscription, Subscription, SubscriptionId, SubscriptionRepository},
    user::{Email, NewUser, Role, User, UserId, UserRepository, UserUpdate, Username},
};
use std::sync::Mutex;

fn not_found(what: &str) -> DomainError {
    DomainError::NotFound(format!("{what} not found"))
}

/* -------------------------------- users -------------------------------- */

#[derive(Debug, Default)]
pub struct InMemoryUserRepo {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepo {
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: Mutex::new(users),
        }
    }

    pub fn get(&self, id: i64) -> Option<User> {
        self.users.lock().unwrap().iter().find(|u| u.id.0 == id).cloned()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn count(&self) -> DomainResult<u64> {
        Ok(self.users.lock().unwrap().len() as u64)
    }

    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.username == new_user.username) {
            return Err(DomainError::Conflict("username already taken".into()));
        }
        let id = users.iter().map(|u| u.id.0).max().unwrap_or(0) + 1;
        let user = User {
            id: UserId::new(id)?,
            username: new_user.username,
            email: new_user.email,
            first_name: new_user.first_name,
            last_name: new_user.last_name,
            password_hash: new_user.password_hash,
            role: new_user.role,
            is_active: new_user.is_active,
            date_joined: new_user.date_joined,
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn update(&self, update: UserUpdate) -> DomainResult<User> {
        let mut users = self.users.lock().unwrap();
        let user = users
            .iter_mut()
            .find(|u| u.id == update.id)
            .ok_or_else(|| not_found("user"))?;
        update.apply_to(user);
        Ok(user.clone())
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| &u.username == username).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| &u.email == email).cloned())
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self.get(id.0))
    }

    async fn list_by_role(&self, role: Role) -> DomainResult<Vec<User>> {
        let mut matching: Vec<User> = self
            .users
            .lock()
            .unwrap()
            .iter()
            .filter(|u| u.role == role)
            .cloned()
            .collect();
        matching.sort_by(|a, b| a.username.as_str().cmp(b.username.as_str()));
        Ok(matching)
    }
}

/* -------------------------------- publishers / categories -------------------------------- */

#[derive(Debug, Default)]
pub struct InMemoryPublisherRepo {
    publishers: Mutex<Vec<Publisher>>,
}

impl InMemoryPublisherRepo {
    pub fn with_publishers(publishers: Vec<Publisher>) -> Self {
        Self {
            publishers: Mutex::new(publishers),
        }
    }
}

#[async_trait]
impl PublisherRepository for InMemoryPublisherRepo {
    async fn insert(&self, publisher: NewPublisher) -> DomainResult<Publisher> {
        let mut publishers = self.publishers.lock().unwrap();
        if publishers.iter().any(|p| p.name == publisher.name) {
            return Err(DomainError::Conflict("publisher name already taken".into()));
        }
        let id = publishers.iter().map(|p| p.id.0).max().unwrap_or(0) + 1;
        let created = Publisher {
            id: PublisherId::new(id)?,
            name: publisher.name,
            description: publisher.description,
            website: publisher.website,
            created_at: publisher.created_at,
            editors: Vec::new(),
            journalists: Vec::new(),
        };
        publishers.push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: PublisherId) -> DomainResult<Option<Publisher>> {
        let publishers = self.publishers.lock().unwrap();
        Ok(publishers.iter().find(|p| p.id == id).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Publisher>> {
        let mut publishers = self.publishers.lock().unwrap().clone();
        publishers.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
        Ok(publishers)
    }

    async fn add_member(
        &self,
        id: PublisherId,
        user_id: UserId,
        kind: MembershipKind,
    ) -> DomainResult<Publisher> {
        let mut publishers = self.publishers.lock().unwrap();
        let publisher = publishers
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| not_found("publisher"))?;
        publisher.add_member(user_id, kind);
        Ok(publisher.clone())
    }
}

#[derive(Debug, Default)]
pub struct InMemoryCategoryRepo {
    categories: Mutex<Vec<Category>>,
}

impl InMemoryCategoryRepo {
    pub fn with_categories(categories: Vec<Category>) -> Self {
        Self {
            categories: Mutex::new(categories),
        }
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepo {
    async fn insert(&self, category: NewCategory) -> DomainResult<Category> {
        let mut categories = self.categories.lock().unwrap();
        if categories.iter().any(|c| c.name == category.name) {
            return Err(DomainError::Conflict("category name already taken".into()));
        }
        let id = categories.iter().map(|c| c.id.0).max().unwrap_or(0) + 1;
        let created = Category {
            id: CategoryId::new(id)?,
            name: category.name,
            description: category.description,
        };
        categories.push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: CategoryId) -> DomainResult<Option<Category>> {
        let categories = self.categories.lock().unwrap();
        Ok(categories.iter().find(|c| c.id == id).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<Category>> {
        let mut categories = self.categories.lock().unwrap().clone();
        categories.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
        Ok(categories)
    }
}

/* -------------------------------- articles -------------------------------- */

/// Serves both the write and the read side from one list.
#[derive(Debug, Default)]
pub struct InMemoryArticleRepo {
    articles: Mutex<Vec<Article>>,
}

impl InMemoryArticleRepo {
    pub fn with_articles(articles: Vec<Article>) -> Self {
        Self {
            articles: Mutex::new(articles),
        }
    }

    pub fn get(&self, id: i64) -> Option<Article> {
        self.articles.lock().unwrap().iter().find(|a| a.id.0 == id).cloned()
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleRepo {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut articles = self.articles.lock().unwrap();
        let id = articles.iter().map(|a| a.id.0).max().unwrap_or(0) + 1;
        let published_at =
            (article.status == ArticleStatus::Published).then_some(article.created_at);
        let created = Article {
            id: ArticleId::new(id)?,
            title: article.title,
            content: article.content,
            summary: article.summary,
            author_id: article.author_id,
            publisher_id: article.publisher_id,
            category_id: article.category_id,
            status: article.status,
            is_approved: false,
            approved_by: None,
            approved_at: None,
            created_at: article.created_at,
            updated_at: article.updated_at,
            published_at,
        };
        articles.push(created.clone());
        Ok(created)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let mut articles = self.articles.lock().unwrap();
        let article = articles
            .iter_mut()
            .find(|a| a.id == update.id)
            .ok_or_else(|| not_found("article"))?;
        if article.updated_at != update.original_updated_at {
            return Err(DomainError::Conflict(
                "article update conflict, please retry".into(),
            ));
        }
        update.apply_to(article);
        Ok(article.clone())
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut articles = self.articles.lock().unwrap();
        let before = articles.len();
        articles.retain(|a| a.id != id);
        if articles.len() == before {
            return Err(not_found("article"));
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleRepo {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.get(id.0))
    }

    async fn list_page(
        &self,
        filter: &ArticleFilter,
        limit: u32,
        cursor: Option<ArticleListCursor>,
    ) -> DomainResult<(Vec<Article>, Option<ArticleListCursor>)> {
        let limit = limit.clamp(1, 100) as usize;
        let mut matching: Vec<Article> = self
            .articles
            .lock()
            .unwrap()
            .iter()
            .filter(|a| filter.matches(a))
            .filter(|a| match &cursor {
                Some(c) => (a.created_at, a.id.0) < (c.created_at, c.article_id.0),
                None => true,
            })
            .cloned()
            .collect();
        matching.sort_by(|a, b| (b.created_at, b.id.0).cmp(&(a.created_at, a.id.0)));

        let mut next_cursor = None;
        if matching.len() > limit {
            matching.truncate(limit);
            if let Some(last) = matching.last() {
                next_cursor = Some(ArticleListCursor::from_parts(last.created_at, last.id));
            }
        }
        Ok((matching, next_cursor))
    }
}

/* -------------------------------- newsletters -------------------------------- */

#[derive(Debug, Default)]
pub struct InMemoryNewsletterRepo {
    newsletters: Mutex<Vec<Newsletter>>,
}

#[async_trait]
impl NewsletterRepository for InMemoryNewsletterRepo {
    async fn insert(&self, newsletter: NewNewsletter) -> DomainResult<Newsletter> {
        let mut newsletters = self.newsletters.lock().unwrap();
        let id = newsletters.iter().map(|n| n.id.0).max().unwrap_or(0) + 1;
        let created = Newsletter {
            id: NewsletterId::new(id)?,
            title: newsletter.title,
            content: newsletter.content,
            author_id: newsletter.author_id,
            publisher_id: newsletter.publisher_id,
            created_at: newsletter.created_at,
            updated_at: newsletter.created_at,
        };
        newsletters.push(created.clone());
        Ok(created)
    }

    async fn update(&self, update: NewsletterUpdate) -> DomainResult<Newsletter> {
        let mut newsletters = self.newsletters.lock().unwrap();
        let newsletter = newsletters
            .iter_mut()
            .find(|n| n.id == update.id)
            .ok_or_else(|| not_found("newsletter"))?;
        update.apply_to(newsletter);
        Ok(newsletter.clone())
    }

    async fn delete(&self, id: NewsletterId) -> DomainResult<()> {
        let mut newsletters = self.newsletters.lock().unwrap();
        let before = newsletters.len();
        newsletters.retain(|n| n.id != id);
        if newsletters.len() == before {
            return Err(not_found("newsletter"));
        }
        Ok(())
    }

    async fn find_by_id(&self, id: NewsletterId) -> DomainResult<Option<Newsletter>> {
        let newsletters = self.newsletters.lock().unwrap();
        Ok(newsletters.iter().find(|n| n.id == id).cloned())
    }

    async fn list(&self, filter: &NewsletterFilter) -> DomainResult<Vec<Newsletter>> {
        let mut matching: Vec<Newsletter> = self
            .newsletters
            .lock()
            .unwrap()
            .iter()
            .filter(|n| filter.matches(n))
            .cloned()
            .collect();
        matching.sort_by(|a, b| (b.created_at, b.id.0).cmp(&(a.created_at, a.id.0)));
        Ok(matching)
    }
}

/* -------------------------------- subscriptions -------------------------------- */

#[derive(Debug, Default)]
pub struct InMemorySubscriptionRepo {
    subscriptions: Mutex<Vec<Subscription>>,
}

impl InMemorySubscriptionRepo {
    pub fn len(&self) -> usize {
        self.subscriptions.lock().unwrap().len()
    }
}

#[async_trait]
impl SubscriptionRepository for InMemorySubscriptionRepo {
    async fn insert(&self, subscription: NewSubscription) -> DomainResult<Subscription> {
        let mut subscriptions = self.subscriptions.lock().unwrap();
        if subscriptions
            .iter()
            .any(|s| s.user_id == subscription.user_id && s.target == subscription.target)
        {
            return Err(DomainError::Conflict("already subscribed".into()));
        }
        let id = subscriptions.iter().map(|s| s.id.0).max().unwrap_or(0) + 1;
        let created = Subscription {
            id: SubscriptionId::new(id)?,
            user_id: subscription.user_id,
            target: subscription.target,
            created_at: subscription.created_at,
        };
        subscriptions.push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: SubscriptionId) -> DomainResult<Option<Subscription>> {
        let subscriptions = self.subscriptions.lock().unwrap();
        Ok(subscriptions.iter().find(|s| s.id == id).cloned())
    }

    async fn delete(&self, id: SubscriptionId) -> DomainResult<()> {
        self.subscriptions.lock().unwrap().retain(|s| s.id != id);
        Ok(())
    }

    async fn list_for_user(&self, user_id: UserId) -> DomainResult<Vec<Subscription>> {
        let subscriptions = self.subscriptions.lock().unwrap();
        Ok(subscriptions
            .iter()
            .filter(|s| s.user_id == user_id)
            .cloned()
            .collect())
    }
}

/* -------------------------------- reset tokens -------------------------------- */

#[derive(Debug, Default)]
pub struct InMemoryResetTokenRepo {
    tokens: Mutex<Vec<PasswordResetToken>>,
}

impl InMemoryResetTokenRepo {
    pub fn all(&self) -> Vec<PasswordResetToken> {
        self.tokens.lock().unwrap().clone()
    }
}

#[async_trait]
impl PasswordResetTokenRepository for InMemoryResetTokenRepo {
    async fn insert(&self, token: NewPasswordResetToken) -> DomainResult<PasswordResetToken> {
        let mut tokens = self.tokens.lock().unwrap();
        if tokens.iter().any(|t| t.token == token.token) {
            return Err(DomainError::Conflict("reset token already exists".into()));
        }
        let created = PasswordResetToken {
            id: tokens.len() as i64 + 1,
            user_id: token.user_id,
            token: token.token,
            created_at: token.created_at,
            is_used: false,
        };
        tokens.push(created.clone());
        Ok(created)
    }

    async fn find_by_token(
        &self,
        token: &ResetTokenValue,
    ) -> DomainResult<Option<PasswordResetToken>> {
        let tokens = self.tokens.lock().unwrap();
        Ok(tokens.iter().find(|t| &t.token == token).cloned())
    }

    async fn mark_used(&self, id: i64) -> DomainResult<()> {
        let mut tokens = self.tokens.lock().unwrap();
        let token = tokens
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| not_found("reset token"))?;
        token.mark_used();
        Ok(())
    }
}
