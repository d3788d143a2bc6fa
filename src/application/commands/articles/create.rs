use super::{ArticleCommandService, service::ensure_author_status};
use crate::{
    application::{
        commands::ensure_capability,
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleStatus, ArticleSummary, NewArticle},
        category::CategoryId,
        content::{Body, Title},
        publisher::PublisherId,
    },
};

#[derive(Debug)]
pub struct CreateArticleCommand {
    pub title: String,
    pub content: String,
    pub summary: String,
    pub status: ArticleStatus,
    pub author_id: Option<i64>,
    pub publisher_id: Option<i64>,
    pub category_id: Option<i64>,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    title: Option<String>,
    content: Option<String>,
    summary: String,
    status: ArticleStatus,
    author_id: Option<i64>,
    publisher_id: Option<i64>,
    category_id: Option<i64>,
}

impl CreateArticleCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    pub fn status(mut self, status: ArticleStatus) -> Self {
        self.status = status;
        self
    }

    pub fn author_id(mut self, author_id: Option<i64>) -> Self {
        self.author_id = author_id;
        self
    }

    pub fn publisher_id(mut self, publisher_id: Option<i64>) -> Self {
        self.publisher_id = publisher_id;
        self
    }

    pub fn category_id(mut self, category_id: Option<i64>) -> Self {
        self.category_id = category_id;
        self
    }

    pub fn build(self) -> Result<CreateArticleCommand, &'static str> {
        Ok(CreateArticleCommand {
            title: self.title.ok_or("title is required")?,
            content: self.content.ok_or("content is required")?,
            summary: self.summary,
            status: self.status,
            author_id: self.author_id,
            publisher_id: self.publisher_id,
            category_id: self.category_id,
        })
    }
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        actor: &AuthenticatedUser,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        ensure_capability(actor, "articles", "create")?;

        if command.author_id.is_some_and(|author| author != i64::from(actor.id)) {
            return Err(ApplicationError::forbidden(
                "articles can only be created under your own name",
            ));
        }

        let title = Title::new(command.title)?;
        let content = Body::new(command.content)?;
        let summary = ArticleSummary::new(command.summary)?;
        let status = ensure_author_status(command.status)?;
        let publisher_id = command.publisher_id.map(PublisherId::new).transpose()?;
        let category_id = command.category_id.map(CategoryId::new).transpose()?;
        let now = self.clock.now();

        let new_article = NewArticle {
            title,
            content,
            summary,
            author_id: actor.id,
            publisher_id,
            category_id,
            status,
            created_at: now,
            updated_at: now,
        };

        let created = self.write_repo.insert(new_article).await?;
        self.assembler.article(created).await
    }
}
