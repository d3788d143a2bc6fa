use super::{ArticleCommandService, service::ensure_author_status};
use crate::{
    application::{
        dto::{ArticleDto, AuthenticatedUser},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        article::{ArticleStatus, ArticleSummary, ArticleUpdate, specifications::CanUpdateArticleSpec},
        category::CategoryId,
        content::{Body, Title},
        publisher::PublisherId,
    },
};

/// Partial article edit. Absent fields are left as they are; foreign keys
/// can be set or changed but not cleared.
#[derive(Debug, Default)]
pub struct UpdateArticleCommand {
    pub id: i64,
    pub title: Option<String>,
    pub content: Option<String>,
    pub summary: Option<String>,
    pub status: Option<ArticleStatus>,
    pub publisher_id: Option<i64>,
    pub category_id: Option<i64>,
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let article = self.load(command.id).await?;

        let update_spec = CanUpdateArticleSpec::new(&actor.capabilities, &article, actor.id);
        if !update_spec.is_satisfied() {
            return Err(ApplicationError::forbidden(
                "insufficient privileges to update article",
            ));
        }

        let mut update = ArticleUpdate::new(article.id, article.updated_at);
        if let Some(title) = command.title {
            update = update.with_title(Title::new(title)?);
        }
        if let Some(content) = command.content {
            update = update.with_content(Body::new(content)?);
        }
        if let Some(summary) = command.summary {
            update = update.with_summary(ArticleSummary::new(summary)?);
        }
        if let Some(status) = command.status.filter(|status| *status != article.status) {
            update = update.with_status(ensure_author_status(status)?);
        }
        if let Some(publisher_id) = command.publisher_id {
            update = update.with_publisher(PublisherId::new(publisher_id)?);
        }
        if let Some(category_id) = command.category_id {
            update = update.with_category(CategoryId::new(category_id)?);
        }
        update.set_updated_at(self.clock.now());

        let updated = self.write_repo.update(update).await?;
        self.assembler.article(updated).await
    }
}
