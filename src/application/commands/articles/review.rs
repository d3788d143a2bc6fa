use super::ArticleCommandService;
use crate::{
    application::{
        commands::ensure_capability,
        dto::{ArticleDto, AuthenticatedUser},
        error::ApplicationResult,
    },
    domain::article::{ArticleStatus, ArticleUpdate, WorkflowState},
};

/// Editor review form submission. Both fields are stored as given.
#[derive(Debug)]
pub struct ReviewArticleCommand {
    pub id: i64,
    pub status: ArticleStatus,
    pub is_approved: bool,
}

impl ArticleCommandService {
    pub async fn review_article(
        &self,
        actor: &AuthenticatedUser,
        command: ReviewArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        ensure_capability(actor, "articles", "review")?;

        let mut article = self.load(command.id).await?;
        let original_updated_at = article.updated_at;

        article.review(command.status, command.is_approved, self.clock.now());

        let mut update = ArticleUpdate::new(article.id, original_updated_at)
            .with_workflow(WorkflowState::from(&article));
        update.set_updated_at(article.updated_at);

        let reviewed = self.write_repo.update(update).await?;
        tracing::info!(
            article_id = reviewed.id.0,
            status = %reviewed.status,
            is_approved = reviewed.is_approved,
            "article reviewed"
        );
        self.assembler.article(reviewed).await
    }
}
