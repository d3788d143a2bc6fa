use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::{
        article::{ArticleUpdate, WorkflowState},
        user::UserId,
    },
};

impl ArticleCommandService {
    /// Mark an article approved by `editor` and persist it. The editor's role
    /// is not checked here; callers gate on the `articles:approve` capability.
    pub async fn approve_article(&self, article_id: i64, editor: UserId) -> ApplicationResult<ArticleDto> {
        let mut article = self.load(article_id).await?;
        let original_updated_at = article.updated_at;

        article.approve(editor, self.clock.now());

        let mut update = ArticleUpdate::new(article.id, original_updated_at)
            .with_workflow(WorkflowState::from(&article));
        update.set_updated_at(article.updated_at);

        let approved = self.write_repo.update(update).await?;
        tracing::info!(article_id = approved.id.0, editor = %editor, "article approved");
        self.assembler.article(approved).await
    }
}
