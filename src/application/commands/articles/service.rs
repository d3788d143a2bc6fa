// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{
        assembler::DtoAssembler,
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::article::{
        Article, ArticleId, ArticleReadRepository, ArticleStatus, ArticleWriteRepository,
    },
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) assembler: Arc<DtoAssembler>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(
        write_repo: Arc<dyn ArticleWriteRepository>,
        read_repo: Arc<dyn ArticleReadRepository>,
        assembler: Arc<DtoAssembler>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            assembler,
            clock,
        }
    }

    pub(super) async fn load(&self, id: i64) -> ApplicationResult<Article> {
        let id = ArticleId::new(id)?;
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))
    }
}

/// Authors may only move an article between draft and pending; everything
/// past that goes through approval or review.
pub(super) fn ensure_author_status(status: ArticleStatus) -> ApplicationResult<ArticleStatus> {
    match status {
        ArticleStatus::Draft | ArticleStatus::Pending => Ok(status),
        other => Err(ApplicationError::validation(format!(
            "status '{other}' can only be set by an editor review"
        ))),
    }
}
