use std::sync::Arc;

use crate::{
    application::{
        assembler::DtoAssembler,
        dto::{ArticleListItemDto, AuthenticatedUser, CursorPage},
        error::{ApplicationError, ApplicationResult},
        queries::normalize_limit,
    },
    domain::{
        article::{Article, ArticleFilter, ArticleListCursor, ArticleReadRepository, Visibility},
        errors::DomainError,
        subscription::SubscriptionRepository,
    },
};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) subscriptions: Arc<dyn SubscriptionRepository>,
    pub(super) assembler: Arc<DtoAssembler>,
}

impl ArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        subscriptions: Arc<dyn SubscriptionRepository>,
        assembler: Arc<DtoAssembler>,
    ) -> Self {
        Self {
            read_repo,
            subscriptions,
            assembler,
        }
    }

    /// Widest visibility the caller may ask for when unapproved articles are
    /// requested.
    pub(super) fn unapproved_visibility(
        &self,
        actor: Option<&AuthenticatedUser>,
    ) -> ApplicationResult<Visibility> {
        let actor = actor.ok_or_else(|| {
            ApplicationError::forbidden("authentication required for unapproved articles")
        })?;
        if actor.has_capability("articles", "view:unapproved") {
            Ok(Visibility::All)
        } else if actor.has_capability("articles", "view:unapproved:own") {
            Ok(Visibility::PublicAndOwn(actor.id))
        } else {
            Err(ApplicationError::forbidden(
                "missing capability articles:view:unapproved",
            ))
        }
    }

    pub(super) fn can_view(&self, actor: Option<&AuthenticatedUser>, article: &Article) -> bool {
        if article.status.is_public() {
            return true;
        }
        actor.is_some_and(|actor| {
            actor.has_capability("articles", "view:unapproved")
                || (actor.has_capability("articles", "view:unapproved:own")
                    && article.is_authored_by(actor.id))
        })
    }

    pub(super) fn decode_cursor(
        &self,
        token: Option<&str>,
    ) -> ApplicationResult<Option<ArticleListCursor>> {
        match token {
            Some(value) => match ArticleListCursor::decode(value) {
                Ok(cursor) => Ok(Some(cursor)),
                Err(DomainError::Validation(msg)) => Err(ApplicationError::validation(msg)),
                Err(other) => Err(ApplicationError::from(other)),
            },
            None => Ok(None),
        }
    }

    pub(super) async fn page(
        &self,
        filter: &ArticleFilter,
        limit: u32,
        cursor: Option<&str>,
    ) -> ApplicationResult<CursorPage<ArticleListItemDto>> {
        let limit = normalize_limit(limit);
        let cursor = self.decode_cursor(cursor)?;

        let (records, next_cursor) = self.read_repo.list_page(filter, limit, cursor).await?;

        let items = self
            .assembler
            .articles(records)
            .await?
            .into_iter()
            .map(ArticleListItemDto::from)
            .collect();
        Ok(CursorPage::new(
            items,
            next_cursor.map(|cursor| cursor.encode()),
        ))
    }
}
