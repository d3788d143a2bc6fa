// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        ApplicationResult,
        assembler::DtoAssembler,
        commands::{
            articles::ArticleCommandService, catalog::CatalogCommandService,
            ensure_capability, newsletters::NewsletterCommandService,
            subscriptions::SubscriptionCommandService, users::UserCommandService,
        },
        dto::AuthenticatedUser,
        ports::{
            notification::PasswordResetNotifier,
            security::{PasswordHasher, TokenManager},
            time::Clock,
            util::ResetTokenGenerator,
        },
        queries::{
            articles::ArticleQueryService, catalog::CatalogQueryService,
            newsletters::NewsletterQueryService, subscriptions::SubscriptionQueryService,
            users::UserQueryService,
        },
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository},
        category::CategoryRepository,
        newsletter::NewsletterRepository,
        password_reset::PasswordResetTokenRepository,
        publisher::PublisherRepository,
        subscription::SubscriptionRepository,
        user::UserRepository,
    },
};

/// Storage handles the services are built from.
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub publishers: Arc<dyn PublisherRepository>,
    pub categories: Arc<dyn CategoryRepository>,
    pub article_writes: Arc<dyn ArticleWriteRepository>,
    pub article_reads: Arc<dyn ArticleReadRepository>,
    pub newsletters: Arc<dyn NewsletterRepository>,
    pub subscriptions: Arc<dyn SubscriptionRepository>,
    pub reset_tokens: Arc<dyn PasswordResetTokenRepository>,
}

/// Non-storage collaborators.
#[derive(Clone)]
pub struct Ports {
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub token_manager: Arc<dyn TokenManager>,
    pub reset_token_generator: Arc<dyn ResetTokenGenerator>,
    pub reset_notifier: Arc<dyn PasswordResetNotifier>,
    pub clock: Arc<dyn Clock>,
}

pub struct ApplicationServices {
    pub user_commands: Arc<UserCommandService>,
    pub user_queries: Arc<UserQueryService>,
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub newsletter_commands: Arc<NewsletterCommandService>,
    pub newsletter_queries: Arc<NewsletterQueryService>,
    pub catalog_commands: Arc<CatalogCommandService>,
    pub catalog_queries: Arc<CatalogQueryService>,
    pub subscription_commands: Arc<SubscriptionCommandService>,
    pub subscription_queries: Arc<SubscriptionQueryService>,
    token_manager: Arc<dyn TokenManager>,
}

impl ApplicationServices {
    pub fn new(repos: Repositories, ports: Ports) -> Self {
        let assembler = Arc::new(DtoAssembler::new(
            Arc::clone(&repos.users),
            Arc::clone(&repos.publishers),
            Arc::clone(&repos.categories),
        ));

        let user_commands = Arc::new(UserCommandService::new(
            Arc::clone(&repos.users),
            Arc::clone(&repos.reset_tokens),
            Arc::clone(&ports.password_hasher),
            Arc::clone(&ports.token_manager),
            Arc::clone(&ports.reset_token_generator),
            Arc::clone(&ports.reset_notifier),
            Arc::clone(&ports.clock),
        ));
        let user_queries = Arc::new(UserQueryService::new(
            Arc::clone(&repos.users),
            Arc::clone(&ports.clock),
        ));

        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&repos.article_writes),
            Arc::clone(&repos.article_reads),
            Arc::clone(&assembler),
            Arc::clone(&ports.clock),
        ));
        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&repos.article_reads),
            Arc::clone(&repos.subscriptions),
            Arc::clone(&assembler),
        ));

        let newsletter_commands = Arc::new(NewsletterCommandService::new(
            Arc::clone(&repos.newsletters),
            Arc::clone(&assembler),
            Arc::clone(&ports.clock),
        ));
        let newsletter_queries = Arc::new(NewsletterQueryService::new(
            Arc::clone(&repos.newsletters),
            Arc::clone(&assembler),
        ));

        let catalog_commands = Arc::new(CatalogCommandService::new(
            Arc::clone(&repos.publishers),
            Arc::clone(&repos.categories),
            Arc::clone(&assembler),
            Arc::clone(&ports.clock),
        ));
        let catalog_queries = Arc::new(CatalogQueryService::new(
            Arc::clone(&repos.publishers),
            Arc::clone(&repos.categories),
            Arc::clone(&assembler),
        ));

        let subscription_commands = Arc::new(SubscriptionCommandService::new(
            Arc::clone(&repos.subscriptions),
            Arc::clone(&assembler),
            Arc::clone(&ports.clock),
        ));
        let subscription_queries = Arc::new(SubscriptionQueryService::new(
            Arc::clone(&repos.subscriptions),
            Arc::clone(&assembler),
        ));

        Self {
            user_commands,
            user_queries,
            article_commands,
            article_queries,
            newsletter_commands,
            newsletter_queries,
            catalog_commands,
            catalog_queries,
            subscription_commands,
            subscription_queries,
            token_manager: ports.token_manager,
        }
    }

    pub fn token_manager(&self) -> Arc<dyn TokenManager> {
        Arc::clone(&self.token_manager)
    }

    pub async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        self.token_manager.authenticate(token).await
    }

    /// Authenticate a raw bearer token and require one capability.
    pub async fn authenticate_and_authorize(
        &self,
        token: &str,
        resource: &str,
        action: &str,
    ) -> ApplicationResult<AuthenticatedUser> {
        let user = self.authenticate(token).await?;
        ensure_capability(&user, resource, action)?;
        Ok(user)
    }
}
