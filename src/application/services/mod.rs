// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            articles::ArticleCommandService, auth::AuthCommandService,
            contact::ContactCommandService, subscriptions::SubscriptionCommandService,
        },
        forms::{ArticleAuthorForm, AuthForm, ContactForm, SubscribeForm},
        ports::{security::PasswordHasher, session::SessionStore},
        queries::{
            articles::{ArticleFeed, ArticleQueryService},
            session::SessionQueryService,
        },
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository},
        contact::ContactMessageRepository,
        subscription::SubscriptionRepository,
        user::UserRepository,
    },
};

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub subscription_commands: Arc<SubscriptionCommandService>,
    pub contact_commands: Arc<ContactCommandService>,
    pub auth_commands: Arc<AuthCommandService>,
    pub session_queries: Arc<SessionQueryService>,
}

impl ApplicationServices {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        article_read_repo: Arc<dyn ArticleReadRepository>,
        subscription_repo: Arc<dyn SubscriptionRepository>,
        contact_repo: Arc<dyn ContactMessageRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        session_store: Arc<dyn SessionStore>,
    ) -> Self {
        let article_commands = Arc::new(ArticleCommandService::new(article_write_repo));
        let article_queries = Arc::new(ArticleQueryService::new(article_read_repo));
        let subscription_commands = Arc::new(SubscriptionCommandService::new(subscription_repo));
        let contact_commands = Arc::new(ContactCommandService::new(contact_repo));
        let auth_commands = Arc::new(AuthCommandService::new(
            user_repo,
            password_hasher,
            Arc::clone(&session_store),
        ));
        let session_queries = Arc::new(SessionQueryService::new(session_store));

        Self {
            article_commands,
            article_queries,
            subscription_commands,
            contact_commands,
            auth_commands,
            session_queries,
        }
    }

    /// Fresh, not yet loaded article feed.
    pub fn article_feed(&self) -> ArticleFeed {
        ArticleFeed::new(Arc::clone(&self.article_queries))
    }

    pub fn author_form(&self) -> ArticleAuthorForm {
        ArticleAuthorForm::new(Arc::clone(&self.article_commands))
    }

    pub fn subscribe_form(&self) -> SubscribeForm {
        SubscribeForm::new(Arc::clone(&self.subscription_commands))
    }

    pub fn contact_form(&self) -> ContactForm {
        ContactForm::new(Arc::clone(&self.contact_commands))
    }

    pub fn auth_form(&self) -> AuthForm {
        AuthForm::new(Arc::clone(&self.auth_commands))
    }
}
