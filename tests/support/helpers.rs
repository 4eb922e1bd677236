// tests/support/helpers.rs
use std::sync::Arc;
use std::time::Duration;

use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header::AUTHORIZATION};
use serde_json::Value;
use tower::util::ServiceExt as _;

use daily_blog::application::{
    ports::{security::PasswordHasher, session::SessionStore, time::Clock},
    services::ApplicationServices,
};
use daily_blog::domain::article::{Article, ArticleReadRepository, ArticleWriteRepository};
use daily_blog::infrastructure::{
    security::session_store::InMemorySessionStore, time::SystemClock,
};
use daily_blog::presentation::http::{
    routes::{RouterOptions, build_router},
    state::HttpState,
};

use super::mocks::{
    DummyPasswordHasher, FailingArticleRead, InMemoryArticleStore, InMemoryContactStore,
    InMemorySubscriptionStore, InMemoryUserRepo,
};

/// Services wired to in-memory stores, with handles kept for assertions.
pub struct TestApp {
    pub services: Arc<ApplicationServices>,
    pub articles: Arc<InMemoryArticleStore>,
    pub subscriptions: Arc<InMemorySubscriptionStore>,
    pub contacts: Arc<InMemoryContactStore>,
    pub users: Arc<InMemoryUserRepo>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_articles(Vec::new())
    }

    pub fn with_articles(articles: Vec<Article>) -> Self {
        let store = Arc::new(InMemoryArticleStore::with_articles(articles));
        Self::assemble(
            Arc::clone(&store),
            store,
            Arc::new(InMemorySubscriptionStore::new()),
        )
    }

    pub fn with_subscriptions(subscriptions: InMemorySubscriptionStore) -> Self {
        let store = Arc::new(InMemoryArticleStore::new());
        Self::assemble(Arc::clone(&store), store, Arc::new(subscriptions))
    }

    /// Article reads always fail; writes still land in `self.articles`.
    pub fn with_failing_reads(reads: Arc<FailingArticleRead>) -> Self {
        Self::assemble(
            Arc::new(InMemoryArticleStore::new()),
            reads,
            Arc::new(InMemorySubscriptionStore::new()),
        )
    }

    fn assemble(
        articles: Arc<InMemoryArticleStore>,
        article_reads: Arc<dyn ArticleReadRepository>,
        subscriptions: Arc<InMemorySubscriptionStore>,
    ) -> Self {
        let contacts = Arc::new(InMemoryContactStore::new());
        let users = Arc::new(InMemoryUserRepo::new());
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let session_store: Arc<dyn SessionStore> =
            Arc::new(InMemorySessionStore::new(clock, Duration::from_secs(3600)));
        let password_hasher: Arc<dyn PasswordHasher> = Arc::new(DummyPasswordHasher);
        let article_writes: Arc<dyn ArticleWriteRepository> = articles.clone();

        let services = Arc::new(ApplicationServices::new(
            users.clone(),
            article_writes,
            article_reads,
            subscriptions.clone(),
            contacts.clone(),
            password_hasher,
            session_store,
        ));

        Self {
            services,
            articles,
            subscriptions,
            contacts,
            users,
        }
    }

    pub fn state(&self) -> HttpState {
        HttpState {
            services: Arc::clone(&self.services),
        }
    }

    /// Router without the rate limiter: `oneshot` requests carry no peer
    /// address for the key extractor.
    pub fn router(&self) -> axum::Router {
        build_router(
            self.state(),
            RouterOptions {
                rate_limit: false,
                allowed_origins: Vec::new(),
            },
        )
    }
}

pub fn json_request(method: &str, uri: &str, body: Value, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn get_request(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

/// Send `req` and return the status plus the JSON body (`Null` when empty).
pub async fn send(app: &axum::Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            panic!(
                "expected JSON body, got: {}",
                String::from_utf8_lossy(&bytes)
            )
        })
    };
    (status, value)
}

/// Sign up through the HTTP surface and return the bearer token.
pub async fn sign_up(app: &axum::Router, email: &str, password: &str) -> String {
    let (status, body) = send(
        app,
        json_request(
            "POST",
            "/api/v1/auth/sign-up",
            serde_json::json!({
                "email": email,
                "password": password,
                "confirm_password": password,
            }),
            None,
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "sign-up failed: {body}");
    body["session"]["token"]
        .as_str()
        .expect("session token in sign-up response")
        .to_string()
}
