// tests/forms.rs
use axum::http::StatusCode;
use serde_json::json;

mod support;

use daily_blog::application::{
    dto::FeedbackKind, forms::FormState, session::SessionContext,
};
use daily_blog::domain::email::EmailAddress;
use daily_blog::domain::subscription::{NewSubscription, SubscriptionRepository};
use support::{ArticleBuilder, InMemorySubscriptionStore, TestApp, json_request, send, sign_up};

#[tokio::test]
async fn subscribing_twice_reports_already_subscribed() {
    let store = InMemorySubscriptionStore::new();
    store
        .insert(NewSubscription {
            email: EmailAddress::new("reader@example.com").unwrap(),
        })
        .await
        .unwrap();
    let app = TestApp::with_subscriptions(store);
    let mut form = app.services.subscribe_form();

    form.set_email("  reader@example.com ");
    let feedback = form.submit().await.unwrap_err();

    assert_eq!(feedback.kind, FeedbackKind::Conflict);
    assert_eq!(feedback.title, "Already Subscribed");
    assert_eq!(
        feedback.description,
        "This email is already subscribed to our newsletter"
    );
    assert_eq!(app.subscriptions.count(), 1);
    assert_eq!(form.state(), FormState::Idle);
}

#[tokio::test]
async fn subscribe_trims_and_resets_on_success() {
    let app = TestApp::new();
    let mut form = app.services.subscribe_form();

    form.set_email("  new@example.com  ");
    let submitted = form.submit().await.unwrap();

    assert_eq!(
        submitted.feedback.description,
        "Thank you for subscribing to our newsletter!"
    );
    assert_eq!(app.subscriptions.emails(), ["new@example.com"]);
    assert_eq!(form.email(), "");
}

#[tokio::test]
async fn malformed_email_is_rejected_without_an_insert() {
    let app = TestApp::new();
    let mut form = app.services.subscribe_form();

    for email in ["", "   ", "not-an-email", "a@b@c"] {
        form.set_email(email);
        let feedback = form.submit().await.unwrap_err();
        assert_eq!(feedback.description, "Please enter a valid email address");
    }
    assert_eq!(app.subscriptions.attempts(), 0);
}

#[tokio::test]
async fn storage_faults_use_the_generic_subscribe_message() {
    let app = TestApp::with_subscriptions(InMemorySubscriptionStore::failing("timeout"));
    let mut form = app.services.subscribe_form();

    form.set_email("reader@example.com");
    let feedback = form.submit().await.unwrap_err();

    assert_eq!(feedback.kind, FeedbackKind::Failed);
    assert_eq!(feedback.description, "Failed to subscribe. Please try again.");
    assert_eq!(form.email(), "reader@example.com");
}

#[tokio::test]
async fn contact_form_with_blank_message_flags_the_field_and_skips_insert() {
    let app = TestApp::new();
    let mut form = app.services.contact_form();
    form.set_name("Ada");
    form.set_email("ada@example.com");
    form.set_message("   ");

    let feedback = form.submit().await.unwrap_err();

    assert_eq!(feedback.kind, FeedbackKind::Invalid);
    assert_eq!(feedback.description, "Please fill in all required fields.");
    let errors = form.errors();
    assert!(errors.message);
    assert!(!errors.name);
    assert!(!errors.email);
    assert_eq!(app.contacts.attempts(), 0);

    form.set_message("Hello there");
    assert!(!form.errors().message);
}

#[tokio::test]
async fn contact_form_success_resets_fields() {
    let app = TestApp::new();
    let mut form = app.services.contact_form();
    form.set_name("Ada");
    form.set_email("ada@example.com");
    form.set_contact_number("   ");
    form.set_message("Loved the latest post.");

    let submitted = form.submit().await.unwrap();

    assert_eq!(
        submitted.feedback.description,
        "Thank you for your message. We'll get back to you soon."
    );
    assert_eq!(form.fields().name, "");
    assert_eq!(form.fields().message, "");
    let stored = app.contacts.messages();
    assert_eq!(stored.len(), 1);
    assert!(stored[0].contact_number.is_none());
}

#[tokio::test]
async fn author_form_requires_a_session() {
    let app = TestApp::new();
    let mut form = app.services.author_form();
    let mut feed = app.services.article_feed();
    form.set_title("Quiet Mornings");
    form.set_content("Some words.");

    let feedback = form
        .submit(&SessionContext::anonymous(), &mut feed)
        .await
        .unwrap_err();

    assert_eq!(feedback.kind, FeedbackKind::Unauthorized);
    assert_eq!(app.articles.insert_count(), 0);
}

#[tokio::test]
async fn author_form_rejects_blank_required_fields() {
    let app = TestApp::new();
    let mut form = app.services.author_form();
    let mut feed = app.services.article_feed();
    form.set_title("Quiet Mornings");
    form.set_content("  ");

    let feedback = form
        .submit(&SessionContext::anonymous(), &mut feed)
        .await
        .unwrap_err();

    assert_eq!(feedback.description, "Please fill in all required fields.");
    assert_eq!(app.articles.insert_count(), 0);
}

#[tokio::test]
async fn publishing_derives_the_slug_and_refreshes_the_feed() {
    let app = TestApp::new();
    let router = app.router();
    let token = sign_up(&router, "author@example.com", "secret-pass").await;

    let (status, body) = send(
        &router,
        json_request(
            "POST",
            "/api/v1/articles",
            json!({
                "title": "The Art of Mindful Writing!",
                "content": "Write slowly.",
                "category": "Craft",
                "read_time": "5 min read"
            }),
            Some(&token),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED, "{body}");
    assert_eq!(body["feedback"]["description"], "Article published successfully");
    assert_eq!(body["article"]["slug"], "the-art-of-mindful-writing");
    assert_eq!(body["article"]["category"], "Craft");
    assert_eq!(body["total"], 1);
    assert_eq!(app.articles.fetch_count(), 1);
}

#[tokio::test]
async fn failed_publish_surfaces_the_store_message_and_keeps_the_fields() {
    let existing = ArticleBuilder::new("Quiet Mornings").build();
    let app = TestApp::with_articles(vec![existing]);
    let router = app.router();
    let token = sign_up(&router, "author@example.com", "secret-pass").await;
    let session = app
        .services
        .session_queries
        .current_session(Some(&token))
        .await
        .unwrap();

    let mut form = app.services.author_form();
    let mut feed = app.services.article_feed();
    form.set_title("Quiet Mornings");
    form.set_content("A second take.");
    form.set_category("Habits");

    let feedback = form.submit(&session, &mut feed).await.unwrap_err();

    assert_eq!(feedback.kind, FeedbackKind::Conflict);
    assert_eq!(
        feedback.description,
        "an article with this slug already exists"
    );
    assert_eq!(form.fields().title, "Quiet Mornings");
    assert_eq!(form.fields().content, "A second take.");
    assert_eq!(form.fields().category, "Habits");
    assert_eq!(form.state(), FormState::Idle);
    assert_eq!(app.articles.len(), 1);
}

#[tokio::test]
async fn subscribe_endpoint_maps_feedback_to_status_codes() {
    let app = TestApp::new();
    let router = app.router();
    let body = json!({ "email": "reader@example.com" });

    let (first, _) = send(
        &router,
        json_request("POST", "/api/v1/subscriptions", body.clone(), None),
    )
    .await;
    let (second, dup) = send(
        &router,
        json_request("POST", "/api/v1/subscriptions", body, None),
    )
    .await;

    assert_eq!(first, StatusCode::CREATED);
    assert_eq!(second, StatusCode::CONFLICT);
    assert_eq!(dup["feedback"]["title"], "Already Subscribed");
    assert_eq!(app.subscriptions.count(), 1);
}

#[tokio::test]
async fn contact_endpoint_reports_field_errors() {
    let app = TestApp::new();
    let (status, body) = send(
        &app.router(),
        json_request(
            "POST",
            "/api/v1/contact-messages",
            json!({ "name": "", "email": "ada@example.com", "message": "" }),
            None,
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["field_errors"]["name"], true);
    assert_eq!(body["field_errors"]["email"], false);
    assert_eq!(body["field_errors"]["message"], true);
    assert_eq!(app.contacts.attempts(), 0);
}

#[tokio::test]
async fn contact_form_flags_a_malformed_email_without_an_insert() {
    let app = TestApp::new();
    let mut form = app.services.contact_form();
    form.set_name("Ada");
    form.set_email("ada-at-example.com");
    form.set_message("Hello");

    let feedback = form.submit().await.unwrap_err();

    assert_eq!(feedback.kind, FeedbackKind::Invalid);
    assert_eq!(feedback.description, "Please enter a valid email address");
    assert!(form.errors().email);
    assert!(!form.errors().name);
    assert_eq!(form.fields().email, "ada-at-example.com");
    assert_eq!(app.contacts.attempts(), 0);
}

#[tokio::test]
async fn contact_endpoint_rejects_malformed_email_as_unprocessable() {
    let app = TestApp::new();
    let (status, body) = send(
        &app.router(),
        json_request(
            "POST",
            "/api/v1/contact-messages",
            json!({ "name": "Ada", "email": "ada-at-example.com", "message": "Hello" }),
            None,
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["feedback"]["kind"], "invalid");
    assert_eq!(body["field_errors"]["email"], true);
    assert_eq!(app.contacts.attempts(), 0);
}

#[tokio::test]
async fn forms_return_to_idle_and_accept_the_next_submit() {
    let app = TestApp::new();
    let mut form = app.services.subscribe_form();

    for email in ["first@example.com", "second@example.com"] {
        form.set_email(email);
        assert!(form.submit().await.is_ok());
        assert_eq!(form.state(), FormState::Idle);
    }
    assert_eq!(app.subscriptions.count(), 2);
}
