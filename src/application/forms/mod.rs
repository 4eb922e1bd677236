// src/application/forms/mod.rs
//! Stateful forms. Each owns its field values, exposes typed setters and
//! performs a single write on submit.

mod article;
mod auth;
mod contact;
mod subscribe;

pub use article::{ArticleAuthorForm, ArticleFields};
pub use auth::{AuthForm, AuthMode};
pub use contact::{ContactFieldErrors, ContactFields, ContactForm};
pub use subscribe::SubscribeForm;

use crate::application::dto::FormFeedback;

pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill in all required fields.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Idle,
    Submitting,
}

/// Successful submission: the stored value plus the feedback to show.
#[derive(Debug, Clone)]
pub struct Submitted<T> {
    pub value: T,
    pub feedback: FormFeedback,
}

pub type FormResult<T> = Result<Submitted<T>, FormFeedback>;

/// Flips a form into `Submitting` for the lifetime of the guard. `submit`
/// holds `&mut self`, so the borrow checker already rules out a second
/// submit on the same form while one is in flight.
struct SubmitGuard<'a> {
    state: &'a mut FormState,
}

impl<'a> SubmitGuard<'a> {
    fn begin(state: &'a mut FormState) -> Self {
        *state = FormState::Submitting;
        Self { state }
    }
}

impl Drop for SubmitGuard<'_> {
    fn drop(&mut self) {
        *self.state = FormState::Idle;
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
