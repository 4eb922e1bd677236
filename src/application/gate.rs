// src/application/gate.rs
use crate::application::session::SessionContext;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum View {
    Home,
    About,
    Contact,
    SignIn,
    Admin,
}

impl View {
    pub fn path(&self) -> &'static str {
        match self {
            View::Home => "/",
            View::About => "/about",
            View::Contact => "/contact",
            View::SignIn => "/auth",
            View::Admin => "/admin",
        }
    }

    pub fn is_protected(&self) -> bool {
        matches!(self, View::Admin)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Allow,
    Redirect(View),
}

/// Decides, per request, whether a view may render for the given session.
pub struct AuthGate;

impl AuthGate {
    pub fn evaluate(view: View, session: &SessionContext) -> GateDecision {
        match (view, session.is_authenticated()) {
            (v, false) if v.is_protected() => GateDecision::Redirect(View::SignIn),
            (View::SignIn, true) => GateDecision::Redirect(View::Home),
            _ => GateDecision::Allow,
        }
    }
}
