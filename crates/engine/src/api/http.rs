//! HTTP routes.
//!
//! Validation failures never surface to the client: a rejected form or an
//! unknown id still ends in the usual redirect. Only page rendering can fail
//! a request, with a generic 500.

use std::path::Path;
use std::sync::Arc;

use axum::{
    extract::{
        rejection::{FormRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Form, Router,
};
use guildhall_domain::AdventurerId;
use tower_http::services::ServeDir;

use super::pages;
use crate::app::App;
use crate::infrastructure::templates::{TemplateContext, TemplateError};

/// Create all page routes. Unmatched paths render the home page.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(home))
        .route("/home", get(home))
        .route("/create", get(create_form).post(create))
        .route("/profil", get(profile))
        .route("/delete", get(delete))
        .route("/modify", get(modify))
        .route("/api/health", get(health))
        .fallback(home)
}

/// Page routes plus static files under `/static`.
pub fn router(app: Arc<App>, static_dir: impl AsRef<Path>) -> Router {
    routes()
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .with_state(app)
}

async fn health() -> &'static str {
    "OK"
}

// =============================================================================
// Pages
// =============================================================================

async fn home(State(app): State<Arc<App>>) -> Result<Html<String>, ApiError> {
    render_page(&app, pages::HOME).await
}

async fn create_form(State(app): State<Arc<App>>) -> Result<Html<String>, ApiError> {
    render_page(&app, pages::CREATE).await
}

async fn profile(State(app): State<Arc<App>>) -> Result<Html<String>, ApiError> {
    let adventurers = app.use_cases.roster.list().await;
    pages::render_profile(&app.templates, &adventurers)
        .await
        .map(Html)
        .map_err(|e| page_error(pages::PROFILE, e))
}

async fn render_page(app: &App, name: &'static str) -> Result<Html<String>, ApiError> {
    app.templates
        .render(name, &TemplateContext::new())
        .await
        .map(Html)
        .map_err(|e| page_error(name, e))
}

fn page_error(page: &'static str, e: TemplateError) -> ApiError {
    ApiError::Internal(format!("Failed to render {page}: {e}"))
}

// =============================================================================
// Roster mutations
// =============================================================================

/// Decoded `key=value` pairs of a query string or form body, in order.
type Pairs = Vec<(String, String)>;

/// The first value sent for `key`. Later repeats are ignored.
fn first_value<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.as_str())
}

/// The `id` query parameter, if present and an integer.
fn adventurer_id(query: Result<Query<Pairs>, QueryRejection>) -> Option<AdventurerId> {
    let pairs = match query {
        Ok(Query(pairs)) => pairs,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Unreadable query string");
            return None;
        }
    };
    first_value(&pairs, "id")?.parse().ok()
}

/// Creation form fields, named as the form submits them.
#[derive(Debug, Default)]
struct CreateForm {
    nom: String,
    classe: String,
    niveau: String,
}

impl CreateForm {
    fn from_pairs(pairs: &[(String, String)]) -> Self {
        let field = |key: &str| first_value(pairs, key).unwrap_or_default().to_string();
        Self {
            nom: field("nom"),
            classe: field("classe"),
            niveau: field("niveau"),
        }
    }
}

async fn create(
    State(app): State<Arc<App>>,
    query: Result<Query<Pairs>, QueryRejection>,
    form: Result<Form<Pairs>, FormRejection>,
) -> Redirect {
    let form = match form {
        Ok(Form(pairs)) => CreateForm::from_pairs(&pairs),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Unreadable creation form");
            CreateForm::default()
        }
    };

    if let Err(e) = app
        .use_cases
        .roster
        .create(adventurer_id(query), &form.nom, &form.classe, &form.niveau)
        .await
    {
        tracing::debug!(error = %e, "Adventurer not created");
    }

    Redirect::to("/home")
}

async fn delete(
    State(app): State<Arc<App>>,
    query: Result<Query<Pairs>, QueryRejection>,
) -> Redirect {
    if let Some(id) = adventurer_id(query) {
        app.use_cases.roster.delete(id).await;
    }
    Redirect::to("/profil")
}

/// Removes the adventurer and sends the client to an empty creation form.
async fn modify(
    State(app): State<Arc<App>>,
    query: Result<Query<Pairs>, QueryRejection>,
) -> Redirect {
    let Some(id) = adventurer_id(query) else {
        return Redirect::to("/profil");
    };

    match app.use_cases.roster.modify(id).await {
        Some(_) => Redirect::to("/create"),
        None => Redirect::to("/profil"),
    }
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug)]
pub enum ApiError {
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Internal(message) => {
                tracing::error!(error = %message, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error").into_response()
            }
        }
    }
}
