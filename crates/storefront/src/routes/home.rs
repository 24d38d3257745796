//! Landing view and navigation handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::Uri,
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;
use tracing::instrument;

use crate::filters;
use crate::router::Route;
use crate::state::AppState;

/// Landing page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate;

/// Navigation form payload: the target location fragment or segment.
#[derive(Debug, Deserialize)]
pub struct NavigateForm {
    pub to: String,
}

/// Display the landing view.
#[instrument(skip(state))]
pub async fn landing(State(state): State<AppState>, uri: Uri) -> impl IntoResponse {
    state.router().on_location_change(uri.path());
    HomeTemplate
}

/// Render the landing view for an unrecognized location.
///
/// The location is recorded as-is and the state coerces to landing; no
/// redirect is issued, so the address the client arrived with stays put.
#[instrument(skip(state))]
pub async fn unknown_location(State(state): State<AppState>, uri: Uri) -> impl IntoResponse {
    state.router().on_location_change(uri.path());
    tracing::debug!(location = %uri.path(), "unrecognized location, showing landing");
    HomeTemplate
}

/// Navigate to a view (internal stimulus).
///
/// One operation updates the router state and the stored location
/// together, then the redirect moves the client to the matching page.
#[instrument(skip(state))]
pub async fn navigate(
    State(state): State<AppState>,
    Form(form): Form<NavigateForm>,
) -> impl IntoResponse {
    let target = Route::from_fragment(&form.to);
    state.router().navigate(target);
    Redirect::to(target.path())
}
