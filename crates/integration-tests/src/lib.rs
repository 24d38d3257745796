//! Integration tests for Plantify.
//!
//! The tests assemble the full storefront router in-process against the
//! demo catalog and drive it with `tower::ServiceExt::oneshot` - no
//! network, no external services.
//!
//! # Test Categories
//!
//! - `storefront_pages` - View rendering and location handling
//! - `cart_flow` - Cart mutations, totals, and the checkout stub

#![cfg_attr(not(test), forbid(unsafe_code))]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, header};
use tower::ServiceExt;

use plantify_storefront::catalog::Catalog;
use plantify_storefront::config::StorefrontConfig;
use plantify_storefront::state::AppState;

/// Application state over the demo catalog, seeded at the given
/// location fragment.
#[must_use]
pub fn demo_state(initial_location: &str) -> AppState {
    let config = StorefrontConfig {
        initial_location: initial_location.to_string(),
        ..Default::default()
    };
    AppState::new(config, Catalog::demo())
}

/// Assemble the app router for a state.
///
/// The state stays shared, so one test can issue many requests against
/// fresh router clones and observe accumulated cart changes.
#[must_use]
pub fn app(state: &AppState) -> Router {
    plantify_storefront::app(state.clone())
}

/// Issue a GET request against the app.
///
/// # Panics
///
/// Panics if the request cannot be built or dispatched.
#[allow(clippy::unwrap_used)]
pub async fn get(state: &AppState, path: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(path)
        .body(Body::empty())
        .unwrap();
    app(state).oneshot(request).await.unwrap()
}

/// Issue a form-encoded POST request against the app.
///
/// # Panics
///
/// Panics if the request cannot be built or dispatched.
#[allow(clippy::unwrap_used)]
pub async fn post_form(state: &AppState, path: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    app(state).oneshot(request).await.unwrap()
}

/// Collect a response body as text.
///
/// # Panics
///
/// Panics if the body cannot be collected or is not UTF-8.
#[allow(clippy::unwrap_used)]
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
