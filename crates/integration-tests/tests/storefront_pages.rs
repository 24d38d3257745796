//! View rendering and location handling.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;

use plantify_integration_tests::{body_text, demo_state, get, post_form};
use plantify_storefront::router::Route;

#[tokio::test]
async fn health_returns_ok() {
    let state = demo_state("");
    let response = get(&state, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "ok");
}

#[tokio::test]
async fn landing_page_renders_welcome() {
    let state = demo_state("");
    let response = get(&state, "/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains("Welcome to Plantify"));
    assert!(body.contains("Get Started"));
}

#[tokio::test]
async fn unknown_location_renders_landing_without_redirect() {
    let state = demo_state("");
    let response = get(&state, "/xyz").await;

    // Coerced to the landing view, not an error and not a redirect.
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Welcome to Plantify"));

    // The router state landed on Landing while the location kept the
    // value it arrived with.
    assert_eq!(state.router().current(), Route::Landing);
    assert_eq!(state.router().location(), "/xyz");
}

#[tokio::test]
async fn route_matching_is_case_sensitive() {
    let state = demo_state("");
    let response = get(&state, "/Cart").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains("Welcome to Plantify"));
    assert_eq!(state.router().current(), Route::Landing);
}

#[tokio::test]
async fn products_page_lists_catalog_grouped_by_category() {
    let state = demo_state("");
    let body = body_text(get(&state, "/products").await).await;

    assert!(body.contains("Snake Plant"));
    assert!(body.contains("₹799"));
    assert!(body.contains("Fiddle Leaf Fig"));
    assert!(body.contains("₹2499"));

    // Category sections in first-seen catalog order.
    let air = body.find("Air Purifier").unwrap();
    let flowering = body.find("Flowering").unwrap();
    assert!(air < flowering);

    assert_eq!(state.router().current(), Route::Products);
}

#[tokio::test]
async fn cart_page_starts_empty() {
    let state = demo_state("");
    let body = body_text(get(&state, "/cart").await).await;

    assert!(body.contains("Your cart is empty."));
    assert!(body.contains("Total items:</strong> 0"));
    assert!(body.contains("Total price:</strong> ₹0"));
    assert_eq!(state.router().current(), Route::Cart);
}

#[tokio::test]
async fn initial_location_seeds_router_state() {
    // A deep link / reload with "#/cart" restores the cart view.
    let state = demo_state("#/cart");
    assert_eq!(state.router().current(), Route::Cart);

    let state = demo_state("#/xyz");
    assert_eq!(state.router().current(), Route::Landing);
}

#[tokio::test]
async fn navigate_updates_state_and_redirects() {
    let state = demo_state("");
    let response = post_form(&state, "/navigate", "to=%23%2Fproducts").await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    let location = response
        .headers()
        .get("location")
        .unwrap()
        .to_str()
        .unwrap();
    assert_eq!(location, "/products");

    // State and stored location moved together, in canonical form.
    assert_eq!(state.router().current(), Route::Products);
    assert_eq!(state.router().location(), "#/products");
}

#[tokio::test]
async fn navigate_with_unknown_target_lands_on_landing() {
    let state = demo_state("");
    let response = post_form(&state, "/navigate", "to=%23%2Fnowhere").await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(state.router().current(), Route::Landing);
}

#[tokio::test]
async fn cart_count_badge_starts_at_zero() {
    let state = demo_state("");
    let body = body_text(get(&state, "/cart/count").await).await;
    assert_eq!(body.trim(), "0");
}
