//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /               - Landing view
//! GET  /health         - Health check
//!
//! # Products
//! GET  /products       - Product listing, grouped by category
//! GET  /products/grid  - Product grid fragment (HTMX)
//!
//! # Cart (HTMX fragments)
//! GET  /cart           - Cart view
//! POST /cart/add       - Add one unit (returns cart items fragment,
//!                        triggers cart-updated)
//! POST /cart/decrease  - Remove one unit (returns cart items fragment)
//! POST /cart/remove    - Delete a line (returns cart items fragment)
//! POST /cart/clear     - Empty the cart (returns cart items fragment)
//! GET  /cart/count     - Cart count badge (fragment)
//!
//! # Navigation
//! POST /navigate       - Switch views; updates router state and the
//!                        location together, then redirects
//! (fallback)           - Unrecognized locations render the landing view
//!
//! # Checkout
//! POST /checkout       - Stub; renders a "coming soon" notice
//! ```

pub mod cart;
pub mod home;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/grid", get(products::grid))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/decrease", post(cart::decrease))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
        .route("/count", get(cart::count))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Landing view
        .route("/", get(home::landing))
        // Product routes
        .nest("/products", product_routes())
        // Cart routes
        .nest("/cart", cart_routes())
        // Explicit navigation (internal stimulus)
        .route("/navigate", post(home::navigate))
        // Checkout stub
        .route("/checkout", post(cart::checkout))
        // Unrecognized locations normalize to the landing view
        .fallback(home::unknown_location)
}
