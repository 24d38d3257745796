//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page
//! reloads. Every mutation performs one atomic transition on the shared
//! cart store, then renders the cart items fragment from a fresh summary
//! snapshot and fires the `cart-updated` trigger so the count badge and
//! the product grid refresh themselves.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::Uri,
    response::{AppendHeaders, IntoResponse},
};
use serde::Deserialize;
use tracing::instrument;

use plantify_core::ProductId;

use crate::cart::CartSummary;
use crate::filters;
use crate::state::AppState;

/// Cart item display data for templates.
#[derive(Clone)]
pub struct CartItemView {
    pub id: String,
    pub name: String,
    pub price: String,
    pub quantity: u32,
    pub subtotal: String,
    pub image: String,
}

/// Cart display data for templates.
#[derive(Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub total_items: u32,
    pub total_price: String,
}

impl From<&CartSummary> for CartView {
    fn from(summary: &CartSummary) -> Self {
        Self {
            items: summary
                .lines
                .iter()
                .map(|line| CartItemView {
                    id: line.product.id.to_string(),
                    name: line.product.name.clone(),
                    price: line.product.price.to_string(),
                    quantity: line.quantity,
                    subtotal: line.subtotal().to_string(),
                    image: line.product.image.clone(),
                })
                .collect(),
            total_items: summary.total_items,
            total_price: summary.total_price.to_string(),
        }
    }
}

/// Cart mutation form data: the product id being acted on.
#[derive(Debug, Deserialize)]
pub struct CartItemForm {
    pub product_id: String,
}

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub cart: CartView,
}

/// Cart items fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u32,
}

/// Checkout notice fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/checkout_notice.html")]
pub struct CheckoutNoticeTemplate;

/// Build the current cart view from a fresh summary snapshot.
fn current_view(state: &AppState) -> CartView {
    let summary = state.cart().summarize(state.catalog());
    CartView::from(&summary)
}

/// The cart items fragment plus the trigger other fragments listen for.
fn items_fragment(state: &AppState) -> impl IntoResponse + use<> {
    (
        AppendHeaders([("HX-Trigger", "cart-updated")]),
        CartItemsTemplate {
            cart: current_view(state),
        },
    )
}

/// Display the cart view.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>, uri: Uri) -> impl IntoResponse {
    state.router().on_location_change(uri.path());

    CartShowTemplate {
        cart: current_view(&state),
    }
}

/// Add one unit of a product (HTMX).
///
/// Creates the entry at quantity 1 if absent. Both the product-card add
/// button and the cart `+` control post here; the id is not validated
/// against the catalog.
#[instrument(skip(state))]
pub async fn add(
    State(state): State<AppState>,
    Form(form): Form<CartItemForm>,
) -> impl IntoResponse {
    state.cart().increment(ProductId::from(form.product_id));
    items_fragment(&state)
}

/// Remove one unit of a product (HTMX).
///
/// The entry disappears when the quantity reaches zero; absent ids are a
/// no-op.
#[instrument(skip(state))]
pub async fn decrease(
    State(state): State<AppState>,
    Form(form): Form<CartItemForm>,
) -> impl IntoResponse {
    state.cart().decrease(&ProductId::from(form.product_id));
    items_fragment(&state)
}

/// Delete a cart line (HTMX); no-op for absent ids.
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Form(form): Form<CartItemForm>,
) -> impl IntoResponse {
    state.cart().remove(&ProductId::from(form.product_id));
    items_fragment(&state)
}

/// Empty the cart (HTMX).
#[instrument(skip(state))]
pub async fn clear(State(state): State<AppState>) -> impl IntoResponse {
    state.cart().clear();
    items_fragment(&state)
}

/// Get cart count badge (HTMX).
#[instrument(skip(state))]
pub async fn count(State(state): State<AppState>) -> impl IntoResponse {
    let count = state.cart().summarize(state.catalog()).total_items;
    CartCountTemplate { count }
}

/// Checkout stub.
///
/// Surfaces a "coming soon" notice and performs no state change.
#[instrument]
pub async fn checkout() -> impl IntoResponse {
    CheckoutNoticeTemplate
}
