//! Product listing handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, http::Uri, response::IntoResponse};
use tracing::instrument;

use plantify_core::Product;

use crate::cart::CartStore;
use crate::filters;
use crate::state::AppState;

/// Product display data for templates.
#[derive(Clone)]
pub struct ProductView {
    pub id: String,
    pub name: String,
    pub price: String,
    pub image: String,
    /// Whether the cart already holds this product; the add button
    /// renders disabled as "Added" when set.
    pub in_cart: bool,
}

/// A category section in the products view.
#[derive(Clone)]
pub struct CategoryView {
    pub name: String,
    pub products: Vec<ProductView>,
}

/// Products page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/index.html")]
pub struct ProductsIndexTemplate {
    pub categories: Vec<CategoryView>,
}

/// Product grid fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/product_grid.html")]
pub struct ProductGridTemplate {
    pub categories: Vec<CategoryView>,
}

impl ProductView {
    fn build(product: &Product, cart: &CartStore) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            price: product.price.to_string(),
            image: product.image.clone(),
            in_cart: cart.contains(&product.id),
        }
    }
}

/// Group the catalog by category and mark carted products.
fn category_views(state: &AppState) -> Vec<CategoryView> {
    let cart = state.cart();
    state
        .catalog()
        .by_category()
        .into_iter()
        .map(|(name, products)| CategoryView {
            name: name.to_string(),
            products: products
                .into_iter()
                .map(|product| ProductView::build(product, &cart))
                .collect(),
        })
        .collect()
}

/// Display the product listing.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>, uri: Uri) -> impl IntoResponse {
    state.router().on_location_change(uri.path());

    ProductsIndexTemplate {
        categories: category_views(&state),
    }
}

/// Product grid fragment (for HTMX).
///
/// Re-rendered after cart changes so add buttons flip to "Added".
#[instrument(skip(state))]
pub async fn grid(State(state): State<AppState>) -> impl IntoResponse {
    ProductGridTemplate {
        categories: category_views(&state),
    }
}
