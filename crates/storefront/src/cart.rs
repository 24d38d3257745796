//! Cart state management.
//!
//! The cart is an insertion-ordered mapping from product id to quantity.
//! Mutations never consult the catalog; derived reads join against it and
//! silently skip entries whose id has no catalog product.

use indexmap::IndexMap;

use plantify_core::{Price, Product, ProductId};

use crate::catalog::Catalog;

/// Quantity-tracking cart store.
///
/// Invariant: no entry has a quantity of zero. Reaching zero removes the
/// entry, so iteration order is the insertion order of each id's first
/// add. Every mutation is a complete, synchronous state transition.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    items: IndexMap<ProductId, u32>,
}

impl CartStore {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `id`, creating the entry at quantity 1 if absent.
    ///
    /// This single operation covers both the product-card "add to cart"
    /// and the cart page's `+` control.
    pub fn increment(&mut self, id: ProductId) {
        *self.items.entry(id).or_insert(0) += 1;
    }

    /// Remove one unit of `id`; the entry is deleted when the quantity
    /// reaches zero. Decrementing an absent id is a no-op.
    pub fn decrease(&mut self, id: &ProductId) {
        if let Some(quantity) = self.items.get_mut(id) {
            *quantity -= 1;
            if *quantity == 0 {
                self.items.shift_remove(id);
            }
        }
    }

    /// Delete the entry for `id` regardless of its quantity; no-op if
    /// absent.
    pub fn remove(&mut self, id: &ProductId) {
        self.items.shift_remove(id);
    }

    /// Reset to the empty cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Quantity currently tracked for `id` (zero when absent).
    #[must_use]
    pub fn quantity(&self, id: &ProductId) -> u32 {
        self.items.get(id).copied().unwrap_or(0)
    }

    /// Whether the cart holds an entry for `id`.
    #[must_use]
    pub fn contains(&self, id: &ProductId) -> bool {
        self.items.contains_key(id)
    }

    /// Whether the cart has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct entries (not total units).
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Join the cart against the catalog and compute totals.
    ///
    /// Entries whose id has no catalog product are excluded from the
    /// lines and from both totals. Line order is cart insertion order.
    #[must_use]
    pub fn summarize(&self, catalog: &Catalog) -> CartSummary {
        let lines: Vec<CartLine> = self
            .items
            .iter()
            .filter_map(|(id, &quantity)| {
                catalog.get(id).map(|product| CartLine {
                    product: product.clone(),
                    quantity,
                })
            })
            .collect();

        let total_items = lines.iter().map(|line| line.quantity).sum();
        let total_price = lines.iter().map(CartLine::subtotal).sum();

        CartSummary {
            lines,
            total_items,
            total_price,
        }
    }
}

/// A cart entry joined with its catalog product.
///
/// Ephemeral: recomputed on every read, never stored.
#[derive(Debug, Clone)]
pub struct CartLine {
    /// The resolved catalog product.
    pub product: Product,
    /// Units of the product in the cart.
    pub quantity: u32,
}

impl CartLine {
    /// Line subtotal (`quantity × unit price`).
    #[must_use]
    pub const fn subtotal(&self) -> Price {
        self.product.price.scaled(self.quantity)
    }
}

/// Derived snapshot of the cart for rendering.
#[derive(Debug, Clone)]
pub struct CartSummary {
    /// Resolved lines in insertion order.
    pub lines: Vec<CartLine>,
    /// Sum of all line quantities.
    pub total_items: u32,
    /// Sum of all line subtotals.
    pub total_price: Price,
}

impl CartSummary {
    /// Whether the summary has no resolved lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn p1() -> ProductId {
        ProductId::from("p1")
    }

    fn p2() -> ProductId {
        ProductId::from("p2")
    }

    #[test]
    fn test_increment_creates_then_accumulates() {
        let mut cart = CartStore::new();
        cart.increment(p1());
        assert_eq!(cart.quantity(&p1()), 1);

        // Repeated calls on the same id are additive: quantity == call count.
        cart.increment(p1());
        cart.increment(p1());
        assert_eq!(cart.quantity(&p1()), 3);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_decrease_floors_at_zero_and_removes_entry() {
        let mut cart = CartStore::new();
        cart.increment(p1());
        cart.increment(p1());

        cart.decrease(&p1());
        assert_eq!(cart.quantity(&p1()), 1);

        cart.decrease(&p1());
        assert_eq!(cart.quantity(&p1()), 0);
        assert!(!cart.contains(&p1()));
        assert!(cart.is_empty());

        // Further decrements stay a no-op; the quantity never goes negative.
        cart.decrease(&p1());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_decrease_absent_id_is_noop() {
        let mut cart = CartStore::new();
        cart.decrease(&p1());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_deletes_regardless_of_quantity() {
        let mut cart = CartStore::new();
        cart.increment(p1());
        cart.increment(p1());
        cart.increment(p1());

        cart.remove(&p1());
        assert!(!cart.contains(&p1()));
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let mut cart = CartStore::new();
        cart.increment(p2());
        cart.remove(&p1());
        assert_eq!(cart.quantity(&p2()), 1);
    }

    #[test]
    fn test_clear_always_yields_empty_cart() {
        let mut cart = CartStore::new();
        cart.increment(p1());
        cart.increment(p2());
        cart.clear();
        assert!(cart.is_empty());

        // Clearing an already-empty cart is fine too.
        cart.clear();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_summary_totals() {
        let catalog = Catalog::demo();
        let mut cart = CartStore::new();

        // Add p1 twice: once from the product card, once from the `+`
        // control. Both go through the same operation.
        cart.increment(p1());
        cart.increment(p1());

        let summary = cart.summarize(&catalog);
        assert_eq!(summary.lines.len(), 1);
        assert_eq!(summary.total_items, 2);
        assert_eq!(summary.total_price, Price::new(1598));
    }

    #[test]
    fn test_summary_empty_cart_has_zero_totals() {
        let catalog = Catalog::demo();
        let summary = CartStore::new().summarize(&catalog);
        assert!(summary.is_empty());
        assert_eq!(summary.total_items, 0);
        assert_eq!(summary.total_price, Price::ZERO);
    }

    #[test]
    fn test_summary_after_decreasing_to_zero() {
        let catalog = Catalog::demo();
        let mut cart = CartStore::new();
        cart.increment(p1());
        cart.increment(p1());
        cart.decrease(&p1());
        cart.decrease(&p1());

        let summary = cart.summarize(&catalog);
        assert!(cart.is_empty());
        assert_eq!(summary.total_items, 0);
        assert_eq!(summary.total_price, Price::ZERO);
    }

    #[test]
    fn test_summary_filters_unknown_ids_from_lines_and_totals() {
        let catalog = Catalog::demo();
        let mut cart = CartStore::new();
        cart.increment(ProductId::from("no-such-plant"));
        cart.increment(p1());

        // The unknown entry exists in the cart but resolves to nothing.
        assert_eq!(cart.len(), 2);

        let summary = cart.summarize(&catalog);
        assert_eq!(summary.lines.len(), 1);
        assert_eq!(summary.lines.first().unwrap().product.id, p1());
        assert_eq!(summary.total_items, 1);
        assert_eq!(summary.total_price, Price::new(799));
    }

    #[test]
    fn test_summary_preserves_first_add_order() {
        let catalog = Catalog::demo();
        let mut cart = CartStore::new();
        cart.increment(p2());
        cart.increment(p1());
        cart.increment(p2());

        let summary = cart.summarize(&catalog);
        let order: Vec<&str> = summary
            .lines
            .iter()
            .map(|line| line.product.id.as_str())
            .collect();
        assert_eq!(order, ["p2", "p1"]);
    }

    #[test]
    fn test_line_subtotal() {
        let catalog = Catalog::demo();
        let mut cart = CartStore::new();
        cart.increment(p2());
        cart.increment(p2());
        cart.increment(p2());

        let summary = cart.summarize(&catalog);
        let line = summary.lines.first().unwrap();
        assert_eq!(line.subtotal(), Price::new(4797));
    }
}
