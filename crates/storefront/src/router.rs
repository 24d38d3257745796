//! Navigation state machine.
//!
//! Three views, one current value, kept in sync with the addressable
//! location. Navigation writes the canonical `#/<route>` fragment;
//! location changes re-derive the current view. Unrecognized locations
//! fall back to the landing view without rewriting the location.

/// The three storefront views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    /// Welcome page with the call to action.
    #[default]
    Landing,
    /// Catalog listing grouped by category.
    Products,
    /// Cart contents with totals and quantity controls.
    Cart,
}

impl Route {
    /// Parse a bare path segment. Matching is case-sensitive and exact;
    /// anything else is `None`.
    #[must_use]
    pub fn parse(segment: &str) -> Option<Self> {
        match segment {
            "landing" => Some(Self::Landing),
            "products" => Some(Self::Products),
            "cart" => Some(Self::Cart),
            _ => None,
        }
    }

    /// Derive a route from a location fragment.
    ///
    /// Accepts `#/cart`, `/cart`, and bare `cart`; unrecognized values
    /// (including the empty string) normalize to [`Route::Landing`].
    #[must_use]
    pub fn from_fragment(fragment: &str) -> Self {
        let segment = fragment.trim_start_matches('#').trim_start_matches('/');
        Self::parse(segment).unwrap_or_default()
    }

    /// The canonical location fragment for this view.
    #[must_use]
    pub const fn fragment(self) -> &'static str {
        match self {
            Self::Landing => "#/landing",
            Self::Products => "#/products",
            Self::Cart => "#/cart",
        }
    }

    /// The request path serving this view.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Landing => "/",
            Self::Products => "/products",
            Self::Cart => "/cart",
        }
    }

    /// The bare segment name.
    #[must_use]
    pub const fn segment(self) -> &'static str {
        match self {
            Self::Landing => "landing",
            Self::Products => "products",
            Self::Cart => "cart",
        }
    }
}

impl core::fmt::Display for Route {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.segment())
    }
}

/// Flat three-state router synchronized with the addressable location.
///
/// No guards, no async transitions, no history stack; back/forward is
/// left to the host's native navigation.
#[derive(Debug, Clone)]
pub struct Router {
    current: Route,
    location: String,
}

impl Router {
    /// Seed state by reading the location once, covering deep links and
    /// reloads.
    #[must_use]
    pub fn new(initial_location: &str) -> Self {
        Self {
            current: Route::from_fragment(initial_location),
            location: initial_location.to_string(),
        }
    }

    /// The currently shown view.
    #[must_use]
    pub const fn current(&self) -> Route {
        self.current
    }

    /// The stored addressable location.
    #[must_use]
    pub fn location(&self) -> &str {
        &self.location
    }

    /// Internal stimulus: switch views and write the canonical fragment
    /// into the location in the same step, so neither side can diverge.
    pub fn navigate(&mut self, to: Route) {
        self.current = to;
        self.location = to.fragment().to_string();
    }

    /// External stimulus: the location changed. Re-derive the current
    /// view; unrecognized fragments coerce the state to landing but the
    /// stored location keeps whatever value arrived.
    pub fn on_location_change(&mut self, fragment: &str) {
        self.current = Route::from_fragment(fragment);
        self.location = fragment.to_string();
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new("")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_exact_and_case_sensitive() {
        assert_eq!(Route::parse("cart"), Some(Route::Cart));
        assert_eq!(Route::parse("products"), Some(Route::Products));
        assert_eq!(Route::parse("landing"), Some(Route::Landing));
        assert_eq!(Route::parse("Cart"), None);
        assert_eq!(Route::parse("carts"), None);
        assert_eq!(Route::parse(""), None);
    }

    #[test]
    fn test_from_fragment_accepts_all_location_forms() {
        assert_eq!(Route::from_fragment("#/cart"), Route::Cart);
        assert_eq!(Route::from_fragment("/cart"), Route::Cart);
        assert_eq!(Route::from_fragment("cart"), Route::Cart);
        assert_eq!(Route::from_fragment("#/products"), Route::Products);
    }

    #[test]
    fn test_from_fragment_normalizes_unknown_to_landing() {
        assert_eq!(Route::from_fragment("#/xyz"), Route::Landing);
        assert_eq!(Route::from_fragment("#/Cart"), Route::Landing);
        assert_eq!(Route::from_fragment(""), Route::Landing);
        assert_eq!(Route::from_fragment("#/"), Route::Landing);
    }

    #[test]
    fn test_fragment_round_trips_for_every_route() {
        for route in [Route::Landing, Route::Products, Route::Cart] {
            assert_eq!(Route::from_fragment(route.fragment()), route);
        }
    }

    #[test]
    fn test_new_seeds_from_location() {
        // Reloading with "#/cart" restores the cart view.
        let router = Router::new("#/cart");
        assert_eq!(router.current(), Route::Cart);
        assert_eq!(router.location(), "#/cart");
    }

    #[test]
    fn test_new_with_empty_location_starts_on_landing() {
        let router = Router::default();
        assert_eq!(router.current(), Route::Landing);
    }

    #[test]
    fn test_navigate_writes_canonical_fragment() {
        let mut router = Router::default();
        router.navigate(Route::Cart);
        assert_eq!(router.current(), Route::Cart);
        assert_eq!(router.location(), "#/cart");
    }

    #[test]
    fn test_location_change_rederives_state() {
        let mut router = Router::default();
        router.on_location_change("#/products");
        assert_eq!(router.current(), Route::Products);
    }

    #[test]
    fn test_unknown_location_coerces_without_rewrite() {
        let mut router = Router::new("#/cart");
        router.on_location_change("#/xyz");
        assert_eq!(router.current(), Route::Landing);
        // The location is not forced back to a canonical fragment.
        assert_eq!(router.location(), "#/xyz");
    }

    #[test]
    fn test_navigate_then_location_change_do_not_diverge() {
        let mut router = Router::default();
        router.navigate(Route::Products);
        let location = router.location().to_string();
        router.on_location_change(&location);
        assert_eq!(router.current(), Route::Products);
    }
}
