use chrono::{DateTime, Utc};
use contracts::domain::cart::CartItem;
use contracts::domain::product::{Product, ProductId};

/// In-memory cart state.
///
/// `total_items` and `total_price` are derived from `items` and recomputed by
/// the reducer after every transition; they are never mutated independently.
/// `is_loading` is true only between startup and the arrival of the stored
/// snapshot, and consumers must not read totals while it is set.
#[derive(Debug, Clone, PartialEq)]
pub struct CartState {
    /// Line items in insertion order, unique per product id.
    pub items: Vec<CartItem>,
    pub total_items: u32,
    pub total_price: f64,
    pub is_loading: bool,
}

impl CartState {
    /// Empty state used at startup, before the stored snapshot arrives.
    pub fn loading() -> Self {
        Self {
            items: Vec::new(),
            total_items: 0,
            total_price: 0.0,
            is_loading: true,
        }
    }

    /// Quantity of the given product, 0 when not in the cart.
    pub fn get_item_quantity(&self, id: &ProductId) -> u32 {
        self.items
            .iter()
            .find(|line| &line.id == id)
            .map(|line| line.quantity)
            .unwrap_or(0)
    }

    pub fn is_in_cart(&self, id: &ProductId) -> bool {
        self.items.iter().any(|line| &line.id == id)
    }
}

/// Closed set of cart transitions.
///
/// `AddItem` carries the addition timestamp so the reducer stays a pure
/// function; the context injects `Utc::now()` at dispatch time.
#[derive(Debug, Clone)]
pub enum CartAction {
    AddItem {
        product: Product,
        added_at: DateTime<Utc>,
    },
    RemoveItem(ProductId),
    UpdateQuantity {
        id: ProductId,
        quantity: i64,
    },
    ClearCart,
    LoadSnapshot(Vec<CartItem>),
}

/// Pure cart transition function.
///
/// - `AddItem`: increments an existing line or appends a new one with
///   quantity 1, preserving insertion order.
/// - `RemoveItem`: drops the matching line; no-op when absent.
/// - `UpdateQuantity`: `quantity <= 0` removes the line, otherwise sets the
///   exact quantity, saturating at `u32::MAX`; no-op when the line is absent.
/// - `ClearCart`: empties the collection.
/// - `LoadSnapshot`: installs the restored lines and ends the loading phase.
pub fn cart_reducer(state: &CartState, action: CartAction) -> CartState {
    match action {
        CartAction::AddItem { product, added_at } => {
            let mut items = state.items.clone();
            if let Some(line) = items.iter_mut().find(|line| line.id == product.id) {
                line.quantity += 1;
            } else {
                items.push(CartItem::new(product, added_at));
            }
            with_totals(items, state.is_loading)
        }
        CartAction::RemoveItem(id) => {
            let items = state
                .items
                .iter()
                .filter(|line| line.id != id)
                .cloned()
                .collect();
            with_totals(items, state.is_loading)
        }
        CartAction::UpdateQuantity { id, quantity } => {
            if quantity <= 0 {
                return cart_reducer(state, CartAction::RemoveItem(id));
            }
            let mut items = state.items.clone();
            if let Some(line) = items.iter_mut().find(|line| line.id == id) {
                line.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
            }
            with_totals(items, state.is_loading)
        }
        CartAction::ClearCart => with_totals(Vec::new(), state.is_loading),
        CartAction::LoadSnapshot(items) => with_totals(items, false),
    }
}

fn with_totals(items: Vec<CartItem>, is_loading: bool) -> CartState {
    let total_items = items.iter().map(|line| line.quantity).sum();
    let total_price = items.iter().map(CartItem::line_total).sum();
    CartState {
        items,
        total_items,
        total_price,
        is_loading,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn product(id: &str, price: f64) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Product {id}"),
            price,
            original_price: None,
            rating: 4.5,
            image: String::new(),
            shop: "Fresh Market".to_string(),
            distance: 0.5,
            delivery_time: "15-25 min".to_string(),
            in_stock: true,
            category: "fruits".to_string(),
            discount: None,
            unit: "per lb".to_string(),
            brand: "Local Farm".to_string(),
            product_type: vec![],
        }
    }

    fn ts() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()
    }

    fn add(state: &CartState, id: &str, price: f64) -> CartState {
        cart_reducer(
            state,
            CartAction::AddItem {
                product: product(id, price),
                added_at: ts(),
            },
        )
    }

    fn assert_totals_derived(state: &CartState) {
        let items: u32 = state.items.iter().map(|l| l.quantity).sum();
        let price: f64 = state.items.iter().map(CartItem::line_total).sum();
        assert_eq!(state.total_items, items);
        assert_eq!(state.total_price, price);
    }

    #[test]
    fn add_first_item_creates_line_with_quantity_one() {
        let state = add(&CartState::loading(), "A", 2.99);

        assert_eq!(state.total_items, 1);
        assert_eq!(state.total_price, 2.99);
        assert_eq!(state.get_item_quantity(&ProductId::new("A")), 1);
        assert_totals_derived(&state);
    }

    #[test]
    fn add_existing_item_increments_quantity() {
        let state = add(&CartState::loading(), "A", 2.99);
        let state = add(&state, "A", 2.99);

        assert_eq!(state.items.len(), 1);
        assert_eq!(state.total_items, 2);
        assert!((state.total_price - 5.98).abs() < 1e-9);
        assert_totals_derived(&state);
    }

    #[test]
    fn line_ids_stay_unique_and_insertion_ordered() {
        let mut state = CartState::loading();
        for id in ["A", "B", "A", "C", "B"] {
            state = add(&state, id, 1.0);
        }

        let ids: Vec<&str> = state.items.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, ["A", "B", "C"]);
        assert_totals_derived(&state);
    }

    #[test]
    fn remove_is_idempotent() {
        let state = add(&CartState::loading(), "A", 2.99);
        let removed = cart_reducer(&state, CartAction::RemoveItem(ProductId::new("A")));
        let removed_again = cart_reducer(&removed, CartAction::RemoveItem(ProductId::new("A")));

        assert!(removed.items.is_empty());
        assert_eq!(removed, removed_again);
    }

    #[test]
    fn add_then_remove_restores_prior_state() {
        let before = add(&CartState::loading(), "B", 4.0);
        let state = add(&before, "A", 2.99);
        let state = cart_reducer(&state, CartAction::RemoveItem(ProductId::new("A")));

        assert_eq!(state, before);
    }

    #[test]
    fn update_quantity_sets_exact_value() {
        let state = add(&CartState::loading(), "A", 3.0);
        let state = cart_reducer(
            &state,
            CartAction::UpdateQuantity {
                id: ProductId::new("A"),
                quantity: 5,
            },
        );

        assert_eq!(state.get_item_quantity(&ProductId::new("A")), 5);
        assert_eq!(state.total_items, 5);
        assert_eq!(state.total_price, 15.0);
    }

    #[test]
    fn update_quantity_saturates_above_u32_max() {
        let state = add(&CartState::loading(), "A", 3.0);
        let state = cart_reducer(
            &state,
            CartAction::UpdateQuantity {
                id: ProductId::new("A"),
                quantity: (u32::MAX as i64) + 1,
            },
        );

        assert_eq!(state.get_item_quantity(&ProductId::new("A")), u32::MAX);
        assert_totals_derived(&state);
    }

    #[test]
    fn update_quantity_to_zero_removes_line() {
        let state = add(&CartState::loading(), "A", 3.0);
        let state = add(&state, "A", 3.0);
        let state = cart_reducer(
            &state,
            CartAction::UpdateQuantity {
                id: ProductId::new("A"),
                quantity: 0,
            },
        );

        assert!(state.items.is_empty());
        assert_eq!(state.total_items, 0);
        assert_eq!(state.total_price, 0.0);
    }

    #[test]
    fn update_quantity_on_unknown_id_is_a_no_op() {
        let state = add(&CartState::loading(), "A", 3.0);
        let updated = cart_reducer(
            &state,
            CartAction::UpdateQuantity {
                id: ProductId::new("missing"),
                quantity: 7,
            },
        );

        assert_eq!(updated, state);
    }

    #[test]
    fn clear_cart_zeroes_everything() {
        let state = add(&CartState::loading(), "A", 5.0);
        let state = add(&state, "B", 2.0);
        let state = add(&state, "B", 2.0);
        let state = add(&state, "B", 2.0);
        let state = cart_reducer(&state, CartAction::ClearCart);

        assert!(state.items.is_empty());
        assert_eq!(state.total_items, 0);
        assert_eq!(state.total_price, 0.0);
    }

    #[test]
    fn load_snapshot_recomputes_totals_and_ends_loading() {
        let mut line = CartItem::new(product("A", 2.0), ts());
        line.quantity = 4;
        let state = cart_reducer(
            &CartState::loading(),
            CartAction::LoadSnapshot(vec![line]),
        );

        assert!(!state.is_loading);
        assert_eq!(state.total_items, 4);
        assert_eq!(state.total_price, 8.0);
    }

    #[test]
    fn failed_restore_installs_empty_state() {
        let state = cart_reducer(&CartState::loading(), CartAction::LoadSnapshot(Vec::new()));

        assert!(!state.is_loading);
        assert!(state.items.is_empty());
        assert_eq!(state.total_items, 0);
    }
}
