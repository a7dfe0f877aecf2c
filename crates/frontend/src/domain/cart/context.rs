use chrono::Utc;
use contracts::domain::product::{Product, ProductId};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::reducer::{cart_reducer, CartAction, CartState};
use super::storage;

/// Cart context: the single source of truth for the in-progress order.
///
/// One instance exists per app, provided at the root by [`CartProvider`].
/// Mutations are applied synchronously to the signal in call order; the
/// write-back to localStorage is fire-and-forget.
#[derive(Clone, Copy)]
pub struct CartContext {
    pub state: RwSignal<CartState>,
}

impl CartContext {
    fn dispatch(&self, action: CartAction) {
        let next = self
            .state
            .with_untracked(|state| cart_reducer(state, action));
        self.state.set(next);

        // Write-back is skipped until the initial restore lands, so a slow
        // load can never be clobbered by an empty early save.
        let snapshot = self.state.get_untracked();
        if !snapshot.is_loading {
            storage::save_items(&snapshot.items);
        }
    }

    /// Add one unit of `product`, creating a new line when needed.
    pub fn add_item(&self, product: Product) {
        self.dispatch(CartAction::AddItem {
            product,
            added_at: Utc::now(),
        });
    }

    /// Remove the line for `id`; no-op when absent.
    pub fn remove_item(&self, id: &ProductId) {
        self.dispatch(CartAction::RemoveItem(id.clone()));
    }

    /// Set the exact quantity for `id`; zero or negative removes the line.
    pub fn update_quantity(&self, id: &ProductId, quantity: i64) {
        self.dispatch(CartAction::UpdateQuantity {
            id: id.clone(),
            quantity,
        });
    }

    pub fn clear_cart(&self) {
        self.dispatch(CartAction::ClearCart);
    }

    pub fn get_item_quantity(&self, id: &ProductId) -> u32 {
        self.state.with(|state| state.get_item_quantity(id))
    }

    pub fn is_in_cart(&self, id: &ProductId) -> bool {
        self.state.with(|state| state.is_in_cart(id))
    }
}

/// Cart context provider component.
///
/// Restores the saved cart from localStorage once on mount; until then the
/// state reports `is_loading` and consumers must not read totals.
#[component]
pub fn CartProvider(children: Children) -> impl IntoView {
    let state = RwSignal::new(CartState::loading());
    provide_context(CartContext { state });

    spawn_local(async move {
        let items = storage::load_items().unwrap_or_default();
        let loaded = cart_reducer(&state.get_untracked(), CartAction::LoadSnapshot(items));
        state.set(loaded);
    });

    children()
}

/// Hook to access the cart context.
pub fn use_cart() -> CartContext {
    use_context::<CartContext>().expect("CartContext not found. Wrap the app with CartProvider.")
}
