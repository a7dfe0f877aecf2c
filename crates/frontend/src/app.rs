use leptos::prelude::*;

use crate::domain::cart::context::CartProvider;
use crate::routes::routes::AppRoutes;

#[component]
pub fn App() -> impl IntoView {
    // One cart per app instance, provided to every screen via context.
    view! {
        <CartProvider>
            <AppRoutes />
        </CartProvider>
    }
}
