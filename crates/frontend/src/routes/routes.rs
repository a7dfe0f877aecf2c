use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::domain::cart::ui::CartScreen;
use crate::domain::catalog::ui::home::HomeScreen;
use crate::domain::catalog::ui::search::SearchScreen;
use crate::domain::orders::ui::OrdersScreen;
use crate::domain::shops::ui::ShopsScreen;
use crate::layout::Shell;
use crate::system::profile::ProfileScreen;

/// Route table for the storefront. The bottom navigation emits `(index,
/// route)` pairs; the router consumes the route and swaps the screen inside
/// the shell.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <p style="padding: 24px;">"Page not found"</p> }>
                    <Route path=path!("/") view=HomeScreen />
                    <Route path=path!("/search") view=SearchScreen />
                    <Route path=path!("/shops") view=ShopsScreen />
                    <Route path=path!("/cart") view=CartScreen />
                    <Route path=path!("/orders") view=OrdersScreen />
                    <Route path=path!("/profile") view=ProfileScreen />
                </Routes>
            </Shell>
        </Router>
    }
}
