use leptos::prelude::*;

use super::product_card::ProductCard;
use crate::domain::cart::context::use_cart;
use crate::domain::catalog::data::{products, CATEGORIES};
use crate::shared::icons::icon;

/// Home screen: category chips and the featured product grid.
#[component]
pub fn HomeScreen() -> impl IntoView {
    let cart = use_cart();
    let (selected_category, set_selected_category) = signal("all".to_string());

    let featured = move || {
        let category = selected_category.get();
        products()
            .into_iter()
            .filter(|product| category == "all" || product.category == category)
            .collect::<Vec<_>>()
    };

    view! {
        <section style="max-width: 480px; margin: 0 auto; padding: 24px 16px;">
            <header style="display: flex; justify-content: space-between; align-items: center; \
                           margin-bottom: 16px;">
                <div>
                    <h1 style="margin: 0; font-size: 24px; font-weight: 700; color: #111827;">
                        "Good Morning"
                    </h1>
                    <p style="margin: 4px 0 0; font-size: 14px; color: #6B7280;">
                        "What would you like to order today?"
                    </p>
                </div>
                <span style="position: relative; color: #111827;">
                    {icon("cart")}
                    <Show when=move || cart.state.with(|s| s.total_items > 0)>
                        <span style="position: absolute; top: -6px; right: -10px; background: #EF4444; \
                                     color: #fff; font-size: 11px; font-weight: 600; min-width: 18px; \
                                     height: 18px; border-radius: 9px; display: flex; \
                                     align-items: center; justify-content: center; padding: 0 4px;">
                            {move || cart.state.with(|s| s.total_items)}
                        </span>
                    </Show>
                </span>
            </header>

            <div style="display: flex; gap: 8px; overflow-x: auto; padding-bottom: 8px; \
                        margin-bottom: 16px;">
                {CATEGORIES
                    .iter()
                    .map(|&(id, name)| {
                        let chip_style = move || {
                            if selected_category.get() == id {
                                "padding: 6px 14px; border: none; border-radius: 16px; \
                                 background: #111827; color: #fff; font-size: 13px; \
                                 white-space: nowrap; cursor: pointer;"
                            } else {
                                "padding: 6px 14px; border: 1px solid #E5E7EB; border-radius: 16px; \
                                 background: #fff; color: #374151; font-size: 13px; \
                                 white-space: nowrap; cursor: pointer;"
                            }
                        };
                        view! {
                            <button
                                style=chip_style
                                on:click=move |_| set_selected_category.set(id.to_string())
                            >
                                {name}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <h2 style="margin: 0 0 12px; font-size: 18px; font-weight: 600; color: #111827;">
                "Featured Products"
            </h2>
            <div style="display: flex; flex-wrap: wrap; gap: 12px;">
                <For
                    each=featured
                    key=|product| product.id.clone()
                    children=move |product| view! { <ProductCard product /> }
                />
            </div>
        </section>
    }
}
