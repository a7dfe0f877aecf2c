use contracts::domain::cart::CartItem;
use leptos::prelude::*;

use super::context::use_cart;
use crate::shared::format::format_price;
use crate::shared::icons::icon;

/// Cart screen: line items with quantity steppers, derived totals and the
/// placeholder checkout. While the stored snapshot is being restored the
/// screen shows a loading state instead of totals.
#[component]
pub fn CartScreen() -> impl IntoView {
    let cart = use_cart();

    let checkout = move |_| {
        let (total_items, total_price) =
            cart.state.with_untracked(|s| (s.total_items, s.total_price));
        // Checkout is out of scope; a plain alert stands in for it.
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(&format!(
                "Proceed to checkout with {} items for {}?",
                total_items,
                format_price(total_price),
            ));
        }
    };

    view! {
        <section style="max-width: 480px; margin: 0 auto; padding: 24px 16px;">
            <header style="display: flex; justify-content: space-between; align-items: center; \
                           margin-bottom: 16px;">
                <h1 style="margin: 0; font-size: 24px; font-weight: 700; color: #111827;">
                    "My Cart"
                </h1>
                <Show when=move || cart.state.with(|s| !s.items.is_empty())>
                    <button
                        style="border: none; background: none; color: #EF4444; font-size: 14px; \
                               font-weight: 500; cursor: pointer;"
                        on:click=move |_| cart.clear_cart()
                    >
                        "Clear All"
                    </button>
                </Show>
            </header>

            <Show
                when=move || cart.state.with(|s| !s.is_loading)
                fallback=|| view! {
                    <p style="text-align: center; color: #6B7280; padding: 48px 0;">
                        "Loading cart..."
                    </p>
                }
            >
                <Show
                    when=move || cart.state.with(|s| !s.items.is_empty())
                    fallback=|| view! {
                        <div style="display: flex; flex-direction: column; align-items: center; \
                                    gap: 8px; padding: 64px 0; color: #9CA3AF;">
                            {icon("shopping-bag")}
                            <h2 style="margin: 8px 0 0; font-size: 18px; font-weight: 600; \
                                       color: #111827;">
                                "Your cart is empty"
                            </h2>
                            <p style="margin: 0; font-size: 14px;">
                                "Add some products to get started"
                            </p>
                        </div>
                    }
                >
                    <div style="display: flex; flex-direction: column;">
                        <For
                            each=move || cart.state.with(|s| s.items.clone())
                            key=|item| item.id.clone()
                            children=move |item| view! { <CartLineRow item /> }
                        />
                    </div>

                    <div style="margin-top: 16px; border-top: 1px solid #E5E7EB; padding-top: 12px;">
                        <div style="display: flex; justify-content: space-between; font-size: 14px; \
                                    color: #6B7280; margin-bottom: 6px;">
                            <span>
                                {move || format!("Items ({})", cart.state.with(|s| s.total_items))}
                            </span>
                            <span>{move || format_price(cart.state.with(|s| s.total_price))}</span>
                        </div>
                        <div style="display: flex; justify-content: space-between; font-size: 14px; \
                                    color: #6B7280; margin-bottom: 6px;">
                            <span>"Delivery"</span>
                            <span>"Free"</span>
                        </div>
                        <div style="display: flex; justify-content: space-between; font-size: 17px; \
                                    font-weight: 700; color: #111827; border-top: 1px solid #E5E7EB; \
                                    padding-top: 8px; margin-top: 8px;">
                            <span>"Total"</span>
                            <span>{move || format_price(cart.state.with(|s| s.total_price))}</span>
                        </div>
                        <button
                            style="margin-top: 16px; width: 100%; padding: 14px 0; border: none; \
                                   border-radius: 12px; background: #111827; color: #fff; \
                                   font-size: 15px; font-weight: 600; cursor: pointer;"
                            on:click=checkout
                        >
                            "Continue to Checkout"
                        </button>
                    </div>
                </Show>
            </Show>
        </section>
    }
}

#[component]
fn CartLineRow(item: CartItem) -> impl IntoView {
    let cart = use_cart();
    let id = item.id.clone();

    // Rows are keyed by line id, so quantity must be read reactively for
    // stepper presses to update the row in place.
    let quantity = Signal::derive({
        let id = id.clone();
        move || cart.get_item_quantity(&id)
    });

    let decrement = {
        let id = id.clone();
        move |_| {
            let current = cart.get_item_quantity(&id) as i64;
            cart.update_quantity(&id, current - 1);
        }
    };
    let increment = {
        let id = id.clone();
        move |_| {
            let current = cart.get_item_quantity(&id) as i64;
            cart.update_quantity(&id, current + 1);
        }
    };
    let remove = {
        let id = id.clone();
        move |_| cart.remove_item(&id)
    };

    view! {
        <div style="display: flex; align-items: center; gap: 12px; padding: 12px 0; \
                    border-bottom: 1px solid #F3F4F6;">
            <img
                src=item.product.image.clone()
                alt=item.product.name.clone()
                style="width: 60px; height: 60px; border-radius: 8px; object-fit: cover;"
            />
            <div style="flex: 1; min-width: 0;">
                <p style="margin: 0; font-size: 14px; font-weight: 600; color: #111827;">
                    {item.product.name.clone()}
                </p>
                <p style="margin: 2px 0 0; font-size: 12px; color: #9CA3AF;">
                    {format!("{} · {}", item.product.unit, item.product.shop)}
                </p>
                <div style="display: flex; align-items: baseline; gap: 6px; margin-top: 4px;">
                    <span style="font-size: 14px; font-weight: 700; color: #111827;">
                        {format_price(item.product.price)}
                    </span>
                    {item.product.original_price.map(|original| view! {
                        <s style="font-size: 12px; color: #9CA3AF;">{format_price(original)}</s>
                    })}
                </div>
            </div>
            <div style="display: flex; align-items: center; gap: 8px; background: #F3F4F6; \
                        border-radius: 8px; padding: 4px;">
                <button
                    style="width: 28px; height: 28px; border: none; border-radius: 6px; \
                           background: #fff; cursor: pointer; display: flex; align-items: center; \
                           justify-content: center;"
                    on:click=decrement
                >
                    {icon("minus")}
                </button>
                <span style="min-width: 20px; text-align: center; font-size: 14px; \
                             font-weight: 600; color: #111827;">
                    {move || quantity.get()}
                </span>
                <button
                    style="width: 28px; height: 28px; border: none; border-radius: 6px; \
                           background: #fff; cursor: pointer; display: flex; align-items: center; \
                           justify-content: center;"
                    on:click=increment
                >
                    {icon("plus")}
                </button>
            </div>
            <button
                style="border: none; background: none; color: #EF4444; cursor: pointer; \
                       padding: 6px;"
                on:click=remove
            >
                {icon("trash")}
            </button>
        </div>
    }
}
