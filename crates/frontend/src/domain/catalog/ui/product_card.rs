use contracts::domain::product::Product;
use leptos::prelude::*;

use crate::domain::cart::context::use_cart;
use crate::shared::format::{format_distance, format_price, format_rating};
use crate::shared::icons::icon;

/// Catalog product tile with an add-to-cart control.
///
/// Once the product is in the cart the add button is replaced by a quantity
/// stepper; stepper edits go through the exact-value `update_quantity` path,
/// so stepping down from 1 removes the line.
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let cart = use_cart();
    let id = product.id.clone();
    let quantity = Signal::derive({
        let id = id.clone();
        move || cart.get_item_quantity(&id)
    });
    let in_stock = product.in_stock;

    view! {
        <div style="background: #fff; border: 1px solid #E5E7EB; border-radius: 12px; \
                    overflow: hidden; width: 170px; display: flex; flex-direction: column;">
            <div style="position: relative;">
                <img
                    src=product.image.clone()
                    alt=product.name.clone()
                    style="width: 100%; height: 110px; object-fit: cover; display: block;"
                />
                {product.discount.map(|discount| view! {
                    <span style="position: absolute; top: 8px; left: 8px; background: #EF4444; \
                                 color: #fff; font-size: 11px; font-weight: 600; \
                                 padding: 2px 6px; border-radius: 6px;">
                        {format!("-{discount}%")}
                    </span>
                })}
                <Show when=move || !in_stock>
                    <span style="position: absolute; inset: 0; display: flex; align-items: center; \
                                 justify-content: center; background: rgba(255,255,255,0.7); \
                                 font-size: 13px; font-weight: 600; color: #374151;">
                        "Out of Stock"
                    </span>
                </Show>
            </div>
            <div style="padding: 10px; display: flex; flex-direction: column; gap: 4px; flex: 1;">
                <p style="margin: 0; font-size: 14px; font-weight: 600; color: #111827;">
                    {product.name.clone()}
                </p>
                <p style="margin: 0; font-size: 12px; color: #9CA3AF;">
                    {format!("{} · {}", product.brand, product.unit)}
                </p>
                <div style="display: flex; align-items: center; gap: 4px; font-size: 12px; color: #6B7280;">
                    {icon("star")}
                    <span>{format_rating(product.rating)}</span>
                    <span>{format!("· {} · {}", product.shop, format_distance(product.distance))}</span>
                </div>
                <div style="display: flex; align-items: baseline; gap: 6px;">
                    <span style="font-size: 15px; font-weight: 700; color: #111827;">
                        {format_price(product.price)}
                    </span>
                    {product.original_price.map(|original| view! {
                        <s style="font-size: 12px; color: #9CA3AF;">{format_price(original)}</s>
                    })}
                </div>
                <Show
                    when=move || { quantity.get() > 0 }
                    fallback={
                        let product = product.clone();
                        move || {
                            let product = product.clone();
                            view! {
                                <button
                                    style="margin-top: 4px; width: 100%; padding: 8px 0; border: none; \
                                           border-radius: 8px; background: #111827; color: #fff; \
                                           font-size: 13px; font-weight: 600; cursor: pointer;"
                                    disabled=!in_stock
                                    on:click=move |_| cart.add_item(product.clone())
                                >
                                    "Add to Cart"
                                </button>
                            }
                        }
                    }
                >
                    <div style="margin-top: 4px; display: flex; align-items: center; \
                                justify-content: space-between; background: #F3F4F6; \
                                border-radius: 8px; padding: 4px;">
                        <button
                            style="width: 28px; height: 28px; border: none; border-radius: 6px; \
                                   background: #fff; cursor: pointer; display: flex; \
                                   align-items: center; justify-content: center;"
                            on:click={
                                let id = id.clone();
                                move |_| {
                                    let current = cart.get_item_quantity(&id) as i64;
                                    cart.update_quantity(&id, current - 1);
                                }
                            }
                        >
                            {icon("minus")}
                        </button>
                        <span style="font-size: 14px; font-weight: 600; color: #111827;">
                            {move || quantity.get()}
                        </span>
                        <button
                            style="width: 28px; height: 28px; border: none; border-radius: 6px; \
                                   background: #fff; cursor: pointer; display: flex; \
                                   align-items: center; justify-content: center;"
                            on:click={
                                let id = id.clone();
                                move |_| {
                                    let current = cart.get_item_quantity(&id) as i64;
                                    cart.update_quantity(&id, current + 1);
                                }
                            }
                        >
                            {icon("plus")}
                        </button>
                    </div>
                </Show>
            </div>
        </div>
    }
}
