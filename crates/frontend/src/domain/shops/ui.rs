use contracts::domain::shop::Shop;
use leptos::prelude::*;

use super::data::nearby_shops;
use crate::shared::format::{format_distance, format_rating};
use crate::shared::icons::icon;

/// Shops screen: nearby shops with open/closed state and delivery estimates.
#[component]
pub fn ShopsScreen() -> impl IntoView {
    view! {
        <section style="max-width: 480px; margin: 0 auto; padding: 24px 16px;">
            <header style="margin-bottom: 16px;">
                <h1 style="margin: 0; font-size: 24px; font-weight: 700; color: #111827;">
                    "Nearby Shops"
                </h1>
                <p style="margin: 4px 0 0; font-size: 14px; color: #6B7280;">
                    {format!("{} shops deliver to you", nearby_shops().len())}
                </p>
            </header>
            <div style="display: flex; flex-direction: column; gap: 12px;">
                {nearby_shops()
                    .into_iter()
                    .map(|shop| view! { <ShopCard shop /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ShopCard(shop: Shop) -> impl IntoView {
    let (badge_style, badge_label) = if shop.is_open {
        (
            "background: #DCFCE7; color: #166534; font-size: 12px; font-weight: 600; \
             padding: 2px 8px; border-radius: 10px;",
            "Open",
        )
    } else {
        (
            "background: #FEE2E2; color: #991B1B; font-size: 12px; font-weight: 600; \
             padding: 2px 8px; border-radius: 10px;",
            "Closed",
        )
    };

    view! {
        <div style="border: 1px solid #E5E7EB; border-radius: 12px; overflow: hidden;">
            <img
                src=shop.image.clone()
                alt=shop.name.clone()
                style="width: 100%; height: 120px; object-fit: cover; display: block;"
            />
            <div style="padding: 12px;">
                <div style="display: flex; justify-content: space-between; align-items: center;">
                    <h2 style="margin: 0; font-size: 16px; font-weight: 600; color: #111827;">
                        {shop.name.clone()}
                    </h2>
                    <span style=badge_style>{badge_label}</span>
                </div>
                <div style="display: flex; align-items: center; gap: 4px; margin-top: 4px; \
                            font-size: 13px; color: #6B7280;">
                    {icon("star")}
                    <span>
                        {format!(
                            "{} ({} reviews) · {} products",
                            format_rating(shop.rating),
                            shop.review_count,
                            shop.product_count,
                        )}
                    </span>
                </div>
                <div style="display: flex; align-items: center; gap: 4px; margin-top: 4px; \
                            font-size: 13px; color: #6B7280;">
                    {icon("map-pin")}
                    <span>{format!("{} · {}", shop.address, format_distance(shop.distance))}</span>
                </div>
                <div style="display: flex; align-items: center; gap: 4px; margin-top: 4px; \
                            font-size: 13px; color: #6B7280;">
                    {icon("clock")}
                    <span>{format!("{} · {}", shop.delivery_time, shop.open_hours)}</span>
                </div>
                <div style="display: flex; flex-wrap: wrap; gap: 6px; margin-top: 8px;">
                    {shop
                        .categories
                        .iter()
                        .map(|category| view! {
                            <span style="background: #F3F4F6; color: #374151; font-size: 12px; \
                                         padding: 2px 8px; border-radius: 10px;">
                                {category.clone()}
                            </span>
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
