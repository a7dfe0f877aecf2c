use contracts::domain::order::{Order, OrderStatus};
use leptos::prelude::*;

use super::data::orders;
use crate::shared::format::format_price;

fn status_badge_style(status: OrderStatus) -> &'static str {
    match status {
        OrderStatus::Delivered => {
            "background: #DCFCE7; color: #166534; font-size: 12px; font-weight: 600; \
             padding: 2px 8px; border-radius: 10px;"
        }
        OrderStatus::InTransit => {
            "background: #DBEAFE; color: #1E40AF; font-size: 12px; font-weight: 600; \
             padding: 2px 8px; border-radius: 10px;"
        }
        OrderStatus::Processing => {
            "background: #FEF3C7; color: #92400E; font-size: 12px; font-weight: 600; \
             padding: 2px 8px; border-radius: 10px;"
        }
        OrderStatus::Cancelled => {
            "background: #FEE2E2; color: #991B1B; font-size: 12px; font-weight: 600; \
             padding: 2px 8px; border-radius: 10px;"
        }
    }
}

/// Orders screen: mock order history with per-order totals.
#[component]
pub fn OrdersScreen() -> impl IntoView {
    view! {
        <section style="max-width: 480px; margin: 0 auto; padding: 24px 16px;">
            <header style="margin-bottom: 16px;">
                <h1 style="margin: 0; font-size: 24px; font-weight: 700; color: #111827;">
                    "My Orders"
                </h1>
            </header>
            <div style="display: flex; flex-direction: column; gap: 12px;">
                {orders()
                    .into_iter()
                    .map(|order| view! { <OrderCard order /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn OrderCard(order: Order) -> impl IntoView {
    let subtotal = order.subtotal();
    let total = order.total();

    view! {
        <div style="border: 1px solid #E5E7EB; border-radius: 12px; padding: 12px;">
            <div style="display: flex; justify-content: space-between; align-items: center; \
                        margin-bottom: 8px;">
                <span style="font-size: 14px; font-weight: 600; color: #111827;">
                    {format!("Order #{}", order.id)}
                </span>
                <span style=status_badge_style(order.status)>{order.status.label()}</span>
            </div>
            {order
                .lines
                .iter()
                .map(|line| view! {
                    <div style="display: flex; align-items: center; gap: 10px; padding: 6px 0;">
                        <img
                            src=line.image.clone()
                            alt=line.name.clone()
                            style="width: 40px; height: 40px; border-radius: 6px; \
                                   object-fit: cover;"
                        />
                        <div style="flex: 1;">
                            <p style="margin: 0; font-size: 13px; font-weight: 500; \
                                      color: #111827;">
                                {line.name.clone()}
                            </p>
                            <p style="margin: 0; font-size: 12px; color: #9CA3AF;">
                                {format!("{} × {}", line.quantity, line.weight)}
                            </p>
                        </div>
                        <span style="font-size: 13px; font-weight: 600; color: #111827;">
                            {format_price(line.price * line.quantity as f64)}
                        </span>
                    </div>
                })
                .collect_view()}
            <div style="border-top: 1px solid #F3F4F6; margin-top: 8px; padding-top: 8px; \
                        font-size: 13px; color: #6B7280;">
                <div style="display: flex; justify-content: space-between;">
                    <span>"Subtotal"</span>
                    <span>{format_price(subtotal)}</span>
                </div>
                <div style="display: flex; justify-content: space-between; margin-top: 2px;">
                    <span>"Delivery"</span>
                    <span>{format_price(order.delivery_fee)}</span>
                </div>
                <div style="display: flex; justify-content: space-between; margin-top: 6px; \
                            font-size: 14px; font-weight: 700; color: #111827;">
                    <span>"Total"</span>
                    <span>{format_price(total)}</span>
                </div>
            </div>
        </div>
    }
}
