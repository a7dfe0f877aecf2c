use leptos::prelude::*;

use crate::shared::icons::icon;

struct ProfileRow {
    icon: &'static str,
    label: &'static str,
    value: Option<&'static str>,
}

const ACCOUNT_ROWS: &[ProfileRow] = &[
    ProfileRow { icon: "user", label: "Personal Information", value: None },
    ProfileRow { icon: "map-pin", label: "Delivery Addresses", value: Some("2 addresses") },
    ProfileRow { icon: "cart", label: "Payment Methods", value: Some("2 cards") },
];

const SUPPORT_ROWS: &[ProfileRow] = &[
    ProfileRow { icon: "star", label: "Rate the App", value: None },
    ProfileRow { icon: "package", label: "Order History", value: None },
    ProfileRow { icon: "chevron-right", label: "Help Center", value: None },
];

/// Profile screen: static account sections and local preference toggles.
#[component]
pub fn ProfileScreen() -> impl IntoView {
    let (notifications, set_notifications) = signal(true);
    let (location, set_location) = signal(true);

    view! {
        <section style="max-width: 480px; margin: 0 auto; padding: 24px 16px;">
            <header style="display: flex; align-items: center; gap: 12px; margin-bottom: 24px;">
                <div style="width: 56px; height: 56px; border-radius: 50%; background: #F3F4F6; \
                            display: flex; align-items: center; justify-content: center; \
                            color: #6B7280;">
                    {icon("user")}
                </div>
                <div>
                    <h1 style="margin: 0; font-size: 20px; font-weight: 700; color: #111827;">
                        "Alex Johnson"
                    </h1>
                    <p style="margin: 2px 0 0; font-size: 13px; color: #6B7280;">
                        "alex.johnson@example.com"
                    </p>
                </div>
            </header>

            <ProfileSection title="Account Settings" rows=ACCOUNT_ROWS />

            <div style="margin-bottom: 24px;">
                <h2 style="margin: 0 0 8px; font-size: 14px; font-weight: 600; color: #6B7280;">
                    "Preferences"
                </h2>
                <ToggleRow
                    label="Push Notifications"
                    checked=notifications
                    on_toggle=move |_: web_sys::Event| set_notifications.update(|v| *v = !*v)
                />
                <ToggleRow
                    label="Location Services"
                    checked=location
                    on_toggle=move |_: web_sys::Event| set_location.update(|v| *v = !*v)
                />
            </div>

            <ProfileSection title="Support" rows=SUPPORT_ROWS />
        </section>
    }
}

#[component]
fn ProfileSection(title: &'static str, rows: &'static [ProfileRow]) -> impl IntoView {
    view! {
        <div style="margin-bottom: 24px;">
            <h2 style="margin: 0 0 8px; font-size: 14px; font-weight: 600; color: #6B7280;">
                {title}
            </h2>
            {rows
                .iter()
                .map(|row| view! {
                    <div style="display: flex; align-items: center; gap: 12px; padding: 12px 0; \
                                border-bottom: 1px solid #F3F4F6; color: #374151;">
                        {icon(row.icon)}
                        <span style="flex: 1; font-size: 14px;">{row.label}</span>
                        {row.value.map(|value| view! {
                            <span style="font-size: 13px; color: #9CA3AF;">{value}</span>
                        })}
                        {icon("chevron-right")}
                    </div>
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn ToggleRow(
    label: &'static str,
    checked: ReadSignal<bool>,
    on_toggle: impl FnMut(web_sys::Event) + 'static,
) -> impl IntoView {
    view! {
        <label style="display: flex; align-items: center; justify-content: space-between; \
                      padding: 12px 0; border-bottom: 1px solid #F3F4F6; cursor: pointer;">
            <span style="font-size: 14px; color: #374151;">{label}</span>
            <input type="checkbox" prop:checked=checked on:change=on_toggle />
        </label>
    }
}
