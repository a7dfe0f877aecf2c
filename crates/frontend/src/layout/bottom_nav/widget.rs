use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use super::controller::{
    self, NavTab, TabIndicatorController, ANIMATION_DURATION_MS, ANIMATION_EASING,
};
use crate::shared::icons::icon;

/// Tab set of the storefront, in slot order.
pub const NAV_TABS: &[NavTab] = &[
    NavTab { id: "home", route: "/", icon: "home", label: "Home" },
    NavTab { id: "shops", route: "/shops", icon: "store", label: "Shops" },
    NavTab { id: "cart", route: "/cart", icon: "cart", label: "Cart" },
    NavTab { id: "orders", route: "/orders", icon: "package", label: "Orders" },
    NavTab { id: "profile", route: "/profile", icon: "user", label: "Profile" },
];

/// Slot index for a route path; unknown paths fall back to home.
fn route_index(pathname: &str) -> usize {
    NAV_TABS
        .iter()
        .position(|tab| tab.route == pathname)
        .unwrap_or(0)
}

/// Animated bottom navigation bar.
///
/// Presses go through the [`TabIndicatorController`]; the emitted route is
/// handed to the router. Interpolation toward the controller's target values
/// is done entirely by CSS transitions, so a press mid-animation retargets
/// from the current rendered value.
#[component]
pub fn BottomNav() -> impl IntoView {
    let location = use_location();
    let initial = route_index(&location.pathname.get_untracked());
    let nav = TabIndicatorController::new(NAV_TABS, initial);
    let navigate = use_navigate();

    let indicator_style = move || {
        format!(
            "position: absolute; top: -35px; left: 0; width: 70px; height: 70px; \
             background: tomato; border-radius: 50%; border: 6px solid #222327; \
             transform: translateX({}px); transition: transform {}ms {};",
            nav.indicator_offset(),
            ANIMATION_DURATION_MS,
            ANIMATION_EASING,
        )
    };

    view! {
        <nav style="position: relative; width: 400px; height: 70px; background: #fff; \
                    display: flex; justify-content: center; align-items: center; \
                    border-radius: 10px;">
            <ul style="display: flex; width: 350px; position: relative; margin: 0; padding: 0;">
                <div style=indicator_style></div>
                {NAV_TABS
                    .iter()
                    .enumerate()
                    .map(|(index, tab)| {
                        let navigate = navigate.clone();
                        let on_press = move |_| {
                            if let Some((_, route)) = nav.on_tab_press(index) {
                                navigate(route, Default::default());
                            }
                        };
                        let icon_style = move || {
                            format!(
                                "display: flex; justify-content: center; align-items: center; \
                                 width: 100%; height: 70px; color: #222327; \
                                 transform: translateY({}px); transition: transform {}ms {};",
                                controller::icon_offset(index, nav.active_index()),
                                ANIMATION_DURATION_MS,
                                ANIMATION_EASING,
                            )
                        };
                        let label_style = move || {
                            format!(
                                "position: absolute; left: 0; right: 0; text-align: center; \
                                 font-size: 12px; font-weight: 400; letter-spacing: 0.8px; \
                                 color: #222327; opacity: {}; transform: translateY({}px); \
                                 transition: opacity {dur}ms {ease}, transform {dur}ms {ease};",
                                controller::label_opacity(index, nav.active_index()),
                                controller::label_offset(index, nav.active_index()),
                                dur = ANIMATION_DURATION_MS,
                                ease = ANIMATION_EASING,
                            )
                        };
                        view! {
                            <li style="position: relative; width: 70px; height: 70px; z-index: 1; \
                                       list-style: none;">
                                <a
                                    style="position: relative; display: flex; flex-direction: column; \
                                           justify-content: center; align-items: center; width: 100%; \
                                           height: 100%; cursor: pointer;"
                                    on:click=on_press
                                >
                                    <span style=icon_style>{icon(tab.icon)}</span>
                                    <span style=label_style>{tab.label}</span>
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_index_maps_known_paths() {
        assert_eq!(route_index("/"), 0);
        assert_eq!(route_index("/cart"), 2);
        assert_eq!(route_index("/profile"), 4);
    }

    #[test]
    fn route_index_falls_back_to_home() {
        assert_eq!(route_index("/unknown"), 0);
    }
}
