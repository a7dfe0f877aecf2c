pub mod bottom_nav;

use bottom_nav::BottomNav;
use leptos::prelude::*;

/// Application shell: scrollable content area with the floating bottom
/// navigation overlaid above it.
///
/// ```text
/// +----------------------+
/// |                      |
/// |    screen content    |
/// |                      |
/// |    [ bottom nav ]    |
/// +----------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div style="position: relative; min-height: 100vh; background: #ffffff;">
            <div style="min-height: 100vh; overflow-y: auto; padding-bottom: 120px;">
                {children()}
            </div>
            <div style="position: fixed; bottom: 20px; left: 0; right: 0; z-index: 1000; \
                        display: flex; justify-content: center;">
                <BottomNav />
            </div>
        </div>
    }
}
