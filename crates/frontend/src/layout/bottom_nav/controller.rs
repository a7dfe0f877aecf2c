use leptos::prelude::*;

/// Fixed horizontal slot allocated to each tab, in px.
pub const TAB_SLOT_WIDTH: f64 = 70.0;

/// Vertical offset of the active tab's icon, raised into the indicator circle.
pub const ICON_RAISED_OFFSET: f64 = -32.0;

/// Label vertical offsets for the active (near) and inactive (far) positions.
pub const LABEL_NEAR_OFFSET: f64 = 10.0;
pub const LABEL_FAR_OFFSET: f64 = 20.0;

/// Shared timing of the indicator, icon and label transitions.
pub const ANIMATION_DURATION_MS: u32 = 500;

/// Quadratic ease-out, shared by the indicator, icon and label transitions.
pub const ANIMATION_EASING: &str = "cubic-bezier(0.25, 0.46, 0.45, 0.94)";

/// Descriptor of one navigation tab, fixed at mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavTab {
    pub id: &'static str,
    pub route: &'static str,
    pub icon: &'static str,
    pub label: &'static str,
}

/// State machine behind the animated bottom navigation.
///
/// Holds the active tab index; every press transitions unconditionally to the
/// pressed tab (a self-press is a valid transition that restarts the animation
/// toward the same targets) and emits the `(index, route)` pair to the caller.
/// The animated parameters are pure functions of the active index, computed by
/// the free functions below; the rendering layer owns the interpolation, so an
/// interrupted animation simply retargets value-to-value.
#[derive(Clone, Copy)]
pub struct TabIndicatorController {
    tabs: &'static [NavTab],
    active: RwSignal<usize>,
}

impl TabIndicatorController {
    /// Build a controller over a non-empty tab list. `initial` is clamped into
    /// range so exactly one tab is always active.
    pub fn new(tabs: &'static [NavTab], initial: usize) -> Self {
        debug_assert!(!tabs.is_empty());
        Self {
            tabs,
            active: RwSignal::new(initial.min(tabs.len() - 1)),
        }
    }

    pub fn tabs(&self) -> &'static [NavTab] {
        self.tabs
    }

    /// Currently active index; reactive when read inside a tracking context.
    pub fn active_index(&self) -> usize {
        self.active.get()
    }

    /// Handle a tab press, returning the emitted `(index, route)` pair.
    ///
    /// An out-of-range index is ignored (state unchanged, nothing emitted) and
    /// logged, since no tab can legitimately produce it.
    pub fn on_tab_press(&self, index: usize) -> Option<(usize, &'static str)> {
        if index >= self.tabs.len() {
            log::warn!(
                "ignoring tab press for index {index} (tab count {})",
                self.tabs.len()
            );
            return None;
        }
        self.active.set(index);
        Some((index, self.tabs[index].route))
    }

    /// Horizontal offset target of the floating indicator, in px.
    pub fn indicator_offset(&self) -> f64 {
        indicator_offset(self.active.get())
    }
}

/// Indicator horizontal offset for active index `i`.
pub fn indicator_offset(active: usize) -> f64 {
    active as f64 * TAB_SLOT_WIDTH
}

/// Icon vertical offset target for tab `tab` given the active index.
pub fn icon_offset(tab: usize, active: usize) -> f64 {
    if tab == active {
        ICON_RAISED_OFFSET
    } else {
        0.0
    }
}

/// Label opacity target for tab `tab` given the active index.
pub fn label_opacity(tab: usize, active: usize) -> f64 {
    if tab == active {
        1.0
    } else {
        0.0
    }
}

/// Label vertical offset target for tab `tab` given the active index.
pub fn label_offset(tab: usize, active: usize) -> f64 {
    if tab == active {
        LABEL_NEAR_OFFSET
    } else {
        LABEL_FAR_OFFSET
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABS: &[NavTab] = &[
        NavTab { id: "home", route: "/", icon: "home", label: "Home" },
        NavTab { id: "shops", route: "/shops", icon: "store", label: "Shops" },
        NavTab { id: "cart", route: "/cart", icon: "cart", label: "Cart" },
        NavTab { id: "orders", route: "/orders", icon: "package", label: "Orders" },
        NavTab { id: "profile", route: "/profile", icon: "user", label: "Profile" },
    ];

    #[test]
    fn press_activates_tab_and_emits_pair() {
        let nav = TabIndicatorController::new(TABS, 0);

        let emitted = nav.on_tab_press(2);

        assert_eq!(emitted, Some((2, "/cart")));
        assert_eq!(nav.active_index(), 2);
        assert_eq!(nav.indicator_offset(), 2.0 * TAB_SLOT_WIDTH);
    }

    #[test]
    fn only_active_tab_icon_is_raised() {
        let nav = TabIndicatorController::new(TABS, 0);
        nav.on_tab_press(2);

        for tab in 0..TABS.len() {
            let expected = if tab == 2 { ICON_RAISED_OFFSET } else { 0.0 };
            assert_eq!(icon_offset(tab, nav.active_index()), expected);
        }
    }

    #[test]
    fn label_targets_follow_active_tab() {
        assert_eq!(label_opacity(3, 3), 1.0);
        assert_eq!(label_opacity(0, 3), 0.0);
        assert_eq!(label_offset(3, 3), LABEL_NEAR_OFFSET);
        assert_eq!(label_offset(0, 3), LABEL_FAR_OFFSET);
    }

    #[test]
    fn self_press_reemits_same_pair() {
        let nav = TabIndicatorController::new(TABS, 2);

        let emitted = nav.on_tab_press(2);

        assert_eq!(emitted, Some((2, "/cart")));
        assert_eq!(nav.active_index(), 2);
        assert_eq!(nav.indicator_offset(), 140.0);
    }

    #[test]
    fn out_of_range_press_is_ignored() {
        let nav = TabIndicatorController::new(TABS, 1);

        assert_eq!(nav.on_tab_press(TABS.len()), None);
        assert_eq!(nav.on_tab_press(usize::MAX), None);
        assert_eq!(nav.active_index(), 1);
    }

    #[test]
    fn initial_index_is_clamped_into_range() {
        let nav = TabIndicatorController::new(TABS, 99);
        assert_eq!(nav.active_index(), TABS.len() - 1);
    }
}
