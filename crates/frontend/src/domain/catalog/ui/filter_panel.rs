use leptos::prelude::*;

use crate::domain::catalog::data::CATEGORIES;
use crate::domain::catalog::filter::{Availability, FilterOptions, SortBy, PRICE_RANGES};

const AVAILABILITY_OPTIONS: &[(Availability, &str)] = &[
    (Availability::All, "All"),
    (Availability::InStock, "In Stock"),
    (Availability::OutOfStock, "Out of Stock"),
];

fn option_style(selected: bool) -> &'static str {
    if selected {
        "padding: 6px 12px; border: none; border-radius: 8px; background: #111827; \
         color: #fff; font-size: 13px; cursor: pointer;"
    } else {
        "padding: 6px 12px; border: 1px solid #E5E7EB; border-radius: 8px; background: #fff; \
         color: #374151; font-size: 13px; cursor: pointer;"
    }
}

/// Collapsible search-filter panel editing a shared [`FilterOptions`] signal.
#[component]
pub fn FilterPanel(filters: RwSignal<FilterOptions>) -> impl IntoView {
    view! {
        <div style="border: 1px solid #E5E7EB; border-radius: 12px; padding: 12px; \
                    margin-bottom: 16px; display: flex; flex-direction: column; gap: 12px;">
            <div>
                <h3 style="margin: 0 0 8px; font-size: 13px; font-weight: 600; color: #6B7280;">
                    "Category"
                </h3>
                <div style="display: flex; flex-wrap: wrap; gap: 6px;">
                    {CATEGORIES
                        .iter()
                        .map(|&(id, name)| view! {
                            <button
                                style=move || option_style(filters.with(|f| f.category == id))
                                on:click=move |_| filters.update(|f| f.category = id.to_string())
                            >
                                {name}
                            </button>
                        })
                        .collect_view()}
                </div>
            </div>

            <div>
                <h3 style="margin: 0 0 8px; font-size: 13px; font-weight: 600; color: #6B7280;">
                    "Price"
                </h3>
                <div style="display: flex; flex-wrap: wrap; gap: 6px;">
                    {PRICE_RANGES
                        .iter()
                        .map(|&(name, range)| view! {
                            <button
                                style=move || option_style(filters.with(|f| f.price_range == range))
                                on:click=move |_| filters.update(|f| f.price_range = range)
                            >
                                {name}
                            </button>
                        })
                        .collect_view()}
                </div>
            </div>

            <div>
                <h3 style="margin: 0 0 8px; font-size: 13px; font-weight: 600; color: #6B7280;">
                    "Availability"
                </h3>
                <div style="display: flex; flex-wrap: wrap; gap: 6px;">
                    {AVAILABILITY_OPTIONS
                        .iter()
                        .map(|&(availability, name)| view! {
                            <button
                                style=move || option_style(filters.with(|f| f.availability == availability))
                                on:click=move |_| filters.update(|f| f.availability = availability)
                            >
                                {name}
                            </button>
                        })
                        .collect_view()}
                </div>
            </div>

            <div>
                <h3 style="margin: 0 0 8px; font-size: 13px; font-weight: 600; color: #6B7280;">
                    "Sort By"
                </h3>
                <div style="display: flex; flex-wrap: wrap; gap: 6px;">
                    {SortBy::all()
                        .into_iter()
                        .map(|sort_by| view! {
                            <button
                                style=move || option_style(filters.with(|f| f.sort_by == sort_by))
                                on:click=move |_| filters.update(|f| f.sort_by = sort_by)
                            >
                                {sort_by.label()}
                            </button>
                        })
                        .collect_view()}
                </div>
            </div>

            <button
                style="align-self: flex-start; padding: 6px 12px; border: none; background: none; \
                       color: #EF4444; font-size: 13px; font-weight: 500; cursor: pointer;"
                on:click=move |_| filters.set(FilterOptions::default())
            >
                "Reset Filters"
            </button>
        </div>
    }
}
