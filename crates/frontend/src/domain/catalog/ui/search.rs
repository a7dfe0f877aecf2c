use leptos::prelude::*;

use super::filter_panel::FilterPanel;
use super::product_card::ProductCard;
use crate::domain::catalog::data::{products, SEARCH_SUGGESTIONS};
use crate::domain::catalog::filter::{filter_products, FilterOptions};
use crate::shared::icons::icon;

/// Search screen: query box with suggestions, the filter panel and the
/// filtered result grid. Filtering is plain in-memory predicate matching over
/// the hard-coded catalog.
#[component]
pub fn SearchScreen() -> impl IntoView {
    let (query, set_query) = signal(String::new());
    let (show_filters, set_show_filters) = signal(false);
    let filters = RwSignal::new(FilterOptions::default());

    let results = Memo::new(move |_| {
        filter_products(&products(), &query.get(), &filters.get())
    });

    view! {
        <section style="max-width: 480px; margin: 0 auto; padding: 24px 16px;">
            <header style="margin-bottom: 16px;">
                <h1 style="margin: 0; font-size: 24px; font-weight: 700; color: #111827;">
                    "Search Products"
                </h1>
            </header>

            <div style="display: flex; gap: 8px; margin-bottom: 12px;">
                <div style="flex: 1; display: flex; align-items: center; gap: 8px; \
                            background: #F3F4F6; border-radius: 10px; padding: 10px 12px; \
                            color: #9CA3AF;">
                    {icon("search")}
                    <input
                        type="text"
                        placeholder="Search products, brands..."
                        style="flex: 1; border: none; outline: none; background: transparent; \
                               font-size: 14px; color: #111827;"
                        prop:value=query
                        on:input=move |ev| set_query.set(event_target_value(&ev))
                    />
                </div>
                <button
                    style="width: 42px; border: 1px solid #E5E7EB; border-radius: 10px; \
                           background: #fff; color: #111827; cursor: pointer; display: flex; \
                           align-items: center; justify-content: center;"
                    on:click=move |_| set_show_filters.update(|open| *open = !*open)
                >
                    {icon("filter")}
                </button>
            </div>

            <Show when=move || show_filters.get()>
                <FilterPanel filters />
            </Show>

            <Show when=move || query.get().is_empty()>
                <div style="margin-bottom: 16px;">
                    <h2 style="margin: 0 0 8px; font-size: 14px; font-weight: 600; color: #6B7280;">
                        "Popular searches"
                    </h2>
                    <div style="display: flex; flex-wrap: wrap; gap: 8px;">
                        {SEARCH_SUGGESTIONS
                            .iter()
                            .map(|&suggestion| view! {
                                <button
                                    style="padding: 6px 12px; border: 1px solid #E5E7EB; \
                                           border-radius: 16px; background: #fff; color: #374151; \
                                           font-size: 13px; cursor: pointer;"
                                    on:click=move |_| set_query.set(suggestion.to_string())
                                >
                                    {suggestion}
                                </button>
                            })
                            .collect_view()}
                    </div>
                </div>
            </Show>

            <p style="margin: 0 0 12px; font-size: 13px; color: #6B7280;">
                {move || format!("{} results", results.get().len())}
            </p>

            <div style="display: flex; flex-wrap: wrap; gap: 12px;">
                <For
                    each=move || results.get()
                    key=|product| product.id.clone()
                    children=move |product| view! { <ProductCard product /> }
                />
            </div>
        </section>
    }
}
