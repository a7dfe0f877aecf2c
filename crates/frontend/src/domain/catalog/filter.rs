use contracts::domain::product::Product;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    All,
    InStock,
    OutOfStock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortBy {
    /// Keep the catalog's own ordering.
    Relevance,
    PriceLow,
    PriceHigh,
    Rating,
    Distance,
}

impl SortBy {
    pub fn label(&self) -> &'static str {
        match self {
            SortBy::Relevance => "Relevance",
            SortBy::PriceLow => "Price: Low to High",
            SortBy::PriceHigh => "Price: High to Low",
            SortBy::Rating => "Customer Rating",
            SortBy::Distance => "Distance",
        }
    }

    pub fn all() -> [SortBy; 5] {
        [
            SortBy::Relevance,
            SortBy::PriceLow,
            SortBy::PriceHigh,
            SortBy::Rating,
            SortBy::Distance,
        ]
    }
}

/// Search-screen filter state. All predicates are conjunctive.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOptions {
    /// Category id, `"all"` disables the predicate.
    pub category: String,
    /// Inclusive price bounds in dollars.
    pub price_range: (f64, f64),
    pub availability: Availability,
    /// Maximum shop distance in miles.
    pub max_distance: f64,
    /// Minimum product rating, 0 disables the predicate.
    pub min_rating: f64,
    pub sort_by: SortBy,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            category: "all".to_string(),
            price_range: (0.0, 100.0),
            availability: Availability::All,
            max_distance: 10.0,
            min_rating: 0.0,
            sort_by: SortBy::Relevance,
        }
    }
}

/// Preset price brackets offered by the filter panel.
pub const PRICE_RANGES: &[(&str, (f64, f64))] = &[
    ("All Prices", (0.0, 100.0)),
    ("Under $5", (0.0, 5.0)),
    ("$5 - $15", (5.0, 15.0)),
    ("$15 - $30", (15.0, 30.0)),
    ("$30+", (30.0, 100.0)),
];

/// Whether a product passes the search query and every filter predicate.
///
/// The query matches case-insensitively against name and brand; an empty
/// query matches everything.
pub fn matches(product: &Product, query: &str, filters: &FilterOptions) -> bool {
    let query = query.to_lowercase();
    let matches_query = query.is_empty()
        || product.name.to_lowercase().contains(&query)
        || product.brand.to_lowercase().contains(&query);
    let matches_category = filters.category == "all" || product.category == filters.category;
    let matches_availability = match filters.availability {
        Availability::All => true,
        Availability::InStock => product.in_stock,
        Availability::OutOfStock => !product.in_stock,
    };
    let matches_price =
        product.price >= filters.price_range.0 && product.price <= filters.price_range.1;
    let matches_distance = product.distance <= filters.max_distance;
    let matches_rating = product.rating >= filters.min_rating;

    matches_query
        && matches_category
        && matches_availability
        && matches_price
        && matches_distance
        && matches_rating
}

/// Linear filter over the catalog followed by the selected sort.
pub fn filter_products(products: &[Product], query: &str, filters: &FilterOptions) -> Vec<Product> {
    let mut results: Vec<Product> = products
        .iter()
        .filter(|product| matches(product, query, filters))
        .cloned()
        .collect();

    match filters.sort_by {
        SortBy::Relevance => {}
        SortBy::PriceLow => results.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortBy::PriceHigh => results.sort_by(|a, b| b.price.total_cmp(&a.price)),
        SortBy::Rating => results.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortBy::Distance => results.sort_by(|a, b| a.distance.total_cmp(&b.distance)),
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::data::products;

    fn ids(results: &[Product]) -> Vec<&str> {
        results.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn empty_query_with_default_filters_returns_everything() {
        let catalog = products();
        let results = filter_products(&catalog, "", &FilterOptions::default());
        assert_eq!(results.len(), catalog.len());
    }

    #[test]
    fn query_matches_name_and_brand_case_insensitively() {
        let catalog = products();

        let by_name = filter_products(&catalog, "banana", &FilterOptions::default());
        assert_eq!(ids(&by_name), ["1"]);

        let by_brand = filter_products(&catalog, "healthy choice", &FilterOptions::default());
        assert_eq!(ids(&by_brand), ["3", "8"]);
    }

    #[test]
    fn category_filter_narrows_results() {
        let catalog = products();
        let filters = FilterOptions {
            category: "dairy".to_string(),
            ..FilterOptions::default()
        };
        assert_eq!(ids(&filter_products(&catalog, "", &filters)), ["2", "4"]);
    }

    #[test]
    fn availability_filter_splits_stock() {
        let catalog = products();
        let out = FilterOptions {
            availability: Availability::OutOfStock,
            ..FilterOptions::default()
        };
        assert_eq!(ids(&filter_products(&catalog, "", &out)), ["3"]);

        let in_stock = FilterOptions {
            availability: Availability::InStock,
            ..FilterOptions::default()
        };
        assert_eq!(filter_products(&catalog, "", &in_stock).len(), catalog.len() - 1);
    }

    #[test]
    fn price_range_bounds_are_inclusive() {
        let catalog = products();
        let filters = FilterOptions {
            price_range: (2.99, 3.99),
            ..FilterOptions::default()
        };
        assert_eq!(ids(&filter_products(&catalog, "", &filters)), ["1", "3", "5"]);
    }

    #[test]
    fn sort_by_price_ascending() {
        let catalog = products();
        let filters = FilterOptions {
            sort_by: SortBy::PriceLow,
            ..FilterOptions::default()
        };
        let results = filter_products(&catalog, "", &filters);
        let prices: Vec<f64> = results.iter().map(|p| p.price).collect();
        let mut sorted = prices.clone();
        sorted.sort_by(|a, b| a.total_cmp(b));
        assert_eq!(prices, sorted);
    }

    #[test]
    fn relevance_keeps_catalog_order() {
        let catalog = products();
        let results = filter_products(&catalog, "", &FilterOptions::default());
        assert_eq!(ids(&results), ids(&catalog));
    }

    #[test]
    fn rating_and_distance_predicates() {
        let catalog = products();
        let filters = FilterOptions {
            min_rating: 4.8,
            max_distance: 0.6,
            ..FilterOptions::default()
        };
        assert_eq!(ids(&filter_products(&catalog, "", &filters)), ["1", "5"]);
    }
}
