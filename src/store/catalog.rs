//! Catalog slice
//!
//! Holds the fetched product list plus the browse filters (category and
//! search query). Loading state mirrors the background fetch lifecycle.

use crate::types::{Category, Product};

/// Catalog slice state
#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    pub products: Vec<Product>,
    pub loading: bool,
    pub last_error: Option<String>,
    pub category_filter: Option<Category>,
    pub search_query: String,
}

/// Catalog slice actions
#[derive(Debug, Clone)]
pub enum CatalogAction {
    /// A fetch started
    Loading,
    /// A fetch finished with products
    Loaded(Vec<Product>),
    /// A fetch failed
    LoadFailed(String),
    /// Filter the catalog to one category (None shows everything)
    SetCategory(Option<Category>),
    /// Filter the catalog by a search query
    SetSearch(String),
    /// Drop the search query
    ClearSearch,
}

impl CatalogState {
    pub fn reduce(&mut self, action: CatalogAction) {
        match action {
            CatalogAction::Loading => {
                self.loading = true;
                self.last_error = None;
            }
            CatalogAction::Loaded(products) => {
                self.products = products;
                self.loading = false;
                self.last_error = None;
            }
            CatalogAction::LoadFailed(message) => {
                self.loading = false;
                self.last_error = Some(message);
            }
            CatalogAction::SetCategory(category) => {
                self.category_filter = category;
            }
            CatalogAction::SetSearch(query) => {
                self.search_query = query;
            }
            CatalogAction::ClearSearch => {
                self.search_query.clear();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_load_lifecycle() {
        let mut state = CatalogState::default();
        state.reduce(CatalogAction::Loading);
        assert!(state.loading);

        state.reduce(CatalogAction::Loaded(Catalog::demo().products));
        assert!(!state.loading);
        assert!(state.last_error.is_none());
        assert!(!state.products.is_empty());
    }

    #[test]
    fn test_load_failure_keeps_previous_products() {
        let mut state = CatalogState::default();
        state.reduce(CatalogAction::Loaded(Catalog::demo().products));
        let count = state.products.len();

        state.reduce(CatalogAction::Loading);
        state.reduce(CatalogAction::LoadFailed("connection refused".to_string()));
        assert!(!state.loading);
        assert_eq!(state.products.len(), count);
        assert!(state.last_error.as_deref() == Some("connection refused"));
    }

    #[test]
    fn test_filters() {
        let mut state = CatalogState::default();
        state.reduce(CatalogAction::SetCategory(Some(Category::Home)));
        assert_eq!(state.category_filter, Some(Category::Home));

        state.reduce(CatalogAction::SetSearch("duvet".to_string()));
        state.reduce(CatalogAction::ClearSearch);
        assert!(state.search_query.is_empty());
    }
}
