use crate::api::ApiClient;
use crate::domain::catalog::{ActivityKind, Category, Product, ProductFilters, SortOrder};
use crate::error::Result;
use std::sync::{Arc, PoisonError, RwLock};

#[derive(Debug, Default, Clone)]
struct CatalogState {
    products: Vec<Product>,
    featured: Vec<Product>,
    categories: Vec<Category>,
    recommendations: Vec<Product>,
    current: Option<Product>,
    filters: ProductFilters,
    page: u64,
    total_pages: u64,
    count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u64,
    pub total_pages: u64,
    pub count: u64,
}

/// Cached catalog listings plus the filter and pagination state driving them.
#[derive(Debug)]
pub struct CatalogStore {
    api: Arc<ApiClient>,
    state: RwLock<CatalogState>,
}

impl CatalogStore {
    #[must_use]
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api, state: RwLock::new(CatalogState::default()) }
    }

    /// Fetches a product page under the current filters.
    #[tracing::instrument(skip(self))]
    pub async fn fetch_products(&self, page: u64) -> Result<()> {
        let filters = self.filters();
        let result = self.api.products(&filters, page).await?;

        let mut state = self.write_state();
        state.products = result.results;
        state.page = result.current_page;
        state.total_pages = result.total_pages;
        state.count = result.count;
        Ok(())
    }

    /// Fetches a single product and reports the view to the recommendation
    /// backend (best effort).
    pub async fn fetch_product(&self, id: u64) -> Result<Product> {
        let product = match self.api.product(id).await {
            Ok(product) => product,
            Err(e) => {
                self.write_state().current = None;
                return Err(e);
            }
        };
        self.api.track_activity(ActivityKind::View, id, None).await;
        self.write_state().current = Some(product.clone());
        Ok(product)
    }

    /// Refreshes the featured shelf; failures keep the previous contents.
    pub async fn fetch_featured(&self) {
        match self.api.featured_products().await {
            Ok(products) => self.write_state().featured = products,
            Err(e) => tracing::warn!(error = %e, "failed to fetch featured products"),
        }
    }

    pub async fn fetch_categories(&self) {
        match self.api.categories().await {
            Ok(categories) => self.write_state().categories = categories,
            Err(e) => tracing::warn!(error = %e, "failed to fetch categories"),
        }
    }

    pub async fn fetch_recommendations(&self, user_id: Option<u64>) {
        match self.api.recommendations(user_id).await {
            Ok(products) => self.write_state().recommendations = products,
            Err(e) => tracing::warn!(error = %e, "failed to fetch recommendations"),
        }
    }

    pub async fn search(&self, term: &str) -> Result<()> {
        self.write_state().filters.search = term.to_string();
        self.fetch_products(1).await
    }

    pub async fn filter_by_category(&self, category: u64) -> Result<()> {
        self.write_state().filters.category = Some(category);
        self.fetch_products(1).await
    }

    pub async fn filter_by_price(&self, min: Option<f64>, max: Option<f64>) -> Result<()> {
        {
            let mut state = self.write_state();
            state.filters.min_price = min;
            state.filters.max_price = max;
        }
        self.fetch_products(1).await
    }

    pub async fn sort(&self, ordering: SortOrder) -> Result<()> {
        self.write_state().filters.ordering = ordering;
        self.fetch_products(1).await
    }

    pub fn reset_filters(&self) {
        self.write_state().filters = ProductFilters::default();
    }

    pub fn clear_current_product(&self) {
        self.write_state().current = None;
    }

    #[must_use]
    pub fn products(&self) -> Vec<Product> {
        self.read_state().products.clone()
    }

    #[must_use]
    pub fn featured(&self) -> Vec<Product> {
        self.read_state().featured.clone()
    }

    #[must_use]
    pub fn categories(&self) -> Vec<Category> {
        self.read_state().categories.clone()
    }

    #[must_use]
    pub fn recommendations(&self) -> Vec<Product> {
        self.read_state().recommendations.clone()
    }

    #[must_use]
    pub fn current_product(&self) -> Option<Product> {
        self.read_state().current.clone()
    }

    #[must_use]
    pub fn filters(&self) -> ProductFilters {
        self.read_state().filters.clone()
    }

    #[must_use]
    pub fn pagination(&self) -> Pagination {
        let state = self.read_state();
        Pagination { page: state.page.max(1), total_pages: state.total_pages.max(1), count: state.count }
    }

    fn read_state(&self) -> std::sync::RwLockReadGuard<'_, CatalogState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> std::sync::RwLockWriteGuard<'_, CatalogState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
