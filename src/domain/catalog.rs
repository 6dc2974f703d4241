use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Decimal string as sent on the wire.
    pub price: String,
    #[serde(default)]
    pub stock: Option<i64>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub category: Option<u64>,
    #[serde(default)]
    pub average_rating: Option<f64>,
    #[serde(default)]
    pub purchase_count: Option<u64>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
}

impl Product {
    /// Numeric price for client-side arithmetic; unparseable prices count as zero.
    #[must_use]
    pub fn price_value(&self) -> f64 {
        self.price.parse().unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
}

/// One page of a paginated listing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Page<T> {
    pub results: Vec<T>,
    #[serde(default)]
    pub count: u64,
    #[serde(default = "one")]
    pub current_page: u64,
    #[serde(default = "one")]
    pub total_pages: u64,
}

const fn one() -> u64 {
    1
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self { results: Vec::new(), count: 0, current_page: 1, total_pages: 1 }
    }
}

/// Client-side listing filters, serialized into query parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFilters {
    pub category: Option<u64>,
    pub search: String,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub ordering: SortOrder,
}

impl Default for ProductFilters {
    fn default() -> Self {
        Self {
            category: None,
            search: String::new(),
            min_price: None,
            max_price: None,
            ordering: SortOrder::NewestFirst,
        }
    }
}

impl ProductFilters {
    pub(crate) fn to_query(&self, page: u64) -> Vec<(&'static str, String)> {
        let mut query = vec![("page", page.to_string())];
        if let Some(category) = self.category {
            query.push(("category", category.to_string()));
        }
        if !self.search.is_empty() {
            query.push(("search", self.search.clone()));
        }
        if let Some(min) = self.min_price {
            query.push(("min_price", min.to_string()));
        }
        if let Some(max) = self.max_price {
            query.push(("max_price", max.to_string()));
        }
        query.push(("ordering", self.ordering.as_str().to_string()));
        query
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    NewestFirst,
    OldestFirst,
    PriceAscending,
    PriceDescending,
    HighestRated,
    MostPopular,
}

impl SortOrder {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NewestFirst => "-created_at",
            Self::OldestFirst => "created_at",
            Self::PriceAscending => "price",
            Self::PriceDescending => "-price",
            Self::HighestRated => "-average_rating",
            Self::MostPopular => "-purchase_count",
        }
    }
}

/// Interaction kinds reported to the recommendation backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    View,
    Click,
    AddCart,
    Purchase,
    Wishlist,
    Review,
    Search,
}

impl ActivityKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::View => "view",
            Self::Click => "click",
            Self::AddCart => "add_cart",
            Self::Purchase => "purchase",
            Self::Wishlist => "wishlist",
            Self::Review => "review",
            Self::Search => "search",
        }
    }
}
