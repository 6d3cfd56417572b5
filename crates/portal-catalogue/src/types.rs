//! Request and response types for `GET /products/catalogue/all_products`.
//!
//! ## Response shape
//!
//! The endpoint wraps its product array in an envelope. Depending on the
//! deployment the array sits under `products` or `items`, and the paging
//! counters may be missing entirely on small catalogues. A bare JSON array is
//! accepted as well and treated as a single unpaged page.
//!
//! With `group_by_name=true` the backend returns pre-grouped items instead of
//! products. Callers that group locally should leave the flag off.

use portal_core::ProductRecord;
use serde::Deserialize;

/// Page size used when a query does not set one.
pub const DEFAULT_PER_PAGE: u32 = 50;

/// Filters and paging for one catalogue request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogueQuery {
    /// 1-based page number.
    pub page: u32,
    pub per_page: u32,
    pub brand: Option<String>,
    pub category: Option<String>,
    /// Free-text search over product names.
    pub search: Option<String>,
    /// Backend sort key, passed through verbatim (e.g. `"price_asc"`).
    pub sort: Option<String>,
    pub new_only: bool,
    pub group_by_name: bool,
}

impl Default for CatalogueQuery {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
            brand: None,
            category: None,
            search: None,
            sort: None,
            new_only: false,
            group_by_name: false,
        }
    }
}

impl CatalogueQuery {
    /// Query-string pairs in a stable order. Unset filters are omitted;
    /// booleans are always sent.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("per_page", self.per_page.to_string()),
        ];
        let filters = [
            ("brand", &self.brand),
            ("category", &self.category),
            ("search", &self.search),
            ("sort", &self.sort),
        ];
        for (key, value) in filters {
            if let Some(value) = value.as_deref().filter(|v| !v.trim().is_empty()) {
                pairs.push((key, value.to_owned()));
            }
        }
        pairs.push(("new_only", self.new_only.to_string()));
        pairs.push(("group_by_name", self.group_by_name.to_string()));
        pairs
    }

    /// Same filters, different page.
    #[must_use]
    pub fn with_page(&self, page: u32) -> Self {
        Self {
            page,
            ..self.clone()
        }
    }
}

/// One page of catalogue products.
#[derive(Debug, Clone, PartialEq)]
pub struct CataloguePage {
    pub products: Vec<ProductRecord>,
    pub page: u32,
    pub per_page: u32,
    /// Total product count across all pages, when the backend reports it.
    pub total: Option<u64>,
    pub total_pages: Option<u32>,
}

impl CataloguePage {
    /// Whether another page should be requested after this one.
    #[must_use]
    pub fn has_more(&self) -> bool {
        if self.products.is_empty() {
            return false;
        }
        if self.per_page > 0 && self.products.len() < self.per_page as usize {
            return false;
        }
        match self.total_pages {
            Some(total_pages) => self.page < total_pages,
            None => true,
        }
    }
}

/// Raw response body.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum CatalogueResponse {
    Envelope(CatalogueEnvelope),
    Bare(Vec<ProductRecord>),
}

#[derive(Debug, Deserialize)]
pub(crate) struct CatalogueEnvelope {
    #[serde(default, alias = "items")]
    pub products: Vec<ProductRecord>,
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub per_page: Option<u32>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub total_pages: Option<u32>,
}

impl CatalogueResponse {
    /// Fills paging fields the backend left out from the request.
    pub(crate) fn into_page(self, query: &CatalogueQuery) -> CataloguePage {
        match self {
            CatalogueResponse::Envelope(envelope) => CataloguePage {
                products: envelope.products,
                page: envelope.page.unwrap_or(query.page),
                per_page: envelope.per_page.unwrap_or(query.per_page),
                total: envelope.total,
                total_pages: envelope.total_pages,
            },
            CatalogueResponse::Bare(products) => CataloguePage {
                page: query.page,
                per_page: query.per_page,
                total: u64::try_from(products.len()).ok(),
                total_pages: Some(query.page),
                products,
            },
        }
    }
}
