//! Multi-page fetch loop for `CatalogueClient`.

use std::time::Duration;

use portal_core::ProductRecord;

use crate::error::CatalogueError;
use crate::types::CatalogueQuery;

use super::CatalogueClient;

impl CatalogueClient {
    /// Fetches every catalogue page matching `query`, starting at `query.page`.
    ///
    /// Stops after an empty page, a page shorter than `per_page`, the page
    /// the backend reports as the last one (`page >= total_pages`), or page
    /// `u32::MAX`.
    ///
    /// `inter_request_delay_ms` is slept between page requests (not before the
    /// first one).
    ///
    /// **All-or-nothing semantics**: if any page fails, products from earlier
    /// pages are discarded and the error is returned.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Self::fetch_page`].
    /// Returns [`CatalogueError::PaginationLimit`] if more than `max_pages`
    /// pages would be requested.
    pub async fn fetch_all(
        &self,
        query: &CatalogueQuery,
        inter_request_delay_ms: u64,
        max_pages: usize,
    ) -> Result<Vec<ProductRecord>, CatalogueError> {
        let mut all_products: Vec<ProductRecord> = Vec::new();
        let mut page_query = query.with_page(query.page.max(1));
        let mut page_count = 0usize;

        loop {
            page_count += 1;
            if page_count > max_pages {
                tracing::warn!(
                    base_url = %self.base_url,
                    max_pages,
                    "catalogue page cap reached"
                );
                return Err(CatalogueError::PaginationLimit {
                    base_url: self.base_url.to_string(),
                    max_pages,
                });
            }

            if page_count > 1 && inter_request_delay_ms > 0 {
                tokio::time::sleep(Duration::from_millis(inter_request_delay_ms)).await;
            }

            let page = self.fetch_page(&page_query).await?;
            let has_more = page.has_more();
            all_products.extend(page.products);

            let Some(next_page) = page_query.page.checked_add(1).filter(|_| has_more) else {
                break;
            };
            page_query = page_query.with_page(next_page);
        }

        tracing::debug!(
            pages = page_count,
            products = all_products.len(),
            "fetched catalogue"
        );
        Ok(all_products)
    }
}
