//! HTTP client for the catalogue's `all_products` endpoint.

mod fetch_all;

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};

use crate::error::CatalogueError;
use crate::types::{CatalogueQuery, CataloguePage, CatalogueResponse};

const CATALOGUE_PATH: &str = "products/catalogue/all_products";

/// HTTP client for `GET {base}/products/catalogue/all_products`.
///
/// Maps 401/403, 404 and other non-2xx responses to typed errors. Requests
/// are made once; there is no retry policy.
pub struct CatalogueClient {
    pub(super) client: Client,
    pub(super) base_url: Url,
    pub(super) api_token: Option<String>,
}

impl std::fmt::Debug for CatalogueClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogueClient")
            .field("base_url", &self.base_url.as_str())
            .field("api_token", &self.api_token.as_ref().map(|_| "[redacted]"))
            .finish_non_exhaustive()
    }
}

impl CatalogueClient {
    /// Creates a client with the configured timeout, `User-Agent` and
    /// optional bearer token.
    ///
    /// # Errors
    ///
    /// - [`CatalogueError::InvalidBaseUrl`] if `base_url` is not an absolute
    ///   `http`/`https` URL.
    /// - [`CatalogueError::Http`] if the underlying `reqwest::Client` cannot
    ///   be constructed.
    pub fn new(
        base_url: &str,
        timeout_secs: u64,
        user_agent: &str,
        api_token: Option<&str>,
    ) -> Result<Self, CatalogueError> {
        let base_url = parse_base_url(base_url)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            base_url,
            api_token: api_token.map(str::to_owned),
        })
    }

    /// Fetches a single catalogue page.
    ///
    /// # Errors
    ///
    /// - [`CatalogueError::Unauthorized`] for HTTP 401 or 403.
    /// - [`CatalogueError::NotFound`] for HTTP 404.
    /// - [`CatalogueError::UnexpectedStatus`] for any other non-2xx status.
    /// - [`CatalogueError::Http`] for network or TLS failures.
    /// - [`CatalogueError::Deserialize`] when the body is not a catalogue response.
    pub async fn fetch_page(&self, query: &CatalogueQuery) -> Result<CataloguePage, CatalogueError> {
        let url = self.catalogue_url(query);

        let mut request = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json");
        if let Some(token) = &self.api_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(CatalogueError::Unauthorized {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        if status == StatusCode::NOT_FOUND {
            return Err(CatalogueError::NotFound {
                url: url.to_string(),
            });
        }

        if !status.is_success() {
            return Err(CatalogueError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        let parsed = serde_json::from_str::<CatalogueResponse>(&body).map_err(|e| {
            CatalogueError::Deserialize {
                context: format!("catalogue page {} from {}", query.page, self.base_url),
                source: e,
            }
        })?;

        let page = parsed.into_page(query);
        tracing::debug!(
            page = page.page,
            products = page.products.len(),
            total_pages = ?page.total_pages,
            "fetched catalogue page"
        );
        Ok(page)
    }

    /// Builds the request URL for `query`.
    fn catalogue_url(&self, query: &CatalogueQuery) -> Url {
        let mut url = self.base_url.clone();
        // parse_base_url rejected cannot-be-a-base URLs
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(CATALOGUE_PATH.split('/'));
        }
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query.to_pairs() {
                pairs.append_pair(key, &value);
            }
        }
        url
    }
}

/// Parses and checks the configured base URL. Any query or fragment is dropped.
fn parse_base_url(base_url: &str) -> Result<Url, CatalogueError> {
    let invalid = |reason: String| CatalogueError::InvalidBaseUrl {
        base_url: base_url.to_owned(),
        reason,
    };

    let mut url = Url::parse(base_url.trim()).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme \"{}\"", url.scheme())));
    }
    if url.cannot_be_a_base() || url.host_str().is_none() {
        return Err(invalid("URL has no host".to_string()));
    }
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
