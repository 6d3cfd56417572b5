//! `group` and `fetch` command handlers.

use std::io::Read;
use std::path::Path;

use anyhow::Context;
use portal_catalogue::{CatalogueClient, CatalogueQuery};
use portal_core::{AppConfig, ConfigError, ProductRecord};
use portal_grouping::{flatten_product_groups, group_products_by_name};
use serde_json::Value;

/// Group products read from `input` (or stdin) and print the result as JSON.
///
/// # Errors
///
/// Returns an error if the input cannot be read or is not a product list.
pub(crate) fn run_group(input: Option<&Path>, flatten: bool) -> anyhow::Result<()> {
    let raw = read_input(input)?;
    let products = parse_products(&raw)?;
    tracing::info!(products = products.len(), "grouping products");
    print_grouped(products, flatten)
}

/// Fetch all catalogue pages matching `query`, group them locally and print
/// the result as JSON.
///
/// # Errors
///
/// Returns an error if `PORTAL_API_BASE_URL` is unset, the client cannot be
/// built, or any page request fails.
pub(crate) async fn run_fetch(
    config: &AppConfig,
    query: &CatalogueQuery,
    flatten: bool,
) -> anyhow::Result<()> {
    let base_url = config
        .api_base_url
        .as_deref()
        .ok_or_else(|| ConfigError::MissingEnvVar("PORTAL_API_BASE_URL".to_string()))?;

    let client = CatalogueClient::new(
        base_url,
        config.request_timeout_secs,
        &config.user_agent,
        config.api_token.as_deref(),
    )?;

    let products = client
        .fetch_all(
            query,
            config.inter_request_delay_ms,
            config.catalogue_max_pages,
        )
        .await
        .with_context(|| format!("failed to fetch catalogue from {base_url}"))?;
    tracing::info!(products = products.len(), "fetched catalogue products");

    print_grouped(products, flatten)
}

fn print_grouped(products: Vec<ProductRecord>, flatten: bool) -> anyhow::Result<()> {
    let grouped = group_products_by_name(products);
    let rendered = if flatten {
        serde_json::to_string_pretty(&flatten_product_groups(grouped))?
    } else {
        serde_json::to_string_pretty(&grouped)?
    };
    println!("{rendered}");
    Ok(())
}

fn read_input(input: Option<&Path>) -> anyhow::Result<String> {
    match input {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("failed to read stdin")?;
            Ok(raw)
        }
    }
}

/// Accepts a JSON array of products, or an object carrying the array under
/// `products` or `items`.
pub(crate) fn parse_products(raw: &str) -> anyhow::Result<Vec<ProductRecord>> {
    let value: Value = serde_json::from_str(raw).context("input is not valid JSON")?;
    let list = match value {
        Value::Array(_) => value,
        Value::Object(mut map) => map
            .remove("products")
            .or_else(|| map.remove("items"))
            .ok_or_else(|| anyhow::anyhow!("expected a `products` or `items` array in input object"))?,
        other => anyhow::bail!("expected a JSON array or object, got {}", json_kind(&other)),
    };
    serde_json::from_value(list).context("input does not contain valid product records")
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
