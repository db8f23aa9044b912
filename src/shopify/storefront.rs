//! Shopify Storefront API client.
//!
//! Public, read-only surface used for catalog and price lookups.

use std::sync::Arc;

use secrecy::ExposeSecret;
use serde_json::{Value, json};
use tracing::instrument;

use crate::config::ShopifyConfig;

use super::ShopifyError;
use super::types::{Money, PriceQuote};

/// Query for a product's first variant and its price.
const PRODUCT_FIRST_VARIANT_QUERY: &str = r"
query ProductFirstVariant($handle: String!) {
  productByHandle(handle: $handle) {
    title
    handle
    variants(first: 1) {
      edges {
        node {
          id
          title
          price {
            amount
            currencyCode
          }
        }
      }
    }
  }
}
";

/// Client for the Shopify Storefront GraphQL API.
#[derive(Clone)]
pub struct StorefrontClient {
    inner: Arc<StorefrontClientInner>,
}

struct StorefrontClientInner {
    client: reqwest::Client,
    endpoint: String,
    access_token: String,
}

impl StorefrontClient {
    /// Create a new Storefront API client.
    #[must_use]
    pub fn new(config: &ShopifyConfig) -> Self {
        let endpoint = format!(
            "{}/api/{}/graphql.json",
            config.base_url(),
            config.api_version
        );

        Self {
            inner: Arc::new(StorefrontClientInner {
                client: reqwest::Client::new(),
                endpoint,
                access_token: config.storefront_token.expose_secret().to_string(),
            }),
        }
    }

    /// Execute a GraphQL document against the Storefront API.
    ///
    /// Returns the `data` value of the response.
    ///
    /// # Errors
    ///
    /// - `ShopifyError::Transport` on a non-success HTTP status
    /// - `ShopifyError::GraphQL` when the response carries an error array
    /// - `ShopifyError::Http`/`Parse` on transport or decoding failures
    pub async fn execute(&self, query: &str, variables: Value) -> Result<Value, ShopifyError> {
        let response = self
            .inner
            .client
            .post(&self.inner.endpoint)
            .header("X-Shopify-Storefront-Access-Token", &self.inner.access_token)
            .header("Content-Type", "application/json")
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %body.chars().take(500).collect::<String>(),
                "Storefront API returned non-success status"
            );
            return Err(ShopifyError::Transport {
                status: status.as_u16(),
                body,
            });
        }

        let payload: Value = serde_json::from_str(&body)?;

        if let Some(errors) = payload.get("errors")
            && errors.as_array().is_some_and(|e| !e.is_empty())
        {
            tracing::debug!(errors = %errors, "GraphQL errors in Storefront response");
            return Err(ShopifyError::GraphQL(errors.clone()));
        }

        Ok(payload.get("data").cloned().unwrap_or(Value::Null))
    }

    /// Look up a product's first variant by handle.
    ///
    /// Returns `None` when the product does not exist or has no variants.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self), fields(handle = %handle))]
    pub async fn first_variant(&self, handle: &str) -> Result<Option<PriceQuote>, ShopifyError> {
        let data = self
            .execute(PRODUCT_FIRST_VARIANT_QUERY, json!({ "handle": handle }))
            .await?;

        Ok(parse_first_variant(handle, &data))
    }
}

/// Project the first-variant query response into a `PriceQuote`.
fn parse_first_variant(handle: &str, data: &Value) -> Option<PriceQuote> {
    let product = data.get("productByHandle")?;
    if product.is_null() {
        return None;
    }

    let node = product
        .pointer("/variants/edges/0/node")
        .filter(|n| !n.is_null())?;

    Some(PriceQuote {
        product_handle: handle.to_string(),
        product_title: json_str(product.get("title")),
        variant_id: json_str(node.get("id")),
        variant_title: json_str(node.get("title")),
        price: Money {
            amount: json_str(node.pointer("/price/amount")),
            currency_code: json_str(node.pointer("/price/currencyCode")),
        },
    })
}

fn json_str(value: Option<&Value>) -> String {
    value
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_first_variant_success() {
        let data = json!({
            "productByHandle": {
                "title": "Widget",
                "handle": "widget",
                "variants": {
                    "edges": [{
                        "node": {
                            "id": "gid://shopify/ProductVariant/1",
                            "title": "Default Title",
                            "price": { "amount": "19.99", "currencyCode": "USD" }
                        }
                    }]
                }
            }
        });

        let quote = parse_first_variant("widget", &data).expect("quote");
        assert_eq!(quote.product_title, "Widget");
        assert_eq!(quote.variant_id, "gid://shopify/ProductVariant/1");
        assert_eq!(quote.price.amount, "19.99");
        assert_eq!(quote.price.currency_code, "USD");
    }

    #[test]
    fn test_parse_first_variant_missing_product() {
        let data = json!({ "productByHandle": null });
        assert!(parse_first_variant("nope", &data).is_none());
    }

    #[test]
    fn test_parse_first_variant_zero_variants() {
        let data = json!({
            "productByHandle": {
                "title": "Widget",
                "handle": "widget",
                "variants": { "edges": [] }
            }
        });
        assert!(parse_first_variant("widget", &data).is_none());
    }
}
