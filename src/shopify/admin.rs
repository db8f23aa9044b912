//! Shopify Admin API client.
//!
//! Privileged surface used for inventory reads, draft-order creation, and
//! the REST product listing. Requires the Admin API access token.

use std::sync::Arc;

use secrecy::ExposeSecret;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::instrument;

use crate::config::ShopifyConfig;

use super::types::{DraftOrder, ProductSummary, VariantStock, VariantSummary};
use super::{ShopifyError, normalize_variant_id};

/// Query for a variant's inventory quantity and tracked flag.
const VARIANT_STOCK_QUERY: &str = r"
query VariantStock($id: ID!) {
  productVariant(id: $id) {
    id
    inventoryQuantity
    inventoryItem {
      tracked
    }
  }
}
";

/// Mutation creating a draft order with a payable invoice link.
const DRAFT_ORDER_CREATE_MUTATION: &str = r"
mutation DraftOrderCreate($input: DraftOrderInput!) {
  draftOrderCreate(input: $input) {
    draftOrder {
      id
      invoiceUrl
    }
    userErrors {
      field
      message
    }
  }
}
";

/// Note attached to every draft order created through the gateway.
const DRAFT_ORDER_NOTE: &str = "Order placed via chat assistant";

/// Tag attached to every draft order created through the gateway.
const DRAFT_ORDER_TAG: &str = "chat-assistant";

/// Placeholder last name for single-token customer names.
const LAST_NAME_PLACEHOLDER: &str = "-";

/// Parameters for creating a draft order.
#[derive(Debug)]
pub struct DraftOrderParams<'a> {
    /// Qualified variant id for the single line item
    pub variant_id: &'a str,
    /// Line item quantity
    pub quantity: i64,
    /// Customer full name
    pub name: &'a str,
    /// Customer phone number
    pub phone: &'a str,
    /// Street address
    pub address: &'a str,
    /// City
    pub city: &'a str,
}

/// Client for the Shopify Admin API (GraphQL + REST product listing).
#[derive(Clone)]
pub struct AdminClient {
    inner: Arc<AdminClientInner>,
}

struct AdminClientInner {
    client: reqwest::Client,
    base_url: String,
    api_version: String,
    access_token: String,
}

impl AdminClient {
    /// Create a new Admin API client.
    #[must_use]
    pub fn new(config: &ShopifyConfig) -> Self {
        Self {
            inner: Arc::new(AdminClientInner {
                client: reqwest::Client::new(),
                base_url: config.base_url(),
                api_version: config.api_version.clone(),
                access_token: config.admin_token.expose_secret().to_string(),
            }),
        }
    }

    /// Execute a GraphQL document against the Admin API.
    ///
    /// Returns the `data` value of the response.
    ///
    /// # Errors
    ///
    /// - `ShopifyError::Transport` on a non-success HTTP status
    /// - `ShopifyError::GraphQL` when the response carries an error array
    /// - `ShopifyError::Http`/`Parse` on transport or decoding failures
    pub async fn execute(&self, query: &str, variables: Value) -> Result<Value, ShopifyError> {
        let endpoint = format!(
            "{}/admin/api/{}/graphql.json",
            self.inner.base_url, self.inner.api_version
        );

        let response = self
            .inner
            .client
            .post(&endpoint)
            .header("X-Shopify-Access-Token", &self.inner.access_token)
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
                "Admin API returned non-success status"
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
            tracing::debug!(errors = %errors, "GraphQL errors in Admin response");
            return Err(ShopifyError::GraphQL(errors.clone()));
        }

        Ok(payload.get("data").cloned().unwrap_or(Value::Null))
    }

    /// List active, published products via the Admin REST API.
    ///
    /// Single page only; variant ids are normalized to qualified form.
    ///
    /// # Errors
    ///
    /// Returns `ShopifyError::Transport` with the raw body on a non-success
    /// status, or `Http`/`Parse` on transport and decoding failures.
    #[instrument(skip(self))]
    pub async fn list_products(&self, limit: u32) -> Result<Vec<ProductSummary>, ShopifyError> {
        let url = format!(
            "{}/admin/api/{}/products.json?limit={}&status=active&published_status=published",
            self.inner.base_url, self.inner.api_version, limit
        );

        let response = self
            .inner
            .client
            .get(&url)
            .header("X-Shopify-Access-Token", &self.inner.access_token)
            .header("Content-Type", "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %body.chars().take(500).collect::<String>(),
                "Admin REST product listing failed"
            );
            return Err(ShopifyError::Transport {
                status: status.as_u16(),
                body,
            });
        }

        let listing: RestProductsResponse = serde_json::from_str(&body)?;

        Ok(listing.products.into_iter().map(project_product).collect())
    }

    /// Fetch a variant's inventory state.
    ///
    /// Returns `None` when the variant does not exist. `tracked` defaults
    /// to true when the upstream omits the flag.
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails.
    #[instrument(skip(self), fields(variant_id = %variant_id))]
    pub async fn variant_stock(
        &self,
        variant_id: &str,
    ) -> Result<Option<VariantStock>, ShopifyError> {
        let data = self
            .execute(VARIANT_STOCK_QUERY, json!({ "id": variant_id }))
            .await?;

        Ok(parse_variant_stock(variant_id, &data))
    }

    /// Create a draft order with a single line item.
    ///
    /// # Errors
    ///
    /// Returns `ShopifyError::UserError` carrying the raw `userErrors`
    /// payload when the mutation yields no draft order, or any `execute`
    /// error otherwise.
    #[instrument(skip(self, params), fields(variant_id = %params.variant_id))]
    pub async fn create_draft_order(
        &self,
        params: &DraftOrderParams<'_>,
    ) -> Result<DraftOrder, ShopifyError> {
        let (first_name, last_name) = split_name(params.name);

        let input = json!({
            "lineItems": [{
                "variantId": params.variant_id,
                "quantity": params.quantity,
            }],
            "shippingAddress": {
                "firstName": first_name,
                "lastName": last_name,
                "address1": params.address,
                "city": params.city,
                "phone": params.phone,
            },
            "note": DRAFT_ORDER_NOTE,
            "tags": [DRAFT_ORDER_TAG],
        });

        let data = self
            .execute(DRAFT_ORDER_CREATE_MUTATION, json!({ "input": input }))
            .await?;

        let payload = data.get("draftOrderCreate").cloned().unwrap_or(Value::Null);

        if let Some(order) = payload.get("draftOrder").filter(|o| !o.is_null()) {
            return Ok(DraftOrder {
                id: order
                    .get("id")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
                invoice_url: order
                    .get("invoiceUrl")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
            });
        }

        let user_errors = payload
            .get("userErrors")
            .cloned()
            .unwrap_or_else(|| Value::Array(vec![]));
        Err(ShopifyError::UserError(user_errors))
    }
}

// =============================================================================
// REST listing response types
// =============================================================================

#[derive(Debug, Deserialize)]
struct RestProductsResponse {
    products: Vec<RestProduct>,
}

#[derive(Debug, Deserialize)]
struct RestProduct {
    title: String,
    handle: String,
    #[serde(default)]
    variants: Vec<RestVariant>,
}

#[derive(Debug, Deserialize)]
struct RestVariant {
    id: i64,
    title: String,
    price: String,
    inventory_quantity: Option<i64>,
}

/// Project a REST product into a `ProductSummary`.
fn project_product(product: RestProduct) -> ProductSummary {
    ProductSummary {
        title: product.title,
        handle: product.handle,
        variants: product
            .variants
            .into_iter()
            .map(|v| VariantSummary {
                id: normalize_variant_id(&v.id.to_string()),
                title: v.title,
                price: v.price,
                inventory_quantity: v.inventory_quantity,
            })
            .collect(),
    }
}

/// Project the variant-stock query response.
fn parse_variant_stock(variant_id: &str, data: &Value) -> Option<VariantStock> {
    let variant = data.get("productVariant").filter(|v| !v.is_null())?;

    Some(VariantStock {
        variant_id: variant_id.to_string(),
        quantity: variant
            .get("inventoryQuantity")
            .and_then(Value::as_i64)
            .unwrap_or(0),
        tracked: variant
            .pointer("/inventoryItem/tracked")
            .and_then(Value::as_bool)
            .unwrap_or(true),
    })
}

/// Split a full name into (first, last); the first whitespace token is the
/// first name, the remainder the last name, `"-"` when absent.
fn split_name(name: &str) -> (String, String) {
    let mut parts = name.split_whitespace();
    let first = parts.next().unwrap_or_default().to_string();
    let rest = parts.collect::<Vec<_>>().join(" ");
    if rest.is_empty() {
        (first, LAST_NAME_PLACEHOLDER.to_string())
    } else {
        (first, rest)
    }
}
