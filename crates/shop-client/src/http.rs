//! reqwest implementation of [`StorefrontApi`].

use reqwest::header::{ACCEPT, COOKIE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;

use shop_model::{
    CartRequest, CartResponse, DeactivationResponse, ProductId, SelectionSet, ServerErrorBody,
    VariantAvailability,
};

use crate::api::StorefrontApi;
use crate::config::ClientSettings;
use crate::csrf::{CSRF_FORM_FIELD, CSRF_HEADER, CsrfToken};
use crate::error::{ClientError, Result};
use crate::retry::with_retry;

/// User agent string for storefront requests.
const USER_AGENT_VALUE: &str = concat!("shop-storefront/", env!("CARGO_PKG_VERSION"));

/// `action` value of an option selection query.
pub const OPTION_VALUE_SELECTION_ACTION: &str = "option_value_selection";

/// Storefront client backed by a reqwest connection pool.
#[derive(Debug, Clone)]
pub struct HttpStorefront {
    client: Client,
    settings: ClientSettings,
    base: Url,
    csrf: Option<CsrfToken>,
}

impl HttpStorefront {
    /// Creates a client from settings.
    ///
    /// The CSRF token is taken from the configured cookie header, if any.
    pub fn new(settings: ClientSettings) -> Result<Self> {
        let base = parse_base_url(&settings.base_url)?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        // Ajax marker the server uses to answer with JSON
        headers.insert(
            "X-Requested-With",
            HeaderValue::from_static("XMLHttpRequest"),
        );
        if let Some(cookie) = &settings.cookie {
            let value = HeaderValue::from_str(cookie)
                .map_err(|e| ClientError::InvalidConfig(format!("invalid cookie header: {e}")))?;
            headers.insert(COOKIE, value);
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(settings.timeout())
            .build()
            .map_err(|e| ClientError::Network(format!("failed to create HTTP client: {e}")))?;

        let csrf = settings
            .cookie
            .as_deref()
            .and_then(CsrfToken::from_cookie_header);
        if csrf.is_none() {
            tracing::debug!("No CSRF cookie configured; mutating requests will be refused");
        }

        Ok(Self {
            client,
            settings,
            base,
            csrf,
        })
    }

    /// Settings this client was built from.
    #[must_use]
    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    /// Resolve an endpoint path against the base URL.
    pub fn endpoint_url(&self, path: &str) -> Result<Url> {
        self.base
            .join(path.trim_start_matches('/'))
            .map_err(|e| ClientError::InvalidConfig(format!("{path}: {e}")))
    }

    fn csrf(&self) -> Result<&CsrfToken> {
        self.csrf.as_ref().ok_or(ClientError::MissingCsrfToken)
    }

    async fn fetch_availability(
        &self,
        url: Url,
        product_id: ProductId,
        selected_options: &str,
    ) -> Result<VariantAvailability> {
        let product_id = product_id.to_string();
        let response = self
            .client
            .get(url)
            .query(&[
                ("product_id", product_id.as_str()),
                ("selected_options", selected_options),
                ("action", OPTION_VALUE_SELECTION_ACTION),
            ])
            .send()
            .await?;
        handle_response(response).await
    }

    async fn post_cart(&self, url: Url, request: &CartRequest) -> Result<CartResponse> {
        let token = self.csrf()?;
        let variant = request.product_variant_id.to_string();
        let quantity = request.item_quantity.map(|q| q.to_string());

        let mut form: Vec<(&str, &str)> = vec![
            ("product_variant_id", variant.as_str()),
            ("action", request.action.as_str()),
            (CSRF_FORM_FIELD, token.as_str()),
        ];
        if let Some(quantity) = &quantity {
            form.push(("item_quantity", quantity.as_str()));
        }

        let response = self
            .client
            .post(url)
            .header(CSRF_HEADER, token.as_str())
            .form(&form)
            .send()
            .await?;
        handle_response(response).await
    }

    async fn get_deactivate(&self, url: Url) -> Result<DeactivationResponse> {
        let token = self.csrf()?;
        let response = self
            .client
            .get(url)
            .header(CSRF_HEADER, token.as_str())
            .query(&[(CSRF_FORM_FIELD, token.as_str())])
            .send()
            .await?;
        handle_response(response).await
    }
}

#[async_trait::async_trait]
impl StorefrontApi for HttpStorefront {
    async fn option_value_selection(
        &self,
        product_id: ProductId,
        selection: &SelectionSet,
    ) -> Result<VariantAvailability> {
        let url = self.endpoint_url(&self.settings.endpoints.option_selection)?;
        let selected_options = selection.to_query_json()?;

        tracing::info!(
            "Querying variants of product {} ({} option(s) selected)",
            product_id,
            selection.len()
        );

        with_retry(self.settings.retry, "option value selection", || {
            self.fetch_availability(url.clone(), product_id, &selected_options)
        })
        .await
    }

    async fn cart_action(&self, request: &CartRequest) -> Result<CartResponse> {
        let url = self.endpoint_url(&self.settings.endpoints.cart_action)?;

        tracing::info!(
            "Cart action {} for variant {}",
            request.action,
            request.product_variant_id
        );

        // Adds are not idempotent: a retried add could double the quantity.
        let policy = match request.action {
            shop_model::CartAction::AddCartItem => crate::config::RetryPolicy::no_retry(),
            _ => self.settings.retry,
        };
        with_retry(policy, request.action.as_str(), || {
            self.post_cart(url.clone(), request)
        })
        .await
    }

    async fn deactivate_account(&self) -> Result<DeactivationResponse> {
        let url = self.endpoint_url(&self.settings.endpoints.deactivate_account)?;
        tracing::info!("Requesting account deactivation");
        self.get_deactivate(url).await
    }
}

/// Parse the base URL, forcing a trailing slash so relative joins keep the
/// last path segment.
fn parse_base_url(raw: &str) -> Result<Url> {
    let normalized = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{raw}/")
    };
    Url::parse(&normalized).map_err(|e| ClientError::InvalidConfig(format!("{raw}: {e}")))
}

/// Check the status and parse the JSON body.
///
/// Refusals carry a `{status, message}` body; its message becomes the error
/// message so the page can show it.
async fn handle_response<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ServerErrorBody>(&body)
            .map(|b| b.message)
            .unwrap_or_else(|_| {
                status
                    .canonical_reason()
                    .unwrap_or("unknown error")
                    .to_string()
            });
        tracing::debug!("Server answered {}: {}", status, message);
        return Err(ClientError::Server {
            status: status.as_u16(),
            message,
        });
    }

    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url_joins_relative_paths() {
        let client = HttpStorefront::new(ClientSettings::with_base_url("https://shop.test/store"))
            .unwrap();
        assert_eq!(
            client.endpoint_url("cart/cart_action/").unwrap().as_str(),
            "https://shop.test/store/cart/cart_action/"
        );
        assert_eq!(
            client.endpoint_url("/users/deactivate/").unwrap().as_str(),
            "https://shop.test/store/users/deactivate/"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let result = HttpStorefront::new(ClientSettings::with_base_url("not a url"));
        assert!(matches!(result, Err(ClientError::InvalidConfig(_))));
    }

    #[test]
    fn test_csrf_from_cookie() {
        let settings = ClientSettings {
            cookie: Some("sessionid=s1; csrftoken=abc".to_string()),
            ..Default::default()
        };
        let client = HttpStorefront::new(settings).unwrap();
        assert_eq!(client.csrf().unwrap().as_str(), "abc");

        let client = HttpStorefront::new(ClientSettings::default()).unwrap();
        assert!(matches!(client.csrf(), Err(ClientError::MissingCsrfToken)));
    }

    #[tokio::test]
    async fn test_cart_action_without_token_fails_before_io() {
        // Port 9 (discard) is never contacted: the token check comes first.
        let client =
            HttpStorefront::new(ClientSettings::with_base_url("http://127.0.0.1:9/")).unwrap();
        let result = client
            .cart_action(&CartRequest::delete(shop_model::ProductVariantId(1)))
            .await;
        assert!(matches!(result, Err(ClientError::MissingCsrfToken)));
    }
}
