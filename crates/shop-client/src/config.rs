//! Configuration types for the storefront client.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Paths of the storefront endpoints, relative to the base URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    /// Option value selection (variant availability) view.
    pub option_selection: String,
    /// Cart action view (add, update, delete).
    pub cart_action: String,
    /// Customer account deactivation view.
    pub deactivate_account: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            option_selection: "products/option-value-selection".to_string(),
            cart_action: "cart/cart_action/".to_string(),
            deactivate_account: "users/deactivate/".to_string(),
        }
    }
}

/// Retry behavior for failed requests.
///
/// Only errors reporting [`is_retryable`](crate::ClientError::is_retryable)
/// are retried. The delay doubles after each attempt up to `max_backoff_ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryPolicy {
    /// Total attempts including the first one. `1` disables retries.
    pub max_attempts: u32,
    /// Delay before the second attempt, in milliseconds.
    pub initial_backoff_ms: u64,
    /// Upper bound for any single delay, in milliseconds.
    pub max_backoff_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_backoff_ms: 200,
            max_backoff_ms: 2_000,
        }
    }
}

impl RetryPolicy {
    /// A policy that performs a single attempt.
    #[must_use]
    pub const fn no_retry() -> Self {
        Self {
            max_attempts: 1,
            initial_backoff_ms: 0,
            max_backoff_ms: 0,
        }
    }

    /// Delay to wait after `attempt` (1-based) failed.
    #[must_use]
    pub fn backoff(&self, attempt: u32) -> Duration {
        let factor = 1u64.checked_shl(attempt.saturating_sub(1)).unwrap_or(u64::MAX);
        let millis = self
            .initial_backoff_ms
            .saturating_mul(factor)
            .min(self.max_backoff_ms);
        Duration::from_millis(millis)
    }
}

/// Settings for [`HttpStorefront`](crate::HttpStorefront).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientSettings {
    /// Root of the storefront, e.g. `https://shop.example.com/`.
    pub base_url: String,

    /// Endpoint paths relative to `base_url`.
    pub endpoints: Endpoints,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,

    /// Retry behavior for transient failures.
    pub retry: RetryPolicy,

    /// `Cookie` header sent with every request (session and CSRF cookies).
    /// Read from a settings file but never written back.
    #[serde(default, skip_serializing)]
    pub cookie: Option<String>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000/".to_string(),
            endpoints: Endpoints::default(),
            timeout_secs: 30,
            retry: RetryPolicy::default(),
            cookie: None,
        }
    }
}

impl ClientSettings {
    /// Creates settings pointing at `base_url` with defaults elsewhere.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    /// Per-request timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
