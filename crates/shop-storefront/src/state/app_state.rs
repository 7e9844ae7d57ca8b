//! Application-level state.
//!
//! This module contains `AppState` which is the root of all page state.

use super::account::AccountState;
use super::admin::AdminSections;
use super::cart_page::CartPageState;
use super::generation::RequestGeneration;
use super::notice::Notice;
use super::product_page::ProductSession;

/// Top-level storefront state.
///
/// Only [`crate::App::update`] mutates it.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Open product page (None when no product page is loaded)
    pub product: Option<ProductSession>,
    pub cart: CartPageState,
    pub account: AccountState,
    pub admin: AdminSections,
    /// Item count shown in the header badge
    pub cart_badge: Option<u32>,
    /// Latest user-visible notice
    pub notice: Option<Notice>,
    /// Tags for page visits and availability requests, kept across visits
    pub generations: RequestGeneration,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current notice.
    pub fn notify(&mut self, notice: Notice) {
        if notice.is_error() {
            tracing::warn!("{}", notice.message());
        }
        self.notice = Some(notice);
    }
}
