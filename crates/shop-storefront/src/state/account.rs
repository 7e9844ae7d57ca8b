//! Account page state.

/// State of the account settings page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountState {
    /// Set once deactivation succeeded; the page navigates here.
    pub redirect: Option<String>,
    /// A deactivation request is in flight.
    pub deactivating: bool,
}
