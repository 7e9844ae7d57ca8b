//! Account and admin page messages.

/// Messages for the account settings page.
#[derive(Debug, Clone)]
pub enum AccountMessage {
    /// User confirmed the deactivation dialog
    DeactivateConfirmed,
}

/// Messages for the admin product form.
#[derive(Debug, Clone)]
pub enum AdminMessage {
    /// User clicked a section link
    SectionClicked(String),
}
