//! User-visible page notices.

/// Message shown to the user on the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Informational message (e.g. an action was refused locally).
    Info(String),
    /// A request failed.
    Error(String),
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self::Info(message.into())
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error(message.into())
    }

    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Info(m) | Self::Error(m) => m,
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}
