//! Account and admin page handlers.

use super::MessageHandler;
use crate::message::{AccountMessage, AdminMessage};
use crate::state::{AppState, Notice};
use crate::task::{Effect, Task};

/// Shown when deactivation fails, whatever the cause.
pub const DEACTIVATION_FAILED: &str = "Failed to deactivate customer account.";

/// Handler for account page messages.
pub struct AccountHandler;

impl MessageHandler<AccountMessage> for AccountHandler {
    fn handle(&self, state: &mut AppState, msg: AccountMessage) -> Task {
        match msg {
            AccountMessage::DeactivateConfirmed => {
                if state.account.deactivating {
                    tracing::debug!("Deactivation already in flight");
                    return Task::none();
                }
                state.account.deactivating = true;
                Task::effect(Effect::DeactivateAccount)
            }
        }
    }
}

/// Record the redirect target after deactivation.
pub fn account_deactivated(state: &mut AppState, result: Result<String, String>) -> Task {
    state.account.deactivating = false;
    match result {
        Ok(next_url) => {
            tracing::info!("Account deactivated, redirecting to {}", next_url);
            state.account.redirect = Some(next_url);
        }
        Err(message) => {
            tracing::debug!("Deactivation failed: {}", message);
            state.notify(Notice::error(DEACTIVATION_FAILED));
        }
    }
    Task::none()
}

/// Handler for the admin product form.
pub struct AdminHandler;

impl MessageHandler<AdminMessage> for AdminHandler {
    fn handle(&self, state: &mut AppState, msg: AdminMessage) -> Task {
        match msg {
            AdminMessage::SectionClicked(id) => {
                if !state.admin.display(&id) {
                    tracing::warn!("Unknown admin section '{}'", id);
                }
                Task::none()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_confirm_sends_one_request() {
        let mut state = AppState::new();
        let first = AccountHandler.handle(&mut state, AccountMessage::DeactivateConfirmed);
        let second = AccountHandler.handle(&mut state, AccountMessage::DeactivateConfirmed);
        assert_eq!(first.effects(), [Effect::DeactivateAccount]);
        assert!(second.is_none());
    }

    #[test]
    fn test_failure_shows_fixed_message() {
        let mut state = AppState::new();
        let _ = AccountHandler.handle(&mut state, AccountMessage::DeactivateConfirmed);
        let _ = account_deactivated(&mut state, Err("Forbidden".to_string()));
        assert_eq!(state.notice, Some(Notice::error(DEACTIVATION_FAILED)));
        assert_eq!(state.account.redirect, None);
        assert!(!state.account.deactivating);
    }
}
