//! Tap handlers. None of them are wired to anything yet; each one only
//! logs a placeholder line.

use calcpad_common::ButtonType;
use serde::{Deserialize, Serialize};
use tracing::info;

pub const MENU_PLACEHOLDER: &str = "Menu tapped";
pub const PAD_PLACEHOLDER: &str = "Something";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TapAction {
    Menu,
    Pad(ButtonType),
}

impl TapAction {
    pub fn label(&self) -> String {
        match self {
            TapAction::Menu => "menu".to_string(),
            TapAction::Pad(button) => button.label(),
        }
    }
}

/// Run the stub for `action`, returning the message it logged.
pub fn handle_tap(action: &TapAction) -> &'static str {
    let message = match action {
        TapAction::Menu => MENU_PLACEHOLDER,
        TapAction::Pad(_) => PAD_PLACEHOLDER,
    };
    info!(action = %action.label(), "{message}");
    message
}
