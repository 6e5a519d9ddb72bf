//! Modal dialog state for the UI.

/// What: Captures the dialog overlays the file table can show.
///
/// - Input: Mutated by event handlers in response to user actions.
/// - Output: Drives conditional rendering and which keys are routed to the modal.
/// - Details: Only one modal can be active at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Modal {
    /// No dialog; input goes to the file table.
    #[default]
    None,
    /// Informational alert with a non-interactive message (download report, load errors).
    Alert {
        /// Title shown in the border.
        title: String,
        /// Body text; may span multiple lines.
        message: String,
    },
    /// Key binding overview.
    Help,
}

impl Modal {
    /// Whether any modal is currently shown.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        !matches!(self, Self::None)
    }
}
