//! Row Controls
//!
//! Which buttons a row shows and when they are enabled.

use serde::{Deserialize, Serialize};

/// Configurable per-row action slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowAction {
    Delete,
    /// Edit, or confirm while the row is being edited
    Edit,
    /// Logs the item; no state change
    Complete,
}

/// Concrete button rendered for an action slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Delete,
    Edit,
    ConfirmEdit,
    Complete,
}

impl ButtonKind {
    pub fn for_action(action: RowAction, row_editing: bool) -> Self {
        match action {
            RowAction::Delete => ButtonKind::Delete,
            RowAction::Edit if row_editing => ButtonKind::ConfirmEdit,
            RowAction::Edit => ButtonKind::Edit,
            RowAction::Complete => ButtonKind::Complete,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ButtonKind::Delete => "Delete Item",
            ButtonKind::Edit => "Edit Item",
            ButtonKind::ConfirmEdit => "Confirm Edit Item",
            ButtonKind::Complete => "Complete Item",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            ButtonKind::Delete => "🗑",
            ButtonKind::Edit => "✎",
            ButtonKind::ConfirmEdit => "✔",
            ButtonKind::Complete => "☑",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            ButtonKind::Delete => "row-btn delete-btn",
            ButtonKind::Edit => "row-btn edit-btn",
            ButtonKind::ConfirmEdit => "row-btn confirm-btn",
            ButtonKind::Complete => "row-btn complete-btn",
        }
    }
}

/// Rendered state of one action button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonState {
    pub kind: ButtonKind,
    pub disabled: bool,
}

impl ButtonState {
    /// While any edit is active only the edited row's confirm stays enabled
    pub fn new(action: RowAction, row_editing: bool, any_editing: bool) -> Self {
        let kind = ButtonKind::for_action(action, row_editing);
        Self {
            kind,
            disabled: any_editing && kind != ButtonKind::ConfirmEdit,
        }
    }
}

/// Drop repeated actions, keeping first occurrence order
pub fn dedup_actions(actions: &[RowAction]) -> Vec<RowAction> {
    let mut seen = Vec::with_capacity(actions.len());
    for action in actions {
        if !seen.contains(action) {
            seen.push(*action);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [RowAction; 3] = [RowAction::Delete, RowAction::Edit, RowAction::Complete];

    #[test]
    fn test_idle_rows_enable_everything() {
        for action in ALL {
            let state = ButtonState::new(action, false, false);
            assert!(!state.disabled, "{:?} should be enabled", action);
        }
        assert_eq!(ButtonState::new(RowAction::Edit, false, false).kind, ButtonKind::Edit);
    }

    #[test]
    fn test_edited_row_only_confirms() {
        let delete = ButtonState::new(RowAction::Delete, true, true);
        let edit = ButtonState::new(RowAction::Edit, true, true);
        let complete = ButtonState::new(RowAction::Complete, true, true);

        assert!(delete.disabled);
        assert!(complete.disabled);
        assert_eq!(edit.kind, ButtonKind::ConfirmEdit);
        assert!(!edit.disabled);
    }

    #[test]
    fn test_other_rows_locked_during_edit() {
        for action in ALL {
            let state = ButtonState::new(action, false, true);
            assert!(state.disabled, "{:?} should be disabled", action);
        }
    }

    #[test]
    fn test_titles() {
        assert_eq!(ButtonKind::ConfirmEdit.title(), "Confirm Edit Item");
        assert_eq!(ButtonKind::Complete.title(), "Complete Item");
    }

    #[test]
    fn test_dedup_actions() {
        let actions = [RowAction::Edit, RowAction::Delete, RowAction::Edit];
        assert_eq!(dedup_actions(&actions), vec![RowAction::Edit, RowAction::Delete]);
    }
}
