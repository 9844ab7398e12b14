//! Session view state.
//!
//! Everything the panels need to decide what to show lives here and is
//! passed to handlers explicitly.

use sensei_types::{ExplanationMode, Region, StyleMode};

/// Which input receives key presses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Editor,
    Console,
    Chat,
    Explanation,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub style: StyleMode,
    pub explanation_mode: ExplanationMode,
    pub chatbox_expanded: bool,
    pub console_visible: bool,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_mode(&mut self, mode: ExplanationMode) {
        self.explanation_mode = mode;
    }

    /// Flip beginner/advanced wording; returns the new style.
    pub fn toggle_style(&mut self) -> StyleMode {
        self.style = self.style.toggled();
        self.style
    }

    /// Returns whether the chatbox is now expanded.
    pub fn toggle_chatbox(&mut self) -> bool {
        self.chatbox_expanded = !self.chatbox_expanded;
        self.chatbox_expanded
    }

    pub fn visible_region(&self) -> Region {
        self.explanation_mode.visible_region()
    }

    /// Focus targets reachable in the current layout, in cycling order.
    pub fn focus_order(&self) -> Vec<Focus> {
        let mut order = vec![Focus::Editor];
        if self.explanation_mode == ExplanationMode::Full {
            order.push(Focus::Explanation);
        }
        if self.console_visible {
            order.push(Focus::Console);
        }
        if self.chatbox_expanded {
            order.push(Focus::Chat);
        }
        order
    }
}
