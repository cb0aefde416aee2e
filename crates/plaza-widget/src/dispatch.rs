//! Click dispatch: controls carry identifiers, identifiers resolve to
//! typed actions through a table, and the widget routes each action
//! to its handler. No markup-attribute inspection anywhere.

use std::collections::HashMap;

/// Identifier of the composer's submit control.
pub const SUBMIT_CONTROL: &str = "post-button";
/// Prefix of the per-post like control identifiers.
pub const LIKE_PREFIX: &str = "like-";
/// Prefix of the navigation link control identifiers.
pub const NAV_PREFIX: &str = "nav-";

/// What a click on a control asks the widget to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Read the composer and create a post from its text.
    SubmitPost,
    /// Flip the like state of the post with this id.
    ToggleLike { id: u64 },
    /// Show the section addressed by this target fragment.
    ShowSection { target: String },
}

/// The control identifier a post's like button carries.
pub fn like_control_id(post_id: u64) -> String {
    format!("{LIKE_PREFIX}{post_id}")
}

/// The control identifier a navigation link carries.
pub fn nav_control_id(target: &str) -> String {
    format!("{NAV_PREFIX}{target}")
}

/// The dispatch table: control identifiers on one side, the action
/// each control triggers on the other. Controls without an entry
/// (the inert placeholders) fall through as no-ops.
#[derive(Debug, Default)]
pub struct ControlMap {
    entries: HashMap<String, Action>,
}

impl ControlMap {
    /// Attach an action to a control identifier. Binding an already
    /// bound identifier replaces its action.
    pub fn bind(&mut self, control: impl Into<String>, action: Action) {
        self.entries.insert(control.into(), action);
    }

    /// Look up the action a control triggers.
    pub fn resolve(&self, control: &str) -> Option<&Action> {
        self.entries.get(control)
    }

    /// Drop every binding whose identifier starts with `prefix`.
    /// Rendering uses this to replace the like bindings wholesale.
    pub fn unbind_prefix(&mut self, prefix: &str) {
        self.entries.retain(|control, _| !control.starts_with(prefix));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
