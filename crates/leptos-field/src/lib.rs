//! Leptos Field Utilities
//!
//! Controlled input bindings for Leptos forms.
//! A binding pairs the current value with its change and reset actions, and
//! hands them out as two separate shapes so a reset can never end up wired
//! to an `<input>` element.

use leptos::prelude::*;

/// Input category rendered into the `type` attribute
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputKind {
    #[default]
    Text,
}

impl InputKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputKind::Text => "text",
        }
    }
}

/// State of one controlled input
///
/// The label is bookkeeping for the caller (used as the input `name`);
/// it is not required to be unique.
#[derive(Clone, Copy)]
pub struct FieldBinding {
    kind: InputKind,
    label: &'static str,
    value: RwSignal<String>,
}

impl FieldBinding {
    pub fn new(kind: InputKind, label: &'static str) -> Self {
        Self {
            kind,
            label,
            value: RwSignal::new(String::new()),
        }
    }

    pub fn kind(&self) -> InputKind {
        self.kind
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn value_untracked(&self) -> String {
        self.value.get_untracked()
    }

    /// Replace the value verbatim
    pub fn on_change(&self, raw: impl Into<String>) {
        self.value.set(raw.into());
    }

    /// Return the value to its initial empty state
    pub fn reset(&self) {
        self.value.set(String::new());
    }

    /// Everything needed to drive an `<input>`, without the reset action
    pub fn input(&self) -> InputBinding {
        InputBinding {
            kind: self.kind,
            label: self.label,
            value: self.value,
        }
    }

    /// The reset action on its own
    pub fn reset_action(&self) -> ResetAction {
        ResetAction { value: self.value }
    }
}

/// Create a field binding
pub fn use_field(kind: InputKind, label: &'static str) -> FieldBinding {
    FieldBinding::new(kind, label)
}

/// Input-safe view of a [`FieldBinding`]
#[derive(Clone, Copy)]
pub struct InputBinding {
    kind: InputKind,
    label: &'static str,
    value: RwSignal<String>,
}

impl InputBinding {
    pub fn kind(&self) -> InputKind {
        self.kind
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn value(&self) -> String {
        self.value.get()
    }

    pub fn on_change(&self, raw: impl Into<String>) {
        self.value.set(raw.into());
    }
}

/// Reset half of a [`FieldBinding`]
#[derive(Clone, Copy)]
pub struct ResetAction {
    value: RwSignal<String>,
}

impl ResetAction {
    pub fn run(&self) {
        self.value.set(String::new());
    }
}

/// Controlled `<input>` driven by an [`InputBinding`]
#[component]
pub fn FieldInput(binding: InputBinding) -> impl IntoView {
    view! {
        <input
            type=binding.kind().as_str()
            name=binding.label()
            prop:value=move || binding.value()
            on:input=move |ev| binding.on_change(event_target_value(&ev))
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_field_is_empty() {
        let field = use_field(InputKind::Text, "content");
        assert_eq!(field.value_untracked(), "");
        assert_eq!(field.kind(), InputKind::Text);
        assert_eq!(field.label(), "content");
    }

    #[test]
    fn test_on_change_is_verbatim() {
        let field = use_field(InputKind::Text, "content");
        field.on_change("  spaced  ");
        assert_eq!(field.value_untracked(), "  spaced  ");
        field.on_change("");
        assert_eq!(field.value_untracked(), "");
    }

    #[test]
    fn test_reset_after_many_changes() {
        let field = use_field(InputKind::Text, "info");
        for text in ["h", "ht", "http", "http://x"] {
            field.on_change(text);
        }
        field.reset();
        assert_eq!(field.value_untracked(), "");

        // Behaves like a fresh binding afterwards
        field.on_change("again");
        assert_eq!(field.value_untracked(), "again");
    }

    #[test]
    fn test_input_and_reset_share_state() {
        let field = use_field(InputKind::Text, "author");
        let input = field.input();
        let reset = field.reset_action();

        input.on_change("Knuth");
        assert_eq!(field.value_untracked(), "Knuth");
        assert_eq!(input.kind().as_str(), "text");

        reset.run();
        assert_eq!(field.value_untracked(), "");
    }

    #[test]
    fn test_reset_actions_are_independent() {
        let a = use_field(InputKind::Text, "a");
        let b = use_field(InputKind::Text, "b");
        a.on_change("1");
        b.on_change("2");
        a.reset_action().run();
        assert_eq!(a.value_untracked(), "");
        assert_eq!(b.value_untracked(), "2");
    }
}
