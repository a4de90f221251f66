//! Key bindings for the card.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press asks the frame loop to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Leave the card.
    Quit,
}

/// Key binding configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBinding {
    /// Key code.
    pub code: KeyCode,
    /// Required modifiers.
    pub modifiers: KeyModifiers,
    /// Bound action.
    pub action: Action,
}

impl KeyBinding {
    /// Create a new key binding.
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: KeyModifiers, action: Action) -> Self {
        Self {
            code,
            modifiers,
            action,
        }
    }

    /// Create a simple key binding without modifiers.
    #[must_use]
    pub const fn simple(code: KeyCode, action: Action) -> Self {
        Self::new(code, KeyModifiers::NONE, action)
    }

    /// Check if this binding matches a key event.
    #[must_use]
    pub fn matches(&self, event: &KeyEvent) -> bool {
        event.code == self.code && event.modifiers.contains(self.modifiers)
    }
}

/// Maps terminal events to actions.
#[derive(Debug, Clone, Default)]
pub struct InputHandler {
    bindings: Vec<KeyBinding>,
}

impl InputHandler {
    /// Handler with no bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Quit on `key` and on Ctrl-C.
    #[must_use]
    pub fn with_quit_key(key: char) -> Self {
        let mut handler = Self::new();
        handler.add_binding(KeyBinding::simple(KeyCode::Char(key), Action::Quit));
        handler.add_binding(KeyBinding::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
            Action::Quit,
        ));
        handler
    }

    /// Add a key binding. Earlier bindings take precedence.
    pub fn add_binding(&mut self, binding: KeyBinding) {
        self.bindings.push(binding);
    }

    /// Current bindings in precedence order.
    #[must_use]
    pub fn bindings(&self) -> &[KeyBinding] {
        &self.bindings
    }

    /// Action bound to an event, if any. Key releases are ignored.
    #[must_use]
    pub fn action(&self, event: &Event) -> Option<Action> {
        let Event::Key(key) = event else {
            return None;
        };
        if key.kind == KeyEventKind::Release {
            return None;
        }
        self.bindings
            .iter()
            .find(|binding| binding.matches(key))
            .map(|binding| binding.action)
    }
}
