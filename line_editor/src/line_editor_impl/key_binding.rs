// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::KeyEvent;
use crossterm::event::{KeyCode, KeyModifiers};
use strum_macros::{Display, EnumIter};

/// What a bound key does to the line.
///
/// Printable characters with no binding are not listed here, they get inserted at the
/// cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum EditAction {
    Escape,
    Home,
    End,
    MoveLeft,
    MoveRight,
    HistoryPrevious,
    HistoryNext,
    Backspace,
    Delete,
    Enter,
    Tab,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
    pub action: EditAction,
}

/// Ordered `(code, modifiers) -> action` table. Lookup is a linear scan, first exact
/// match wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindingTable {
    bindings: Vec<KeyBinding>,
}

impl Default for KeyBindingTable {
    fn default() -> Self { Self::new() }
}

impl KeyBindingTable {
    /// The standard bindings, all with no modifiers. With the `emacs` feature,
    /// <kbd>Ctrl+A</kbd> and <kbd>Ctrl+E</kbd> are added for [`EditAction::Home`] and
    /// [`EditAction::End`].
    #[must_use]
    pub fn new() -> Self {
        let table = Self::empty()
            .with_binding(KeyCode::Esc, KeyModifiers::NONE, EditAction::Escape)
            .with_binding(KeyCode::Home, KeyModifiers::NONE, EditAction::Home)
            .with_binding(KeyCode::End, KeyModifiers::NONE, EditAction::End)
            .with_binding(KeyCode::Left, KeyModifiers::NONE, EditAction::MoveLeft)
            .with_binding(KeyCode::Right, KeyModifiers::NONE, EditAction::MoveRight)
            .with_binding(KeyCode::Up, KeyModifiers::NONE, EditAction::HistoryPrevious)
            .with_binding(KeyCode::Down, KeyModifiers::NONE, EditAction::HistoryNext)
            .with_binding(KeyCode::Backspace, KeyModifiers::NONE, EditAction::Backspace)
            .with_binding(KeyCode::Delete, KeyModifiers::NONE, EditAction::Delete)
            .with_binding(KeyCode::Enter, KeyModifiers::NONE, EditAction::Enter)
            .with_binding(KeyCode::Tab, KeyModifiers::NONE, EditAction::Tab);

        #[cfg(feature = "emacs")]
        let table = table
            .with_binding(KeyCode::Char('a'), KeyModifiers::CONTROL, EditAction::Home)
            .with_binding(KeyCode::Char('e'), KeyModifiers::CONTROL, EditAction::End);

        table
    }

    /// No bindings at all, every key is either inserted or ignored.
    #[must_use]
    pub fn empty() -> Self { Self { bindings: vec![] } }

    /// Append a binding. It only wins if no earlier binding has the same code and
    /// modifiers.
    #[must_use]
    pub fn with_binding(
        mut self,
        code: KeyCode,
        modifiers: KeyModifiers,
        action: EditAction,
    ) -> Self {
        self.bindings.push(KeyBinding {
            code,
            modifiers,
            action,
        });
        self
    }

    #[must_use]
    pub fn find(&self, key_event: &KeyEvent) -> Option<EditAction> {
        self.bindings
            .iter()
            .find(|it| it.code == key_event.code && it.modifiers == key_event.modifiers)
            .map(|it| it.action)
    }

    pub fn iter(&self) -> impl Iterator<Item = &KeyBinding> { self.bindings.iter() }

    #[must_use]
    pub fn len(&self) -> usize { self.bindings.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.bindings.is_empty() }
}
