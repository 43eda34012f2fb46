use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;
use std::collections::HashMap;
use stockroom_core::catalog::CatalogAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct KeyChord {
    code: KeyCode,
    modifiers: KeyModifiers,
}

impl KeyChord {
    fn new(mut code: KeyCode, modifiers: KeyModifiers) -> Self {
        if let KeyCode::Char(c) = code {
            code = KeyCode::Char(c.to_ascii_lowercase());
        }
        Self { code, modifiers }
    }
}

/// Chord table for the table context. Editor-context keys (text input,
/// focus, submit, cancel) are routed by the controller instead, since they
/// depend on the open session's mode.
#[derive(Debug, Default)]
pub struct KeymapEngine {
    table: HashMap<KeyChord, CatalogAction>,
}

impl KeymapEngine {
    pub fn new() -> Self {
        let mut engine = Self::default();
        engine.populate_table();
        engine
    }

    fn populate_table(&mut self) {
        use CatalogAction::*;
        self.table
            .insert(KeyChord::new(KeyCode::Down, KeyModifiers::NONE), SelectNextRow);
        self.table.insert(
            KeyChord::new(KeyCode::Char('j'), KeyModifiers::NONE),
            SelectNextRow,
        );
        self.table
            .insert(KeyChord::new(KeyCode::Up, KeyModifiers::NONE), SelectPrevRow);
        self.table.insert(
            KeyChord::new(KeyCode::Char('k'), KeyModifiers::NONE),
            SelectPrevRow,
        );
        self.table
            .insert(KeyChord::new(KeyCode::Char('a'), KeyModifiers::NONE), OpenCreate);
        self.table.insert(
            KeyChord::new(KeyCode::Char('e'), KeyModifiers::NONE),
            OpenUpdate { product_id: None },
        );
        self.table.insert(
            KeyChord::new(KeyCode::Char('v'), KeyModifiers::NONE),
            OpenView { product_id: None },
        );
        self.table.insert(
            KeyChord::new(KeyCode::Enter, KeyModifiers::NONE),
            OpenView { product_id: None },
        );
        self.table.insert(
            KeyChord::new(KeyCode::Char('d'), KeyModifiers::NONE),
            DeleteRecord { product_id: None },
        );
        self.table.insert(
            KeyChord::new(KeyCode::Char('r'), KeyModifiers::NONE),
            ReloadCatalog,
        );
    }

    pub fn resolve(&self, event: KeyEvent) -> Option<CatalogAction> {
        if !matches!(event.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
            return None;
        }
        let chord = KeyChord::new(event.code, event.modifiers);
        self.table.get(&chord).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn add_chord_maps_to_open_create() {
        let engine = KeymapEngine::new();
        let action = engine.resolve(press(KeyCode::Char('a'))).expect("mapped");
        assert!(matches!(action, CatalogAction::OpenCreate));
    }

    #[test]
    fn uppercase_chars_are_normalized() {
        let engine = KeymapEngine::new();
        let action = engine
            .resolve(KeyEvent::new(KeyCode::Char('V'), KeyModifiers::NONE))
            .expect("mapped");
        assert!(matches!(action, CatalogAction::OpenView { product_id: None }));
    }

    #[test]
    fn release_events_are_ignored() {
        let engine = KeymapEngine::new();
        let mut event = press(KeyCode::Char('a'));
        event.kind = KeyEventKind::Release;
        assert!(engine.resolve(event).is_none());
    }

    #[test]
    fn delete_maps_to_the_selected_row() {
        let engine = KeymapEngine::new();
        let action = engine.resolve(press(KeyCode::Char('d'))).expect("mapped");
        assert!(matches!(
            action,
            CatalogAction::DeleteRecord { product_id: None }
        ));
    }
}
