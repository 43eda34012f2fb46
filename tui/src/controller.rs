use crate::keymap::KeymapEngine;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;
use stockroom_core::catalog::ActionApplied;
use stockroom_core::catalog::CatalogAction;
use stockroom_core::catalog::CatalogKernel;
use stockroom_core::catalog::EditorSession;
use stockroom_core::catalog::GuardError;
use stockroom_core::catalog::Product;
use stockroom_core::catalog::Role;
use stockroom_core::catalog::ScreenSnapshot;
use stockroom_core::catalog::StoreRequest;

/// Owns the kernel and the keymap; turns raw key events into guarded
/// catalog actions or editor text edits.
#[derive(Debug)]
pub struct CatalogController {
    kernel: CatalogKernel,
    keymap: KeymapEngine,
}

#[derive(Debug, Clone)]
pub enum ControllerOutcome {
    Consumed {
        action: CatalogAction,
        applied: ActionApplied,
    },
    Rejected {
        action: CatalogAction,
        error: GuardError,
    },
    /// A text edit inside the open editor (typed char, backspace, focus
    /// move). No action was dispatched.
    Edited,
    Unhandled,
}

impl CatalogController {
    pub fn new(role: Role) -> Self {
        Self {
            kernel: CatalogKernel::new(role),
            keymap: KeymapEngine::new(),
        }
    }

    pub fn role(&self) -> Role {
        self.kernel.role()
    }

    pub fn request_initial_load(&mut self) {
        self.kernel.request_initial_load();
    }

    pub fn set_products(&mut self, products: Vec<Product>) {
        self.kernel.set_products(products);
    }

    pub fn push_status(&mut self, message: impl Into<String>) {
        self.kernel.push_status(message);
    }

    pub fn take_requests(&mut self) -> Vec<StoreRequest> {
        self.kernel.take_requests()
    }

    pub fn snapshot(&self) -> ScreenSnapshot {
        self.kernel.snapshot()
    }

    pub fn editor_open(&self) -> bool {
        self.kernel.editor().is_some()
    }

    pub fn handle_key_event(&mut self, event: KeyEvent) -> ControllerOutcome {
        if !matches!(event.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
            return ControllerOutcome::Unhandled;
        }
        if self.kernel.editor().is_some() {
            return self.handle_editor_key(event);
        }
        let Some(action) = self.keymap.resolve(event) else {
            return ControllerOutcome::Unhandled;
        };
        self.apply(action)
    }

    fn apply(&mut self, action: CatalogAction) -> ControllerOutcome {
        match self.kernel.handle_action(action.clone()) {
            Ok(applied) => ControllerOutcome::Consumed { action, applied },
            Err(error) => ControllerOutcome::Rejected { action, error },
        }
    }

    /// Keys while the modal is open. Text goes to the focused field; Enter
    /// submits an editable session and closes a display-only one (the
    /// dialog's own close gesture alongside Esc).
    fn handle_editor_key(&mut self, event: KeyEvent) -> ControllerOutcome {
        let read_only = self.kernel.editor().is_some_and(EditorSession::read_only);
        match event.code {
            KeyCode::Esc => self.apply(CatalogAction::CloseEditor),
            KeyCode::Enter if read_only => self.apply(CatalogAction::CloseEditor),
            KeyCode::Enter => self.apply(CatalogAction::SubmitRecord),
            KeyCode::Tab | KeyCode::Down => {
                self.kernel.focus_next_field();
                ControllerOutcome::Edited
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.kernel.focus_prev_field();
                ControllerOutcome::Edited
            }
            KeyCode::Backspace => {
                self.kernel.backspace();
                ControllerOutcome::Edited
            }
            KeyCode::Char(c)
                if !event
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.kernel.input_char(c);
                ControllerOutcome::Edited
            }
            _ => ControllerOutcome::Unhandled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;
    use stockroom_core::catalog::ProductFields;
    use stockroom_core::catalog::ProductId;

    fn send(ctrl: &mut CatalogController, code: KeyCode) -> ControllerOutcome {
        ctrl.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_str(ctrl: &mut CatalogController, text: &str) {
        for ch in text.chars() {
            send(ctrl, KeyCode::Char(ch));
        }
    }

    fn widget() -> Product {
        Product {
            id: ProductId(7),
            name: "Widget".to_string(),
            category: "Tools".to_string(),
            price: "10".to_string(),
            quantity: "5".to_string(),
        }
    }

    #[test]
    fn add_then_typed_fields_then_enter_queues_a_create() {
        let mut ctrl = CatalogController::new(Role::Editor);
        send(&mut ctrl, KeyCode::Char('a'));
        assert!(ctrl.editor_open());

        type_str(&mut ctrl, "Widget");
        send(&mut ctrl, KeyCode::Tab);
        type_str(&mut ctrl, "Tools");
        send(&mut ctrl, KeyCode::Tab);
        type_str(&mut ctrl, "10");
        send(&mut ctrl, KeyCode::Tab);
        type_str(&mut ctrl, "5");

        let outcome = send(&mut ctrl, KeyCode::Enter);
        assert_matches!(outcome, ControllerOutcome::Consumed { .. });
        assert!(!ctrl.editor_open());
        assert_eq!(
            ctrl.take_requests(),
            vec![StoreRequest::Create {
                fields: ProductFields {
                    name: "Widget".to_string(),
                    category: "Tools".to_string(),
                    price: "10".to_string(),
                    quantity: "5".to_string(),
                },
            }]
        );
    }

    #[test]
    fn enter_closes_a_view_session_instead_of_submitting() {
        let mut ctrl = CatalogController::new(Role::Viewer);
        ctrl.set_products(vec![widget()]);
        send(&mut ctrl, KeyCode::Char('v'));
        assert!(ctrl.editor_open());

        let outcome = send(&mut ctrl, KeyCode::Enter);
        assert_matches!(
            outcome,
            ControllerOutcome::Consumed {
                action: CatalogAction::CloseEditor,
                ..
            }
        );
        assert!(!ctrl.editor_open());
        assert!(ctrl.take_requests().is_empty());
    }

    #[test]
    fn viewer_add_is_rejected_by_the_guard() {
        let mut ctrl = CatalogController::new(Role::Viewer);
        ctrl.set_products(vec![widget()]);
        let outcome = send(&mut ctrl, KeyCode::Char('a'));
        assert_matches!(
            outcome,
            ControllerOutcome::Rejected {
                error: GuardError::RoleDenied { .. },
                ..
            }
        );
    }

    #[test]
    fn escape_cancels_and_discards_partial_edits() {
        let mut ctrl = CatalogController::new(Role::Admin);
        send(&mut ctrl, KeyCode::Char('a'));
        type_str(&mut ctrl, "half");
        send(&mut ctrl, KeyCode::Esc);
        assert!(!ctrl.editor_open());

        send(&mut ctrl, KeyCode::Char('a'));
        let editor = ctrl.snapshot().editor.expect("editor snapshot");
        assert!(editor.fields.iter().all(|f| f.value.is_empty()));
    }

    #[test]
    fn table_keys_are_inert_while_the_editor_is_open() {
        let mut ctrl = CatalogController::new(Role::Admin);
        ctrl.set_products(vec![widget()]);
        send(&mut ctrl, KeyCode::Char('a'));

        // 'd' must type into the name field, not delete the selected row.
        let outcome = send(&mut ctrl, KeyCode::Char('d'));
        assert_matches!(outcome, ControllerOutcome::Edited);
        assert!(ctrl.take_requests().is_empty());
        let editor = ctrl.snapshot().editor.expect("editor snapshot");
        assert_eq!(editor.fields[0].value, "d");
    }
}
