use crate::catalog::form::FieldId;
use crate::catalog::form::FieldIssue;
use crate::catalog::record::Product;
use crate::catalog::record::ProductFields;
use serde::Deserialize;
use serde::Serialize;

/// Explicit editor mode. The mode decides the read-only/editable partition
/// and which store request a submit produces; the title is display text
/// derived from it, never the other way around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EditorMode {
    Create,
    View,
    Update,
}

/// Transient state owned by the record editor while the modal is open.
/// Dropped whole on every close, so nothing leaks into the next session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorSession {
    mode: EditorMode,
    title: String,
    bound: Option<Product>,
    draft: ProductFields,
    focus: FieldId,
    issues: Vec<FieldIssue>,
}

impl EditorSession {
    pub fn create() -> Self {
        Self {
            mode: EditorMode::Create,
            title: "Add Product".to_string(),
            bound: None,
            draft: ProductFields::default(),
            focus: FieldId::Name,
            issues: Vec::new(),
        }
    }

    pub fn view(record: Product) -> Self {
        Self {
            mode: EditorMode::View,
            title: format!("View {}", record.name),
            draft: record.fields(),
            bound: Some(record),
            focus: FieldId::Name,
            issues: Vec::new(),
        }
    }

    pub fn update(record: Product) -> Self {
        Self {
            mode: EditorMode::Update,
            title: format!("Update {}", record.name),
            draft: record.fields(),
            bound: Some(record),
            focus: FieldId::Name,
            issues: Vec::new(),
        }
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn read_only(&self) -> bool {
        self.mode == EditorMode::View
    }

    pub fn bound(&self) -> Option<&Product> {
        self.bound.as_ref()
    }

    pub fn draft(&self) -> &ProductFields {
        &self.draft
    }

    pub fn focus(&self) -> FieldId {
        self.focus
    }

    pub fn issues(&self) -> &[FieldIssue] {
        &self.issues
    }

    pub fn issue_for(&self, field: FieldId) -> Option<&str> {
        self.issues
            .iter()
            .find(|issue| issue.field == field)
            .map(|issue| issue.message.as_str())
    }

    pub fn set_issues(&mut self, issues: Vec<FieldIssue>) {
        self.issues = issues;
    }

    pub fn focus_next_field(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev_field(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn value(&self, field: FieldId) -> &str {
        match field {
            FieldId::Name => &self.draft.name,
            FieldId::Category => &self.draft.category,
            FieldId::Price => &self.draft.price,
            FieldId::Quantity => &self.draft.quantity,
        }
    }

    /// Appends a character to the focused field. No-op in read-only mode.
    /// Editing a field retires its outstanding issue until the next submit.
    pub fn input_char(&mut self, ch: char) {
        if self.read_only() || ch.is_control() {
            return;
        }
        self.value_mut(self.focus).push(ch);
        self.clear_issue(self.focus);
    }

    pub fn backspace(&mut self) {
        if self.read_only() {
            return;
        }
        self.value_mut(self.focus).pop();
        self.clear_issue(self.focus);
    }

    fn value_mut(&mut self, field: FieldId) -> &mut String {
        match field {
            FieldId::Name => &mut self.draft.name,
            FieldId::Category => &mut self.draft.category,
            FieldId::Price => &mut self.draft.price,
            FieldId::Quantity => &mut self.draft.quantity,
        }
    }

    fn clear_issue(&mut self, field: FieldId) {
        self.issues.retain(|issue| issue.field != field);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::record::ProductId;

    fn record() -> Product {
        Product {
            id: ProductId(7),
            name: "Widget".to_string(),
            category: "Tools".to_string(),
            price: "10".to_string(),
            quantity: "5".to_string(),
        }
    }

    #[test]
    fn titles_follow_mode_and_record_name() {
        assert_eq!(EditorSession::create().title(), "Add Product");
        assert_eq!(EditorSession::view(record()).title(), "View Widget");
        assert_eq!(EditorSession::update(record()).title(), "Update Widget");
    }

    #[test]
    fn view_sessions_reject_edits() {
        let mut session = EditorSession::view(record());
        session.input_char('x');
        session.backspace();
        assert_eq!(session.value(FieldId::Name), "Widget");
    }

    #[test]
    fn bound_record_prepopulates_draft() {
        let session = EditorSession::update(record());
        assert_eq!(session.value(FieldId::Price), "10");
        assert_eq!(session.bound().map(|p| p.id), Some(ProductId(7)));
    }

    #[test]
    fn editing_a_field_clears_only_its_issue() {
        let mut session = EditorSession::create();
        session.set_issues(vec![
            FieldIssue {
                field: FieldId::Name,
                message: "Please enter product name.".to_string(),
            },
            FieldIssue {
                field: FieldId::Price,
                message: "Field accepts numbers only.".to_string(),
            },
        ]);
        session.input_char('W');
        assert!(session.issue_for(FieldId::Name).is_none());
        assert!(session.issue_for(FieldId::Price).is_some());
    }
}
