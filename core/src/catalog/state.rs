//! Catalog screen state machine.
//!
//! Owns the collection snapshot, the table selection, and the editor
//! session. Applies guarded [`CatalogAction`]s and accumulates
//! [`StoreRequest`]s for the dispatch bridge; it never talks to the store
//! itself and never awaits anything.

use crate::catalog::action::CatalogAction;
use crate::catalog::event::StoreRequest;
use crate::catalog::form::FIELD_ORDER;
use crate::catalog::form::validate_fields;
use crate::catalog::guard::ActionGuard;
use crate::catalog::guard::GuardContext;
use crate::catalog::guard::GuardError;
use crate::catalog::policy::RoleCapabilities;
use crate::catalog::policy::capabilities;
use crate::catalog::record::Product;
use crate::catalog::record::ProductId;
use crate::catalog::role::Role;
use crate::catalog::session::EditorMode;
use crate::catalog::session::EditorSession;
use crate::catalog::snapshot::EditorSnapshot;
use crate::catalog::snapshot::FieldSnapshot;
use crate::catalog::snapshot::RowAction;
use crate::catalog::snapshot::RowSnapshot;
use crate::catalog::snapshot::ScreenSnapshot;

const STATUS_CAPACITY: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionApplied {
    NoChange,
    StateChanged,
}

#[derive(Debug, Clone)]
pub struct CatalogKernel {
    role: Role,
    capabilities: RoleCapabilities,
    products: Vec<Product>,
    selected: usize,
    editor: Option<EditorSession>,
    guard: ActionGuard,
    status_messages: Vec<String>,
    requests: Vec<StoreRequest>,
    load_requested: bool,
    loaded: bool,
}

impl CatalogKernel {
    /// The role is injected once at construction and is read-only from then
    /// on; there is no ambient state to consult.
    pub fn new(role: Role) -> Self {
        Self {
            role,
            capabilities: capabilities(role),
            products: Vec::new(),
            selected: 0,
            editor: None,
            guard: ActionGuard,
            status_messages: Vec::new(),
            requests: Vec::new(),
            load_requested: false,
            loaded: false,
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn capabilities(&self) -> RoleCapabilities {
        self.capabilities
    }

    pub fn editor(&self) -> Option<&EditorSession> {
        self.editor.as_ref()
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn selected_product(&self) -> Option<&Product> {
        self.products.get(self.selected)
    }

    /// Queues the first-display collection fetch. Subsequent calls are
    /// no-ops; refreshes after that come through the store subscription or
    /// an explicit reload action.
    pub fn request_initial_load(&mut self) {
        if self.load_requested {
            return;
        }
        self.load_requested = true;
        self.requests.push(StoreRequest::LoadCatalog);
    }

    /// Replaces the collection with the store's authoritative copy. The
    /// selection sticks to the same record id when it survived the update.
    pub fn set_products(&mut self, products: Vec<Product>) {
        let previous = self.selected_product().map(|p| p.id);
        self.products = products;
        self.loaded = true;
        self.selected = previous
            .and_then(|id| self.products.iter().position(|p| p.id == id))
            .unwrap_or(0);
        if self.selected >= self.products.len() {
            self.selected = self.products.len().saturating_sub(1);
        }
    }

    pub fn push_status(&mut self, message: impl Into<String>) {
        let msg = message.into();
        if msg.is_empty() {
            return;
        }
        self.status_messages.push(msg);
        if self.status_messages.len() > STATUS_CAPACITY {
            let excess = self.status_messages.len() - STATUS_CAPACITY;
            self.status_messages.drain(0..excess);
        }
    }

    pub fn clear_status_messages(&mut self) {
        self.status_messages.clear();
    }

    pub fn take_requests(&mut self) -> Vec<StoreRequest> {
        std::mem::take(&mut self.requests)
    }

    /// Routes a typed character to the focused editor field. Ignored while
    /// no editor is open; the session itself rejects edits in View mode.
    pub fn input_char(&mut self, ch: char) {
        if let Some(session) = &mut self.editor {
            session.input_char(ch);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(session) = &mut self.editor {
            session.backspace();
        }
    }

    pub fn focus_next_field(&mut self) {
        if let Some(session) = &mut self.editor {
            session.focus_next_field();
        }
    }

    pub fn focus_prev_field(&mut self) {
        if let Some(session) = &mut self.editor {
            session.focus_prev_field();
        }
    }

    fn guard_context(&self, action: &CatalogAction) -> GuardContext {
        let has_target_row = match action {
            CatalogAction::OpenView { product_id }
            | CatalogAction::OpenUpdate { product_id }
            | CatalogAction::DeleteRecord { product_id } => match product_id {
                Some(id) => self.products.iter().any(|p| p.id == *id),
                None => self.selected_product().is_some(),
            },
            _ => self.selected_product().is_some(),
        };
        GuardContext {
            role: self.role,
            editor_open: self.editor.is_some(),
            editor_read_only: self.editor.as_ref().is_some_and(EditorSession::read_only),
            has_target_row,
        }
    }

    fn resolve_target(&self, product_id: Option<ProductId>) -> Option<Product> {
        match product_id {
            Some(id) => self.products.iter().find(|p| p.id == id).cloned(),
            None => self.selected_product().cloned(),
        }
    }

    fn advance_selection(&mut self, forward: bool) -> ActionApplied {
        if self.products.is_empty() {
            return ActionApplied::NoChange;
        }
        let last = self.products.len() - 1;
        let next = if forward {
            (self.selected + 1).min(last)
        } else {
            self.selected.saturating_sub(1)
        };
        if next == self.selected {
            return ActionApplied::NoChange;
        }
        self.selected = next;
        ActionApplied::StateChanged
    }

    fn reload(&mut self) -> ActionApplied {
        self.requests.push(StoreRequest::LoadCatalog);
        self.push_status("Catalog reload requested");
        ActionApplied::StateChanged
    }

    fn open_create(&mut self) -> ActionApplied {
        self.editor = Some(EditorSession::create());
        ActionApplied::StateChanged
    }

    fn open_view(&mut self, product_id: Option<ProductId>) -> ActionApplied {
        match self.resolve_target(product_id) {
            Some(record) => {
                self.editor = Some(EditorSession::view(record));
                ActionApplied::StateChanged
            }
            None => ActionApplied::NoChange,
        }
    }

    fn open_update(&mut self, product_id: Option<ProductId>) -> ActionApplied {
        match self.resolve_target(product_id) {
            Some(record) => {
                self.editor = Some(EditorSession::update(record));
                ActionApplied::StateChanged
            }
            None => ActionApplied::NoChange,
        }
    }

    /// Delete never opens the editor; it queues the request and leaves the
    /// table in place until the store publishes the updated collection.
    fn delete_record(&mut self, product_id: Option<ProductId>) -> ActionApplied {
        let Some(record) = self.resolve_target(product_id) else {
            return ActionApplied::NoChange;
        };
        self.push_status(format!("Delete requested for {}", record.name));
        self.requests.push(StoreRequest::Delete {
            id: record.id,
            name: record.name,
        });
        ActionApplied::StateChanged
    }

    /// Validated submit. A failing draft keeps the modal open with inline
    /// issues and queues nothing; a passing one queues exactly one create or
    /// update (decided by the bound record) and closes the editor.
    fn submit_record(&mut self) -> ActionApplied {
        let Some(session) = &mut self.editor else {
            return ActionApplied::NoChange;
        };
        let issues = validate_fields(session.draft());
        if !issues.is_empty() {
            session.set_issues(issues);
            return ActionApplied::StateChanged;
        }
        let fields = session.draft().clone();
        let request = match session.bound() {
            Some(record) => StoreRequest::Update {
                id: record.id,
                fields,
            },
            None => StoreRequest::Create { fields },
        };
        let status = match &request {
            StoreRequest::Update { .. } => "Update submitted",
            _ => "Product submitted",
        };
        self.requests.push(request);
        self.editor = None;
        self.push_status(status);
        ActionApplied::StateChanged
    }

    fn close_editor(&mut self) -> ActionApplied {
        // Dropping the session discards drafts, issues, title and binding in
        // one move, whether this was a cancel or the dialog's own close.
        self.editor = None;
        ActionApplied::StateChanged
    }

    pub fn handle_action(&mut self, action: CatalogAction) -> Result<ActionApplied, GuardError> {
        let ctx = self.guard_context(&action);
        self.guard.validate(&action, ctx)?;
        let applied = match action {
            CatalogAction::SelectNextRow => self.advance_selection(true),
            CatalogAction::SelectPrevRow => self.advance_selection(false),
            CatalogAction::ReloadCatalog => self.reload(),
            CatalogAction::OpenCreate => self.open_create(),
            CatalogAction::OpenView { product_id } => self.open_view(product_id),
            CatalogAction::OpenUpdate { product_id } => self.open_update(product_id),
            CatalogAction::DeleteRecord { product_id } => self.delete_record(product_id),
            CatalogAction::SubmitRecord => self.submit_record(),
            CatalogAction::CloseEditor => self.close_editor(),
        };
        Ok(applied)
    }

    fn row_actions(&self) -> Vec<RowAction> {
        let mut actions = Vec::new();
        if self.capabilities.can_edit {
            actions.push(RowAction::Edit);
        }
        actions.push(RowAction::View);
        if self.capabilities.can_delete {
            actions.push(RowAction::Delete);
        }
        actions
    }

    fn editor_snapshot(&self) -> Option<EditorSnapshot> {
        let session = self.editor.as_ref()?;
        let read_only = session.read_only();
        let fields = FIELD_ORDER
            .iter()
            .map(|field| FieldSnapshot {
                field: *field,
                label: field.label(),
                placeholder: field.placeholder(),
                value: session.value(*field).to_string(),
                read_only,
                focused: !read_only && session.focus() == *field,
                issue: session.issue_for(*field).map(str::to_string),
            })
            .collect();
        Some(EditorSnapshot {
            mode: session.mode(),
            title: session.title().to_string(),
            read_only,
            fields,
            show_footer: !read_only,
            submit_label: if session.mode() == EditorMode::Create {
                "Add Product"
            } else {
                "Update Product"
            },
        })
    }

    pub fn snapshot(&self) -> ScreenSnapshot {
        let actions = self.row_actions();
        let rows = self
            .products
            .iter()
            .map(|product| RowSnapshot {
                id: product.id,
                name: product.name.clone(),
                category: product.category.clone(),
                price: product.price.clone(),
                quantity: product.quantity.clone(),
                actions: actions.clone(),
            })
            .collect();
        ScreenSnapshot {
            role: self.role,
            capabilities: self.capabilities,
            rows,
            selected_row: if self.products.is_empty() {
                None
            } else {
                Some(self.selected)
            },
            editor: self.editor_snapshot(),
            status_messages: self.status_messages.clone(),
            loaded: self.loaded,
        }
    }
}
