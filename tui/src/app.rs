use crate::controller::CatalogController;
use crate::controller::ControllerOutcome;
use crate::tui::Tui;
use crate::view::CatalogView;
use color_eyre::eyre::Result;
use crossterm::event::Event;
use crossterm::event::EventStream;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;
use std::sync::Arc;
use stockroom_core::catalog::Role;
use stockroom_core::catalog::StoreRequest;
use stockroom_core::store::BridgeReport;
use stockroom_core::store::CatalogStore;
use stockroom_core::store::DispatchBridge;
use tokio::select;
use tokio::sync::mpsc::unbounded_channel;

pub struct App {
    controller: CatalogController,
    bridge: DispatchBridge,
}

impl App {
    /// Runs the catalog screen until the user quits. The store and the role
    /// are injected here; nothing below this reaches for ambient state.
    pub async fn run(tui: &mut Tui, store: Arc<dyn CatalogStore>, role: Role) -> Result<()> {
        use tokio_stream::StreamExt;
        let (report_tx, mut report_rx) = unbounded_channel();
        let bridge = DispatchBridge::new(store.clone(), report_tx);
        let mut collection_version = store.subscribe();

        let mut app = Self {
            controller: CatalogController::new(role),
            bridge,
        };
        app.controller.request_initial_load();
        app.flush_requests();
        app.draw(tui)?;

        let terminal_events = EventStream::new();
        tokio::pin!(terminal_events);

        loop {
            select! {
                Some(Ok(event)) = terminal_events.next() => {
                    if app.handle_terminal_event(event) {
                        break;
                    }
                }
                Some(report) = report_rx.recv() => {
                    app.handle_report(report);
                }
                changed = collection_version.changed() => {
                    // The store published a new collection version; fetch
                    // the authoritative copy.
                    if changed.is_ok() {
                        app.bridge.dispatch(StoreRequest::LoadCatalog);
                    }
                }
            }
            app.flush_requests();
            app.draw(tui)?;
        }
        Ok(())
    }

    fn flush_requests(&mut self) {
        self.bridge.dispatch_all(self.controller.take_requests());
    }

    fn draw(&self, tui: &mut Tui) -> Result<()> {
        let snapshot = self.controller.snapshot();
        tui.terminal
            .draw(|frame| frame.render_widget(CatalogView::new(&snapshot), frame.area()))?;
        Ok(())
    }

    fn handle_report(&mut self, report: BridgeReport) {
        match report {
            BridgeReport::CatalogLoaded(products) => {
                self.controller.set_products(products);
            }
            BridgeReport::OperationFailed(message) => {
                self.controller.push_status(message);
            }
        }
    }

    /// Returns `true` when the app should exit.
    fn handle_terminal_event(&mut self, event: Event) -> bool {
        match event {
            Event::Key(key) => self.handle_key_event(key),
            // Resize falls through to the redraw after the select arm.
            _ => false,
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && key.code == KeyCode::Char('c')
            && matches!(key.kind, KeyEventKind::Press)
        {
            return true;
        }
        match self.controller.handle_key_event(key) {
            ControllerOutcome::Rejected { action, error } => {
                tracing::debug!(action = %action.id(), error = %error, "action rejected");
                self.controller.push_status(error.to_string());
                false
            }
            ControllerOutcome::Unhandled => {
                matches!(key.code, KeyCode::Char('q')) && matches!(key.kind, KeyEventKind::Press)
            }
            ControllerOutcome::Consumed { .. } | ControllerOutcome::Edited => false,
        }
    }
}
