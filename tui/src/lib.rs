//! Terminal front-end for the Stockroom catalog screen.

mod app;
mod controller;
mod keymap;
mod tui;
mod view;

pub use app::App;
pub use controller::CatalogController;
pub use controller::ControllerOutcome;
pub use keymap::KeymapEngine;
pub use tui::Tui;
pub use view::CatalogView;
