//! Platform-agnostic kernel for the Stockroom product admin console.
//!
//! The crate owns the catalog screen state machine and the contract to the
//! external product store. Front-ends (the TUI, automated tests) drive the
//! kernel with [`catalog::CatalogAction`] values and render the resulting
//! [`catalog::ScreenSnapshot`].

pub mod catalog;
pub mod store;
