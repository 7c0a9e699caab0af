//! indra-tui - Terminal browser for the Indra agent-based modeling catalog
//!
//! Fetches the model catalog from an Indra API server, shows it as a
//! selectable list, and records the chosen model in a persistent handoff
//! store for the per-model detail view to pick up.

pub mod app;
pub mod catalog;
pub mod config;
pub mod handoff;
pub mod paths;
pub mod tui;
pub mod ui;

pub use app::{App, Route, ViewState};
pub use catalog::{Catalog, Loader, ModelDescriptor, ModelId};
pub use config::Config;
pub use handoff::HandoffStore;
