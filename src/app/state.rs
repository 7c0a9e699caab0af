//! View state for the model-catalog home view.

use crate::catalog::{Catalog, CatalogError, ModelDescriptor};
use crate::config::Config;
use crate::handoff::{DOC_KEY, HandoffStore};
use std::fmt;
use tracing::warn;

/// Title applied to the terminal window while this view is active.
pub const PAGE_TITLE: &str = "Indra | Home";

/// What the view knows about the catalog fetch.
///
/// `Loading` is the initial state of every activation. A resolved fetch
/// moves to `Ready` or `Failed` and stays there until the next activation;
/// no other transitions exist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ViewState {
    /// The fetch is outstanding; nothing but a loading indicator renders.
    #[default]
    Loading,
    /// The catalog arrived; rows render in catalog order.
    Ready(Catalog),
    /// The fetch failed; the error was logged and no rows render.
    Failed,
}

/// Navigation target emitted when the user selects a model.
///
/// The detail route is keyed by the row's zero-based position in the
/// catalog as received, not by the model id; the id travels through the
/// handoff store instead. The two are left as independent sources of truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Per-model property page, by catalog position.
    ModelProps(usize),
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ModelProps(index) => write!(f, "/models/props/{index}"),
        }
    }
}

/// Main application state
#[derive(Debug)]
pub struct App {
    /// Application configuration
    pub config: Config,
    /// Fetch / render state machine
    pub view: ViewState,
    /// Cursor position in the catalog list
    pub selected: usize,
    /// The `doc` display preference, read from the handoff store once per
    /// activation
    pub doc_pref: Option<String>,
    /// Set when the event loop should exit
    pub should_quit: bool,
    handoff: HandoffStore,
    route: Option<Route>,
}

impl App {
    /// Create the application in its pre-activation state.
    #[must_use]
    pub const fn new(config: Config, handoff: HandoffStore) -> Self {
        Self {
            config,
            view: ViewState::Loading,
            selected: 0,
            doc_pref: None,
            should_quit: false,
            handoff,
            route: None,
        }
    }

    /// Begin a fresh activation: back to `Loading`, cursor reset, and the
    /// `doc` preference re-read from the handoff store.
    pub fn begin_activation(&mut self) {
        self.view = ViewState::Loading;
        self.selected = 0;
        self.route = None;
        self.doc_pref = self.handoff.get(DOC_KEY).map(str::to_string);
    }

    /// Install the outcome of this activation's fetch.
    ///
    /// Errors are diagnostics only; the user sees the `Failed` state with
    /// no structured error UI.
    pub fn resolve_fetch(&mut self, outcome: Result<Catalog, CatalogError>) {
        match outcome {
            Ok(catalog) => {
                self.view = ViewState::Ready(catalog);
            }
            Err(err) => {
                warn!("catalog load failed: {err}");
                self.view = ViewState::Failed;
            }
        }
    }

    /// The loaded catalog, if the view is `Ready`.
    #[must_use]
    pub const fn catalog(&self) -> Option<&Catalog> {
        match &self.view {
            ViewState::Ready(catalog) => Some(catalog),
            ViewState::Loading | ViewState::Failed => None,
        }
    }

    /// The descriptor under the cursor, if any.
    #[must_use]
    pub fn selected_model(&self) -> Option<&ModelDescriptor> {
        self.catalog().and_then(|catalog| catalog.get(self.selected))
    }

    /// Move the cursor down, wrapping at the end of the list.
    pub fn select_next(&mut self) {
        if let Some(count) = self.catalog().map(Catalog::len)
            && count > 0
        {
            self.selected = (self.selected + 1) % count;
        }
    }

    /// Move the cursor up, wrapping at the start of the list.
    pub fn select_prev(&mut self) {
        if let Some(count) = self.catalog().map(Catalog::len)
            && count > 0
        {
            self.selected = self.selected.checked_sub(1).unwrap_or(count - 1);
        }
    }

    /// Confirm the current selection: write the `(id, name, source)` triple
    /// to the handoff store, record the positional detail route, and quit.
    ///
    /// The write is last-write-wins with no rollback; if it fails the
    /// failure is logged and navigation proceeds anyway, matching the
    /// store's no-transaction contract.
    pub fn confirm_selection(&mut self) {
        let Some(model) = self.selected_model().cloned() else {
            return;
        };
        if let Err(err) = self.handoff.write_selection(&model) {
            warn!("failed to persist selection: {err:#}");
        }
        self.route = Some(Route::ModelProps(self.selected));
        self.should_quit = true;
    }

    /// The navigation outcome of this session, if the user selected a model.
    #[must_use]
    pub const fn route(&self) -> Option<Route> {
        self.route
    }

    /// Open the project description in the system browser.
    pub fn open_docs(&self) {
        if let Err(err) = open::that(&self.config.docs_url) {
            warn!("failed to open project description: {err}");
        }
    }

    /// Request exit without a selection.
    pub const fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Read access to the handoff store (for status output after exit).
    #[must_use]
    pub const fn handoff(&self) -> &HandoffStore {
        &self.handoff
    }
}
