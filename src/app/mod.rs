//! Application state and logic

mod event;
mod state;

pub use event::{Event, Handler};
pub use state::{App, PAGE_TITLE, Route, ViewState};
