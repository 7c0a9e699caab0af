//! Reusable widgets

pub mod components;

pub use components::model_list::Widget as ModelListWidget;
