//! Individual widget implementations

pub mod model_list;
