//! Headless view state.
//!
//! These types hold what the screen shows and react to user input, without any
//! rendering. A front end (terminal, web, native) reads their output and forwards
//! input events to them.

pub mod form;
pub mod ids;
pub mod list;

pub use form::{FormField, ProductForm};
pub use ids::ProductIdGenerator;
pub use list::{ListRender, ProductList};
