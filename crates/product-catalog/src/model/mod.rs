//! Pure data structures held by the catalog store.

pub mod image;
pub mod product;

pub use image::*;
pub use product::*;
