//! Product catalog domain

mod builtin;
mod entity;

pub use builtin::biofina_catalog;
pub use entity::{Catalog, ProductRecord};
