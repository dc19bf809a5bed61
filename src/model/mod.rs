//src/model/mod.rs
pub mod catalog;
pub mod element;
pub mod lookup;

// Re-exports for cleaner imports
pub use catalog::{CatalogError, ElementCatalog};
pub use element::{Category, Element};
pub use lookup::lookup;
