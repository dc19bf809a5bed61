pub mod details;
pub mod interactions;
pub mod search;
pub mod table;
pub mod theme;

// Re-exports
pub use details::DetailsPanel;
pub use interactions::{dispatch, AppEvent};
pub use search::SearchBar;
