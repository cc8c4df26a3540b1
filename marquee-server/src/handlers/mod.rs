pub mod content;
pub mod search;

pub use content::{content_handler, not_found_handler, root_handler};
pub use search::{SearchParams, search_handler};
