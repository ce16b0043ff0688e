pub mod paginator;
pub mod source;

pub use paginator::{DEFAULT_ITEMS_PER_PAGE, Paginator};
pub use source::{PageSource, QueryResult};
