pub use access::*;
pub use pagination::*;
pub use query::*;
pub use slug::*;

mod access;
mod pagination;
mod query;
mod slug;
