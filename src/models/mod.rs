pub use category::*;
pub use listing::*;
pub use session::*;

mod category;
mod listing;
mod session;
