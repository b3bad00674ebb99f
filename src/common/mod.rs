pub use errors::*;
pub use validate::*;

mod errors;
mod validate;
