#[macro_use]
mod macros;
pub mod record;
pub mod resolver;
