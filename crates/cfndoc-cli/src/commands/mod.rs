//! Command implementations for the cfndoc CLI.

mod find;
mod list;
mod reload;

pub use find::execute as find;
pub use list::execute as list;
pub use reload::execute as reload;
