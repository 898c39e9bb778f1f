pub mod reference;
pub mod types;

pub use reference::*;
pub use types::*;
