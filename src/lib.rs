pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod notify;
pub mod parser;
pub mod store;

pub use catalog::{CatalogEntry, MoveInfo, ReferenceCatalog};
pub use cli::{Cli, Commands};
pub use error::{CatalogLoadError, Field, RemoveError, ValidationError};
pub use filter::FilterCriteria;
pub use notify::{LogNotifier, Notify, SilentNotifier};
pub use store::{Candidate, CardImage, Draft, Rarity, Record, RecordStore};
