pub mod draft;
pub mod image;
pub mod rarity;
pub mod record;
pub mod records;

pub use draft::*;
pub use image::*;
pub use rarity::*;
pub use record::*;
pub use records::*;
