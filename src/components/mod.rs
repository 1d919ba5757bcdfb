pub mod card;
mod header;
pub mod pages;

pub use header::Header;
pub use pages::{Feed, Profile};
