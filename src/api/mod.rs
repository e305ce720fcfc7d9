pub mod client;
pub mod types;

pub use client::{FetchError, ImageSource, NasaImageClient};
pub use types::{ImageLink, ImageRecord};
