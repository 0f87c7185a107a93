//! Request handlers for the mapping API.

mod mapping;
mod surah;

pub use mapping::*;
pub use surah::*;
