//! Data models for the ayah mapping core.

mod estimate;
mod juz;
mod surah;

pub use estimate::*;
pub use juz::*;
pub use surah::*;
