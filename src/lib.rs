//! mushaf-rs: Ayah-to-page and Juz mapping for Quran practice logs.
//!
//! Given a surah and an ayah range, this crate works out which Juz the
//! range touches and how many mushaf pages it spans. The core is a static
//! 114-surah reference table with pure lookups over it; an optional direct
//! ayah-to-page map gives exact page counts when available. A small HTTP
//! service exposes the same calculations to a session-entry form.
//!
//! # Example
//!
//! ```
//! use mushaf_rs::{JuzResolver, PageEstimator};
//!
//! let juz = JuzResolver::standard().juz_for(18, 75);
//! assert_eq!(juz.value, 16);
//!
//! let pages = PageEstimator::standard().estimate_pages_read(2, 1, 286);
//! assert_eq!(pages.value, 48);
//! ```

pub mod config;
pub mod context;
pub mod error;
pub mod handlers;
pub mod models;
pub mod pages;
pub mod resolver;
pub mod router;
pub mod server;
pub mod table;

// Re-exports for convenience
pub use config::{Args, Config, DEFAULT_PORT};
pub use error::{ErrorCode, MushafError, MushafResult};
pub use models::{Estimate, JuzBoundary, JuzRange, Provenance, SurahInfo};
pub use pages::{AyahPageMap, Enrichment, PageCalculator, PageEstimator, PageLookup};
pub use resolver::JuzResolver;
pub use server::{MushafServer, MushafServerBuilder};
pub use table::SurahTable;
