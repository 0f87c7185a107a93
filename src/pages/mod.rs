//! Pages-read calculation.
//!
//! Two paths exist. A direct ayah-to-page map gives exact counts when one is
//! configured; the proportional estimator covers everything else.
//! [`PageCalculator`] tries them in that order.

mod estimator;
mod map;

pub use estimator::*;
pub use map::*;

use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::models::{Estimate, Provenance};
use crate::resolver::JuzResolver;
use crate::table::SurahTable;

/// Source of authoritative ayah-to-page data.
pub trait PageLookup: Send + Sync {
    /// Returns the mushaf page an ayah starts on.
    fn page_of(&self, surah: u16, ayah: u16) -> Option<u16>;

    /// Counts the pages from the start ayah's page to the end ayah's page.
    ///
    /// Returns a fallback of one page when either ayah is missing or the
    /// pages run backwards.
    fn calculate_pages_read(&self, surah: u16, ayah_start: u16, ayah_end: u16) -> Estimate<u32> {
        let (Some(start_page), Some(end_page)) =
            (self.page_of(surah, ayah_start), self.page_of(surah, ayah_end))
        else {
            warn!(
                "No page data for {}:{}..{}:{}, using fallback of {} page",
                surah, ayah_start, surah, ayah_end, MIN_PAGES
            );
            return Estimate::fallback(MIN_PAGES);
        };

        if end_page < start_page {
            warn!(
                "Page {} of {}:{} precedes page {} of {}:{}",
                end_page, surah, ayah_end, start_page, surah, ayah_start
            );
            return Estimate::fallback(MIN_PAGES);
        }

        Estimate::exact(u32::from(end_page - start_page) + 1)
    }
}

/// Derived fields for a practice-session form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Enrichment {
    pub surah: u16,
    pub surah_name: Option<&'static str>,
    pub ayah_start: u16,
    pub ayah_end: u16,
    /// Whether the range passed `validate_ayah_range`.
    pub valid: bool,
    pub juz_number: u8,
    pub juz_list: Vec<u8>,
    pub pages_read: u32,
    pub juz_provenance: Provenance,
    pub pages_provenance: Provenance,
}

/// Computes Juz and page fields, preferring direct page data.
#[derive(Clone)]
pub struct PageCalculator {
    table: &'static SurahTable,
    direct: Option<Arc<dyn PageLookup>>,
}

impl PageCalculator {
    /// Creates a calculator that only uses the proportional estimator.
    pub fn new(table: &'static SurahTable) -> Self {
        Self {
            table,
            direct: None,
        }
    }

    /// Creates a calculator over the built-in table.
    pub fn standard() -> Self {
        Self::new(SurahTable::standard())
    }

    /// Adds a direct ayah-to-page source, consulted before the estimator.
    pub fn with_page_lookup(mut self, lookup: Arc<dyn PageLookup>) -> Self {
        self.direct = Some(lookup);
        self
    }

    pub fn table(&self) -> &'static SurahTable {
        self.table
    }

    pub fn has_page_lookup(&self) -> bool {
        self.direct.is_some()
    }

    pub fn resolver(&self) -> JuzResolver<'static> {
        JuzResolver::new(self.table)
    }

    pub fn estimator(&self) -> PageEstimator<'static> {
        PageEstimator::new(self.table)
    }

    /// Returns the pages read for an ayah range.
    pub fn pages_read(&self, surah: u16, ayah_start: u16, ayah_end: u16) -> Estimate<u32> {
        if let Some(direct) = &self.direct {
            let pages = direct.calculate_pages_read(surah, ayah_start, ayah_end);
            if !pages.is_fallback() {
                return pages;
            }
            debug!(
                "Direct page data missed {}:{}-{}, estimating instead",
                surah, ayah_start, ayah_end
            );
        }
        self.estimator()
            .estimate_pages_read(surah, ayah_start, ayah_end)
    }

    /// Computes every derived field for a session range.
    pub fn enrich(&self, surah: u16, ayah_start: u16, ayah_end: u16) -> Enrichment {
        let juz = self.resolver().juz_range(surah, ayah_start, ayah_end);
        let pages = self.pages_read(surah, ayah_start, ayah_end);

        Enrichment {
            surah,
            surah_name: self.table.by_number(surah).map(|info| info.name),
            ayah_start,
            ayah_end,
            valid: self.table.validate_ayah_range(surah, ayah_start, ayah_end),
            juz_number: juz.value.start_juz,
            juz_list: juz.value.juz_list,
            pages_read: pages.value,
            juz_provenance: juz.provenance,
            pages_provenance: pages.provenance,
        }
    }
}

impl Default for PageCalculator {
    fn default() -> Self {
        Self::standard()
    }
}

impl std::fmt::Debug for PageCalculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageCalculator")
            .field("surahs", &self.table.len())
            .field("direct", &self.direct.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_map(json: &str) -> PageCalculator {
        let map = AyahPageMap::from_json_str(json, SurahTable::standard()).unwrap();
        PageCalculator::standard().with_page_lookup(Arc::new(map))
    }

    #[test]
    fn test_estimator_only() {
        let calculator = PageCalculator::standard();
        assert!(!calculator.has_page_lookup());
        assert_eq!(calculator.pages_read(2, 1, 286), Estimate::estimated(48));
    }

    #[test]
    fn test_direct_data_wins() {
        let calculator = with_map(
            r#"[{"surah": 1, "ayah": 1, "page": 1}, {"surah": 1, "ayah": 7, "page": 1}]"#,
        );
        assert_eq!(calculator.pages_read(1, 1, 7), Estimate::exact(1));
    }

    #[test]
    fn test_direct_miss_uses_estimator() {
        let calculator = with_map(r#"[{"surah": 1, "ayah": 1, "page": 1}]"#);
        assert_eq!(calculator.pages_read(2, 1, 286), Estimate::estimated(48));
    }

    #[test]
    fn test_enrich() {
        let enrichment = PageCalculator::standard().enrich(2, 250, 260);
        assert!(enrichment.valid);
        assert_eq!(enrichment.surah_name, Some("Al-Baqarah"));
        assert_eq!(enrichment.juz_number, 2);
        assert_eq!(enrichment.juz_list, vec![2, 3]);
        assert!(enrichment.pages_read >= 1);
        assert_eq!(enrichment.juz_provenance, Provenance::Exact);
        assert_eq!(enrichment.pages_provenance, Provenance::Estimated);
    }

    #[test]
    fn test_enrich_unknown_surah() {
        let enrichment = PageCalculator::standard().enrich(999, 1, 5);
        assert!(!enrichment.valid);
        assert_eq!(enrichment.surah_name, None);
        assert_eq!(enrichment.juz_number, 1);
        assert_eq!(enrichment.juz_list, vec![1]);
        assert_eq!(enrichment.pages_read, 1);
        assert_eq!(enrichment.juz_provenance, Provenance::Fallback);
        assert_eq!(enrichment.pages_provenance, Provenance::Fallback);
    }
}
