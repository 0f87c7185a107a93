//! Proportional page estimation over Juz boundaries.

use tracing::{debug, warn};

use crate::models::{juz_page_count, Estimate, JuzRange, SurahInfo, AVERAGE_AYAHS_PER_PAGE};
use crate::table::SurahTable;

/// Page count reported for any range that cannot be estimated.
pub const MIN_PAGES: u32 = 1;

/// Absorbs float noise so that whole-page sums do not round up a page.
const PAGE_EPSILON: f64 = 1e-9;

/// Estimates pages read from the reference table alone.
#[derive(Debug, Clone, Copy)]
pub struct PageEstimator<'t> {
    table: &'t SurahTable,
}

impl PageEstimator<'static> {
    /// Creates an estimator over the built-in table.
    pub fn standard() -> Self {
        Self::new(SurahTable::standard())
    }
}

impl<'t> PageEstimator<'t> {
    pub fn new(table: &'t SurahTable) -> Self {
        Self { table }
    }

    /// Estimates how many mushaf pages an ayah range spans.
    ///
    /// Out-of-range ends are clamped into the surah and the result is marked
    /// as a fallback. Unknown surahs and empty ranges yield [`MIN_PAGES`].
    pub fn estimate_pages_read(&self, surah: u16, ayah_start: u16, ayah_end: u16) -> Estimate<u32> {
        let Some(info) = self.table.by_number(surah) else {
            warn!("Unknown surah {}, defaulting to {} page", surah, MIN_PAGES);
            return Estimate::fallback(MIN_PAGES);
        };

        let start = ayah_start.max(1);
        let end = ayah_end.min(info.total_ayahs);
        if start > end {
            debug!(
                "Empty ayah range {}..={} in surah {}, defaulting to {} page",
                ayah_start, ayah_end, surah, MIN_PAGES
            );
            return Estimate::fallback(MIN_PAGES);
        }

        let pages = estimate_in_surah(info, start, end);
        if start != ayah_start || end != ayah_end {
            Estimate::fallback(pages)
        } else {
            Estimate::estimated(pages)
        }
    }
}

impl Default for PageEstimator<'static> {
    fn default() -> Self {
        Self::standard()
    }
}

/// Estimates pages for a range already known to lie inside the surah.
fn estimate_in_surah(info: &SurahInfo, start: u16, end: u16) -> u32 {
    if info.has_boundaries() {
        let total: f64 = info
            .juz_boundaries
            .iter()
            .filter_map(|boundary| {
                let lo = start.max(boundary.start_ayah);
                let hi = end.min(boundary.effective_end(info.total_ayahs));
                if lo > hi {
                    return None;
                }

                let overlap = f64::from(hi - lo + 1);
                let span = f64::from(boundary.ayah_count(info.total_ayahs));
                let pages = match boundary.page_count() {
                    Some(pages) => u32::from(pages),
                    None => juz_page_count(boundary.juz_number),
                };
                Some(overlap / span * f64::from(pages))
            })
            .sum();

        debug!(
            "Surah {} ayahs {}..={}: {:.2} pages from boundaries",
            info.number, start, end, total
        );
        return ceil_pages(total);
    }

    // Without boundaries an ayah cannot be placed more precisely than the
    // surah's own Juz span.
    let range = JuzRange::new(info.juz_start, info.last_juz());
    if range.start_juz == range.end_juz {
        let ayahs = u32::from(end - start + 1);
        ayahs
            .div_ceil(AVERAGE_AYAHS_PER_PAGE)
            .min(juz_page_count(range.start_juz))
            .max(MIN_PAGES)
    } else {
        range.full_page_count()
    }
}

fn ceil_pages(total: f64) -> u32 {
    let pages = (total - PAGE_EPSILON).ceil();
    if pages < f64::from(MIN_PAGES) {
        MIN_PAGES
    } else {
        pages as u32
    }
}
