//! Juz resolution for ayahs and ayah ranges.
//!
//! Lookups never fail: an unknown surah resolves to Juz 1 and out-of-range
//! ayahs resolve to the nearest Juz of their surah. Both cases are flagged as
//! fallbacks.

use tracing::{debug, warn};

use crate::models::{Estimate, JuzRange, Provenance, SurahInfo};
use crate::table::SurahTable;

/// Juz returned when the surah itself is unknown.
pub const DEFAULT_JUZ: u8 = 1;

/// Maps (surah, ayah) positions to Juz numbers.
#[derive(Debug, Clone, Copy)]
pub struct JuzResolver<'t> {
    table: &'t SurahTable,
}

impl JuzResolver<'static> {
    /// Creates a resolver over the built-in table.
    pub fn standard() -> Self {
        Self::new(SurahTable::standard())
    }
}

impl<'t> JuzResolver<'t> {
    pub fn new(table: &'t SurahTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'t SurahTable {
        self.table
    }

    /// Returns the Juz containing the given ayah.
    pub fn juz_for(&self, surah: u16, ayah: u16) -> Estimate<u8> {
        let Some(info) = self.table.by_number(surah) else {
            warn!("Unknown surah {}, defaulting to juz {}", surah, DEFAULT_JUZ);
            return Estimate::fallback(DEFAULT_JUZ);
        };

        let juz = juz_in_surah(info, ayah);
        if info.contains_ayah(ayah) {
            Estimate::exact(juz)
        } else {
            debug!(
                "Ayah {} outside surah {} (1..={}), best-effort juz {}",
                ayah, surah, info.total_ayahs, juz
            );
            Estimate::fallback(juz)
        }
    }

    /// Returns every Juz touched by the ayah range.
    ///
    /// The ends are ordered if given backwards, so `start_juz <= end_juz`
    /// always holds.
    pub fn juz_range(&self, surah: u16, ayah_start: u16, ayah_end: u16) -> Estimate<JuzRange> {
        let start = self.juz_for(surah, ayah_start);
        let end = self.juz_for(surah, ayah_end);
        let mut provenance = start.provenance.weakest(end.provenance);
        if ayah_start > ayah_end {
            provenance = provenance.weakest(Provenance::Fallback);
        }

        Estimate {
            value: JuzRange::new(start.value, end.value),
            provenance,
        }
    }
}

impl Default for JuzResolver<'static> {
    fn default() -> Self {
        Self::standard()
    }
}

/// Finds the Juz of an ayah inside a known surah.
fn juz_in_surah(info: &SurahInfo, ayah: u16) -> u8 {
    if !info.has_boundaries() {
        return info.juz_start;
    }

    if let Some(boundary) = info.juz_boundaries.iter().find(|b| b.contains(ayah)) {
        return boundary.juz_number;
    }

    // Only ayah 0 escapes every boundary, since the last one is open-ended or
    // ends at the final ayah.
    if ayah == 0 {
        info.juz_start
    } else {
        info.last_juz()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_juz_surah() {
        let resolver = JuzResolver::standard();
        assert_eq!(resolver.juz_for(1, 1), Estimate::exact(1));
        assert_eq!(resolver.juz_for(114, 6), Estimate::exact(30));
        assert_eq!(resolver.juz_for(36, 1), Estimate::exact(22));
    }

    #[test]
    fn test_boundary_edges() {
        let resolver = JuzResolver::standard();
        assert_eq!(resolver.juz_for(18, 74).value, 15);
        assert_eq!(resolver.juz_for(18, 75).value, 16);
        assert_eq!(resolver.juz_for(2, 141).value, 1);
        assert_eq!(resolver.juz_for(2, 142).value, 2);
        assert_eq!(resolver.juz_for(2, 253).value, 3);
        assert_eq!(resolver.juz_for(2, 286).value, 3);
        assert_eq!(resolver.juz_for(4, 148).value, 6);
    }

    #[test]
    fn test_unknown_surah_defaults_to_first_juz() {
        let resolver = JuzResolver::standard();
        let juz = resolver.juz_for(999, 1);
        assert_eq!(juz.value, DEFAULT_JUZ);
        assert!(juz.is_fallback());
    }

    #[test]
    fn test_out_of_range_ayah_is_best_effort() {
        let resolver = JuzResolver::standard();
        let past_end = resolver.juz_for(2, 400);
        assert_eq!(past_end.value, 3);
        assert!(past_end.is_fallback());

        let zero = resolver.juz_for(2, 0);
        assert_eq!(zero.value, 1);
        assert!(zero.is_fallback());

        assert_eq!(resolver.juz_for(1, 50), Estimate::fallback(1));
    }

    #[test]
    fn test_juz_range() {
        let resolver = JuzResolver::standard();
        let range = resolver.juz_range(2, 1, 286);
        assert_eq!(range.provenance, Provenance::Exact);
        assert_eq!(range.value.juz_list, vec![1, 2, 3]);

        let single = resolver.juz_range(18, 80, 110);
        assert_eq!(single.value.start_juz, 16);
        assert_eq!(single.value.end_juz, 16);
        assert_eq!(single.value.len(), 1);
    }

    #[test]
    fn test_backwards_range_is_ordered() {
        let range = JuzResolver::standard().juz_range(2, 286, 1);
        assert_eq!(range.value.start_juz, 1);
        assert_eq!(range.value.end_juz, 3);
        assert!(range.is_fallback());
    }
}
