//! Juz constants and range models.

use serde::Serialize;

/// Number of surahs in the Quran.
pub const SURAH_COUNT: u8 = 114;

/// Number of Juz in the standard division.
pub const JUZ_COUNT: u8 = 30;

/// Pages in the standard 15-line Madani mushaf.
pub const MUSHAF_PAGE_COUNT: u16 = 604;

/// Average ayahs per printed page, used when no finer page data exists.
pub const AVERAGE_AYAHS_PER_PAGE: u32 = 13;

/// Returns the printed page count of a Juz.
///
/// Juz 1 spans 21 pages, Juz 30 spans 22, every other Juz 20. Unknown Juz
/// numbers get the common value.
pub fn juz_page_count(juz: u8) -> u32 {
    match juz {
        1 => 21,
        30 => 22,
        _ => 20,
    }
}

/// The span of Juz touched by an ayah range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JuzRange {
    pub start_juz: u8,
    pub end_juz: u8,
    /// Every Juz from `start_juz` to `end_juz` inclusive.
    pub juz_list: Vec<u8>,
}

impl JuzRange {
    /// Creates a range, ordering the ends if needed.
    pub fn new(a: u8, b: u8) -> Self {
        let (start_juz, end_juz) = if a <= b { (a, b) } else { (b, a) };
        Self {
            start_juz,
            end_juz,
            juz_list: (start_juz..=end_juz).collect(),
        }
    }

    /// Returns the number of Juz in the range.
    pub fn len(&self) -> usize {
        self.juz_list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.juz_list.is_empty()
    }

    /// Total printed pages of every Juz in the range.
    pub fn full_page_count(&self) -> u32 {
        self.juz_list.iter().copied().map(juz_page_count).sum()
    }
}
