//! Surah reference records.

use serde::Serialize;

/// The slice of a surah that falls inside one Juz.
///
/// Boundaries of a surah are ordered, contiguous in ayah-space, and cover
/// `[1, total_ayahs]` exactly once. A missing `end_ayah` means "to the end of
/// the surah".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct JuzBoundary {
    pub juz_number: u8,
    pub start_ayah: u16,
    pub end_ayah: Option<u16>,
    /// First mushaf page occupied by this slice (inside the Juz's page span).
    pub start_page: Option<u16>,
    /// Last mushaf page occupied by this slice (inside the Juz's page span).
    pub end_page: Option<u16>,
}

impl JuzBoundary {
    /// Creates a boundary without page annotations.
    pub const fn new(juz_number: u8, start_ayah: u16, end_ayah: Option<u16>) -> Self {
        Self {
            juz_number,
            start_ayah,
            end_ayah,
            start_page: None,
            end_page: None,
        }
    }

    /// Creates a boundary annotated with the pages it occupies.
    pub const fn paged(
        juz_number: u8,
        start_ayah: u16,
        end_ayah: Option<u16>,
        start_page: u16,
        end_page: u16,
    ) -> Self {
        Self {
            juz_number,
            start_ayah,
            end_ayah,
            start_page: Some(start_page),
            end_page: Some(end_page),
        }
    }

    /// Returns the last ayah of this slice, resolving an open end against the
    /// surah's ayah count.
    pub fn effective_end(&self, total_ayahs: u16) -> u16 {
        self.end_ayah.unwrap_or(total_ayahs)
    }

    /// Returns true if the ayah lies inside this slice. An open end contains
    /// every ayah from `start_ayah` upwards.
    pub fn contains(&self, ayah: u16) -> bool {
        ayah >= self.start_ayah && self.end_ayah.map_or(true, |end| ayah <= end)
    }

    /// Number of ayahs in this slice.
    pub fn ayah_count(&self, total_ayahs: u16) -> u16 {
        self.effective_end(total_ayahs)
            .saturating_sub(self.start_ayah)
            .saturating_add(1)
    }

    /// Number of pages covered by the page annotation, if present.
    pub fn page_count(&self) -> Option<u16> {
        match (self.start_page, self.end_page) {
            (Some(start), Some(end)) if end >= start => Some(end - start + 1),
            _ => None,
        }
    }
}

/// Static metadata for one surah.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SurahInfo {
    pub number: u8,
    pub name: &'static str,
    pub arabic_name: &'static str,
    pub total_ayahs: u16,
    pub juz_start: u8,
    /// Last Juz touched by the surah; `None` when it lies wholly in `juz_start`.
    pub juz_end: Option<u8>,
    /// Per-Juz slices; empty when the surah lies in a single Juz.
    pub juz_boundaries: &'static [JuzBoundary],
}

impl SurahInfo {
    /// Returns the last Juz this surah touches.
    pub fn last_juz(&self) -> u8 {
        self.juz_end.unwrap_or(self.juz_start)
    }

    /// Returns true if the surah carries per-Juz boundaries.
    pub fn has_boundaries(&self) -> bool {
        !self.juz_boundaries.is_empty()
    }

    /// Returns true if `1 <= ayah <= total_ayahs`.
    pub fn contains_ayah(&self, ayah: u16) -> bool {
        (1..=self.total_ayahs).contains(&ayah)
    }

    /// Returns a lightweight summary of this surah.
    pub fn summary(&self) -> SurahSummary {
        SurahSummary {
            number: self.number,
            name: self.name,
            arabic_name: self.arabic_name,
            total_ayahs: self.total_ayahs,
            juz_start: self.juz_start,
            juz_end: self.last_juz(),
        }
    }
}

/// Surah listing entry without boundary detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SurahSummary {
    pub number: u8,
    pub name: &'static str,
    pub arabic_name: &'static str,
    pub total_ayahs: u16,
    pub juz_start: u8,
    pub juz_end: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_boundary_contains_everything_after_start() {
        let boundary = JuzBoundary::new(16, 75, None);
        assert!(!boundary.contains(74));
        assert!(boundary.contains(75));
        assert!(boundary.contains(500));
        assert_eq!(boundary.ayah_count(110), 36);
    }

    #[test]
    fn test_page_count() {
        assert_eq!(JuzBoundary::paged(3, 253, None, 42, 49).page_count(), Some(8));
        assert_eq!(JuzBoundary::paged(11, 1, Some(5), 221, 221).page_count(), Some(1));
        assert_eq!(JuzBoundary::new(3, 253, None).page_count(), None);
    }
}
