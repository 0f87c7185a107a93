//! Surah reference table and lookups.

mod data;

use tracing::debug;

use crate::error::{ErrorCode, MushafError, MushafResult};
use crate::models::{SurahInfo, JUZ_COUNT, MUSHAF_PAGE_COUNT};

/// Common variant spellings, keyed by their normalized form.
const NAME_ALIASES: &[(&str, u8)] = &[
    ("aleimran", 3),
    ("alanbiya", 21),
    ("almuminon", 23),
    ("yasen", 36),
    ("alhujrat", 49),
    ("almunafiqon", 63),
    ("almutafifen", 83),
    ("alail", 92),
    ("quraish", 106),
    ("alkauthar", 108),
    ("alkawsar", 108),
    ("alkafiron", 109),
];

static STANDARD: SurahTable = SurahTable::new(&data::SURAHS);

/// Read-only table of surah metadata.
#[derive(Debug, Clone, Copy)]
pub struct SurahTable {
    surahs: &'static [SurahInfo],
}

impl SurahTable {
    /// Creates a table over the given records.
    pub const fn new(surahs: &'static [SurahInfo]) -> Self {
        Self { surahs }
    }

    /// Returns the built-in 114-surah table.
    pub fn standard() -> &'static SurahTable {
        &STANDARD
    }

    pub fn len(&self) -> usize {
        self.surahs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surahs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static SurahInfo> {
        self.surahs.iter()
    }

    /// Looks up a surah by its number.
    pub fn by_number(&self, number: u16) -> Option<&'static SurahInfo> {
        let surahs = self.surahs;
        let index = usize::from(number).checked_sub(1)?;
        match surahs.get(index) {
            Some(info) if u16::from(info.number) == number => Some(info),
            _ => surahs.iter().find(|info| u16::from(info.number) == number),
        }
    }

    /// Looks up a surah by name.
    ///
    /// Matches the canonical or Arabic name case-insensitively first, then
    /// falls back to a spelling-insensitive comparison so that variant
    /// transliterations ("Al-Fatiha", "Aal-E-Imran") resolve too.
    pub fn by_name(&self, name: &str) -> Option<&'static SurahInfo> {
        let surahs = self.surahs;
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        if let Some(info) = surahs
            .iter()
            .find(|info| info.name.eq_ignore_ascii_case(name) || info.arabic_name == name)
        {
            return Some(info);
        }

        let key = normalize_name(name);
        if key.is_empty() {
            return None;
        }

        let found = surahs
            .iter()
            .find(|info| normalize_name(info.name) == key)
            .or_else(|| {
                NAME_ALIASES
                    .iter()
                    .find(|(alias, _)| *alias == key)
                    .and_then(|(_, number)| self.by_number(u16::from(*number)))
            });

        if let Some(info) = found {
            debug!("Resolved surah name {:?} to {}", name, info.name);
        }
        found
    }

    /// Returns true if the surah exists and `1 <= start <= end <= total_ayahs`.
    pub fn validate_ayah_range(&self, surah: u16, start: u16, end: u16) -> bool {
        self.by_number(surah)
            .map(|info| start >= 1 && start <= end && end <= info.total_ayahs)
            .unwrap_or(false)
    }

    /// Checks the structural invariants of every record.
    pub fn validate(&self) -> MushafResult<()> {
        for (index, info) in self.surahs.iter().enumerate() {
            let fail = |message: String| {
                Err(MushafError::with_message(
                    ErrorCode::InvalidReferenceTable,
                    format!("surah {}: {}", info.number, message),
                ))
            };

            if usize::from(info.number) != index + 1 {
                return fail(format!("expected number {}", index + 1));
            }
            if info.total_ayahs == 0 {
                return fail("total_ayahs must be positive".to_string());
            }
            if !(1..=JUZ_COUNT).contains(&info.juz_start) || info.last_juz() > JUZ_COUNT {
                return fail("juz out of range".to_string());
            }
            if info.last_juz() < info.juz_start {
                return fail("juz_end precedes juz_start".to_string());
            }

            if !info.has_boundaries() {
                if info.juz_end.is_some_and(|end| end != info.juz_start) {
                    return fail("spans several juz without boundaries".to_string());
                }
                continue;
            }

            let boundaries = info.juz_boundaries;
            let mut expected_start = 1u16;
            let mut previous_juz = info.juz_start;
            for (i, boundary) in boundaries.iter().enumerate() {
                let is_last = i + 1 == boundaries.len();
                if boundary.start_ayah != expected_start {
                    return fail(format!(
                        "boundary {} starts at {} instead of {}",
                        i, boundary.start_ayah, expected_start
                    ));
                }
                if boundary.juz_number < previous_juz || boundary.juz_number > JUZ_COUNT {
                    return fail(format!("boundary {} has juz {}", i, boundary.juz_number));
                }
                let end = match (boundary.end_ayah, is_last) {
                    (Some(end), _) => end,
                    (None, true) => info.total_ayahs,
                    (None, false) => return fail(format!("boundary {} is open but not last", i)),
                };
                if end < boundary.start_ayah || end > info.total_ayahs {
                    return fail(format!("boundary {} ends at {}", i, end));
                }
                if is_last && end != info.total_ayahs {
                    return fail(format!("last boundary ends at {}", end));
                }
                match (boundary.start_page, boundary.end_page) {
                    (None, None) => {}
                    (Some(start), Some(end))
                        if start >= 1 && start <= end && end <= MUSHAF_PAGE_COUNT => {}
                    _ => return fail(format!("boundary {} has bad page annotation", i)),
                }
                expected_start = end.saturating_add(1);
                previous_juz = boundary.juz_number;
            }

            if boundaries[0].juz_number != info.juz_start {
                return fail("first boundary disagrees with juz_start".to_string());
            }
            if previous_juz != info.last_juz() {
                return fail("last boundary disagrees with juz_end".to_string());
            }
        }
        Ok(())
    }
}

impl Default for SurahTable {
    fn default() -> Self {
        STANDARD
    }
}

/// Reduces a transliterated name to a spelling-insensitive key.
///
/// Keeps lowercase ASCII alphanumerics, collapses repeated letters and folds
/// a trailing "ah" to "a".
pub fn normalize_name(name: &str) -> String {
    let mut key = String::with_capacity(name.len());
    for c in name
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
    {
        if key.ends_with(c) {
            continue;
        }
        key.push(c);
    }
    if key.ends_with("ah") {
        key.pop();
    }
    key
}
