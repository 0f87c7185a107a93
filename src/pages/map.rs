//! Direct ayah-to-page data loaded from JSON.
//!
//! The file is a JSON array of records:
//!
//! ```json
//! [
//!   { "surah": 1, "ayah": 1, "page": 1 },
//!   { "surah": 2, "ayah": 1, "page": 2 }
//! ]
//! ```
//!
//! Unknown fields are rejected, and every record is checked against the
//! reference table when the map is built.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

use super::PageLookup;
use crate::error::{ErrorCode, MushafError, MushafResult};
use crate::models::MUSHAF_PAGE_COUNT;
use crate::table::SurahTable;

/// One ayah's page in the mushaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AyahPageRecord {
    pub surah: u16,
    pub ayah: u16,
    pub page: u16,
}

/// Authoritative page number for each ayah.
#[derive(Debug, Clone, Default)]
pub struct AyahPageMap {
    pages: HashMap<(u16, u16), u16>,
}

impl AyahPageMap {
    /// Builds a map from records, validating each against the table.
    pub fn from_records<I>(records: I, table: &SurahTable) -> MushafResult<Self>
    where
        I: IntoIterator<Item = AyahPageRecord>,
    {
        let mut pages = HashMap::new();
        for record in records {
            let Some(info) = table.by_number(record.surah) else {
                return Err(MushafError::with_message(
                    ErrorCode::InvalidPageRecord,
                    format!("unknown surah {}", record.surah),
                ));
            };
            if !info.contains_ayah(record.ayah) {
                return Err(MushafError::with_message(
                    ErrorCode::InvalidPageRecord,
                    format!(
                        "ayah {}:{} is outside 1..={}",
                        record.surah, record.ayah, info.total_ayahs
                    ),
                ));
            }
            if !(1..=MUSHAF_PAGE_COUNT).contains(&record.page) {
                return Err(MushafError::with_message(
                    ErrorCode::InvalidPageRecord,
                    format!("ayah {}:{} has page {}", record.surah, record.ayah, record.page),
                ));
            }
            if pages
                .insert((record.surah, record.ayah), record.page)
                .is_some()
            {
                return Err(MushafError::with_message(
                    ErrorCode::DuplicatePageRecord,
                    format!("ayah {}:{} is listed twice", record.surah, record.ayah),
                ));
            }
        }
        Ok(Self { pages })
    }

    /// Parses a JSON document into a map.
    pub fn from_json_str(json: &str, table: &SurahTable) -> MushafResult<Self> {
        let records: Vec<AyahPageRecord> = serde_json::from_str(json)?;
        Self::from_records(records, table)
    }

    /// Loads a map from a JSON file.
    pub fn load(path: impl AsRef<Path>, table: &SurahTable) -> MushafResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            MushafError::with_message(
                ErrorCode::PageMapUnreadable,
                format!("{}: {}", path.display(), e),
            )
        })?;
        let map = Self::from_json_str(&json, table)?;
        info!("Loaded {} ayah page records from {}", map.len(), path.display());
        Ok(map)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

impl PageLookup for AyahPageMap {
    fn page_of(&self, surah: u16, ayah: u16) -> Option<u16> {
        self.pages.get(&(surah, ayah)).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Estimate;
    use std::io::Write;

    const SAMPLE: &str = r#"[
        {"surah": 2, "ayah": 1, "page": 2},
        {"surah": 2, "ayah": 141, "page": 21},
        {"surah": 2, "ayah": 142, "page": 22},
        {"surah": 2, "ayah": 286, "page": 49},
        {"surah": 18, "ayah": 75, "page": 302}
    ]"#;

    fn sample() -> AyahPageMap {
        AyahPageMap::from_json_str(SAMPLE, SurahTable::standard()).unwrap()
    }

    #[test]
    fn test_lookup() {
        let map = sample();
        assert_eq!(map.len(), 5);
        assert_eq!(map.page_of(2, 142), Some(22));
        assert_eq!(map.page_of(2, 143), None);
    }

    #[test]
    fn test_calculate_pages_read() {
        let map = sample();
        assert_eq!(map.calculate_pages_read(2, 1, 286), Estimate::exact(48));
        assert_eq!(map.calculate_pages_read(2, 1, 141), Estimate::exact(20));
        assert_eq!(map.calculate_pages_read(2, 142, 142), Estimate::exact(1));
    }

    #[test]
    fn test_calculate_pages_read_miss_falls_back() {
        let map = sample();
        assert_eq!(map.calculate_pages_read(2, 1, 2), Estimate::fallback(1));
        assert_eq!(map.calculate_pages_read(3, 1, 200), Estimate::fallback(1));
        assert_eq!(map.calculate_pages_read(2, 286, 1), Estimate::fallback(1));
    }

    #[test]
    fn test_rejects_unknown_fields() {
        let err = AyahPageMap::from_json_str(
            r#"[{"surah": 1, "ayah": 1, "page": 1, "juz": 1}]"#,
            SurahTable::standard(),
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::PageMapMalformed);
    }

    #[test]
    fn test_rejects_records_outside_table() {
        let table = SurahTable::standard();
        let err = AyahPageMap::from_json_str(r#"[{"surah": 1, "ayah": 8, "page": 1}]"#, table)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidPageRecord);

        let err = AyahPageMap::from_json_str(r#"[{"surah": 115, "ayah": 1, "page": 1}]"#, table)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidPageRecord);

        let err = AyahPageMap::from_json_str(r#"[{"surah": 1, "ayah": 1, "page": 605}]"#, table)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidPageRecord);
    }

    #[test]
    fn test_rejects_duplicates() {
        let err = AyahPageMap::from_json_str(
            r#"[{"surah": 1, "ayah": 1, "page": 1}, {"surah": 1, "ayah": 1, "page": 1}]"#,
            SurahTable::standard(),
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::DuplicatePageRecord);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let map = AyahPageMap::load(file.path(), SurahTable::standard()).unwrap();
        assert_eq!(map.page_of(18, 75), Some(302));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = AyahPageMap::load(dir.path().join("pages.json"), SurahTable::standard())
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::PageMapUnreadable);
    }
}
