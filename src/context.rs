//! Request parameter extraction.

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use serde::Deserialize;

use crate::error::{ErrorCode, MushafError, MushafResult};
use crate::table::SurahTable;

/// `?surah=&ayah=` query parameters.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct AyahParams {
    pub surah: u16,
    pub ayah: u16,
}

/// `?surah=&start=&end=` query parameters.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct RangeParams {
    pub surah: u16,
    pub start: u16,
    pub end: u16,
}

/// Body of a session enrichment request.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct EnrichRequest {
    pub surah: u16,
    pub ayah_start: u16,
    pub ayah_end: u16,
}

impl From<EnrichRequest> for RangeParams {
    fn from(req: EnrichRequest) -> Self {
        Self {
            surah: req.surah,
            start: req.ayah_start,
            end: req.ayah_end,
        }
    }
}

impl RangeParams {
    /// Rejects the range unless it lies inside a known surah.
    pub fn require_valid(&self, table: &SurahTable) -> MushafResult<()> {
        if table.validate_ayah_range(self.surah, self.start, self.end) {
            return Ok(());
        }

        let message = match table.by_number(self.surah) {
            Some(info) => format!(
                "Ayah range {}..{} is not within 1..{} of surah {}.",
                self.start, self.end, info.total_ayahs, info.number
            ),
            None => format!("Surah {} does not exist.", self.surah),
        };
        Err(MushafError::with_message(ErrorCode::InvalidAyahRange, message))
    }
}

impl From<QueryRejection> for MushafError {
    fn from(rejection: QueryRejection) -> Self {
        MushafError::with_message(ErrorCode::InvalidInput, rejection.body_text())
    }
}

impl From<PathRejection> for MushafError {
    fn from(rejection: PathRejection) -> Self {
        MushafError::with_message(ErrorCode::InvalidInput, rejection.body_text())
    }
}

impl From<JsonRejection> for MushafError {
    fn from(rejection: JsonRejection) -> Self {
        MushafError::with_message(ErrorCode::InvalidInput, rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_valid() {
        let table = SurahTable::standard();
        let ok = RangeParams { surah: 2, start: 1, end: 286 };
        assert!(ok.require_valid(table).is_ok());

        let err = RangeParams { surah: 2, start: 1, end: 287 }
            .require_valid(table)
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidAyahRange);
        assert!(err.message.contains("1..286"));

        let err = RangeParams { surah: 999, start: 1, end: 1 }
            .require_valid(table)
            .unwrap_err();
        assert!(err.message.contains("999"));
    }
}
