//! Surah reference handlers.

use axum::extract::{rejection::PathRejection, Path, State};
use axum::Json;

use crate::error::{ErrorCode, MushafError, MushafResult};
use crate::models::{SurahInfo, SurahSummary};
use crate::router::AppState;

/// GET /api/surahs - List every surah.
pub async fn list_surahs(State(state): State<AppState>) -> Json<Vec<SurahSummary>> {
    let surahs = state
        .calculator
        .table()
        .iter()
        .map(SurahInfo::summary)
        .collect();
    Json(surahs)
}

/// GET /api/surahs/:number - Get a surah by number.
pub async fn get_surah(
    State(state): State<AppState>,
    number: Result<Path<u16>, PathRejection>,
) -> MushafResult<Json<SurahInfo>> {
    let Path(number) = number?;
    state
        .calculator
        .table()
        .by_number(number)
        .map(|info| Json(*info))
        .ok_or_else(|| {
            MushafError::with_message(
                ErrorCode::SurahNotFound,
                format!("Surah {} does not exist.", number),
            )
        })
}

/// GET /api/surahs/by-name/:name - Get a surah by name.
pub async fn get_surah_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> MushafResult<Json<SurahInfo>> {
    state
        .calculator
        .table()
        .by_name(&name)
        .map(|info| Json(*info))
        .ok_or_else(|| {
            MushafError::with_message(
                ErrorCode::SurahNotFound,
                format!("No surah is named {:?}.", name),
            )
        })
}
