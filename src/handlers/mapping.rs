//! Juz and page mapping handlers.
//!
//! Lenient by default: invalid ranges still get best-effort values, flagged
//! by their provenance. In strict mode the page and enrichment endpoints
//! reject them instead.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::Json;
use serde::Serialize;

use crate::context::{AyahParams, EnrichRequest, RangeParams};
use crate::error::MushafResult;
use crate::models::{Estimate, JuzRange};
use crate::pages::Enrichment;
use crate::router::AppState;

/// Result of an ayah range check.
#[derive(Debug, Serialize)]
pub struct RangeValidation {
    pub valid: bool,
    pub total_ayahs: Option<u16>,
}

/// GET /api/juz?surah=&ayah= - Juz of a single ayah.
pub async fn get_juz(
    State(state): State<AppState>,
    params: Result<Query<AyahParams>, QueryRejection>,
) -> MushafResult<Json<Estimate<u8>>> {
    let Query(params) = params?;
    Ok(Json(
        state.calculator.resolver().juz_for(params.surah, params.ayah),
    ))
}

/// GET /api/juz/range?surah=&start=&end= - Juz spanned by an ayah range.
pub async fn get_juz_range(
    State(state): State<AppState>,
    params: Result<Query<RangeParams>, QueryRejection>,
) -> MushafResult<Json<Estimate<JuzRange>>> {
    let Query(params) = params?;
    Ok(Json(state.calculator.resolver().juz_range(
        params.surah,
        params.start,
        params.end,
    )))
}

/// GET /api/pages?surah=&start=&end= - Pages read for an ayah range.
pub async fn get_pages(
    State(state): State<AppState>,
    params: Result<Query<RangeParams>, QueryRejection>,
) -> MushafResult<Json<Estimate<u32>>> {
    let Query(params) = params?;
    if state.config.strict {
        params.require_valid(state.calculator.table())?;
    }
    Ok(Json(state.calculator.pages_read(
        params.surah,
        params.start,
        params.end,
    )))
}

/// GET /api/validate?surah=&start=&end= - Check an ayah range.
pub async fn validate_range(
    State(state): State<AppState>,
    params: Result<Query<RangeParams>, QueryRejection>,
) -> MushafResult<Json<RangeValidation>> {
    let Query(params) = params?;
    let table = state.calculator.table();
    Ok(Json(RangeValidation {
        valid: table.validate_ayah_range(params.surah, params.start, params.end),
        total_ayahs: table.by_number(params.surah).map(|info| info.total_ayahs),
    }))
}

/// POST /api/enrich - Derived Juz and page fields for a session form.
pub async fn enrich(
    State(state): State<AppState>,
    body: Result<Json<EnrichRequest>, JsonRejection>,
) -> MushafResult<Json<Enrichment>> {
    let Json(request) = body?;
    if state.config.strict {
        RangeParams::from(request).require_valid(state.calculator.table())?;
    }
    Ok(Json(state.calculator.enrich(
        request.surah,
        request.ayah_start,
        request.ayah_end,
    )))
}
