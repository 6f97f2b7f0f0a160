use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::advice::{advise, Advice};
use crate::catalog::catalog;
use crate::errors::AppError;
use crate::matching::handlers::{program_cards, ProgramCard, PROFILE_REQUIRED_MESSAGE};
use crate::matching::{match_programs, NO_MATCHES_MESSAGE};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AdviceResponse {
    pub programs: Vec<ProgramCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
    pub advice: Advice,
    pub backend: &'static str,
}

/// POST /api/v1/sessions/:id/advice
///
/// Re-runs the matcher and asks the advice backend for guidance. A failing
/// backend still yields 200 with `advice.is_error = true`.
pub async fn handle_advice(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AdviceResponse>, AppError> {
    let ctx = state.sessions.get(id).await?;
    let profile = ctx
        .profile
        .ok_or_else(|| AppError::Validation(PROFILE_REQUIRED_MESSAGE.to_string()))?;

    let matches = match_programs(&profile, catalog());
    let advice = advise(state.advisor.as_ref(), &profile, &matches).await;

    Ok(Json(AdviceResponse {
        message: matches.is_empty().then_some(NO_MATCHES_MESSAGE),
        programs: program_cards(&matches),
        advice,
        backend: state.advisor.backend(),
    }))
}
