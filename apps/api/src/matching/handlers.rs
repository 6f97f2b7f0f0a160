use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use crate::catalog::{catalog, ProgramRecord, ProgramType};
use crate::errors::AppError;
use crate::matching::{match_programs, NO_MATCHES_MESSAGE};
use crate::state::AppState;

pub const PROFILE_REQUIRED_MESSAGE: &str =
    "Please fill out your profile first on the Profile tab.";

/// Display form of a matched program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgramCard {
    pub rank: usize,
    pub program: &'static str,
    pub university: &'static str,
    pub location: String,
    pub program_type: ProgramType,
}

pub fn program_cards(matches: &[&ProgramRecord]) -> Vec<ProgramCard> {
    matches
        .iter()
        .enumerate()
        .map(|(i, p)| ProgramCard {
            rank: i + 1,
            program: p.program,
            university: p.university,
            location: p.display_location(),
            program_type: p.program_type,
        })
        .collect()
}

#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub programs: Vec<ProgramCard>,
    pub profile_saved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

/// GET /api/v1/sessions/:id/recommendations
///
/// No saved profile and no matches are both normal outcomes reported through
/// `message`, never as errors.
pub async fn handle_recommendations(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RecommendationsResponse>, AppError> {
    let ctx = state.sessions.get(id).await?;

    let Some(profile) = ctx.profile else {
        return Ok(Json(RecommendationsResponse {
            programs: vec![],
            profile_saved: false,
            message: Some(PROFILE_REQUIRED_MESSAGE),
        }));
    };

    let matches = match_programs(&profile, catalog());
    debug!(
        session_id = %id,
        matches = matches.len(),
        constrained = !profile.preferences().is_unconstrained(),
        "Matched programs"
    );

    Ok(Json(RecommendationsResponse {
        message: matches.is_empty().then_some(NO_MATCHES_MESSAGE),
        programs: program_cards(&matches),
        profile_saved: true,
    }))
}
