use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::profile::{FormInput, Profile, ProfileBuilder};
use crate::session::SessionContext;
use crate::state::AppState;

pub const PROFILE_SAVED_MESSAGE: &str = "Profile saved! Now go to the Dashboard tab.";

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub session_id: Uuid,
    /// Raw inputs for re-populating the form.
    pub form: FormInput,
    pub profile: Option<Profile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

impl ProfileResponse {
    fn from_context(ctx: SessionContext, message: Option<&'static str>) -> Self {
        Self {
            session_id: ctx.id,
            form: ctx.form,
            profile: ctx.profile,
            message,
        }
    }
}

/// GET /api/v1/sessions/:id/profile
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProfileResponse>, AppError> {
    let ctx = state.sessions.get(id).await?;
    Ok(Json(ProfileResponse::from_context(ctx, None)))
}

/// PUT /api/v1/sessions/:id/profile
///
/// Validates the form and replaces the session's profile. An invalid
/// submission leaves the previously saved profile untouched.
pub async fn handle_save_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(form): Json<FormInput>,
) -> Result<Json<ProfileResponse>, AppError> {
    // Unknown sessions are reported before validation problems.
    state.sessions.get(id).await?;

    let profile = ProfileBuilder::from_form(&form)?;
    let interests = profile.interests().len();

    let ctx = state.sessions.save_profile(id, form, profile).await?;
    info!(session_id = %id, interests, "Profile saved");
    Ok(Json(ProfileResponse::from_context(
        ctx,
        Some(PROFILE_SAVED_MESSAGE),
    )))
}

/// DELETE /api/v1/sessions/:id/profile
pub async fn handle_clear_profile(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProfileResponse>, AppError> {
    let ctx = state.sessions.clear_profile(id).await?;
    Ok(Json(ProfileResponse::from_context(ctx, None)))
}
