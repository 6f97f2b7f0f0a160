use axum::Json;
use serde::Serialize;

use crate::catalog::{catalog, ProgramRecord};

#[derive(Serialize)]
pub struct CatalogResponse {
    pub programs: &'static [ProgramRecord],
    pub total: usize,
}

/// GET /api/v1/programs
pub async fn handle_list_programs() -> Json<CatalogResponse> {
    let programs = catalog();
    Json(CatalogResponse {
        programs,
        total: programs.len(),
    })
}
