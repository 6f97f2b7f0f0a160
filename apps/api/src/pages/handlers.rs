use axum::{extract::Path, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::pages::{find, Page, Testimonial, PAGES, TESTIMONIALS, TESTIMONIAL_QUOTES};

#[derive(Serialize)]
pub struct NavigationResponse {
    pub pages: &'static [Page],
    pub default_page: &'static str,
}

#[derive(Serialize)]
pub struct PageResponse {
    #[serde(flatten)]
    pub page: &'static Page,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub testimonials: Option<&'static [Testimonial]>,
}

/// GET /api/v1/pages
pub async fn handle_navigation() -> Json<NavigationResponse> {
    Json(NavigationResponse {
        pages: &PAGES,
        default_page: PAGES[0].slug,
    })
}

/// GET /api/v1/pages/:slug
pub async fn handle_page(Path(slug): Path<String>) -> Result<Json<PageResponse>, AppError> {
    let page = find(&slug).ok_or_else(|| AppError::NotFound(format!("Page '{slug}' not found")))?;
    let testimonials = (page.slug == TESTIMONIALS.slug).then_some(&TESTIMONIAL_QUOTES[..]);
    Ok(Json(PageResponse { page, testimonials }))
}
