//! Menu recommendation handler

use axum::{Json, extract::Multipart, extract::State};
use domain::MenuConstraints;
use serde::Serialize;
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Menu recommendation response body
#[derive(Debug, Serialize)]
pub struct MenuResponse {
    /// The recommended order
    pub menu: String,
}

/// Handle a menu recommendation request.
///
/// Multipart fields: `people`, `budget`, `taste`, plus an optional
/// `image` with a photo of the menu or storefront.
#[instrument(skip(state, multipart))]
pub async fn generate_menu(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<MenuResponse>, ApiError> {
    let mut people = None;
    let mut budget = None;
    let mut taste = None;
    let mut image_bytes = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(e.to_string()))?
    {
        match field.name() {
            Some("people") => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| ApiError::BadRequest(e.to_string()))?;
                let parsed: u32 = text
                    .trim()
                    .parse()
                    .map_err(|_| ApiError::BadRequest("people must be a number".to_string()))?;
                people = Some(parsed);
            },
            Some("budget") => {
                budget = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| ApiError::BadRequest(e.to_string()))?,
                );
            },
            Some("taste") => {
                taste = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| ApiError::BadRequest(e.to_string()))?,
                );
            },
            Some("image") => {
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(e.to_string()))?;
                if !bytes.is_empty() {
                    image_bytes = Some(bytes);
                }
            },
            _ => {},
        }
    }

    let Some(people) = people else {
        return Err(ApiError::BadRequest("people is required".to_string()));
    };
    let Some(budget) = budget else {
        return Err(ApiError::BadRequest("budget is required".to_string()));
    };
    let Some(taste) = taste else {
        return Err(ApiError::BadRequest("taste is required".to_string()));
    };

    let constraints = MenuConstraints::new(people, budget, taste)
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let menu = state
        .concierge
        .menu_plan(&constraints, image_bytes.as_deref())
        .await?;

    Ok(Json(MenuResponse { menu }))
}
