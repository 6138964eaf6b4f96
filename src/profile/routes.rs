use axum::{extract::{rejection::JsonRejection, State}, routing::post, Json, Router};

use crate::state::AppState;

use super::{error::Result, models::{ProfileFormInput, ProfileResponseModel}, DynProfileFormValidator};

pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .route("/validate", post(validate_profile))
        .with_state(app_state)
}

pub async fn validate_profile(
    State(validator): State<DynProfileFormValidator>,
    body: std::result::Result<Json<ProfileFormInput>, JsonRejection>,
) -> Result<Json<ProfileResponseModel>> {
    let Json(body) = body?;
    Ok(Json(validator.validate(body)?.into()))
}
