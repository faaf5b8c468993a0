use actix_web::{
    get, put,
    web::{self, ServiceConfig},
    HttpResponse,
};
use log::info;

use super::MOCK_USER_ID;
use crate::{
    db::MemStore,
    error::ApiError,
    models::user::{PreferencesUpdate, UserPreferences},
};

const NOT_FOUND: &str = "User not found";

#[get("/user/preferences")]
pub async fn get_preferences(store: web::Data<MemStore>) -> Result<HttpResponse, ApiError> {
    let user = store
        .get_user(MOCK_USER_ID)
        .await
        .ok_or(ApiError::NotFound(NOT_FOUND))?;
    Ok(HttpResponse::Ok().json(UserPreferences::from(&user)))
}

#[put("/user/preferences")]
pub async fn update_preferences(
    store: web::Data<MemStore>,
    body: web::Json<PreferencesUpdate>,
) -> Result<HttpResponse, ApiError> {
    if store.get_user(MOCK_USER_ID).await.is_none() {
        return Err(ApiError::NotFound(NOT_FOUND));
    }
    let update = body.into_inner().validate().map_err(ApiError::Validation)?;
    let user = store
        .update_user_preferences(MOCK_USER_ID, update)
        .await
        .ok_or(ApiError::NotFound(NOT_FOUND))?;
    info!(
        "Updated preferences for user {} (stripe connected: {})",
        user.id,
        user.stripe_account_id.is_some()
    );
    Ok(HttpResponse::Ok().json(UserPreferences::from(&user)))
}

pub fn init(config: &mut ServiceConfig) {
    config.service(get_preferences).service(update_preferences);
}
