use actix_web::{
    delete, get, post, put,
    web::{self, ServiceConfig},
    HttpResponse,
};
use log::info;

use super::{path_id, MOCK_USER_ID};
use crate::{
    db::MemStore,
    error::ApiError,
    models::contact::{ContactUpdate, NewContact},
};

const INVALID_ID: &str = "Invalid contact ID";
const NOT_FOUND: &str = "Contact not found";

#[get("/contacts")]
pub async fn list_contacts(store: web::Data<MemStore>) -> HttpResponse {
    HttpResponse::Ok().json(store.contacts_for_user(MOCK_USER_ID).await)
}

#[post("/contacts")]
pub async fn create_contact(
    store: web::Data<MemStore>,
    body: web::Json<NewContact>,
) -> Result<HttpResponse, ApiError> {
    let record = body.into_inner().validate().map_err(ApiError::Validation)?;
    let contact = store.create_contact(MOCK_USER_ID, record).await;
    info!("Created contact {} for user {}", contact.id, contact.user_id);
    Ok(HttpResponse::Created().json(contact))
}

#[put("/contacts/{id}")]
pub async fn update_contact(
    store: web::Data<MemStore>,
    path: web::Path<String>,
    body: web::Json<ContactUpdate>,
) -> Result<HttpResponse, ApiError> {
    let id = path_id(&path, INVALID_ID)?;
    if store.get_contact(id).await.is_none() {
        return Err(ApiError::NotFound(NOT_FOUND));
    }
    let update = body.into_inner().validate().map_err(ApiError::Validation)?;
    let contact = store
        .update_contact(id, update)
        .await
        .ok_or(ApiError::NotFound(NOT_FOUND))?;
    info!("Updated contact {}", id);
    Ok(HttpResponse::Ok().json(contact))
}

#[delete("/contacts/{id}")]
pub async fn delete_contact(
    store: web::Data<MemStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = path_id(&path, INVALID_ID)?;
    if !store.delete_contact(id).await {
        return Err(ApiError::NotFound(NOT_FOUND));
    }
    info!("Deleted contact {}", id);
    Ok(HttpResponse::NoContent().finish())
}

pub fn init(config: &mut ServiceConfig) {
    config
        .service(list_contacts)
        .service(create_contact)
        .service(update_contact)
        .service(delete_contact);
}
