use actix_web::{
    get, patch, post,
    web::{self, ServiceConfig},
    HttpResponse,
};
use log::info;

use super::path_id;
use crate::{
    db::MemStore,
    error::ApiError,
    models::transaction::{NewTransaction, StatusUpdate},
};

const INVALID_ID: &str = "Invalid transaction ID";
const NOT_FOUND: &str = "Transaction not found";

#[get("/transactions")]
pub async fn list_transactions(store: web::Data<MemStore>) -> HttpResponse {
    HttpResponse::Ok().json(store.all_transactions().await)
}

#[post("/transactions")]
pub async fn create_transaction(
    store: web::Data<MemStore>,
    body: web::Json<NewTransaction>,
) -> Result<HttpResponse, ApiError> {
    let record = body.into_inner().validate().map_err(ApiError::Validation)?;
    let transaction = store.create_transaction(record).await;
    info!(
        "Created transaction {} ({:?} {} {})",
        transaction.id, transaction.kind, transaction.amount, transaction.currency
    );
    Ok(HttpResponse::Created().json(transaction))
}

#[get("/transactions/{id}")]
pub async fn get_transaction(
    store: web::Data<MemStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = path_id(&path, INVALID_ID)?;
    let transaction = store
        .get_transaction(id)
        .await
        .ok_or(ApiError::NotFound(NOT_FOUND))?;
    Ok(HttpResponse::Ok().json(transaction))
}

#[patch("/transactions/{id}/status")]
pub async fn update_transaction_status(
    store: web::Data<MemStore>,
    path: web::Path<String>,
    body: web::Json<StatusUpdate>,
) -> Result<HttpResponse, ApiError> {
    let id = path_id(&path, INVALID_ID)?;
    let transaction = store
        .update_transaction_status(id, body.status)
        .await
        .ok_or(ApiError::NotFound(NOT_FOUND))?;
    info!("Transaction {} marked {:?}", id, transaction.status);
    Ok(HttpResponse::Ok().json(transaction))
}

pub fn init(config: &mut ServiceConfig) {
    config
        .service(list_transactions)
        .service(create_transaction)
        .service(get_transaction)
        .service(update_transaction_status);
}
