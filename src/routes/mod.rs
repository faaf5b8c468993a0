pub mod contacts;
pub mod currency;
pub mod preferences;
pub mod transactions;

use actix_web::{
    error::{JsonPayloadError, QueryPayloadError},
    web::{self, ServiceConfig},
    HttpRequest,
};
use log::debug;

use crate::{error::ApiError, utils::parse_id};

/// Requests act on behalf of this user until a session layer exists.
pub const MOCK_USER_ID: u32 = 1;

const INVALID_QUERY: &str = "Invalid query parameters";

fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!("Rejected JSON body: {}", err);
    ApiError::Validation(err.to_string()).into()
}

fn query_error(err: QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    debug!("Rejected query string {:?}: {}", req.query_string(), err);
    ApiError::Validation(INVALID_QUERY.to_string()).into()
}

pub(crate) fn path_id(raw: &str, message: &'static str) -> Result<u32, ApiError> {
    parse_id(raw).map_err(|_| ApiError::InvalidId(message))
}

pub fn init(config: &mut ServiceConfig) {
    config.service(
        web::scope("/api")
            .app_data(web::JsonConfig::default().error_handler(json_error))
            .app_data(web::QueryConfig::default().error_handler(query_error))
            .configure(currency::init)
            .configure(transactions::init)
            .configure(contacts::init)
            .configure(preferences::init),
    );
}
