use actix_web::{
    get,
    web::{self, ServiceConfig},
    HttpResponse,
};
use log::{debug, error};
use serde::Deserialize;

use crate::{
    config::Config,
    error::{ApiError, ConversionError},
    models::currency::{ConversionQuery, NetworkCurrency},
    utils::{converter::convert, non_blank, rate_table, token_registry},
};

#[get("/currency/convert")]
pub async fn convert_currency(
    config: web::Data<Config>,
    query: web::Query<ConversionQuery>,
) -> Result<HttpResponse, ApiError> {
    let request = query.into_inner().validate().map_err(|err| {
        debug!("Conversion rejected: {}", err);
        err
    })?;
    let network_id = request
        .network_id
        .as_deref()
        .unwrap_or(&config.default_network_id);

    match convert(&request.from, &request.to, request.amount, Some(network_id)) {
        Ok(result) => Ok(HttpResponse::Ok().json(result)),
        Err(err) if err.is_client_error() => {
            debug!(
                "Conversion {} -> {} on {} rejected: {}",
                request.from, request.to, network_id, err
            );
            Err(err.into())
        }
        Err(err) => {
            error!(
                "Error converting {} {} -> {} on {}: {:?}",
                request.amount, request.from, request.to, network_id, err
            );
            Err(err.into())
        }
    }
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TokensQuery {
    network_id: Option<String>,
}

/// Every currency known on a network, with its rate and token metadata where present.
#[get("/currency/tokens")]
pub async fn list_tokens(
    config: web::Data<Config>,
    query: web::Query<TokensQuery>,
) -> Result<HttpResponse, ApiError> {
    let network_id =
        non_blank(query.into_inner().network_id).unwrap_or_else(|| config.default_network_id.clone());
    let network_id = network_id.trim();

    let mut codes = rate_table::currencies(network_id).ok_or(ConversionError::UnsupportedNetwork)?;
    for (code, _) in token_registry::tokens(network_id) {
        if !codes.contains(&code) {
            codes.push(code);
        }
    }
    codes.sort_unstable();

    let listing: Vec<NetworkCurrency> = codes
        .into_iter()
        .map(|code| NetworkCurrency {
            currency: code,
            rate: rate_table::get_rate(network_id, code),
            token: token_registry::get_token_metadata(network_id, code),
        })
        .collect();
    Ok(HttpResponse::Ok().json(listing))
}

pub fn init(config: &mut ServiceConfig) {
    config.service(convert_currency).service(list_tokens);
}
