use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

/// Rejections produced while validating or executing a currency conversion.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConversionError {
    #[error("Missing required parameters: from, to, amount")]
    MissingParameter,
    #[error("Invalid amount")]
    InvalidAmount,
    #[error("Unsupported network")]
    UnsupportedNetwork,
    #[error("Unsupported currency pair for the selected network")]
    UnsupportedCurrencyPair,
    /// The pivot arithmetic left the finite range. Reported generically.
    #[error("Failed to convert currency")]
    NonFiniteResult,
}

impl ConversionError {
    pub fn is_client_error(&self) -> bool {
        !matches!(self, ConversionError::NonFiniteResult)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid PORT value: {0}")]
    InvalidPort(String),
    #[error("DEFAULT_NETWORK_ID {0} has no rate table")]
    UnknownDefaultNetwork(String),
    #[error("Invalid token address {address} for {currency} on network {network}")]
    InvalidTokenAddress {
        network: String,
        currency: String,
        address: String,
    },
    #[error("Token {symbol} registered under {currency} on network {network}")]
    SymbolMismatch {
        network: String,
        currency: String,
        symbol: String,
    },
    #[error("Network {0} has registered tokens but no rate table")]
    UnpricedNetwork(String),
}

/// Errors surfaced by the HTTP layer. Every variant renders as `{ "error": <message> }`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Conversion(#[from] ConversionError),
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    InvalidId(&'static str),
    #[error("{0}")]
    NotFound(&'static str),
}

#[derive(Serialize, Debug)]
struct ErrorBody {
    error: String,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Conversion(err) if err.is_client_error() => StatusCode::BAD_REQUEST,
            ApiError::Conversion(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Validation(_) | ApiError::InvalidId(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.to_string(),
        })
    }
}
