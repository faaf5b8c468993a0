use super::{normalize_currency_code, rate_table, token_registry};
use crate::{error::ConversionError, models::currency::ConversionResult};

/// Converts `amount` from one currency to another through the USD pivot of the
/// given network (the primary network when `network_id` is `None`).
///
/// Token addresses are attached only when both currencies are registered on
/// the network; a missing registry entry never fails the conversion.
pub fn convert(
    from: &str,
    to: &str,
    amount: f64,
    network_id: Option<&str>,
) -> Result<ConversionResult, ConversionError> {
    let from = normalize_currency_code(from);
    let to = normalize_currency_code(to);
    if from.is_empty() || to.is_empty() {
        return Err(ConversionError::MissingParameter);
    }
    if !amount.is_finite() || amount <= 0.0 {
        return Err(ConversionError::InvalidAmount);
    }

    let network_id = network_id.unwrap_or(rate_table::PRIMARY_NETWORK);
    if !rate_table::has_network(network_id) {
        return Err(ConversionError::UnsupportedNetwork);
    }

    let (from_rate, to_rate) = match (
        rate_table::get_rate(network_id, &from),
        rate_table::get_rate(network_id, &to),
    ) {
        (Some(from_rate), Some(to_rate)) => (from_rate, to_rate),
        _ => return Err(ConversionError::UnsupportedCurrencyPair),
    };

    let in_usd = amount / from_rate;
    let converted = in_usd * to_rate;
    if !converted.is_finite() {
        return Err(ConversionError::NonFiniteResult);
    }

    let (from_address, to_address) = match (
        token_registry::get_token_metadata(network_id, &from),
        token_registry::get_token_metadata(network_id, &to),
    ) {
        (Some(from_token), Some(to_token)) => (
            Some(from_token.address.to_string()),
            Some(to_token.address.to_string()),
        ),
        _ => (None, None),
    };

    Ok(ConversionResult {
        from,
        to,
        amount,
        result: converted,
        rate: to_rate / from_rate,
        network_id: network_id.to_string(),
        from_address,
        to_address,
    })
}
