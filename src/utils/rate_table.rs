use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::normalize_currency_code;

/// Base mainnet. Used whenever a caller does not name a network.
pub const PRIMARY_NETWORK: &str = "8453";

type NetworkRates = HashMap<&'static str, f64>;

// Units of each currency per 1 USD. Mock values, not sourced from a market feed.
static NETWORK_RATES: Lazy<HashMap<&'static str, NetworkRates>> = Lazy::new(|| {
    HashMap::from([
        (
            // Base
            "8453",
            HashMap::from([
                ("USD", 1.0),
                ("MXN", 17.5),
                ("BRZ", 5.2),
                ("USDC", 1.0),
                ("EURC", 0.92),
            ]),
        ),
        (
            // Mantle
            "5000",
            HashMap::from([("USD", 1.0), ("BRZ", 5.2), ("USDC", 1.0)]),
        ),
    ])
});

pub fn has_network(network_id: &str) -> bool {
    NETWORK_RATES.contains_key(network_id)
}

pub fn get_rate(network_id: &str, currency_code: &str) -> Option<f64> {
    let rates = NETWORK_RATES.get(network_id)?;
    rates
        .get(normalize_currency_code(currency_code).as_str())
        .copied()
}

pub fn networks() -> Vec<&'static str> {
    let mut ids: Vec<&'static str> = NETWORK_RATES.keys().copied().collect();
    ids.sort_unstable();
    ids
}

pub fn currencies(network_id: &str) -> Option<Vec<&'static str>> {
    let mut codes: Vec<&'static str> = NETWORK_RATES.get(network_id)?.keys().copied().collect();
    codes.sort_unstable();
    Some(codes)
}
