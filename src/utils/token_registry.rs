use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

use super::{normalize_currency_code, rate_table};
use crate::{error::ConfigError, models::currency::TokenMetadata};

type NetworkTokens = HashMap<&'static str, TokenMetadata>;

const fn token(
    address: &'static str,
    decimals: u8,
    symbol: &'static str,
    name: &'static str,
) -> TokenMetadata {
    TokenMetadata {
        address,
        decimals,
        symbol,
        name,
    }
}

static TOKEN_ADDRESSES: Lazy<HashMap<&'static str, NetworkTokens>> = Lazy::new(|| {
    HashMap::from([
        (
            // Base
            "8453",
            HashMap::from([
                ("USDC", token("0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913", 6, "USDC", "USD Coin")),
                ("MXN", token("0xa411c9Aa00E020e4f88Bc19996d29c5B7ADB4ACf", 18, "MXN", "Mexican Peso")),
                ("BRZ", token("0xE9185Ee218cae427aF7B9764A011bb89FeA761B4", 18, "BRZ", "Brazilian Real")),
                ("EURC", token("0x60a3E35Cc302bFA44Cb288Bc5a4F316Fdb1adb42", 6, "EURC", "Euro Coin")),
                ("TRY", token("0x2E9AE768c5B45C7347fAb0cc305B2e1B8F6e24BF", 18, "TRY", "Turkish Lira")),
                ("ARS", token("0x7D6632DAbDeA04134F04B2C61E5081e167f1A22d", 18, "ARS", "Argentine Peso")),
            ]),
        ),
        (
            // Mantle
            "5000",
            HashMap::from([
                ("USDC", token("0x09Bc4E0D864854c6aFB6eB9A9cdF58aC190D0dF9", 6, "USDC", "USD Coin")),
                ("BRZ", token("0x05539F021b66Fd01d1FB1ff8E167CdD09bf7c2D0", 18, "BRZ", "Brazilian Real")),
            ]),
        ),
    ])
});

static ADDRESS_FORMAT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^0x[0-9a-fA-F]{40}$").unwrap());

pub fn get_token_metadata(network_id: &str, currency_code: &str) -> Option<&'static TokenMetadata> {
    TOKEN_ADDRESSES
        .get(network_id)?
        .get(normalize_currency_code(currency_code).as_str())
}

/// Registered tokens for a network, ordered by currency code.
pub fn tokens(network_id: &str) -> Vec<(&'static str, &'static TokenMetadata)> {
    let mut entries: Vec<(&'static str, &'static TokenMetadata)> = TOKEN_ADDRESSES
        .get(network_id)
        .map(|registered| registered.iter().map(|(code, meta)| (*code, meta)).collect())
        .unwrap_or_default();
    entries.sort_unstable_by_key(|(code, _)| *code);
    entries
}

pub fn is_valid_address(address: &str) -> bool {
    ADDRESS_FORMAT.is_match(address)
}

/// Checked once at startup: every address is well formed, keys agree with
/// symbols and every network with tokens also has rates.
pub fn validate_registry() -> Result<(), ConfigError> {
    for (network, tokens) in TOKEN_ADDRESSES.iter() {
        if !rate_table::has_network(network) {
            return Err(ConfigError::UnpricedNetwork(network.to_string()));
        }
        for (currency, meta) in tokens {
            if !is_valid_address(meta.address) {
                return Err(ConfigError::InvalidTokenAddress {
                    network: network.to_string(),
                    currency: currency.to_string(),
                    address: meta.address.to_string(),
                });
            }
            if meta.symbol != *currency {
                return Err(ConfigError::SymbolMismatch {
                    network: network.to_string(),
                    currency: currency.to_string(),
                    symbol: meta.symbol.to_string(),
                });
            }
        }
    }
    Ok(())
}
