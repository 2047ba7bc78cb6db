//! Endpoint constants and URL helpers for the pairs API.

/// DexScreener endpoint returning the latest records for a pair address.
pub const DEXSCREENER_PAIRS_URL: &str = "https://api.dexscreener.io/latest/dex/pairs";

/// Query parameter carrying the pair address.
pub const PAIR_ADDRESS_PARAM: &str = "pairAddress";

/// Build the lookup URL for `address`.
///
/// The address is substituted verbatim; no escaping or validation happens here.
pub fn pair_url(base_url: &str, address: &str) -> String {
    format!("{}?{}={}", base_url, PAIR_ADDRESS_PARAM, address)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_default_lookup_url() {
        assert_eq!(
            pair_url(DEXSCREENER_PAIRS_URL, "0xabc"),
            "https://api.dexscreener.io/latest/dex/pairs?pairAddress=0xabc"
        );
    }

    #[test]
    fn address_is_not_escaped() {
        assert_eq!(pair_url("http://h/p", "a b&c"), "http://h/p?pairAddress=a b&c");
    }
}
