//! Pairs API response model.
//!
//! The service answers `GET .../pairs?pairAddress=<address>` with a JSON
//! object whose `pairs` field holds the matching records, most relevant
//! first. Only the first record is ever consulted. Fields are camelCase on
//! the wire; anything not modelled here is ignored.
use serde::Deserialize;

/// Top-level response body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PairsResponse {
    /// Matching pair records. The service sends `null` when nothing matches;
    /// individual entries may be `null` too.
    #[serde(default)]
    pub pairs: Option<Vec<Option<PairRecord>>>,
}

impl PairsResponse {
    /// Take the first record, if any.
    pub fn into_first_pair(self) -> Option<PairRecord> {
        self.pairs.and_then(|pairs| pairs.into_iter().next()).flatten()
    }
}

/// One trading-pair record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PairRecord {
    /// Chain identifier (e.g., `solana`, `base`).
    pub chain_id: Option<String>,
    /// DEX identifier (e.g., `raydium`).
    pub dex_id: Option<String>,
    /// Address of the pair as reported back by the service.
    pub pair_address: Option<String>,
    /// Base token of the pair.
    pub base_token: Option<TokenInfo>,
    /// Quote token of the pair.
    pub quote_token: Option<TokenInfo>,
    /// Price of the base token in units of the quote token.
    pub price_native: Option<String>,
    /// Price of the base token in USD, as a decimal string.
    pub price_usd: Option<String>,
}

impl PairRecord {
    /// Record carrying only a USD price.
    pub fn with_price_usd(price: &str) -> Self {
        PairRecord {
            price_usd: Some(String::from(price)),
            ..Default::default()
        }
    }

    /// Short `BASE/QUOTE` label for logging, when the service provided symbols.
    pub fn label(&self) -> Option<String> {
        let base = self.base_token.as_ref()?.symbol.as_deref()?;
        match self.quote_token.as_ref().and_then(|t| t.symbol.as_deref()) {
            Some(quote) => Some(format!("{}/{}", base, quote)),
            None => Some(String::from(base)),
        }
    }
}

/// Token metadata attached to a pair record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TokenInfo {
    /// Token contract/mint address.
    pub address: Option<String>,
    /// Human-readable token name.
    pub name: Option<String>,
    /// Ticker symbol.
    pub symbol: Option<String>,
}
