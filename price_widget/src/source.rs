//! Price sources: where the widget gets pair records from.
//!
//! `PriceSource` is the seam between the widget and the network. The real
//! implementation, `DexScreenerSource`, issues one blocking GET per call;
//! tests plug in closures instead.
use log::debug;
use price_common::net::pair_url;
use price_common::pair::PairsResponse;
use price_common::{PairRecord, PriceError, Result};
use reqwest::blocking::Client;
use std::time::Duration;

/// Capability to look up the first pair record for an address.
///
/// Implementations are called from worker threads, one call per request.
pub trait PriceSource: Send + Sync {
    /// Fetch the first record for `address`.
    ///
    /// Returns `PriceError::PairNotFound` when the service knows no such pair.
    fn fetch_pair(&self, address: &str) -> Result<PairRecord>;
}

impl<F> PriceSource for F
where
    F: Fn(&str) -> Result<PairRecord> + Send + Sync,
{
    fn fetch_pair(&self, address: &str) -> Result<PairRecord> {
        self(address)
    }
}

/// Blocking HTTP client for the DexScreener pairs endpoint.
pub struct DexScreenerSource {
    client: Client,
    base_url: String,
}

impl DexScreenerSource {
    /// Create a source for `base_url`. `timeout` of `None` waits indefinitely.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: String::from(base_url),
        })
    }
}

impl PriceSource for DexScreenerSource {
    fn fetch_pair(&self, address: &str) -> Result<PairRecord> {
        let url = pair_url(&self.base_url, address);
        debug!("GET {}", url);

        let response = self.client.get(&url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(PriceError::Http(status.as_u16()));
        }

        let body = response.bytes()?;
        let data: Option<PairsResponse> = serde_json::from_slice(&body)?;
        data.and_then(PairsResponse::into_first_pair)
            .ok_or(PriceError::PairNotFound)
    }
}
