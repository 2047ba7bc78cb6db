//! The price widget controller.
//!
//! `PriceWidget` owns the input address and the current [`PriceView`]. Each
//! fetch runs on its own worker thread and reports back over a crossbeam
//! channel tagged with a request id. Only the outcome of the latest issued
//! request is applied; earlier ones that resolve late are dropped, so a slow
//! response can never overwrite a newer one. In-flight requests are not
//! cancelled. A source that panics yields a failed outcome.
use crate::model::view::PriceView;
use crate::source::PriceSource;
use crossbeam_channel::{Receiver, Sender, unbounded};
use log::{debug, info};
use price_common::{PairRecord, PriceError, Result};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread;

/// Result of one request, delivered by its worker thread.
#[derive(Debug)]
pub struct FetchOutcome {
    /// Id returned by the `refetch` call that issued the request.
    pub request_id: u64,
    /// Address the request was issued for.
    pub address: String,
    /// What the source returned.
    pub result: Result<PairRecord>,
}

/// Fetches and holds the quoted price for a pair address.
pub struct PriceWidget<S> {
    source: Arc<S>,
    input_address: String,
    view: PriceView,
    latest_request: u64,
    outcome_tx: Sender<FetchOutcome>,
    outcome_rx: Receiver<FetchOutcome>,
}

impl<S: PriceSource + 'static> PriceWidget<S> {
    /// Create an idle widget for `pair_address`.
    pub fn new(source: S, pair_address: &str) -> Self {
        let (outcome_tx, outcome_rx) = unbounded();
        Self {
            source: Arc::new(source),
            input_address: String::from(pair_address),
            view: PriceView::Idle,
            latest_request: 0,
            outcome_tx,
            outcome_rx,
        }
    }

    /// Issue the first request for the address given at construction.
    pub fn initialize(&mut self) -> u64 {
        self.refetch()
    }

    /// Current contents of the address input.
    pub fn input_address(&self) -> &str {
        &self.input_address
    }

    /// Replace the contents of the address input. Does not fetch.
    pub fn set_input_address(&mut self, address: &str) {
        self.input_address = String::from(address);
    }

    /// Issue one request for the current input address.
    ///
    /// The view switches to `Loading` immediately. Returns the request id.
    pub fn refetch(&mut self) -> u64 {
        self.latest_request += 1;
        let request_id = self.latest_request;
        let address = self.input_address.clone();
        self.view = PriceView::Loading;
        info!("Request #{} issued for pair {}", request_id, address);

        let source = Arc::clone(&self.source);
        let tx = self.outcome_tx.clone();
        thread::spawn(move || {
            let result = panic::catch_unwind(AssertUnwindSafe(|| source.fetch_pair(&address)))
                .unwrap_or_else(|payload| Err(PriceError::Other(panic_message(payload.as_ref()))));
            let outcome = FetchOutcome {
                request_id,
                address,
                result,
            };
            if let Err(e) = tx.send(outcome) {
                debug!("Request #{} resolved after the widget was dropped: {}", request_id, e);
            }
        });
        request_id
    }

    /// Channel on which worker threads deliver outcomes, for use with `select!`.
    /// Received outcomes must be handed to [`Self::apply`].
    pub fn outcomes(&self) -> &Receiver<FetchOutcome> {
        &self.outcome_rx
    }

    /// Apply `outcome` if it belongs to the latest request.
    ///
    /// Returns `false` when the outcome was stale and discarded.
    pub fn apply(&mut self, outcome: FetchOutcome) -> bool {
        if outcome.request_id != self.latest_request {
            debug!(
                "Dropping stale response #{} for {} (latest is #{})",
                outcome.request_id, outcome.address, self.latest_request
            );
            return false;
        }

        match &outcome.result {
            Ok(pair) => info!(
                "Request #{} resolved: {} price_usd={:?}",
                outcome.request_id,
                pair.label().unwrap_or_else(|| outcome.address.clone()),
                pair.price_usd
            ),
            Err(e) => info!("Request #{} failed: {}", outcome.request_id, e),
        }
        self.view = PriceView::from_result(outcome.result);
        true
    }

    /// Block until the latest request resolves, then return the view.
    ///
    /// Returns immediately when nothing is in flight.
    pub fn wait(&mut self) -> Result<&PriceView> {
        while self.view.is_loading() {
            let outcome = self
                .outcome_rx
                .recv()
                .map_err(|e| PriceError::ChannelRecv(e.to_string()))?;
            self.apply(outcome);
        }
        Ok(&self.view)
    }

    /// Current display state.
    pub fn view(&self) -> &PriceView {
        &self.view
    }
}

/// Text of a panic payload, empty when it carries no string.
fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        String::from(*message)
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        String::new()
    }
}
