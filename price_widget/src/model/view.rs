//! What the widget currently shows.
//!
//! `PriceView` replaces three independent fields (price, loading flag, error)
//! with one tagged value, so a loading view can never also carry an error.
//! `ViewSnapshot` flattens it back for logging and assertions.
use price_common::format::format_usd;
use price_common::{PairRecord, PriceError};
use strum_macros::Display;

/// Line shown while a request is in flight.
pub const LOADING_TEXT: &str = "Loading price...";

/// Display state of the widget.
#[derive(Debug, Clone, PartialEq, Eq, Default, Display)]
pub enum PriceView {
    /// Nothing requested yet.
    #[default]
    #[strum(serialize = "idle")]
    Idle,
    /// A request is in flight.
    #[strum(serialize = "loading")]
    Loading,
    /// The lookup succeeded; the record may have carried no USD price.
    #[strum(serialize = "ready")]
    Ready(Option<String>),
    /// The lookup failed with a user-facing message.
    #[strum(serialize = "failed")]
    Failed(String),
}

/// Flat `{ price, loading, error }` view of a [`PriceView`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewSnapshot {
    /// Quoted USD price, if one is shown.
    pub price: Option<String>,
    /// Whether a request is in flight.
    pub loading: bool,
    /// Error message, if the last lookup failed.
    pub error: Option<String>,
}

impl PriceView {
    /// Convert the outcome of a lookup into the view it produces.
    pub fn from_result(result: Result<PairRecord, PriceError>) -> Self {
        match result {
            Ok(pair) => PriceView::Ready(pair.price_usd),
            Err(e) => PriceView::Failed(e.display_message()),
        }
    }

    /// Whether a request is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, PriceView::Loading)
    }

    /// Flatten into the three-field form.
    pub fn snapshot(&self) -> ViewSnapshot {
        match self {
            PriceView::Idle => ViewSnapshot::default(),
            PriceView::Loading => ViewSnapshot {
                loading: true,
                ..Default::default()
            },
            PriceView::Ready(price) => ViewSnapshot {
                price: price.clone(),
                ..Default::default()
            },
            PriceView::Failed(message) => ViewSnapshot {
                error: Some(message.clone()),
                ..Default::default()
            },
        }
    }

    /// Line to display, if any.
    ///
    /// A ready price that does not parse to a finite number shows nothing.
    pub fn render(&self) -> Option<String> {
        match self {
            PriceView::Idle => None,
            PriceView::Loading => Some(String::from(LOADING_TEXT)),
            PriceView::Failed(message) => Some(format!("Error: {}", message)),
            PriceView::Ready(price) => price.as_deref().and_then(format_usd),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_maps_price_verbatim() {
        let view = PriceView::from_result(Ok(PairRecord::with_price_usd("1.23")));
        assert_eq!(
            view.snapshot(),
            ViewSnapshot {
                price: Some("1.23".into()),
                loading: false,
                error: None
            }
        );
    }

    #[test]
    fn success_without_price_shows_nothing() {
        let view = PriceView::from_result(Ok(PairRecord::default()));
        assert_eq!(view, PriceView::Ready(None));
        assert_eq!(view.snapshot(), ViewSnapshot::default());
        assert_eq!(view.render(), None);
    }

    #[test]
    fn failures_map_to_messages() {
        let not_found = PriceView::from_result(Err(PriceError::PairNotFound));
        assert_eq!(not_found, PriceView::Failed("Pair not found".into()));

        let http = PriceView::from_result(Err(PriceError::Http(500)));
        assert_eq!(http.snapshot().error.as_deref(), Some("HTTP error! status: 500"));

        let blank = PriceView::from_result(Err(PriceError::Other(String::new())));
        assert_eq!(blank, PriceView::Failed("Unknown error".into()));
    }

    #[test]
    fn loading_snapshot_clears_other_fields() {
        assert_eq!(
            PriceView::Loading.snapshot(),
            ViewSnapshot {
                price: None,
                loading: true,
                error: None
            }
        );
    }

    #[test]
    fn renders_each_state() {
        assert_eq!(PriceView::Idle.render(), None);
        assert_eq!(PriceView::Loading.render().as_deref(), Some("Loading price..."));
        assert_eq!(
            PriceView::Failed("Pair not found".into()).render().as_deref(),
            Some("Error: Pair not found")
        );
        assert_eq!(
            PriceView::Ready(Some("1234.5".into())).render().as_deref(),
            Some("$1,234.5")
        );
        assert_eq!(PriceView::Ready(Some("n/a".into())).render(), None);
    }

    #[test]
    fn state_names() {
        assert_eq!(PriceView::Loading.to_string(), "loading");
        assert_eq!(PriceView::Ready(None).to_string(), "ready");
        assert_eq!(PriceView::Failed(String::new()).to_string(), "failed");
    }
}
