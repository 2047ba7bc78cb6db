//! Pair Price Widget: looks up the USD quote of a DEX trading pair on
//! DexScreener and shows it as one of three states: loading, error, or the
//! formatted price.
//!
//! Usage example (CLI):
//! ```bash
//! price_widget --pair-address 0x88e6a0c2ddd26feeb64f039a2c41296fcb3f5640
//! price_widget --pair-address 0x88e6... --interactive
//! ```
//!
//! In interactive mode every stdin line is an action: an empty line re-fetches
//! the current address, `q` or `quit` exits, anything else becomes the new
//! address and is fetched. Stdin lines, fetch outcomes and Ctrl+C are
//! multiplexed with `crossbeam_channel::select!` on the main thread, which is
//! the only writer of the widget state.
#![warn(missing_docs)]
mod args;
mod model;
mod source;
mod widget;

use crate::args::{Args, normalize_value};
use crate::model::view::PriceView;
use crate::source::{DexScreenerSource, PriceSource};
use crate::widget::PriceWidget;
use clap::Parser;
use crossbeam_channel::{Receiver, select, unbounded};
use log::{debug, error, info};
use price_common::PriceError;
use price_common::Result;
use std::io::{self, BufRead};
use std::thread;
use std::time::Duration;

/// Heading printed above the widget output.
const TITLE: &str = "Base Token Price";

/// One action read from the address input.
#[derive(Debug, PartialEq, Eq)]
enum InputAction {
    /// Re-fetch the current address.
    Refetch,
    /// Replace the address and fetch it.
    Fetch(String),
    /// Leave interactive mode.
    Quit,
}

impl InputAction {
    fn parse(line: &str) -> Self {
        match line.trim() {
            "" => InputAction::Refetch,
            "q" | "quit" => InputAction::Quit,
            address => InputAction::Fetch(String::from(address)),
        }
    }
}

fn main() -> Result<(), PriceError> {
    init_logger();
    let args = Args::parse();

    let pair_address = normalize_value(&args.pair_address);
    let api_url = normalize_value(&args.api_url);
    let timeout = args.timeout_secs.map(Duration::from_secs);

    let source = DexScreenerSource::new(&api_url, timeout)?;
    info!("Using price service at {}", api_url);
    let mut widget = PriceWidget::new(source, &pair_address);

    println!("{}", TITLE);
    if args.interactive {
        run_interactive(&mut widget)
    } else {
        run_once(&mut widget)
    }
}

/// Fetch once for the start-up address, show the result and return.
fn run_once<S: PriceSource + 'static>(widget: &mut PriceWidget<S>) -> Result<(), PriceError> {
    widget.initialize();
    print_view(widget.view());
    let view = widget.wait()?;
    print_view(view);
    Ok(())
}

/// Fetch on start-up, then on every input line until quit, EOF or Ctrl+C.
fn run_interactive<S: PriceSource + 'static>(
    widget: &mut PriceWidget<S>,
) -> Result<(), PriceError> {
    let (shutdown_tx, shutdown_rx) = unbounded::<()>();
    ctrlc::set_handler(move || {
        info!("Ctrl+C received. Shutting down...");
        let _ = shutdown_tx.send(());
    })
    .map_err(|e| PriceError::Format(format!("Error setting Ctrl+C handler: {}", e)))?;

    let input_rx = spawn_input_reader();
    let outcomes = widget.outcomes().clone();

    info!("Enter a pair address to fetch it, an empty line to re-fetch, `q` to quit.");
    widget.initialize();
    print_view(widget.view());

    loop {
        select! {
            recv(input_rx) -> line => match line {
                Ok(Ok(line)) => match InputAction::parse(&line) {
                    InputAction::Quit => break,
                    InputAction::Refetch => {
                        debug!("Re-fetching {}", widget.input_address());
                        widget.refetch();
                        print_view(widget.view());
                    }
                    InputAction::Fetch(address) => {
                        widget.set_input_address(&address);
                        widget.refetch();
                        print_view(widget.view());
                    }
                },
                Ok(Err(e)) => {
                    error!("Failed to read input: {}", e);
                    return Err(e);
                }
                Err(_) => {
                    debug!("Input closed");
                    break;
                }
            },
            recv(outcomes) -> outcome => match outcome {
                Ok(outcome) => {
                    if widget.apply(outcome) {
                        debug!("View: {:?}", widget.view().snapshot());
                        print_view(widget.view());
                    }
                }
                Err(e) => return Err(PriceError::ChannelRecv(e.to_string())),
            },
            recv(shutdown_rx) -> _ => break,
        }
    }
    info!("Widget stopping...");
    Ok(())
}

/// Read stdin lines on a background thread. The channel closes on EOF.
fn spawn_input_reader() -> Receiver<Result<String, PriceError>> {
    let (tx, rx) = unbounded();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let line = line.map_err(PriceError::Io);
            let failed = line.is_err();
            if tx.send(line).is_err() || failed {
                break;
            }
        }
    });
    rx
}

fn print_view(view: &PriceView) {
    debug!("State: {}", view);
    if let Some(line) = view.render() {
        println!("{}", line);
    }
}

fn init_logger() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
}
