// Library crate: public API items may not be used by the binary
#![allow(unused)]

//! # varwatch
//!
//! A terminal dashboard for monitoring Go expvar-style introspection
//! endpoints.
//!
//! varwatch polls each configured target's `/debug/vars` endpoint on a
//! fixed interval, extracts a user-specified set of typed variables
//! from the JSON document, derives per-interval deltas for cumulative
//! counters, and keeps a bounded rolling history per variable for
//! sparkline display.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                         Application                          │
//! │  ┌─────────┐    ┌──────────┐    ┌─────────┐    ┌──────────┐  │
//! │  │  poll   │───▶│   data   │───▶│   app   │───▶│    ui    │  │
//! │  │(rounds) │    │ (series) │    │(snapshot)    │ (sinks)  │  │
//! │  └────┬────┘    └──────────┘    └─────────┘    └──────────┘  │
//! │       │                                                      │
//! │       ▼                                                      │
//! │  ┌─────────┐    ┌─────────┐                                  │
//! │  │  fetch  │───▶│ extract │    ExpvarClient | scripted mock  │
//! │  │ (HTTP)  │    │ (paths) │                                  │
//! │  └─────────┘    └─────────┘                                  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`vars`]**: the `[kind:]path[ name]` variable spec mini-language
//! - **[`ports`]**: expansion of port/URL range expressions into target URLs
//! - **[`fetch`]**: bounded-timeout HTTP retrieval behind the
//!   [`ExpvarSource`] trait, with a typed error taxonomy
//! - **[`extract`]**: path resolution against the fetched JSON tree
//! - **[`data`]**: per-target status and per-variable delta/history state
//! - **[`poll`]**: concurrent, failure-isolated polling rounds
//! - **[`app`]**: round bookkeeping and the per-round [`Dashboard`] snapshot
//! - **[`ui`]**: render sinks (multi-target table, single-target panels,
//!   headless console), selected at startup
//!
//! ## Usage
//!
//! ```bash
//! varwatch --ports "8080"
//! varwatch --ports "23000-23010,https://example.com:80-81" -i 1
//! varwatch --ports "1234" --vars "mem:memstats.Alloc,duration:Response.Mean,Goroutines"
//! ```
//!
//! ## Failure isolation
//!
//! One unreachable target costs at most the fetch timeout and never
//! stalls the other targets or the UI; one missing variable path
//! degrades only that variable's series. No polling error crosses the
//! scheduler boundary.

pub mod app;
pub mod config;
pub mod data;
pub mod events;
pub mod extract;
pub mod fetch;
pub mod poll;
pub mod ports;
pub mod ui;
pub mod vars;

// Re-export main types for convenience
pub use app::{App, Dashboard};
pub use data::{Series, Target, TargetStatus, HISTORY_CAPACITY};
pub use extract::ExtractError;
pub use fetch::{ExpvarClient, ExpvarSource, FetchError};
pub use poll::Poller;
pub use ports::parse_ports;
pub use ui::{create_sink, ConsoleSink, MultiView, RenderSink, SingleView, SinkKind};
pub use vars::{parse_vars, SpecError, VarKind, VarSpec};
