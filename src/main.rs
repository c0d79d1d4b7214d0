// Binary includes library modules - some public API items are only for library consumers
#![allow(unused)]

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::Event;

mod app;
mod config;
mod data;
mod events;
mod extract;
mod fetch;
mod poll;
mod ports;
mod ui;
mod vars;

use app::App;
use config::{Args, Settings};
use fetch::ExpvarClient;
use poll::Poller;
use ui::RenderSink;

fn main() -> Result<()> {
    let args = Args::parse();
    let settings = Settings::load(&args)?;

    let specs = vars::parse_vars(&settings.vars)?;
    let urls = settings.urls()?;

    let client = ExpvarClient::new(Duration::from_secs(settings.timeout))?;
    let poller = Poller::new(Box::new(client), specs);
    let app = App::new(poller, &urls);
    let sink = ui::create_sink(settings.dummy, app.target_count());

    run(app, sink, Duration::from_secs(settings.interval))
}

/// Drive the poll/render loop until a quit key.
///
/// The TUI runs synchronously in the main thread; each round executes
/// on the tokio runtime via `block_on`, so a round always joins before
/// the sink sees its state. A resize triggers an immediate refresh
/// round without resetting the interval phase.
fn run(mut app: App, mut sink: Box<dyn RenderSink>, interval: Duration) -> Result<()> {
    let rt = tokio::runtime::Runtime::new()?;

    // Startup round so the first frame has data, not placeholders.
    rt.block_on(app.run_round());
    sink.init(&app.dashboard())?;

    let mut last_tick = Instant::now();
    while app.running {
        if let Some(event) = events::poll_event(Duration::from_millis(100))? {
            match event {
                Event::Key(key) => events::handle_key_event(&mut app, key),
                Event::Resize(_, _) => {
                    rt.block_on(app.run_round());
                    sink.refresh(&app.dashboard())?;
                }
                _ => {}
            }
        }

        if last_tick.elapsed() >= interval {
            rt.block_on(app.run_round());
            sink.refresh(&app.dashboard())?;
            last_tick = Instant::now();
        }
    }

    sink.shutdown()
}
