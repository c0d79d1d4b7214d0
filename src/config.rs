//! Configuration loading and merging.
//!
//! Precedence, lowest to highest: built-in defaults, an optional
//! `varwatch.toml` in the working directory (or an explicit
//! `--config` file), `VARWATCH_*` environment variables, CLI flags.
//! The result is one immutable [`Settings`] value handed by reference
//! into the parser and scheduler; nothing reads configuration through
//! globals.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;

use crate::ports::parse_ports;
use crate::vars::SpecError;

/// Default vars: the Go runtime memstats most worth watching.
pub const DEFAULT_VARS: &str = "mem:memstats.Alloc,mem:memstats.Sys,mem:memstats.HeapAlloc,\
mem:memstats.HeapInuse,duration:memstats.PauseTotalNs,counter:memstats.NumGC";

/// Default introspection endpoint exposed by Go's expvar package.
pub const DEFAULT_ENDPOINT: &str = "/debug/vars";

#[derive(Parser, Debug, Default)]
#[command(name = "varwatch")]
#[command(about = "Terminal dashboard for monitoring expvar introspection endpoints")]
pub struct Args {
    /// Ports/URLs for accessing services expvars (start-end,port2,https://host:port)
    #[arg(short, long)]
    pub ports: Option<String>,

    /// Vars to monitor (comma-separated, [kind:]path[ name])
    #[arg(short, long)]
    pub vars: Option<String>,

    /// Polling interval in seconds
    #[arg(short, long)]
    pub interval: Option<u64>,

    /// URL endpoint for expvars
    #[arg(short, long)]
    pub endpoint: Option<String>,

    /// Per-fetch timeout in seconds
    #[arg(short, long)]
    pub timeout: Option<u64>,

    /// Use dummy (console) output
    #[arg(short, long)]
    pub dummy: bool,

    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Fully merged, immutable configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub ports: String,
    pub vars: String,
    pub interval: u64,
    pub endpoint: String,
    pub timeout: u64,
    pub dummy: bool,
}

impl Settings {
    /// Merge defaults, config file, environment, and CLI flags.
    pub fn load(args: &Args) -> Result<Self> {
        let mut builder = Config::builder()
            .set_default("ports", "")?
            .set_default("vars", DEFAULT_VARS)?
            .set_default("interval", 5u64)?
            .set_default("endpoint", DEFAULT_ENDPOINT)?
            .set_default("timeout", 1u64)?
            .set_default("dummy", false)?
            .add_source(File::with_name("varwatch").required(false));

        if let Some(path) = &args.config {
            builder = builder.add_source(File::from(path.as_path()));
        }

        builder = builder.add_source(Environment::with_prefix("VARWATCH").try_parsing(true));

        if let Some(ports) = &args.ports {
            builder = builder.set_override("ports", ports.as_str())?;
        }
        if let Some(vars) = &args.vars {
            builder = builder.set_override("vars", vars.as_str())?;
        }
        if let Some(interval) = args.interval {
            builder = builder.set_override("interval", interval)?;
        }
        if let Some(endpoint) = &args.endpoint {
            builder = builder.set_override("endpoint", endpoint.as_str())?;
        }
        if let Some(timeout) = args.timeout {
            builder = builder.set_override("timeout", timeout)?;
        }
        if args.dummy {
            builder = builder.set_override("dummy", true)?;
        }

        let settings: Settings = builder.build()?.try_deserialize()?;
        if settings.ports.is_empty() {
            anyhow::bail!("no targets given; pass --ports or set ports in the config file");
        }
        Ok(settings)
    }

    /// Expand the ports expression and append the endpoint path,
    /// yielding one URL per target in configuration order.
    pub fn urls(&self) -> Result<Vec<String>, SpecError> {
        Ok(parse_ports(&self.ports)?
            .into_iter()
            .map(|base| format!("{}{}", base, self.endpoint))
            .collect())
    }
}
