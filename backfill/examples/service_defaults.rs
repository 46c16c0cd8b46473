//! Example filling a service configuration with engine settings taken from
//! `BACKFILL_*` environment variables.
//!
//! Run with `BACKFILL_TAG_NAME=staging` to switch to the staging defaults.

use std::collections::BTreeMap;
use std::io::{self, Write};
use std::time::Duration;

use backfill::{Fill, FillerSettings};

/// Connection pool limits.
#[derive(Debug, Default, Fill)]
#[expect(dead_code, reason = "fields are only read through Debug")]
struct Pool {
    #[fill(default = "16", staging = "4")]
    max_connections: u32,
    #[fill(default = "30s", staging = "2m")]
    idle_timeout: Duration,
}

/// Top-level service configuration.
#[derive(Debug, Default, Fill)]
#[expect(dead_code, reason = "fields are only read through Debug")]
struct ServiceConfig {
    #[fill(default = "0.0.0.0:8080", staging = "127.0.0.1:9080")]
    listen: String,
    #[fill(default = "[info]", staging = "[debug,trace]")]
    log_levels: Vec<String>,
    #[fill(default = "{eu:3,us:2}")]
    replicas: BTreeMap<String, u8>,
    pool: Pool,
    #[fill(default = "omit")]
    overrides: Option<Pool>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filler = FillerSettings::from_env()?.build();
    let mut config = ServiceConfig {
        listen: std::env::args().nth(1).unwrap_or_default(),
        ..ServiceConfig::default()
    };
    filler.fill(&mut config);

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{config:#?}")?;
    Ok(())
}
