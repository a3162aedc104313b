use super::args::Cli;
use super::handlers;
use crate::logging;
use anyhow::{Context, Result};
use tzplot_engine::Zone;
use tzplot_runtime::{ConfigStore, parse_request_time, parse_timezones};
use tzplot_types::{Config, PlotRequest};

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    let store = ConfigStore::resolve(cli.config.as_deref())?;
    let mut config = store
        .load()
        .with_context(|| format!("failed to load config from {}", store.path().display()))?;

    let changed = apply_overrides(&cli, &mut config)?;

    // A bad time must leave the stored configuration untouched
    let request = match cli.requested_time() {
        Some(text) => PlotRequest::at(parse_request_time(&config, text, Zone::System)?),
        None => PlotRequest::now(),
    };

    if changed {
        store
            .save(&config)
            .with_context(|| format!("failed to save config to {}", store.path().display()))?;
    }

    if config.live && request.allows_live() {
        handlers::live::handle(&config)
    } else {
        if config.live {
            tracing::info!("explicit time requested, plotting once");
        }
        handlers::plot::handle(&config, &request)
    }
}

/// Apply setting flags to the loaded configuration. Returns whether
/// anything was set, in which case the configuration is persisted.
fn apply_overrides(cli: &Cli, config: &mut Config) -> Result<bool> {
    let mut changed = false;

    if let Some(list) = &cli.timezones {
        config.timezones = parse_timezones(list)?;
        changed = true;
    }
    if let Some(symbols) = cli.symbols {
        config.style.symbols = symbols;
        changed = true;
    }
    if let Some(sort) = cli.sort {
        config.sorting.mode = sort;
        changed = true;
    }

    let flags = [
        (cli.tics, &mut config.tics),
        (cli.stretch, &mut config.stretch),
        (cli.colorize, &mut config.style.colorize),
        (cli.hours12, &mut config.hours12),
        (cli.live, &mut config.live),
        (cli.pin_local, &mut config.sorting.pin_local),
    ];
    for (flag, setting) in flags {
        if let Some(value) = flag {
            *setting = value;
            changed = true;
        }
    }

    if changed {
        tracing::debug!("configuration changed by flags");
    }
    Ok(changed)
}
