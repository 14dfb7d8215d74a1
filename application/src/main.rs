use std::{io, sync::OnceLock};

use application::{console, seed, Args, Config};
use service::Service;
use tracing as log;
use tracing_subscriber::{
    filter::filter_fn,
    layer::{Layer as _, SubscriberExt as _},
    util::SubscriberInitExt as _,
};

static LOG_LEVEL: OnceLock<log::Level> = OnceLock::new();

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_writer(io::stderr)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || LOG_LEVEL
                            .get()
                            .copied()
                            .unwrap_or(log::Level::WARN)
                            >= *meta.level()
                })),
        )
        .init();

    _ = start();
}

fn start() -> Result<(), ()> {
    let Args { config, no_seed } = Args::parse().map_err(|e| {
        log::error!("failed to parse command line arguments: {e}");
    })?;

    let Config {
        service,
        seed: seed_config,
        console: console_config,
        log,
    } = Config::new(config).map_err(|e| {
        log::error!("failed to load `Config`: {e}");
    })?;

    LOG_LEVEL
        .set(log.level.into())
        .unwrap_or_else(|_| unreachable!("first initialization"));

    let mut service = Service::new(service.into());
    if seed_config.enabled && !no_seed {
        seed(&mut service).map_err(|e| {
            log::error!("failed to load sample data: {e}");
        })?;
    }

    console::run(
        &mut service,
        io::stdin().lock(),
        io::stdout().lock(),
        &console_config.prompt,
    )
    .map_err(|e| {
        log::error!("console failed: {e}");
    })
}
