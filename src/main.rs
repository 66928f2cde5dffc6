mod commands;
mod config;
mod constants;
mod presenter;
mod service;

use crate::constants::{CHANNEL_BUFFER_SIZE, DEFAULT_LOG_FILTER};
use anyhow::Context;
use bulletin_config::BulletinConfig;
use presenter::Presenter;
use tokio::{
    io::{AsyncBufReadExt, AsyncWriteExt, BufReader},
    sync::mpsc::channel,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    color_backtrace::install();
    init_logging();

    tracing::info!("bulletin {}", config::VERSION);
    let config = config::load();

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start tokio runtime")?;
    rt.block_on(serve(config))
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let registry = tracing_subscriber::registry().with(filter);

    #[cfg(feature = "systemd")]
    if let Ok(journald) = tracing_journald::layer() {
        registry.with(journald).init();
        return;
    }

    // stdout carries events, so logs go to stderr
    registry.with(fmt::layer().with_writer(std::io::stderr)).init();
}

async fn serve(config: BulletinConfig) -> anyhow::Result<()> {
    let (req_tx, req_rx) = channel(CHANNEL_BUFFER_SIZE);
    let (ev_tx, mut ev_rx) = channel(CHANNEL_BUFFER_SIZE);

    let presenter = Presenter::new(config.max_visible as usize);
    let service = tokio::spawn(service::run(presenter, req_rx, ev_tx));

    let writer = tokio::spawn(async move {
        let mut stdout = tokio::io::stdout();
        while let Some(event) = ev_rx.recv().await {
            let mut line = serde_json::to_vec(&event)?;
            line.push(b'\n');
            stdout.write_all(&line).await?;
            stdout.flush().await?;
        }
        anyhow::Ok(())
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("failed to read stdin")? {
        let request = commands::parse_line(&line)
            .and_then(|command| command.map(|c| c.into_request(&config)).transpose());

        match request {
            Ok(Some(request)) => {
                if req_tx.send(request).await.is_err() {
                    tracing::error!("Presenter stopped, no longer reading commands");
                    break;
                }
            }
            Ok(None) => {}
            Err(err) => tracing::warn!("Skipping command {line:?}: {err}"),
        }
    }

    drop(req_tx);
    service.await.context("presenter task failed")?;
    writer.await.context("event writer task failed")??;
    Ok(())
}
