//! Green Button to InfluxDB2 Forwarder
//!
//! This application scrapes hourly electricity usage from a utility's customer
//! portal, which offers no API, and forwards it to InfluxDB2 for storage and
//! visualization.
//!
//! # Architecture
//!
//! A single scrape loop runs the pipeline on a fixed interval (6 hours by
//! default). Each run logs in, requests a Green Button export for the last few
//! days, downloads and decodes it, and writes one point per published interval.
//!
//! # Features
//!
//! - Fresh portal session for every run
//! - Failed runs are logged and retried on the next tick
//! - Graceful shutdown on SIGTERM/SIGINT
//! - Timeout protection for hung runs

mod config;
mod error;
mod espi;
mod exporter;
mod influxdb;
mod model;
mod pipeline;
mod portal;


use crate::pipeline::Pipeline;
use chrono::Local;
use std::future::IntoFuture;
use std::sync::Arc;
use tokio::signal::ctrl_c;
use tokio::signal::unix::{signal, SignalKind};
use tokio::task::JoinError;
use tokio::time;
use tokio::time::{sleep, Duration};

/// Application entry point.
///
/// Initializes configuration, builds the pipeline, and supervises the scrape
/// task with signal handling for graceful shutdown.
#[tokio::main]
async fn main() {
    let app_config = config::load_app_config().expect("Failed to load AppConfig");
    tracing_subscriber::fmt()
        .with_max_level(app_config.log_level())
        .init();

    let scheduler_config =
        Arc::new(config::load_scheduler_config().expect("Failed to load SchedulerConfig"));
    let portal_config =
        Arc::new(config::load_portal_config().expect("Failed to load PortalConfig"));
    let root_certificates = portal_config
        .root_certificates()
        .expect("Failed to load root certificates");
    let influx_config = config::load_influx_config().expect("Failed to load InfluxConfig");
    let influx_client = Arc::new(
        influxdb::Client::new(influx_config, &root_certificates)
            .expect("Failed to build InfluxDB client"),
    );

    let pipeline = Arc::new(Pipeline::new(
        portal_config,
        root_certificates,
        influx_client,
    ));

    // Factory so the task can be recreated after it finishes or panics
    let create_scrape = || -> tokio::task::JoinHandle<()> {
        let config = Arc::clone(&scheduler_config);
        tokio::spawn(create_scrape_task(
            Arc::clone(&pipeline),
            Duration::from_secs(config.interval_sec),
            "green_button_scrape",
            config.task_timeout_seconds,
        ))
    };
    let mut scrape_task = create_scrape();

    let mut sig_term = signal(SignalKind::terminate()).expect("Failed to register SIGTERM handler");
    tracing::info!("Running... Press Ctrl-C or send SIGTERM to terminate.");
    loop {
        tokio::select! {
            _ = sig_term.recv() => {
                tracing::info!("Received SIGTERM. Exiting...");
                break;
            }
            _ = ctrl_c() => {
                tracing::info!("Received SIGINT. Exiting...");
                break;
            }
            result = &mut scrape_task => {
                handle_task_result("green_button_scrape", result);
                scrape_task = create_scrape();
            }
        }
    }
}

/// Wraps a future with a timeout so a hung portal cannot stall the loop.
///
/// Logs an error if the task times out but doesn't propagate it.
async fn with_timeout<F>(task_name: &'static str, future: F, timeout_seconds: u64)
where
    F: IntoFuture,
{
    let timeout_duration = Duration::from_secs(timeout_seconds);

    match time::timeout(timeout_duration, future).await {
        Ok(_) => {}
        Err(_) => tracing::error!("Task {} timed out.", task_name),
    }
}

/// Runs the pipeline once, then sleeps for `interval`.
///
/// A failed run is logged with the stage that failed; the next attempt
/// happens on the next tick, never sooner.
async fn create_scrape_task(
    pipeline: Arc<Pipeline>,
    interval: Duration,
    task_name: &'static str,
    timeout_seconds: u64,
) {
    with_timeout(
        task_name,
        async {
            match pipeline.run(Local::now()).await {
                Ok(report) => tracing::info!(
                    "Scrape finished ({}): {} interval readings",
                    task_name,
                    report.readings
                ),
                Err(e) => tracing::error!("Scrape failed ({}): {}", task_name, e),
            }
        },
        timeout_seconds,
    )
    .await;
    sleep(interval).await;
}

/// Logs how a supervised task ended before it is restarted.
fn handle_task_result(task_name: &str, result: Result<(), JoinError>) {
    match result {
        Ok(_) => {
            tracing::debug!("Task {} completed.", task_name);
        }
        Err(e) => {
            tracing::error!("Task {} failed: {:?}", task_name, e);
        }
    }
}
