//! Lotgate gateway binary.
//!
//! Wires the directory, coordinator, bus listener, local scanner, and
//! HTTP server together and runs until killed.

use anyhow::Context;
use lotgate_bus::{AnyPublisher, BusConfig, GateTrigger, ListenerConfig, MqttBus, run_listener};
use lotgate_directory::{Database, DatabaseConfig, SqliteUserDirectory};
use lotgate_gateway::{AppState, GatewayConfig, router};
use lotgate_hardware::{AnyReader, LocalScanner, mock::MockReader};
use lotgate_verify::VerificationCoordinator;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = GatewayConfig::from_env().context("loading configuration")?;
    info!(?config, "starting lotgate gateway");

    // Directory
    let db = Database::new(DatabaseConfig::new(&config.database_path))
        .await
        .context("opening directory database")?;
    let directory = Arc::new(SqliteUserDirectory::new(db.pool().clone()));

    // Verification core
    let coordinator = VerificationCoordinator::new(Arc::clone(&directory));

    // Message bus: one client for publishing, its event loop driven by
    // the listener task. The listener owns reconnection.
    let bus_config = BusConfig::new(&config.broker_host, config.broker_port);
    let (bus, eventloop) = MqttBus::connect(&bus_config);

    let listener_config = ListenerConfig {
        tag_topic: config.tag_topic.clone(),
        ..ListenerConfig::default()
    };
    let listener_coordinator = coordinator.clone();
    tokio::spawn(run_listener(
        bus.client(),
        eventloop,
        listener_config,
        move |payload| {
            let coordinator = listener_coordinator.clone();
            async move { coordinator.handle_tag_event(&payload).await }
        },
    ));

    let gate = GateTrigger::with_topic(
        Arc::new(AnyPublisher::Mqtt(bus)),
        config.gate_topic.clone(),
        lotgate_core::constants::GATE_OPEN_COMMAND,
    );

    // Local reader. The mock backend is the only one wired up so far;
    // keep its handle alive for the life of the process so the reader
    // reports "nothing presented" rather than "disconnected".
    let (reader, _reader_handle) = MockReader::new();
    let scanner = LocalScanner::new(AnyReader::Mock(reader), config.local_read_timeout);

    let state = AppState {
        coordinator,
        directory,
        gate,
        scanner,
        bus_scan_wait: config.bus_scan_wait,
    };

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("binding {}", config.bind_addr))?;
    info!(addr = %config.bind_addr, "HTTP server listening");

    axum::serve(listener, router(state))
        .await
        .context("HTTP server exited")?;

    Ok(())
}
