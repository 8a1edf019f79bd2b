//! # roomdup — room duplication tool
//!
//! Composition root that wires the adapters together and runs one
//! duplication.
//!
//! ## Responsibilities
//! - Parse command-line flags and configuration (config file, env vars)
//! - Install the tracing subscriber
//! - Construct the configuration store, resolver and UI adapters
//! - Run the duplication service and log its report
//!
//! Every outcome, including failures, exits with status 0; the logs carry
//! the result.
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod cli;
mod config;

use roomdup_adapter_dns_hickory::HickoryResolver;
use roomdup_adapter_storage_sqlx::SqlxConfigurationStore;
use roomdup_adapter_ui_fs::FsUiConfigRepository;
use roomdup_app::services::duplication_service::{
    DuplicationReport, DuplicationRequest, DuplicationService,
};
use roomdup_domain::label::RoomLabel;
use tracing_subscriber::EnvFilter;

use crate::cli::Args;
use crate::config::{Config, LoggingConfig};

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|err| {
        eprintln!("invalid log filter {filter:?}: {err}");
        EnvFilter::new("info")
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn parse_labels(args: &Args) -> Option<(RoomLabel, RoomLabel)> {
    if args.newroom.is_empty() || args.oldroom.is_empty() {
        tracing::error!("cannot continue without old room and new room information");
        return None;
    }
    let old = match args.oldroom.parse::<RoomLabel>() {
        Ok(label) => label,
        Err(err) => {
            tracing::error!(%err, "invalid old room");
            return None;
        }
    };
    let new = match args.newroom.parse::<RoomLabel>() {
        Ok(label) => label,
        Err(err) => {
            tracing::error!(%err, "invalid new room");
            return None;
        }
    };
    Some((old, new))
}

fn resolver(use_dns: bool) -> Option<HickoryResolver> {
    if !use_dns {
        return None;
    }
    match HickoryResolver::from_system_conf() {
        Ok(resolver) => Some(resolver),
        Err(err) => {
            tracing::warn!(%err, "dns unavailable, devices get the fallback address");
            None
        }
    }
}

fn log_report(report: &DuplicationReport) {
    tracing::info!(
        room_id = %report.room.id,
        devices_created = report.mapping.len(),
        devices_failed = report.devices_failed,
        ports_created = report.ports.created,
        ports_failed = report.ports.failed,
        ui = ?report.ui,
        "duplication finished"
    );
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Args::parse_normalized();

    let config = match Config::load() {
        Ok(config) => config,
        Err(err) => {
            init_tracing(&LoggingConfig::default().filter);
            tracing::error!(%err, "problem loading configuration");
            return;
        }
    };
    init_tracing(&config.logging.filter);

    let Some((old_room, new_room)) = parse_labels(&args) else {
        return;
    };

    // Store
    let db_config = roomdup_adapter_storage_sqlx::Config {
        database_url: config.database_url(),
    };
    let db = match db_config.build() {
        Ok(db) => db,
        Err(err) => {
            tracing::error!(%err, "problem opening the configuration database");
            return;
        }
    };
    let store = SqlxConfigurationStore::new(db.pool().clone());

    // Services
    let ui = FsUiConfigRepository::new(config.ui.directory.clone());
    let service = DuplicationService::new(store, resolver(args.usedns), ui);

    let request = DuplicationRequest {
        old_room,
        new_room,
        use_dns: args.usedns,
        duplicate_ui: args.dupui,
    };
    match service.duplicate(&request).await {
        Ok(report) => log_report(&report),
        Err(err) => tracing::error!(%err, "duplication aborted"),
    }
}
