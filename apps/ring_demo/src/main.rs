use std::env;

use app_ring::Ring;
use dotenvy::{dotenv, from_filename};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{app_common::AppError, config::DemoConfig};

pub mod app_common;
pub mod config;

fn load_env_for_workspace() {
    let _ = from_filename(concat!(env!("CARGO_MANIFEST_DIR"), "/.env"));
    let _ = from_filename(".env");
}

fn main() -> Result<(), AppError> {
    dotenv().ok();

    load_env_for_workspace();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cfg = DemoConfig::from_env()?;

    let ring = Ring::from_config(&cfg.ring);
    ring.add_nodes(&cfg.nodes);

    if ring.is_empty() {
        warn!("Ring has no slots, {} is empty", config::NODES_VAR);
    }

    let keys: Vec<String> = env::args().skip(1).collect();

    if keys.is_empty() {
        info!(
            "Ring ready: nodes={:?} replicas={} slots={}",
            ring.nodes(),
            ring.replicas(),
            ring.slot_count()
        );
        return Ok(());
    }

    for key in keys {
        let node = ring.locate(&key)?;
        info!("{key} -> {node}");
    }

    Ok(())
}
