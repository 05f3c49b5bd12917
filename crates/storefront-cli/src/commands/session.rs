use std::sync::Arc;

use anyhow::{Context, Result};
use serde_json::json;
use storefront_core::session::{LocalStore, SessionService};

/// Prints the session state under `session_key` and every stored entry.
pub async fn show(store: Arc<dyn LocalStore>, session_key: &str) -> Result<()> {
    let entries = store
        .entries()
        .await
        .context("Failed to read the local store")?;
    let state = SessionService::with_key(store, session_key).load().await;

    let report = json!({
        "session": state,
        "entries": entries,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

pub async fn clear(store: Arc<dyn LocalStore>) -> Result<()> {
    store
        .clear()
        .await
        .context("Failed to clear the local store")?;
    println!("Local store cleared");
    Ok(())
}
