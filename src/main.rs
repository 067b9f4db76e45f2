use anyhow::Result;
use chrono::Utc;
use tracing::{error, info};

use tarkov_market_sync::config::AppConfig;
use tarkov_market_sync::logging;
use tarkov_market_sync::market::TarkovMarket;
use tarkov_market_sync::store::Store;

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_tracing("info");

    // Config is checked before any network activity happens.
    let cfg = match AppConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };

    // The market client is built before the store connects so no fallible
    // step can skip past `shutdown` once the connection exists.
    let market = TarkovMarket::new()?;
    let store = Store::connect(&cfg.mongo_uri).await?;

    run_once(&market, &store).await;

    store.shutdown().await;
    Ok(())
}

/// One fetch → persist pass. Fetch and persist failures are logged and
/// swallowed so the process still reaches teardown and exits 0; only
/// startup errors abort.
async fn run_once(market: &TarkovMarket, store: &Store) {
    let start = Utc::now();

    match market.fetch_items().await {
        Ok(items) => {
            if let Err(e) = store.upsert_items(&items).await {
                error!("Error inserting items: {e:?}");
            }
        }
        Err(e) => {
            error!("No items fetched, skipping: {e}");
        }
    }

    info!(
        elapsed_ms = (Utc::now() - start).num_milliseconds(),
        "sync pass finished"
    );
}
