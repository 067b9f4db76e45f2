use anyhow::{Context, Result};
use futures::future::try_join_all;
use mongodb::bson::{doc, Document};
use mongodb::options::{ClientOptions, ReplaceOptions};
use mongodb::{Client, Collection};
use tracing::info;

use crate::model::Item;

const ITEMS_COLLECTION: &str = "items";
/// Used when the connection string does not name a database.
const DEFAULT_DATABASE: &str = "tarkov";

/// Handle on the `items` collection. Constructed once at startup, shut down
/// once at exit, and passed by parameter wherever writes happen.
pub struct Store {
    client: Client,
    items: Collection<Item>,
}

impl Store {
    pub async fn connect(uri: &str) -> Result<Self> {
        let options = ClientOptions::parse(uri)
            .await
            .context("invalid mongo connection string")?;
        let client = Client::with_options(options)?;
        let db = client
            .default_database()
            .unwrap_or_else(|| client.database(DEFAULT_DATABASE));
        let items = db.collection::<Item>(ITEMS_COLLECTION);
        info!(db = %db.name(), "connected to store");
        Ok(Self { client, items })
    }

    /// Upsert every item keyed by `id`, all writes in flight at once.
    ///
    /// The combined wait fails as a whole if any single write rejects; there
    /// is no per-item accounting, and writes already applied stay applied.
    /// Replacing the full document with identical data is idempotent.
    pub async fn upsert_items(&self, items: &[Item]) -> Result<()> {
        let writes = items.iter().map(|item| {
            self.items.replace_one(
                id_filter(item),
                item,
                ReplaceOptions::builder().upsert(true).build(),
            )
        });
        try_join_all(writes)
            .await
            .context("item upsert batch failed")?;
        info!("{} items upserted", items.len());
        Ok(())
    }

    /// Release the connection pool. Called on every exit path.
    pub async fn shutdown(self) {
        self.client.shutdown().await;
    }
}

fn id_filter(item: &Item) -> Document {
    doc! { "id": &item.id }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson;

    fn sample_item() -> Item {
        Item {
            id: "5447a9cd4bdc2dbd208b4567".into(),
            name: "Colt M4A1".into(),
            short_name: "M4A1".into(),
            base_price: 25158.0,
            last_low_price: Some(24000.0),
        }
    }

    #[test]
    fn filter_matches_on_the_external_id() {
        let filter = id_filter(&sample_item());
        assert_eq!(
            filter.get_str("id").unwrap(),
            "5447a9cd4bdc2dbd208b4567"
        );
        assert_eq!(filter.len(), 1);
    }

    #[test]
    fn document_keeps_upstream_field_names() {
        let document = bson::to_document(&sample_item()).unwrap();
        assert_eq!(document.get_str("shortName").unwrap(), "M4A1");
        assert_eq!(document.get_f64("basePrice").unwrap(), 25158.0);
        assert_eq!(document.get_f64("lastLowPrice").unwrap(), 24000.0);
    }
}
