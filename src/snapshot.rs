use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{error, info};

use crate::models::AssetSummary;
use crate::utils::coingecko::CoinGecko;

#[derive(Debug, Clone, PartialEq)]
pub enum Snapshot {
    Loading,
    Failed,
    Loaded(Arc<Vec<AssetSummary>>),
}

/// The asset list shared by list-screen requests. Written by [`SnapshotStore::load`],
/// read by handlers.
#[derive(Clone)]
pub struct SnapshotStore {
    inner: Arc<RwLock<Snapshot>>,
}

impl Default for SnapshotStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotStore {
    pub fn new() -> Self {
        SnapshotStore {
            inner: Arc::new(RwLock::new(Snapshot::Loading)),
        }
    }

    #[cfg(test)]
    pub fn with_assets(assets: Vec<AssetSummary>) -> Self {
        SnapshotStore {
            inner: Arc::new(RwLock::new(Snapshot::Loaded(Arc::new(assets)))),
        }
    }

    pub async fn current(&self) -> Snapshot {
        self.inner.read().await.clone()
    }

    pub async fn replace(&self, snapshot: Snapshot) {
        *self.inner.write().await = snapshot;
    }

    /// Fetches the asset list once. A failure leaves the store in `Failed`.
    pub async fn load(&self, coingecko: &CoinGecko) {
        let snapshot = match coingecko.fetch_asset_list().await {
            Ok(assets) => {
                info!(count = assets.len(), "asset snapshot loaded");
                Snapshot::Loaded(Arc::new(assets))
            }
            Err(err) => {
                error!(error = %err, "failed to fetch asset list");
                Snapshot::Failed
            }
        };
        self.replace(snapshot).await;
    }
}
