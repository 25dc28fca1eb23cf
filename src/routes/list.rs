use actix_web::{
    get,
    web::{self, ServiceConfig},
    HttpResponse, Responder,
};
use serde::Deserialize;
use tracing::debug;

use crate::{
    models::views::{AssetCard, DisplayMode, ListView, ScreenState},
    pipeline::{filter_and_sort, SortKey},
    snapshot::{Snapshot, SnapshotStore},
};

#[derive(Deserialize, Debug, Default)]
pub struct ListQuery {
    search: Option<String>,
    sort: Option<String>,
    view: Option<String>,
}

#[get("/")]
pub async fn asset_list(
    store: web::Data<SnapshotStore>,
    query: web::Query<ListQuery>,
) -> impl Responder {
    let query = query.into_inner();
    let state = match store.current().await {
        Snapshot::Loading => ScreenState::Loading,
        Snapshot::Failed => ScreenState::Empty,
        Snapshot::Loaded(assets) if assets.is_empty() => ScreenState::Empty,
        Snapshot::Loaded(assets) => {
            let search = query.search.unwrap_or_default();
            let sort = SortKey::from_param(query.sort.as_deref());
            if sort.is_none() {
                debug!(sort = ?query.sort, "unrecognized sort key, keeping snapshot order");
            }
            let listed = filter_and_sort(&assets, &search, sort);

            ScreenState::Loaded(ListView {
                search,
                sort: sort.map(|key| key.as_str()),
                mode: DisplayMode::from_param(query.view.as_deref()),
                total: assets.len(),
                assets: listed.iter().map(AssetCard::from).collect(),
            })
        }
    };
    HttpResponse::Ok().json(state)
}

pub fn init(config: &mut ServiceConfig) {
    config.service(asset_list);
}
