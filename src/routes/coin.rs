use actix_web::{
    get,
    web::{self, ServiceConfig},
    HttpResponse, Responder,
};
use tracing::{info, warn};

use crate::{
    chart::project_price_history,
    models::views::{DetailView, ScreenState, LIST_HREF},
    utils::coingecko::CoinGecko,
};

#[get("/coin/{id}")]
pub async fn coin_detail(coingecko: web::Data<CoinGecko>, id: web::Path<String>) -> impl Responder {
    let id = id.into_inner();

    // Both requests belong to this handler's future; dropping it cancels both.
    let (detail, history) = tokio::join!(
        coingecko.fetch_asset_detail(&id),
        coingecko.fetch_price_history(&id)
    );

    let detail = match detail {
        Ok(detail) => detail,
        Err(err) => {
            if err.is_not_found() {
                info!(%id, "coin not found");
            } else {
                warn!(%id, error = %err, "failed to fetch coin data");
            }
            let state: ScreenState<DetailView> = ScreenState::NotFound {
                back: LIST_HREF.to_string(),
            };
            return HttpResponse::NotFound().json(state);
        }
    };

    let chart = match history {
        Ok(points) => project_price_history(&points),
        Err(err) => {
            warn!(%id, error = %err, "failed to fetch chart data, rendering empty series");
            Vec::new()
        }
    };

    HttpResponse::Ok().json(ScreenState::Loaded(DetailView::new(detail, chart)))
}

pub fn init(config: &mut ServiceConfig) {
    config.service(coin_detail);
}
