//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod vehicles;

use axum::Router;
use axum::routing::{get, post, put};

use parklot_app::ports::VehicleRepository;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: VehicleRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/parking/entries", post(vehicles::enter::<R>))
        .route("/parking/exits/{plate}", put(vehicles::exit::<R>))
        .route("/parking/active", get(vehicles::list_active::<R>))
        .route("/parking/history", get(vehicles::list_history::<R>))
        .route("/parking/cost/{plate}", get(vehicles::cost::<R>))
}
