use crate::state::AppState;
use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use shared::{
    abstract_trait::reward::service::DynRewardQueryService,
    domain::responses::RewardSummaryResponse,
    errors::{AppErrorHttp, ErrorResponse},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/transactions/rewards/{customer_id}",
    tag = "Reward",
    params(("customer_id" = i64, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Reward points per month and in total", body = RewardSummaryResponse),
        (status = 404, description = "Customer has no transactions", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_reward_summary(
    Extension(service): Extension<DynRewardQueryService>,
    Path(customer_id): Path<i64>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let summary = service.calculate_rewards(customer_id).await?;

    Ok((StatusCode::OK, Json(summary)))
}

pub fn reward_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route(
            "/transactions/rewards/{customer_id}",
            get(get_reward_summary),
        )
        .layer(Extension(app_state.di_container.reward_query.service.clone()))
}
