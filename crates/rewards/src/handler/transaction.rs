use crate::state::AppState;
use axum::{
    Json,
    extract::{Extension, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use shared::{
    abstract_trait::reward::service::DynRewardQueryService,
    domain::{
        requests::FindTransactions,
        responses::TransactionResponse,
    },
    errors::{AppErrorHttp, ErrorResponse},
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/transactions",
    tag = "Transaction",
    params(FindTransactions),
    responses(
        (status = 200, description = "Transactions matching the filters", body = Vec<TransactionResponse>),
        (status = 400, description = "Malformed customer id or month, or reversed date range", body = ErrorResponse),
        (status = 404, description = "No transactions in the selected window", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn list_transactions(
    Extension(service): Extension<DynRewardQueryService>,
    Query(params): Query<FindTransactions>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let customer_id = params.parsed_customer_id()?;
    let month = params.parsed_month()?;

    let transactions = service.list_transactions(customer_id, month).await?;

    Ok((StatusCode::OK, Json(transactions)))
}

pub fn transaction_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/transactions", get(list_transactions))
        .layer(Extension(app_state.di_container.reward_query.service.clone()))
}
